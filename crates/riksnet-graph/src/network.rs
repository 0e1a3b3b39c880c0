//! A module for working with attribute-bearing networks.

use std::collections::BTreeSet;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::aggregate::CoauthorGraph;
use crate::edge::Edge;

/// A node as a mapping of attribute names to values; must carry `id`.
pub type Record = Map<String, Value>;

/// A node list plus an edge list, as handed to plotting tools.
///
/// Nodes are free-form records. When every node has numeric `x` and `y`
/// attributes the network carries its own layout.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Network {
    nodes: Vec<Record>,
    edges: Vec<Edge<Value>>,
}

impl Network {
    /// Creates a network from node records and edges.
    pub fn new(nodes: Vec<Record>, edges: Vec<Edge<Value>>) -> Self {
        Self { nodes, edges }
    }

    /// Creates a network from bare edges; nodes are the endpoints in
    /// first-seen order, each a record with only an `id`.
    ///
    /// # Examples
    ///
    /// ```
    /// use riksnet_graph::{Edge, Network};
    ///
    /// let network = Network::from_edges([Edge::new(1, 2), Edge::new(2, 3)]);
    /// assert_eq!(network.nodes().len(), 3);
    /// ```
    pub fn from_edges<T, I>(edges: I) -> Self
    where
        T: Into<Value>,
        I: IntoIterator<Item = Edge<T>>,
    {
        let edges: Vec<Edge<Value>> = edges.into_iter().map(|e| e.map(Into::into)).collect();
        let mut ids: Vec<&Value> = Vec::new();
        for edge in &edges {
            for id in [&edge.from, &edge.to] {
                if !ids.contains(&id) {
                    ids.push(id);
                }
            }
        }
        let nodes = ids.into_iter().map(|id| record([("id", id.clone())])).collect();
        Self::new(nodes, edges)
    }

    pub fn nodes(&self) -> &[Record] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge<Value>] {
        &self.edges
    }

    /// Ids of all nodes, in node order (`Null` for a record without one)
    pub fn node_ids(&self) -> Vec<&Value> {
        self.nodes
            .iter()
            .map(|n| n.get("id").unwrap_or(&Value::Null))
            .collect()
    }

    /// Union of the attribute names over all nodes
    pub fn keys(&self) -> BTreeSet<&str> {
        self.nodes
            .iter()
            .flat_map(|n| n.keys().map(String::as_str))
            .collect()
    }

    /// Whether every node has numeric `x` and `y`
    pub fn has_layout(&self) -> bool {
        !self.nodes.is_empty() && self.nodes.iter().all(|n| position(n).is_some())
    }

    /// Node positions keyed by id, when the network has a layout
    pub fn layout(&self) -> Option<Vec<(&Value, [f64; 2])>> {
        self.nodes
            .iter()
            .map(|n| Some((n.get("id")?, position(n)?)))
            .collect()
    }

    /// Number of edges touching `id`, a self-loop counting twice
    pub fn degree(&self, id: &Value) -> usize {
        self.edges
            .iter()
            .map(|e| usize::from(&e.from == id) + usize::from(&e.to == id))
            .sum()
    }
}

impl From<CoauthorGraph> for Network {
    fn from(graph: CoauthorGraph) -> Self {
        let nodes = graph
            .nodes
            .into_iter()
            .map(|n| {
                record([
                    ("id", Value::from(n.id)),
                    ("name", Value::from(n.name)),
                    ("party", Value::from(n.party)),
                ])
            })
            .collect();
        let edges = graph
            .edges
            .into_iter()
            .map(|e| e.map(Value::from))
            .collect();
        Self::new(nodes, edges)
    }
}

/// Builds a record from `(name, value)` pairs.
pub fn record<const N: usize>(fields: [(&str, Value); N]) -> Record {
    fields
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

fn position(node: &Record) -> Option<[f64; 2]> {
    Some([node.get("x")?.as_f64()?, node.get("y")?.as_f64()?])
}
