//! Co-authorship graphs from documents
//!
//! Every distinct author becomes a [`Node`]. A single-author document adds a
//! self-loop; a document with `N >= 2` authors adds one edge per unordered
//! author pair, `from` being the author credited first. Edges repeated across
//! documents are kept, so co-signing twice yields two edges.

use std::borrow::Borrow;

use itertools::Itertools;
use riksnet_riksdagen::{Author, Document};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::edge::Edge;

/// An author as a graph node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub name: String,
    pub party: String,
}

impl From<&Author> for Node {
    fn from(author: &Author) -> Self {
        Self {
            id: author.id.clone(),
            name: author.name.clone(),
            party: author.party.clone(),
        }
    }
}

/// Nodes and edges of one aggregation, serialized as `{"nodes", "edges"}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoauthorGraph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl CoauthorGraph {
    pub fn self_loops(&self) -> usize {
        self.edges.iter().filter(|e| e.is_self_loop()).count()
    }

    /// Node count per party code, largest first (ties by code)
    pub fn party_counts(&self) -> Vec<(&str, usize)> {
        let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
        for node in &self.nodes {
            *counts.entry(node.party.as_str()).or_default() += 1;
        }
        let mut counts: Vec<_> = counts.into_iter().collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        counts
    }
}

/// Incremental aggregation, one document at a time.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    seen: FxHashSet<String>,
    graph: CoauthorGraph,
    documents: usize,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, document: &Document) {
        self.documents += 1;
        for author in &document.authors {
            if self.seen.insert(author.id.clone()) {
                self.graph.nodes.push(Node::from(author));
            }
        }

        let authors = &document.authors;
        if authors.len() < 2 {
            self.graph
                .edges
                .extend(authors.iter().map(|a| Edge::new(a.id.clone(), a.id.clone())));
        } else {
            self.graph.edges.extend(
                authors
                    .iter()
                    .tuple_combinations()
                    .map(|(a, b)| Edge::new(a.id.clone(), b.id.clone())),
            );
        }
    }

    /// Documents added so far
    pub fn documents(&self) -> usize {
        self.documents
    }

    pub fn finish(self) -> CoauthorGraph {
        log::debug!(
            "aggregated {} documents into {} nodes, {} edges",
            self.documents,
            self.graph.nodes.len(),
            self.graph.edges.len()
        );
        self.graph
    }
}

/// Aggregate documents into `(nodes, edges)`.
pub fn nodes_and_edges<I>(documents: I) -> (Vec<Node>, Vec<Edge>)
where
    I: IntoIterator,
    I::Item: Borrow<Document>,
{
    let mut builder = GraphBuilder::new();
    for document in documents {
        builder.add(document.borrow());
    }
    let graph = builder.finish();
    (graph.nodes, graph.edges)
}

/// Aggregate a fallible document stream, stopping at the first error.
pub fn try_nodes_and_edges<I, E>(documents: I) -> Result<CoauthorGraph, E>
where
    I: IntoIterator<Item = Result<Document, E>>,
{
    let mut builder = GraphBuilder::new();
    for document in documents {
        builder.add(&document?);
    }
    Ok(builder.finish())
}
