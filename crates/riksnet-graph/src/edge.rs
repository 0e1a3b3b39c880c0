//! A module for working with edges.

use serde::{Deserialize, Serialize};

/// A pair of node ids, serialized as `{"from": .., "to": ..}`.
///
/// The graphs built here are undirected; `from`/`to` only record the order
/// in which the endpoints were produced. Equality is on that order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge<T = String> {
    pub from: T,
    pub to: T,
}

impl<T> Edge<T> {
    /// Creates a new edge from two node ids.
    ///
    /// # Examples
    ///
    /// ```
    /// use riksnet_graph::Edge;
    ///
    /// let edge = Edge::new("a", "b");
    /// assert_eq!(edge.from, "a");
    /// assert_eq!(edge.to, "b");
    /// ```
    pub fn new(from: T, to: T) -> Self {
        Self { from, to }
    }

    /// Maps both endpoints.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Edge<U> {
        Edge {
            from: f(self.from),
            to: f(self.to),
        }
    }
}

impl<T: PartialEq> Edge<T> {
    /// Returns whether both endpoints are the same node.
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }

    /// Returns whether the edge contains the given node.
    pub fn contains(&self, node: &T) -> bool {
        &self.from == node || &self.to == node
    }

    /// Returns whether the edge joins `a` and `b`, in either order.
    ///
    /// # Examples
    ///
    /// ```
    /// use riksnet_graph::Edge;
    ///
    /// let edge = Edge::new(1, 2);
    /// assert!(edge.connects(&2, &1));
    /// assert!(!edge.connects(&1, &3));
    /// ```
    pub fn connects(&self, a: &T, b: &T) -> bool {
        (&self.from == a && &self.to == b) || (&self.from == b && &self.to == a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_loop() {
        assert!(Edge::new("x", "x").is_self_loop());
        assert!(!Edge::new("x", "y").is_self_loop());
    }

    #[test]
    fn order_matters_for_equality() {
        assert_ne!(Edge::new(1, 2), Edge::new(2, 1));
        assert!(Edge::new(1, 2).connects(&2, &1));
    }

    #[test]
    fn serializes_as_from_to() {
        let json = serde_json::to_string(&Edge::new("a".to_string(), "b".to_string())).unwrap();
        assert_eq!(json, r#"{"from":"a","to":"b"}"#);
    }

    #[test]
    fn map_endpoints() {
        assert_eq!(Edge::new(1, 2).map(|n| n * 10), Edge::new(10, 20));
    }
}
