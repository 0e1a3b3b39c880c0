//! Edges between observations that share something

use std::collections::BTreeSet;

use itertools::Itertools;

use crate::edge::Edge;

/// One edge per pair of items whose `attribute` sets overlap.
///
/// Pairs are visited in index order, `from` being the earlier item. Items
/// with an empty set never connect.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use riksnet_graph::pairwise_intersection;
///
/// let cities = [
///     ("Göteborg", BTreeSet::from(["E6", "E20"])),
///     ("Kungsbacka", BTreeSet::from(["E6"])),
///     ("Karlstad", BTreeSet::from(["E18"])),
/// ];
/// let edges: Vec<_> = pairwise_intersection(&cities, |c| &c.1, |c| c.0).collect();
/// assert_eq!(edges.len(), 1);
/// assert_eq!((edges[0].from, edges[0].to), ("Göteborg", "Kungsbacka"));
/// ```
pub fn pairwise_intersection<'a, T, A, K, F, G>(
    items: &'a [T],
    attribute: F,
    identifier: G,
) -> impl Iterator<Item = Edge<K>> + 'a
where
    A: Ord + 'a,
    K: 'a,
    F: Fn(&T) -> &BTreeSet<A> + 'a,
    G: Fn(&T) -> K + 'a,
{
    items
        .iter()
        .tuple_combinations()
        .filter(move |(a, b)| !attribute(*a).is_disjoint(attribute(*b)))
        .map(move |(a, b)| Edge::new(identifier(a), identifier(b)))
}
