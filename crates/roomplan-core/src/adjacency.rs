//! Declared adjacency constraints: which room pairs should share a wall.
//!
//! A minimal undirected graph over room names. Only edge membership and
//! insertion-ordered iteration are needed, so this is a name list plus a
//! normalized pair list, not a general graph structure.

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct AdjacencyGraph {
    names: Vec<String>,
    index: HashMap<String, usize>,
    edges: Vec<(usize, usize)>,
}

impl AdjacencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a room name as a node. Idempotent.
    pub(crate) fn add_node(&mut self, name: &str) {
        if !self.index.contains_key(name) {
            self.index.insert(name.to_string(), self.names.len());
            self.names.push(name.to_string());
        }
    }

    /// Declare that two rooms should share a wall. Returns `false` without
    /// inserting anything when either name is unregistered or the pair is
    /// already declared; neither case is an error.
    pub fn add_edge(&mut self, a: &str, b: &str) -> bool {
        let (ia, ib) = match (self.index.get(a), self.index.get(b)) {
            (Some(&ia), Some(&ib)) => (ia, ib),
            _ => return false,
        };
        let key = (ia.min(ib), ia.max(ib));
        if self.edges.contains(&key) {
            return false;
        }
        self.edges.push(key);
        true
    }

    /// Declared pairs in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.edges
            .iter()
            .map(|&(a, b)| (self.names[a].as_str(), self.names[b].as_str()))
    }

    /// Number of declared pairs.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_with(names: &[&str]) -> AdjacencyGraph {
        let mut g = AdjacencyGraph::new();
        for name in names {
            g.add_node(name);
        }
        g
    }

    #[test]
    fn test_edge_requires_both_nodes() {
        let mut g = graph_with(&["kitchen"]);
        assert!(!g.add_edge("kitchen", "pantry"), "unknown endpoint is a no-op");
        assert!(!g.add_edge("pantry", "kitchen"));
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_duplicate_and_reversed_edges_collapse() {
        let mut g = graph_with(&["kitchen", "pantry"]);
        assert!(g.add_edge("kitchen", "pantry"));
        assert!(!g.add_edge("kitchen", "pantry"));
        assert!(!g.add_edge("pantry", "kitchen"), "reversed pair is the same edge");
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_edges_iterate_in_insertion_order() {
        let mut g = graph_with(&["a", "b", "c"]);
        g.add_edge("b", "c");
        g.add_edge("a", "c");
        let pairs: Vec<_> = g.edges().collect();
        assert_eq!(pairs, vec![("b", "c"), ("a", "c")]);
    }

    #[test]
    fn test_add_node_is_idempotent() {
        let mut g = graph_with(&["a", "a", "b"]);
        g.add_node("a");
        assert!(g.add_edge("a", "b"));
        assert_eq!(g.edge_count(), 1);
    }
}
