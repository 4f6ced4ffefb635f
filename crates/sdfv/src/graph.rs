//! Order-stable graph container for one nesting level.
//!
//! Nodes and edges are stored by id in insertion order, so enumeration is
//! deterministic and always matches the order of the source records. Edges
//! are plain values here; their endpoints live on the edge element itself.

use indexmap::IndexMap;

/// Identifier of a node or edge within one graph.
pub type ElementId = usize;

/// A directed graph of `T` values keyed by [`ElementId`].
#[derive(Debug, Clone)]
pub struct Graph<T> {
    nodes: IndexMap<ElementId, T>,
    edges: IndexMap<ElementId, T>,
}

impl<T> Graph<T> {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self {
            nodes: IndexMap::new(),
            edges: IndexMap::new(),
        }
    }

    /// Inserts a node, replacing any node with the same id in place.
    pub fn add_node(&mut self, id: ElementId, node: T) {
        self.nodes.insert(id, node);
    }

    /// Inserts an edge, replacing any edge with the same id in place.
    pub fn add_edge(&mut self, id: ElementId, edge: T) {
        self.edges.insert(id, edge);
    }

    pub fn node(&self, id: ElementId) -> Option<&T> {
        self.nodes.get(&id)
    }

    pub fn node_mut(&mut self, id: ElementId) -> Option<&mut T> {
        self.nodes.get_mut(&id)
    }

    pub fn edge(&self, id: ElementId) -> Option<&T> {
        self.edges.get(&id)
    }

    pub fn edge_mut(&mut self, id: ElementId) -> Option<&mut T> {
        self.edges.get_mut(&id)
    }

    /// Returns an iterator over all nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &T> {
        self.nodes.values()
    }

    pub fn nodes_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.nodes.values_mut()
    }

    /// Returns an iterator over all edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &T> {
        self.edges.values()
    }

    pub fn edges_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.edges.values_mut()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the graph has neither nodes nor edges.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumeration_follows_insertion_order() {
        let mut graph = Graph::new();
        graph.add_node(2, "c");
        graph.add_node(0, "a");
        graph.add_node(1, "b");
        graph.add_edge(7, "e7");
        graph.add_edge(3, "e3");

        assert_eq!(graph.nodes().copied().collect::<Vec<_>>(), vec!["c", "a", "b"]);
        assert_eq!(graph.edges().copied().collect::<Vec<_>>(), vec!["e7", "e3"]);
    }

    #[test]
    fn test_lookup_by_id() {
        let mut graph = Graph::new();
        graph.add_node(4, 40);
        graph.add_edge(4, 400);

        assert_eq!(graph.node(4), Some(&40));
        assert_eq!(graph.edge(4), Some(&400));
        assert_eq!(graph.node(5), None);

        *graph.node_mut(4).unwrap() += 1;
        assert_eq!(graph.node(4), Some(&41));
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut graph = Graph::new();
        graph.add_node(0, "a");
        graph.add_node(1, "b");
        graph.add_node(0, "z");

        assert_eq!(graph.nodes().copied().collect::<Vec<_>>(), vec!["z", "b"]);
        assert_eq!(graph.node_count(), 2);
    }

    #[test]
    fn test_counts_and_empty() {
        let mut graph: Graph<u8> = Graph::default();
        assert!(graph.is_empty());

        graph.add_edge(0, 1);
        assert!(!graph.is_empty());
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 1);

        for edge in graph.edges_mut() {
            *edge = 9;
        }
        assert_eq!(graph.edge(0), Some(&9));
    }
}
