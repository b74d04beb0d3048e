use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};
use thiserror::Error;

use crate::{default, Id};

#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StreetGraphError {
    #[error("unknown node id: {0}")]
    UnknownNode(Id),
}

/// A node in the street graph. Immutable once the graph is loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: Id,
    pub lon: f64,
    pub lat: f64,
    pub name: Option<String>,
}

/// Node store plus undirected adjacency. All nodes and edges must be loaded
/// before the graph is handed to the augmentation layer.
#[derive(Debug, Clone, Default)]
pub struct StreetGraph {
    nodes: Vec<Node>,
    indices: HashMap<Id, NodeIndex>,
    adjacency: UnGraph<Id, ()>,
}

impl StreetGraph {
    pub fn new() -> Self {
        default()
    }

    /// Inserts a node. Inserting an id twice keeps the first node.
    pub fn add_node(&mut self, node: Node) {
        if self.indices.contains_key(&node.id) {
            return;
        }
        let index = self.adjacency.add_node(node.id);
        debug_assert_eq!(index.index(), self.nodes.len());
        self.indices.insert(node.id, index);
        self.nodes.push(node);
    }

    /// Connects two loaded nodes with an undirected edge. Reconnecting the
    /// same pair is a no-op, self-loops are allowed.
    pub fn add_edge(&mut self, a: Id, b: Id) -> Result<(), StreetGraphError> {
        let from = self.index_of(a)?;
        let to = self.index_of(b)?;
        self.adjacency.update_edge(from, to, ());
        Ok(())
    }

    fn index_of(&self, id: Id) -> Result<NodeIndex, StreetGraphError> {
        self.indices
            .get(&id)
            .copied()
            .ok_or(StreetGraphError::UnknownNode(id))
    }

    /// All nodes, in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, id: Id) -> Option<&Node> {
        self.indices.get(&id).and_then(|ix| self.nodes.get(ix.index()))
    }

    /// Whether the node has at least one connected edge.
    pub fn has_edges(&self, id: Id) -> bool {
        self.indices
            .get(&id)
            .is_some_and(|&ix| self.adjacency.neighbors(ix).next().is_some())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.edge_count()
    }
}

impl FromIterator<Node> for StreetGraph {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        let mut slf: Self = default();
        for node in iter {
            slf.add_node(node);
        }
        slf
    }
}
