use std::cell::Cell;
use std::collections::HashMap;
use std::time::Duration;

use crate::error::GraphError;
use crate::node::{Edge, Node, NodeId};

/// A mutable graph of uniquely identified nodes and named directed edges.
///
/// Nodes and edges live in insertion-ordered arenas. Re-adding a node id or
/// an edge name overwrites the existing entry in place, keeping its position.
/// Edges remember their endpoints by arena slot, so replacing a node's
/// payload leaves its edges attached.
///
/// A graph is a single-threaded value holder: searches take `&self` but
/// record their duration through interior mutability, so the type is not
/// `Sync`.
#[derive(Debug, Clone)]
pub struct LabeledGraph<V = ()> {
    pub(crate) nodes: Vec<Node<V>>,
    pub(crate) node_slots: HashMap<NodeId, usize>,
    pub(crate) edges: Vec<Edge>,
    /// `(from, to)` node slots, parallel to `edges`.
    pub(crate) ends: Vec<(usize, usize)>,
    pub(crate) edge_slots: HashMap<String, usize>,
    pub(crate) duration: Cell<Duration>,
}

impl<V> Default for LabeledGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> LabeledGraph<V> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            node_slots: HashMap::new(),
            edges: Vec::new(),
            ends: Vec::new(),
            edge_slots: HashMap::new(),
            duration: Cell::new(Duration::ZERO),
        }
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Insert `node`, overwriting any node with the same id.
    pub fn add_node(&mut self, node: Node<V>) {
        match self.node_slots.get(&node.id) {
            Some(&slot) => self.nodes[slot] = node,
            None => {
                self.node_slots.insert(node.id.clone(), self.nodes.len());
                self.nodes.push(node);
            }
        }
    }

    /// Insert `edge`, overwriting any edge with the same name.
    ///
    /// With `bidirectional`, the reverse edge is also inserted under the name
    /// `"<name>_reverse"`. Both endpoints must already be in the graph and the
    /// weight, if any, must be finite and non-negative; on error nothing is
    /// inserted.
    pub fn add_edge(&mut self, edge: Edge, bidirectional: bool) -> Result<(), GraphError> {
        if let Some(weight) = edge.weight {
            if !weight.is_finite() || weight < 0.0 {
                return Err(GraphError::InvalidWeight {
                    edge: edge.name,
                    weight,
                });
            }
        }
        let from = self.require_endpoint(&edge, &edge.from)?;
        let to = self.require_endpoint(&edge, &edge.to)?;

        let reverse = bidirectional.then(|| edge.reversed());
        self.insert_edge(edge, from, to);
        if let Some(reverse) = reverse {
            self.insert_edge(reverse, to, from);
        }
        Ok(())
    }

    /// Remove every node and edge.
    pub fn reset_graph(&mut self) {
        self.nodes.clear();
        self.node_slots.clear();
        self.edges.clear();
        self.ends.clear();
        self.edge_slots.clear();
    }

    fn require_endpoint(&self, edge: &Edge, id: &NodeId) -> Result<usize, GraphError> {
        self.slot(id).ok_or_else(|| GraphError::DanglingEndpoint {
            edge: edge.name.clone(),
            node: id.clone(),
        })
    }

    /// Insert an edge whose endpoints are already resolved to node slots.
    pub(crate) fn insert_edge(&mut self, edge: Edge, from: usize, to: usize) {
        match self.edge_slots.get(&edge.name) {
            Some(&slot) => {
                log::trace!("overwriting edge {}", edge.name);
                self.edges[slot] = edge;
                self.ends[slot] = (from, to);
            }
            None => {
                self.edge_slots.insert(edge.name.clone(), self.edges.len());
                self.edges.push(edge);
                self.ends.push((from, to));
            }
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// All nodes in insertion order.
    pub fn nodes(&self) -> &[Node<V>] {
        &self.nodes
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: impl Into<NodeId>) -> Option<&Node<V>> {
        self.slot(&id.into()).map(|s| &self.nodes[s])
    }

    pub fn edge(&self, name: &str) -> Option<&Edge> {
        self.edge_slots.get(name).map(|&s| &self.edges[s])
    }

    pub fn contains_node(&self, id: impl Into<NodeId>) -> bool {
        self.slot(&id.into()).is_some()
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Wall-clock duration of the most recent search.
    pub fn duration(&self) -> Duration {
        self.duration.get()
    }

    #[inline]
    pub(crate) fn slot(&self, id: &NodeId) -> Option<usize> {
        self.node_slots.get(id).copied()
    }

    // -----------------------------------------------------------------------
    // Adjacency
    // -----------------------------------------------------------------------

    /// Distinct targets of the edges leaving `node`, in edge order.
    pub fn adjacent_nodes(&self, node: impl Into<NodeId>) -> Vec<&Node<V>> {
        match self.slot(&node.into()) {
            Some(s) => self
                .adjacent_slots(s)
                .into_iter()
                .map(|t| &self.nodes[t])
                .collect(),
            None => Vec::new(),
        }
    }

    /// Edges leaving `node`.
    pub fn adjacent_edges(&self, node: impl Into<NodeId>) -> Vec<&Edge> {
        let Some(s) = self.slot(&node.into()) else {
            return Vec::new();
        };
        self.edges
            .iter()
            .zip(&self.ends)
            .filter(|(_, ends)| ends.0 == s)
            .map(|(e, _)| e)
            .collect()
    }

    /// Edges arriving at `node`.
    pub fn adjacent_edges_to(&self, node: impl Into<NodeId>) -> Vec<&Edge> {
        let Some(s) = self.slot(&node.into()) else {
            return Vec::new();
        };
        self.edges
            .iter()
            .zip(&self.ends)
            .filter(|(_, ends)| ends.1 == s)
            .map(|(e, _)| e)
            .collect()
    }

    /// Distinct target slots of the edges leaving slot `s`, in edge order.
    pub(crate) fn adjacent_slots(&self, s: usize) -> Vec<usize> {
        let mut out: Vec<usize> = Vec::new();
        for &(from, to) in &self.ends {
            if from == s && !out.contains(&to) {
                out.push(to);
            }
        }
        out
    }

    /// Distinct target slots for every node, built in one pass over the edges.
    pub(crate) fn adjacency(&self) -> Vec<Vec<usize>> {
        let mut adj: Vec<Vec<usize>> = vec![Vec::new(); self.nodes.len()];
        for &(from, to) in &self.ends {
            if !adj[from].contains(&to) {
                adj[from].push(to);
            }
        }
        adj
    }
}
