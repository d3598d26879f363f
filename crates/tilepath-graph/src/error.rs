use thiserror::Error;

use crate::node::NodeId;

/// Graph mutation and query errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("node {0} not found")]
    NodeNotFound(NodeId),

    /// An edge endpoint does not name a node in the graph.
    #[error("edge {edge} references missing node {node}")]
    DanglingEndpoint { edge: String, node: NodeId },

    /// Weights must be finite and non-negative.
    #[error("edge {edge} has invalid weight {weight}")]
    InvalidWeight { edge: String, weight: f64 },
}
