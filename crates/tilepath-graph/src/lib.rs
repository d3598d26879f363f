//! Labeled directed graphs for tile-based worlds.
//!
//! [`LabeledGraph`] stores uniquely identified nodes and named, directed,
//! optionally weighted edges. Graphs are built by hand with
//! [`LabeledGraph::add_node`] / [`LabeledGraph::add_edge`] or converted from a
//! [`TileGrid`](tilepath_core::TileGrid) with [`LabeledGraph::add_tile_grid`].
//!
//! Searches:
//!
//! - **BFS** reachability ([`LabeledGraph::bfs`])
//! - **DFS** reachability ([`LabeledGraph::dfs`])
//! - **Dijkstra** single-source distances ([`LabeledGraph::dijkstra`])
//! - **Shortest path** reconstruction ([`LabeledGraph::shortest_path`])
//!
//! ```
//! use tilepath_core::TileGrid;
//! use tilepath_graph::LabeledGraph;
//!
//! let grid = TileGrid::from_ascii("...\n.#.\n...").unwrap();
//! let mut graph: LabeledGraph = LabeledGraph::new();
//! graph.add_tile_grid(&grid, false);
//!
//! assert!(graph.bfs(0, 8));
//! assert_eq!(graph.shortest_path(0, 8).unwrap().len(), 5);
//! ```

mod dijkstra;
mod error;
mod graph;
mod node;
mod tilegrid;
mod traversal;

pub use dijkstra::DistanceEntry;
pub use error::GraphError;
pub use graph::LabeledGraph;
pub use node::{Edge, Node, NodeId};
