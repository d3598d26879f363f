//! Conversion of a tile grid into an adjacency graph.

use tilepath_core::{GridTile, Neighbors, TileGrid};

use crate::graph::LabeledGraph;
use crate::node::{Edge, Node, NodeId};

impl<V> LabeledGraph<V> {
    /// Add one node per passable tile and a weight-1 edge from each passable
    /// tile to each passable neighbor.
    ///
    /// Node ids are the tiles' flat indices; edges are named
    /// `"<from>_<to>"`. Blocked tiles get no node. Each tile adds only its own
    /// outgoing edges, so on a grid every connection ends up present in both
    /// directions. Neighbors are 4-directional, or 8-directional with
    /// `diagonal`.
    ///
    /// Imported nodes carry no payload (`value` is `None`); use
    /// [`add_node`](Self::add_node) afterwards to attach one.
    pub fn add_tile_grid<T: GridTile>(&mut self, grid: &TileGrid<T>, diagonal: bool) {
        for (index, tile) in grid.tiles().iter().enumerate() {
            if !tile.is_blocked() {
                self.add_node(Node::new(index));
            }
        }

        let mut nb = Neighbors::new();
        let mut added = 0usize;
        for (index, tile) in grid.tiles().iter().enumerate() {
            if tile.is_blocked() {
                continue;
            }
            let Some(from) = self.slot(&NodeId::from(index)) else {
                continue;
            };
            for &neighbor in nb.of(grid.cols(), grid.len(), index, diagonal) {
                if grid.is_blocked(neighbor) {
                    continue;
                }
                let Some(to) = self.slot(&NodeId::from(neighbor)) else {
                    continue;
                };
                let edge = Edge::weighted(format!("{index}_{neighbor}"), index, neighbor, 1.0);
                self.insert_edge(edge, from, to);
                added += 1;
            }
        }

        log::debug!(
            "imported {}x{} tile grid: {} open tiles, {} edges",
            grid.cols(),
            grid.rows(),
            grid.open_count(),
            added
        );
    }
}
