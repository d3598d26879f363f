//! **tilepath-core** — shared input types for tile-grid pathfinding.
//!
//! This crate provides the plain tile-grid shape consumed by both
//! `tilepath-graph` and `tilepath-astar`: geometry, tiles, the validated
//! [`TileGrid`] container, the [`Neighbors`] index helper that defines grid
//! adjacency, and a small timing helper used to instrument searches.

pub mod error;
pub mod geom;
pub mod neighbors;
pub mod tiles;
pub mod timing;

pub use error::GridError;
pub use geom::Point;
pub use neighbors::Neighbors;
pub use tiles::{GridTile, Tile, TileGrid};
pub use timing::Stopwatch;
