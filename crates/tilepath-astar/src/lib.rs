//! A* pathfinding over tile grids.
//!
//! [`GridAstar`] owns one [`GridCell`] per tile of a
//! [`TileGrid`](tilepath_core::TileGrid) and answers
//! [`find_path`](GridAstar::find_path) queries with 4- or 8-directional
//! movement. The cell array is built once; every search resets the
//! per-cell search state, so one instance serves any number of searches over
//! the same obstacle layout.
//!
//! ```
//! use tilepath_astar::GridAstar;
//! use tilepath_core::TileGrid;
//!
//! let grid = TileGrid::from_ascii("...\n...\n...").unwrap();
//! let mut astar = GridAstar::new(&grid);
//!
//! assert_eq!(astar.find_path(0, 8, false).len(), 5);
//! assert_eq!(astar.find_path(0, 8, true).len(), 3);
//! ```

mod astar;
mod cell;
mod distance;

pub use astar::GridAstar;
pub use cell::GridCell;
pub use distance::manhattan;
