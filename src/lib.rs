//! **noise-mazes** generates square mazes whose passages are carved out of 2-D noise.
//!
//! A maze is carved from a fine noise field, repaired so the far corner can always be reached
//! from the entrance at `(0, 0)`, and given exits in the far quadrant chosen from a second,
//! coarse noise field.
//!
//! ```no_run
//! use noise_mazes::cells::{Cartesian2DCoordinate, CompassPrimary};
//!
//! let maze = noise_mazes::build(100, 42)?;
//! let entrance = Cartesian2DCoordinate::new(0, 0);
//! if maze.can_move(entrance, CompassPrimary::North)? {
//!     // ...
//! }
//! # Ok::<(), noise_mazes::errors::Error>(())
//! ```

pub mod carving;
pub mod cells;
pub mod config;
pub mod connectivity;
pub mod errors;
pub mod exits;
pub mod generators;
pub mod grid;
pub mod grid_iterators;
pub mod noise_field;
pub mod pathing;
pub mod units;
mod utils;

pub use crate::generators::{build, MazeGenerator};
pub use crate::grid::MazeGrid;
