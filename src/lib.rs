//! **maze_walls** generates walled perfect mazes on a rectangular grid and answers collision
//! queries against the walls.
//!
//! A maze is carved once with the recursive backtracker from an injected random source and is
//! read only afterwards. Each wall still standing has a solid axis aligned volume that
//! movers are tested against.

pub mod bounds;
pub mod cells;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod grid_displays;
pub mod grid_iterators;
pub mod maze;
pub mod pathing;
pub mod units;
mod utils;

pub use crate::maze::{Maze, MoveVerdict, HEIGHT, WIDTH};
