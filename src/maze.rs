//! The generated maze and the collision check movers run against it.

use std::fmt;

use log::{debug, trace};
use rand::Rng;

use crate::bounds::{self, BoundsSmallVec, Containment};
use crate::cells::{Direction, GridCoordinate};
use crate::errors::*;
use crate::generators;
use crate::grid::Grid;
use crate::units::{Height, Width};

/// Default number of cells along x.
pub const WIDTH: usize = 10;
/// Default number of cells along z.
pub const HEIGHT: usize = 10;

/// Outcome of checking a prospective position against the maze.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum MoveVerdict {
    Allowed,
    /// Not over any cell of the grid.
    OutsideGrid,
    /// Strictly inside the volume of the wall on this side of the position's cell.
    Blocked(Direction),
}

impl MoveVerdict {
    pub fn is_allowed(self) -> bool {
        self == MoveVerdict::Allowed
    }
}

/// A perfect maze, carved once on construction and read only afterwards.
#[derive(Clone, Debug)]
pub struct Maze {
    grid: Grid,
}

impl Maze {
    /// Allocate a `width x height` grid and carve it with the recursive backtracker, drawing
    /// randomness from `rng`.
    pub fn generate<R: Rng + ?Sized>(width: Width, height: Height, rng: &mut R) -> Result<Maze> {
        let mut grid = Grid::new(width, height)?;
        generators::recursive_backtracker(&mut grid, rng)?;
        debug!("generated {:?}", grid);
        Ok(Maze { grid })
    }

    pub fn with_default_size<R: Rng + ?Sized>(rng: &mut R) -> Result<Maze> {
        Maze::generate(Width(WIDTH), Height(HEIGHT), rng)
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Wall flags of the cell at `(x, z)` in North, East, South, West order.
    pub fn walls_at(&self, x: usize, z: usize) -> Result<[bool; 4]> {
        Ok(self.grid.cell_at(x, z)?.walls())
    }

    pub fn bounds_for_cell(&self, x: usize, z: usize) -> Result<BoundsSmallVec> {
        bounds::bounds_for_cell(&self.grid, x, z)
    }

    /// Can a mover stand at `position` (`[x, y, z]`)? It must lie over the grid and not be
    /// strictly inside any wall volume of the cell below it. Touching a wall is allowed.
    pub fn check_move(&self, position: [f32; 3]) -> MoveVerdict {
        if position.iter().any(|v| v.is_nan()) {
            trace!("{:?} is not a position", position);
            return MoveVerdict::OutsideGrid;
        }
        let [x, _, z] = position;
        let coord = match self.cell_under(x, z) {
            Some(coord) => coord,
            None => {
                trace!("{:?} is outside the grid", position);
                return MoveVerdict::OutsideGrid;
            }
        };

        let walls = match bounds::bounds_for_cell(&self.grid, coord.x, coord.z) {
            Ok(walls) => walls,
            Err(_) => return MoveVerdict::OutsideGrid,
        };
        let blocking = walls.iter()
            .find(|wall| wall.aabb.contains(position) == Containment::Contains);

        match blocking {
            Some(wall) => {
                trace!("{:?} blocked by the {:?} wall of cell {}", position, wall.side, coord);
                MoveVerdict::Blocked(wall.side)
            }
            None => MoveVerdict::Allowed,
        }
    }

    /// The cell whose floor square holds `(x, z)`. Positions on the far edges of the grid
    /// have no cell.
    fn cell_under(&self, x: f32, z: f32) -> Option<GridCoordinate> {
        if x < 0.0 || z < 0.0 {
            return None;
        }
        if x > self.width() as f32 || z > self.height() as f32 {
            return None;
        }
        let coord = GridCoordinate::new(x.floor() as usize, z.floor() as usize);
        if self.grid.is_valid_coordinate(coord) {
            Some(coord)
        } else {
            None
        }
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}
