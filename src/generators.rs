use std::cmp;

use log::debug;
use rand::Rng;

use crate::cells::{Direction, DirectionSmallVec, GridCoordinate};
use crate::errors::*;
use crate::grid::Grid;

/// Where every carve starts.
pub const CARVE_START: GridCoordinate = GridCoordinate { x: 0, z: 0 };

/// A cell on the path from the start to the carve's current position, with the directions
/// it has not tried yet.
#[derive(Debug)]
struct CarveFrame {
    coord: GridCoordinate,
    untried: DirectionSmallVec,
}

impl CarveFrame {
    fn new(coord: GridCoordinate) -> CarveFrame {
        CarveFrame {
            coord,
            untried: Direction::all(),
        }
    }

    /// Uniformly pick one of the remaining directions, without replacement.
    fn draw_direction<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Direction> {
        if self.untried.is_empty() {
            None
        } else {
            let pick = rng.gen_range(0..self.untried.len());
            Some(self.untried.remove(pick))
        }
    }
}

/// Apply the recursive backtracker (randomised depth first search) to a fully walled grid,
/// producing a perfect maze: every cell reachable from every other by exactly one path.
///
/// Starting at `(0, 0)`, each cell tries its four directions once each in a random order.
/// A direction leading to an unvisited cell inside the grid carves the wall between the two
/// cells and the carve continues from the neighbour before the rest of the current cell's
/// directions are tried. Directions leading off the grid or into visited cells leave the wall
/// in place. A cell whose directions are used up hands control back to the cell it was entered
/// from.
///
/// The "recursion" lives on an explicit heap stack, so the depth of the carve is bounded by the
/// grid size rather than the thread's stack. The random draws happen in exactly the order a
/// recursive formulation would make them, so the same random sequence gives the same maze.
///
/// Cells already marked visited are treated as part of the maze and never entered, so running
/// this a second time on the same grid changes nothing.
pub fn recursive_backtracker<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> Result<()> {
    debug!("recursive backtracker carving a {}x{} grid", grid.width(), grid.height());

    grid.mark_visited(CARVE_START)?;
    let mut stack = Vec::with_capacity(grid.size());
    stack.push(CarveFrame::new(CARVE_START));

    let mut carved = 0;
    let mut max_depth = stack.len();

    while let Some(frame) = stack.last_mut() {
        let current = frame.coord;
        let dir = match frame.draw_direction(rng) {
            Some(dir) => dir,
            None => {
                // backtrack
                stack.pop();
                continue;
            }
        };

        let neighbour = match grid.neighbour_at_direction(current, dir) {
            Some(neighbour) => neighbour,
            None => continue,
        };
        if grid.cell(neighbour)?.is_visited() {
            continue;
        }

        grid.mark_visited(neighbour)?;
        grid.carve_passage(current, dir)?;
        carved += 1;

        stack.push(CarveFrame::new(neighbour));
        max_depth = cmp::max(max_depth, stack.len());
    }

    debug!("carved {} passages, max stack depth {}", carved, max_depth);
    Ok(())
}
