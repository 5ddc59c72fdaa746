use std::fmt;

use log::trace;
use smallvec::SmallVec;

use crate::cells::{Cell, CoordinateSmallVec, Direction, GridCoordinate};
use crate::errors::*;
use crate::grid_iterators::{CellIter, RowIter};
use crate::units::{Height, Width};

/// A fixed `width * height` arena of cells addressed by `(x, z)`, stored row major.
///
/// Only the generator may change wall state, through the crate private `carve_passage` which
/// always clears a wall and its opposite on the neighbouring cell together.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "Grid :: width: {:?}, height: {:?}, passages: {:?}",
               self.width,
               self.height,
               self.passages_count())
    }
}

impl Grid {
    /// Allocate a grid of fully walled, unvisited cells.
    pub fn new(width: Width, height: Height) -> Result<Grid> {
        let (Width(w), Height(h)) = (width, height);
        if w == 0 || h == 0 {
            return Err(ErrorKind::InvalidDimensions(w, h).into());
        }
        let cells_count = w.checked_mul(h)
            .ok_or_else(|| Error::from(ErrorKind::InvalidDimensions(w, h)))?;

        trace!("allocating {}x{} grid", w, h);
        Ok(Grid {
            cells: vec![Cell::default(); cells_count],
            width: w,
            height: h,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Is the grid coordinate valid for this grid - within the grid's dimensions
    #[inline]
    pub fn is_valid_coordinate(&self, coord: GridCoordinate) -> bool {
        coord.x < self.width && coord.z < self.height
    }

    /// Convert a grid coordinate to a one dimensional index in the range 0...grid.size().
    /// Returns None if the grid coordinate is invalid.
    #[inline]
    pub fn coordinate_to_index(&self, coord: GridCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some(coord.z * self.width + coord.x)
        } else {
            None
        }
    }

    pub fn cell_at(&self, x: usize, z: usize) -> Result<&Cell> {
        self.cell(GridCoordinate::new(x, z))
    }

    pub fn cell(&self, coord: GridCoordinate) -> Result<&Cell> {
        match self.coordinate_to_index(coord) {
            Some(index) => Ok(&self.cells[index]),
            None => Err(self.out_of_bounds(coord)),
        }
    }

    pub(crate) fn cell_mut(&mut self, coord: GridCoordinate) -> Result<&mut Cell> {
        match self.coordinate_to_index(coord) {
            Some(index) => Ok(&mut self.cells[index]),
            None => Err(self.out_of_bounds(coord)),
        }
    }

    pub(crate) fn mark_visited(&mut self, coord: GridCoordinate) -> Result<()> {
        self.cell_mut(coord)?.mark_visited();
        Ok(())
    }

    /// Open the passage from `coord` towards `dir`: clears the wall on this cell and the opposite
    /// wall on the neighbour. Fails without touching either cell if the neighbour is off the grid.
    /// Returns the neighbour's coordinate.
    pub(crate) fn carve_passage(&mut self,
                                coord: GridCoordinate,
                                dir: Direction)
                                -> Result<GridCoordinate> {
        if !self.is_valid_coordinate(coord) {
            return Err(self.out_of_bounds(coord));
        }
        let neighbour = match self.neighbour_at_direction(coord, dir) {
            Some(neighbour) => neighbour,
            None => {
                let (dx, dz) = dir.offset();
                let off_grid = GridCoordinate::new(coord.x.wrapping_add(dx as usize),
                                                   coord.z.wrapping_add(dz as usize));
                return Err(self.out_of_bounds(off_grid));
            }
        };

        self.cell_mut(coord)?.remove_wall(dir);
        self.cell_mut(neighbour)?.remove_wall(dir.opposite());
        Ok(neighbour)
    }

    /// The in-grid cell adjacent to `coord` in the given direction, whether or not a wall
    /// separates them.
    pub fn neighbour_at_direction(&self,
                                  coord: GridCoordinate,
                                  direction: Direction)
                                  -> Option<GridCoordinate> {
        direction.offset_coordinate(coord)
            .filter(|neighbour_coord| self.is_valid_coordinate(*neighbour_coord))
    }

    /// Is there an open passage from `coord` into its neighbour at `direction`?
    /// Always false at the grid boundary or for an invalid coordinate.
    pub fn is_passage_open(&self, coord: GridCoordinate, direction: Direction) -> bool {
        match (self.cell(coord), self.neighbour_at_direction(coord, direction)) {
            (Ok(cell), Some(_)) => !cell.has_wall(direction),
            _ => false,
        }
    }

    /// Cells joined to a particular cell by an open passage.
    /// Returns None for an invalid coordinate.
    pub fn links(&self, coord: GridCoordinate) -> Option<CoordinateSmallVec> {
        if !self.is_valid_coordinate(coord) {
            return None;
        }
        let linked_cells = Direction::ALL.iter()
            .filter(|dir| self.is_passage_open(coord, **dir))
            .filter_map(|dir| self.neighbour_at_direction(coord, *dir))
            .collect();
        Some(linked_cells)
    }

    /// Each open passage counted once, via the East and South sides of every cell.
    pub fn passages_count(&self) -> usize {
        self.iter_passages().count()
    }

    /// Every open passage once, as `(cell, east or south neighbour)`, in row major order.
    pub fn iter_passages<'a>(&'a self)
                             -> impl Iterator<Item = (GridCoordinate, GridCoordinate)> + 'a {
        self.iter().flat_map(move |coord| {
            let passages: SmallVec<[(GridCoordinate, GridCoordinate); 2]> =
                [Direction::East, Direction::South]
                    .iter()
                    .filter(|dir| self.is_passage_open(coord, **dir))
                    .filter_map(|dir| self.neighbour_at_direction(coord, *dir))
                    .map(|neighbour| (coord, neighbour))
                    .collect();
            passages
        })
    }

    #[inline]
    pub fn iter(&self) -> CellIter {
        CellIter::new(self.width, self.height)
    }

    #[inline]
    pub fn iter_row(&self) -> RowIter {
        RowIter::new(self.width, self.height)
    }

    fn out_of_bounds(&self, coord: GridCoordinate) -> Error {
        ErrorKind::OutOfBounds(coord.x, coord.z, self.width, self.height).into()
    }
}
