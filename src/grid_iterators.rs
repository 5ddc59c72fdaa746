use std::iter::FusedIterator;

use crate::cells::GridCoordinate;

/// Row major iteration over every coordinate of a `width * height` grid.
#[derive(Debug, Copy, Clone)]
pub struct CellIter {
    current_cell_number: usize,
    cells_count: usize,
    row_width: usize,
}

impl CellIter {
    pub(crate) fn new(width: usize, height: usize) -> CellIter {
        CellIter {
            current_cell_number: 0,
            cells_count: width * height,
            row_width: width,
        }
    }
}

impl Iterator for CellIter {
    type Item = GridCoordinate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let coord = GridCoordinate::from_row_major_index(self.current_cell_number,
                                                             self.row_width);
            self.current_cell_number += 1;
            Some(coord)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.cells_count - self.current_cell_number;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}
impl ExactSizeIterator for CellIter {} // default impl using size_hint()
impl FusedIterator for CellIter {}

/// Iteration over the grid one row (fixed z) at a time, north to south.
#[derive(Debug, Copy, Clone)]
pub struct RowIter {
    current_index: usize,
    row_width: usize,
    rows_count: usize,
}

impl RowIter {
    pub(crate) fn new(width: usize, height: usize) -> RowIter {
        RowIter {
            current_index: 0,
            row_width: width,
            rows_count: height,
        }
    }
}

impl Iterator for RowIter {
    type Item = Vec<GridCoordinate>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_index < self.rows_count {
            let row = self.current_index;
            let coords = (0..self.row_width)
                .map(|col: usize| GridCoordinate::new(col, row))
                .collect();
            self.current_index += 1;
            Some(coords)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.rows_count - self.current_index;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}
impl ExactSizeIterator for RowIter {}
impl FusedIterator for RowIter {}
