use std::fmt;

use crate::cells::Cartesian2DCoordinate;
use crate::units::GridSize;

/// Row-major walk over every coordinate of a square grid, starting at the origin.
#[derive(Clone)]
pub struct CellIter {
    size: GridSize,
    current_cell_number: usize,
    cells_count: usize,
}

impl CellIter {
    pub fn new(size: GridSize) -> CellIter {
        CellIter {
            size,
            current_cell_number: 0,
            cells_count: size.cells_count().0,
        }
    }
}

impl fmt::Debug for CellIter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "CellIter :: current_cell_number: {:?}, cells_count: {:?}",
               self.current_cell_number,
               self.cells_count)
    }
}

impl ExactSizeIterator for CellIter {} // default impl using size_hint()
impl Iterator for CellIter {
    type Item = Cartesian2DCoordinate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let coord = Cartesian2DCoordinate::from_row_major_index(self.current_cell_number,
                                                                    self.size);
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

/// Row-major walk over the far quadrant `x, y ∈ [size/2, size)`.
///
/// The scan order is fixed so exit selection tie-breaks are reproducible.
#[derive(Debug, Clone)]
pub struct QuadrantIter {
    start: usize,
    side: usize,
    current_cell_number: usize,
}

impl QuadrantIter {
    pub fn new(size: GridSize) -> QuadrantIter {
        let start = size.quadrant_start();
        QuadrantIter {
            start,
            side: size.0 - start,
            current_cell_number: 0,
        }
    }

    /// How many cells the quadrant holds in total.
    pub fn cells_count(&self) -> usize {
        self.side * self.side
    }
}

impl ExactSizeIterator for QuadrantIter {}
impl Iterator for QuadrantIter {
    type Item = Cartesian2DCoordinate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count() {
            let x = self.start + self.current_cell_number % self.side;
            let y = self.start + self.current_cell_number / self.side;
            self.current_cell_number += 1;
            Some(Cartesian2DCoordinate::new(x as u32, y as u32))
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cells_count() - self.current_cell_number;
        (remaining, Some(remaining))
    }
}
