use std::fmt;

use petgraph::{Graph, Undirected};
use petgraph::graph::NodeIndex;

use crate::cells::{Cartesian2DCoordinate, Cell, CompassPrimary, CoordinateOptionSmallVec,
                   CoordinateSmallVec};
use crate::errors::*;
use crate::grid_iterators::{CellIter, QuadrantIter};
use crate::units::{GridSize, NodesCount};

/// Square grid of cells whose shared walls are cleared in pairs.
///
/// Only the generation stages inside this crate can open walls or mark exits. Everything
/// handed out to callers is a read-only view.
#[derive(Clone, PartialEq, Eq)]
pub struct MazeGrid {
    size: GridSize,
    cells: Vec<Cell>,
}

impl fmt::Debug for MazeGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "MazeGrid :: size: {:?}, open walls: {:?}, exits: {:?}",
               self.size, self.open_walls_count(), self.exits())
    }
}

impl MazeGrid {
    /// A grid where every wall is standing.
    pub(crate) fn new(size: GridSize) -> Result<MazeGrid> {
        if size.0 < 1 {
            return Err(ErrorKind::InvalidSize(size.0).into());
        }
        let NodesCount(cells_count) = size.cells_count();
        let cells = (0..cells_count)
            .map(|index| Cell::new(Cartesian2DCoordinate::from_row_major_index(index, size)))
            .collect();

        Ok(MazeGrid { size, cells })
    }

    #[inline]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// The entrance, where every walk through the maze starts.
    #[inline]
    pub fn origin(&self) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(0, 0)
    }

    #[inline]
    pub fn far_corner(&self) -> Cartesian2DCoordinate {
        let last = (self.size.0 - 1) as u32;
        Cartesian2DCoordinate::new(last, last)
    }

    /// Is the grid coordinate valid for this grid - within the grid's dimensions
    #[inline]
    pub fn is_valid_coordinate(&self, coord: Cartesian2DCoordinate) -> bool {
        coord.is_within(self.size)
    }

    /// Convert a grid coordinate to a one dimensional index in the range 0..size*size.
    /// Returns None if the grid coordinate is invalid.
    #[inline]
    pub fn grid_coordinate_to_index(&self, coord: Cartesian2DCoordinate) -> Option<usize> {
        coord.to_row_major_index(self.size)
    }

    pub fn cell(&self, coord: Cartesian2DCoordinate) -> Result<&Cell> {
        let index = self.checked_index(coord)?;
        Ok(&self.cells[index])
    }

    #[inline]
    pub fn iter(&self) -> CellIter {
        CellIter::new(self.size)
    }

    #[inline]
    pub fn iter_quadrant(&self) -> QuadrantIter {
        QuadrantIter::new(self.size)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Coordinates of every exit cell in row-major order.
    pub fn exits(&self) -> Vec<Cartesian2DCoordinate> {
        self.cells.iter()
            .filter(|cell| cell.is_exit())
            .map(Cell::coordinate)
            .collect()
    }

    /// The coordinate next to `coord` in `direction`, if it lies within the grid.
    pub fn neighbour_at_direction(&self,
                                  coord: Cartesian2DCoordinate,
                                  direction: CompassPrimary)
                                  -> Option<Cartesian2DCoordinate> {
        coord.offset(direction).filter(|neighbour| self.is_valid_coordinate(*neighbour))
    }

    pub fn neighbours_at_directions(&self,
                                    coord: Cartesian2DCoordinate,
                                    dirs: &[CompassPrimary])
                                    -> CoordinateOptionSmallVec {
        dirs.iter()
            .map(|direction| self.neighbour_at_direction(coord, *direction))
            .collect()
    }

    /// Cells that are to the North, East, South or West of a particular cell, but not
    /// necessarily reachable through an open wall.
    pub fn neighbours(&self, coord: Cartesian2DCoordinate) -> CoordinateSmallVec {
        self.neighbours_at_directions(coord, &CompassPrimary::ALL)
            .into_iter()
            .flatten()
            .collect()
    }

    /// Cells reachable in one step from `coord` through an open wall.
    pub fn links(&self, coord: Cartesian2DCoordinate) -> Result<CoordinateSmallVec> {
        let cell = self.cell(coord)?;
        Ok(cell.open_directions()
            .into_iter()
            .filter_map(|dir| self.neighbour_at_direction(coord, dir))
            .collect())
    }

    /// Can a walker standing at `coord` move in `direction`?
    pub fn can_move(&self, coord: Cartesian2DCoordinate, direction: CompassPrimary) -> Result<bool> {
        Ok(!self.cell(coord)?.wall(direction))
    }

    /// Where a walker standing at `coord` ends up after moving in `direction`, None when blocked.
    pub fn step(&self,
                coord: Cartesian2DCoordinate,
                direction: CompassPrimary)
                -> Result<Option<Cartesian2DCoordinate>> {
        if self.can_move(coord, direction)? {
            Ok(self.neighbour_at_direction(coord, direction))
        } else {
            Ok(None)
        }
    }

    /// Number of shared walls that are open, each pair counted once.
    pub fn open_walls_count(&self) -> usize {
        self.iter()
            .map(|coord| {
                [CompassPrimary::North, CompassPrimary::East].iter()
                    .filter(|dir| self.is_open_between(coord, **dir))
                    .count()
            })
            .sum()
    }

    /// Undirected graph of the open walls, node indices are row-major cell indices.
    pub fn to_graph(&self) -> Graph<Cartesian2DCoordinate, (), Undirected> {
        let NodesCount(nodes) = self.size.cells_count();
        let mut graph = Graph::with_capacity(nodes, self.size.interior_walls_count().0);
        for coord in self.iter() {
            let _ = graph.add_node(coord);
        }
        for (index, coord) in self.iter().enumerate() {
            for dir in [CompassPrimary::North, CompassPrimary::East].iter() {
                if self.is_open_between(coord, *dir) {
                    let neighbour_index = self.neighbour_at_direction(coord, *dir)
                        .and_then(|neighbour| self.grid_coordinate_to_index(neighbour));
                    if let Some(neighbour_index) = neighbour_index {
                        let _ = graph.add_edge(NodeIndex::new(index), NodeIndex::new(neighbour_index), ());
                    }
                }
            }
        }
        graph
    }

    /// Open the wall on the `direction` side of `coord` together with the neighbour's
    /// facing wall.
    ///
    /// Returns true if the wall was standing and is now open. Boundary walls have no
    /// neighbour and are never opened.
    pub(crate) fn open_wall(&mut self,
                            coord: Cartesian2DCoordinate,
                            direction: CompassPrimary)
                            -> Result<bool> {
        let index = self.checked_index(coord)?;
        let neighbour_index = match self.neighbour_at_direction(coord, direction)
            .and_then(|neighbour| self.grid_coordinate_to_index(neighbour)) {
            Some(neighbour_index) => neighbour_index,
            None => return Ok(false),
        };

        let was_standing = self.cells[index].wall(direction);
        self.cells[index].clear_wall(direction);
        self.cells[neighbour_index].clear_wall(direction.opposite());
        Ok(was_standing)
    }

    pub(crate) fn mark_exit(&mut self, coord: Cartesian2DCoordinate) -> Result<()> {
        let index = self.checked_index(coord)?;
        self.cells[index].mark_exit();
        Ok(())
    }

    fn is_open_between(&self, coord: Cartesian2DCoordinate, direction: CompassPrimary) -> bool {
        self.neighbour_at_direction(coord, direction).is_some() &&
        self.cell(coord).map_or(false, |cell| !cell.wall(direction))
    }

    fn checked_index(&self, coord: Cartesian2DCoordinate) -> Result<usize> {
        self.grid_coordinate_to_index(coord)
            .ok_or_else(|| ErrorKind::OutOfBounds(coord.x, coord.y, self.size.0).into())
    }
}

/// Plain text dump of the maze, north at the top. Exits are drawn as `E`.
impl fmt::Display for MazeGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let GridSize(size) = self.size;

        for y in (0..size).rev() {
            let mut top_section = String::from("+");
            let mut middle_section = String::from("|");
            for x in 0..size {
                let coord = Cartesian2DCoordinate::new(x as u32, y as u32);
                let cell = &self.cells[y * size + x];
                top_section.push_str(if cell.wall(CompassPrimary::North) { "---+" } else { "   +" });
                middle_section.push_str(if cell.is_exit() { " E " } else { "   " });
                let east_open = self.is_open_between(coord, CompassPrimary::East);
                middle_section.push(if east_open { ' ' } else { '|' });
            }
            writeln!(f, "{}", top_section)?;
            writeln!(f, "{}", middle_section)?;
        }

        let bottom_section = "---+".repeat(size);
        writeln!(f, "+{}", bottom_section)
    }
}
