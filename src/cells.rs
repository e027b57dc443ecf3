use std::fmt;

use smallvec::SmallVec;

use crate::units::GridSize;

pub type CoordinateSmallVec = SmallVec<[Cartesian2DCoordinate; 4]>;
pub type CoordinateOptionSmallVec = SmallVec<[Option<Cartesian2DCoordinate>; 4]>;

/// Grid position. `x` grows eastwards, `y` grows northwards.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Cartesian2DCoordinate {
    pub x: u32,
    pub y: u32,
}

impl Cartesian2DCoordinate {
    pub fn new(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate { x, y }
    }

    #[inline]
    pub fn from_row_major_index(index: usize, size: GridSize) -> Cartesian2DCoordinate {
        let GridSize(width) = size;
        Cartesian2DCoordinate::new((index % width) as u32, (index / width) as u32)
    }

    /// Row-major index of the coordinate, or None if it lies outside a grid of `size`.
    #[inline]
    pub fn to_row_major_index(self, size: GridSize) -> Option<usize> {
        if self.is_within(size) {
            Some(self.y as usize * size.0 + self.x as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn is_within(self, size: GridSize) -> bool {
        (self.x as usize) < size.0 && (self.y as usize) < size.0
    }

    /// Creates a new coordinate offset 1 cell away in the given direction.
    /// Returns None if the coordinate is not representable, the grid upper bound is not checked.
    pub fn offset(self, dir: CompassPrimary) -> Option<Cartesian2DCoordinate> {
        let (x, y) = (self.x, self.y);
        match dir {
            CompassPrimary::North => y.checked_add(1).map(|y| Cartesian2DCoordinate { x, y }),
            CompassPrimary::South => y.checked_sub(1).map(|y| Cartesian2DCoordinate { x, y }),
            CompassPrimary::East => x.checked_add(1).map(|x| Cartesian2DCoordinate { x, y }),
            CompassPrimary::West => x.checked_sub(1).map(|x| Cartesian2DCoordinate { x, y }),
        }
    }
}

impl From<(u32, u32)> for Cartesian2DCoordinate {
    fn from(x_y_pair: (u32, u32)) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x_y_pair.0, x_y_pair.1)
    }
}

impl fmt::Display for Cartesian2DCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub enum CompassPrimary {
    North,
    East,
    South,
    West,
}

impl CompassPrimary {
    pub const ALL: [CompassPrimary; 4] = [CompassPrimary::North,
                                          CompassPrimary::East,
                                          CompassPrimary::South,
                                          CompassPrimary::West];

    /// The direction the neighbouring cell sees the shared wall from.
    #[inline]
    pub fn opposite(self) -> CompassPrimary {
        match self {
            CompassPrimary::North => CompassPrimary::South,
            CompassPrimary::East => CompassPrimary::West,
            CompassPrimary::South => CompassPrimary::North,
            CompassPrimary::West => CompassPrimary::East,
        }
    }

    #[inline]
    fn wall_index(self) -> usize {
        match self {
            CompassPrimary::North => 0,
            CompassPrimary::East => 1,
            CompassPrimary::South => 2,
            CompassPrimary::West => 3,
        }
    }
}

/// One room of the maze: four wall flags and whether it is an exit.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Cell {
    coordinate: Cartesian2DCoordinate,
    walls: [bool; 4],
    is_exit: bool,
}

impl Cell {
    /// A cell with every wall standing.
    pub fn new(coordinate: Cartesian2DCoordinate) -> Cell {
        Cell {
            coordinate,
            walls: [true; 4],
            is_exit: false,
        }
    }

    #[inline]
    pub fn coordinate(&self) -> Cartesian2DCoordinate {
        self.coordinate
    }

    /// Is there a wall on the `dir` side of this cell?
    #[inline]
    pub fn wall(&self, dir: CompassPrimary) -> bool {
        self.walls[dir.wall_index()]
    }

    #[inline]
    pub fn is_exit(&self) -> bool {
        self.is_exit
    }

    pub fn open_directions(&self) -> SmallVec<[CompassPrimary; 4]> {
        CompassPrimary::ALL.iter()
            .cloned()
            .filter(|dir| !self.wall(*dir))
            .collect()
    }

    // Only the grid may clear a wall, it must clear the neighbour's side at the same time.
    #[inline]
    pub(crate) fn clear_wall(&mut self, dir: CompassPrimary) {
        self.walls[dir.wall_index()] = false;
    }

    #[inline]
    pub(crate) fn mark_exit(&mut self) {
        self.is_exit = true;
    }
}
