use bit_set::BitSet;
use tracing::{debug, trace};

use crate::cells::{Cartesian2DCoordinate, CompassPrimary};
use crate::errors::*;
use crate::grid::MazeGrid;

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum RepairOutcome {
    /// The far corner was already reachable from the origin, nothing was changed.
    AlreadyConnected,
    /// A staircase corridor was forced open from the far corner back to the origin.
    Repaired { walls_opened: usize },
}

/// Row-major indices of every cell reachable from `from` through open walls.
///
/// Depth first with an explicit stack; the order cells are visited in has no bearing on the
/// resulting set.
pub fn reachable_cells(grid: &MazeGrid, from: Cartesian2DCoordinate) -> Result<BitSet> {
    let mut visited = BitSet::with_capacity(grid.size().cells_count().0);
    let mut stack = vec![from];
    let _ = grid.cell(from)?;

    while let Some(coord) = stack.pop() {
        let index = match grid.grid_coordinate_to_index(coord) {
            Some(index) => index,
            None => continue,
        };
        if !visited.insert(index) {
            continue;
        }
        for linked in grid.links(coord)?.iter() {
            let unseen = grid.grid_coordinate_to_index(*linked)
                .map_or(false, |linked_index| !visited.contains(linked_index));
            if unseen {
                stack.push(*linked);
            }
        }
    }

    Ok(visited)
}

/// Is there a path of open walls between the two cells?
pub fn is_reachable(grid: &MazeGrid,
                    from: Cartesian2DCoordinate,
                    to: Cartesian2DCoordinate)
                    -> Result<bool> {
    let to_index = grid.grid_coordinate_to_index(to)
        .ok_or_else(|| Error::from(ErrorKind::OutOfBounds(to.x, to.y, grid.size().0)))?;
    Ok(reachable_cells(grid, from)?.contains(to_index))
}

/// Make sure the far corner can be reached from the origin, forcing a corridor open if it
/// cannot. Existing passages are never closed.
pub fn ensure_path(grid: &mut MazeGrid) -> Result<RepairOutcome> {
    let (origin, far_corner) = (grid.origin(), grid.far_corner());
    if is_reachable(grid, origin, far_corner)? {
        debug!(size = grid.size().0, "far corner already reachable");
        return Ok(RepairOutcome::AlreadyConnected);
    }

    let walls_opened = carve_staircase(grid)?;
    debug!(size = grid.size().0, walls_opened, "forced a corridor to the far corner");
    Ok(RepairOutcome::Repaired { walls_opened })
}

/// Walk from the far corner to the origin, alternating one step west and one step south
/// while each axis is still above zero, opening every wall crossed.
///
/// Opens at most `2 * (size - 1)` walls and returns how many were actually standing.
pub fn carve_staircase(grid: &mut MazeGrid) -> Result<usize> {
    let far_corner = grid.far_corner();
    let (mut x, mut y) = (far_corner.x, far_corner.y);
    let mut opened = 0;

    while x > 0 || y > 0 {
        if x > 0 {
            if grid.open_wall(Cartesian2DCoordinate::new(x, y), CompassPrimary::West)? {
                opened += 1;
            }
            x -= 1;
        }
        if y > 0 {
            if grid.open_wall(Cartesian2DCoordinate::new(x, y), CompassPrimary::South)? {
                opened += 1;
            }
            y -= 1;
        }
        trace!(x, y, "staircase step");
    }

    Ok(opened)
}
