use error_chain::bail;
use tracing::debug;

use crate::cells::CompassPrimary;
use crate::errors::*;
use crate::grid::MazeGrid;
use crate::noise_field::NoiseTable;

/// Open the wall between every pair of horizontally or vertically adjacent cells whose noise
/// samples both lie above `threshold`.
///
/// Every pair is judged on the samples alone, so the cells can be visited in any order and
/// carving twice changes nothing. The resulting passages are usually disconnected from one
/// another; joining them up is the connectivity repair's job.
///
/// Returns how many walls were opened.
pub fn carve(grid: &mut MazeGrid, noise: &NoiseTable, threshold: f64) -> Result<usize> {
    if noise.size() != grid.size() {
        bail!(ErrorKind::InvalidConfig(format!("noise table of size {} cannot carve a grid of size {}",
                                               noise.size().0,
                                               grid.size().0)));
    }

    let is_open_space = |coord| noise.get(coord).map_or(false, |sample| sample > threshold);

    let mut opened = 0;
    for coord in grid.iter() {
        if !is_open_space(coord) {
            continue;
        }
        for dir in [CompassPrimary::West, CompassPrimary::South].iter() {
            if let Some(neighbour) = grid.neighbour_at_direction(coord, *dir) {
                if is_open_space(neighbour) && grid.open_wall(coord, *dir)? {
                    opened += 1;
                }
            }
        }
    }

    debug!(opened, threshold, "carved noise passages");
    Ok(opened)
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::cells::Cartesian2DCoordinate;
    use crate::noise_field::NoiseField;
    use crate::units::{GridSize, NoiseScale, Octaves};

    fn gc(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x, y)
    }

    fn table(size: usize, values: Vec<f64>) -> NoiseTable {
        NoiseTable::from_values(GridSize(size), values).expect("table matches grid")
    }

    #[test]
    fn pairs_above_threshold_are_opened() {
        let mut g = MazeGrid::new(GridSize(3)).unwrap();
        // row-major, y = 0 first
        let noise = table(3, vec![0.5, 0.5, -0.5,
                                  0.5, -0.5, -0.5,
                                  -0.5, -0.5, 0.9]);
        let opened = carve(&mut g, &noise, -0.1).unwrap();
        assert_eq!(opened, 2);
        assert!(g.can_move(gc(0, 0), CompassPrimary::East).unwrap());
        assert!(g.can_move(gc(1, 0), CompassPrimary::West).unwrap());
        assert!(g.can_move(gc(0, 0), CompassPrimary::North).unwrap());
        assert!(g.can_move(gc(0, 1), CompassPrimary::South).unwrap());
        assert!(!g.can_move(gc(1, 0), CompassPrimary::East).unwrap());
        assert!(g.links(gc(2, 2)).unwrap().is_empty());
    }

    #[test]
    fn samples_equal_to_threshold_stay_walled() {
        let mut g = MazeGrid::new(GridSize(2)).unwrap();
        let noise = table(2, vec![-0.1; 4]);
        assert_eq!(carve(&mut g, &noise, -0.1).unwrap(), 0);
        assert_eq!(g.open_walls_count(), 0);
    }

    #[test]
    fn everything_above_threshold_opens_every_interior_wall() {
        let mut g = MazeGrid::new(GridSize(4)).unwrap();
        let noise = table(4, vec![1.0; 16]);
        assert_eq!(carve(&mut g, &noise, -0.1).unwrap(), 24);
        assert_eq!(g.open_walls_count(), 24);
    }

    #[test]
    fn carving_is_idempotent() {
        let field = NoiseField::new(17, Octaves(3));
        let noise = field.sample_table(GridSize(20), NoiseScale(20.0));
        let mut g = MazeGrid::new(GridSize(20)).unwrap();
        let first = carve(&mut g, &noise, -0.1).unwrap();
        let once = g.clone();
        assert_eq!(carve(&mut g, &noise, -0.1).unwrap(), 0);
        assert_eq!(g, once);
        assert_eq!(g.open_walls_count(), first);
    }

    #[test]
    fn scan_order_does_not_matter() {
        let field = NoiseField::new(3, Octaves(3));
        let size = GridSize(12);
        let noise = field.sample_table(size, NoiseScale(20.0));
        let mut scanned = MazeGrid::new(size).unwrap();
        carve(&mut scanned, &noise, -0.1).unwrap();

        // Open the same pairs walking the grid backwards from the far corner.
        let mut reversed = MazeGrid::new(size).unwrap();
        let coords = reversed.iter().collect::<Vec<_>>();
        for coord in coords.into_iter().rev() {
            for dir in [CompassPrimary::East, CompassPrimary::North].iter() {
                if let Some(neighbour) = reversed.neighbour_at_direction(coord, *dir) {
                    let both_open = noise.get(coord).unwrap() > -0.1 &&
                                    noise.get(neighbour).unwrap() > -0.1;
                    if both_open {
                        reversed.open_wall(coord, *dir).unwrap();
                    }
                }
            }
        }
        assert_eq!(scanned, reversed);
    }

    #[test]
    fn mismatched_table_is_rejected() {
        let mut g = MazeGrid::new(GridSize(3)).unwrap();
        let noise = table(2, vec![1.0; 4]);
        assert!(carve(&mut g, &noise, -0.1).is_err());
        assert_eq!(g.open_walls_count(), 0);
    }
}
