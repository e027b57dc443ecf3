use tracing::info;

use crate::carving;
use crate::cells::Cartesian2DCoordinate;
use crate::config::MazeConfig;
use crate::connectivity::{self, RepairOutcome};
use crate::errors::*;
use crate::exits;
use crate::grid::MazeGrid;
use crate::noise_field::NoiseField;

/// Build a `size * size` maze from a single seed with the default settings.
///
/// The maze is carved from noise, repaired so the far corner is reachable from `(0, 0)`, and
/// given noise-biased exits in the far quadrant.
pub fn build(size: usize, seed: u32) -> Result<MazeGrid> {
    MazeGenerator::new(MazeConfig::new(size, seed)).generate()
}

/// What happened while building one maze.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct GenerationReport {
    pub walls_carved: usize,
    pub repair: RepairOutcome,
    /// Exit cells, primary exit first.
    pub exits: Vec<Cartesian2DCoordinate>,
}

/// Runs the noise carve, connectivity repair and exit placement stages in order.
#[derive(Debug, Clone)]
pub struct MazeGenerator {
    config: MazeConfig,
}

impl MazeGenerator {
    pub fn new(config: MazeConfig) -> MazeGenerator {
        MazeGenerator { config }
    }

    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    pub fn generate(&self) -> Result<MazeGrid> {
        self.generate_with_report().map(|(grid, _)| grid)
    }

    /// Each call builds a brand new grid, nothing is shared between calls.
    pub fn generate_with_report(&self) -> Result<(MazeGrid, GenerationReport)> {
        let config = &self.config;
        config.validate()?;

        let mut grid = MazeGrid::new(config.size)?;

        let carve_noise = NoiseField::new(config.carve_seed, config.octaves)
            .sample_table(config.size, config.carve_scale);
        let walls_carved = carving::carve(&mut grid, &carve_noise, config.threshold)
            .chain_err(|| "carving noise passages failed")?;

        let repair = connectivity::ensure_path(&mut grid)
            .chain_err(|| "connectivity repair failed")?;

        let exits = exits::place_exits(&mut grid,
                                       config.exit_placement,
                                       config.exit_seed,
                                       config.octaves,
                                       config.max_secondary_exits)
            .chain_err(|| "exit placement failed")?;

        let report = GenerationReport {
            walls_carved,
            repair,
            exits,
        };
        info!(size = config.size.0,
              carve_seed = config.carve_seed,
              exit_seed = config.exit_seed,
              ?report,
              "built maze");
        Ok((grid, report))
    }
}

#[cfg(test)]
mod tests {

    use quickcheck::{quickcheck, TestResult};

    use super::*;
    use crate::cells::CompassPrimary;
    use crate::connectivity::is_reachable;
    use crate::exits::{primary_exit, ExitPlacement};
    use crate::units::{GridSize, NoiseScale, Octaves};

    fn assert_walls_symmetric(grid: &MazeGrid) {
        for coord in grid.iter() {
            let cell = grid.cell(coord).unwrap();
            for dir in CompassPrimary::ALL.iter() {
                match grid.neighbour_at_direction(coord, *dir) {
                    Some(neighbour) => {
                        let facing = grid.cell(neighbour).unwrap().wall(dir.opposite());
                        assert_eq!(cell.wall(*dir), facing, "{} {:?}", coord, dir);
                    }
                    None => assert!(cell.wall(*dir), "boundary open at {} {:?}", coord, dir),
                }
            }
        }
    }

    fn exits_in_quadrant(grid: &MazeGrid) -> bool {
        let start = grid.size().quadrant_start() as u32;
        let exits = grid.exits();
        !exits.is_empty() && exits.iter().all(|c| c.x >= start && c.y >= start)
    }

    #[test]
    fn zero_size_fails() {
        match build(0, 7) {
            Err(Error(ErrorKind::InvalidSize(0), _)) => (),
            other => panic!("expected InvalidSize, got {:?}", other),
        }
    }

    #[test]
    fn single_cell_maze() {
        let grid = build(1, 3).unwrap();
        let origin = Cartesian2DCoordinate::new(0, 0);
        assert!(grid.cell(origin).unwrap().is_exit());
        assert_eq!(grid.exits(), vec![origin]);
        assert_eq!(grid.open_walls_count(), 0);
    }

    #[test]
    fn default_sized_maze_is_solvable() {
        let grid = build(100, 2024).unwrap();
        assert!(is_reachable(&grid, grid.origin(), grid.far_corner()).unwrap());
        assert_walls_symmetric(&grid);
        assert!(exits_in_quadrant(&grid));
        assert!(grid.exits().len() <= 6);
    }

    #[test]
    fn build_is_deterministic() {
        let a = build(40, 11).unwrap();
        let b = build(40, 11).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.exits(), b.exits());
    }

    #[test]
    fn out_of_bounds_lookups_fail() {
        let grid = build(5, 1).unwrap();
        assert!(grid.cell(Cartesian2DCoordinate::new(5, 0)).is_err());
        assert!(grid.cell(Cartesian2DCoordinate::new(0, u32::MAX)).is_err());
    }

    #[test]
    fn far_corner_configuration() {
        let config = MazeConfig::new(30, 5).with_exit_placement(ExitPlacement::FarCorner);
        let grid = MazeGenerator::new(config).generate().unwrap();
        assert_eq!(grid.exits(), vec![Cartesian2DCoordinate::new(29, 29)]);
    }

    #[test]
    fn two_by_two_with_nothing_carved() {
        // Nothing lies above an unreachable threshold, so the carve opens no walls.
        let mut config = MazeConfig::new(2, 9);
        config.threshold = 10.0;
        let (grid, report) = MazeGenerator::new(config).generate_with_report().unwrap();
        assert_eq!(report.walls_carved, 0);
        assert_eq!(report.repair, RepairOutcome::Repaired { walls_opened: 2 });
        assert_eq!(grid.open_walls_count(), 2);
        assert_eq!(grid.exits(), vec![Cartesian2DCoordinate::new(1, 1)]);
    }

    #[test]
    fn fully_open_maze_needs_no_repair() {
        let mut config = MazeConfig::new(8, 9);
        config.threshold = -10.0;
        let (grid, report) = MazeGenerator::new(config).generate_with_report().unwrap();
        assert_eq!(report.repair, RepairOutcome::AlreadyConnected);
        assert_eq!(report.walls_carved, GridSize(8).interior_walls_count().0);
        assert_eq!(grid.open_walls_count(), report.walls_carved);
    }

    #[test]
    fn report_matches_grid() {
        let (grid, report) = MazeGenerator::new(MazeConfig::new(25, 31)).generate_with_report().unwrap();
        let mut exits = report.exits.clone();
        exits.sort_by_key(|c| (c.y, c.x));
        assert_eq!(exits, grid.exits());
        let repaired = match report.repair {
            RepairOutcome::AlreadyConnected => 0,
            RepairOutcome::Repaired { walls_opened } => walls_opened,
        };
        assert_eq!(grid.open_walls_count(), report.walls_carved + repaired);
    }

    #[test]
    fn primary_exit_depends_only_on_exit_seed() {
        let exit_seed = 4242;
        let primaries = (0..5)
            .map(|carve_seed| {
                let config = MazeConfig::new(24, carve_seed).with_exit_seed(exit_seed);
                let (_, report) = MazeGenerator::new(config).generate_with_report().unwrap();
                report.exits[0]
            })
            .collect::<Vec<_>>();
        assert!(primaries.windows(2).all(|pair| pair[0] == pair[1]));

        let coarse = NoiseField::new(exit_seed, MazeConfig::default().octaves);
        let walled = MazeGrid::new(GridSize(24)).unwrap();
        assert_eq!(primaries[0], primary_exit(&walled, &coarse));
    }

    #[test]
    fn seeds_at_the_top_of_the_range_build() {
        let grid = build(5, u32::MAX).unwrap();
        assert_walls_symmetric(&grid);
        assert!(is_reachable(&grid, grid.origin(), grid.far_corner()).unwrap());
        assert!(exits_in_quadrant(&grid));

        let config = MazeConfig::new(5, 1).with_exit_seed(u32::MAX);
        let grid = MazeGenerator::new(config).generate().unwrap();
        assert!(exits_in_quadrant(&grid));

        let mut config = MazeConfig::new(5, u32::MAX - 1).with_exit_seed(u32::MAX - 2);
        config.octaves = Octaves(8);
        let (grid, report) = MazeGenerator::new(config).generate_with_report().unwrap();
        assert!(grid.exits().contains(&report.exits[0]));
        assert!(is_reachable(&grid, grid.origin(), grid.far_corner()).unwrap());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = MazeConfig::new(10, 1);
        config.carve_scale = NoiseScale(-1.0);
        assert!(MazeGenerator::new(config).generate().is_err());
    }

    #[test]
    fn quickcheck_generated_mazes_hold_invariants() {
        fn prop(size: u8, seed: u32) -> TestResult {
            let size = usize::from(size % 48);
            if size == 0 {
                return TestResult::discard();
            }
            let grid = match build(size, seed) {
                Ok(grid) => grid,
                Err(_) => return TestResult::failed(),
            };
            assert_walls_symmetric(&grid);
            let solvable = is_reachable(&grid, grid.origin(), grid.far_corner()).unwrap_or(false);
            TestResult::from_bool(solvable && exits_in_quadrant(&grid))
        }
        quickcheck(prop as fn(u8, u32) -> TestResult);
    }

    #[test]
    fn quickcheck_build_is_deterministic() {
        fn prop(size: u8, seed: u32) -> TestResult {
            let size = usize::from(size % 32) + 1;
            match (build(size, seed), build(size, seed)) {
                (Ok(a), Ok(b)) => TestResult::from_bool(a == b),
                _ => TestResult::failed(),
            }
        }
        quickcheck(prop as fn(u8, u32) -> TestResult);
    }
}
