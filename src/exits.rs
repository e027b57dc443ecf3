use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;
use serde_derive::{Deserialize, Serialize};
use tracing::debug;

use crate::cells::Cartesian2DCoordinate;
use crate::errors::*;
use crate::grid::MazeGrid;
use crate::noise_field::NoiseField;
use crate::units::Octaves;
use crate::utils;

/// How the exit cells of a maze are chosen.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExitPlacement {
    /// Only the far corner `(size - 1, size - 1)` is an exit.
    FarCorner,
    /// The highest coarse noise sample in the far quadrant is the primary exit, a few random
    /// quadrant cells are added as secondary exits.
    NoiseBiased,
}

impl Default for ExitPlacement {
    fn default() -> ExitPlacement {
        ExitPlacement::NoiseBiased
    }
}

/// The far quadrant cell with the highest sample of the coarse field taken at
/// `(x / size, y / size)`. Ties go to the first cell in row-major scan order.
///
/// Only the noise field and the grid size are consulted, never the walls.
pub fn primary_exit(grid: &MazeGrid, coarse: &NoiseField) -> Cartesian2DCoordinate {
    let side = grid.size().0 as f64;
    let mut best: Option<(Cartesian2DCoordinate, f64)> = None;

    for coord in grid.iter_quadrant() {
        let sample = coarse.sample(f64::from(coord.x) / side, f64::from(coord.y) / side);
        let is_better = match best {
            Some((_, best_sample)) => sample > best_sample,
            None => true,
        };
        if is_better {
            best = Some((coord, sample));
        }
    }

    // The quadrant always holds at least the far corner.
    best.map_or_else(|| grid.far_corner(), |(coord, _)| coord)
}

/// Distinct random quadrant cells other than `primary`, between 0 and `max_count` of them.
///
/// The count is capped by how many other cells the quadrant has.
pub fn secondary_exits(grid: &MazeGrid,
                       primary: Cartesian2DCoordinate,
                       max_count: usize,
                       rng: &mut XorShiftRng)
                       -> Vec<Cartesian2DCoordinate> {
    let quadrant = grid.iter_quadrant();
    let available = quadrant.cells_count() - 1;
    let wanted = rng.gen_range(0..=max_count).min(available);

    let start = grid.size().quadrant_start() as u32;
    let end = grid.size().0 as u32;
    let mut chosen = utils::fnv_hashset(wanted);
    let mut exits = Vec::with_capacity(wanted);
    while exits.len() < wanted {
        let candidate = Cartesian2DCoordinate::new(rng.gen_range(start..end),
                                                   rng.gen_range(start..end));
        if candidate != primary && chosen.insert(candidate) {
            exits.push(candidate);
        }
    }
    exits
}

/// Mark the exits of `grid` and return them, primary exit first.
pub fn place_exits(grid: &mut MazeGrid,
                   placement: ExitPlacement,
                   exit_seed: u32,
                   octaves: Octaves,
                   max_secondary: usize)
                   -> Result<Vec<Cartesian2DCoordinate>> {
    let exits = match placement {
        ExitPlacement::FarCorner => vec![grid.far_corner()],
        ExitPlacement::NoiseBiased => {
            let coarse = NoiseField::new(exit_seed, octaves);
            let primary = primary_exit(grid, &coarse);
            let mut rng = XorShiftRng::seed_from_u64(u64::from(exit_seed));
            let mut exits = vec![primary];
            exits.extend(secondary_exits(grid, primary, max_secondary, &mut rng));
            exits
        }
    };

    for exit in &exits {
        grid.mark_exit(*exit)?;
    }
    debug!(?placement, count = exits.len(), primary = %exits[0], "placed exits");
    Ok(exits)
}
