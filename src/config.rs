use serde_derive::{Deserialize, Serialize};

use crate::errors::*;
use crate::exits::ExitPlacement;
use crate::units::{GridSize, NoiseScale, Octaves};

/// Smallest maze the settings screen offers.
pub const MIN_SIZE: usize = 10;
/// Largest maze the settings screen offers.
pub const MAX_SIZE: usize = 200;
/// How much one press of the settings screen's +/- buttons changes the size by.
pub const SIZE_STEP: usize = 10;

/// Everything maze generation reads. Passed explicitly into the generator, there is no
/// global settings state.
#[derive(PartialEq, Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    pub size: GridSize,
    /// Seed of the fine noise field that carves passages.
    pub carve_seed: u32,
    /// Seed of the coarse noise field and RNG that place exits.
    pub exit_seed: u32,
    pub octaves: Octaves,
    pub carve_scale: NoiseScale,
    /// Cells whose carve sample is strictly above this are open space.
    pub threshold: f64,
    pub exit_placement: ExitPlacement,
    pub max_secondary_exits: usize,
}

impl Default for MazeConfig {
    fn default() -> MazeConfig {
        MazeConfig {
            size: GridSize(100),
            carve_seed: 0,
            exit_seed: derive_exit_seed(0),
            octaves: Octaves(3),
            carve_scale: NoiseScale(20.0),
            threshold: -0.1,
            exit_placement: ExitPlacement::NoiseBiased,
            max_secondary_exits: 5,
        }
    }
}

/// A second seed, decorrelated from `seed`, for the exit placement noise.
pub fn derive_exit_seed(seed: u32) -> u32 {
    let mut h = seed ^ 0x9E37_79B9;
    h = h.wrapping_mul(0x85EB_CA6B);
    h ^= h >> 13;
    h = h.wrapping_mul(0xC2B2_AE35);
    h ^ (h >> 16)
}

impl MazeConfig {
    /// Default settings for a `size * size` maze where both seeds come from `seed`.
    pub fn new(size: usize, seed: u32) -> MazeConfig {
        MazeConfig {
            size: GridSize(size),
            carve_seed: seed,
            exit_seed: derive_exit_seed(seed),
            ..MazeConfig::default()
        }
    }

    pub fn with_exit_seed(mut self, exit_seed: u32) -> MazeConfig {
        self.exit_seed = exit_seed;
        self
    }

    pub fn with_exit_placement(mut self, exit_placement: ExitPlacement) -> MazeConfig {
        self.exit_placement = exit_placement;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.size.0 < 1 {
            return Err(ErrorKind::InvalidSize(self.size.0).into());
        }
        if self.size.0 > u32::MAX as usize {
            return Err(ErrorKind::InvalidSize(self.size.0).into());
        }
        if self.octaves.0 < 1 {
            return Err(ErrorKind::InvalidConfig("at least one noise octave is needed".into()).into());
        }
        let NoiseScale(scale) = self.carve_scale;
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ErrorKind::InvalidConfig(format!("carve scale {} must be positive", scale)).into());
        }
        if !self.threshold.is_finite() {
            return Err(ErrorKind::InvalidConfig(format!("threshold {} must be finite", self.threshold)).into());
        }
        Ok(())
    }

    /// One step up, clamped to the settings range.
    pub fn grow_size(&mut self) {
        self.size = GridSize((self.size.0 + SIZE_STEP).min(MAX_SIZE));
    }

    /// One step down, clamped to the settings range.
    pub fn shrink_size(&mut self) {
        self.size = GridSize(self.size.0.saturating_sub(SIZE_STEP).max(MIN_SIZE));
    }
}
