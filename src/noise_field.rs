use std::fmt;

use noise::{Fbm, MultiFractal, NoiseFn, Perlin};

use crate::cells::Cartesian2DCoordinate;
use crate::units::{GridSize, NoiseScale, Octaves};

/// Seeded fractal Perlin noise over the plane.
///
/// Nearby sample points give correlated values, so thresholding samples taken on a grid
/// gives spatially coherent regions rather than salt and pepper noise.
pub struct NoiseField {
    seed: u32,
    octaves: Octaves,
    fbm: Fbm<Perlin>,
}

impl fmt::Debug for NoiseField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "NoiseField :: seed: {:?}, octaves: {:?}", self.seed, self.octaves)
    }
}

impl NoiseField {
    /// `octaves` is clamped to `1..=Fbm::MAX_OCTAVES`. Octave `i` is seeded with `seed + i`,
    /// wrapping past `u32::MAX`, so every seed is usable.
    pub fn new(seed: u32, octaves: Octaves) -> NoiseField {
        let octaves = Octaves(octaves.0.max(1).min(Fbm::<Perlin>::MAX_OCTAVES));
        let sources = (0..octaves.0)
            .map(|octave| Perlin::new(seed.wrapping_add(octave as u32)))
            .collect();
        let fbm = Fbm::<Perlin>::default()
            .set_octaves(octaves.0)
            .set_sources(sources);
        NoiseField { seed, octaves, fbm }
    }

    #[inline]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    #[inline]
    pub fn octaves(&self) -> Octaves {
        self.octaves
    }

    #[inline]
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        self.fbm.get([x, y])
    }

    /// Sample every lattice point of a `size * size` grid at `(x / scale, y / scale)`.
    pub fn sample_table(&self, size: GridSize, scale: NoiseScale) -> NoiseTable {
        let GridSize(side) = size;
        let NoiseScale(scale) = scale;
        let values = (0..side * side)
            .map(|index| {
                let coord = Cartesian2DCoordinate::from_row_major_index(index, size);
                self.sample(f64::from(coord.x) / scale, f64::from(coord.y) / scale)
            })
            .collect();
        NoiseTable { size, values }
    }
}

/// Precomputed noise samples, one per grid cell, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseTable {
    size: GridSize,
    values: Vec<f64>,
}

impl NoiseTable {
    /// Build a table from explicit row-major values. Returns None if the value count does not
    /// match the grid.
    pub fn from_values(size: GridSize, values: Vec<f64>) -> Option<NoiseTable> {
        if values.len() == size.cells_count().0 {
            Some(NoiseTable { size, values })
        } else {
            None
        }
    }

    #[inline]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// The sample for a cell, None outside the table.
    #[inline]
    pub fn get(&self, coord: Cartesian2DCoordinate) -> Option<f64> {
        coord.to_row_major_index(self.size).map(|index| self.values[index])
    }
}
