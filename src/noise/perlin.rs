//! Seeded 2D Perlin noise remapped to `[0, 1]`.

use noise::{NoiseFn, Perlin, ScaleBias};

/// Perlin noise with output in `[0, 1]`
///
/// Keeps samples non-negative so cube heights and colors never invert.
pub struct UnitPerlin {
    source: ScaleBias<f64, Perlin, 2>,
}

impl UnitPerlin {
    /// Create new noise primitive with seed
    pub fn new(seed: u32) -> Self {
        Self {
            source: ScaleBias::new(Perlin::new(seed))
                .set_scale(0.5)
                .set_bias(0.5),
        }
    }
}

impl NoiseFn<f64, 2> for UnitPerlin {
    fn get(&self, point: [f64; 2]) -> f64 {
        self.source.get(point).clamp(0.0, 1.0)
    }
}
