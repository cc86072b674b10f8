//! Time-varying multi-octave noise field.

use log::debug;
use noise::NoiseFn;

use crate::error::WaveResult;
use crate::grid::GridDimensions;
use crate::params::NoiseParams;

/// Precomputed per-octave domain shift and frequency
#[derive(Debug, Clone, Copy, PartialEq)]
struct Octave {
    span: f64,
    frequency: f64,
}

fn octave_table(params: &NoiseParams) -> Vec<Octave> {
    let levels = params.detail_levels as f64;
    let base_frequency = params.scale as f64 / levels;

    (0..params.detail_levels)
        .map(|octave| Octave {
            span: params.detail_offset as f64 * octave as f64,
            frequency: base_frequency * (octave + 1) as f64,
        })
        .collect()
}

/// Scalar field over the lattice built from an injected 2D noise primitive
///
/// Each sample sums, per octave, the primitive evaluated at the cell's normalized
/// coordinates shifted forward and backward by `time * speed`, then divides by the
/// octave count. Pure given the cell, time, parameters and primitive.
pub struct NoiseField<N> {
    noise: N,
    params: NoiseParams,
    octaves: Vec<Octave>,
}

impl<N: NoiseFn<f64, 2>> NoiseField<N> {
    /// Create a field, rejecting parameters that cannot produce finite samples
    pub fn new(noise: N, params: NoiseParams) -> WaveResult<Self> {
        params.validate()?;
        let octaves = octave_table(&params);
        Ok(Self {
            noise,
            params,
            octaves,
        })
    }

    pub fn params(&self) -> &NoiseParams {
        &self.params
    }

    /// Replace the parameters; the field is left untouched if they are invalid
    pub fn set_params(&mut self, params: NoiseParams) -> WaveResult<()> {
        params.validate()?;
        debug!("Noise field reconfigured: {:?}", params);
        self.octaves = octave_table(&params);
        self.params = params;
        Ok(())
    }

    /// Sample cell `(x, y)` of `dims` at `time_s` seconds
    ///
    /// # Panics
    /// If the cell lies outside `dims`.
    pub fn sample(&self, dims: GridDimensions, x: usize, y: usize, time_s: f32) -> f32 {
        assert!(
            dims.contains(x, y),
            "cell ({x}, {y}) is outside a {}x{} grid",
            dims.width(),
            dims.height()
        );

        let offset = time_s as f64 * self.params.speed as f64;
        let u = x as f64 / dims.width() as f64;
        let v = y as f64 / dims.height() as f64;

        let sum: f64 = self
            .octaves
            .iter()
            .map(|octave| {
                let x_coord = octave.span + u * octave.frequency;
                let y_coord = octave.span + v * octave.frequency;
                self.noise.get([x_coord + offset, y_coord + offset])
                    + self.noise.get([x_coord - offset, y_coord - offset])
            })
            .sum();

        (sum / self.octaves.len() as f64) as f32
    }

    /// Sample every cell into `out`, in flatten order
    ///
    /// # Panics
    /// If `out.len()` differs from the cell count.
    pub fn fill(&self, dims: GridDimensions, time_s: f32, out: &mut [f32]) {
        assert_eq!(
            out.len(),
            dims.cell_count(),
            "sample buffer does not match the grid"
        );
        for ((x, y), slot) in dims.cells().zip(out.iter_mut()) {
            *slot = self.sample(dims, x, y, time_s);
        }
    }
}
