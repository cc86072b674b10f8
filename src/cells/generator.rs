//! Cube matrix generator driven by the noise field.

use log::{debug, info, trace};
use noise::NoiseFn;

use super::instance::{CellContainer, CellInstance, REST_COLOR};
use crate::error::WaveResult;
use crate::grid::GridDimensions;
use crate::noise::NoiseField;
use crate::params::{CellMatrixConfig, NoiseParams};

/// Map a sample to the blue-weighted color ramp `(s/4, s/2, s)`
#[inline]
fn ramp_color(sample: f32) -> [f32; 3] {
    [sample / 4.0, sample / 2.0, sample]
}

/// Owns one instance record per cell and rescales/recolors them once per tick
pub struct CellMatrixGenerator<N> {
    dims: GridDimensions,
    cube_size: [f32; 3],
    field: NoiseField<N>,
    instances: Vec<CellInstance>,
}

impl<N: NoiseFn<f64, 2>> CellMatrixGenerator<N> {
    /// Validate the configuration and lay out one resting cube per cell
    pub fn build(config: &CellMatrixConfig, noise: N) -> WaveResult<Self> {
        let dims = config.validate()?;
        let field = NoiseField::new(noise, config.noise.clone())?;
        let cube_size = config.cube_size;

        let instances = dims
            .cells()
            .map(|(x, y)| CellInstance {
                position: [x as f32 * cube_size[0], 0.0, y as f32 * cube_size[2]],
                scale: cube_size,
                color: REST_COLOR,
            })
            .collect();

        info!(
            "Cube matrix generated: {}x{} cells, {} octaves",
            dims.width(),
            dims.height(),
            config.noise.detail_levels
        );

        Ok(Self {
            dims,
            cube_size,
            field,
            instances,
        })
    }

    /// Build, then materialize every cell in the host's container
    pub fn build_into<C: CellContainer>(
        config: &CellMatrixConfig,
        noise: N,
        container: &mut C,
    ) -> WaveResult<Self> {
        let generator = Self::build(config, noise)?;
        for (index, instance) in generator.instances.iter().enumerate() {
            container.materialize(index, instance);
        }
        Ok(generator)
    }

    /// Recolor and rescale every cube from the field at `time_s`
    pub fn tick(&mut self, time_s: f32) {
        let dims = self.dims;
        let [size_x, size_y, size_z] = self.cube_size;
        let intensity = self.field.params().intensity;

        let mut min_sample = f32::INFINITY;
        let mut max_sample = f32::NEG_INFINITY;

        for ((x, y), instance) in dims.cells().zip(self.instances.iter_mut()) {
            let sample = self.field.sample(dims, x, y, time_s);
            instance.color = ramp_color(sample);
            instance.scale = [size_x, size_y * sample * intensity, size_z];
            min_sample = min_sample.min(sample);
            max_sample = max_sample.max(sample);
        }

        trace!(
            "Cube tick t={:.3}s samples {:.3}..{:.3}",
            time_s,
            min_sample,
            max_sample
        );
    }

    /// Push the current records to the host's container
    pub fn sync<C: CellContainer>(&self, container: &mut C) {
        for (index, instance) in self.instances.iter().enumerate() {
            container.update(index, instance);
        }
    }

    /// Swap noise parameters without touching the layout
    pub fn set_noise_params(&mut self, params: NoiseParams) -> WaveResult<()> {
        self.field.set_params(params)?;
        debug!("Cube matrix noise parameters updated");
        Ok(())
    }

    pub fn instances(&self) -> &[CellInstance] {
        &self.instances
    }

    /// Instance records as raw bytes for GPU upload
    pub fn instance_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }

    pub fn dims(&self) -> GridDimensions {
        self.dims
    }

    pub fn cube_size(&self) -> [f32; 3] {
        self.cube_size
    }

    pub fn field(&self) -> &NoiseField<N> {
        &self.field
    }
}
