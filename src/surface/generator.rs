//! Wave surface generator driven by the noise field.

use log::{debug, info, trace};
use noise::NoiseFn;

use super::mesh::SurfaceMesh;
use crate::error::WaveResult;
use crate::grid::GridDimensions;
use crate::noise::NoiseField;
use crate::params::{NoiseParams, SurfaceConfig};

/// Owns a surface mesh and displaces its vertices once per tick
pub struct SurfaceGenerator<N> {
    dims: GridDimensions,
    spacing: [f32; 2],
    field: NoiseField<N>,
    mesh: SurfaceMesh,
}

impl<N: NoiseFn<f64, 2>> SurfaceGenerator<N> {
    /// Validate the configuration, then build the flat mesh and its static topology
    pub fn build(config: &SurfaceConfig, noise: N) -> WaveResult<Self> {
        let dims = config.validate()?;
        let field = NoiseField::new(noise, config.noise.clone())?;
        let mesh = SurfaceMesh::build(dims, config.spacing);

        info!(
            "Mesh generated: {}x{} vertices, total triangles: {}",
            dims.width(),
            dims.height(),
            dims.triangle_count()
        );

        Ok(Self {
            dims,
            spacing: config.spacing,
            field,
            mesh,
        })
    }

    /// Displace every vertex to `sample * intensity` at `time_s`, then recompute normals
    ///
    /// X and Z never change. Buffers are rewritten in place.
    pub fn tick(&mut self, time_s: f32) {
        let dims = self.dims;
        let intensity = self.field.params().intensity;

        let mut min_height = f32::INFINITY;
        let mut max_height = f32::NEG_INFINITY;

        for ((x, y), position) in dims.cells().zip(self.mesh.positions_mut()) {
            let height = self.field.sample(dims, x, y, time_s) * intensity;
            position[1] = height;
            min_height = min_height.min(height);
            max_height = max_height.max(height);
        }

        // Every height must be written before normals read the neighbours
        self.mesh.recompute_normals();

        trace!(
            "Surface tick t={:.3}s heights {:.3}..{:.3}",
            time_s,
            min_height,
            max_height
        );
    }

    /// Swap noise parameters without touching topology
    pub fn set_noise_params(&mut self, params: NoiseParams) -> WaveResult<()> {
        self.field.set_params(params)?;
        debug!("Surface noise parameters updated");
        Ok(())
    }

    pub fn mesh(&self) -> &SurfaceMesh {
        &self.mesh
    }

    pub fn dims(&self) -> GridDimensions {
        self.dims
    }

    pub fn spacing(&self) -> [f32; 2] {
        self.spacing
    }

    pub fn field(&self) -> &NoiseField<N> {
        &self.field
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WaveError;
    use crate::noise::UnitPerlin;
    use glam::Vec3;
    use noise::Constant;

    /// Returns the first noise coordinate
    struct XCoord;

    impl NoiseFn<f64, 2> for XCoord {
        fn get(&self, point: [f64; 2]) -> f64 {
            point[0]
        }
    }

    fn config(width: usize, height: usize) -> SurfaceConfig {
        SurfaceConfig {
            width,
            height,
            spacing: [1.0, 1.0],
            noise: NoiseParams::surface(),
        }
    }

    #[test]
    fn test_build_rejects_empty_axis() {
        assert!(matches!(
            SurfaceGenerator::build(&config(0, 10), Constant::new(0.5)),
            Err(WaveError::Configuration(_))
        ));
        assert!(SurfaceGenerator::build(&config(10, 0), Constant::new(0.5)).is_err());
    }

    #[test]
    fn test_build_rejects_zero_octaves() {
        let mut cfg = config(4, 4);
        cfg.noise.detail_levels = 0;
        assert!(SurfaceGenerator::build(&cfg, Constant::new(0.5)).is_err());
    }

    #[test]
    fn test_tick_displaces_height_only() {
        let mut generator = SurfaceGenerator::build(&config(4, 3), Constant::new(0.5)).unwrap();
        let before = generator.mesh().positions().to_vec();

        generator.tick(2.5);

        // Constant 0.5 samples to 1.0, surface intensity is 5
        for (old, new) in before.iter().zip(generator.mesh().positions()) {
            assert_eq!(new[0], old[0]);
            assert_eq!(new[2], old[2]);
            assert_eq!(new[1], 5.0);
        }
    }

    #[test]
    fn test_tick_preserves_buffer_lengths() {
        let mut generator =
            SurfaceGenerator::build(&config(8, 5), UnitPerlin::new(42)).unwrap();
        let triangles = generator.mesh().triangles().to_vec();
        let uv = generator.mesh().uv().to_vec();

        for frame in 0..5 {
            generator.tick(frame as f32 / 60.0);
        }

        let mesh = generator.mesh();
        assert_eq!(mesh.positions().len(), 40);
        assert_eq!(mesh.normals().len(), 40);
        assert_eq!(mesh.triangles(), triangles.as_slice());
        assert_eq!(mesh.uv(), uv.as_slice());
    }

    #[test]
    fn test_normals_follow_displacement() {
        // XCoord makes height linear in x: y = 2 * (x / 4) * scale * intensity = x
        let cfg = SurfaceConfig {
            noise: NoiseParams {
                scale: 1.0,
                intensity: 2.0,
                speed: 1.0,
                detail_offset: 0.0,
                detail_levels: 1,
            },
            ..config(4, 4)
        };
        let mut generator = SurfaceGenerator::build(&cfg, XCoord).unwrap();
        generator.tick(0.75);

        let expected = Vec3::new(-1.0, 1.0, 0.0).normalize();
        for &n in generator.mesh().normals() {
            assert!(Vec3::from_array(n).abs_diff_eq(expected, 1e-5), "{n:?}");
        }
    }

    #[test]
    fn test_tick_is_reproducible() {
        let mut a = SurfaceGenerator::build(&config(10, 10), UnitPerlin::new(5)).unwrap();
        let mut b = SurfaceGenerator::build(&config(10, 10), UnitPerlin::new(5)).unwrap();
        a.tick(1.25);
        b.tick(0.5);
        b.tick(1.25);
        assert_eq!(a.mesh(), b.mesh());
    }

    #[test]
    fn test_set_noise_params_changes_amplitude() {
        let mut generator = SurfaceGenerator::build(&config(3, 3), Constant::new(0.5)).unwrap();
        let params = NoiseParams {
            intensity: 0.5,
            ..NoiseParams::surface()
        };
        generator.set_noise_params(params).unwrap();
        generator.tick(0.0);
        assert!(generator.mesh().positions().iter().all(|p| p[1] == 0.5));
    }
}
