//! Discrete cube matrix configuration.

use super::NoiseParams;
use crate::error::{WaveError, WaveResult};
use crate::grid::GridDimensions;

/// Cube matrix configuration
#[derive(Debug, Clone, PartialEq)]
pub struct CellMatrixConfig {
    /// Cubes along X
    pub width: usize,

    /// Cubes along Z
    pub height: usize,

    /// Resting cube extent (world units); also the spacing between cube origins on X and Z
    pub cube_size: [f32; 3],

    pub noise: NoiseParams,
}

impl Default for CellMatrixConfig {
    fn default() -> Self {
        Self {
            width: 32,
            height: 32,
            cube_size: [1.0, 1.0, 1.0],
            noise: NoiseParams::default(),
        }
    }
}

impl CellMatrixConfig {
    /// Validate and return the grid dimensions
    pub fn validate(&self) -> WaveResult<GridDimensions> {
        let dims = GridDimensions::new(self.width, self.height)?;
        if !self.cube_size.iter().all(|s| s.is_finite()) {
            return Err(WaveError::configuration(format!(
                "cube size must be finite (got {:?})",
                self.cube_size
            )));
        }
        self.noise.validate()?;
        Ok(dims)
    }
}
