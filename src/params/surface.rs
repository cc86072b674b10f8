//! Continuous wave surface configuration.

use super::NoiseParams;
use crate::error::{WaveError, WaveResult};
use crate::grid::GridDimensions;

/// Wave surface mesh configuration
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceConfig {
    /// Vertices along X
    pub width: usize,

    /// Vertices along Z
    pub height: usize,

    /// Distance between adjacent vertices along X and Z (world units)
    pub spacing: [f32; 2],

    pub noise: NoiseParams,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            spacing: [1.0, 1.0],
            noise: NoiseParams::surface(),
        }
    }
}

impl SurfaceConfig {
    /// Validate and return the grid dimensions
    pub fn validate(&self) -> WaveResult<GridDimensions> {
        let dims = GridDimensions::new(self.width, self.height)?;
        if !self.spacing.iter().all(|s| s.is_finite()) {
            return Err(WaveError::configuration(format!(
                "spacing must be finite (got {:?})",
                self.spacing
            )));
        }
        self.noise.validate()?;
        Ok(dims)
    }
}
