//! Multi-octave noise parameters.

use log::warn;

use crate::error::{WaveError, WaveResult};

/// Highest octave count the generators were tuned for
const TUNED_MAX_DETAIL_LEVELS: u32 = 10;

/// Highest animation speed the generators were tuned for
const TUNED_MAX_SPEED: f32 = 5.0;

/// Layered noise parameters shared by both generator variants
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseParams {
    /// Spatial frequency across the whole grid (noise-domain units per grid extent)
    pub scale: f32,

    /// Amplitude applied by the generators to each sample
    /// (world units of displacement, or a multiplier on cube height)
    pub intensity: f32,

    /// Animation rate (noise-domain units per second)
    pub speed: f32,

    /// Per-octave domain shift that moves each octave into its own region of the noise
    pub detail_offset: f32,

    /// Octave count, at least 1; each octave costs two noise evaluations per cell per tick
    pub detail_levels: u32,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            scale: 2.0,
            intensity: 1.0,
            speed: 1.0,
            detail_offset: 100.0,
            detail_levels: 4,
        }
    }
}

impl NoiseParams {
    /// Single-octave parameters for a rolling wave surface
    pub fn surface() -> Self {
        Self {
            scale: 15.0,
            intensity: 5.0,
            speed: 0.5,
            detail_offset: 0.0,
            detail_levels: 1,
        }
    }

    /// Check the parameters can produce finite samples
    pub fn validate(&self) -> WaveResult<()> {
        if self.detail_levels < 1 {
            return Err(WaveError::configuration(
                "detail levels must be at least 1",
            ));
        }

        for (name, value) in [
            ("scale", self.scale),
            ("intensity", self.intensity),
            ("speed", self.speed),
            ("detail offset", self.detail_offset),
        ] {
            if !value.is_finite() {
                return Err(WaveError::configuration(format!(
                    "{name} must be finite (got {value})"
                )));
            }
        }

        if self.detail_levels > TUNED_MAX_DETAIL_LEVELS {
            warn!(
                "{} detail levels exceeds the tuned maximum of {}; tick cost grows linearly",
                self.detail_levels, TUNED_MAX_DETAIL_LEVELS
            );
        }
        if self.speed < 0.0 || self.speed > TUNED_MAX_SPEED {
            warn!(
                "speed {} is outside the tuned range 0..={}",
                self.speed, TUNED_MAX_SPEED
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(NoiseParams::default().validate().is_ok());
        assert!(NoiseParams::surface().validate().is_ok());
    }

    #[test]
    fn test_zero_detail_levels_rejected() {
        let params = NoiseParams {
            detail_levels: 0,
            ..NoiseParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(WaveError::Configuration(_))
        ));
    }

    #[test]
    fn test_non_finite_values_rejected() {
        let params = NoiseParams {
            scale: f32::NAN,
            ..NoiseParams::default()
        };
        assert!(params.validate().is_err());

        let params = NoiseParams {
            speed: f32::INFINITY,
            ..NoiseParams::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_out_of_tuned_range_still_valid() {
        let params = NoiseParams {
            detail_levels: 32,
            speed: 12.0,
            ..NoiseParams::default()
        };
        assert!(params.validate().is_ok());
    }
}
