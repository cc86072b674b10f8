//! Command-line argument parsing for the headless host.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::params::{CellMatrixConfig, NoiseParams, SurfaceConfig};

/// Which generator the host drives
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Variant {
    /// Continuous triangulated wave surface
    Surface,
    /// Matrix of scaled, colored cubes
    Cells,
}

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "wavegrid")]
#[command(about = "Animate a noise-driven wave grid headlessly", long_about = None)]
pub struct Args {
    /// Generator to run
    #[arg(long, value_enum, default_value_t = Variant::Surface)]
    pub variant: Variant,

    /// Cells along X (defaults to the variant's configuration)
    #[arg(long)]
    pub width: Option<usize>,

    /// Cells along Z (defaults to the variant's configuration)
    #[arg(long)]
    pub height: Option<usize>,

    /// Perlin noise seed
    #[arg(long, default_value_t = 42)]
    pub seed: u32,

    /// Number of ticks to simulate
    #[arg(long, default_value_t = 120)]
    pub ticks: u32,

    /// Simulated frame rate (ticks per second)
    #[arg(long, default_value_t = 60.0)]
    pub fps: f32,

    /// Noise scale override
    #[arg(long)]
    pub scale: Option<f32>,

    /// Intensity override
    #[arg(long)]
    pub intensity: Option<f32>,

    /// Animation speed override
    #[arg(long)]
    pub speed: Option<f32>,

    /// Octave count override
    #[arg(long)]
    pub detail_levels: Option<u32>,

    /// Per-octave domain shift override
    #[arg(long)]
    pub detail_offset: Option<f32>,

    /// Surface vertex spacing along X and Z (world units)
    #[arg(long, num_args = 2, value_names = ["X", "Z"])]
    pub spacing: Option<Vec<f32>>,

    /// Cube size along X, Y and Z (world units)
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"])]
    pub cube_size: Option<Vec<f32>>,

    /// Write a PNG of the final tick
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl Args {
    fn apply_noise_overrides(&self, noise: &mut NoiseParams) {
        if let Some(scale) = self.scale {
            noise.scale = scale;
        }
        if let Some(intensity) = self.intensity {
            noise.intensity = intensity;
        }
        if let Some(speed) = self.speed {
            noise.speed = speed;
        }
        if let Some(detail_levels) = self.detail_levels {
            noise.detail_levels = detail_levels;
        }
        if let Some(detail_offset) = self.detail_offset {
            noise.detail_offset = detail_offset;
        }
    }

    /// Surface configuration with command-line overrides applied
    pub fn surface_config(&self) -> SurfaceConfig {
        let mut config = SurfaceConfig::default();
        config.width = self.width.unwrap_or(config.width);
        config.height = self.height.unwrap_or(config.height);
        if let Some([x, z]) = self.spacing.as_deref() {
            config.spacing = [*x, *z];
        }
        self.apply_noise_overrides(&mut config.noise);
        config
    }

    /// Cube matrix configuration with command-line overrides applied
    pub fn cells_config(&self) -> CellMatrixConfig {
        let mut config = CellMatrixConfig::default();
        config.width = self.width.unwrap_or(config.width);
        config.height = self.height.unwrap_or(config.height);
        if let Some([x, y, z]) = self.cube_size.as_deref() {
            config.cube_size = [*x, *y, *z];
        }
        self.apply_noise_overrides(&mut config.noise);
        config
    }

    /// Time of tick `frame` in seconds
    pub fn tick_time(&self, frame: u32) -> f32 {
        frame as f32 / self.fps
    }
}
