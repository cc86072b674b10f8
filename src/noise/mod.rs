//! Layered noise sampling over the grid lattice.
//!
//! Any `noise::NoiseFn<f64, 2>` can drive a [`NoiseField`]; [`UnitPerlin`] is
//! the primitive the generators use by default.

mod field;
mod perlin;

// Re-export public types
pub use field::NoiseField;
pub use perlin::UnitPerlin;
