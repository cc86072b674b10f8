//! Parameter definitions with documented units and ranges.
//!
//! Every configuration struct carries a `Default` taken from the values the
//! generators were tuned with, and a `validate()` that generators run before
//! allocating any buffer.

mod cells;
mod noise;
mod surface;

// Re-export all types
pub use cells::CellMatrixConfig;
pub use self::noise::NoiseParams;
pub use surface::SurfaceConfig;
