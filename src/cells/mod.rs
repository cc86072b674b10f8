//! Discrete cube matrix: one scaled, colored instance per lattice cell.

mod generator;
mod instance;

// Re-export public types
pub use generator::CellMatrixGenerator;
pub use instance::{CellContainer, CellInstance};
