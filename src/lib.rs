//! Wavegrid library - Procedural grids animated by layered noise

pub mod cells;
pub mod cli;
pub mod error;
pub mod grid;
pub mod noise;
pub mod params;
pub mod snapshot;
pub mod surface;
