//! Continuous wave surface: a triangulated grid displaced by the noise field.

mod generator;
mod mesh;

// Re-export public types
pub use generator::SurfaceGenerator;
pub use mesh::SurfaceMesh;
