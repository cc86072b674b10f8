//! Surface mesh buffers and normal recomputation.

use glam::Vec3;

use crate::grid::{self, GridDimensions};

/// Flat mesh buffers, index-aligned to the grid flattening
///
/// Buffer lengths are fixed at build time; only positions and normals change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceMesh {
    positions: Vec<[f32; 3]>,
    triangles: Vec<u32>,
    uv: Vec<[f32; 2]>,
    normals: Vec<[f32; 3]>,
}

impl SurfaceMesh {
    /// Build a flat XZ grid with vertex `(x, y)` at `(x * spacing[0], 0, y * spacing[1])`
    pub fn build(dims: GridDimensions, spacing: [f32; 2]) -> Self {
        let positions = dims
            .cells()
            .map(|(x, y)| [x as f32 * spacing[0], 0.0, y as f32 * spacing[1]])
            .collect();

        Self {
            positions,
            triangles: grid::build_triangles(dims),
            uv: grid::build_uv(dims),
            normals: grid::build_flat_normals(dims),
        }
    }

    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    pub(crate) fn positions_mut(&mut self) -> &mut [[f32; 3]] {
        &mut self.positions
    }

    pub fn triangles(&self) -> &[u32] {
        &self.triangles
    }

    pub fn uv(&self) -> &[[f32; 2]] {
        &self.uv
    }

    pub fn normals(&self) -> &[[f32; 3]] {
        &self.normals
    }

    /// Position buffer as raw bytes for GPU upload
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    pub fn triangle_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.triangles)
    }

    pub fn uv_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.uv)
    }

    pub fn normal_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.normals)
    }

    /// Recompute smooth vertex normals from the current positions
    ///
    /// Face normals are area-weighted and accumulated into the existing buffer.
    /// Vertices touched by no triangle fall back to straight up.
    pub fn recompute_normals(&mut self) {
        self.normals.fill([0.0; 3]);

        for tri in self.triangles.chunks_exact(3) {
            let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];

            let pa = Vec3::from_array(self.positions[a]);
            let pb = Vec3::from_array(self.positions[b]);
            let pc = Vec3::from_array(self.positions[c]);
            let face = (pb - pa).cross(pc - pa);

            for i in [a, b, c] {
                self.normals[i] = (Vec3::from_array(self.normals[i]) + face).to_array();
            }
        }

        for n in self.normals.iter_mut() {
            *n = Vec3::from_array(*n)
                .try_normalize()
                .unwrap_or(Vec3::Y)
                .to_array();
        }
    }
}
