//! Lattice indexing and static grid topology.
//!
//! Every buffer in the crate (positions, UVs, normals, triangle indices and cell
//! instances) is laid out by the same row-major flattening: `i = y * width + x`.

use crate::error::{WaveError, WaveResult};

/// Vertices per triangle
const VERTICES_PER_TRIANGLE: usize = 3;

/// Triangles per quad
const TRIANGLES_PER_QUAD: usize = 2;

/// Indices emitted per quad
const INDICES_PER_QUAD: usize = VERTICES_PER_TRIANGLE * TRIANGLES_PER_QUAD;

/// Unit "up" normal used before the first surface recompute
pub const UP: [f32; 3] = [0.0, 1.0, 0.0];

/// Validated size of a `width × height` lattice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridDimensions {
    width: usize,
    height: usize,
}

impl GridDimensions {
    /// Create dimensions, rejecting empty axes and grids too large for `u32` indices
    pub fn new(width: usize, height: usize) -> WaveResult<Self> {
        if width == 0 || height == 0 {
            return Err(WaveError::configuration(format!(
                "grid dimensions must be above 0 (got {width}x{height})"
            )));
        }

        let cells = width.checked_mul(height).ok_or_else(|| {
            WaveError::configuration(format!("grid {width}x{height} overflows cell count"))
        })?;
        if cells > u32::MAX as usize {
            return Err(WaveError::configuration(format!(
                "grid {width}x{height} has {cells} cells, more than u32 indices can address"
            )));
        }

        Ok(Self { width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of lattice cells (and vertices)
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Number of quads between adjacent vertices (zero when either axis is below 2)
    pub fn quad_count(&self) -> usize {
        self.width.saturating_sub(1) * self.height.saturating_sub(1)
    }

    pub fn triangle_count(&self) -> usize {
        self.quad_count() * TRIANGLES_PER_QUAD
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Flat offset of cell `(x, y)`
    ///
    /// # Panics
    /// If the coordinate lies outside the grid. An out-of-range cell is a caller
    /// bug and is never clamped; use [`GridDimensions::try_flatten`] to check first.
    #[inline]
    pub fn flatten(&self, x: usize, y: usize) -> usize {
        assert!(
            self.contains(x, y),
            "cell ({x}, {y}) is outside a {}x{} grid",
            self.width,
            self.height
        );
        y * self.width + x
    }

    /// Checked variant of [`GridDimensions::flatten`]
    pub fn try_flatten(&self, x: usize, y: usize) -> WaveResult<usize> {
        if self.contains(x, y) {
            Ok(y * self.width + x)
        } else {
            Err(WaveError::Domain {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Inverse of [`GridDimensions::flatten`]
    ///
    /// # Panics
    /// If `index >= cell_count()`.
    pub fn cell(&self, index: usize) -> (usize, usize) {
        assert!(
            index < self.cell_count(),
            "index {index} is outside a {}x{} grid",
            self.width,
            self.height
        );
        (index % self.width, index / self.width)
    }

    /// All cells in flatten order (x varies fastest)
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }
}

/// Triangle index buffer: two triangles per quad, `6 * (width-1) * (height-1)` indices
///
/// Each quad with origin `o` emits `(o+w, o+1, o)` then `(o+w, o+w+1, o+1)`.
pub fn build_triangles(dims: GridDimensions) -> Vec<u32> {
    let width = dims.width();
    let mut triangles = Vec::with_capacity(dims.quad_count() * INDICES_PER_QUAD);

    let quad_offsets: [usize; INDICES_PER_QUAD] = [width, 1, 0, width, width + 1, 1];

    for y in 0..dims.height().saturating_sub(1) {
        for x in 0..width.saturating_sub(1) {
            let origin = dims.flatten(x, y);
            triangles.extend(quad_offsets.iter().map(|offset| (origin + offset) as u32));
        }
    }

    triangles
}

/// UV buffer with both components divided by the grid width
pub fn build_uv(dims: GridDimensions) -> Vec<[f32; 2]> {
    let width = dims.width();
    (0..dims.cell_count())
        .map(|i| {
            [
                (i % width) as f32 / width as f32,
                (i / width) as f32 / width as f32,
            ]
        })
        .collect()
}

/// Normal buffer with every entry pointing straight up
pub fn build_flat_normals(dims: GridDimensions) -> Vec<[f32; 3]> {
    vec![UP; dims.cell_count()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(width: usize, height: usize) -> GridDimensions {
        GridDimensions::new(width, height).unwrap()
    }

    #[test]
    fn test_rejects_empty_axes() {
        assert!(matches!(
            GridDimensions::new(0, 4),
            Err(WaveError::Configuration(_))
        ));
        assert!(matches!(
            GridDimensions::new(4, 0),
            Err(WaveError::Configuration(_))
        ));
    }

    #[test]
    fn test_rejects_grids_beyond_u32_indices() {
        assert!(GridDimensions::new(u32::MAX as usize, 2).is_err());
        assert!(GridDimensions::new(usize::MAX, 2).is_err());
    }

    #[test]
    fn test_flatten_is_bijection() {
        let d = dims(7, 5);
        let mut seen = vec![false; d.cell_count()];
        for (x, y) in d.cells() {
            let i = d.flatten(x, y);
            assert!(!seen[i], "index {i} produced twice");
            seen[i] = true;
            assert_eq!(d.cell(i), (x, y));
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_cells_iterate_in_flatten_order() {
        let d = dims(3, 2);
        let order: Vec<usize> = d.cells().map(|(x, y)| d.flatten(x, y)).collect();
        assert_eq!(order, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    #[should_panic(expected = "outside a 3x2 grid")]
    fn test_flatten_panics_out_of_range() {
        dims(3, 2).flatten(3, 0);
    }

    #[test]
    fn test_try_flatten_reports_domain_error() {
        let d = dims(3, 2);
        assert_eq!(d.try_flatten(2, 1).unwrap(), 5);
        assert!(matches!(
            d.try_flatten(0, 2),
            Err(WaveError::Domain {
                x: 0,
                y: 2,
                width: 3,
                height: 2
            })
        ));
    }

    #[test]
    fn test_single_quad_winding() {
        assert_eq!(build_triangles(dims(2, 2)), vec![2, 1, 0, 2, 3, 1]);
    }

    #[test]
    fn test_second_row_quad_origin() {
        // Quad (1, 1) of a 3x3 grid has origin 4
        let triangles = build_triangles(dims(3, 3));
        assert_eq!(&triangles[18..24], &[7, 5, 4, 7, 8, 5]);
    }

    #[test]
    fn test_triangle_count_and_bounds() {
        for (w, h) in [(2, 2), (3, 7), (10, 4), (16, 16)] {
            let d = dims(w, h);
            let triangles = build_triangles(d);
            assert_eq!(triangles.len(), 6 * (w - 1) * (h - 1));
            assert_eq!(triangles.len(), d.triangle_count() * 3);
            assert!(triangles.iter().all(|&i| (i as usize) < w * h));
        }
    }

    #[test]
    fn test_degenerate_axes_have_no_triangles() {
        assert!(build_triangles(dims(1, 5)).is_empty());
        assert!(build_triangles(dims(5, 1)).is_empty());
        assert_eq!(dims(1, 1).quad_count(), 0);
    }

    #[test]
    fn test_triangles_are_pure() {
        assert_eq!(build_triangles(dims(9, 6)), build_triangles(dims(9, 6)));
    }

    #[test]
    fn test_uv_single_row() {
        let uv = build_uv(dims(3, 1));
        assert_eq!(uv.len(), 3);
        assert_eq!(uv[2], [2.0 / 3.0, 0.0]);
    }

    #[test]
    fn test_uv_v_divides_by_width() {
        // Non-square grid: v uses the width, so the last row of a 4x2 grid sits at 0.25
        let uv = build_uv(dims(4, 2));
        assert_eq!(uv[4], [0.0, 0.25]);
        assert_eq!(uv[7], [0.75, 0.25]);
    }

    #[test]
    fn test_flat_normals_point_up() {
        let normals = build_flat_normals(dims(4, 3));
        assert_eq!(normals.len(), 12);
        assert!(normals.iter().all(|&n| n == UP));
    }
}
