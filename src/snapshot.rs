//! PNG snapshots of generator output for offline inspection.

use std::path::Path;

use image::{GrayImage, Luma, Rgb, RgbImage};

use crate::cells::CellInstance;
use crate::error::WaveResult;
use crate::grid::GridDimensions;
use crate::surface::SurfaceMesh;

/// Write surface heights as a grayscale heightmap, one pixel per vertex
///
/// Heights are stretched over the full gray range; a flat surface renders mid-gray.
pub fn save_heightmap(mesh: &SurfaceMesh, dims: GridDimensions, path: &Path) -> WaveResult<()> {
    let heights: Vec<f32> = mesh.positions().iter().map(|p| p[1]).collect();
    let (min, max) = heights
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &h| {
            (lo.min(h), hi.max(h))
        });
    let range = max - min;

    let mut img = GrayImage::new(dims.width() as u32, dims.height() as u32);
    for (x, y) in dims.cells() {
        let h = heights[dims.flatten(x, y)];
        let gray = if range > 0.0 {
            ((h - min) / range * 255.0).round() as u8
        } else {
            128
        };
        img.put_pixel(x as u32, y as u32, Luma([gray]));
    }

    img.save(path)?;
    Ok(())
}

/// Write cube colors as an RGB image, one pixel per cell
pub fn save_cell_colors(
    instances: &[CellInstance],
    dims: GridDimensions,
    path: &Path,
) -> WaveResult<()> {
    let mut img = RgbImage::new(dims.width() as u32, dims.height() as u32);
    for (x, y) in dims.cells() {
        let color = instances[dims.flatten(x, y)].color;
        let rgb = color.map(|c| (c * 255.0).clamp(0.0, 255.0) as u8);
        img.put_pixel(x as u32, y as u32, Rgb(rgb));
    }

    img.save(path)?;
    Ok(())
}
