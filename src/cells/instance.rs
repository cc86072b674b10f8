//! Per-cell instance records and the host container interface.

use bytemuck::{Pod, Zeroable};

/// Color a cube carries before its first tick
pub const REST_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

/// One cube of the matrix (position fixed, scale and color animated)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct CellInstance {
    pub position: [f32; 3],
    pub scale: [f32; 3],
    pub color: [f32; 3],
}

/// Host-side grouping that owns one renderable object per cell
///
/// The host hands its container to the generator explicitly; records arrive in
/// flatten order on build and are re-sent after every tick. A build always starts
/// at index 0, so a container reused across builds must drop its old objects then.
pub trait CellContainer {
    /// Materialize the object for cell `index`
    fn materialize(&mut self, index: usize, instance: &CellInstance);

    /// Apply the latest record to the object for cell `index`
    fn update(&mut self, index: usize, instance: &CellInstance);
}

impl CellContainer for Vec<CellInstance> {
    fn materialize(&mut self, index: usize, instance: &CellInstance) {
        if index == 0 {
            self.clear();
        }
        debug_assert_eq!(index, self.len(), "cells must be materialized in flatten order");
        self.push(*instance);
    }

    fn update(&mut self, index: usize, instance: &CellInstance) {
        self[index] = *instance;
    }
}
