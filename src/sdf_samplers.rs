//! Analytic SDF fillers for testing and debugging.
//!
//! Deterministic mathematical fields that are easy to verify visually and
//! numerically. Use them to exercise the mesher without dragging in a
//! terrain generator.

use glam::{IVec3, Vec3A};

use crate::volume::VoxelGrid;

/// Horizontal plane filler: solid below `height`, air above.
///
/// The flattest possible surface; every regular-mesh normal should come
/// out axis-aligned.
#[derive(Clone)]
pub struct PlaneFiller {
  /// Height of the surface in voxel units.
  pub height: f32,
}

impl PlaneFiller {
  pub fn new(height: f32) -> Self {
    Self { height }
  }

  pub fn fill(&self, grid: &mut VoxelGrid) {
    let height = self.height;
    grid.fill_sdf(|pos| pos.y as f32 - height);
  }
}

/// Sphere filler: solid inside a sphere centred at `center`.
#[derive(Clone)]
pub struct SphereFiller {
  /// Centre in voxel units.
  pub center: [f32; 3],
  /// Radius in voxel units.
  pub radius: f32,
}

impl SphereFiller {
  pub fn new(center: [f32; 3], radius: f32) -> Self {
    Self { center, radius }
  }

  pub fn fill(&self, grid: &mut VoxelGrid) {
    let center = Vec3A::from_array(self.center);
    let radius = self.radius;
    grid.fill_sdf(|pos| (pos.as_vec3a() - center).length() - radius);
  }
}

/// Build a grid of the given size pre-filled by a sphere centred in it.
///
/// Convenience for tests and benches.
pub fn centered_sphere_grid(size: i32, radius: f32) -> VoxelGrid {
  let mut grid = VoxelGrid::new(IVec3::splat(size));
  let c = (size - 1) as f32 / 2.0;
  SphereFiller::new([c, c, c], radius).fill(&mut grid);
  grid
}

#[cfg(test)]
#[path = "sdf_samplers_test.rs"]
mod sdf_samplers_test;
