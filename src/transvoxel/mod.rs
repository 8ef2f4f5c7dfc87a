//! Transvoxel polygonization.
//!
//! Converts a sampled signed-distance block into a triangle surface plus
//! six optional transition patches, one per cubic face, that stitch the
//! block to neighbours meshed at half resolution. The regular pass walks
//! every interior 2×2×2 cell; each transition pass walks a 2D grid of 3×3
//! face stencils. Both passes share the output buffers, the emission path
//! and the border/secondary geometry.
//!
//! # Build pipeline
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                        INPUT                             │
//! │  voxels: &impl VoxelVolume   (read-only for the build)   │
//! │  lod: u32                    (geometry scale = 2^lod)    │
//! └──────────────────────────────────────────────────────────┘
//!                             │
//!                             ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │  REGULAR PASS     clear buffers, reset 3D reuse cache,   │
//! │                   polygonize interior cells              │
//! │                   empty result → empty output, done      │
//! └──────────────────────────────────────────────────────────┘
//!                             │
//!                             ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │  6 × TRANSITION   per face: clear buffers, reset 2D      │
//! │  PASSES           reuse cache, polygonize face stencils  │
//! └──────────────────────────────────────────────────────────┘
//!                             │
//!                             ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │                        OUTPUT                            │
//! │  one regular Surface + [Surface; 6], each scaled by      │
//! │  2^lod, tagged as triangle lists                         │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! A mesher instance owns its buffers and reuse caches for the span of one
//! build and is not reentrant; run parallel builds on one instance per
//! worker.

mod border;
mod regular;
mod reuse;
mod sampling;
mod tables;
mod transition;

use glam::Vec3A;

use crate::constants::MIN_PADDING;
use crate::types::{FaceDirection, MeshBuffers, MeshOutput, Surface};
use crate::volume::VoxelVolume;

use reuse::{TransitionReuseCache, VertexReuseCache};

/// Stateful Transvoxel mesher.
///
/// Output vectors and reuse caches are retained across builds, so a warmed
/// instance allocates nothing in steady state.
pub struct TransvoxelMesher {
  buffers: MeshBuffers,
  reuse: VertexReuseCache,
  reuse_2d: TransitionReuseCache,
}

impl Default for TransvoxelMesher {
  fn default() -> Self {
    Self::new()
  }
}

impl TransvoxelMesher {
  pub fn new() -> Self {
    Self {
      buffers: MeshBuffers::new(),
      reuse: VertexReuseCache::new(),
      reuse_2d: TransitionReuseCache::new(),
    }
  }

  /// Build the regular surface and all six transition surfaces.
  ///
  /// Uniform or undersized blocks yield an entirely empty output; so does
  /// a block whose field never crosses the isolevel. When the regular
  /// surface is empty the transition passes are skipped outright.
  #[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip_all, name = "transvoxel::build")
  )]
  pub fn build<V: VoxelVolume>(&mut self, voxels: &V, lod: u32) -> MeshOutput {
    let mut output = MeshOutput::default();

    self.buffers.clear();
    regular::polygonize(voxels, &mut self.buffers, &mut self.reuse);

    if self.buffers.is_empty() {
      return output;
    }

    if lod > 0 {
      self.buffers.scale_by((1u32 << lod) as f32);
    }
    output.regular = self.buffers.to_surface();

    for direction in FaceDirection::ALL {
      self.buffers.clear();
      transition::polygonize(voxels, &mut self.buffers, &mut self.reuse_2d, direction);

      if self.buffers.is_empty() {
        continue;
      }

      if lod > 0 {
        self.buffers.scale_by((1u32 << lod) as f32);
      }
      output.transitions[direction.index()] = self.buffers.to_surface();
    }

    output
  }

  /// Build only the transition surface toward `direction`.
  ///
  /// Inspection entry point; returns an empty surface when the face
  /// produces no geometry.
  #[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip_all, name = "transvoxel::build_transition")
  )]
  pub fn build_transition_mesh<V: VoxelVolume>(
    &mut self,
    voxels: &V,
    direction: FaceDirection,
  ) -> Surface {
    self.buffers.clear();
    transition::polygonize(voxels, &mut self.buffers, &mut self.reuse_2d, direction);
    self.buffers.to_surface()
  }
}

/// Normalize `v`, falling back to +Y for zero-length gradients.
#[inline]
pub(crate) fn normalized_or_up(v: Vec3A) -> Vec3A {
  let length_squared = v.length_squared();
  if length_squared == 0.0 {
    Vec3A::Y
  } else {
    v / length_squared.sqrt()
  }
}

/// Append one vertex to all parallel output arrays and return its index.
///
/// Positions are un-padded here: emitted coordinates are relative to the
/// first cell corner, not the first padding voxel.
pub(crate) fn emit_vertex(
  buffers: &mut MeshBuffers,
  primary: Vec3A,
  normal: Vec3A,
  border_mask: u16,
  secondary: Vec3A,
  texture_index: f32,
) -> i32 {
  let pad = Vec3A::splat(MIN_PADDING as f32);
  let index = buffers.positions.len() as i32;

  buffers.positions.push((primary - pad).to_array());
  buffers.normals.push(normal.to_array());
  buffers
    .extras
    .push([0.0, texture_index, 0.0, border_mask as f32]);
  buffers.secondary_positions.push((secondary - pad).to_array());

  index
}
