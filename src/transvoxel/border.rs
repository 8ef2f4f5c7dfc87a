//! Border masks and secondary (border-deformed) vertex positions.
//!
//! When a half-resolution neighbour abuts a block, a transition patch needs
//! room between the two meshes. Vertices of boundary cells get a secondary
//! position, pulled inward by up to [`TRANSITION_CELL_SCALE`] of a cell and
//! projected onto the surface tangent plane so the deformation slides along
//! the surface instead of denting it. The host picks primary or secondary
//! per vertex using the packed border mask.

use glam::{IVec3, Vec3A};

use crate::constants::TRANSITION_CELL_SCALE;

/// 6-bit mask of the block faces a voxel position touches.
///
/// Bit layout: 1 = -X, 2 = +X, 4 = -Y, 8 = +Y, 16 = -Z, 32 = +Z.
pub(crate) fn face_mask(pos: IVec3, min_pos: IVec3, max_pos: IVec3) -> u8 {
  let mut mask = 0u8;
  for i in 0..3 {
    if pos[i] == min_pos[i] {
      mask |= 1 << (i * 2);
    }
    if pos[i] == max_pos[i] {
      mask |= 1 << (i * 2 + 1);
    }
  }
  mask
}

/// Inward offset for a vertex inside a boundary cell.
///
/// Per axis, with `k = 2^lod` and weight `w = TRANSITION_CELL_SCALE * k`:
/// a vertex within the minimum cell moves by `(1 - p/k) * w`, one within
/// the maximum cell by `(k*s - 1 - p) * w`, interior vertices by zero.
/// `lod` is 0 here in practice; the LOD factor is baked into positions
/// after the build.
pub(crate) fn border_offset(pos: Vec3A, lod: u32, block_size: IVec3, min_pos: IVec3) -> Vec3A {
  let p2k = (1 << lod) as f32;
  let p2mk = 1.0 / p2k;
  let wk = TRANSITION_CELL_SCALE * p2k;

  let mut delta = Vec3A::ZERO;
  for i in 0..3 {
    let p = pos[i] - min_pos[i] as f32;
    let s = block_size[i] as f32;

    if p < p2k {
      // Vertex inside the minimum cell.
      delta[i] = (1.0 - p2mk * p) * wk;
    } else if p > p2k * (s - 1.0) {
      // Vertex inside the maximum cell.
      delta[i] = (p2k * s - 1.0 - p) * wk;
    }
  }
  delta
}

/// Project `delta` onto the plane perpendicular to `normal`:
/// `(I - n nᵀ) Δ = Δ - n (n · Δ)`.
#[inline]
pub(crate) fn project_border_offset(delta: Vec3A, normal: Vec3A) -> Vec3A {
  delta - normal * normal.dot(delta)
}

/// Border-deformed position for a boundary vertex.
pub(crate) fn secondary_position(
  primary: Vec3A,
  normal: Vec3A,
  lod: u32,
  block_size: IVec3,
  min_pos: IVec3,
) -> Vec3A {
  let delta = border_offset(primary, lod, block_size, min_pos);
  primary + project_border_offset(delta, normal)
}

#[cfg(test)]
#[path = "border_test.rs"]
mod border_test;
