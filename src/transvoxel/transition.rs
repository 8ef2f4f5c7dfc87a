//! Transition cell polygonizer.
//!
//! A transition cell bridges one block face to a neighbour with cells twice
//! as large. It works in "face space": 2D coordinates along the face, with
//! the local Z axis pointing into the block. Each cell samples a 3×3
//! full-resolution stencil on the face plane plus the four stencil corners
//! a second time as the half-resolution side:
//!
//! ```text
//!   6---7---8      B-------C
//!   |   |   |      |       |
//!   3---4---5      |       |     full-resolution side (0-8)
//!   |   |   |      |       |     half-resolution side (9-C)
//!   0---1---2      9-------A
//! ```
//!
//! Transition meshes are built from the high-resolution block's own
//! samples (the half-resolution corners coincide with stencil corners), so
//! no neighbour data is needed. Only full-resolution-side vertices are
//! deformable: half-resolution-side vertices keep border mask 0 and stay
//! pinned to the block boundary, while the regular mesh's boundary
//! vertices move inward by the same offset — that shared contract is what
//! closes the cracks.

use glam::{IVec3, Vec3A};

use crate::constants::{MAX_PADDING, MIN_PADDING};
use crate::types::{FaceDirection, MeshBuffers};
use crate::volume::{VoxelChannel, VoxelVolume};

use super::border::{face_mask, secondary_position};
use super::reuse::{TransitionReuseCache, UNSET};
use super::sampling::{sign_bit, SdfSampler};
use super::tables::{
  TRANSITION_CELL_CLASS, TRANSITION_CELL_DATA, TRANSITION_CORNER_DATA, TRANSITION_VERTEX_DATA,
};
use super::{emit_vertex, normalized_or_up};

/// Map face-space coordinates to block space for a given face.
///
/// The six mappings keep the face-space X/Y orientation consistent and
/// only flip the local Z where needed, so one table set serves all faces.
fn face_to_block(x: i32, y: i32, z: i32, direction: FaceDirection, block_size: IVec3) -> IVec3 {
  match direction {
    FaceDirection::NegativeX => IVec3::new(z, x, y),
    FaceDirection::PositiveX => IVec3::new(block_size.x - 1 - z, y, x),
    FaceDirection::NegativeY => IVec3::new(y, z, x),
    FaceDirection::PositiveY => IVec3::new(x, block_size.y - 1 - z, y),
    FaceDirection::NegativeZ => IVec3::new(x, y, z),
    FaceDirection::PositiveZ => IVec3::new(y, x, block_size.z - 1 - z),
  }
}

/// Block axes spanned by the face-space X and Y axes.
fn face_axes(direction: FaceDirection) -> (usize, usize) {
  match direction {
    FaceDirection::NegativeX => (1, 2),
    FaceDirection::PositiveX => (2, 1),
    FaceDirection::NegativeY => (2, 0),
    FaceDirection::PositiveY => (0, 2),
    FaceDirection::NegativeZ => (0, 1),
    FaceDirection::PositiveZ => (1, 0),
  }
}

/// Face-space offsets of the nine full-resolution stencil positions.
const STENCIL_OFFSETS: [(i32, i32); 9] = [
  (0, 0),
  (1, 0),
  (2, 0),
  (0, 1),
  (1, 1),
  (2, 1),
  (0, 2),
  (1, 2),
  (2, 2),
];

/// Stencil positions the four half-resolution corners coincide with.
const HALF_RES_CORNERS: [usize; 4] = [0, 2, 6, 8];

/// Polygonize the transition patch toward `direction` into `buffers`.
///
/// Produces nothing for uniform blocks and blocks thinner than the 3×3
/// face stencil.
pub(crate) fn polygonize<V: VoxelVolume>(
  voxels: &V,
  buffers: &mut MeshBuffers,
  cache: &mut TransitionReuseCache,
  direction: FaceDirection,
) {
  if voxels.is_uniform(VoxelChannel::Sdf) {
    return;
  }

  let block_size = voxels.size();
  if block_size.min_element() < 3 {
    return;
  }

  let sampler = SdfSampler::new(voxels);
  let unpadded_size = block_size - IVec3::splat(MIN_PADDING + MAX_PADDING);

  let min_pos = IVec3::splat(MIN_PADDING);
  let max_pos = block_size - IVec3::splat(MAX_PADDING);

  let (axis_x, axis_y) = face_axes(direction);
  // Rows span the face's X axis, which need not be the block's.
  cache.reset(block_size[axis_x] as usize);
  let min_fpos_x = min_pos[axis_x];
  let min_fpos_y = min_pos[axis_y];
  // One less than the cell bound: the 2D stencil spans two voxels.
  let max_fpos_x = max_pos[axis_x] - 1;
  let max_fpos_y = max_pos[axis_y] - 1;

  let mut fy = min_fpos_y;
  while fy < max_fpos_y {
    let mut fx = min_fpos_x;
    while fx < max_fpos_x {
      process_cell(
        &sampler,
        fx,
        fy,
        (min_fpos_x, min_fpos_y),
        direction,
        block_size,
        min_pos,
        max_pos,
        unpadded_size,
        buffers,
        cache,
      );
      fx += 2;
    }
    fy += 2;
  }
}

#[allow(clippy::too_many_arguments)]
fn process_cell<V: VoxelVolume>(
  sampler: &SdfSampler<V>,
  fx: i32,
  fy: i32,
  (min_fpos_x, min_fpos_y): (i32, i32),
  direction: FaceDirection,
  block_size: IVec3,
  min_pos: IVec3,
  max_pos: IVec3,
  unpadded_size: IVec3,
  buffers: &mut MeshBuffers,
  cache: &mut TransitionReuseCache,
) {
  let fz = MIN_PADDING;

  let mut cell_positions = [IVec3::ZERO; 13];
  for (i, &(dx, dy)) in STENCIL_OFFSETS.iter().enumerate() {
    cell_positions[i] = face_to_block(fx + dx, fy + dy, fz, direction, block_size);
  }
  for (i, &corner) in HALF_RES_CORNERS.iter().enumerate() {
    cell_positions[9 + i] = cell_positions[corner];
  }

  let mut cell_samples = [0i8; 13];
  for i in 0..9 {
    cell_samples[i] = sampler.signed(cell_positions[i]);
  }
  for (i, &corner) in HALF_RES_CORNERS.iter().enumerate() {
    cell_samples[9 + i] = cell_samples[corner];
  }

  // Case code bit order interleaves the stencil ring so it matches the
  // transition class table: corners 0,1,2,5,8,7,6,3 then the centre.
  let case_code = sign_bit(cell_samples[0])
    | sign_bit(cell_samples[1]) << 1
    | sign_bit(cell_samples[2]) << 2
    | sign_bit(cell_samples[5]) << 3
    | sign_bit(cell_samples[8]) << 4
    | sign_bit(cell_samples[7]) << 5
    | sign_bit(cell_samples[6]) << 6
    | sign_bit(cell_samples[3]) << 7
    | sign_bit(cell_samples[4]) << 8;

  cache.get_mut(fx, fy).vertices[0] = UNSET;

  if case_code == 0 || case_code == 511 {
    return;
  }

  let texture_index = sampler.raw(cell_positions[0], VoxelChannel::Data2) as f32;

  let mut cell_gradients = [Vec3A::ZERO; 13];
  for i in 0..9 {
    cell_gradients[i] = sampler.gradient(cell_positions[i]);
  }
  for (i, &corner) in HALF_RES_CORNERS.iter().enumerate() {
    cell_gradients[9 + i] = cell_gradients[corner];
  }

  let raw_class = TRANSITION_CELL_CLASS[case_code as usize];
  let flip_winding = raw_class & 0x80 != 0;
  let cell_data = TRANSITION_CELL_DATA[(raw_class & 0x7f) as usize];
  let vertex_count = cell_data.get_vertex_count() as usize;
  let triangle_count = cell_data.get_triangle_count() as usize;

  let validity_mask = u16::from(fx > min_fpos_x) | (u16::from(fy > min_fpos_y) << 1);

  // Vertices generated here sit on the block side itself, so the cell mask
  // comes from the face position rather than a cell maximum.
  let cell_border_mask = face_mask(cell_positions[0], min_pos, max_pos);

  let mut cell_vertex_indices = [UNSET; 12];

  for (i, slot) in cell_vertex_indices.iter_mut().enumerate().take(vertex_count) {
    let vertex_code = TRANSITION_VERTEX_DATA[case_code as usize][i];
    let va = ((vertex_code >> 4) & 0xf) as usize;
    let vb = (vertex_code & 0xf) as usize;

    let da = cell_samples[va] as i32;
    let db = cell_samples[vb] as i32;

    if da == db {
      // Degenerate edge; the slot stays unset.
      continue;
    }

    let t = (db << 8) / (db - da);
    let t0 = t as f32 / 256.0;
    let t1 = (0x100 - t) as f32 / 256.0;

    if t & 0xff != 0 {
      // Vertex strictly inside the edge.
      let reuse_dir = (vertex_code >> 12) & 0xf;
      let reuse_slot = ((vertex_code >> 8) & 0xf) as usize;

      let present = (reuse_dir & validity_mask) == reuse_dir;
      if present {
        let prev = cache.get(fx - (reuse_dir & 1) as i32, fy - ((reuse_dir >> 1) & 1) as i32);
        *slot = prev.vertices[reuse_slot];
      }

      if !present || *slot == UNSET {
        let p0 = cell_positions[va].as_vec3a();
        let p1 = cell_positions[vb].as_vec3a();
        let primary = p0 * t0 + p1 * t1;
        let normal =
          normalized_or_up(cell_gradients[va] * t0 + cell_gradients[vb] * t1);

        let full_res_side = va < 9 || vb < 9;
        let (border_mask, secondary) = if full_res_side {
          let edge_mask = face_mask(cell_positions[va], min_pos, max_pos)
            & face_mask(cell_positions[vb], min_pos, max_pos);
          let mask = cell_border_mask as u16 | (edge_mask as u16) << 6;
          (
            mask,
            secondary_position(primary, normal, 0, unpadded_size, min_pos),
          )
        } else {
          // Half-resolution side: mask 0 pins the vertex to the block
          // boundary, where the coarser neighbour's mesh expects it.
          (0, primary)
        };

        *slot = emit_vertex(buffers, primary, normal, border_mask, secondary, texture_index);

        if reuse_dir & 8 != 0 {
          cache.get_mut(fx, fy).vertices[reuse_slot] = *slot;
        }
      }
    } else {
      // Vertex exactly on a stencil corner.
      let corner = if t == 0 { vb } else { va };
      let corner_code = TRANSITION_CORNER_DATA[corner];
      let reuse_dir = (corner_code >> 4) as u16;
      let reuse_slot = (corner_code & 0xf) as usize;

      let present = (reuse_dir & validity_mask) == reuse_dir;
      if present {
        let prev = cache.get(fx - (reuse_dir & 1) as i32, fy - ((reuse_dir >> 1) & 1) as i32);
        *slot = prev.vertices[reuse_slot];
      }

      if !present || *slot == UNSET {
        let primary = cell_positions[corner].as_vec3a();
        let normal = normalized_or_up(cell_gradients[corner]);

        let full_res_side = corner < 9;
        let (border_mask, secondary) = if full_res_side {
          let mask = cell_border_mask as u16
            | (face_mask(cell_positions[corner], min_pos, max_pos) as u16) << 6;
          (
            mask,
            secondary_position(primary, normal, 0, unpadded_size, min_pos),
          )
        } else {
          (0, primary)
        };

        *slot = emit_vertex(buffers, primary, normal, border_mask, secondary, texture_index);

        // Corner vertices are always cached for reuse.
        cache.get_mut(fx, fy).vertices[reuse_slot] = *slot;
      }
    }
  }

  for tri in 0..triangle_count {
    let a = cell_vertex_indices[cell_data.vertex_index[tri * 3] as usize];
    let b = cell_vertex_indices[cell_data.vertex_index[tri * 3 + 1] as usize];
    let c = cell_vertex_indices[cell_data.vertex_index[tri * 3 + 2] as usize];
    debug_assert!(
      a >= 0 && b >= 0 && c >= 0,
      "triangle references an unset vertex slot"
    );

    // Mirror the winding unless the class flips it, keeping normals
    // outward for every face orientation.
    if flip_winding {
      buffers.indices.extend([a as u32, b as u32, c as u32]);
    } else {
      buffers.indices.extend([c as u32, b as u32, a as u32]);
    }
  }
}

#[cfg(test)]
#[path = "transition_test.rs"]
mod transition_test;
