//! Regular cell polygonizer.
//!
//! Walks every interior 2×2×2 cell of the block, classifies it by the sign
//! bits of its eight corners, interpolates surface-crossing vertices along
//! cell edges with 8-bit fixed-point fractions, reuses vertices already
//! emitted by the -X/-Y/-Z predecessors, and appends the class's triangle
//! list. Vertices of cells touching the block boundary additionally get a
//! secondary position and a packed border mask so the host can deform them
//! toward transition patches.
//!
//! # Per-cell pipeline
//!
//! ```text
//! corner positions ──► signed samples ──► 8-bit case code
//!                                             │ 0 or 255: skip
//!                                             ▼
//!                          class lookup, corner gradients
//!                                             │
//!                       for each vertex code in the case:
//!                         t = (d1 << 8) / (d1 - d0)
//!                           ├─ t fractional: edge interior — reuse from
//!                           │    predecessor slot or emit + cache
//!                           ├─ t == 0, v1 == 7: exactly on the maximal
//!                           │    corner — this cell owns it
//!                           └─ otherwise on a predecessor's corner —
//!                                reuse its slot 0, emit uncached if the
//!                                predecessor is outside the block
//!                                             │
//!                                             ▼
//!                              append class triangle list
//! ```

use glam::IVec3;

use crate::constants::{MAX_PADDING, MIN_BLOCK_EDGE, MIN_PADDING};
use crate::types::MeshBuffers;
use crate::volume::{VoxelChannel, VoxelVolume};

use super::border::{face_mask, secondary_position};
use super::reuse::{VertexReuseCache, UNSET};
use super::sampling::{sign_bit, SdfSampler};
use super::tables::{REGULAR_CELL_CLASS, REGULAR_CELL_DATA, REGULAR_VERTEX_DATA};
use super::{emit_vertex, normalized_or_up};

/// Corner `i` sits at `pos + (i&1, (i>>1)&1, (i>>2)&1)`.
///
/// ```text
///    6-------7
///   /|      /|
///  / |     / |       z y
/// 4-------5  |       |/
/// |  2----|--3       o--x
/// | /     | /
/// |/      |/
/// 0-------1
/// ```
const CORNER_OFFSETS: [IVec3; 8] = [
  IVec3::new(0, 0, 0),
  IVec3::new(1, 0, 0),
  IVec3::new(0, 1, 0),
  IVec3::new(1, 1, 0),
  IVec3::new(0, 0, 1),
  IVec3::new(1, 0, 1),
  IVec3::new(0, 1, 1),
  IVec3::new(1, 1, 1),
];

/// Offset to the predecessor cell a 3-bit direction code names.
#[inline]
fn prev_cell_offset(dir: u16) -> IVec3 {
  IVec3::new(
    -((dir & 1) as i32),
    -(((dir >> 1) & 1) as i32),
    -(((dir >> 2) & 1) as i32),
  )
}

/// Polygonize all interior cells of `voxels` into `buffers`.
///
/// Produces nothing for uniform blocks and for blocks smaller than the
/// minimum edge on any axis.
pub(crate) fn polygonize<V: VoxelVolume>(
  voxels: &V,
  buffers: &mut MeshBuffers,
  cache: &mut VertexReuseCache,
) {
  if voxels.is_uniform(VoxelChannel::Sdf) {
    // A constant field never crosses the isolevel.
    return;
  }

  let block_size = voxels.size();
  if block_size.min_element() < MIN_BLOCK_EDGE {
    return;
  }

  let sampler = SdfSampler::new(voxels);
  let unpadded_size = block_size - IVec3::splat(MIN_PADDING + MAX_PADDING);

  cache.reset(block_size);

  // One cell layer of padding on the minimal sides and two on the maximal
  // sides keep every gradient stencil in range.
  let min_pos = IVec3::splat(MIN_PADDING);
  let max_pos = block_size - IVec3::splat(MAX_PADDING);
  let max_cell_pos = max_pos - IVec3::ONE;

  for z in min_pos.z..max_pos.z {
    for y in min_pos.y..max_pos.y {
      for x in min_pos.x..max_pos.x {
        process_cell(
          &sampler,
          IVec3::new(x, y, z),
          min_pos,
          max_pos,
          max_cell_pos,
          unpadded_size,
          buffers,
          cache,
        );
      }
    }
  }
}

#[allow(clippy::too_many_arguments)]
fn process_cell<V: VoxelVolume>(
  sampler: &SdfSampler<V>,
  pos: IVec3,
  min_pos: IVec3,
  max_pos: IVec3,
  max_cell_pos: IVec3,
  unpadded_size: IVec3,
  buffers: &mut MeshBuffers,
  cache: &mut VertexReuseCache,
) {
  let corner_positions = CORNER_OFFSETS.map(|offset| pos + offset);
  let samples = corner_positions.map(|p| sampler.signed(p));

  let mut case_code = 0u32;
  for (i, &sample) in samples.iter().enumerate() {
    case_code |= sign_bit(sample) << i;
  }

  // Mark this cell's corner slot unusable until it proves otherwise.
  cache.get_mut(pos).vertices[0] = UNSET;

  if case_code == 0 || case_code == 255 {
    return;
  }

  let texture_index = sampler.raw(corner_positions[0], VoxelChannel::Data2) as f32;
  let corner_gradients = corner_positions.map(|p| sampler.gradient(p));

  // Cells on the minimal block boundaries have no predecessor to reuse
  // from; the validity mask keeps reuse directions honest there.
  let validity_mask = (u16::from(pos.x > min_pos.x))
    | (u16::from(pos.y > min_pos.y) << 1)
    | (u16::from(pos.z > min_pos.z) << 2);

  let class = REGULAR_CELL_CLASS[case_code as usize];
  let cell_data = REGULAR_CELL_DATA[class as usize];
  let vertex_count = cell_data.get_vertex_count() as usize;
  let triangle_count = cell_data.get_triangle_count() as usize;

  let mut cell_vertex_indices = [UNSET; 12];
  let cell_border_mask = face_mask(pos, min_pos, max_cell_pos);

  for (i, slot) in cell_vertex_indices.iter_mut().enumerate().take(vertex_count) {
    let vertex_code = REGULAR_VERTEX_DATA[case_code as usize][i];
    let v0 = ((vertex_code >> 4) & 0xf) as usize;
    let v1 = (vertex_code & 0xf) as usize;
    debug_assert!(v0 < v1, "edge endpoints must be ordered, got {v0} >= {v1}");

    let d0 = samples[v0] as i32;
    let d1 = samples[v1] as i32;

    if d0 == d1 {
      // Degenerate edge (also covers two exact zeros); the slot stays
      // unset and the triangle list never names it.
      continue;
    }

    // 8-bit interpolation fraction: 257 possible positions per edge.
    let t = (d1 << 8) / (d1 - d0);
    let t0 = t as f32 / 256.0;
    let t1 = (0x100 - t) as f32 / 256.0;

    let p0 = corner_positions[v0];
    let p1 = corner_positions[v1];

    if t & 0xff != 0 {
      // Vertex strictly inside the edge.
      let reuse_dir = (vertex_code >> 12) & 0xf;
      let reuse_slot = ((vertex_code >> 8) & 0xf) as usize;

      let present = (reuse_dir & validity_mask) == reuse_dir;
      if present {
        let prev = cache.get(pos + prev_cell_offset(reuse_dir));
        *slot = prev.vertices[reuse_slot];
      }

      if !present || *slot == UNSET {
        let primary = p0.as_vec3a() * t0 + p1.as_vec3a() * t1;
        let normal =
          normalized_or_up(corner_gradients[v0] * t0 + corner_gradients[v1] * t1);

        let mut border_mask = cell_border_mask as u16;
        let mut secondary = primary;
        if cell_border_mask > 0 {
          secondary = secondary_position(primary, normal, 0, unpadded_size, min_pos);
          // Only faces shared by both endpoints apply to the vertex.
          let edge_mask =
            face_mask(p0, min_pos, max_pos) & face_mask(p1, min_pos, max_pos);
          border_mask |= (edge_mask as u16) << 6;
        }

        *slot = emit_vertex(buffers, primary, normal, border_mask, secondary, texture_index);

        if reuse_dir & 8 != 0 {
          cache.get_mut(pos).vertices[reuse_slot] = *slot;
        }
      }
    } else if t == 0 && v1 == 7 {
      // Exactly on the maximal corner: this cell owns the vertex. The
      // general blend collapses to p1 and the gradient at corner 7.
      let primary = p1.as_vec3a();
      let normal = normalized_or_up(corner_gradients[v1]);

      let mut border_mask = cell_border_mask as u16;
      let mut secondary = primary;
      if cell_border_mask > 0 {
        secondary = secondary_position(primary, normal, 0, unpadded_size, min_pos);
        border_mask |= (face_mask(p1, min_pos, max_pos) as u16) << 6;
      }

      *slot = emit_vertex(buffers, primary, normal, border_mask, secondary, texture_index);
      cache.get_mut(pos).vertices[0] = *slot;
    } else {
      // Exactly on a corner some predecessor owns. Inverting the corner
      // index gives the direction code of that predecessor.
      let corner = if t == 0 { v1 } else { v0 };
      let reuse_dir = (corner ^ 7) as u16;
      let present = (reuse_dir & validity_mask) == reuse_dir;

      if present {
        let prev = cache.get(pos + prev_cell_offset(reuse_dir));
        *slot = prev.vertices[0];
      }

      if !present || *slot < 0 {
        // The owning cell is outside the block (or produced no surface);
        // emit a duplicate without caching it.
        let primary = p0.as_vec3a() * t0 + p1.as_vec3a() * t1;
        let normal =
          normalized_or_up(corner_gradients[v0] * t0 + corner_gradients[v1] * t1);

        let mut border_mask = cell_border_mask as u16;
        let mut secondary = primary;
        if cell_border_mask > 0 {
          secondary = secondary_position(primary, normal, 0, unpadded_size, min_pos);
          let corner_pos = if t == 0 { p1 } else { p0 };
          border_mask |= (face_mask(corner_pos, min_pos, max_pos) as u16) << 6;
        }

        *slot = emit_vertex(buffers, primary, normal, border_mask, secondary, texture_index);
      }
    }
  }

  for tri in 0..triangle_count {
    for i in 0..3 {
      let vertex_slot = cell_data.vertex_index[tri * 3 + i] as usize;
      let index = cell_vertex_indices[vertex_slot];
      debug_assert!(index >= 0, "triangle references an unset vertex slot");
      buffers.indices.push(index as u32);
    }
  }
}

#[cfg(test)]
#[path = "regular_test.rs"]
mod regular_test;
