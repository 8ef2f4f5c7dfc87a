//! Core output types for Transvoxel meshing.

/// One of the six cubic faces of a block, in the order used for transition
/// surfaces throughout the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FaceDirection {
  NegativeX = 0,
  PositiveX = 1,
  NegativeY = 2,
  PositiveY = 3,
  NegativeZ = 4,
  PositiveZ = 5,
}

impl FaceDirection {
  /// All six directions, in surface-array order.
  pub const ALL: [FaceDirection; 6] = [
    FaceDirection::NegativeX,
    FaceDirection::PositiveX,
    FaceDirection::NegativeY,
    FaceDirection::PositiveY,
    FaceDirection::NegativeZ,
    FaceDirection::PositiveZ,
  ];

  /// Index of this direction into per-direction arrays.
  #[inline]
  pub fn index(self) -> usize {
    self as usize
  }
}

/// Primitive topology of an emitted surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Primitive {
  Triangles,
}

/// Host-facing compression hints forwarded with every mesh output.
///
/// The mesher itself emits full-precision arrays; these bits only tell the
/// consuming pipeline which attributes tolerate quantized upload. The extra
/// channel is deliberately absent: it packs the border mask as a float and
/// must survive untouched.
pub mod compression {
  pub const NORMALS: u32 = 1 << 0;
  pub const TANGENTS: u32 = 1 << 1;
  pub const TEX_UV: u32 = 1 << 2;
  pub const TEX_UV2: u32 = 1 << 3;
  pub const WEIGHTS: u32 = 1 << 4;

  /// Default hint set for Transvoxel surfaces.
  pub const DEFAULT: u32 = NORMALS | TANGENTS | TEX_UV | TEX_UV2 | WEIGHTS;
}

/// Growable geometry buffers filled during one polygonization pass.
///
/// Five parallel vertex-indexed arrays plus the triangle index list. The
/// same buffers are reused across builds; `clear` drops the contents but
/// keeps the allocations, so a warmed-up mesher stops allocating entirely.
///
/// Parallel-array contract: `positions`, `normals`, `extras` and
/// `secondary_positions` always have the same length, and every index is
/// in range.
#[derive(Clone, Default)]
pub struct MeshBuffers {
  /// Primary vertex positions in block-local coordinates (padding removed).
  pub positions: Vec<[f32; 3]>,

  /// Unit surface normals (gradient based).
  pub normals: Vec<[f32; 3]>,

  /// Per-vertex extra attributes: `[0, texture_index, 0, border_mask]`.
  pub extras: Vec<[f32; 4]>,

  /// Border-deformed positions. Equal to the primary position for vertices
  /// with border mask 0.
  pub secondary_positions: Vec<[f32; 3]>,

  /// Triangle list, three indices per triangle.
  pub indices: Vec<u32>,
}

impl MeshBuffers {
  pub fn new() -> Self {
    Self::default()
  }

  /// Drop all geometry, retaining capacity.
  pub fn clear(&mut self) {
    self.positions.clear();
    self.normals.clear();
    self.extras.clear();
    self.secondary_positions.clear();
    self.indices.clear();
  }

  /// Returns true if no vertices were emitted.
  pub fn is_empty(&self) -> bool {
    self.positions.is_empty()
  }

  pub fn vertex_count(&self) -> usize {
    self.positions.len()
  }

  pub fn triangle_count(&self) -> usize {
    self.indices.len() / 3
  }

  /// Scale positions, secondary positions and the first three extra
  /// components. Used to bake the LOD factor into emitted geometry.
  pub fn scale_by(&mut self, factor: f32) {
    for p in &mut self.positions {
      p[0] *= factor;
      p[1] *= factor;
      p[2] *= factor;
    }
    for p in &mut self.secondary_positions {
      p[0] *= factor;
      p[1] *= factor;
      p[2] *= factor;
    }
    for e in &mut self.extras {
      e[0] *= factor;
      e[1] *= factor;
      e[2] *= factor;
    }
  }

  /// Snapshot the current contents as an owned surface.
  pub fn to_surface(&self) -> Surface {
    Surface {
      positions: self.positions.clone(),
      normals: self.normals.clone(),
      extras: self.extras.clone(),
      secondary_positions: self.secondary_positions.clone(),
      indices: self.indices.clone(),
    }
  }
}

/// An owned triangle-list surface handed to the host.
#[derive(Clone, Default)]
pub struct Surface {
  pub positions: Vec<[f32; 3]>,
  pub normals: Vec<[f32; 3]>,
  pub extras: Vec<[f32; 4]>,
  pub secondary_positions: Vec<[f32; 3]>,
  pub indices: Vec<u32>,
}

impl Surface {
  pub fn is_empty(&self) -> bool {
    self.positions.is_empty()
  }

  pub fn vertex_count(&self) -> usize {
    self.positions.len()
  }

  pub fn triangle_count(&self) -> usize {
    self.indices.len() / 3
  }
}

/// Result of one full mesher build.
///
/// The regular surface covers the block interior; the six transition
/// surfaces stitch it to half-resolution neighbours, one per face. Any of
/// them can be empty. If the regular surface is empty the whole output is
/// empty: a block with no interior geometry has nothing to stitch.
#[derive(Clone)]
pub struct MeshOutput {
  pub regular: Surface,
  pub transitions: [Surface; 6],
  pub primitive: Primitive,
  pub compression_flags: u32,
}

impl Default for MeshOutput {
  fn default() -> Self {
    Self {
      regular: Surface::default(),
      transitions: Default::default(),
      primitive: Primitive::Triangles,
      compression_flags: compression::DEFAULT,
    }
  }
}

impl MeshOutput {
  /// Transition surface toward the given face.
  pub fn transition(&self, direction: FaceDirection) -> &Surface {
    &self.transitions[direction.index()]
  }

  pub fn is_empty(&self) -> bool {
    self.regular.is_empty()
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
