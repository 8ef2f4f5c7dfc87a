//! Signed sampling adapter over a voxel volume.
//!
//! Transvoxel classifies corners by the sign bit of a signed sample, with
//! negative meaning solid. Density bytes are stored pre-inversion, so the
//! adapter inverts (`255 - raw`) and recenters to `i8` on every read. The
//! inversion lives here and nowhere else.

use glam::{IVec3, Vec3A};

use crate::volume::{VoxelChannel, VoxelVolume};

/// Reinterpret an inverted density byte as a signed sample.
#[inline(always)]
pub(crate) fn to_signed(v: u8) -> i8 {
  v.wrapping_sub(128) as i8
}

/// Signed sample scaled into `[-0.5, 0.5)`, the unit used for gradients.
#[inline(always)]
pub(crate) fn to_norm(v: i8) -> f32 {
  v as f32 / 256.0
}

/// Sign bit of a signed sample: 1 for negative (solid), 0 otherwise.
#[inline(always)]
pub(crate) fn sign_bit(v: i8) -> u32 {
  ((v >> 7) & 1) as u32
}

/// Borrowing adapter that reads signed density samples and raw channel
/// bytes from a voxel volume.
pub(crate) struct SdfSampler<'a, V: VoxelVolume> {
  voxels: &'a V,
}

impl<'a, V: VoxelVolume> SdfSampler<'a, V> {
  pub fn new(voxels: &'a V) -> Self {
    Self { voxels }
  }

  /// Signed density sample at `pos`.
  #[inline]
  pub fn signed(&self, pos: IVec3) -> i8 {
    to_signed(255 - self.voxels.get_voxel(pos, VoxelChannel::Sdf))
  }

  /// Raw byte at `pos` on a non-density channel.
  #[inline]
  pub fn raw(&self, pos: IVec3, channel: VoxelChannel) -> u8 {
    self.voxels.get_voxel(pos, channel)
  }

  /// Central-difference density gradient at `pos`.
  ///
  /// Needs `pos ± 1` on every axis to be in range; the block padding
  /// guarantees that for every corner the polygonizers visit.
  pub fn gradient(&self, pos: IVec3) -> Vec3A {
    let nx = to_norm(self.signed(pos - IVec3::X));
    let ny = to_norm(self.signed(pos - IVec3::Y));
    let nz = to_norm(self.signed(pos - IVec3::Z));
    let px = to_norm(self.signed(pos + IVec3::X));
    let py = to_norm(self.signed(pos + IVec3::Y));
    let pz = to_norm(self.signed(pos + IVec3::Z));
    Vec3A::new(nx - px, ny - py, nz - pz)
  }
}

#[cfg(test)]
#[path = "sampling_test.rs"]
mod sampling_test;
