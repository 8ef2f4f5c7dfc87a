//! Voxel volume access and the dense reference container.
//!
//! The mesher only needs three capabilities from a voxel container:
//! random-access byte reads per channel, the block size, and a cheap
//! uniformity test. Anything that can answer those — dense arrays, paged
//! storage, generator-backed caches — plugs in through [`VoxelVolume`].
//!
//! # Byte convention
//!
//! The density channel stores raw bytes; the sampler inverts them
//! (`255 - raw`) and recenters to `i8`, so a stored byte above 127 reads
//! back as a negative (solid) sample. [`sdf_encoding`] writes that
//! convention, which keeps the inversion in exactly one place: containers
//! store pre-inversion bytes, only the sampler inverts.

use glam::IVec3;

/// Channels a voxel volume exposes to the mesher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoxelChannel {
  /// Quantized signed distance, stored as a raw byte (see [`sdf_encoding`]).
  Sdf,
  /// Arbitrary per-voxel byte forwarded verbatim as the vertex texture
  /// index.
  Data2,
}

/// Read-only voxel container contract consumed by the polygonizers.
///
/// Positions passed by the mesher are always in range for blocks that meet
/// the minimum-size precondition; implementations may bounds-check or not.
pub trait VoxelVolume {
  /// Block size in samples per axis.
  fn size(&self) -> IVec3;

  /// Raw byte at `pos` on `channel`.
  fn get_voxel(&self, pos: IVec3, channel: VoxelChannel) -> u8;

  /// True if every sample of `channel` has the same value.
  fn is_uniform(&self, channel: VoxelChannel) -> bool;
}

/// Quantization between float signed distances and stored density bytes.
///
/// Mirrors the sampler's read convention: the effective signed sample is
/// `127 - raw`, so solid (negative SDF) voxels store bytes above 127.
pub mod sdf_encoding {
  /// SDF range in voxel units mapped onto the byte; values beyond clamp.
  pub const RANGE: f32 = 10.0;

  /// Quantization scale: levels per world unit.
  pub const SCALE: f32 = 127.0 / RANGE;

  /// Encode a float SDF value as a storable density byte.
  #[inline(always)]
  pub fn to_storage(sdf: f32) -> u8 {
    let q = (sdf * SCALE).clamp(-127.0, 127.0).round() as i32;
    (127 - q) as u8
  }

  /// Effective signed sample a stored byte reads back as.
  #[inline(always)]
  pub fn to_sample(raw: u8) -> i8 {
    (127 - raw as i32) as i8
  }
}

/// Dense voxel block backed by one `Vec<u8>` per channel.
///
/// The reference [`VoxelVolume`] implementation, used by the meshing stage,
/// the SDF fillers, tests and benches.
#[derive(Clone)]
pub struct VoxelGrid {
  size: IVec3,
  sdf: Vec<u8>,
  data2: Vec<u8>,
}

impl VoxelGrid {
  /// Raw byte representing "just outside the surface".
  pub const AIR: u8 = 127;

  /// Create a grid filled with air on the density channel and zero on the
  /// data channel.
  pub fn new(size: IVec3) -> Self {
    assert!(
      size.x > 0 && size.y > 0 && size.z > 0,
      "voxel grid size must be positive, got {size}"
    );
    let volume = (size.x as usize) * (size.y as usize) * (size.z as usize);
    Self {
      size,
      sdf: vec![Self::AIR; volume],
      data2: vec![0; volume],
    }
  }

  #[inline]
  fn index(&self, pos: IVec3) -> usize {
    debug_assert!(
      pos.cmpge(IVec3::ZERO).all() && pos.cmplt(self.size).all(),
      "voxel position {pos} out of bounds for grid {}",
      self.size
    );
    (pos.x + self.size.x * (pos.y + self.size.y * pos.z)) as usize
  }

  /// Write one voxel byte.
  pub fn set_voxel(&mut self, pos: IVec3, channel: VoxelChannel, value: u8) {
    let i = self.index(pos);
    match channel {
      VoxelChannel::Sdf => self.sdf[i] = value,
      VoxelChannel::Data2 => self.data2[i] = value,
    }
  }

  /// Fill a whole channel with one byte.
  pub fn fill(&mut self, channel: VoxelChannel, value: u8) {
    match channel {
      VoxelChannel::Sdf => self.sdf.fill(value),
      VoxelChannel::Data2 => self.data2.fill(value),
    }
  }

  /// Populate the density channel from a float SDF evaluated per voxel.
  pub fn fill_sdf(&mut self, mut sdf: impl FnMut(IVec3) -> f32) {
    for z in 0..self.size.z {
      for y in 0..self.size.y {
        for x in 0..self.size.x {
          let pos = IVec3::new(x, y, z);
          let value = sdf_encoding::to_storage(sdf(pos));
          let i = self.index(pos);
          self.sdf[i] = value;
        }
      }
    }
  }

  fn channel(&self, channel: VoxelChannel) -> &[u8] {
    match channel {
      VoxelChannel::Sdf => &self.sdf,
      VoxelChannel::Data2 => &self.data2,
    }
  }
}

impl VoxelVolume for VoxelGrid {
  fn size(&self) -> IVec3 {
    self.size
  }

  fn get_voxel(&self, pos: IVec3, channel: VoxelChannel) -> u8 {
    self.channel(channel)[self.index(pos)]
  }

  fn is_uniform(&self, channel: VoxelChannel) -> bool {
    let data = self.channel(channel);
    match data.first() {
      Some(&first) => data.iter().all(|&v| v == first),
      None => true,
    }
  }
}

#[cfg(test)]
#[path = "volume_test.rs"]
mod volume_test;
