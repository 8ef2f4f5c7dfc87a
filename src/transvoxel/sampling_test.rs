use super::*;
use crate::volume::{VoxelChannel, VoxelGrid};
use glam::IVec3;

#[test]
fn test_signed_conversion() {
  assert_eq!(to_signed(128), 0);
  assert_eq!(to_signed(130), 2);
  assert_eq!(to_signed(126), -2);
  assert_eq!(to_signed(0), -128);
  assert_eq!(to_signed(255), 127);
}

#[test]
fn test_sign_bit_matches_negativity() {
  assert_eq!(sign_bit(-128), 1);
  assert_eq!(sign_bit(-1), 1);
  assert_eq!(sign_bit(0), 0);
  assert_eq!(sign_bit(1), 0);
  assert_eq!(sign_bit(127), 0);
}

#[test]
fn test_norm_scale() {
  assert_eq!(to_norm(0), 0.0);
  assert_eq!(to_norm(64), 0.25);
  assert_eq!(to_norm(-128), -0.5);
}

#[test]
fn test_sampler_inverts_stored_bytes() {
  let mut grid = VoxelGrid::new(IVec3::splat(3));
  grid.set_voxel(IVec3::new(1, 1, 1), VoxelChannel::Sdf, 129);
  grid.set_voxel(IVec3::new(0, 0, 0), VoxelChannel::Sdf, 127);
  let sampler = SdfSampler::new(&grid);

  // Stored bytes above 127 read back negative (solid).
  assert_eq!(sampler.signed(IVec3::new(1, 1, 1)), -2);
  assert_eq!(sampler.signed(IVec3::new(0, 0, 0)), 0);
}

#[test]
fn test_raw_channel_passthrough() {
  let mut grid = VoxelGrid::new(IVec3::splat(3));
  grid.set_voxel(IVec3::new(2, 0, 1), VoxelChannel::Data2, 42);
  let sampler = SdfSampler::new(&grid);

  assert_eq!(sampler.raw(IVec3::new(2, 0, 1), VoxelChannel::Data2), 42);
}

#[test]
fn test_gradient_of_linear_field() {
  // Stored byte 127 - x reads back as signed x: density rises along +X,
  // so the gradient points along -X with slope 2/256 per central
  // difference.
  let mut grid = VoxelGrid::new(IVec3::splat(5));
  for z in 0..5 {
    for y in 0..5 {
      for x in 0..5 {
        grid.set_voxel(IVec3::new(x, y, z), VoxelChannel::Sdf, (127 - x) as u8);
      }
    }
  }
  let sampler = SdfSampler::new(&grid);

  let g = sampler.gradient(IVec3::new(2, 2, 2));
  assert_eq!(g.x, -2.0 / 256.0);
  assert_eq!(g.y, 0.0);
  assert_eq!(g.z, 0.0);
}

#[test]
fn test_gradient_of_uniform_field_is_zero() {
  let grid = VoxelGrid::new(IVec3::splat(5));
  let sampler = SdfSampler::new(&grid);

  assert_eq!(sampler.gradient(IVec3::new(2, 2, 2)), glam::Vec3A::ZERO);
}
