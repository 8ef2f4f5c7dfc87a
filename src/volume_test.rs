use super::*;
use glam::IVec3;

#[test]
fn test_new_grid_is_uniform_air() {
  let grid = VoxelGrid::new(IVec3::new(4, 5, 6));

  assert_eq!(grid.size(), IVec3::new(4, 5, 6));
  assert!(grid.is_uniform(VoxelChannel::Sdf));
  assert!(grid.is_uniform(VoxelChannel::Data2));
  assert_eq!(grid.get_voxel(IVec3::new(3, 4, 5), VoxelChannel::Sdf), VoxelGrid::AIR);
}

#[test]
fn test_set_voxel_round_trips_per_channel() {
  let mut grid = VoxelGrid::new(IVec3::splat(4));
  let pos = IVec3::new(1, 2, 3);

  grid.set_voxel(pos, VoxelChannel::Sdf, 200);
  grid.set_voxel(pos, VoxelChannel::Data2, 5);

  assert_eq!(grid.get_voxel(pos, VoxelChannel::Sdf), 200);
  assert_eq!(grid.get_voxel(pos, VoxelChannel::Data2), 5);
  // Channels are independent.
  assert_eq!(grid.get_voxel(IVec3::ZERO, VoxelChannel::Sdf), VoxelGrid::AIR);
  assert!(!grid.is_uniform(VoxelChannel::Sdf));
}

#[test]
fn test_fill_makes_channel_uniform() {
  let mut grid = VoxelGrid::new(IVec3::splat(4));
  grid.set_voxel(IVec3::ZERO, VoxelChannel::Sdf, 3);

  grid.fill(VoxelChannel::Sdf, 140);

  assert!(grid.is_uniform(VoxelChannel::Sdf));
  assert_eq!(grid.get_voxel(IVec3::new(2, 2, 2), VoxelChannel::Sdf), 140);
}

#[test]
fn test_fill_sdf_writes_sign_convention() {
  let mut grid = VoxelGrid::new(IVec3::splat(4));
  // Solid below y = 1.5.
  grid.fill_sdf(|p| p.y as f32 - 1.5);

  // Solid voxels store bytes above 127, air below.
  assert!(grid.get_voxel(IVec3::new(0, 0, 0), VoxelChannel::Sdf) > 127);
  assert!(grid.get_voxel(IVec3::new(0, 3, 0), VoxelChannel::Sdf) < 127);
}

#[test]
fn test_sdf_encoding_round_trip_signs() {
  assert_eq!(sdf_encoding::to_storage(0.0), 127);
  assert_eq!(sdf_encoding::to_sample(127), 0);

  for &sdf in &[-5.0f32, -0.5, 0.5, 5.0] {
    let raw = sdf_encoding::to_storage(sdf);
    let sample = sdf_encoding::to_sample(raw);
    assert_eq!(
      sample < 0,
      sdf < 0.0,
      "sign lost for {sdf}: raw {raw}, sample {sample}"
    );
  }
}

#[test]
fn test_sdf_encoding_clamps() {
  // Far values clamp instead of wrapping.
  let deep_inside = sdf_encoding::to_storage(-1000.0);
  let deep_outside = sdf_encoding::to_storage(1000.0);
  assert_eq!(deep_inside, 254);
  assert_eq!(deep_outside, 0);
  assert_eq!(sdf_encoding::to_sample(deep_inside), -127);
  assert_eq!(sdf_encoding::to_sample(deep_outside), 127);
}
