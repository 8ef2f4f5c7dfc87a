use super::*;

fn push_dummy_vertex(buffers: &mut MeshBuffers) {
  buffers.positions.push([1.0, 2.0, 3.0]);
  buffers.normals.push([0.0, 1.0, 0.0]);
  buffers.extras.push([0.0, 5.0, 0.0, 9.0]);
  buffers.secondary_positions.push([1.0, 2.0, 3.0]);
}

#[test]
fn test_clear_retains_capacity() {
  let mut buffers = MeshBuffers::new();
  for _ in 0..64 {
    push_dummy_vertex(&mut buffers);
    buffers.indices.extend([0, 0, 0]);
  }
  let position_capacity = buffers.positions.capacity();
  let index_capacity = buffers.indices.capacity();

  buffers.clear();

  assert!(buffers.is_empty());
  assert_eq!(buffers.vertex_count(), 0);
  assert_eq!(buffers.triangle_count(), 0);
  assert_eq!(buffers.positions.capacity(), position_capacity);
  assert_eq!(buffers.indices.capacity(), index_capacity);
}

#[test]
fn test_scale_touches_positions_and_extra_rgb() {
  let mut buffers = MeshBuffers::new();
  push_dummy_vertex(&mut buffers);

  buffers.scale_by(2.0);

  assert_eq!(buffers.positions[0], [2.0, 4.0, 6.0]);
  assert_eq!(buffers.secondary_positions[0], [2.0, 4.0, 6.0]);
  // First three extra components scale, the border mask does not.
  assert_eq!(buffers.extras[0], [0.0, 10.0, 0.0, 9.0]);
  // Normals are directions and never scale.
  assert_eq!(buffers.normals[0], [0.0, 1.0, 0.0]);
}

#[test]
fn test_to_surface_snapshots() {
  let mut buffers = MeshBuffers::new();
  push_dummy_vertex(&mut buffers);
  buffers.indices.extend([0, 0, 0]);

  let surface = buffers.to_surface();
  buffers.clear();

  assert_eq!(surface.vertex_count(), 1);
  assert_eq!(surface.triangle_count(), 1);
  assert!(!surface.is_empty());
  assert!(buffers.is_empty());
}

#[test]
fn test_default_output_is_empty_triangle_list() {
  let output = MeshOutput::default();

  assert!(output.is_empty());
  assert_eq!(output.primitive, Primitive::Triangles);
  assert_eq!(output.compression_flags, compression::DEFAULT);
  for direction in FaceDirection::ALL {
    assert!(output.transition(direction).is_empty());
  }
}

#[test]
fn test_face_direction_indices_cover_the_array() {
  for (i, direction) in FaceDirection::ALL.iter().enumerate() {
    assert_eq!(direction.index(), i);
  }
}
