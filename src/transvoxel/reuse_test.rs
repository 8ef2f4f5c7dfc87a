use super::*;
use glam::IVec3;

#[test]
fn test_reset_marks_everything_absent() {
  let mut cache = VertexReuseCache::new();
  cache.reset(IVec3::splat(8));

  for z in 0..8 {
    for y in 0..6 {
      for x in 0..6 {
        let cell = cache.get(IVec3::new(x, y, z));
        assert!(cell.vertices.iter().all(|&v| v == UNSET));
      }
    }
  }
}

#[test]
fn test_slots_round_trip() {
  let mut cache = VertexReuseCache::new();
  cache.reset(IVec3::splat(8));

  let pos = IVec3::new(3, 4, 5);
  cache.get_mut(pos).vertices = [10, 11, 12, 13];

  assert_eq!(cache.get(pos).vertices, [10, 11, 12, 13]);
}

#[test]
fn test_decks_alternate_on_z_parity() {
  let mut cache = VertexReuseCache::new();
  cache.reset(IVec3::splat(8));

  let below = IVec3::new(2, 2, 4);
  let above = IVec3::new(2, 2, 5);
  cache.get_mut(below).vertices[0] = 42;

  // Same x/y, other deck: untouched.
  assert_eq!(cache.get(above).vertices[0], UNSET);
  assert_eq!(cache.get(below).vertices[0], 42);
}

#[test]
fn test_reset_clears_previous_build() {
  let mut cache = VertexReuseCache::new();
  cache.reset(IVec3::splat(8));
  cache.get_mut(IVec3::new(1, 1, 1)).vertices[2] = 7;

  cache.reset(IVec3::splat(8));
  assert_eq!(cache.get(IVec3::new(1, 1, 1)).vertices[2], UNSET);
}

#[test]
fn test_flat_blocks_fit_the_stride() {
  // The y-major stride must stay in bounds when y outruns x.
  let mut cache = VertexReuseCache::new();
  cache.reset(IVec3::new(4, 10, 4));

  cache.get_mut(IVec3::new(3, 9, 1)).vertices[0] = 1;
  assert_eq!(cache.get(IVec3::new(3, 9, 1)).vertices[0], 1);
}

#[test]
fn test_transition_rows_alternate_on_y_parity() {
  let mut cache = TransitionReuseCache::new();
  cache.reset(16);

  cache.get_mut(5, 2).vertices[3] = 9;

  assert_eq!(cache.get(5, 2).vertices[3], 9);
  assert_eq!(cache.get(5, 3).vertices[3], UNSET);
  // Rows of equal parity share storage; only immediate predecessors are
  // ever looked up, so the aliasing is harmless.
  assert_eq!(cache.get(5, 4).vertices[3], 9);
}

#[test]
fn test_transition_reset_resizes() {
  let mut cache = TransitionReuseCache::new();
  cache.reset(4);
  cache.get_mut(3, 0).vertices[0] = 5;

  cache.reset(8);
  assert_eq!(cache.get(3, 0).vertices[0], UNSET);
  assert_eq!(cache.get(7, 1).vertices[0], UNSET);
}
