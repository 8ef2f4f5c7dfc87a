use super::*;

#[test]
fn test_regular_class_extremes_are_empty() {
  // All-outside and all-inside cells triangulate to nothing.
  assert_eq!(REGULAR_CELL_CLASS[0], 0);
  assert_eq!(REGULAR_CELL_CLASS[255], 0);
  let empty = REGULAR_CELL_DATA[0];
  assert_eq!(empty.get_vertex_count() as usize, 0);
  assert_eq!(empty.get_triangle_count() as usize, 0);
}

#[test]
fn test_single_corner_case_is_one_triangle() {
  for corner in 0..8 {
    let class = REGULAR_CELL_CLASS[1 << corner] as usize;
    let data = REGULAR_CELL_DATA[class];
    assert_eq!(data.get_vertex_count() as usize, 3);
    assert_eq!(data.get_triangle_count() as usize, 1);
  }
}

#[test]
fn test_regular_vertex_codes_are_well_formed() {
  for case in 0..256usize {
    let class = REGULAR_CELL_CLASS[case] as usize;
    let vertex_count = REGULAR_CELL_DATA[class].get_vertex_count() as usize;
    for i in 0..vertex_count {
      let code = REGULAR_VERTEX_DATA[case][i];
      let v0 = (code >> 4) & 0xf;
      let v1 = code & 0xf;
      assert!(v0 < v1, "case {case}: endpoints out of order in {code:#06x}");
      assert!(v1 < 8, "case {case}: corner index out of range in {code:#06x}");
      let reuse_slot = (code >> 8) & 0xf;
      assert!(reuse_slot < 4, "case {case}: bad reuse slot in {code:#06x}");
    }
  }
}

#[test]
fn test_regular_triangles_reference_listed_vertices() {
  for class in 0..16usize {
    let data = REGULAR_CELL_DATA[class];
    let vertex_count = data.get_vertex_count() as usize;
    let triangle_count = data.get_triangle_count() as usize;
    for i in 0..triangle_count * 3 {
      assert!(
        (data.vertex_index[i] as usize) < vertex_count,
        "class {class}: triangle corner {i} names a missing vertex"
      );
    }
  }
}

#[test]
fn test_transition_class_extremes_are_empty() {
  assert_eq!(TRANSITION_CELL_CLASS[0] & 0x7f, 0);
  assert_eq!(TRANSITION_CELL_CLASS[511] & 0x7f, 0);
  let empty = TRANSITION_CELL_DATA[0];
  assert_eq!(empty.get_vertex_count() as usize, 0);
  assert_eq!(empty.get_triangle_count() as usize, 0);
}

#[test]
fn test_transition_classes_are_in_range() {
  for case in 0..512usize {
    let class = (TRANSITION_CELL_CLASS[case] & 0x7f) as usize;
    assert!(class < 56, "case {case}: class {class} out of range");
  }
}

#[test]
fn test_transition_vertex_codes_are_well_formed() {
  for case in 0..512usize {
    let class = (TRANSITION_CELL_CLASS[case] & 0x7f) as usize;
    let vertex_count = TRANSITION_CELL_DATA[class].get_vertex_count() as usize;
    for i in 0..vertex_count {
      let code = TRANSITION_VERTEX_DATA[case][i];
      let va = (code >> 4) & 0xf;
      let vb = code & 0xf;
      assert!(va <= 0xc, "case {case}: corner out of range in {code:#06x}");
      assert!(vb <= 0xc, "case {case}: corner out of range in {code:#06x}");
    }
  }
}

#[test]
fn test_corner_data_slots_are_consistent() {
  // Every entry fits the cache, and each physical corner resolves to the
  // slot its owner caches it under.
  for (i, &code) in TRANSITION_CORNER_DATA.iter().enumerate() {
    let slot = code & 0xf;
    let dir = code >> 4;
    assert!((slot as usize) < 12, "corner {i}: slot {slot} out of range");
    assert!(
      matches!(dir, 1 | 2 | 3 | 4 | 8),
      "corner {i}: invalid direction {dir}"
    );
  }

  let slot = |i: usize| TRANSITION_CORNER_DATA[i] & 0xf;

  // Corner 8 is corner 0/2/6 of the cells ahead of its owner.
  assert_eq!(slot(0), slot(8));
  assert_eq!(slot(2), slot(8));
  assert_eq!(slot(6), slot(8));
  // Corner 7 is corner 1 of the next row's cell.
  assert_eq!(slot(1), slot(7));
  // Corner 5 is corner 3 of the next column's cell.
  assert_eq!(slot(3), slot(5));
  // The half-resolution corner C covers corners 9, A and B.
  assert_eq!(slot(9), slot(0xc));
  assert_eq!(slot(0xa), slot(0xc));
  assert_eq!(slot(0xb), slot(0xc));

  // Owned corners are marked reusable, the centre is interior.
  assert_eq!(TRANSITION_CORNER_DATA[4] >> 4, 4);
  assert_eq!(TRANSITION_CORNER_DATA[5] >> 4, 8);
  assert_eq!(TRANSITION_CORNER_DATA[7] >> 4, 8);
  assert_eq!(TRANSITION_CORNER_DATA[8] >> 4, 8);
  assert_eq!(TRANSITION_CORNER_DATA[0xc] >> 4, 8);
}
