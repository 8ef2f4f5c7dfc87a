//! Fixed Transvoxel lookup tables.
//!
//! The classification and triangulation tables come verbatim from the
//! `transvoxel_data` crate (Lengyel's published tables), re-exported here so
//! the polygonizers have a single import point. Layouts, as consumed by
//! this crate:
//!
//! - `REGULAR_CELL_CLASS[256]`: case code -> one of 16 triangulation
//!   classes.
//! - `REGULAR_CELL_DATA[16]`: per class, packed vertex/triangle counts and
//!   the triangle corner list.
//! - `REGULAR_VERTEX_DATA[256]`: per case, up to 12 16-bit vertex codes
//!   `[reuse_dir:4 | reuse_slot:4 | v0:4 | v1:4]` with `v0 < v1` the edge
//!   endpoints. In `reuse_dir`, bits 1/2/4 walk one cell back along
//!   -X/-Y/-Z and bit 8 marks a vertex the owning cell must cache.
//! - `TRANSITION_CELL_CLASS[512]`: low 7 bits = class, bit 7 = winding
//!   flip.
//! - `TRANSITION_CELL_DATA[56]`, `TRANSITION_VERTEX_DATA[512]`: transition
//!   analogues; in `reuse_dir`, bit 1 = -X in face space, bit 2 = -Y,
//!   bit 4 = interior edge (never reusable), bit 8 = maximal edge
//!   (reusable).

pub(crate) use transvoxel_data::regular_cell_data::{
  REGULAR_CELL_CLASS, REGULAR_CELL_DATA, REGULAR_VERTEX_DATA,
};
pub(crate) use transvoxel_data::transition_cell_data::{
  TRANSITION_CELL_CLASS, TRANSITION_CELL_DATA, TRANSITION_VERTEX_DATA,
};

/// Reuse codes for transition-cell vertices that land exactly on one of the
/// 13 stencil corners, `[reuse_dir:4 | reuse_slot:4]` per corner.
///
/// Direction bits follow the transition vertex data: 1 = previous cell
/// along -X (face space), 2 = -Y, 4 = interior (never reachable from a
/// neighbour), 8 = owned by this cell and cached for later reuse.
///
/// Each physical corner has a single cache slot, named from the cell that
/// owns it (the cell for which the corner lies on a maximal edge):
///
/// ```text
///   6---7---8      B-------C       owned slots:
///   |   |   |      |       |         7 <- corner 4 (interior)
///   3---4---5      |       |         8 <- corner 5,  9 <- corner 7
///   |   |   |      |       |         A <- corner 8,  B <- corner C
///   0---1---2      9-------A       (half-resolution corners share B)
/// ```
///
/// Minimal corners resolve to the neighbouring owner: corner 0 is the
/// diagonal neighbour's corner 8, corner 9 its corner C, and so on.
pub(crate) const TRANSITION_CORNER_DATA: [u8; 13] = [
  0x3A, // 0: corner 8 of the (-X,-Y) neighbour
  0x29, // 1: corner 7 of the -Y neighbour
  0x2A, // 2: corner 8 of the -Y neighbour
  0x18, // 3: corner 5 of the -X neighbour
  0x47, // 4: interior, owned here
  0x88, // 5: maximal edge, owned here
  0x1A, // 6: corner 8 of the -X neighbour
  0x89, // 7: maximal edge, owned here
  0x8A, // 8: maximal corner, owned here
  0x3B, // 9: corner C of the (-X,-Y) neighbour
  0x2B, // A: corner C of the -Y neighbour
  0x1B, // B: corner C of the -X neighbour
  0x8B, // C: maximal half-resolution corner, owned here
];

#[cfg(test)]
#[path = "tables_test.rs"]
mod tables_test;
