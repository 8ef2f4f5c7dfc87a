//! Block layout constants shared by the regular and transition polygonizers.
//!
//! A voxel block carries padding around the cells that actually produce
//! geometry: one layer on the negative sides and two layers on the positive
//! sides. The negative layer lets the central-difference gradient reach one
//! voxel below the first cell corner; the positive layers cover the `+1`
//! cell corner plus one more voxel for the gradient at that corner.
//!
//! ```text
//! Sample index:  0     1     2    ...   S-3   S-2   S-1
//!                │     │                 │     │     │
//!                │     └── cell minima ──┘     └──┬──┘
//!                └─ gradient apron          gradient apron
//! ```
//!
//! Cells are therefore iterated over `[MIN_PADDING, S - MAX_PADDING)` on
//! each axis, and a block needs at least `MIN_PADDING + MAX_PADDING + 1`
//! samples per axis to contain a single cell.

/// Padding reserved on the -X/-Y/-Z sides of a block.
pub const MIN_PADDING: i32 = 1;

/// Padding reserved on the +X/+Y/+Z sides of a block.
pub const MAX_PADDING: i32 = 2;

/// Smallest block edge that still contains one polygonizable cell.
pub const MIN_BLOCK_EDGE: i32 = MIN_PADDING + MAX_PADDING + 1;

/// Fraction of a full-resolution cell reserved for a transition patch.
///
/// Boundary vertices of the regular mesh are pulled inward by up to this
/// fraction of the cell size so a transition cell fits between the block
/// and a half-resolution neighbour.
pub const TRANSITION_CELL_SCALE: f32 = 0.25;
