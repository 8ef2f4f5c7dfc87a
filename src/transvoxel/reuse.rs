//! Vertex reuse caches.
//!
//! Neighbouring cells share edges, and a vertex interpolated on a shared
//! edge must be emitted once and referenced by index afterwards. Each cell
//! may own up to four reusable vertices (three minimal edges plus its
//! maximal corner), so the cache keeps one slot record per cell for the
//! current and previous deck of cells. Deck roles alternate on the Z
//! parity, which avoids both reallocation and modulo in the hot loop.
//!
//! Transition cells polygonize a 2D face, so their cache is two rows
//! alternating on the face-Y parity, with room for the larger slot set the
//! transition tables name.

use glam::IVec3;

/// Absent-vertex marker.
pub(crate) const UNSET: i32 = -1;

/// Reusable vertex slots of one regular cell.
#[derive(Clone, Copy)]
pub(crate) struct ReuseCell {
  pub vertices: [i32; 4],
}

impl ReuseCell {
  const EMPTY: Self = Self {
    vertices: [UNSET; 4],
  };
}

/// Reusable vertex slots of one transition cell.
#[derive(Clone, Copy)]
pub(crate) struct ReuseTransitionCell {
  pub vertices: [i32; 12],
}

impl ReuseTransitionCell {
  const EMPTY: Self = Self {
    vertices: [UNSET; 12],
  };
}

/// Two-deck cache of regular-cell vertex indices.
///
/// Indexed by `(pos.z & 1, pos.y * size.y + pos.x)`; decks are sized to
/// cover that stride for any block shape. Values persist for exactly one
/// build: `reset` re-fills with [`UNSET`].
pub(crate) struct VertexReuseCache {
  decks: [Vec<ReuseCell>; 2],
  block_size: IVec3,
}

impl VertexReuseCache {
  pub fn new() -> Self {
    Self {
      decks: [Vec::new(), Vec::new()],
      block_size: IVec3::ZERO,
    }
  }

  /// Resize for a block and mark every slot absent.
  pub fn reset(&mut self, block_size: IVec3) {
    self.block_size = block_size;
    // The y-major stride can exceed x*y on flat blocks; cover it fully.
    let deck_len = (block_size.y * block_size.y + block_size.x) as usize;
    for deck in &mut self.decks {
      deck.clear();
      deck.resize(deck_len, ReuseCell::EMPTY);
    }
  }

  #[inline]
  fn slot(&self, pos: IVec3) -> (usize, usize) {
    let deck = (pos.z & 1) as usize;
    let index = (pos.y * self.block_size.y + pos.x) as usize;
    (deck, index)
  }

  #[inline]
  pub fn get(&self, pos: IVec3) -> &ReuseCell {
    let (deck, index) = self.slot(pos);
    &self.decks[deck][index]
  }

  #[inline]
  pub fn get_mut(&mut self, pos: IVec3) -> &mut ReuseCell {
    let (deck, index) = self.slot(pos);
    &mut self.decks[deck][index]
  }
}

/// Two-row cache of transition-cell vertex indices, indexed by
/// `(fy & 1, fx)` in face space.
pub(crate) struct TransitionReuseCache {
  rows: [Vec<ReuseTransitionCell>; 2],
}

impl TransitionReuseCache {
  pub fn new() -> Self {
    Self {
      rows: [Vec::new(), Vec::new()],
    }
  }

  /// Resize rows to the face width and mark every slot absent.
  pub fn reset(&mut self, width: usize) {
    for row in &mut self.rows {
      row.clear();
      row.resize(width, ReuseTransitionCell::EMPTY);
    }
  }

  #[inline]
  pub fn get(&self, fx: i32, fy: i32) -> &ReuseTransitionCell {
    &self.rows[(fy & 1) as usize][fx as usize]
  }

  #[inline]
  pub fn get_mut(&mut self, fx: i32, fy: i32) -> &mut ReuseTransitionCell {
    &mut self.rows[(fy & 1) as usize][fx as usize]
  }
}

#[cfg(test)]
#[path = "reuse_test.rs"]
mod reuse_test;
