//! Engine-agnostic build metrics.
//!
//! Feature-gated and runtime-toggled to ensure zero overhead when
//! disabled.

use std::collections::VecDeque;
#[cfg(feature = "metrics")]
use std::sync::atomic::Ordering;
use std::sync::atomic::AtomicBool;

/// Runtime toggle for metrics collection.
pub static COLLECT_METRICS: AtomicBool = AtomicBool::new(true);

/// Check if metrics collection is enabled (both compile-time and runtime).
#[inline]
pub fn is_enabled() -> bool {
  #[cfg(feature = "metrics")]
  {
    COLLECT_METRICS.load(Ordering::Relaxed)
  }
  #[cfg(not(feature = "metrics"))]
  {
    false
  }
}

/// Rolling window for storing recent values (e.g. timing history).
#[derive(Debug, Clone)]
pub struct RollingWindow {
  buffer: VecDeque<u64>,
  capacity: usize,
}

impl RollingWindow {
  pub fn new(capacity: usize) -> Self {
    Self {
      buffer: VecDeque::with_capacity(capacity),
      capacity,
    }
  }

  /// Push a new value, evicting the oldest if at capacity.
  pub fn push(&mut self, value: u64) {
    if self.buffer.len() >= self.capacity {
      self.buffer.pop_front();
    }
    self.buffer.push_back(value);
  }

  pub fn len(&self) -> usize {
    self.buffer.len()
  }

  pub fn is_empty(&self) -> bool {
    self.buffer.is_empty()
  }

  pub fn clear(&mut self) {
    self.buffer.clear();
  }

  pub fn last(&self) -> Option<u64> {
    self.buffer.back().copied()
  }

  pub fn average(&self) -> f64 {
    if self.buffer.is_empty() {
      0.0
    } else {
      self.buffer.iter().sum::<u64>() as f64 / self.buffer.len() as f64
    }
  }
}

impl Default for RollingWindow {
  fn default() -> Self {
    Self::new(128)
  }
}

/// Mesher-level statistics fed by the meshing stage.
#[derive(Debug, Clone, Default)]
pub struct MesherMetrics {
  /// Rolling window of build times in microseconds.
  pub build_timings: RollingWindow,
  /// Last build time in microseconds.
  pub last_build_us: u64,
  /// Total builds completed this session.
  pub total_builds: u64,
  /// Total vertices emitted this session (regular surfaces).
  pub total_vertices: u64,
}

impl MesherMetrics {
  pub fn new() -> Self {
    Self::default()
  }

  /// Record one completed build.
  pub fn record_build(&mut self, build_us: u64, vertex_count: usize) {
    if !is_enabled() {
      return;
    }
    self.build_timings.push(build_us);
    self.last_build_us = build_us;
    self.total_builds += 1;
    self.total_vertices += vertex_count as u64;
  }

  pub fn avg_build_us(&self) -> f64 {
    self.build_timings.average()
  }
}
