//! Batch meshing stage for parallel block builds.
//!
//! Following the stage pattern: Enqueue → Tick → Completions.
//!
//! A mesher instance is not reentrant (mutable reuse caches and output
//! buffers), so the stage gives every rayon worker its own instance via
//! `map_init`. Requests within one tick run in parallel; each build itself
//! is synchronous and runs to completion.

use rayon::prelude::*;
use web_time::Instant;

use crate::metrics::MesherMetrics;
use crate::transvoxel::TransvoxelMesher;
use crate::types::MeshOutput;
use crate::volume::VoxelGrid;

/// Request to mesh one voxel block.
#[derive(Clone)]
pub struct MeshRequest {
  /// Unique identifier for this request.
  pub id: u64,
  /// Voxel block to polygonize.
  pub voxels: VoxelGrid,
  /// Level of detail; geometry is scaled by `2^lod`.
  pub lod: u32,
}

/// Completed mesh result.
pub struct MeshCompletion {
  /// Request ID this completion corresponds to.
  pub id: u64,
  /// Generated surfaces.
  pub output: MeshOutput,
  /// Raw build time in microseconds.
  pub build_time_us: u64,
}

/// Meshing stage that processes requests in parallel.
pub struct MeshingStage {
  /// Pending requests waiting to be processed.
  pending: Vec<MeshRequest>,
  /// Completed results ready to be collected.
  completed: Vec<MeshCompletion>,
  /// Next request ID.
  next_id: u64,
  /// Build statistics, recorded as completions land.
  metrics: MesherMetrics,
}

impl Default for MeshingStage {
  fn default() -> Self {
    Self::new()
  }
}

impl MeshingStage {
  pub fn new() -> Self {
    Self {
      pending: Vec::new(),
      completed: Vec::new(),
      next_id: 0,
      metrics: MesherMetrics::new(),
    }
  }

  /// Enqueue a block, returning the assigned request ID.
  pub fn enqueue(&mut self, voxels: VoxelGrid, lod: u32) -> u64 {
    let id = self.next_id;
    self.next_id += 1;

    self.pending.push(MeshRequest { id, voxels, lod });

    id
  }

  /// Process all pending requests in parallel and move completions to the
  /// output list. Returns the number of requests processed this tick.
  pub fn tick(&mut self) -> usize {
    if self.pending.is_empty() {
      return 0;
    }

    let requests = std::mem::take(&mut self.pending);
    let count = requests.len();

    let completions: Vec<MeshCompletion> = requests
      .into_par_iter()
      .map_init(TransvoxelMesher::new, |mesher, req| {
        let start = Instant::now();
        let output = mesher.build(&req.voxels, req.lod);
        let build_time_us = start.elapsed().as_micros() as u64;
        MeshCompletion {
          id: req.id,
          output,
          build_time_us,
        }
      })
      .collect();

    for completion in &completions {
      self
        .metrics
        .record_build(completion.build_time_us, completion.output.regular.vertex_count());
    }

    self.completed.extend(completions);
    count
  }

  /// Take all completed meshes.
  pub fn drain_completions(&mut self) -> Vec<MeshCompletion> {
    std::mem::take(&mut self.completed)
  }

  /// Number of pending requests.
  pub fn pending_count(&self) -> usize {
    self.pending.len()
  }

  /// Number of completed results waiting to be drained.
  pub fn completed_count(&self) -> usize {
    self.completed.len()
  }

  /// Build statistics collected so far.
  pub fn metrics(&self) -> &MesherMetrics {
    &self.metrics
  }
}

#[cfg(test)]
#[path = "mesh_queue_test.rs"]
mod mesh_queue_test;
