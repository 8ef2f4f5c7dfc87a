//! voxel_mesher - Framework/engine independent Transvoxel meshing
//!
//! This crate converts sampled signed-distance voxel blocks into triangle
//! surface meshes using the Transvoxel algorithm: Marching Cubes for the
//! block interior plus, per cubic face, a "transition" patch that stitches
//! the block to a neighbour meshed at half resolution, eliminating cracks
//! in multi-resolution terrain.
//!
//! # Features
//!
//! - **Regular polygonization**: table-driven cell classification with
//!   8-bit fixed-point edge interpolation and cross-cell vertex reuse
//! - **Transition patches**: six per-face half-resolution stitching
//!   surfaces built from the block's own samples
//! - **Border deformation**: secondary vertex positions and packed border
//!   masks so boundary geometry makes room for transition cells
//! - **Batch meshing**: a rayon-parallel stage with one mesher instance
//!   per worker
//!
//! # Example
//!
//! ```ignore
//! use glam::IVec3;
//! use voxel_mesher::{TransvoxelMesher, VoxelGrid};
//!
//! // Fill a padded block from a signed distance field (sphere).
//! let mut voxels = VoxelGrid::new(IVec3::splat(19));
//! voxels.fill_sdf(|p| (p.as_vec3a() - 9.0).length() - 6.0);
//!
//! // Mesh it.
//! let mut mesher = TransvoxelMesher::new();
//! let output = mesher.build(&voxels, 0);
//!
//! println!(
//!   "{} vertices, {} triangles",
//!   output.regular.vertex_count(),
//!   output.regular.triangle_count()
//! );
//! ```

pub mod constants;
pub mod types;
pub mod volume;

// Re-export commonly used items
pub use constants::{MAX_PADDING, MIN_BLOCK_EDGE, MIN_PADDING};
pub use types::{compression, FaceDirection, MeshBuffers, MeshOutput, Primitive, Surface};
pub use volume::{sdf_encoding, VoxelChannel, VoxelGrid, VoxelVolume};

// Transvoxel polygonizers and driver
pub mod transvoxel;
pub use transvoxel::TransvoxelMesher;

// Batch stage for parallel meshing
pub mod mesh_queue;
pub use mesh_queue::{MeshCompletion, MeshRequest, MeshingStage};

// Engine-agnostic build metrics
pub mod metrics;

// Analytic SDF fillers for tests and debugging
pub mod sdf_samplers;
