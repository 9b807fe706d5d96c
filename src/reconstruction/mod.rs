//! Caller-side reconstruction helpers.
//!
//! - [`ReconstructionConfig`]: scheme selection and halo sizing
//! - [`reconstruct_faces`]: sweep a stencil over a ghost-padded line

mod config;
mod line;

pub use config::ReconstructionConfig;
pub use line::{FaceStates, reconstruct_faces, reconstruct_faces_with};

#[cfg(feature = "parallel")]
pub use line::{reconstruct_faces_parallel, reconstruct_faces_parallel_with};
