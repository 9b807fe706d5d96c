//! # weno-rs
//!
//! High-order face reconstruction for finite-volume solvers.
//!
//! This crate turns a small window of cell averages into the value at a cell
//! face, high-order accurate on smooth data and non-oscillatory across
//! shocks and material interfaces:
//! - Stencil contract shared by every scheme ([`Stencil`])
//! - WENO/TENO schemes (first-order, WENO3, WENO5, WENO5-Z, WENO5-HM, TENO5)
//! - Configuration-driven scheme selection ([`StencilKind`], [`ReconstructionConfig`])
//! - Line sweeps over ghost-padded cell rows ([`reconstruct_faces`])
//!
//! # Example
//!
//! ```
//! use weno_rs::{EvaluationProperties, Stencil, Weno5Hm};
//!
//! let weno = Weno5Hm::new();
//! let window = [1.0, 1.0, 1.0, 1.0, 5.0, 5.0];
//!
//! let left = weno.evaluate(&window, EvaluationProperties::UPWIND_LEFT, 0.01);
//! assert!((1.0..=5.0).contains(&left));
//! ```

pub mod error;
pub mod reconstruction;
pub mod stencil;
pub mod types;

pub use error::{Result, StencilError};
pub use reconstruction::{
    FaceStates, ReconstructionConfig, reconstruct_faces, reconstruct_faces_with,
};
#[cfg(feature = "parallel")]
pub use reconstruction::{reconstruct_faces_parallel, reconstruct_faces_parallel_with};
pub use stencil::{
    BoxedStencil, DynStencil, FirstOrder, Stencil, StencilKind, Teno5, Weno3, Weno5, Weno5Hm,
    Weno5Z, create_stencil, optimal_reconstruction,
};
pub use types::{EvaluationProperties, FaceSide, StencilWindow};
