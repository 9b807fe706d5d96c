//! Face reconstruction stencils.
//!
//! Provides the stencil contract and the built-in schemes:
//! - [`Stencil`]: trait every scheme implements (static dispatch)
//! - [`DynStencil`], [`BoxedStencil`]: object-safe view (runtime polymorphism)
//! - [`StencilKind`]: enum for configuration-driven selection and dispatch
//!
//! ## Built-in Schemes
//! - [`FirstOrder`]: upwind cell value
//! - [`Weno3`]: third-order WENO
//! - [`Weno5`]: fifth-order WENO (Jiang-Shu)
//! - [`Weno5Z`]: fifth-order WENO-Z
//! - [`Weno5Hm`]: fifth-order mapped WENO
//! - [`Teno5`]: fifth-order targeted ENO

mod first_order;
mod standard;
mod teno5;
pub mod traits;
mod weno3;
mod weno5;
mod weno5_core;
mod weno5_hm;
mod weno5_z;

pub use first_order::FirstOrder;
pub use standard::{StencilKind, create_stencil};
pub use teno5::Teno5;
pub use traits::{BoxedStencil, DynStencil, Stencil};
pub use weno3::Weno3;
pub use weno5::Weno5;
pub use weno5_core::{OPTIMAL_WEIGHTS, optimal_reconstruction};
pub use weno5_hm::Weno5Hm;
pub use weno5_z::Weno5Z;
