//! Strongly-typed inputs to a stencil evaluation.
//!
//! - [`StencilWindow`]: fixed-width window of cell averages (`[f64; N]`)
//! - [`EvaluationProperties`]: which side of the face is reconstructed
//! - [`FaceSide`]: named left/right orientation

mod properties;
mod window;

pub use properties::{EvaluationProperties, FaceSide};
pub use window::StencilWindow;
