//! Trait-based reconstruction stencil abstraction.
//!
//! Every reconstruction scheme is a zero-sized type implementing [`Stencil`].
//! The flux loop is generic over the stencil type, so the scheme is bound at
//! compile time and each face evaluation is a direct call.
//!
//! # Example
//! ```
//! use weno_rs::stencil::{Stencil, Weno5Hm};
//! use weno_rs::types::EvaluationProperties;
//!
//! let weno = Weno5Hm::new();
//! assert_eq!(Weno5Hm::STENCIL_SIZE, 6);
//! assert_eq!(Weno5Hm::DOWNSTREAM_SIZE, 2);
//!
//! let window = [1.0, 1.0, 1.0, 1.0, 5.0, 5.0];
//! let left = weno.evaluate(&window, EvaluationProperties::UPWIND_LEFT, 0.1);
//! assert!((left - 1.0).abs() < 1e-6);
//! ```

use crate::error::{Result, StencilError};
use crate::types::{EvaluationProperties, StencilWindow};

use super::standard::StencilKind;

// =============================================================================
// Stencil Trait
// =============================================================================

/// Contract shared by all face reconstruction schemes.
///
/// # Implementation Notes
///
/// - Implementors hold no state; coefficients are `const` items
/// - `apply` must be pure: identical inputs give identical outputs
/// - `apply` must not allocate, log, or clamp intermediate values
///
/// # Extending
///
/// To add a new scheme:
/// 1. Create a zero-sized struct
/// 2. Implement `Stencil` with its window type and downstream size
/// 3. Add a variant to [`StencilKind`] for configuration-driven selection
pub trait Stencil: Send + Sync {
    /// Window type, `[f64; STENCIL_SIZE]`.
    type Window: StencilWindow;

    /// Total number of cells the stencil reads.
    const STENCIL_SIZE: usize = <Self::Window as StencilWindow>::LEN;

    /// Number of cells downstream of the face for the left-biased stencil.
    const DOWNSTREAM_SIZE: usize;

    /// Configuration identifier of this scheme.
    const KIND: StencilKind;

    /// Scheme-specific reconstruction.
    ///
    /// Callers go through [`Stencil::evaluate`] or [`Stencil::try_evaluate`].
    fn apply(
        &self,
        window: &Self::Window,
        properties: EvaluationProperties,
        cell_size: f64,
    ) -> f64;

    /// Total number of cells the stencil reads.
    #[inline]
    fn stencil_size(&self) -> usize {
        Self::STENCIL_SIZE
    }

    /// Number of cells downstream of the face.
    #[inline]
    fn downstream_size(&self) -> usize {
        Self::DOWNSTREAM_SIZE
    }

    /// Human-readable name for debugging and logging.
    #[inline]
    fn name(&self) -> &'static str {
        Self::KIND.name()
    }

    /// Reconstruct the face value from a correctly sized window.
    ///
    /// # Arguments
    /// * `window` - Cell averages in physical order
    /// * `properties` - Which side of the face to reconstruct
    /// * `cell_size` - Grid spacing (ignored by schemes that do not need it)
    #[inline]
    fn evaluate(
        &self,
        window: &Self::Window,
        properties: EvaluationProperties,
        cell_size: f64,
    ) -> f64 {
        self.apply(window, properties, cell_size)
    }

    /// Reconstruct the face value from a slice, checking its length.
    ///
    /// # Errors
    /// [`StencilError::WindowLength`] if `window.len() != STENCIL_SIZE`.
    #[inline]
    fn try_evaluate(
        &self,
        window: &[f64],
        properties: EvaluationProperties,
        cell_size: f64,
    ) -> Result<f64> {
        let window = <Self::Window as StencilWindow>::from_slice(window).ok_or_else(|| {
            StencilError::window_length(Self::KIND.name(), Self::STENCIL_SIZE, window.len())
        })?;
        Ok(self.apply(&window, properties, cell_size))
    }
}

// =============================================================================
// Object-Safe Stencil (Runtime Polymorphism)
// =============================================================================

/// Object-safe view of a [`Stencil`].
///
/// Blanket-implemented for every stencil. Use it to store heterogeneous
/// schemes or to select a scheme from configuration at runtime.
pub trait DynStencil: Send + Sync {
    /// Which scheme this is; sizes and name follow from it.
    fn kind(&self) -> StencilKind;

    /// Reconstruct the face value from a slice, checking its length.
    fn evaluate_slice(
        &self,
        window: &[f64],
        properties: EvaluationProperties,
        cell_size: f64,
    ) -> Result<f64>;
}

impl<S: Stencil> DynStencil for S {
    fn kind(&self) -> StencilKind {
        S::KIND
    }

    fn evaluate_slice(
        &self,
        window: &[f64],
        properties: EvaluationProperties,
        cell_size: f64,
    ) -> Result<f64> {
        self.try_evaluate(window, properties, cell_size)
    }
}

/// Type alias for boxed stencil (runtime polymorphism).
pub type BoxedStencil = Box<dyn DynStencil>;
