//! Configuration-driven scheme selection.
//!
//! [`StencilKind`] names every built-in scheme. Matching on it dispatches to
//! the concrete stencil without virtual calls, so a solver can choose its
//! reconstruction from configuration and still call straight into the scheme.

use std::fmt;
use std::str::FromStr;

use log::debug;

use super::traits::{BoxedStencil, Stencil};
use super::{FirstOrder, Teno5, Weno3, Weno5, Weno5Hm, Weno5Z};
use crate::error::{Result, StencilError};
use crate::types::EvaluationProperties;

/// Built-in reconstruction schemes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StencilKind {
    /// First-order upwind
    FirstOrder,
    /// Third-order WENO (Jiang-Shu weights)
    Weno3,
    /// Fifth-order WENO (Jiang-Shu weights)
    Weno5,
    /// Fifth-order WENO-Z (Borges et al.)
    Weno5Z,
    /// Fifth-order mapped WENO (Henrick et al.)
    #[default]
    Weno5Hm,
    /// Fifth-order targeted ENO (Fu et al.)
    Teno5,
}

impl StencilKind {
    /// Every built-in scheme, lowest order first.
    pub const ALL: [StencilKind; 6] = [
        StencilKind::FirstOrder,
        StencilKind::Weno3,
        StencilKind::Weno5,
        StencilKind::Weno5Z,
        StencilKind::Weno5Hm,
        StencilKind::Teno5,
    ];

    /// Canonical lower-case name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            StencilKind::FirstOrder => "first-order",
            StencilKind::Weno3 => "weno3",
            StencilKind::Weno5 => "weno5",
            StencilKind::Weno5Z => "weno5-z",
            StencilKind::Weno5Hm => "weno5-hm",
            StencilKind::Teno5 => "teno5",
        }
    }

    /// Total number of cells the scheme reads.
    pub const fn stencil_size(self) -> usize {
        match self {
            StencilKind::FirstOrder => FirstOrder::STENCIL_SIZE,
            StencilKind::Weno3 => Weno3::STENCIL_SIZE,
            StencilKind::Weno5 => Weno5::STENCIL_SIZE,
            StencilKind::Weno5Z => Weno5Z::STENCIL_SIZE,
            StencilKind::Weno5Hm => Weno5Hm::STENCIL_SIZE,
            StencilKind::Teno5 => Teno5::STENCIL_SIZE,
        }
    }

    /// Number of cells downstream of the face.
    pub const fn downstream_size(self) -> usize {
        match self {
            StencilKind::FirstOrder => FirstOrder::DOWNSTREAM_SIZE,
            StencilKind::Weno3 => Weno3::DOWNSTREAM_SIZE,
            StencilKind::Weno5 => Weno5::DOWNSTREAM_SIZE,
            StencilKind::Weno5Z => Weno5Z::DOWNSTREAM_SIZE,
            StencilKind::Weno5Hm => Weno5Hm::DOWNSTREAM_SIZE,
            StencilKind::Teno5 => Teno5::DOWNSTREAM_SIZE,
        }
    }

    /// Formal order of accuracy on smooth data.
    pub const fn formal_order(self) -> usize {
        match self {
            StencilKind::FirstOrder => 1,
            StencilKind::Weno3 => 3,
            StencilKind::Weno5
            | StencilKind::Weno5Z
            | StencilKind::Weno5Hm
            | StencilKind::Teno5 => 5,
        }
    }

    /// Reconstruct a face value with this scheme.
    ///
    /// # Errors
    /// [`StencilError::WindowLength`] if `window.len() != self.stencil_size()`.
    #[inline]
    pub fn evaluate(
        self,
        window: &[f64],
        properties: EvaluationProperties,
        cell_size: f64,
    ) -> Result<f64> {
        match self {
            StencilKind::FirstOrder => FirstOrder.try_evaluate(window, properties, cell_size),
            StencilKind::Weno3 => Weno3.try_evaluate(window, properties, cell_size),
            StencilKind::Weno5 => Weno5.try_evaluate(window, properties, cell_size),
            StencilKind::Weno5Z => Weno5Z.try_evaluate(window, properties, cell_size),
            StencilKind::Weno5Hm => Weno5Hm.try_evaluate(window, properties, cell_size),
            StencilKind::Teno5 => Teno5.try_evaluate(window, properties, cell_size),
        }
    }
}

impl fmt::Display for StencilKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StencilKind {
    type Err = StencilError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "first-order" | "firstorder" | "upwind1" => Ok(StencilKind::FirstOrder),
            "weno3" => Ok(StencilKind::Weno3),
            "weno5" | "weno5-js" => Ok(StencilKind::Weno5),
            "weno5-z" | "weno5z" => Ok(StencilKind::Weno5Z),
            "weno5-hm" | "weno5hm" => Ok(StencilKind::Weno5Hm),
            "teno5" => Ok(StencilKind::Teno5),
            _ => Err(StencilError::UnknownScheme(s.to_string())),
        }
    }
}

/// Create a boxed stencil from a scheme kind.
///
/// Useful when stencils of different widths share one container.
pub fn create_stencil(kind: StencilKind) -> BoxedStencil {
    debug!(
        "creating {} stencil ({} cells, {} downstream)",
        kind,
        kind.stencil_size(),
        kind.downstream_size()
    );
    match kind {
        StencilKind::FirstOrder => Box::new(FirstOrder),
        StencilKind::Weno3 => Box::new(Weno3),
        StencilKind::Weno5 => Box::new(Weno5),
        StencilKind::Weno5Z => Box::new(Weno5Z),
        StencilKind::Weno5Hm => Box::new(Weno5Hm),
        StencilKind::Teno5 => Box::new(Teno5),
    }
}
