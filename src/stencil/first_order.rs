//! First-order upwind (Godunov) reconstruction.

use super::standard::StencilKind;
use super::traits::Stencil;
use crate::types::EvaluationProperties;

/// Piecewise-constant reconstruction: the face value is the upwind cell.
///
/// Two-cell window, nothing downstream. Monotone and robust, first-order
/// accurate.
#[derive(Debug, Default)]
pub struct FirstOrder;

impl FirstOrder {
    /// Create the stencil.
    pub const fn new() -> Self {
        Self
    }
}

impl Stencil for FirstOrder {
    type Window = [f64; 2];

    const DOWNSTREAM_SIZE: usize = 0;
    const KIND: StencilKind = StencilKind::FirstOrder;

    #[inline]
    fn apply(
        &self,
        window: &Self::Window,
        properties: EvaluationProperties,
        _cell_size: f64,
    ) -> f64 {
        window[properties.center(Self::DOWNSTREAM_SIZE)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picks_upwind_cell() {
        let stencil = FirstOrder::new();
        let window = [1.0, 5.0];
        assert_eq!(
            stencil.evaluate(&window, EvaluationProperties::UPWIND_LEFT, 0.1),
            1.0
        );
        assert_eq!(
            stencil.evaluate(&window, EvaluationProperties::UPWIND_RIGHT, 0.1),
            5.0
        );
    }
}
