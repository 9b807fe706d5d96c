//! Classic fifth-order WENO reconstruction (Jiang-Shu).

use super::standard::StencilKind;
use super::traits::Stencil;
use super::weno5_core::{
    DOWNSTREAM_SIZE, OPTIMAL_WEIGHTS, STENCIL_SIZE, blend, candidates, gather, normalize,
    smoothness_indicators,
};
use crate::types::EvaluationProperties;

/// WENO5-JS on a six-cell window.
///
/// Weights `a_k = d_k / (beta_k + eps)^2`, normalised.
#[derive(Debug, Default)]
pub struct Weno5;

impl Weno5 {
    /// Regularisation added to every smoothness indicator.
    pub const EPSILON: f64 = 1.0e-6;

    /// Create the stencil.
    pub const fn new() -> Self {
        Self
    }

    /// Normalised nonlinear weights of the three candidates.
    pub fn weights(
        &self,
        window: &[f64; STENCIL_SIZE],
        properties: EvaluationProperties,
    ) -> [f64; 3] {
        Self::nonlinear_weights(&gather(window, properties))
    }

    #[inline(always)]
    fn nonlinear_weights(v: &[f64; 5]) -> [f64; 3] {
        let beta = smoothness_indicators(v);
        let mut alpha = [0.0; 3];
        for k in 0..3 {
            let denom = beta[k] + Self::EPSILON;
            alpha[k] = OPTIMAL_WEIGHTS[k] / (denom * denom);
        }
        normalize(alpha)
    }
}

impl Stencil for Weno5 {
    type Window = [f64; STENCIL_SIZE];

    const DOWNSTREAM_SIZE: usize = DOWNSTREAM_SIZE;
    const KIND: StencilKind = StencilKind::Weno5;

    #[inline]
    fn apply(
        &self,
        window: &Self::Window,
        properties: EvaluationProperties,
        _cell_size: f64,
    ) -> f64 {
        let v = gather(window, properties);
        blend(&Self::nonlinear_weights(&v), &candidates(&v))
    }
}
