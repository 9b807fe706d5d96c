//! Third-order WENO reconstruction on a four-cell window.

use super::standard::StencilKind;
use super::traits::Stencil;
use crate::types::EvaluationProperties;

const STENCIL_SIZE: usize = 4;
const DOWNSTREAM_SIZE: usize = 1;

/// WENO3-JS: two second-order candidates blended with Jiang-Shu weights.
#[derive(Debug, Default)]
pub struct Weno3;

impl Weno3 {
    /// Regularisation added to both smoothness indicators.
    pub const EPSILON: f64 = 1.0e-6;

    /// Optimal weights of the upwind and centred candidates.
    pub const OPTIMAL_WEIGHTS: [f64; 2] = [1.0 / 3.0, 2.0 / 3.0];

    /// Create the stencil.
    pub const fn new() -> Self {
        Self
    }

    /// Normalised nonlinear weights of the two candidates.
    pub fn weights(
        &self,
        window: &[f64; STENCIL_SIZE],
        properties: EvaluationProperties,
    ) -> [f64; 2] {
        Self::nonlinear_weights(&Self::gather(window, properties))
    }

    #[inline(always)]
    fn gather(window: &[f64; STENCIL_SIZE], properties: EvaluationProperties) -> [f64; 3] {
        [
            window[properties.index(DOWNSTREAM_SIZE, -1)],
            window[properties.index(DOWNSTREAM_SIZE, 0)],
            window[properties.index(DOWNSTREAM_SIZE, 1)],
        ]
    }

    #[inline(always)]
    fn nonlinear_weights(v: &[f64; 3]) -> [f64; 2] {
        let beta_0 = (v[1] - v[0]) * (v[1] - v[0]);
        let beta_1 = (v[2] - v[1]) * (v[2] - v[1]);

        let d0 = beta_0 + Self::EPSILON;
        let d1 = beta_1 + Self::EPSILON;
        let alpha_0 = Self::OPTIMAL_WEIGHTS[0] / (d0 * d0);
        let alpha_1 = Self::OPTIMAL_WEIGHTS[1] / (d1 * d1);

        let inv_sum = 1.0 / (alpha_0 + alpha_1);
        [alpha_0 * inv_sum, alpha_1 * inv_sum]
    }
}

impl Stencil for Weno3 {
    type Window = [f64; STENCIL_SIZE];

    const DOWNSTREAM_SIZE: usize = DOWNSTREAM_SIZE;
    const KIND: StencilKind = StencilKind::Weno3;

    #[inline]
    fn apply(
        &self,
        window: &Self::Window,
        properties: EvaluationProperties,
        _cell_size: f64,
    ) -> f64 {
        let v = Self::gather(window, properties);
        let omega = Self::nonlinear_weights(&v);

        let p0 = -0.5 * v[0] + 1.5 * v[1];
        let p1 = 0.5 * v[1] + 0.5 * v[2];

        omega[0] * p0 + omega[1] * p1
    }
}
