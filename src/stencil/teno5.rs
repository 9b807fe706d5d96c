//! Fifth-order targeted ENO reconstruction (TENO5).
//!
//! Candidates are either kept with their optimal weight or cut off entirely.
//! A strongly scale-separated smoothness measure `gamma_k` is normalised to
//! `chi_k`; sub-stencils with `chi_k` below the cut-off are discarded and the
//! optimal weights of the rest are renormalised. On smooth data no stencil
//! is cut and the linear fifth-order scheme is recovered exactly.
//!
//! # References
//! - Fu, Hu & Adams (2016), "A family of high-order targeted ENO schemes for
//!   compressible-fluid simulations"

use super::standard::StencilKind;
use super::traits::Stencil;
use super::weno5_core::{
    DOWNSTREAM_SIZE, OPTIMAL_WEIGHTS, STENCIL_SIZE, blend, candidates, gather, normalize,
    smoothness_indicators,
};
use crate::types::EvaluationProperties;

/// TENO5 on a six-cell window.
#[derive(Debug, Default)]
pub struct Teno5;

impl Teno5 {
    /// Regularisation of the `tau5 / beta_k` ratio.
    pub const EPSILON: f64 = 1.0e-40;

    /// Cut-off below which a sub-stencil is discarded.
    pub const CUT_OFF: f64 = 1.0e-5;

    const C: f64 = 1.0;

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
        let tau5 = (beta[0] - beta[2]).abs();

        let mut ratio = [0.0; 3];
        for k in 0..3 {
            ratio[k] = Self::C + tau5 / (beta[k] + Self::EPSILON);
        }

        // Scaled by the largest ratio so the sixth power cannot overflow on
        // large-amplitude steps. `chi` is invariant under the scaling.
        let ratio_max = ratio[0].max(ratio[1]).max(ratio[2]);
        let mut gamma = [0.0; 3];
        for k in 0..3 {
            // q = 6
            let g = ratio[k] / ratio_max;
            let g3 = g * g * g;
            gamma[k] = g3 * g3;
        }
        let chi = normalize(gamma);

        let mut delta = [0.0; 3];
        for k in 0..3 {
            if chi[k] >= Self::CUT_OFF {
                delta[k] = OPTIMAL_WEIGHTS[k];
            }
        }
        normalize(delta)
    }
}

impl Stencil for Teno5 {
    type Window = [f64; STENCIL_SIZE];

    const DOWNSTREAM_SIZE: usize = DOWNSTREAM_SIZE;
    const KIND: StencilKind = StencilKind::Teno5;

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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stencil::weno5_core::optimal_reconstruction;

    #[test]
    fn test_step_cuts_rough_stencil() {
        let omega = Teno5::new().weights(
            &[1.0, 1.0, 1.0, 1.0, 5.0, 5.0],
            EvaluationProperties::UPWIND_LEFT,
        );
        assert_eq!(omega[2], 0.0);
        // Remaining weights are the renormalised optimal ones: 1/7 and 6/7
        assert!((omega[0] - 1.0 / 7.0).abs() < 1e-14);
        assert!((omega[1] - 6.0 / 7.0).abs() < 1e-14);
    }

    #[test]
    fn test_large_amplitude_step_stays_finite() {
        let p = EvaluationProperties::UPWIND_LEFT;
        for jump in [1.0e3, 5.0e5, 1.0e6, 1.0e9] {
            let window = [1.0e5, 1.0e5, 1.0e5, 1.0e5, 1.0e5 + jump, 1.0e5 + jump];

            let omega = Teno5::new().weights(&window, p);
            assert_eq!(omega[2], 0.0);
            assert!((omega[0] - 1.0 / 7.0).abs() < 1e-14);
            assert!((omega[1] - 6.0 / 7.0).abs() < 1e-14);

            let value = Teno5::new().evaluate(&window, p, 0.1);
            assert!(value.is_finite(), "jump {jump}: {value}");
            assert!((value - 1.0e5).abs() < 1e-9, "jump {jump}: {value}");
        }
    }

    #[test]
    fn test_smooth_data_is_linear_scheme() {
        let h = 0.05_f64;
        let mut window = [0.0; 6];
        for (j, cell) in window.iter_mut().enumerate() {
            let a = 0.4 + (j as f64 - 3.0) * h;
            *cell = (a.cos() - (a + h).cos()) / h;
        }
        for p in [
            EvaluationProperties::UPWIND_LEFT,
            EvaluationProperties::UPWIND_RIGHT,
        ] {
            let teno = Teno5::new().evaluate(&window, p, h);
            assert!((teno - optimal_reconstruction(&window, p)).abs() < 1e-14);
        }
    }
}
