//! Shared fifth-order kernel for the six-cell WENO/TENO family.
//!
//! All fifth-order schemes in this crate blend the same three third-order
//! candidate polynomials and measure their smoothness with the same
//! Jiang-Shu indicators. They differ only in how the nonlinear weights are
//! formed from those indicators.
//!
//! # References
//! - Jiang & Shu (1996), "Efficient implementation of weighted ENO schemes"

use crate::types::EvaluationProperties;

/// Window width of the fifth-order family.
pub(crate) const STENCIL_SIZE: usize = 6;

/// Downstream cells of the left-biased five-point stencil.
pub(crate) const DOWNSTREAM_SIZE: usize = 2;

/// Linear weights recovering the fifth-order upwind reconstruction.
pub const OPTIMAL_WEIGHTS: [f64; 3] = [0.1, 0.6, 0.3];

// Smoothness indicator prefactors
const SMOOTHNESS_SECOND: f64 = 13.0 / 12.0;
const SMOOTHNESS_FIRST: f64 = 0.25;

// Candidate polynomial coefficients, one row per sub-stencil
const CANDIDATE: [[f64; 3]; 3] = [
    [2.0 / 6.0, -7.0 / 6.0, 11.0 / 6.0],
    [-1.0 / 6.0, 5.0 / 6.0, 2.0 / 6.0],
    [2.0 / 6.0, 5.0 / 6.0, -1.0 / 6.0],
];

/// Gather the five upwind-biased cells `v1..v5` for the given orientation.
///
/// `v3` is the upwind cell; `v4`, `v5` lie on the downstream side.
#[inline(always)]
pub(crate) fn gather(
    window: &[f64; STENCIL_SIZE],
    properties: EvaluationProperties,
) -> [f64; 5] {
    [
        window[properties.index(DOWNSTREAM_SIZE, -2)],
        window[properties.index(DOWNSTREAM_SIZE, -1)],
        window[properties.index(DOWNSTREAM_SIZE, 0)],
        window[properties.index(DOWNSTREAM_SIZE, 1)],
        window[properties.index(DOWNSTREAM_SIZE, 2)],
    ]
}

/// Third-order face values of the left, centred and right sub-stencils.
#[inline(always)]
pub(crate) fn candidates(v: &[f64; 5]) -> [f64; 3] {
    [
        CANDIDATE[0][0] * v[0] + CANDIDATE[0][1] * v[1] + CANDIDATE[0][2] * v[2],
        CANDIDATE[1][0] * v[1] + CANDIDATE[1][1] * v[2] + CANDIDATE[1][2] * v[3],
        CANDIDATE[2][0] * v[2] + CANDIDATE[2][1] * v[3] + CANDIDATE[2][2] * v[4],
    ]
}

/// Jiang-Shu smoothness indicators of the three sub-stencils.
#[inline(always)]
pub(crate) fn smoothness_indicators(v: &[f64; 5]) -> [f64; 3] {
    let s11 = v[0] - 2.0 * v[1] + v[2];
    let s12 = v[0] - 4.0 * v[1] + 3.0 * v[2];

    let s21 = v[1] - 2.0 * v[2] + v[3];
    let s22 = v[1] - v[3];

    let s31 = v[2] - 2.0 * v[3] + v[4];
    let s32 = 3.0 * v[2] - 4.0 * v[3] + v[4];

    [
        SMOOTHNESS_SECOND * s11 * s11 + SMOOTHNESS_FIRST * s12 * s12,
        SMOOTHNESS_SECOND * s21 * s21 + SMOOTHNESS_FIRST * s22 * s22,
        SMOOTHNESS_SECOND * s31 * s31 + SMOOTHNESS_FIRST * s32 * s32,
    ]
}

/// Scale raw weights so they sum to one.
#[inline(always)]
pub(crate) fn normalize(alpha: [f64; 3]) -> [f64; 3] {
    let inv_sum = 1.0 / (alpha[0] + alpha[1] + alpha[2]);
    [alpha[0] * inv_sum, alpha[1] * inv_sum, alpha[2] * inv_sum]
}

/// Convex combination of the candidate values.
#[inline(always)]
pub(crate) fn blend(weights: &[f64; 3], candidates: &[f64; 3]) -> f64 {
    weights[0] * candidates[0] + weights[1] * candidates[1] + weights[2] * candidates[2]
}

/// Linear fifth-order upwind reconstruction (all weights optimal).
///
/// This is the limit every fifth-order scheme approaches on smooth data. It
/// is exact for cell averages of polynomials up to degree four, and
/// oscillates at discontinuities.
pub fn optimal_reconstruction(
    window: &[f64; STENCIL_SIZE],
    properties: EvaluationProperties,
) -> f64 {
    let v = gather(window, properties);
    blend(&OPTIMAL_WEIGHTS, &candidates(&v))
}
