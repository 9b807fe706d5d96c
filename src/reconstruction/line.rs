//! Face reconstruction along a one-dimensional line of cells.
//!
//! A line holds `n` interior cell averages padded with `g = D + 1` ghost
//! cells on each side, where `D` is the stencil's downstream size. The
//! `n + 1` faces bounding the interior cells are numbered left to right;
//! face `f` reads the window `cells[f..f + stencil_size]`.
//!
//! ```text
//!   ghost | interior cells            | ghost
//!   g0 g1 g2 | c0 c1 c2 ... c(n-1) | g3 g4 g5
//!          ^ face 0                 ^ face n
//! ```

use log::trace;

use crate::error::{Result, StencilError};
use crate::stencil::{Stencil, StencilKind};
use crate::types::{EvaluationProperties, StencilWindow};

/// Reconstructed states on both sides of every face of a line.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FaceStates {
    /// State just left of each face (UPWIND_LEFT)
    pub left: Vec<f64>,
    /// State just right of each face (UPWIND_RIGHT)
    pub right: Vec<f64>,
}

impl FaceStates {
    /// Allocate storage for `n_faces` faces.
    pub fn with_capacity(n_faces: usize) -> Self {
        Self {
            left: Vec::with_capacity(n_faces),
            right: Vec::with_capacity(n_faces),
        }
    }

    /// Number of faces.
    pub fn n_faces(&self) -> usize {
        self.left.len()
    }

    /// Jump `right - left` at each face.
    pub fn jumps(&self) -> Vec<f64> {
        self.left
            .iter()
            .zip(&self.right)
            .map(|(l, r)| r - l)
            .collect()
    }
}

fn check_line(kind: StencilKind, cells: &[f64]) -> Result<()> {
    let required = kind.stencil_size();
    if cells.len() < required {
        return Err(StencilError::LineTooShort {
            scheme: kind.name(),
            required,
            actual: cells.len(),
        });
    }
    Ok(())
}

/// Reconstruct both face states along a padded line with a concrete stencil.
///
/// Statically dispatched: the stencil type is known at compile time.
///
/// # Errors
/// [`StencilError::LineTooShort`] if the line is narrower than one window.
pub fn reconstruct_faces_with<S: Stencil>(
    stencil: &S,
    cells: &[f64],
    cell_size: f64,
) -> Result<FaceStates> {
    check_line(S::KIND, cells)?;
    let n_faces = cells.len() + 1 - S::STENCIL_SIZE;
    trace!("{}: reconstructing {} faces", S::KIND, n_faces);

    let mut faces = FaceStates::with_capacity(n_faces);
    for window in cells.windows(S::STENCIL_SIZE) {
        let (left, right) = face_pair(stencil, window, cell_size)?;
        faces.left.push(left);
        faces.right.push(right);
    }
    Ok(faces)
}

#[inline]
fn face_pair<S: Stencil>(stencil: &S, window: &[f64], cell_size: f64) -> Result<(f64, f64)> {
    let window = <S::Window as StencilWindow>::from_slice(window).ok_or_else(|| {
        StencilError::window_length(S::KIND.name(), S::STENCIL_SIZE, window.len())
    })?;
    Ok((
        stencil.evaluate(&window, EvaluationProperties::UPWIND_LEFT, cell_size),
        stencil.evaluate(&window, EvaluationProperties::UPWIND_RIGHT, cell_size),
    ))
}

macro_rules! dispatch_kind {
    ($kind:expr, $func:ident, $($arg:expr),*) => {
        match $kind {
            StencilKind::FirstOrder => $func(&crate::stencil::FirstOrder, $($arg),*),
            StencilKind::Weno3 => $func(&crate::stencil::Weno3, $($arg),*),
            StencilKind::Weno5 => $func(&crate::stencil::Weno5, $($arg),*),
            StencilKind::Weno5Z => $func(&crate::stencil::Weno5Z, $($arg),*),
            StencilKind::Weno5Hm => $func(&crate::stencil::Weno5Hm, $($arg),*),
            StencilKind::Teno5 => $func(&crate::stencil::Teno5, $($arg),*),
        }
    };
}

/// Reconstruct both face states along a padded line.
///
/// # Arguments
/// * `kind` - Reconstruction scheme
/// * `cells` - Interior cell averages with `kind.downstream_size() + 1` ghost cells per side
/// * `cell_size` - Grid spacing
///
/// # Returns
/// Left and right states for all `cells.len() + 1 - kind.stencil_size()` faces.
pub fn reconstruct_faces(kind: StencilKind, cells: &[f64], cell_size: f64) -> Result<FaceStates> {
    dispatch_kind!(kind, reconstruct_faces_with, cells, cell_size)
}

/// Parallel version of [`reconstruct_faces_with`] using rayon.
///
/// Produces exactly the same values as the serial sweep.
#[cfg(feature = "parallel")]
pub fn reconstruct_faces_parallel_with<S: Stencil>(
    stencil: &S,
    cells: &[f64],
    cell_size: f64,
) -> Result<FaceStates> {
    use rayon::prelude::*;

    check_line(S::KIND, cells)?;
    trace!(
        "{}: reconstructing {} faces in parallel",
        S::KIND,
        cells.len() + 1 - S::STENCIL_SIZE
    );

    let pairs: Vec<(f64, f64)> = cells
        .par_windows(S::STENCIL_SIZE)
        .map(|window| face_pair(stencil, window, cell_size))
        .collect::<Result<_>>()?;

    let (left, right) = pairs.into_iter().unzip();
    Ok(FaceStates { left, right })
}

/// Parallel version of [`reconstruct_faces`] using rayon.
#[cfg(feature = "parallel")]
pub fn reconstruct_faces_parallel(
    kind: StencilKind,
    cells: &[f64],
    cell_size: f64,
) -> Result<FaceStates> {
    dispatch_kind!(kind, reconstruct_faces_parallel_with, cells, cell_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stencil::Weno5Hm;

    const TOL: f64 = 1e-12;

    /// Averages over `n` interior unit cells plus `g` ghosts per side, taken from
    /// the antiderivative of the sampled function.
    fn padded_line(n: usize, g: usize, antiderivative: impl Fn(f64) -> f64) -> Vec<f64> {
        (0..n + 2 * g)
            .map(|j| {
                let a = j as f64 - g as f64;
                antiderivative(a + 1.0) - antiderivative(a)
            })
            .collect()
    }

    #[test]
    fn test_face_count() {
        for kind in StencilKind::ALL {
            let g = kind.downstream_size() + 1;
            let cells = padded_line(10, g, |x| x);
            let faces = reconstruct_faces(kind, &cells, 1.0).unwrap();
            assert_eq!(faces.n_faces(), 11);
            assert_eq!(faces.right.len(), 11);
        }
    }

    #[test]
    fn test_constant_line_has_no_jumps() {
        let cells = vec![3.0; 20];
        for kind in StencilKind::ALL {
            let faces = reconstruct_faces(kind, &cells, 0.1).unwrap();
            assert!(faces.jumps().iter().all(|j| j.abs() < TOL));
            assert!(faces.left.iter().all(|v| (v - 3.0).abs() < TOL));
        }
    }

    #[test]
    fn test_linear_line_is_exact() {
        // f(x) = x, faces at integer x = 0..=n
        let n = 8;
        for kind in [StencilKind::Weno3, StencilKind::Weno5Hm, StencilKind::Teno5] {
            let g = kind.downstream_size() + 1;
            let cells = padded_line(n, g, |x| 0.5 * x * x);
            let faces = reconstruct_faces(kind, &cells, 1.0).unwrap();
            for f in 0..=n {
                assert!((faces.left[f] - f as f64).abs() < TOL, "{kind} face {f}");
                assert!((faces.right[f] - f as f64).abs() < TOL, "{kind} face {f}");
            }
        }
    }

    #[test]
    fn test_matches_single_evaluation() {
        let cells: Vec<f64> = (0..12).map(|j| (0.7 * j as f64).cos()).collect();
        let weno = Weno5Hm::new();
        let faces = reconstruct_faces_with(&weno, &cells, 0.1).unwrap();

        let window: [f64; 6] = cells[4..10].try_into().unwrap();
        let left = weno.evaluate(&window, EvaluationProperties::UPWIND_LEFT, 0.1);
        let right = weno.evaluate(&window, EvaluationProperties::UPWIND_RIGHT, 0.1);
        assert_eq!(faces.left[4], left);
        assert_eq!(faces.right[4], right);
    }

    #[test]
    fn test_first_order_states_are_neighbours() {
        let cells = [1.0, 2.0, 4.0, 8.0];
        let faces = reconstruct_faces(StencilKind::FirstOrder, &cells, 1.0).unwrap();
        assert_eq!(faces.left, vec![1.0, 2.0, 4.0]);
        assert_eq!(faces.right, vec![2.0, 4.0, 8.0]);
    }

    #[test]
    fn test_line_too_short() {
        let err = reconstruct_faces(StencilKind::Weno5Hm, &[1.0; 5], 0.1).unwrap_err();
        assert_eq!(
            err,
            StencilError::LineTooShort {
                scheme: "weno5-hm",
                required: 6,
                actual: 5,
            }
        );
    }

    #[test]
    fn test_exactly_one_window() {
        let faces = reconstruct_faces(StencilKind::Weno5, &[2.0; 6], 0.1).unwrap();
        assert_eq!(faces.n_faces(), 1);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_serial() {
        let cells: Vec<f64> = (0..200)
            .map(|j| if j < 100 { (0.1 * j as f64).sin() } else { 2.0 })
            .collect();
        for kind in StencilKind::ALL {
            let serial = reconstruct_faces(kind, &cells, 0.1).unwrap();
            let parallel = reconstruct_faces_parallel(kind, &cells, 0.1).unwrap();
            assert_eq!(serial, parallel);
        }
    }
}
