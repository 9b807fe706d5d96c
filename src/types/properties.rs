//! Orientation of a face reconstruction within a stencil window.
//!
//! Every window is laid out left-to-right in physical order with the face
//! between `window[D]` and `window[D + 1]`, where `D` is the stencil's
//! downstream size. The properties select which side of that face is being
//! reconstructed by naming the upwind cell and the direction in which the
//! stencil extends away from it.

use std::fmt;

/// Per-call reconstruction orientation.
///
/// Holds the offset of the upwind cell from `window[D]` (0 or 1) and the
/// direction (+1 or -1) that maps stencil-local positions to window indices.
/// Only the two orientations below exist; there is no public constructor.
///
/// # Example
///
/// ```
/// use weno_rs::types::{EvaluationProperties, FaceSide};
///
/// let left = EvaluationProperties::UPWIND_LEFT;
/// assert_eq!(left.mirrored(), EvaluationProperties::UPWIND_RIGHT);
/// assert_eq!(left.side(), FaceSide::Left);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EvaluationProperties {
    offset: usize,
    direction: isize,
}

impl EvaluationProperties {
    /// Left state at the face: upwind cell `window[D]`, stencil extends left.
    pub const UPWIND_LEFT: Self = Self {
        offset: 0,
        direction: 1,
    };

    /// Right state at the face: upwind cell `window[D + 1]`, stencil extends right.
    pub const UPWIND_RIGHT: Self = Self {
        offset: 1,
        direction: -1,
    };

    /// Offset of the upwind cell relative to `window[D]`.
    #[inline]
    pub const fn offset(self) -> usize {
        self.offset
    }

    /// +1 when reconstructing the left state, -1 for the right state.
    #[inline]
    pub const fn direction(self) -> isize {
        self.direction
    }

    /// Window index of the upwind cell for a stencil with `downstream_size` D.
    #[inline]
    pub const fn center(self, downstream_size: usize) -> usize {
        downstream_size + self.offset
    }

    /// Window index of the cell `k` positions from the upwind cell.
    ///
    /// Positive `k` points towards the face, negative `k` away from it.
    #[inline]
    pub fn index(self, downstream_size: usize, k: isize) -> usize {
        (self.center(downstream_size) as isize + k * self.direction) as usize
    }

    /// The opposite orientation.
    #[inline]
    pub const fn mirrored(self) -> Self {
        match self.direction {
            1 => Self::UPWIND_RIGHT,
            _ => Self::UPWIND_LEFT,
        }
    }

    /// Which side of the face this orientation reconstructs.
    #[inline]
    pub const fn side(self) -> FaceSide {
        match self.direction {
            1 => FaceSide::Left,
            _ => FaceSide::Right,
        }
    }
}

/// Side of a face whose state is being reconstructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FaceSide {
    /// State just left of the face (upwind for positive wave speed)
    Left,
    /// State just right of the face (upwind for negative wave speed)
    Right,
}

impl FaceSide {
    /// Both sides, left first.
    pub const BOTH: [FaceSide; 2] = [FaceSide::Left, FaceSide::Right];

    /// Evaluation properties for this side.
    #[inline]
    pub const fn properties(self) -> EvaluationProperties {
        match self {
            FaceSide::Left => EvaluationProperties::UPWIND_LEFT,
            FaceSide::Right => EvaluationProperties::UPWIND_RIGHT,
        }
    }
}

impl From<FaceSide> for EvaluationProperties {
    fn from(side: FaceSide) -> Self {
        side.properties()
    }
}

impl fmt::Display for FaceSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FaceSide::Left => write!(f, "left"),
            FaceSide::Right => write!(f, "right"),
        }
    }
}
