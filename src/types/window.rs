//! Fixed-width stencil windows.

/// A fixed-length, left-to-right window of cell averages.
///
/// Implemented for `[f64; N]` so that a stencil's window width is part of
/// its type and a wrong-length window does not compile.
pub trait StencilWindow: Copy + AsRef<[f64]> + Send + Sync + 'static {
    /// Number of cells in the window.
    const LEN: usize;

    /// Copy a slice into a window, or `None` if the length differs.
    fn from_slice(values: &[f64]) -> Option<Self>;
}

impl<const N: usize> StencilWindow for [f64; N] {
    const LEN: usize = N;

    #[inline]
    fn from_slice(values: &[f64]) -> Option<Self> {
        values.try_into().ok()
    }
}
