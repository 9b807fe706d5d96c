//! Reconstruction configuration.

use log::debug;

use crate::error::Result;
use crate::stencil::{BoxedStencil, StencilKind, create_stencil};

/// Scheme selection for a solver's face reconstruction.
///
/// Queried once at setup: the halo width and window size tell the caller how
/// to size its ghost layers and extraction buffers.
///
/// # Example
///
/// ```
/// use weno_rs::reconstruction::ReconstructionConfig;
/// use weno_rs::stencil::StencilKind;
///
/// let config = ReconstructionConfig::from_scheme_name("teno5").unwrap();
/// assert_eq!(config.scheme, StencilKind::Teno5);
/// assert_eq!(config.ghost_cells(), 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReconstructionConfig {
    /// Reconstruction scheme
    pub scheme: StencilKind,
}

impl ReconstructionConfig {
    /// Create a config with the default scheme (WENO5-HM).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config from a scheme name such as `"weno5-hm"`.
    ///
    /// # Errors
    /// [`crate::StencilError::UnknownScheme`] if the name matches no scheme.
    pub fn from_scheme_name(name: &str) -> Result<Self> {
        let scheme = name.parse::<StencilKind>()?;
        debug!("reconstruction scheme '{}' resolved to {}", name, scheme);
        Ok(Self { scheme })
    }

    /// Set the reconstruction scheme.
    pub fn with_scheme(mut self, scheme: StencilKind) -> Self {
        debug!("reconstruction scheme set to {}", scheme);
        self.scheme = scheme;
        self
    }

    /// Number of cells each stencil window holds.
    pub fn stencil_size(&self) -> usize {
        self.scheme.stencil_size()
    }

    /// Ghost cells needed on each side of a line of interior cells.
    pub fn ghost_cells(&self) -> usize {
        self.scheme.downstream_size() + 1
    }

    /// Build a boxed stencil for the configured scheme.
    pub fn build(&self) -> BoxedStencil {
        create_stencil(self.scheme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StencilError;
    use crate::stencil::DynStencil;

    #[test]
    fn test_default_scheme() {
        let config = ReconstructionConfig::new();
        assert_eq!(config.scheme, StencilKind::Weno5Hm);
        assert_eq!(config.stencil_size(), 6);
        assert_eq!(config.ghost_cells(), 3);
    }

    #[test]
    fn test_ghost_cells_per_scheme() {
        let ghosts: Vec<usize> = StencilKind::ALL
            .iter()
            .map(|&kind| ReconstructionConfig::new().with_scheme(kind).ghost_cells())
            .collect();
        assert_eq!(ghosts, vec![1, 2, 3, 3, 3, 3]);
    }

    #[test]
    fn test_from_unknown_name() {
        assert_eq!(
            ReconstructionConfig::from_scheme_name("muscl"),
            Err(StencilError::UnknownScheme("muscl".to_string()))
        );
    }

    #[test]
    fn test_build() {
        let stencil = ReconstructionConfig::from_scheme_name("weno3")
            .unwrap()
            .build();
        assert_eq!(stencil.kind(), StencilKind::Weno3);
    }
}
