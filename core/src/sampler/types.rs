//! CPU-side sampler types and filter/address mode definitions.

/// Texture filtering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterMode {
    /// Nearest neighbor filtering.
    #[default]
    Nearest,
    /// Bilinear filtering.
    Linear,
}

/// Texture address mode (wrapping behavior).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AddressMode {
    /// Repeat the texture.
    #[default]
    Repeat,
    /// Clamp to edge.
    ClampToEdge,
    /// Mirrored repeat.
    MirrorRepeat,
}

/// CPU-side sampler configuration.
///
/// Describes how a texture is sampled: filtering and per-axis address
/// modes. This is a format-agnostic descriptor separate from any texture;
/// the shading crate executes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CpuSampler {
    /// Address mode for the U coordinate.
    pub address_mode_u: AddressMode,
    /// Address mode for the V coordinate.
    pub address_mode_v: AddressMode,
    /// Magnification filter.
    pub mag_filter: FilterMode,
    /// Minification filter.
    pub min_filter: FilterMode,
}

impl CpuSampler {
    /// Create a bilinear filtering sampler.
    pub fn linear() -> Self {
        Self {
            mag_filter: FilterMode::Linear,
            min_filter: FilterMode::Linear,
            ..Default::default()
        }
    }

    /// Create a nearest neighbor filtering sampler.
    pub fn nearest() -> Self {
        Self::default()
    }

    /// Set the address mode for both coordinates.
    #[must_use]
    pub fn with_address_mode(mut self, mode: AddressMode) -> Self {
        self.address_mode_u = mode;
        self.address_mode_v = mode;
        self
    }

    /// Set the magnification and minification filters.
    #[must_use]
    pub fn with_filter(mut self, filter: FilterMode) -> Self {
        self.mag_filter = filter;
        self.min_filter = filter;
        self
    }
}

impl Default for CpuSampler {
    fn default() -> Self {
        Self {
            address_mode_u: AddressMode::Repeat,
            address_mode_v: AddressMode::Repeat,
            mag_filter: FilterMode::Nearest,
            min_filter: FilterMode::Nearest,
        }
    }
}
