//! CPU-side sampler types.
//!
//! Provides [`CpuSampler`] for describing texture sampling parameters,
//! along with the [`FilterMode`] and [`AddressMode`] enums. Execution of
//! a sampler against a texture lives in `softpipe-shading`.

mod types;

pub use types::{AddressMode, CpuSampler, FilterMode};
