//! CPU-side texture types.
//!
//! Provides [`CpuTexture`] for holding raw pixel data, along with the
//! [`TextureFormat`] enum and [`TextureError`].

mod types;

pub use types::{CpuTexture, TextureError, TextureFormat};
