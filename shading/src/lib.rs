//! # Softpipe Shading
//!
//! CPU execution of a fixed two-stage shader pipeline.
//!
//! ## Overview
//!
//! This crate provides:
//! - [`TransformMode`] - The vertex transform convention (combined matrix
//!   or decomposed model/view/projection, mutually exclusive)
//! - [`shade_vertex`](vertex::shade_vertex) - Per-vertex clip position and
//!   varying production
//! - [`Varyings`] - The vertex-to-fragment interface with the
//!   interpolation the external rasterizer performs
//! - [`shade_fragment`](fragment::shade_fragment) - Per-fragment
//!   two-texture blend with optional vertex color
//! - [`Pipeline`] - Host-facing uniform/sampler binding surface
//!
//! Both stages are pure functions over value types: invocations share no
//! mutable state and may run in any order or concurrently. Rasterization
//! (primitive assembly and varying interpolation) happens outside this
//! crate; [`Varyings::lerp`] and [`Varyings::barycentric`] model its
//! interpolation for hosts and tests.
//!
//! ## Example
//!
//! ```
//! use softpipe_core::math::{Mat4, Vec2};
//! use softpipe_core::sampler::CpuSampler;
//! use softpipe_core::texture::CpuTexture;
//! use softpipe_shading::{Pipeline, Varyings};
//!
//! let mut pipeline = Pipeline::new();
//! pipeline.bind_matrix("transform", Mat4::identity())?;
//! pipeline.bind_texture("crate", CpuTexture::solid([1.0, 0.0, 0.0, 1.0]), CpuSampler::nearest())?;
//! pipeline.bind_texture("face", CpuTexture::solid([0.0, 1.0, 0.0, 1.0]), CpuSampler::nearest())?;
//!
//! let color = pipeline.shade_fragment(&Varyings::new(Vec2::new(0.5, 0.5)))?;
//! assert!((color.x - 0.8).abs() < 1e-6);
//! # Ok::<(), softpipe_shading::ShadingError>(())
//! ```

pub mod error;
pub mod fragment;
pub mod pipeline;
pub mod sampler;
pub mod transform;
pub mod varying;
pub mod vertex;

// Re-export main types for convenience
pub use error::ShadingError;
pub use fragment::MIX_FACTOR;
pub use pipeline::{mesh_vertices, Pipeline};
pub use sampler::Sampler2d;
pub use transform::TransformMode;
pub use varying::Varyings;
pub use vertex::{VertexInput, VertexOutput};

/// Shading library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
