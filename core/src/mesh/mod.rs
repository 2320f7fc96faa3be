//! CPU-side mesh types and generators.
//!
//! This module provides GPU-agnostic mesh data structures:
//!
//! - [`VertexLayout`] - Maps vertex attributes to shader locations and offsets
//! - [`CpuMesh`] - CPU-side mesh data (vertex bytes, index bytes, layout)
//! - Generators for common shapes (cube, quad, triangle)
//!
//! These types are consumed by `softpipe-shading` for vertex decode.

mod data;
pub mod generators;
mod layout;

pub use data::{CpuMesh, IndexFormat, PrimitiveTopology};
pub use layout::{VertexAttribute, VertexAttributeFormat, VertexAttributeSemantic, VertexLayout};
