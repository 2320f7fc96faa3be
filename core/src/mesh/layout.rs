//! Vertex layout description.
//!
//! A [`VertexLayout`] maps vertex attributes (position, color, texture
//! coordinate) to shader locations and byte offsets within a single
//! interleaved vertex buffer.
//!
//! Two layouts are in use, matching the two vertex configurations:
//! [`VertexLayout::position_uv`] (location 0 position, location 1 texcoord)
//! and [`VertexLayout::position_color_uv`] (location 0 position, location 1
//! color, location 2 texcoord). A mesh carries exactly one of them.

use std::sync::Arc;

/// What a vertex attribute represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexAttributeSemantic {
    /// Object-space position (vec3).
    Position,
    /// Per-vertex color (vec3).
    Color,
    /// Texture coordinate (vec2).
    TexCoord,
}

/// Data format of a vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexAttributeFormat {
    /// Two f32 components.
    Float2,
    /// Three f32 components.
    Float3,
    /// Four f32 components.
    Float4,
}

impl VertexAttributeFormat {
    /// Size of the attribute in bytes.
    pub fn size(&self) -> u32 {
        match self {
            Self::Float2 => 8,
            Self::Float3 => 12,
            Self::Float4 => 16,
        }
    }

    /// Number of f32 components.
    pub fn component_count(&self) -> u32 {
        match self {
            Self::Float2 => 2,
            Self::Float3 => 3,
            Self::Float4 => 4,
        }
    }
}

/// A single vertex attribute: semantic, format, shader location, byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexAttribute {
    /// What this attribute represents.
    pub semantic: VertexAttributeSemantic,
    /// Data format.
    pub format: VertexAttributeFormat,
    /// Shader attribute location.
    pub location: u32,
    /// Byte offset within the vertex.
    pub offset: u32,
}

impl VertexAttribute {
    /// Create a new vertex attribute.
    pub fn new(
        semantic: VertexAttributeSemantic,
        format: VertexAttributeFormat,
        location: u32,
        offset: u32,
    ) -> Self {
        Self {
            semantic,
            format,
            location,
            offset,
        }
    }
}

/// Describes the attributes of a single interleaved vertex buffer.
///
/// Layouts are shared between meshes via `Arc`, so the prebuilt
/// constructors return `Arc<VertexLayout>` directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexLayout {
    attributes: Vec<VertexAttribute>,
    stride: u32,
}

impl VertexLayout {
    /// Create an empty layout with the given byte stride.
    pub fn new(stride: u32) -> Self {
        Self {
            attributes: Vec::new(),
            stride,
        }
    }

    /// Add an attribute.
    #[must_use]
    pub fn with_attribute(mut self, attribute: VertexAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Position (location 0) + texture coordinate (location 1).
    ///
    /// 20 bytes per vertex. The uv-only vertex configuration.
    pub fn position_uv() -> Arc<Self> {
        Arc::new(
            Self::new(20)
                .with_attribute(VertexAttribute::new(
                    VertexAttributeSemantic::Position,
                    VertexAttributeFormat::Float3,
                    0,
                    0,
                ))
                .with_attribute(VertexAttribute::new(
                    VertexAttributeSemantic::TexCoord,
                    VertexAttributeFormat::Float2,
                    1,
                    12,
                )),
        )
    }

    /// Position (location 0) + color (location 1) + texture coordinate
    /// (location 2).
    ///
    /// 32 bytes per vertex. The color-attribute vertex configuration.
    pub fn position_color_uv() -> Arc<Self> {
        Arc::new(
            Self::new(32)
                .with_attribute(VertexAttribute::new(
                    VertexAttributeSemantic::Position,
                    VertexAttributeFormat::Float3,
                    0,
                    0,
                ))
                .with_attribute(VertexAttribute::new(
                    VertexAttributeSemantic::Color,
                    VertexAttributeFormat::Float3,
                    1,
                    12,
                ))
                .with_attribute(VertexAttribute::new(
                    VertexAttributeSemantic::TexCoord,
                    VertexAttributeFormat::Float2,
                    2,
                    24,
                )),
        )
    }

    /// Byte stride of one vertex.
    pub fn stride(&self) -> u32 {
        self.stride
    }

    /// All attributes in declaration order.
    pub fn attributes(&self) -> &[VertexAttribute] {
        &self.attributes
    }

    /// Find an attribute by semantic.
    pub fn get_attribute(&self, semantic: VertexAttributeSemantic) -> Option<&VertexAttribute> {
        self.attributes.iter().find(|a| a.semantic == semantic)
    }

    /// Whether this layout carries a per-vertex color attribute.
    pub fn has_color(&self) -> bool {
        self.get_attribute(VertexAttributeSemantic::Color).is_some()
    }
}
