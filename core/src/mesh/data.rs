//! CPU-side mesh data structures.
//!
//! This module provides:
//! - [`PrimitiveTopology`] - How vertices are assembled into primitives
//! - [`IndexFormat`] - Index data format (u16 or u32)
//! - [`CpuMesh`] - CPU-side mesh holding raw vertex and index data

use std::sync::Arc;

use super::layout::VertexLayout;

/// Primitive topology describing how vertices are assembled into primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PrimitiveTopology {
    /// Each vertex is a separate point.
    PointList,
    /// Every two vertices form a line.
    LineList,
    /// Every three vertices form a triangle.
    #[default]
    TriangleList,
    /// Vertices form a connected strip of triangles.
    TriangleStrip,
}

impl PrimitiveTopology {
    /// Get the number of vertices per primitive (for non-strip topologies).
    pub fn vertices_per_primitive(&self) -> Option<u32> {
        match self {
            Self::PointList => Some(1),
            Self::LineList => Some(2),
            Self::TriangleList => Some(3),
            Self::TriangleStrip => None, // Variable
        }
    }
}

/// Index format for indexed drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IndexFormat {
    /// 16-bit unsigned integers (max 65535 vertices).
    #[default]
    Uint16,
    /// 32-bit unsigned integers (max ~4 billion vertices).
    Uint32,
}

impl IndexFormat {
    /// Get the size in bytes of each index.
    pub fn size(&self) -> usize {
        match self {
            Self::Uint16 => 2,
            Self::Uint32 => 4,
        }
    }
}

/// A CPU-side mesh holding raw vertex and index data.
///
/// Vertex data is a single interleaved byte buffer described by the mesh's
/// [`VertexLayout`]. Meshes are produced by the generators or assembled by
/// hand, and consumed by the shading pipeline's vertex decode.
#[derive(Clone)]
pub struct CpuMesh {
    layout: Arc<VertexLayout>,
    topology: PrimitiveTopology,
    vertex_data: Vec<u8>,
    vertex_count: u32,
    index_data: Option<Vec<u8>>,
    index_format: Option<IndexFormat>,
    index_count: u32,
    label: Option<String>,
}

impl CpuMesh {
    /// Create a new empty CpuMesh with the given layout.
    pub fn new(layout: Arc<VertexLayout>) -> Self {
        Self {
            layout,
            topology: PrimitiveTopology::TriangleList,
            vertex_data: Vec::new(),
            vertex_count: 0,
            index_data: None,
            index_format: None,
            index_count: 0,
            label: None,
        }
    }

    /// Set raw vertex data.
    ///
    /// Vertex count is inferred from the data length and the layout stride.
    pub fn with_vertex_data(mut self, data: Vec<u8>) -> Self {
        let stride = self.layout.stride() as usize;
        if stride > 0 {
            self.vertex_count = (data.len() / stride) as u32;
        }
        self.vertex_data = data;
        self
    }

    /// Set index data as u16 indices.
    pub fn with_indices_u16(mut self, indices: &[u16]) -> Self {
        self.index_data = Some(bytemuck::cast_slice(indices).to_vec());
        self.index_format = Some(IndexFormat::Uint16);
        self.index_count = indices.len() as u32;
        self
    }

    /// Set index data as u32 indices.
    pub fn with_indices_u32(mut self, indices: &[u32]) -> Self {
        self.index_data = Some(bytemuck::cast_slice(indices).to_vec());
        self.index_format = Some(IndexFormat::Uint32);
        self.index_count = indices.len() as u32;
        self
    }

    /// Set the primitive topology.
    pub fn with_topology(mut self, topology: PrimitiveTopology) -> Self {
        self.topology = topology;
        self
    }

    /// Set a debug label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Get the vertex layout.
    pub fn layout(&self) -> &Arc<VertexLayout> {
        &self.layout
    }

    /// Get the primitive topology.
    pub fn topology(&self) -> PrimitiveTopology {
        self.topology
    }

    /// Get the raw vertex data.
    pub fn vertex_data(&self) -> &[u8] {
        &self.vertex_data
    }

    /// Get the number of vertices.
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Get the raw index data.
    pub fn index_data(&self) -> Option<&[u8]> {
        self.index_data.as_deref()
    }

    /// Get the index format.
    pub fn index_format(&self) -> Option<IndexFormat> {
        self.index_format
    }

    /// Get the number of indices.
    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    /// Check if this mesh uses indexed drawing.
    pub fn is_indexed(&self) -> bool {
        self.index_format.is_some() && self.index_count > 0
    }

    /// Get the debug label.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl std::fmt::Debug for CpuMesh {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuMesh")
            .field("label", &self.label)
            .field("topology", &self.topology)
            .field("vertex_count", &self.vertex_count)
            .field("index_count", &self.index_count)
            .field("stride", &self.layout.stride())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topology_vertices_per_primitive() {
        assert_eq!(PrimitiveTopology::PointList.vertices_per_primitive(), Some(1));
        assert_eq!(PrimitiveTopology::LineList.vertices_per_primitive(), Some(2));
        assert_eq!(
            PrimitiveTopology::TriangleList.vertices_per_primitive(),
            Some(3)
        );
        assert_eq!(PrimitiveTopology::TriangleStrip.vertices_per_primitive(), None);
    }

    #[test]
    fn index_format_sizes() {
        assert_eq!(IndexFormat::Uint16.size(), 2);
        assert_eq!(IndexFormat::Uint32.size(), 4);
    }

    #[test]
    fn vertex_count_inferred_from_stride() {
        let mesh = CpuMesh::new(VertexLayout::position_uv()).with_vertex_data(vec![0u8; 60]);
        // 60 bytes / 20-byte stride = 3 vertices
        assert_eq!(mesh.vertex_count(), 3);
        assert!(!mesh.is_indexed());
    }

    #[test]
    fn indexed_mesh() {
        let mesh = CpuMesh::new(VertexLayout::position_uv())
            .with_vertex_data(vec![0u8; 80])
            .with_indices_u16(&[0, 1, 2, 2, 3, 0])
            .with_label("quad");
        assert!(mesh.is_indexed());
        assert_eq!(mesh.index_count(), 6);
        assert_eq!(mesh.index_format(), Some(IndexFormat::Uint16));
        assert_eq!(mesh.index_data().unwrap().len(), 12);
        assert_eq!(mesh.label(), Some("quad"));
    }

    #[test]
    fn indices_u32_cast() {
        let mesh = CpuMesh::new(VertexLayout::position_uv())
            .with_vertex_data(vec![0u8; 20])
            .with_indices_u32(&[0, 1, 2]);
        assert_eq!(mesh.index_format(), Some(IndexFormat::Uint32));
        assert_eq!(mesh.index_data().unwrap().len(), 12);
    }
}
