//! The pipeline binding surface and draw boundary.
//!
//! A [`Pipeline`] holds what a host binds between draw calls: the active
//! transform convention and the two texture samplers, addressed by their
//! uniform names. Binding is where misconfiguration surfaces; the stages
//! themselves stay pure. Bound resources are read-only for the duration
//! of a draw, so vertex and fragment invocations are independent and may
//! run concurrently.
//!
//! Uniform names are the lowercase `"transform"`, `"model"`, `"view"`,
//! `"projection"`, `"crate"`, and `"face"`. The two matrix conventions
//! are mutually exclusive; binding across them is an error.

use softpipe_core::math::{Mat4, Vec2, Vec3, Vec4};
use softpipe_core::mesh::{CpuMesh, VertexAttributeFormat, VertexAttributeSemantic, VertexLayout};
use softpipe_core::sampler::CpuSampler;
use softpipe_core::texture::CpuTexture;

use crate::error::ShadingError;
use crate::fragment;
use crate::sampler::Sampler2d;
use crate::transform::TransformMode;
use crate::varying::Varyings;
use crate::vertex::{shade_vertex, VertexInput, VertexOutput};

/// A texture bound to a sampler uniform.
#[derive(Debug, Clone)]
struct BoundTexture {
    texture: CpuTexture,
    sampler: CpuSampler,
}

/// Host-side pipeline state: transform convention + texture bindings.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    mode: TransformMode,
    crate_tex: Option<BoundTexture>,
    face_tex: Option<BoundTexture>,
}

impl Pipeline {
    /// Create a pipeline with the identity transform and no textures bound.
    pub fn new() -> Self {
        Self::default()
    }

    /// The active transform convention.
    pub fn transform_mode(&self) -> &TransformMode {
        &self.mode
    }

    /// Bind a matrix uniform.
    ///
    /// `"transform"` selects the combined convention; `"model"`, `"view"`,
    /// and `"projection"` select the decomposed convention, with unbound
    /// members defaulting to identity. Binding a name from the other
    /// convention once one is active is an error.
    pub fn bind_matrix(&mut self, name: &str, matrix: Mat4) -> Result<(), ShadingError> {
        match name {
            "transform" => {
                if let TransformMode::Decomposed { .. } = self.mode {
                    return Err(ShadingError::MixedTransformConventions {
                        active: "decomposed",
                        requested: "transform",
                    });
                }
                self.mode = TransformMode::single(matrix);
            }
            "model" | "view" | "projection" => {
                if let TransformMode::Single { .. } = self.mode {
                    return Err(ShadingError::MixedTransformConventions {
                        active: "combined",
                        requested: match name {
                            "model" => "model",
                            "view" => "view",
                            _ => "projection",
                        },
                    });
                }
                if let TransformMode::Identity = self.mode {
                    self.mode =
                        TransformMode::decomposed(Mat4::identity(), Mat4::identity(), Mat4::identity());
                }
                if let TransformMode::Decomposed {
                    model,
                    view,
                    projection,
                } = &mut self.mode
                {
                    match name {
                        "model" => *model = matrix,
                        "view" => *view = matrix,
                        _ => *projection = matrix,
                    }
                }
            }
            _ => return Err(ShadingError::UnknownUniform(name.to_string())),
        }
        log::debug!("bound matrix `{name}` ({} convention)", self.mode.name());
        Ok(())
    }

    /// Bind a texture sampler uniform (`"crate"` or `"face"`).
    pub fn bind_texture(
        &mut self,
        name: &str,
        texture: CpuTexture,
        sampler: CpuSampler,
    ) -> Result<(), ShadingError> {
        let slot = match name {
            "crate" => &mut self.crate_tex,
            "face" => &mut self.face_tex,
            _ => return Err(ShadingError::UnknownUniform(name.to_string())),
        };
        log::debug!(
            "bound texture `{name}` ({}x{})",
            texture.width(),
            texture.height()
        );
        *slot = Some(BoundTexture { texture, sampler });
        Ok(())
    }

    /// Run the vertex stage for one vertex under the bound transform.
    pub fn shade_vertex(&self, input: &VertexInput) -> VertexOutput {
        shade_vertex(&self.mode, input)
    }

    /// Run the fragment stage for one fragment over the bound textures.
    ///
    /// Both `"crate"` and `"face"` must be bound.
    pub fn shade_fragment(&self, varyings: &Varyings) -> Result<Vec4, ShadingError> {
        let crate_tex = self
            .crate_tex
            .as_ref()
            .ok_or(ShadingError::MissingTexture("crate"))?;
        let face_tex = self
            .face_tex
            .as_ref()
            .ok_or(ShadingError::MissingTexture("face"))?;
        Ok(fragment::shade_fragment(
            &Sampler2d::new(&crate_tex.texture, &crate_tex.sampler),
            &Sampler2d::new(&face_tex.texture, &face_tex.sampler),
            varyings,
        ))
    }

    /// Run the vertex stage over every vertex of a mesh, in order.
    pub fn shade_mesh(&self, mesh: &CpuMesh) -> Result<Vec<VertexOutput>, ShadingError> {
        let inputs = mesh_vertices(mesh)?;
        Ok(inputs.iter().map(|v| self.shade_vertex(v)).collect())
    }
}

/// Decode a mesh's interleaved vertex bytes into stage inputs.
///
/// The layout must carry a `Position` (Float3) and a `TexCoord` (Float2)
/// attribute; a `Color` attribute (Float3) is optional and selects the
/// color-carrying vertex configuration.
pub fn mesh_vertices(mesh: &CpuMesh) -> Result<Vec<VertexInput>, ShadingError> {
    let layout = mesh.layout();
    let position = require_attribute(
        layout,
        VertexAttributeSemantic::Position,
        VertexAttributeFormat::Float3,
    )?;
    let tex_coord = require_attribute(
        layout,
        VertexAttributeSemantic::TexCoord,
        VertexAttributeFormat::Float2,
    )?;
    let color = match layout.get_attribute(VertexAttributeSemantic::Color) {
        Some(attr) if attr.format != VertexAttributeFormat::Float3 => {
            return Err(ShadingError::InvalidLayout(format!(
                "color attribute has format {:?}, expected Float3",
                attr.format
            )));
        }
        other => other,
    };

    let stride = layout.stride() as usize;
    let data = mesh.vertex_data();
    let count = mesh.vertex_count() as usize;
    log::trace!("decoding {count} vertices, stride {stride}");

    let mut vertices = Vec::with_capacity(count);
    for i in 0..count {
        let base = i * stride;
        let mut input = VertexInput::new(
            read_vec3(data, base + position.offset as usize),
            read_vec2(data, base + tex_coord.offset as usize),
        );
        if let Some(attr) = color {
            input = input.with_color(read_vec3(data, base + attr.offset as usize));
        }
        vertices.push(input);
    }
    Ok(vertices)
}

fn require_attribute(
    layout: &VertexLayout,
    semantic: VertexAttributeSemantic,
    format: VertexAttributeFormat,
) -> Result<softpipe_core::mesh::VertexAttribute, ShadingError> {
    let attr = layout.get_attribute(semantic).ok_or_else(|| {
        ShadingError::InvalidLayout(format!("missing {semantic:?} attribute"))
    })?;
    if attr.format != format {
        return Err(ShadingError::InvalidLayout(format!(
            "{semantic:?} attribute has format {:?}, expected {format:?}",
            attr.format
        )));
    }
    if attr.offset + attr.format.size() > layout.stride() {
        return Err(ShadingError::InvalidLayout(format!(
            "{semantic:?} attribute exceeds the vertex stride"
        )));
    }
    Ok(*attr)
}

fn read_f32(data: &[u8], offset: usize) -> f32 {
    bytemuck::pod_read_unaligned(&data[offset..offset + 4])
}

fn read_vec2(data: &[u8], offset: usize) -> Vec2 {
    Vec2::new(read_f32(data, offset), read_f32(data, offset + 4))
}

fn read_vec3(data: &[u8], offset: usize) -> Vec3 {
    Vec3::new(
        read_f32(data, offset),
        read_f32(data, offset + 4),
        read_f32(data, offset + 8),
    )
}
