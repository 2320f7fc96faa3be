//! Vertex transform conventions.
//!
//! Two matrix conventions exist and are mutually exclusive per pipeline
//! configuration: a single combined `transform`, or the decomposed
//! `model`/`view`/`projection` triple. They are modeled as a tagged enum
//! rather than optional fields so a configuration is always exactly one
//! of them.

use softpipe_core::math::{Mat4, Vec3, Vec4};

/// The active transform convention of a vertex stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformMode {
    /// No matrices supplied; positions pass through unmodified.
    Identity,
    /// A single combined transform matrix.
    Single {
        /// The combined transform.
        transform: Mat4,
    },
    /// Decomposed model/view/projection matrices, applied in the order
    /// projection × view × model. Unbound members are identity.
    Decomposed {
        /// Object-to-world matrix.
        model: Mat4,
        /// World-to-view matrix.
        view: Mat4,
        /// View-to-clip matrix.
        projection: Mat4,
    },
}

impl TransformMode {
    /// Create the single-matrix convention.
    pub fn single(transform: Mat4) -> Self {
        Self::Single { transform }
    }

    /// Create the decomposed convention.
    pub fn decomposed(model: Mat4, view: Mat4, projection: Mat4) -> Self {
        Self::Decomposed {
            model,
            view,
            projection,
        }
    }

    /// Short name of the convention, used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::Single { .. } => "combined",
            Self::Decomposed { .. } => "decomposed",
        }
    }

    /// Transform an object-space position to clip space.
    ///
    /// The position is extended to homogeneous `(x, y, z, 1)` and
    /// multiplied by the available matrices. Values are not validated or
    /// clamped.
    pub fn clip_position(&self, position: Vec3) -> Vec4 {
        let p = Vec4::new(position.x, position.y, position.z, 1.0);
        match self {
            Self::Identity => p,
            Self::Single { transform } => transform * p,
            Self::Decomposed {
                model,
                view,
                projection,
            } => projection * (view * (model * p)),
        }
    }
}

impl Default for TransformMode {
    fn default() -> Self {
        Self::Identity
    }
}
