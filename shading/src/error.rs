//! Shading error types.

use std::fmt;

/// Errors that can occur at the pipeline binding and draw boundary.
///
/// The shading stages themselves are pure and have no error paths; these
/// errors surface host-side misconfiguration (bad uniform names, mixed
/// transform conventions, unbound textures, malformed vertex layouts).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShadingError {
    /// A uniform or sampler name the pipeline does not declare.
    UnknownUniform(String),
    /// A matrix bind that mixes the combined-`transform` convention with
    /// the `model`/`view`/`projection` convention.
    MixedTransformConventions {
        /// The convention already in effect.
        active: &'static str,
        /// The uniform whose bind was rejected.
        requested: &'static str,
    },
    /// A texture sampler that must be bound before fragment shading.
    MissingTexture(&'static str),
    /// A vertex layout the pipeline cannot decode.
    InvalidLayout(String),
}

impl fmt::Display for ShadingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownUniform(name) => write!(f, "unknown uniform `{name}`"),
            Self::MixedTransformConventions { active, requested } => {
                write!(
                    f,
                    "cannot bind `{requested}`: the {active} transform convention is active"
                )
            }
            Self::MissingTexture(name) => write!(f, "texture `{name}` is not bound"),
            Self::InvalidLayout(msg) => write!(f, "invalid vertex layout: {msg}"),
        }
    }
}

impl std::error::Error for ShadingError {}
