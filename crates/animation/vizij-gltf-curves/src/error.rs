//! Error types for curve conversion.

use serde::Serialize;

use crate::accessor::AccessorType;
use crate::channel::PathKind;
use crate::ids::{NodeIndex, SamplerIndex};

/// Everything that can abort the conversion of a channel (or of a whole animation).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize)]
#[non_exhaustive]
pub enum CurveError {
    /// The declared output accessor type does not fit the channel path.
    #[error("animation sampler output for '{path}' points to invalidly-typed accessor {accessor_type}")]
    TypeMismatch {
        path: PathKind,
        accessor_type: AccessorType,
    },

    /// A channel path outside translation/rotation/scale/weights.
    #[error("unsupported animation channel path '{path}'")]
    UnsupportedPath { path: String },

    /// The decoded content has the wrong shape for the channel path.
    #[error("sampler output for '{path}' holds {actual}, expected {expected}")]
    ContentMismatch {
        path: PathKind,
        expected: &'static str,
        actual: &'static str,
    },

    /// The curve set was resolved for a different layout than the one being filled.
    #[error("curve set for '{path}' has {actual} curves, expected {expected}")]
    StrideMismatch {
        path: PathKind,
        expected: usize,
        actual: usize,
    },

    /// Output element count disagrees with stride x time samples.
    #[error("sampler output for '{path}' has {actual} elements, expected {expected}")]
    Bounds {
        path: PathKind,
        expected: usize,
        actual: usize,
    },

    #[error("{sampler} is not present in the sampler cache")]
    MissingSampler { sampler: SamplerIndex },

    #[error("{node} has no mesh primitive to read morph targets from")]
    MissingMorphTargets { node: NodeIndex },

    #[error("unknown interpolation mode '{mode}'")]
    UnknownInterpolation { mode: String },

    #[error("parse error: {reason}")]
    Parse { reason: String },
}

impl CurveError {
    /// Error category for logging.
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::TypeMismatch { .. } | Self::ContentMismatch { .. } => "type",
            Self::Bounds { .. } | Self::StrideMismatch { .. } => "bounds",
            Self::UnsupportedPath { .. } | Self::UnknownInterpolation { .. } => "unsupported",
            Self::MissingSampler { .. } | Self::MissingMorphTargets { .. } => "reference",
            Self::Parse { .. } => "parse",
        }
    }
}

impl From<serde_json::Error> for CurveError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            reason: err.to_string(),
        }
    }
}
