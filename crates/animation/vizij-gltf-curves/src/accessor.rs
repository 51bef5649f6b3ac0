//! Decoded accessor content handed over by the upstream buffer decoder.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Declared element type of a glTF accessor.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccessorType {
    Scalar,
    Vec2,
    Vec3,
    Vec4,
    Mat2,
    Mat3,
    Mat4,
}

impl AccessorType {
    pub fn as_str(self) -> &'static str {
        match self {
            AccessorType::Scalar => "SCALAR",
            AccessorType::Vec2 => "VEC2",
            AccessorType::Vec3 => "VEC3",
            AccessorType::Vec4 => "VEC4",
            AccessorType::Mat2 => "MAT2",
            AccessorType::Mat3 => "MAT3",
            AccessorType::Mat4 => "MAT4",
        }
    }
}

impl fmt::Display for AccessorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output values already converted to floats by the accessor decoder.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AccessorContent {
    Floats(Vec<f32>),
    Vec3s(Vec<[f32; 3]>),
    Vec4s(Vec<[f32; 4]>),
}

impl AccessorContent {
    /// Number of elements (floats or vectors, depending on the variant).
    pub fn len(&self) -> usize {
        match self {
            AccessorContent::Floats(v) => v.len(),
            AccessorContent::Vec3s(v) => v.len(),
            AccessorContent::Vec4s(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Short name used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            AccessorContent::Floats(_) => "floats",
            AccessorContent::Vec3s(_) => "vec3s",
            AccessorContent::Vec4s(_) => "vec4s",
        }
    }

    /// Empty content of the shape matching a declared accessor type.
    pub fn empty_for(accessor_type: AccessorType) -> Self {
        match accessor_type {
            AccessorType::Vec3 => AccessorContent::Vec3s(Vec::new()),
            AccessorType::Vec4 => AccessorContent::Vec4s(Vec::new()),
            _ => AccessorContent::Floats(Vec::new()),
        }
    }

    pub fn as_floats(&self) -> Option<&[f32]> {
        match self {
            AccessorContent::Floats(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_vec3s(&self) -> Option<&[[f32; 3]]> {
        match self {
            AccessorContent::Vec3s(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_vec4s(&self) -> Option<&[[f32; 4]]> {
        match self {
            AccessorContent::Vec4s(v) => Some(v),
            _ => None,
        }
    }
}

/// A sampler's output accessor: its declared element type plus the decoded values.
///
/// The declared type and the content shape are independent signals; the
/// resolver trusts the former and the filler checks the latter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SamplerOutput {
    #[serde(rename = "type")]
    pub accessor_type: AccessorType,
    #[serde(rename = "data")]
    pub content: AccessorContent,
}

impl SamplerOutput {
    pub fn new(accessor_type: AccessorType, content: AccessorContent) -> Self {
        Self {
            accessor_type,
            content,
        }
    }

    pub fn floats(values: Vec<f32>) -> Self {
        Self::new(AccessorType::Scalar, AccessorContent::Floats(values))
    }

    pub fn vec3s(values: Vec<[f32; 3]>) -> Self {
        Self::new(AccessorType::Vec3, AccessorContent::Vec3s(values))
    }

    pub fn vec4s(values: Vec<[f32; 4]>) -> Self {
        Self::new(AccessorType::Vec4, AccessorContent::Vec4s(values))
    }
}
