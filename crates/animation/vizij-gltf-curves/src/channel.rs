//! Animation channel descriptors: target node, animated path and sampler.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::accessor::AccessorType;
use crate::error::CurveError;
use crate::ids::{NodeIndex, SamplerIndex};

/// The node property a channel animates.
///
/// This is a closed set: a glTF path outside of it is rejected when the
/// channel is parsed (see [`PathKind::from_str`]), so the resolver and filler
/// can match exhaustively.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathKind {
    Translation,
    Rotation,
    Scale,
    Weights,
}

impl PathKind {
    pub const ALL: [PathKind; 4] = [
        PathKind::Translation,
        PathKind::Rotation,
        PathKind::Scale,
        PathKind::Weights,
    ];

    /// glTF spelling of the path.
    pub fn as_str(self) -> &'static str {
        match self {
            PathKind::Translation => "translation",
            PathKind::Rotation => "rotation",
            PathKind::Scale => "scale",
            PathKind::Weights => "weights",
        }
    }

    /// Curve count for paths whose stride does not depend on the target mesh.
    /// `None` for [`PathKind::Weights`].
    pub fn fixed_stride(self) -> Option<usize> {
        match self {
            PathKind::Translation | PathKind::Scale => Some(3),
            PathKind::Rotation => Some(4),
            PathKind::Weights => None,
        }
    }

    /// Declared accessor element type this path requires. Weights channels
    /// take their layout from the mesh instead, so they have none.
    pub fn required_accessor_type(self) -> Option<AccessorType> {
        match self {
            PathKind::Translation | PathKind::Scale => Some(AccessorType::Vec3),
            PathKind::Rotation => Some(AccessorType::Vec4),
            PathKind::Weights => None,
        }
    }

    /// Property name for the curve at `index`, e.g. `translation.x` or `weights[3]`.
    pub fn component_label(self, index: usize) -> String {
        const AXES: [&str; 4] = ["x", "y", "z", "w"];
        match self {
            PathKind::Weights => format!("weights[{index}]"),
            _ => match AXES.get(index) {
                Some(axis) => format!("{}.{axis}", self.as_str()),
                None => format!("{}[{index}]", self.as_str()),
            },
        }
    }
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PathKind {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PathKind::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| CurveError::UnsupportedPath { path: s.to_string() })
    }
}

/// Sampler interpolation mode as declared in the asset.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Interpolation {
    #[default]
    Linear,
    Step,
    CubicSpline,
}

impl Interpolation {
    pub fn as_str(self) -> &'static str {
        match self {
            Interpolation::Linear => "LINEAR",
            Interpolation::Step => "STEP",
            Interpolation::CubicSpline => "CUBICSPLINE",
        }
    }

    /// Output elements stored per time sample: cubic-spline samplers carry an
    /// in-tangent, the value and an out-tangent for every key.
    #[inline]
    pub fn elements_per_sample(self) -> usize {
        match self {
            Interpolation::CubicSpline => 3,
            Interpolation::Linear | Interpolation::Step => 1,
        }
    }
}

impl fmt::Display for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interpolation {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LINEAR" => Ok(Interpolation::Linear),
            "STEP" => Ok(Interpolation::Step),
            "CUBICSPLINE" => Ok(Interpolation::CubicSpline),
            other => Err(CurveError::UnknownInterpolation {
                mode: other.to_string(),
            }),
        }
    }
}

/// What a channel animates.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ChannelTarget {
    pub node: NodeIndex,
    pub path: PathKind,
}

/// One animated property of one node, linked to a sampler. Immutable once parsed.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct AnimationChannel {
    pub target: ChannelTarget,
    pub sampler: SamplerIndex,
}

impl AnimationChannel {
    pub fn new(node: NodeIndex, path: PathKind, sampler: SamplerIndex) -> Self {
        Self {
            target: ChannelTarget { node, path },
            sampler,
        }
    }

    #[inline]
    pub fn path(&self) -> PathKind {
        self.target.path
    }

    #[inline]
    pub fn node(&self) -> NodeIndex {
        self.target.node
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_parses_gltf_spelling() {
        for p in PathKind::ALL {
            assert_eq!(p.as_str().parse::<PathKind>().unwrap(), p);
        }
    }

    #[test]
    fn unknown_path_is_rejected() {
        let err = "pointer".parse::<PathKind>().unwrap_err();
        assert_eq!(
            err,
            CurveError::UnsupportedPath {
                path: "pointer".into()
            }
        );
    }

    #[test]
    fn component_labels() {
        assert_eq!(PathKind::Translation.component_label(0), "translation.x");
        assert_eq!(PathKind::Rotation.component_label(3), "rotation.w");
        assert_eq!(PathKind::Scale.component_label(2), "scale.z");
        assert_eq!(PathKind::Weights.component_label(5), "weights[5]");
    }

    #[test]
    fn interpolation_round_trips_through_serde() {
        let s = serde_json::to_string(&Interpolation::CubicSpline).unwrap();
        assert_eq!(s, "\"CUBICSPLINE\"");
        assert_eq!("STEP".parse::<Interpolation>().unwrap(), Interpolation::Step);
        assert!("SMOOTH".parse::<Interpolation>().is_err());
    }
}
