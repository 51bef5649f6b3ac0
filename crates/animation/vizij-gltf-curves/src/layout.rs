//! Curve-layout resolution: how many curves a channel needs.

use crate::cache::SamplerCacheEntry;
use crate::channel::{AnimationChannel, PathKind};
use crate::curve::CurveSet;
use crate::error::CurveError;
use crate::fill::weights_output;
use crate::scene::MorphTargetSource;

/// Number of scalar curves needed for `channel`.
///
/// - Weights: the morph target count of the target node's first primitive.
///   The declared accessor type is not consulted.
/// - Translation/Scale: the declared output type must be VEC3 (stride 3).
/// - Rotation: the declared output type must be VEC4 (stride 4).
pub fn curve_stride(
    channel: &AnimationChannel,
    entry: &SamplerCacheEntry,
    morphs: &impl MorphTargetSource,
) -> Result<usize, CurveError> {
    let path = channel.path();
    match path {
        PathKind::Weights => {
            morphs
                .morph_target_count(channel.node())
                .ok_or(CurveError::MissingMorphTargets {
                    node: channel.node(),
                })
        }
        PathKind::Translation | PathKind::Rotation | PathKind::Scale => {
            let declared = entry.output.accessor_type;
            match (path.required_accessor_type(), path.fixed_stride()) {
                (Some(required), Some(stride)) if required == declared => Ok(stride),
                _ => Err(CurveError::TypeMismatch {
                    path,
                    accessor_type: declared,
                }),
            }
        }
    }
}

/// Allocate the empty curve set for `channel`. The stride is fixed from here on.
///
/// For weights the output length is checked against the morph target count
/// before allocating, since that count comes from mesh data and not from the
/// sampler.
pub fn resolve_curve_set(
    channel: &AnimationChannel,
    entry: &SamplerCacheEntry,
    morphs: &impl MorphTargetSource,
) -> Result<CurveSet, CurveError> {
    let stride = curve_stride(channel, entry, morphs)?;
    if channel.path() == PathKind::Weights {
        weights_output(entry, stride, entry.sample_count())?;
    }
    Ok(CurveSet::with_capacity(
        channel.path(),
        stride,
        entry.sample_count(),
    ))
}
