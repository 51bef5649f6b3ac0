//! Channel and animation conversion drivers.

use log::{debug, warn};
use serde::Serialize;

use crate::cache::SamplerCache;
use crate::channel::AnimationChannel;
use crate::config::{ChannelErrorPolicy, Config};
use crate::curve::CurveSet;
use crate::decoded::DecodedAnimation;
use crate::error::CurveError;
use crate::fill::fill_curve_set;
use crate::ids::NodeIndex;
use crate::layout::resolve_curve_set;
use crate::scene::MorphTargetSource;
use crate::tangents::apply_interpolation_tangents;

/// Convert one channel: resolve the layout, fill it from the sampler and,
/// when `config.apply_tangents` is set, derive tangents from the sampler's
/// interpolation mode.
///
/// A failure only concerns this channel; `cache` is never modified.
pub fn channel_to_curves(
    channel: &AnimationChannel,
    cache: &SamplerCache,
    morphs: &impl MorphTargetSource,
    config: &Config,
) -> Result<CurveSet, CurveError> {
    let entry = cache.get(channel.sampler)?;
    let mut curves = resolve_curve_set(channel, entry, morphs)?;
    fill_curve_set(channel, entry, &mut curves, &entry.input, &config.coordinates)?;
    if config.apply_tangents {
        apply_interpolation_tangents(&mut curves, entry.interpolation);
    }
    debug!(
        "{} {}: {} curves x {} keys ({})",
        channel.node(),
        channel.path(),
        curves.stride(),
        entry.sample_count(),
        entry.interpolation
    );
    Ok(curves)
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ConvertedChannel {
    /// Position of the channel in the source document's channel list.
    pub index: usize,
    pub channel: AnimationChannel,
    pub curves: CurveSet,
}

/// A channel dropped under [`ChannelErrorPolicy::Skip`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SkippedChannel {
    /// Position of the channel in the source document's channel list.
    pub index: usize,
    pub channel: AnimationChannel,
    pub error: CurveError,
}

/// Curves for every convertible channel of one animation, in channel order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AnimationCurves {
    pub name: Option<String>,
    pub channels: Vec<ConvertedChannel>,
    pub skipped: Vec<SkippedChannel>,
}

impl AnimationCurves {
    /// Time of the latest key over all curves, `0.0` when there are none.
    pub fn duration(&self) -> f32 {
        self.channels
            .iter()
            .flat_map(|c| c.curves.iter())
            .filter_map(|curve| curve.keys().last())
            .map(|k| k.time)
            .fold(0.0, f32::max)
    }

    /// Converted channels targeting `node`.
    pub fn for_node(&self, node: NodeIndex) -> impl Iterator<Item = &ConvertedChannel> + '_ {
        self.channels.iter().filter(move |c| c.channel.node() == node)
    }
}

/// Convert every channel of `animation`. Channel failures abort or are
/// recorded per `config.channel_errors`.
pub fn animation_to_curves(
    animation: &DecodedAnimation,
    config: &Config,
) -> Result<AnimationCurves, CurveError> {
    let mut out = AnimationCurves {
        name: animation.name.clone(),
        channels: Vec::with_capacity(animation.channels.len()),
        skipped: Vec::new(),
    };

    for decoded in &animation.channels {
        let (index, channel) = (decoded.source_index, &decoded.channel);
        match channel_to_curves(channel, &animation.samplers, &animation.morph_targets, config) {
            Ok(curves) => out.channels.push(ConvertedChannel {
                index,
                channel: *channel,
                curves,
            }),
            Err(error) => match config.channel_errors {
                ChannelErrorPolicy::Abort => return Err(error),
                ChannelErrorPolicy::Skip => {
                    warn!(
                        "skipping channel {index} ({} {}): {error} [{}]",
                        channel.node(),
                        channel.path(),
                        error.category()
                    );
                    out.skipped.push(SkippedChannel {
                        index,
                        channel: *channel,
                        error,
                    });
                }
            },
        }
    }

    Ok(out)
}
