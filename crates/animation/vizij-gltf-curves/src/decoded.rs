//! Decoded animation documents.
//!
//! An upstream decoder hands over each animation as JSON with accessor data
//! already expanded to floats:
//!
//! ```json
//! {
//!   "name": "Wave",
//!   "nodes":    [{ "node": 0, "morphTargets": [2] }],
//!   "samplers": [{ "input": [0, 1], "interpolation": "LINEAR",
//!                  "output": { "type": "SCALAR", "data": [0, 1, 1, 0] } }],
//!   "channels": [{ "sampler": 0, "target": { "node": 0, "path": "weights" } }]
//! }
//! ```
//!
//! Sampler indices are positions in `samplers`. `interpolation` defaults to
//! `LINEAR`. `morphTargets` lists the morph target count of each primitive
//! of the node's mesh.

use log::warn;
use serde::Deserialize;

use crate::accessor::{AccessorContent, SamplerOutput};
use crate::cache::{SamplerCache, SamplerCacheEntry};
use crate::channel::{AnimationChannel, Interpolation, PathKind};
use crate::config::{Config, UnsupportedPathPolicy};
use crate::error::CurveError;
use crate::ids::{NodeIndex, SamplerIndex};
use crate::scene::MeshMorphTargets;

/// A parsed channel and its position in the document's `channels` array.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DecodedChannel {
    pub source_index: usize,
    pub channel: AnimationChannel,
}

/// One animation with its sampler cache and morph-target lookup built.
#[derive(Clone, Debug, Default)]
pub struct DecodedAnimation {
    pub name: Option<String>,
    /// Supported channels in document order. Dropped channels leave gaps in
    /// `source_index`.
    pub channels: Vec<DecodedChannel>,
    pub samplers: SamplerCache,
    pub morph_targets: MeshMorphTargets,
}

/// Parse a decoded animation document. Channels with a path outside the
/// supported set are dropped or rejected per `config.unsupported_paths`.
pub fn parse_decoded_animation_json(
    s: &str,
    config: &Config,
) -> Result<DecodedAnimation, CurveError> {
    let raw: RawAnimation = serde_json::from_str(s)?;

    let mut morph_targets = MeshMorphTargets::new();
    for node in raw.nodes {
        morph_targets.insert_node(node.node, node.morph_targets);
    }

    let mut samplers = SamplerCache::new();
    for (i, sampler) in raw.samplers.into_iter().enumerate() {
        let interpolation = match sampler.interpolation.as_deref() {
            Some(mode) => mode.parse::<Interpolation>()?,
            None => Interpolation::default(),
        };
        let mut output = sampler.output;
        if output.content.is_empty() {
            // `[]` deserializes as floats; keep the declared shape instead.
            output.content = AccessorContent::empty_for(output.accessor_type);
        }
        let index = u32::try_from(i).map_err(|_| CurveError::Parse {
            reason: format!("sampler index {i} does not fit in u32"),
        })?;
        samplers.insert(
            SamplerIndex(index),
            SamplerCacheEntry::new(sampler.input, output, interpolation),
        );
    }

    let mut channels = Vec::with_capacity(raw.channels.len());
    for (i, ch) in raw.channels.into_iter().enumerate() {
        match ch.target.path.parse::<PathKind>() {
            Ok(path) => channels.push(DecodedChannel {
                source_index: i,
                channel: AnimationChannel::new(ch.target.node, path, ch.sampler),
            }),
            Err(err) => match config.unsupported_paths {
                UnsupportedPathPolicy::Error => return Err(err),
                UnsupportedPathPolicy::Skip => {
                    warn!("channel {i} on {}: {err}; skipped", ch.target.node);
                }
            },
        }
    }

    Ok(DecodedAnimation {
        name: raw.name,
        channels,
        samplers,
        morph_targets,
    })
}

// ----- JSON schema (serde) -----

#[derive(Debug, Deserialize)]
struct RawAnimation {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    nodes: Vec<RawNode>,
    samplers: Vec<RawSampler>,
    channels: Vec<RawChannel>,
}

#[derive(Debug, Deserialize)]
struct RawNode {
    node: NodeIndex,
    #[serde(rename = "morphTargets", default)]
    morph_targets: Vec<usize>,
}

#[derive(Debug, Deserialize)]
struct RawSampler {
    input: Vec<f32>,
    #[serde(default)]
    interpolation: Option<String>,
    output: SamplerOutput,
}

#[derive(Debug, Deserialize)]
struct RawChannel {
    sampler: SamplerIndex,
    target: RawTarget,
}

#[derive(Debug, Deserialize)]
struct RawTarget {
    node: NodeIndex,
    path: String,
}
