//! Vizij glTF curves (engine-agnostic)
//!
//! Turns already-decoded glTF animation samplers into one keyframe curve per
//! animated scalar component. The pipeline for a single channel is:
//!
//! 1. [`layout::resolve_curve_set`] decides how many curves the channel needs.
//! 2. [`fill::fill_curve_set`] appends one key per curve per time sample.
//! 3. [`tangents::apply_interpolation_tangents`] optionally derives tangents
//!    from the sampler's interpolation mode.
//!
//! [`convert::channel_to_curves`] runs all three; [`convert::animation_to_curves`]
//! drives every channel of a [`decoded::DecodedAnimation`].

pub mod accessor;
pub mod cache;
pub mod channel;
pub mod config;
pub mod convert;
pub mod coords;
pub mod curve;
pub mod decoded;
pub mod error;
pub mod fill;
pub mod ids;
pub mod layout;
pub mod scene;
pub mod tangents;

// Re-exports for consumers (importers, adapters)
pub use accessor::{AccessorContent, AccessorType, SamplerOutput};
pub use cache::{SamplerCache, SamplerCacheEntry};
pub use channel::{AnimationChannel, ChannelTarget, Interpolation, PathKind};
pub use config::{ChannelErrorPolicy, Config, UnsupportedPathPolicy};
pub use convert::{
    animation_to_curves, channel_to_curves, AnimationCurves, ConvertedChannel, SkippedChannel,
};
pub use coords::CoordinateConversion;
pub use curve::{Curve, CurveSet, Keyframe};
pub use decoded::{parse_decoded_animation_json, DecodedAnimation, DecodedChannel};
pub use error::CurveError;
pub use fill::fill_curve_set;
pub use ids::{NodeIndex, SamplerIndex};
pub use layout::{curve_stride, resolve_curve_set};
pub use scene::{MeshMorphTargets, MorphTargetSource};
pub use tangents::{apply_interpolation_tangents, linear_tangent, linearize_curve, step_curve};
