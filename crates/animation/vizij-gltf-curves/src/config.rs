//! Conversion configuration.

use serde::{Deserialize, Serialize};

use crate::coords::CoordinateConversion;
use crate::error::CurveError;

/// What to do with a channel whose path is not translation/rotation/scale/weights.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnsupportedPathPolicy {
    /// Fail the whole document.
    Error,
    /// Drop the channel and log a warning.
    #[default]
    Skip,
}

/// What to do when converting a single channel fails.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelErrorPolicy {
    /// Stop and return the first channel error.
    #[default]
    Abort,
    /// Record the failure in `AnimationCurves::skipped` and keep going.
    Skip,
}

/// Configuration for curve conversion.
/// Every field has a default, so partial JSON is accepted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Host coordinate convention for translations and rotations.
    pub coordinates: CoordinateConversion,

    /// Run the tangent post-processor after filling each curve set.
    pub apply_tangents: bool,

    pub unsupported_paths: UnsupportedPathPolicy,

    pub channel_errors: ChannelErrorPolicy,
}

impl Config {
    pub fn from_json_str(s: &str) -> Result<Self, CurveError> {
        Ok(serde_json::from_str(s)?)
    }
}
