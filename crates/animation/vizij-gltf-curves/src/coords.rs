//! glTF to host coordinate-system conversion.
//!
//! glTF is right-handed with +Y up. Hosts differ, so the conversion is a
//! per-axis scale: translations are scaled component-wise, and quaternion
//! axes are scaled and additionally negated when the scale mirrors space
//! (odd number of negative axes). Scale vectors are never converted.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoordinateConversion {
    /// Per-axis multiplier; each component must be `1.0` or `-1.0`.
    pub axis_scale: [f32; 3],
}

impl Default for CoordinateConversion {
    /// Right-handed glTF to a left-handed host by mirroring X.
    fn default() -> Self {
        Self {
            axis_scale: [-1.0, 1.0, 1.0],
        }
    }
}

impl CoordinateConversion {
    pub const fn identity() -> Self {
        Self {
            axis_scale: [1.0, 1.0, 1.0],
        }
    }

    /// True when the axis scale changes handedness.
    pub fn flips_handedness(&self) -> bool {
        let s = self.axis_scale;
        s[0] * s[1] * s[2] < 0.0
    }

    /// Convert a position (or a position tangent).
    #[inline]
    pub fn vec3(&self, v: [f32; 3]) -> [f32; 3] {
        let s = self.axis_scale;
        [v[0] * s[0], v[1] * s[1], v[2] * s[2]]
    }

    /// Convert an `(x, y, z, w)` quaternion (or quaternion tangent).
    #[inline]
    pub fn quat(&self, q: [f32; 4]) -> [f32; 4] {
        let flip = if self.flips_handedness() { -1.0 } else { 1.0 };
        let [x, y, z] = self.vec3([q[0], q[1], q[2]]);
        [x * flip, y * flip, z * flip, q[3]]
    }
}
