//! Tangent post-processing selected by sampler interpolation mode.
//!
//! Runs on filled curves. Linear curves get finite-difference slopes, step
//! curves get `+inf` (hold until the next key). Cubic-spline curves already
//! carry explicit tangents from the sampler and are left alone.
//!
//! In both modes the first key's in-tangent and the last key's out-tangent are
//! not touched.

use crate::channel::Interpolation;
use crate::curve::{Curve, CurveSet};

/// Slope between two keys.
///
/// Two keys at the same time give `0.0` when their values are equal and an
/// infinite slope signed like the value delta otherwise, never NaN.
#[inline]
pub fn linear_tangent(value_start: f32, value_end: f32, time_start: f32, time_end: f32) -> f32 {
    let dv = value_end - value_start;
    let dt = time_end - time_start;
    if dt == 0.0 {
        if dv == 0.0 {
            0.0
        } else {
            f32::INFINITY.copysign(dv)
        }
    } else {
        dv / dt
    }
}

/// Set linear in/out tangents on every key of `curve`.
pub fn linearize_curve(curve: &mut Curve) {
    let keys = curve.keys_mut();
    let len = keys.len();
    for k in 0..len {
        if k >= 1 {
            let (prev, cur) = (keys[k - 1], keys[k]);
            keys[k].in_tangent = Some(linear_tangent(prev.value, cur.value, prev.time, cur.time));
        }
        if k + 1 < len {
            let (cur, next) = (keys[k], keys[k + 1]);
            keys[k].out_tangent = Some(linear_tangent(cur.value, next.value, cur.time, next.time));
        }
    }
}

/// Set every interior tangent of `curve` to `+inf`.
pub fn step_curve(curve: &mut Curve) {
    let keys = curve.keys_mut();
    let len = keys.len();
    for (k, key) in keys.iter_mut().enumerate() {
        if k >= 1 {
            key.in_tangent = Some(f32::INFINITY);
        }
        if k + 1 < len {
            key.out_tangent = Some(f32::INFINITY);
        }
    }
}

/// Apply the tangent rule for `interpolation` to every curve of `curves`.
pub fn apply_interpolation_tangents(curves: &mut CurveSet, interpolation: Interpolation) {
    match interpolation {
        Interpolation::Linear => curves.curves_mut().iter_mut().for_each(linearize_curve),
        Interpolation::Step => curves.curves_mut().iter_mut().for_each(step_curve),
        Interpolation::CubicSpline => {}
    }
}
