//! Curve filling: redistribute interleaved sampler output into per-component curves.
//!
//! | Path        | Content          | Curve `c` receives                    |
//! |-------------|------------------|---------------------------------------|
//! | weights     | flat floats      | `flat[stride * i + c]`                |
//! | translation | VEC3, converted  | component `c` of the host vector      |
//! | rotation    | VEC4, converted  | component `c` of the host quaternion  |
//! | scale       | VEC3, raw        | component `c` of the glTF vector      |
//!
//! Cubic-spline samplers store `[in-tangent, value, out-tangent]` per key
//! (for weights, `stride` floats each); the explicit tangents are kept on the
//! keyframes.

use crate::cache::SamplerCacheEntry;
use crate::channel::{AnimationChannel, Interpolation, PathKind};
use crate::coords::CoordinateConversion;
use crate::curve::{Curve, CurveSet, Keyframe};
use crate::error::CurveError;

/// Append one key per curve per entry of `times`.
///
/// Everything is validated before the first key is appended, so on error
/// `curves` is left untouched. Keys are appended, never merged: filling the
/// same set twice doubles every curve.
pub fn fill_curve_set(
    channel: &AnimationChannel,
    entry: &SamplerCacheEntry,
    curves: &mut CurveSet,
    times: &[f32],
    coords: &CoordinateConversion,
) -> Result<(), CurveError> {
    let path = channel.path();
    let expected_stride = path.fixed_stride().unwrap_or(curves.stride());
    if curves.path() != path || curves.stride() != expected_stride {
        return Err(CurveError::StrideMismatch {
            path,
            expected: expected_stride,
            actual: curves.stride(),
        });
    }

    let cubic = entry.interpolation == Interpolation::CubicSpline;
    let per_sample = entry.interpolation.elements_per_sample();
    let content = &entry.output.content;

    match path {
        PathKind::Weights => {
            let flat = weights_output(entry, curves.stride(), times.len())?;
            fill_weights(curves.curves_mut(), times, flat, cubic);
        }
        PathKind::Translation => {
            let values = content.as_vec3s().ok_or(CurveError::ContentMismatch {
                path,
                expected: "vec3s",
                actual: content.kind(),
            })?;
            check_len(path, times.len().checked_mul(per_sample), values.len())?;
            fill_vectors(curves.curves_mut(), times, values, cubic, |v| coords.vec3(v));
        }
        PathKind::Rotation => {
            let values = content.as_vec4s().ok_or(CurveError::ContentMismatch {
                path,
                expected: "vec4s",
                actual: content.kind(),
            })?;
            check_len(path, times.len().checked_mul(per_sample), values.len())?;
            fill_vectors(curves.curves_mut(), times, values, cubic, |q| coords.quat(q));
        }
        PathKind::Scale => {
            let values = content.as_vec3s().ok_or(CurveError::ContentMismatch {
                path,
                expected: "vec3s",
                actual: content.kind(),
            })?;
            check_len(path, times.len().checked_mul(per_sample), values.len())?;
            fill_vectors(curves.curves_mut(), times, values, cubic, |v| v);
        }
    }
    Ok(())
}

/// Flat weights output of `entry`, checked to hold exactly
/// `stride * samples` elements (times 3 for cubic-spline samplers).
///
/// Runs before any curve is allocated, so an absurd morph target count is
/// reported as [`CurveError::Bounds`] instead of exhausting memory.
pub(crate) fn weights_output(
    entry: &SamplerCacheEntry,
    stride: usize,
    samples: usize,
) -> Result<&[f32], CurveError> {
    let path = PathKind::Weights;
    let content = &entry.output.content;
    let flat = content.as_floats().ok_or(CurveError::ContentMismatch {
        path,
        expected: "floats",
        actual: content.kind(),
    })?;
    let expected = samples
        .checked_mul(entry.interpolation.elements_per_sample())
        .and_then(|n| n.checked_mul(stride));
    check_len(path, expected, flat.len())?;
    Ok(flat)
}

/// `expected` is `None` when the element count overflows `usize`; that is
/// reported as `usize::MAX`.
fn check_len(path: PathKind, expected: Option<usize>, actual: usize) -> Result<(), CurveError> {
    match expected {
        Some(expected) if expected == actual => Ok(()),
        _ => Err(CurveError::Bounds {
            path,
            expected: expected.unwrap_or(usize::MAX),
            actual,
        }),
    }
}

fn fill_weights(curves: &mut [Curve], times: &[f32], flat: &[f32], cubic: bool) {
    let stride = curves.len();
    for curve in curves.iter_mut() {
        curve.reserve(times.len());
    }
    for (i, &time) in times.iter().enumerate() {
        if cubic {
            let base = 3 * stride * i;
            for (t, curve) in curves.iter_mut().enumerate() {
                curve.add_key(Keyframe::with_tangents(
                    time,
                    flat[base + stride + t],
                    flat[base + t],
                    flat[base + 2 * stride + t],
                ));
            }
        } else {
            for (t, curve) in curves.iter_mut().enumerate() {
                curve.add_key(Keyframe::new(time, flat[stride * i + t]));
            }
        }
    }
}

fn fill_vectors<const N: usize>(
    curves: &mut [Curve],
    times: &[f32],
    values: &[[f32; N]],
    cubic: bool,
    convert: impl Fn([f32; N]) -> [f32; N],
) {
    for curve in curves.iter_mut() {
        curve.reserve(times.len());
    }
    for (i, &time) in times.iter().enumerate() {
        if cubic {
            let a = convert(values[3 * i]);
            let v = convert(values[3 * i + 1]);
            let b = convert(values[3 * i + 2]);
            for (c, curve) in curves.iter_mut().enumerate() {
                curve.add_key(Keyframe::with_tangents(time, v[c], a[c], b[c]));
            }
        } else {
            let v = convert(values[i]);
            for (curve, &x) in curves.iter_mut().zip(v.iter()) {
                curve.add_key(Keyframe::new(time, x));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessor::SamplerOutput;
    use crate::ids::{NodeIndex, SamplerIndex};

    fn channel(path: PathKind) -> AnimationChannel {
        AnimationChannel::new(NodeIndex(0), path, SamplerIndex(0))
    }

    #[test]
    fn bounds_error_leaves_curves_untouched() {
        let entry = SamplerCacheEntry::new(
            vec![0.0, 1.0],
            SamplerOutput::floats(vec![0.0, 1.0, 2.0]),
            Interpolation::Linear,
        );
        let mut set = CurveSet::new(PathKind::Weights, 2);
        let err = fill_curve_set(
            &channel(PathKind::Weights),
            &entry,
            &mut set,
            &entry.input,
            &CoordinateConversion::identity(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            CurveError::Bounds {
                path: PathKind::Weights,
                expected: 4,
                actual: 3
            }
        );
        assert_eq!(set.key_count(), 0);
    }

    #[test]
    fn wrong_content_shape_is_reported() {
        let entry = SamplerCacheEntry::new(
            vec![0.0],
            SamplerOutput::vec4s(vec![[0.0, 0.0, 0.0, 1.0]]),
            Interpolation::Linear,
        );
        let mut set = CurveSet::new(PathKind::Scale, 3);
        let err = fill_curve_set(
            &channel(PathKind::Scale),
            &entry,
            &mut set,
            &entry.input,
            &CoordinateConversion::identity(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            CurveError::ContentMismatch {
                path: PathKind::Scale,
                expected: "vec3s",
                actual: "vec4s"
            }
        );
    }

    #[test]
    fn set_resolved_for_another_path_is_rejected() {
        let entry = SamplerCacheEntry::new(
            vec![0.0],
            SamplerOutput::vec3s(vec![[1.0, 2.0, 3.0]]),
            Interpolation::Linear,
        );
        let mut set = CurveSet::new(PathKind::Rotation, 4);
        let err = fill_curve_set(
            &channel(PathKind::Translation),
            &entry,
            &mut set,
            &entry.input,
            &CoordinateConversion::identity(),
        )
        .unwrap_err();
        assert_eq!(err.category(), "bounds");
    }

    #[test]
    fn cubic_spline_keeps_explicit_tangents() {
        // Per key: in-tangent, value, out-tangent.
        let entry = SamplerCacheEntry::new(
            vec![0.0, 1.0],
            SamplerOutput::vec3s(vec![
                [0.0, 0.0, 0.0],
                [1.0, 2.0, 3.0],
                [0.5, 0.5, 0.5],
                [-1.0, -1.0, -1.0],
                [4.0, 5.0, 6.0],
                [0.0, 0.0, 0.0],
            ]),
            Interpolation::CubicSpline,
        );
        let mut set = CurveSet::new(PathKind::Translation, 3);
        fill_curve_set(
            &channel(PathKind::Translation),
            &entry,
            &mut set,
            &entry.input,
            &CoordinateConversion::default(),
        )
        .unwrap();
        let x = &set[0];
        assert_eq!(x.len(), 2);
        assert_eq!(x[0], Keyframe::with_tangents(0.0, -1.0, -0.0, -0.5));
        assert_eq!(x[1], Keyframe::with_tangents(1.0, -4.0, 1.0, -0.0));
        assert_eq!(set[2][1].value, 6.0);
    }

    #[test]
    fn cubic_spline_weights_split_by_stride() {
        // Two targets, one key: [a0, a1, v0, v1, b0, b1].
        let entry = SamplerCacheEntry::new(
            vec![0.25],
            SamplerOutput::floats(vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6]),
            Interpolation::CubicSpline,
        );
        let mut set = CurveSet::new(PathKind::Weights, 2);
        fill_curve_set(
            &channel(PathKind::Weights),
            &entry,
            &mut set,
            &entry.input,
            &CoordinateConversion::identity(),
        )
        .unwrap();
        assert_eq!(set[0][0], Keyframe::with_tangents(0.25, 0.3, 0.1, 0.5));
        assert_eq!(set[1][0], Keyframe::with_tangents(0.25, 0.4, 0.2, 0.6));
    }
}
