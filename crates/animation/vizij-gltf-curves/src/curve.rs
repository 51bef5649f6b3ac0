//! Engine-native keyframe curves produced by the converter.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::channel::PathKind;

/// A single (time, value) key with optional tangents.
///
/// Tangents are slopes in value units per second. `None` means "not set";
/// the consuming evaluator picks its own default.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub time: f32,
    pub value: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_tangent: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_tangent: Option<f32>,
}

impl Keyframe {
    pub fn new(time: f32, value: f32) -> Self {
        Self {
            time,
            value,
            in_tangent: None,
            out_tangent: None,
        }
    }

    pub fn with_tangents(time: f32, value: f32, in_tangent: f32, out_tangent: f32) -> Self {
        Self {
            time,
            value,
            in_tangent: Some(in_tangent),
            out_tangent: Some(out_tangent),
        }
    }
}

/// One animated scalar component. Keys are kept in insertion order, which the
/// filler guarantees is time order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Curve {
    keys: Vec<Keyframe>,
}

impl Curve {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: Vec::with_capacity(capacity),
        }
    }

    /// Append a key and return its index. No sorting and no deduplication.
    pub fn add_key(&mut self, key: Keyframe) -> usize {
        self.keys.push(key);
        self.keys.len() - 1
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> &[Keyframe] {
        &self.keys
    }

    pub fn keys_mut(&mut self) -> &mut [Keyframe] {
        &mut self.keys
    }

    pub fn reserve(&mut self, additional: usize) {
        self.keys.reserve(additional);
    }
}

impl Index<usize> for Curve {
    type Output = Keyframe;

    fn index(&self, index: usize) -> &Keyframe {
        &self.keys[index]
    }
}

impl IndexMut<usize> for Curve {
    fn index_mut(&mut self, index: usize) -> &mut Keyframe {
        &mut self.keys[index]
    }
}

/// The curves produced for one channel. The number of curves (the stride) is
/// fixed at construction; index `i` maps to [`PathKind::component_label`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurveSet {
    path: PathKind,
    curves: Box<[Curve]>,
}

impl CurveSet {
    /// `stride` empty curves for `path`.
    pub fn new(path: PathKind, stride: usize) -> Self {
        Self {
            path,
            curves: vec![Curve::new(); stride].into_boxed_slice(),
        }
    }

    /// `stride` empty curves with room for `keys_per_curve` keys each.
    pub fn with_capacity(path: PathKind, stride: usize, keys_per_curve: usize) -> Self {
        Self {
            path,
            curves: (0..stride)
                .map(|_| Curve::with_capacity(keys_per_curve))
                .collect(),
        }
    }

    #[inline]
    pub fn path(&self) -> PathKind {
        self.path
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.curves.len()
    }

    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    pub fn curves_mut(&mut self) -> &mut [Curve] {
        &mut self.curves
    }

    pub fn get(&self, index: usize) -> Option<&Curve> {
        self.curves.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Curve> {
        self.curves.iter()
    }

    /// Property label for the curve at `index`.
    pub fn component_label(&self, index: usize) -> String {
        self.path.component_label(index)
    }

    /// `(label, curve)` pairs in curve order.
    pub fn labeled(&self) -> impl Iterator<Item = (String, &Curve)> + '_ {
        self.curves
            .iter()
            .enumerate()
            .map(move |(i, c)| (self.path.component_label(i), c))
    }

    pub fn into_curves(self) -> Vec<Curve> {
        self.curves.into_vec()
    }

    /// Total keys over all curves.
    pub fn key_count(&self) -> usize {
        self.curves.iter().map(Curve::len).sum()
    }
}

impl Index<usize> for CurveSet {
    type Output = Curve;

    fn index(&self, index: usize) -> &Curve {
        &self.curves[index]
    }
}

impl<'a> IntoIterator for &'a CurveSet {
    type Item = &'a Curve;
    type IntoIter = std::slice::Iter<'a, Curve>;

    fn into_iter(self) -> Self::IntoIter {
        self.curves.iter()
    }
}
