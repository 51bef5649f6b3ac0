//! Per-animation sampler cache.
//!
//! Built once before any channel is converted and only read afterwards, so a
//! shared `&SamplerCache` can be handed to several conversions at once.

use hashbrown::HashMap;

use crate::accessor::SamplerOutput;
use crate::channel::Interpolation;
use crate::error::CurveError;
use crate::ids::SamplerIndex;

/// Resolved arrays for one sampler.
#[derive(Clone, Debug, PartialEq)]
pub struct SamplerCacheEntry {
    /// Keyframe times in seconds, one per key, strictly increasing.
    pub input: Vec<f32>,
    pub output: SamplerOutput,
    pub interpolation: Interpolation,
}

impl SamplerCacheEntry {
    pub fn new(input: Vec<f32>, output: SamplerOutput, interpolation: Interpolation) -> Self {
        Self {
            input,
            output,
            interpolation,
        }
    }

    /// Number of time samples (keys per curve).
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.input.len()
    }
}

#[derive(Clone, Debug, Default)]
pub struct SamplerCache {
    entries: HashMap<SamplerIndex, SamplerCacheEntry>,
}

impl SamplerCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, returning the one it replaced.
    pub fn insert(
        &mut self,
        sampler: SamplerIndex,
        entry: SamplerCacheEntry,
    ) -> Option<SamplerCacheEntry> {
        self.entries.insert(sampler, entry)
    }

    pub fn get(&self, sampler: SamplerIndex) -> Result<&SamplerCacheEntry, CurveError> {
        self.entries
            .get(&sampler)
            .ok_or(CurveError::MissingSampler { sampler })
    }

    pub fn contains(&self, sampler: SamplerIndex) -> bool {
        self.entries.contains_key(&sampler)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SamplerIndex, &SamplerCacheEntry)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }
}

impl FromIterator<(SamplerIndex, SamplerCacheEntry)> for SamplerCache {
    fn from_iter<I: IntoIterator<Item = (SamplerIndex, SamplerCacheEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> SamplerCacheEntry {
        SamplerCacheEntry::new(
            vec![0.0, 1.0],
            SamplerOutput::vec3s(vec![[0.0; 3], [1.0; 3]]),
            Interpolation::Linear,
        )
    }

    #[test]
    fn lookup_missing_sampler_is_an_error() {
        let cache: SamplerCache = [(SamplerIndex(0), entry())].into_iter().collect();
        assert_eq!(cache.get(SamplerIndex(0)).unwrap().sample_count(), 2);
        assert_eq!(
            cache.get(SamplerIndex(1)).unwrap_err(),
            CurveError::MissingSampler {
                sampler: SamplerIndex(1)
            }
        );
    }

    #[test]
    fn insert_replaces_existing_entry() {
        let mut cache = SamplerCache::new();
        assert!(cache.insert(SamplerIndex(2), entry()).is_none());
        assert!(cache.insert(SamplerIndex(2), entry()).is_some());
        assert_eq!(cache.len(), 1);
        assert!(cache.contains(SamplerIndex(2)));
    }
}
