//! Memo for rasterized masks
//!
//! Consecutive dabs of a stroke usually share their shape parameters, so the
//! last rasterized mask is kept and handed out again as long as
//! `(cur_size, cur_squeeze, cur_angle, shape)` match exactly. With the
//! default capacity of one, alternating between two brushes misses every
//! time; a larger capacity keeps a few masks in most-recently-used order.

use tracing::debug;

use crate::brush::BrushParameters;
use crate::mask::{MaskGeometry, rasterize_into};
use crate::types::BrushShape;

/// Shape parameters a mask was generated from, compared by value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaskKey {
    pub size: f32,
    pub squeeze: f32,
    pub angle: f32,
    pub shape: BrushShape,
}

impl MaskKey {
    pub fn from_params(params: &BrushParameters) -> Self {
        Self {
            size: params.cur_size,
            squeeze: params.cur_squeeze,
            angle: params.cur_angle,
            shape: params.shape(),
        }
    }

    fn geometry(&self) -> MaskGeometry {
        MaskGeometry::new(self.size, self.squeeze, self.angle)
    }
}

#[derive(Debug)]
struct CacheEntry {
    key: MaskKey,
    mask: Vec<u8>,
}

/// Bounded most-recently-used mask cache
#[derive(Debug)]
pub struct MaskCache {
    /// Most recently used first
    entries: Vec<CacheEntry>,
    capacity: usize,
    hits: u64,
    misses: u64,
}

impl Default for MaskCache {
    fn default() -> Self {
        Self::new()
    }
}

impl MaskCache {
    /// Single-slot cache
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Cache retaining up to `capacity` masks (at least one)
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
            hits: 0,
            misses: 0,
        }
    }

    /// Mask for the brush's current state.
    ///
    /// A hit returns the retained buffer itself, not a copy. A miss
    /// rasterizes into the least recently used slot once the cache is full.
    pub fn get(&mut self, params: &BrushParameters) -> &[u8] {
        let key = MaskKey::from_params(params);

        match self.entries.iter().position(|entry| entry.key == key) {
            Some(0) => self.hits += 1,
            Some(pos) => {
                self.hits += 1;
                let entry = self.entries.remove(pos);
                self.entries.insert(0, entry);
            }
            None => {
                self.misses += 1;
                debug!(
                    "MaskCache::get: miss, rasterizing {:?} size={:.2} squeeze={:.3} angle={:.3}",
                    key.shape, key.size, key.squeeze, key.angle
                );

                let mut mask = if self.entries.len() >= self.capacity {
                    self.entries.pop().map(|entry| entry.mask).unwrap_or_default()
                } else {
                    Vec::new()
                };
                rasterize_into(key.shape, &key.geometry(), &mut mask);
                self.entries.insert(0, CacheEntry { key, mask });
            }
        }

        &self.entries[0].mask
    }

    /// Whether a mask for these parameters is retained
    pub fn contains(&self, params: &BrushParameters) -> bool {
        let key = MaskKey::from_params(params);
        self.entries.iter().any(|entry| entry.key == key)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Drop every retained mask
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brush::BrushSettings;

    fn brush(size: f32, shape: BrushShape) -> BrushParameters {
        BrushParameters::new(BrushSettings {
            size,
            shape,
            ..Default::default()
        })
    }

    #[test]
    fn test_hit_returns_same_buffer() {
        let mut cache = MaskCache::new();
        let params = brush(8.0, BrushShape::RoundAntialiased);

        let first = cache.get(&params).as_ptr();
        let second = cache.get(&params).as_ptr();

        assert_eq!(first, second);
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.misses(), 1);
    }

    #[test]
    fn test_any_key_change_rasterizes() {
        let mut cache = MaskCache::new();
        let mut params = brush(8.0, BrushShape::RoundPixel);
        cache.get(&params);

        params.cur_size = 9.0;
        assert_eq!(cache.get(&params).len(), 81);
        params.cur_squeeze = 0.2;
        cache.get(&params);
        params.cur_angle = 0.5;
        cache.get(&params);
        params.settings.shape = BrushShape::SquarePixel;
        cache.get(&params);

        assert_eq!(cache.misses(), 5);
        assert_eq!(cache.hits(), 0);
    }

    #[test]
    fn test_single_slot_thrashes() {
        let mut cache = MaskCache::new();
        let a = brush(6.0, BrushShape::RoundPixel);
        let b = brush(7.0, BrushShape::RoundPixel);

        for _ in 0..3 {
            cache.get(&a);
            cache.get(&b);
        }

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.misses(), 6);
        assert!(cache.contains(&b));
        assert!(!cache.contains(&a));
    }

    #[test]
    fn test_bounded_cache_keeps_alternating_brushes() {
        let mut cache = MaskCache::with_capacity(2);
        let a = brush(6.0, BrushShape::RoundPixel);
        let b = brush(7.0, BrushShape::SquareAntialiased);

        let a_ptr = cache.get(&a).as_ptr();
        cache.get(&b);
        assert_eq!(cache.get(&a).as_ptr(), a_ptr);
        cache.get(&b);

        assert_eq!(cache.misses(), 2);
        assert_eq!(cache.hits(), 2);
    }

    #[test]
    fn test_evicts_least_recently_used() {
        let mut cache = MaskCache::with_capacity(2);
        let a = brush(4.0, BrushShape::RoundSoft);
        let b = brush(5.0, BrushShape::RoundSoft);
        let c = brush(6.0, BrushShape::RoundSoft);

        cache.get(&a);
        cache.get(&b);
        cache.get(&a);
        cache.get(&c);

        assert!(cache.contains(&a));
        assert!(cache.contains(&c));
        assert!(!cache.contains(&b));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_matches_direct_rasterization() {
        let mut cache = MaskCache::new();
        let params = brush(11.0, BrushShape::SquareAntialiased);
        let expected = crate::mask::rasterize(&params);
        assert_eq!(cache.get(&params), expected.as_slice());
    }

    #[test]
    fn test_clear() {
        let mut cache = MaskCache::with_capacity(0);
        assert_eq!(cache.capacity(), 1);
        cache.get(&brush(3.0, BrushShape::RoundPixel));
        cache.clear();
        assert!(cache.is_empty());
    }
}
