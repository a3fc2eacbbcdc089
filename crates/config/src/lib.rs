//! Shared configuration for dabkit
//!
//! This crate provides the single source of truth for engine-wide settings
//! that are not part of an individual brush: whether dabs are placed with
//! sub-pixel anti-aliasing and how many rasterized masks the engine retains.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "bevy")]
use bevy::prelude::Resource;

/// Placement anti-aliasing is on unless the host turns it off
pub const DEFAULT_ANTIALIAS: bool = true;

/// Default number of retained masks (1 = single-slot cache)
pub const DEFAULT_CACHE_CAPACITY: usize = 1;

/// Upper bound on retained masks
pub const MAX_CACHE_CAPACITY: usize = 8;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid cache capacity: {0}")]
    InvalidCacheCapacity(usize),
}

/// Engine configuration for dab generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "bevy", derive(Resource))]
#[serde(default)]
pub struct EngineConfig {
    /// Spread each dab over a 2x2 neighborhood to follow its sub-pixel position
    pub antialias: bool,
    /// Number of rasterized masks kept between dabs
    pub cache_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            antialias: DEFAULT_ANTIALIAS,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl EngineConfig {
    /// Create a config with the given anti-aliasing flag and default cache
    pub fn new(antialias: bool) -> Self {
        Self {
            antialias,
            ..Default::default()
        }
    }

    /// Builder-style cache capacity override
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// Parse and validate a config from JSON.
    ///
    /// Missing fields fall back to their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the config as pretty-printed JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache_capacity == 0 || self.cache_capacity > MAX_CACHE_CAPACITY {
            return Err(ConfigError::InvalidCacheCapacity(self.cache_capacity));
        }
        Ok(())
    }

    /// Cache capacity clamped into the supported range
    pub fn effective_cache_capacity(&self) -> usize {
        self.cache_capacity.clamp(1, MAX_CACHE_CAPACITY)
    }
}
