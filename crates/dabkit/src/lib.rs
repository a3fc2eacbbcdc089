//! dabkit - procedural brush masks and dab placement
//!
//! This crate turns a brush description and a pointer sample into a small
//! greyscale mask ready to be composited:
//! - [`brush`] - Persistent brush settings and pressure-derived state
//! - [`mask`] - Rasterizers for the five dab shapes
//! - [`cache`] - Memo for the most recently rasterized masks
//! - [`placement`] - Sub-pixel placement smoothing
//! - [`texture`] - Paper texture modulation
//! - [`factory`] - [`DabFactory`], the entry point tying it together
//! - [`types`] - Shape kinds, paint modes and the [`Dab`] descriptor

pub mod brush;
pub mod cache;
pub mod constants;
pub mod factory;
pub mod mask;
pub mod placement;
pub mod texture;
pub mod types;
pub mod validation;

pub use brush::*;
pub use cache::*;
pub use constants::*;
pub use factory::*;
pub use texture::Texture;
pub use types::*;
pub use validation::*;

pub use dabkit_config::EngineConfig;
