//! Dab generation entry point
//!
//! [`DabFactory`] turns a pointer position and a pressure-applied brush into
//! a placed [`Dab`]:
//! 1. Resolve the mask extent and the integer top-left placement
//! 2. Fetch the shape mask from the cache (rasterizing on a miss)
//! 3. Spread it by the sub-pixel remainder when placement AA applies
//! 4. Attenuate it by the paper texture when one is set
//!
//! One factory serves one drawing surface. Its cache and scratch buffer are
//! reused between calls, which is why the returned dab borrows the factory.

use dabkit_config::EngineConfig;
use tracing::{debug, trace};

use crate::brush::BrushParameters;
use crate::cache::MaskCache;
use crate::placement;
use crate::texture::{self, Texture};
use crate::types::Dab;
use crate::validation::{floor_to_int, mask_extent, placement_offset};

/// Produces dabs for one drawing surface
#[derive(Debug)]
pub struct DabFactory {
    config: EngineConfig,
    cache: MaskCache,
    /// Output of placement AA and texture modulation
    scratch: Vec<u8>,
    texture: Option<Texture>,
}

impl Default for DabFactory {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl DabFactory {
    pub fn new(config: EngineConfig) -> Self {
        let capacity = config.effective_cache_capacity();
        debug!(
            "DabFactory::new: antialias={}, cache_capacity={}",
            config.antialias, capacity
        );
        Self {
            config,
            cache: MaskCache::with_capacity(capacity),
            scratch: Vec::new(),
            texture: None,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Toggle placement anti-aliasing
    pub fn set_antialias(&mut self, antialias: bool) {
        self.config.antialias = antialias;
    }

    pub fn cache(&self) -> &MaskCache {
        &self.cache
    }

    /// Replace the active paper texture
    pub fn set_texture(&mut self, texture: Texture) {
        debug!(
            "DabFactory::set_texture: {}x{}",
            texture.width(),
            texture.height()
        );
        self.texture = Some(texture);
    }

    pub fn clear_texture(&mut self) {
        self.texture = None;
    }

    pub fn texture(&self) -> Option<&Texture> {
        self.texture.as_ref()
    }

    /// Whether a dab of this brush gets sub-pixel placement smoothing
    #[inline]
    pub fn uses_placement_aa(&self, params: &BrushParameters) -> bool {
        self.config.antialias && params.shape().supports_placement_aa()
    }

    /// Generate the dab for a pointer sample at `(x, y)`.
    ///
    /// `params` must already have had [`BrushParameters::apply_pressure`]
    /// run for this sample. The returned mask lives in the factory's
    /// buffers and must be consumed before the next call.
    pub fn get_dab(&mut self, x: f32, y: f32, params: &BrushParameters) -> Dab<'_> {
        let placement_aa = self.uses_placement_aa(params);
        let size = mask_extent(params.cur_size);
        let extent = if placement_aa { size + 1 } else { size };

        let nx = x - extent as f32 / 2.0 + 0.5;
        let ny = y - extent as f32 / 2.0 + 0.5;
        let px = floor_to_int(nx);
        let py = floor_to_int(ny);

        let amount = params.texture_amount();
        let paper = self.texture.as_ref().filter(|_| amount > 0.0);

        let shape_mask = self.cache.get(params);

        if placement_aa {
            let dx = placement_offset(nx);
            let dy = placement_offset(ny);
            placement::spread(shape_mask, size, dx, dy, &mut self.scratch);
        } else if paper.is_some() {
            // The cached mask is shared, so texture works on a copy
            self.scratch.clear();
            self.scratch.extend_from_slice(shape_mask);
        }

        if let Some(paper) = paper {
            texture::modulate(&mut self.scratch, extent, extent, (px, py), paper, amount);
        }

        let brush: &[u8] = if placement_aa || paper.is_some() {
            &self.scratch
        } else {
            shape_mask
        };

        trace!(
            "DabFactory::get_dab: ({:.2}, {:.2}) -> ({}, {}) {}x{}, aa={}, textured={}",
            x,
            y,
            px,
            py,
            extent,
            extent,
            placement_aa,
            paper.is_some()
        );

        Dab {
            x: px,
            y: py,
            width: extent,
            height: extent,
            brush,
            alpha: params.cur_alpha,
        }
    }
}
