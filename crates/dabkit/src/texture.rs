//! Paper texture modulation
//!
//! A greyscale bitmap is tiled across the canvas. Where it is bright the dab
//! loses coverage, scaled by the brush's texture amount; where it is black
//! the dab is untouched.

use tracing::debug;

use crate::constants::MAX_ALPHA;
use crate::validation::ValidationError;

/// Tileable greyscale texture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Texture {
    /// Wrap row-major greyscale data.
    ///
    /// Both dimensions must be non-zero and `data` must hold exactly
    /// `width * height` bytes.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, ValidationError> {
        if width == 0 || height == 0 {
            return Err(ValidationError::TextureDimensions { width, height });
        }
        let expected = (width as usize) * (height as usize);
        if data.len() != expected {
            return Err(ValidationError::TextureLength {
                expected,
                actual: data.len(),
            });
        }
        debug!("Texture::new: {}x{}", width, height);
        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Sample at canvas coordinates, wrapping in both directions
    #[inline]
    pub fn sample(&self, x: i64, y: i64) -> u8 {
        let tx = x.rem_euclid(self.width as i64) as usize;
        let ty = y.rem_euclid(self.height as i64) as usize;
        self.data[ty * self.width as usize + tx]
    }
}

/// Attenuate a placed mask by the texture under it.
///
/// `origin` is the mask's top-left canvas position; `amount` is clamped to
/// [0, 1]. Each pixel is scaled by `255 - trunc(t * amount)` over 255.
pub fn modulate(
    mask: &mut [u8],
    width: u32,
    height: u32,
    origin: (i32, i32),
    texture: &Texture,
    amount: f32,
) {
    let amount = amount.clamp(0.0, 1.0);
    let width = width as usize;
    debug_assert_eq!(mask.len(), width * height as usize);

    for (y, row) in mask.chunks_exact_mut(width.max(1)).enumerate() {
        let ty = origin.1 as i64 + y as i64;
        for (x, value) in row.iter_mut().enumerate() {
            let t = texture.sample(origin.0 as i64 + x as i64, ty);
            let grain = (t as f32 * amount) as u32;
            let factor = MAX_ALPHA as u32 - grain;
            *value = (*value as u32 * factor / MAX_ALPHA as u32) as u8;
        }
    }
}
