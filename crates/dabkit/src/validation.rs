use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Invalid texture dimensions: {width}x{height}")]
    TextureDimensions { width: u32, height: u32 },
    #[error("Texture data length mismatch: expected {expected} bytes, got {actual}")]
    TextureLength { expected: usize, actual: usize },
    #[error("Invalid brush size: {0}")]
    InvalidSize(f32),
    #[error("Pressure out of range: {0}")]
    InvalidPressure(f32),
}

/// Floor a placement coordinate to an integer pixel.
///
/// Truncates toward zero, then steps one further down for negative input.
/// Negative whole numbers therefore land one pixel lower than `floor`
/// would put them; [`placement_offset`] compensates with an offset of 1.
#[inline]
pub fn floor_to_int(value: f32) -> i32 {
    let truncated = value as i32;
    if value < 0.0 {
        truncated.saturating_sub(1)
    } else {
        truncated
    }
}

/// Sub-pixel remainder of a placement coordinate relative to [`floor_to_int`]
#[inline]
pub fn placement_offset(value: f32) -> f32 {
    (value - floor_to_int(value) as f32).abs()
}

/// Mask edge length for a brush diameter
#[inline]
pub fn mask_extent(size: f32) -> u32 {
    (size.ceil() as u32).max(1)
}

/// Check a pressure sample before it reaches the brush.
///
/// The dab path never calls this; input layers that cannot vouch for
/// their device can.
pub fn validate_pressure(pressure: f32) -> Result<f32, ValidationError> {
    if !(0.0..=1.0).contains(&pressure) {
        return Err(ValidationError::InvalidPressure(pressure));
    }
    Ok(pressure)
}
