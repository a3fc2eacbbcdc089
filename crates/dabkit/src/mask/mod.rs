//! Procedural dab mask rasterization
//!
//! Every shape shares the same setup: the mask is `ceil(size)` pixels on a
//! side, each pixel center is offset from the mask center, rotated by the
//! negative brush angle and its rotated x axis stretched by the squeeze
//! factor. Shapes then differ only in how they classify that local point.
//!
//! The anti-aliased shapes only supersample a thin ring around the edge;
//! pixels clearly inside or outside are decided from their center alone.

mod round;
mod square;

use glam::Vec2;

use crate::brush::BrushParameters;
use crate::constants::{MAX_ALPHA, MAX_SQUEEZE, SUPERSAMPLE_GRID, SUPERSAMPLE_WEIGHT};
use crate::types::BrushShape;
use crate::validation::mask_extent;

pub use round::{round_antialiased, round_pixel, round_soft};
pub use square::{square_antialiased, square_pixel};

/// Resolved geometry for one mask
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaskGeometry {
    /// Brush diameter in pixels
    pub size: f32,
    /// Mask edge length, `ceil(size)`
    pub extent: u32,
    center: f32,
    /// Rotation by the negative brush angle
    rotation: Vec2,
    /// Per-axis scale applied after rotation
    scale: Vec2,
}

impl MaskGeometry {
    pub fn new(size: f32, squeeze: f32, angle: f32) -> Self {
        let extent = mask_extent(size);
        Self {
            size,
            extent,
            center: extent as f32 / 2.0,
            rotation: Vec2::from_angle(-angle),
            scale: Vec2::new(1.0 + squeeze * MAX_SQUEEZE, 1.0),
        }
    }

    /// Geometry for the brush's current (pressure-applied) values
    pub fn from_params(params: &BrushParameters) -> Self {
        Self::new(params.cur_size, params.cur_squeeze, params.cur_angle)
    }

    /// Brush radius in pixels
    #[inline]
    pub fn radius(&self) -> f32 {
        self.size / 2.0
    }

    /// Number of bytes in the mask
    #[inline]
    pub fn len(&self) -> usize {
        (self.extent as usize) * (self.extent as usize)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.extent == 0
    }

    /// Map a mask-space point into the brush's rotated, squeezed frame
    #[inline]
    pub fn local(&self, x: f32, y: f32) -> Vec2 {
        let offset = Vec2::new(x - self.center, y - self.center);
        self.rotation.rotate(offset) * self.scale
    }

    /// Local position of a pixel's center
    #[inline]
    pub fn pixel_center(&self, i: u32, j: u32) -> Vec2 {
        self.local(i as f32 + 0.5, j as f32 + 0.5)
    }

    /// Coverage of pixel (i, j) from a 4x4 sub-sample grid
    pub fn supersample(&self, i: u32, j: u32, inside: impl Fn(Vec2) -> bool) -> u8 {
        let step = 1.0 / SUPERSAMPLE_GRID as f32;
        let mut count = 0u32;
        for sy in 0..SUPERSAMPLE_GRID {
            let y = j as f32 + (sy as f32 + 0.5) * step;
            for sx in 0..SUPERSAMPLE_GRID {
                let x = i as f32 + (sx as f32 + 0.5) * step;
                if inside(self.local(x, y)) {
                    count += 1;
                }
            }
        }
        (count * SUPERSAMPLE_WEIGHT).min(MAX_ALPHA as u32) as u8
    }

    /// Resize `out` to the mask and fill each pixel from `classify(i, j)`
    pub(crate) fn fill(&self, out: &mut Vec<u8>, mut classify: impl FnMut(u32, u32) -> u8) {
        out.clear();
        out.resize(self.len(), 0);
        let width = self.extent as usize;
        for j in 0..self.extent {
            let row = (j as usize) * width;
            for i in 0..self.extent {
                out[row + i as usize] = classify(i, j);
            }
        }
    }
}

/// Rasterize `shape` into `out`, replacing its contents
pub fn rasterize_into(shape: BrushShape, geometry: &MaskGeometry, out: &mut Vec<u8>) {
    match shape {
        BrushShape::RoundPixel => round_pixel(geometry, out),
        BrushShape::RoundAntialiased => round_antialiased(geometry, out),
        BrushShape::RoundSoft => round_soft(geometry, out),
        BrushShape::SquarePixel => square_pixel(geometry, out),
        BrushShape::SquareAntialiased => square_antialiased(geometry, out),
    }
}

/// Rasterize the mask for a brush's current state
pub fn rasterize(params: &BrushParameters) -> Vec<u8> {
    let geometry = MaskGeometry::from_params(params);
    let mut out = Vec::with_capacity(geometry.len());
    rasterize_into(params.shape(), &geometry, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brush::BrushSettings;

    pub(super) fn render(shape: BrushShape, size: f32, squeeze: f32, angle: f32) -> Vec<u8> {
        let mut out = Vec::new();
        rasterize_into(shape, &MaskGeometry::new(size, squeeze, angle), &mut out);
        out
    }

    #[test]
    fn test_geometry_extent() {
        let g = MaskGeometry::new(9.3, 0.0, 0.0);
        assert_eq!(g.extent, 10);
        assert_eq!(g.len(), 100);
        assert_eq!(g.radius(), 4.65);
    }

    #[test]
    fn test_tiny_brush_is_one_pixel() {
        for shape in BrushShape::ALL {
            let mask = render(shape, 0.1, 0.0, 0.0);
            assert_eq!(mask.len(), 1, "{shape:?}");
        }
        assert_eq!(render(BrushShape::RoundPixel, 0.1, 0.0, 0.0), vec![255]);
    }

    #[test]
    fn test_squeeze_scales_rotated_x() {
        let g = MaskGeometry::new(10.0, 0.1, 0.0);
        let p = g.local(7.0, 5.0);
        assert!((p.x - 4.0).abs() < 1e-5);
        assert!(p.y.abs() < 1e-5);
    }

    #[test]
    fn test_rotation_uses_negative_angle() {
        let g = MaskGeometry::new(10.0, 0.0, std::f32::consts::FRAC_PI_2);
        // A point below the center lands on the +x axis of the brush frame
        let p = g.local(5.0, 7.0);
        assert!((p.x - 2.0).abs() < 1e-5);
        assert!(p.y.abs() < 1e-5);
    }

    #[test]
    fn test_supersample_counts() {
        let g = MaskGeometry::new(4.0, 0.0, 0.0);
        assert_eq!(g.supersample(0, 0, |_| true), 255);
        assert_eq!(g.supersample(0, 0, |_| false), 0);
        // Left half of the pixel: 8 of 16 samples
        assert_eq!(g.supersample(2, 0, |p| p.x < 0.5), 128);
    }

    #[test]
    fn test_rasterize_uses_current_values() {
        let mut params = BrushParameters::new(BrushSettings {
            size: 20.0,
            pressure_size: true,
            shape: BrushShape::SquarePixel,
            ..Default::default()
        });
        params.apply_pressure(0.25);
        assert_eq!(rasterize(&params).len(), 25);
    }

    #[test]
    fn test_every_shape_symmetric_when_unrotated() {
        for shape in BrushShape::ALL {
            let n = 9usize;
            let mask = render(shape, n as f32, 0.0, 0.0);
            for j in 0..n {
                for i in 0..n {
                    let v = mask[j * n + i];
                    assert_eq!(v, mask[j * n + (n - 1 - i)], "{shape:?} x-mirror");
                    assert_eq!(v, mask[(n - 1 - j) * n + i], "{shape:?} y-mirror");
                }
            }
        }
    }
}
