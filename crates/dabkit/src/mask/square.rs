//! Rectangular dab shapes
//!
//! The square's side is `size * sin(pi/4)`, the largest square that still
//! fits the mask at any rotation. Squeeze stretches its rotated x axis just
//! like the ellipse.

use std::f32::consts::FRAC_1_SQRT_2;

use glam::Vec2;

use super::MaskGeometry;
use crate::constants::{EDGE_BAND, MAX_ALPHA};

#[inline]
fn half_width(geometry: &MaskGeometry) -> f32 {
    geometry.size * FRAC_1_SQRT_2 / 2.0
}

/// Max-norm distance in the brush frame
#[inline]
fn box_norm(p: Vec2) -> f32 {
    p.abs().max_element()
}

/// Hard-edged rotated rectangle
pub fn square_pixel(geometry: &MaskGeometry, out: &mut Vec<u8>) {
    let half = half_width(geometry);
    geometry.fill(out, |i, j| {
        if box_norm(geometry.pixel_center(i, j)) <= half {
            MAX_ALPHA
        } else {
            0
        }
    });
}

/// Rotated rectangle with 4x4 supersampled coverage along its border
pub fn square_antialiased(geometry: &MaskGeometry, out: &mut Vec<u8>) {
    let half = half_width(geometry);
    let inner = (half - EDGE_BAND).max(0.0);
    let outer = half + EDGE_BAND;

    geometry.fill(out, |i, j| {
        let norm = box_norm(geometry.pixel_center(i, j));
        if norm <= inner {
            MAX_ALPHA
        } else if norm > outer {
            0
        } else {
            geometry.supersample(i, j, |p| box_norm(p) <= half)
        }
    });
}
