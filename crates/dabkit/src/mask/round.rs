//! Elliptical dab shapes

use super::MaskGeometry;
use crate::constants::{EDGE_BAND, MAX_ALPHA};

/// Hard-edged ellipse: a pixel is in iff its center is
pub fn round_pixel(geometry: &MaskGeometry, out: &mut Vec<u8>) {
    let radius_sq = geometry.radius() * geometry.radius();
    geometry.fill(out, |i, j| {
        if geometry.pixel_center(i, j).length_squared() <= radius_sq {
            MAX_ALPHA
        } else {
            0
        }
    });
}

/// Ellipse with 4x4 supersampled coverage in a ring around the edge
pub fn round_antialiased(geometry: &MaskGeometry, out: &mut Vec<u8>) {
    let radius = geometry.radius();
    let radius_sq = radius * radius;
    let inner = (radius - EDGE_BAND).max(0.0);
    let inner_sq = inner * inner;
    let outer_sq = (radius + EDGE_BAND) * (radius + EDGE_BAND);

    geometry.fill(out, |i, j| {
        let dist_sq = geometry.pixel_center(i, j).length_squared();
        if dist_sq <= inner_sq {
            MAX_ALPHA
        } else if dist_sq > outer_sq {
            0
        } else {
            geometry.supersample(i, j, |p| p.length_squared() <= radius_sq)
        }
    });
}

/// Airbrush: alpha falls linearly with squared distance, zero at the edge
pub fn round_soft(geometry: &MaskGeometry, out: &mut Vec<u8>) {
    let radius_sq = geometry.radius() * geometry.radius();
    geometry.fill(out, |i, j| {
        let dist_sq = geometry.pixel_center(i, j).length_squared();
        if dist_sq <= radius_sq {
            (MAX_ALPHA as f32 * (1.0 - dist_sq / radius_sq)) as u8
        } else {
            0
        }
    });
}
