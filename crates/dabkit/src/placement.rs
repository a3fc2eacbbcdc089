//! Sub-pixel placement smoothing
//!
//! A dab can only be stamped at whole pixels. To let it slide smoothly, its
//! mask is redistributed over a mask one pixel larger on each axis: every
//! source pixel deposits bilinear shares of its value into the 2x2 block it
//! overlaps once shifted by `(dx, dy)`.

use tracing::trace;

/// Bilinear weights for the four destination cells
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpreadWeights {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_left: f32,
    pub bottom_right: f32,
}

impl SpreadWeights {
    pub fn new(dx: f32, dy: f32) -> Self {
        Self {
            top_left: (1.0 - dx) * (1.0 - dy),
            top_right: dx * (1.0 - dy),
            bottom_left: (1.0 - dx) * dy,
            bottom_right: dx * dy,
        }
    }
}

/// Spread an `extent x extent` mask into `out` as `(extent + 1)^2` bytes.
///
/// Each weighted share is truncated before it is accumulated, so the
/// output can carry slightly less total energy than the input.
pub fn spread(mask: &[u8], extent: u32, dx: f32, dy: f32, out: &mut Vec<u8>) {
    let src_width = extent as usize;
    let dst_width = src_width + 1;
    debug_assert_eq!(mask.len(), src_width * src_width);

    out.clear();
    out.resize(dst_width * dst_width, 0);

    let w = SpreadWeights::new(dx, dy);
    trace!(
        "placement::spread: extent={}, offset=({:.3}, {:.3})",
        extent, dx, dy
    );

    for (j, row) in mask.chunks_exact(src_width.max(1)).enumerate() {
        let top = j * dst_width;
        let bottom = top + dst_width;
        for (i, &value) in row.iter().enumerate() {
            if value == 0 {
                continue;
            }
            let v = value as f32;
            deposit(&mut out[top + i], v * w.top_left);
            deposit(&mut out[top + i + 1], v * w.top_right);
            deposit(&mut out[bottom + i], v * w.bottom_left);
            deposit(&mut out[bottom + i + 1], v * w.bottom_right);
        }
    }
}

#[inline]
fn deposit(cell: &mut u8, share: f32) {
    *cell = cell.saturating_add(share as u8);
}
