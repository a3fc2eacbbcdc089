use serde::{Deserialize, Serialize};

/// Dab shape kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[repr(u8)]
pub enum BrushShape {
    /// Hard-edged ellipse, binary coverage
    RoundPixel = 0,
    /// Ellipse with supersampled edges
    #[default]
    RoundAntialiased = 1,
    /// Airbrush: linear radial falloff from the center
    RoundSoft = 2,
    /// Hard-edged rotated rectangle
    SquarePixel = 3,
    /// Rotated rectangle with supersampled edges
    SquareAntialiased = 4,
}

impl BrushShape {
    pub const ALL: [BrushShape; 5] = [
        BrushShape::RoundPixel,
        BrushShape::RoundAntialiased,
        BrushShape::RoundSoft,
        BrushShape::SquarePixel,
        BrushShape::SquareAntialiased,
    ];

    /// Whether sub-pixel placement smoothing applies.
    ///
    /// Round pixel brushes keep their hard edge at every position.
    #[inline]
    pub fn supports_placement_aa(self) -> bool {
        !matches!(self, BrushShape::RoundPixel)
    }
}

/// Paint modes as far as dab generation cares about them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[repr(u8)]
pub enum PaintMode {
    #[default]
    Normal = 0,
    Erase = 1,
    Smudge = 2,
    OilBlend = 3,
}

impl PaintMode {
    /// Smudge and oil blending sample the layer at a fixed footprint,
    /// so pressure must not change the dab size.
    #[inline]
    pub fn allows_variable_size(self) -> bool {
        !matches!(self, PaintMode::Smudge | PaintMode::OilBlend)
    }
}

/// A placed dab, ready for the compositor
///
/// `brush` borrows the factory's retained buffer, so a dab has to be
/// consumed (painted or copied with [`Dab::to_owned_dab`]) before the
/// next call to [`crate::DabFactory::get_dab`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dab<'a> {
    /// Top-left placement in surface pixels
    pub x: i32,
    pub y: i32,
    /// Mask dimensions
    pub width: u32,
    pub height: u32,
    /// Row-major coverage, `width * height` bytes
    pub brush: &'a [u8],
    /// Uniform alpha on top of the mask, 0..255
    pub alpha: u8,
}

impl Dab<'_> {
    /// Bounding box as (x, y, width, height)
    pub fn bounds(&self) -> (i32, i32, u32, u32) {
        (self.x, self.y, self.width, self.height)
    }

    /// Coverage at local mask coordinates, None if out of range
    #[inline]
    pub fn coverage_at(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = (y as usize) * (self.width as usize) + (x as usize);
        self.brush.get(index).copied()
    }

    /// Copy the mask out of the factory's buffer
    pub fn to_owned_dab(&self) -> OwnedDab {
        OwnedDab {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            brush: self.brush.to_vec(),
            alpha: self.alpha,
        }
    }
}

/// A dab that owns its mask
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedDab {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub brush: Vec<u8>,
    pub alpha: u8,
}

impl OwnedDab {
    /// Borrow as a [`Dab`]
    pub fn as_dab(&self) -> Dab<'_> {
        Dab {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            brush: &self.brush,
            alpha: self.alpha,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_aa_support() {
        assert!(!BrushShape::RoundPixel.supports_placement_aa());
        for shape in BrushShape::ALL.into_iter().skip(1) {
            assert!(shape.supports_placement_aa());
        }
    }

    #[test]
    fn test_variable_size_modes() {
        assert!(PaintMode::Normal.allows_variable_size());
        assert!(PaintMode::Erase.allows_variable_size());
        assert!(!PaintMode::Smudge.allows_variable_size());
        assert!(!PaintMode::OilBlend.allows_variable_size());
    }

    #[test]
    fn test_coverage_at() {
        let mask = [0, 1, 2, 3, 4, 5];
        let dab = Dab {
            x: -1,
            y: 2,
            width: 3,
            height: 2,
            brush: &mask,
            alpha: 200,
        };
        assert_eq!(dab.coverage_at(2, 1), Some(5));
        assert_eq!(dab.coverage_at(3, 0), None);
        assert_eq!(dab.bounds(), (-1, 2, 3, 2));

        let owned = dab.to_owned_dab();
        assert_eq!(owned.as_dab(), dab);
    }
}
