//! Brush settings and pressure-derived dab state
//!
//! [`BrushSettings`] is what a tool stores; [`BrushParameters`] wraps it with
//! the transient `cur_*` values that are recomputed from every pressure
//! sample before a dab is generated.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::constants::{MIN_BRUSH_SIZE, SIZE_SNAP_THRESHOLD};
use crate::types::{BrushShape, PaintMode};
use crate::validation::ValidationError;

/// Persistent brush configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushSettings {
    /// Diameter in pixels
    pub size: f32,
    /// Opacity 0..255
    pub alpha: u8,
    /// Ellipse anisotropy, 0 = round, ~1 = very flat
    pub squeeze: f32,
    /// Rotation in radians
    pub angle: f32,
    /// Positional jitter as a fraction of the dab size
    pub scattering: f32,
    /// Paper texture blend amount 0..1
    pub texture: f32,
    pub shape: BrushShape,
    pub mode: PaintMode,
    /// Apply pressure to size
    pub pressure_size: bool,
    /// Apply pressure to alpha
    pub pressure_alpha: bool,
    /// Apply pressure to scattering
    pub pressure_scattering: bool,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            size: 10.0,
            alpha: 255,
            squeeze: 0.0,
            angle: 0.0,
            scattering: 0.0,
            texture: 0.0,
            shape: BrushShape::default(),
            mode: PaintMode::default(),
            pressure_size: false,
            pressure_alpha: false,
            pressure_scattering: false,
        }
    }
}

impl BrushSettings {
    /// Reject settings that would poison the mask geometry
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.size.is_finite() || self.size < 0.0 {
            return Err(ValidationError::InvalidSize(self.size));
        }
        Ok(())
    }
}

/// Brush settings plus the values used for the next dab
#[derive(Debug, Clone, PartialEq)]
pub struct BrushParameters {
    pub settings: BrushSettings,
    /// Diameter for the next dab, never below [`MIN_BRUSH_SIZE`]
    pub cur_size: f32,
    pub cur_alpha: u8,
    pub cur_squeeze: f32,
    pub cur_angle: f32,
    /// Scatter radius in pixels
    pub cur_scattering: f32,
}

impl Default for BrushParameters {
    fn default() -> Self {
        Self::new(BrushSettings::default())
    }
}

impl BrushParameters {
    /// Wrap settings, with transient state computed for full pressure
    pub fn new(settings: BrushSettings) -> Self {
        let mut params = Self {
            settings,
            cur_size: MIN_BRUSH_SIZE,
            cur_alpha: 0,
            cur_squeeze: 0.0,
            cur_angle: 0.0,
            cur_scattering: 0.0,
        };
        params.apply_pressure(1.0);
        params
    }

    /// Replace the settings and refresh transient state at full pressure
    pub fn set_settings(&mut self, settings: BrushSettings) {
        self.settings = settings;
        self.apply_pressure(1.0);
    }

    /// Derive the transient values from a pressure sample.
    ///
    /// `pressure` is expected in [0, 1] and is not checked here; values
    /// outside that range produce out-of-range sizes (alpha saturates at
    /// the byte bounds).
    pub fn apply_pressure(&mut self, pressure: f32) {
        let s = &self.settings;

        let mut size = s.size.max(MIN_BRUSH_SIZE);
        if s.pressure_size && s.mode.allows_variable_size() {
            size = (s.size * pressure).max(MIN_BRUSH_SIZE);
        }
        // Snap large brushes to whole pixels
        if size > SIZE_SNAP_THRESHOLD {
            size = size.floor();
        }
        self.cur_size = size;

        self.cur_alpha = if s.pressure_alpha {
            (s.alpha as f32 * pressure).floor() as u8
        } else {
            s.alpha
        };

        self.cur_squeeze = s.squeeze;
        self.cur_angle = s.angle;

        let scatter_pressure = if s.pressure_scattering { pressure } else { 1.0 };
        self.cur_scattering = s.scattering * self.cur_size * scatter_pressure;

        trace!(
            "BrushParameters::apply_pressure: p={:.3} -> size={:.2}, alpha={}, scatter={:.2}",
            pressure, self.cur_size, self.cur_alpha, self.cur_scattering
        );
    }

    #[inline]
    pub fn shape(&self) -> BrushShape {
        self.settings.shape
    }

    /// Texture amount clamped to [0, 1]
    #[inline]
    pub fn texture_amount(&self) -> f32 {
        self.settings.texture.clamp(0.0, 1.0)
    }
}
