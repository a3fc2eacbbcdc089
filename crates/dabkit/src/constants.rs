/// Anisotropy gain: squeeze 1.0 compresses the rotated x axis 11 times.
pub const MAX_SQUEEZE: f32 = 10.0;

/// Smallest diameter a dab can shrink to under pressure.
pub const MIN_BRUSH_SIZE: f32 = 0.1;

/// Diameters above this are snapped down to whole pixels.
pub const SIZE_SNAP_THRESHOLD: f32 = 16.0;

/// Sub-samples per axis for edge anti-aliasing (4x4 grid).
pub const SUPERSAMPLE_GRID: usize = 4;

/// Coverage added per sub-sample that lands inside the shape.
pub const SUPERSAMPLE_WEIGHT: u32 = 16;

/// Width of the boundary ring (either side of the edge) that gets supersampled.
pub const EDGE_BAND: f32 = 1.0;

/// Full coverage / alpha.
pub const MAX_ALPHA: u8 = 255;
