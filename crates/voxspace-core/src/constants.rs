//! Single source of truth for shared constants.
//! Renderer, world generator and bench runner all read these values;
//! anything tunable per run lives in `RenderConfig` instead.

use crate::types::Rgb;

/// Flat sky color. Pixels no terrain row claims keep this color,
/// and distance fog blends terrain toward it.
pub const SKY_COLOR: Rgb = Rgb::new(96, 160, 204);

/// Screen height the horizon and height scale are tuned for.
/// Other output heights rescale both by `REFERENCE_HEIGHT / output_height`.
pub const REFERENCE_HEIGHT: f64 = 600.0;

/// Depth of the first scanned row.
pub const INITIAL_DEPTH: f64 = 1.0;

/// Initial distance between consecutive depth rows.
pub const INITIAL_DEPTH_STEP: f64 = 1.0;

/// Per-row growth of the depth step, multiplied by the vertical scale factor.
pub const DEPTH_STEP_GROWTH: f64 = 0.002;

/// Maximum fog weight. Fog is applied as `weight >> 8`, so 255 is just under full sky.
pub const FOG_MAX: i32 = 255;

/// Default maximum draw distance in map cells.
pub const DEFAULT_MAX_DISTANCE: f64 = 1500.0;

/// Default terrain height scale factor.
pub const DEFAULT_HEIGHT_SCALE: f64 = 400.0;

/// Default horizon offset in reference-height pixels.
pub const DEFAULT_HORIZON: f64 = 150.0;

/// Default camera elevation in terrain height units.
pub const DEFAULT_ELEVATION: f64 = 100.0;

/// Default camera heading in degrees.
pub const DEFAULT_HEADING_DEG: f64 = 45.0;

/// Default output resolution.
pub const DEFAULT_OUTPUT_WIDTH: u32 = 320;
pub const DEFAULT_OUTPUT_HEIGHT: u32 = 240;

/// Minimum gap the frame loop keeps between the camera and the ground below it.
pub const GROUND_CLEARANCE: f64 = 5.0;

/// Depth rows per frame above which a configured max distance is treated as
/// impractical. The renderer still accepts it but logs a warning.
pub const MAX_PRACTICAL_DEPTH_ROWS: u64 = 100_000;
