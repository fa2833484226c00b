use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigurationError;
use crate::types::Rgb;

/// Per-run render settings. Built once at startup (or loaded from RON) and
/// passed explicitly to every render call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Output width in pixels (one screen column per pixel).
    pub output_width: u32,
    /// Output height in pixels.
    pub output_height: u32,
    /// Terrain height to screen height scale factor, tuned at `reference_height`.
    pub height_scale: f64,
    /// Depth rows are scanned while `z < max_distance`.
    pub max_distance: f64,
    /// Screen height the horizon and height scale are expressed in.
    pub reference_height: f64,
    /// Background color and fog target.
    pub sky_color: Rgb,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output_width: DEFAULT_OUTPUT_WIDTH,
            output_height: DEFAULT_OUTPUT_HEIGHT,
            height_scale: DEFAULT_HEIGHT_SCALE,
            max_distance: DEFAULT_MAX_DISTANCE,
            reference_height: REFERENCE_HEIGHT,
            sky_color: SKY_COLOR,
        }
    }
}

impl RenderConfig {
    pub fn new(output_width: u32, output_height: u32) -> Self {
        Self {
            output_width,
            output_height,
            ..Self::default()
        }
    }

    /// Parse a RON document. Missing fields take their default values.
    pub fn from_ron(ron_str: &str) -> Result<Self, ConfigurationError> {
        let options = ron::Options::default();
        let config: RenderConfig = options
            .from_str(ron_str)
            .map_err(|e| ConfigurationError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.output_width == 0 || self.output_height == 0 {
            return Err(ConfigurationError::ZeroOutputSize {
                width: self.output_width,
                height: self.output_height,
            });
        }
        if !(self.max_distance.is_finite() && self.max_distance > 0.0) {
            return Err(ConfigurationError::InvalidMaxDistance(self.max_distance));
        }
        if !(self.reference_height.is_finite() && self.reference_height > 0.0) {
            return Err(ConfigurationError::InvalidReferenceHeight(
                self.reference_height,
            ));
        }
        if !self.height_scale.is_finite() {
            return Err(ConfigurationError::InvalidHeightScale(self.height_scale));
        }
        Ok(())
    }

    /// Vertical scale factor: `reference_height / output_height`.
    pub fn scale_y(&self) -> f64 {
        self.reference_height / self.output_height as f64
    }

    /// Camera horizon converted to output pixels.
    pub fn scaled_horizon(&self, horizon: f64) -> f64 {
        horizon / self.scale_y()
    }

    pub fn scaled_height_scale(&self) -> f64 {
        self.height_scale / self.scale_y()
    }

    /// Per-row increment of the depth step.
    pub fn depth_step_growth(&self) -> f64 {
        DEPTH_STEP_GROWTH * self.scale_y()
    }

    /// Number of depth rows one frame scans before reaching `max_distance`.
    ///
    /// Row `n` sits at `1 + n + growth * n * (n - 1) / 2`, so the count is the
    /// positive root of that quadratic, rounded up. Saturates at `u64::MAX`.
    pub fn estimated_depth_rows(&self) -> u64 {
        if self.max_distance <= INITIAL_DEPTH {
            return 0;
        }
        let growth = self.depth_step_growth();
        let b = INITIAL_DEPTH_STEP - growth / 2.0;
        let discriminant = b * b + 2.0 * growth * (self.max_distance - INITIAL_DEPTH);
        ((discriminant.sqrt() - b) / growth).ceil() as u64
    }

    /// Output dimensions as `(width, height)`.
    pub fn output_size(&self) -> (u32, u32) {
        (self.output_width, self.output_height)
    }
}
