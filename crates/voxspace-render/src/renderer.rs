//! Column-based heightmap raycaster ("voxel space").
//!
//! Depth rows are scanned from the camera outward. Each row is a horizontal
//! segment of the map, perpendicular to the view direction, sampled once per
//! screen column. A column keeps the topmost screen row drawn so far; a
//! farther row only paints the part of the column above it, so every pixel
//! is written at most once by terrain.

use glam::DVec2;
use voxspace_core::camera::Camera;
use voxspace_core::config::RenderConfig;
use voxspace_core::constants::{INITIAL_DEPTH, INITIAL_DEPTH_STEP, MAX_PRACTICAL_DEPTH_ROWS};
use voxspace_core::error::ConfigurationError;
use voxspace_core::math::{fog_blend, fog_factor, project_height};
use voxspace_world::TerrainMaps;

use crate::framebuffer::FrameBuffer;
use crate::sky::fill_sky;

/// Work done by one render call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Depth rows scanned.
    pub rows: u32,
    /// Column segments painted (row/column pairs that passed the occlusion test).
    pub spans: u64,
    /// Terrain pixels written.
    pub pixels: u64,
}

/// Render one frame into `buffer` and return the terrain height under the camera.
///
/// Inputs are validated before the buffer is touched; on error the buffer is
/// left exactly as it was.
pub fn render(
    camera: &Camera,
    maps: &TerrainMaps,
    buffer: &mut FrameBuffer,
    config: &RenderConfig,
) -> Result<u8, ConfigurationError> {
    config.validate()?;
    let mut columns = Vec::new();
    draw(camera, maps, buffer, config, &mut columns).map(|(elevation, _)| elevation)
}

/// Renderer bound to a validated config. Reuses its column buffer between
/// frames; the buffer is reset on every call and never exposed.
pub struct VoxelRenderer {
    config: RenderConfig,
    columns: Vec<usize>,
}

impl VoxelRenderer {
    pub fn new(config: RenderConfig) -> Result<Self, ConfigurationError> {
        config.validate()?;
        if INITIAL_DEPTH >= config.max_distance {
            log::warn!(
                "Max distance {} leaves no depth rows; frames will be all sky",
                config.max_distance
            );
        }
        let rows = config.estimated_depth_rows();
        if rows > MAX_PRACTICAL_DEPTH_ROWS {
            log::warn!(
                "Max distance {} needs about {} depth rows per frame (practical limit {})",
                config.max_distance,
                rows,
                MAX_PRACTICAL_DEPTH_ROWS
            );
        }
        log::debug!(
            "Voxel renderer: {}x{}, distance {}, height scale {}",
            config.output_width,
            config.output_height,
            config.max_distance,
            config.height_scale
        );
        let columns = Vec::with_capacity(config.output_width as usize);
        Ok(Self { config, columns })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Allocate a frame buffer matching this renderer's output size.
    pub fn create_buffer(&self) -> FrameBuffer {
        FrameBuffer::new(self.config.output_width, self.config.output_height)
    }

    pub fn render(
        &mut self,
        camera: &Camera,
        maps: &TerrainMaps,
        buffer: &mut FrameBuffer,
    ) -> Result<u8, ConfigurationError> {
        self.render_with_stats(camera, maps, buffer)
            .map(|(elevation, _)| elevation)
    }

    pub fn render_with_stats(
        &mut self,
        camera: &Camera,
        maps: &TerrainMaps,
        buffer: &mut FrameBuffer,
    ) -> Result<(u8, RenderStats), ConfigurationError> {
        let result = draw(camera, maps, buffer, &self.config, &mut self.columns)?;
        log::trace!(
            "Frame: {} rows, {} spans, {} pixels",
            result.1.rows,
            result.1.spans,
            result.1.pixels
        );
        Ok(result)
    }
}

/// Height of the cell one unit behind the camera along its heading.
///
/// The sample point is offset by `(-sin, -cos)` rather than taken at the
/// camera position itself; frame loops rely on this value for ground clamping.
pub fn ground_height(maps: &TerrainMaps, position: DVec2, angle: f64) -> u8 {
    let (sin, cos) = angle.sin_cos();
    maps.sample(position.x - sin, position.y - cos).0
}

fn check_inputs(
    camera: &Camera,
    buffer: &FrameBuffer,
    config: &RenderConfig,
) -> Result<(), ConfigurationError> {
    if buffer.size() != config.output_size() {
        return Err(ConfigurationError::BufferSizeMismatch {
            expected: config.output_size(),
            actual: buffer.size(),
        });
    }
    if !camera.is_finite() {
        return Err(ConfigurationError::NonFiniteCamera);
    }
    Ok(())
}

/// The kernel. `config` must already be validated.
fn draw(
    camera: &Camera,
    maps: &TerrainMaps,
    buffer: &mut FrameBuffer,
    config: &RenderConfig,
    columns: &mut Vec<usize>,
) -> Result<(u8, RenderStats), ConfigurationError> {
    check_inputs(camera, buffer, config)?;

    let width = config.output_width as usize;
    let height = config.output_height as usize;
    let sky = config.sky_color;
    let max_distance = config.max_distance;

    fill_sky(buffer, sky);
    columns.clear();
    columns.resize(width, height);

    let scaled_horizon = config.scaled_horizon(camera.horizon);
    let scaled_height_scale = config.scaled_height_scale();
    let step_growth = config.depth_step_growth();

    let (sin, cos) = camera.angle.sin_cos();
    let origin = camera.position;
    let mut stats = RenderStats::default();

    let mut z = INITIAL_DEPTH;
    let mut dz = INITIAL_DEPTH_STEP;
    while z < max_distance {
        // Row endpoints on the ground, left and right edge of the view.
        let left = DVec2::new(-cos * z - sin * z, sin * z - cos * z) + origin;
        let right = DVec2::new(cos * z - sin * z, -sin * z - cos * z) + origin;
        let step = (right - left) / width as f64;
        let fog = fog_factor(z, max_distance);

        let mut point = left;
        for (x, claimed) in columns.iter_mut().enumerate() {
            let (terrain, color) = maps.sample(point.x, point.y);
            let top = project_height(
                camera.elevation,
                terrain as f64,
                z,
                scaled_height_scale,
                scaled_horizon,
            );
            if top < *claimed {
                buffer.fill_column(x, top, *claimed, fog_blend(color, sky, fog));
                stats.spans += 1;
                stats.pixels += (*claimed - top) as u64;
                *claimed = top;
            }
            point += step;
        }

        stats.rows += 1;
        z += dz;
        dz += step_growth;
    }

    Ok((ground_height(maps, origin, camera.angle), stats))
}
