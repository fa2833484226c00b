use std::time::Instant;

use voxspace_core::config::RenderConfig;
use voxspace_core::constants::GROUND_CLEARANCE;
use voxspace_core::error::ConfigurationError;
use voxspace_render::{FrameBuffer, VoxelRenderer};
use voxspace_world::TerrainGenerator;

use crate::scenes::SceneConfig;

/// Timing data for a single benchmark run.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TimingSeries {
    pub mean_ms: f64,
    pub median_ms: f64,
    pub p95_ms: f64,
    pub p99_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
}

/// Result of a single scene benchmark.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct BenchmarkResult {
    pub scene_name: String,
    pub resolution: (u32, u32),
    pub frame_count: u32,
    /// Mean terrain pixels written per frame.
    pub mean_pixels: f64,
    /// Frames where the camera had to be lifted above the ground.
    pub ground_clamps: u32,
    pub timings: TimingSeries,
}

/// Outcome of one scene: timings plus the final frame for inspection.
pub struct SceneRun {
    pub result: BenchmarkResult,
    pub last_frame: FrameBuffer,
}

/// Runs scenes headlessly on the CPU renderer.
pub struct BenchmarkRunner {
    frame_count: u32,
    /// Settings shared by every scene; each scene overrides the output size.
    base_config: RenderConfig,
}

impl BenchmarkRunner {
    pub fn new(frame_count: u32, base_config: RenderConfig) -> Self {
        Self {
            frame_count,
            base_config,
        }
    }

    /// Run a single benchmark scene and return timing results.
    ///
    /// Mirrors an interactive frame loop: move the camera, render, then keep
    /// the camera above the returned ground height.
    pub fn run_scene(&self, scene: &SceneConfig) -> Result<SceneRun, ConfigurationError> {
        log::info!(
            "Running scene '{}' ({}x{}, {} frames)...",
            scene.name,
            scene.output_width,
            scene.output_height,
            self.frame_count
        );

        let config = RenderConfig {
            output_width: scene.output_width,
            output_height: scene.output_height,
            ..self.base_config.clone()
        };
        let mut renderer = VoxelRenderer::new(config)?;
        let maps = TerrainGenerator::new(scene.seed)
            .with_feature_size(scene.feature_size)
            .generate(scene.map_size, scene.map_size)?;
        let mut frame = renderer.create_buffer();
        let mut camera = scene.start_camera();

        let mut frame_times = Vec::with_capacity(self.frame_count as usize);
        let mut total_pixels = 0u64;
        let mut ground_clamps = 0u32;

        for _ in 0..self.frame_count {
            scene.step(&mut camera);

            let frame_start = Instant::now();
            let (ground, stats) = renderer.render_with_stats(&camera, &maps, &mut frame)?;
            let elapsed = frame_start.elapsed().as_secs_f64() * 1000.0;
            frame_times.push(elapsed);

            total_pixels += stats.pixels;
            if camera.clamp_above_ground(ground as f64, GROUND_CLEARANCE) {
                ground_clamps += 1;
            }
        }

        let timings = compute_timings(&frame_times);
        log::info!(
            "  Done: mean={:.2}ms, p95={:.2}ms, p99={:.2}ms",
            timings.mean_ms,
            timings.p95_ms,
            timings.p99_ms
        );

        let mean_pixels = if self.frame_count == 0 {
            0.0
        } else {
            total_pixels as f64 / self.frame_count as f64
        };

        Ok(SceneRun {
            result: BenchmarkResult {
                scene_name: scene.name.to_string(),
                resolution: (scene.output_width, scene.output_height),
                frame_count: self.frame_count,
                mean_pixels,
                ground_clamps,
                timings,
            },
            last_frame: frame,
        })
    }
}

/// Compute timing statistics from a list of frame times in milliseconds.
pub fn compute_timings(times: &[f64]) -> TimingSeries {
    if times.is_empty() {
        return TimingSeries {
            mean_ms: 0.0,
            median_ms: 0.0,
            p95_ms: 0.0,
            p99_ms: 0.0,
            min_ms: 0.0,
            max_ms: 0.0,
        };
    }

    let mut sorted = times.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = sorted.len();
    let mean = sorted.iter().sum::<f64>() / n as f64;
    let median = if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    };
    let p95_idx = ((n as f64) * 0.95).ceil() as usize;
    let p99_idx = ((n as f64) * 0.99).ceil() as usize;

    TimingSeries {
        mean_ms: mean,
        median_ms: median,
        p95_ms: sorted[p95_idx.min(n - 1)],
        p99_ms: sorted[p99_idx.min(n - 1)],
        min_ms: sorted[0],
        max_ms: sorted[n - 1],
    }
}
