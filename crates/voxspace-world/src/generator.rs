//! Seeded procedural terrain for demos and benchmarks.
//!
//! Heights come from 3-octave 2D simplex noise. The map wraps toroidally at
//! render time, so the noise is cross-faded with copies of itself shifted by
//! one map period; opposite edges then match and the seam disappears.
//! Colors are banded by elevation and shaded by the slope toward the
//! north-west, baked once per cell.

use voxspace_core::error::ConfigurationError;
use voxspace_core::types::Rgb;

use crate::terrain::{Grid, TerrainMaps};

/// Height at or below which cells are water.
pub const WATER_LEVEL: u8 = 60;

const SAND_LEVEL: u8 = 72;
const GRASS_LEVEL: u8 = 150;
const ROCK_LEVEL: u8 = 210;

const WATER: Rgb = Rgb::new(40, 80, 150);
const SAND: Rgb = Rgb::new(194, 178, 128);
const GRASS: Rgb = Rgb::new(70, 130, 50);
const ROCK: Rgb = Rgb::new(120, 110, 100);
const SNOW: Rgb = Rgb::new(235, 235, 240);

/// Brightness change per unit of height difference to the north-west neighbor.
const SLOPE_SHADE: i32 = 3;

/// Terrain generator using tileable 2D simplex noise.
pub struct TerrainGenerator {
    /// Permutation table for simplex noise (doubled for wrapping).
    perm: [u8; 512],
    /// Approximate size of the largest terrain features, in cells.
    feature_size: f64,
}

impl TerrainGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            perm: Self::build_permutation(seed),
            feature_size: 128.0,
        }
    }

    pub fn with_feature_size(mut self, cells: f64) -> Self {
        self.feature_size = cells.max(1.0);
        self
    }

    /// Generate a `width` x `height` pair of height and color grids.
    pub fn generate(&self, width: usize, height: usize) -> Result<TerrainMaps, ConfigurationError> {
        if width == 0 || height == 0 {
            return Err(ConfigurationError::EmptyGrid);
        }
        log::info!(
            "Generating {}x{} terrain (feature size {})",
            width,
            height,
            self.feature_size
        );

        let heights = Grid::from_fn(width, height, |x, y| self.height_at(x, y, width, height))?;
        let colors = Grid::from_fn(width, height, |x, y| {
            let h = heights.get_wrapped(x as i64, y as i64);
            let nw = heights.get_wrapped(x as i64 - 1, y as i64 - 1);
            band_color(h, (h as i32 - nw as i32) * SLOPE_SHADE)
        })?;

        TerrainMaps::new(heights, colors)
    }

    /// Seamless height at cell `(x, y)` of a `width` x `height` map.
    fn height_at(&self, x: usize, y: usize, width: usize, height: usize) -> u8 {
        let (w, h) = (width as f64, height as f64);
        let (fx, fy) = (x as f64, y as f64);
        // Cross-fade weights: 1 at the near edge, 0 at the far edge.
        let u = 1.0 - fx / w;
        let v = 1.0 - fy / h;

        let n = self.fbm(fx, fy) * u * v
            + self.fbm(fx - w, fy) * (1.0 - u) * v
            + self.fbm(fx, fy - h) * u * (1.0 - v)
            + self.fbm(fx - w, fy - h) * (1.0 - u) * (1.0 - v);

        // fbm is within about [-1.75, 1.75]; map to 0..=255
        let normalized = (n / 1.75 * 0.5 + 0.5).clamp(0.0, 1.0);
        (normalized * 255.0).round() as u8
    }

    /// 3 octaves of simplex noise.
    fn fbm(&self, x: f64, y: f64) -> f64 {
        let scale = 1.0 / self.feature_size;
        let mut n = 0.0f64;
        n += self.simplex2d(x * scale, y * scale);
        n += self.simplex2d(x * scale * 2.0 + 100.0, y * scale * 2.0 + 100.0) * 0.5;
        n += self.simplex2d(x * scale * 4.0 + 200.0, y * scale * 4.0 + 200.0) * 0.25;
        n
    }

    /// 2D simplex noise. Returns value in [-1, 1].
    fn simplex2d(&self, x: f64, y: f64) -> f64 {
        const F2: f64 = 0.5 * (1.7320508075688772 - 1.0); // (sqrt(3)-1)/2
        const G2: f64 = (3.0 - 1.7320508075688772) / 6.0; // (3-sqrt(3))/6

        let s = (x + y) * F2;
        let i = (x + s).floor();
        let j = (y + s).floor();

        let t = (i + j) * G2;
        let x0 = x - (i - t);
        let y0 = y - (j - t);

        let (i1, j1) = if x0 > y0 { (1usize, 0usize) } else { (0, 1) };

        let x1 = x0 - i1 as f64 + G2;
        let y1 = y0 - j1 as f64 + G2;
        let x2 = x0 - 1.0 + 2.0 * G2;
        let y2 = y0 - 1.0 + 2.0 * G2;

        let ii = (i as i64 & 255) as usize;
        let jj = (j as i64 & 255) as usize;

        let gi0 = self.perm[ii + self.perm[jj] as usize] as usize % 12;
        let gi1 = self.perm[ii + i1 + self.perm[jj + j1] as usize] as usize % 12;
        let gi2 = self.perm[ii + 1 + self.perm[jj + 1] as usize] as usize % 12;

        let n0 = corner_contribution(gi0, x0, y0);
        let n1 = corner_contribution(gi1, x1, y1);
        let n2 = corner_contribution(gi2, x2, y2);

        70.0 * (n0 + n1 + n2)
    }

    fn build_permutation(seed: u64) -> [u8; 512] {
        let mut p: [u8; 256] = [0; 256];
        for (i, val) in p.iter_mut().enumerate() {
            *val = i as u8;
        }

        // Fisher-Yates shuffle driven by an LCG
        let mut rng = seed;
        for i in (1..256).rev() {
            rng = rng
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let j = (rng >> 33) as usize % (i + 1);
            p.swap(i, j);
        }

        let mut perm = [0u8; 512];
        for (i, val) in perm.iter_mut().enumerate() {
            *val = p[i & 255];
        }
        perm
    }
}

fn corner_contribution(gi: usize, x: f64, y: f64) -> f64 {
    let t = 0.5 - x * x - y * y;
    if t < 0.0 {
        0.0
    } else {
        let t = t * t;
        t * t * grad2d(gi, x, y)
    }
}

fn grad2d(hash: usize, x: f64, y: f64) -> f64 {
    const GRAD: [[f64; 2]; 12] = [
        [1.0, 1.0],
        [-1.0, 1.0],
        [1.0, -1.0],
        [-1.0, -1.0],
        [1.0, 0.0],
        [-1.0, 0.0],
        [0.0, 1.0],
        [0.0, -1.0],
        [1.0, 1.0],
        [-1.0, 1.0],
        [1.0, -1.0],
        [-1.0, -1.0],
    ];
    let g = &GRAD[hash % 12];
    g[0] * x + g[1] * y
}

/// Base color for an elevation band, brightened or darkened by `shade`.
/// Water is left unshaded.
pub fn band_color(height: u8, shade: i32) -> Rgb {
    let base = match height {
        h if h <= WATER_LEVEL => return WATER,
        h if h <= SAND_LEVEL => SAND,
        h if h <= GRASS_LEVEL => GRASS,
        h if h <= ROCK_LEVEL => ROCK,
        _ => SNOW,
    };
    let adjust = |c: u8| (c as i32 + shade).clamp(0, 255) as u8;
    Rgb::new(adjust(base.r), adjust(base.g), adjust(base.b))
}
