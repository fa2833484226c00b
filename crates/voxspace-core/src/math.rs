use crate::constants::FOG_MAX;
use crate::types::Rgb;

/// Floor-modulo of `v` into `[0, len)`. Negative inputs wrap around,
/// so `-1` maps to `len - 1`. `len` must be non-zero.
#[inline]
pub fn wrap_index(v: i64, len: usize) -> usize {
    v.rem_euclid(len as i64) as usize
}

/// Integer map cell containing a real map coordinate.
///
/// Truncates toward zero (`-0.5` lands in cell 0, not -1); the result is then
/// wrapped by [`wrap_index`].
#[inline]
pub fn cell_of(coord: f64) -> i64 {
    coord as i64
}

/// Fog weight for a depth row: `floor((z / max_distance)^3 * 255)`.
///
/// Cubic falloff: near rows stay close to 0, the last rows before the far
/// plane approach 255.
#[inline]
pub fn fog_factor(depth: f64, max_distance: f64) -> i32 {
    let t = depth / max_distance;
    ((t * t * t) * FOG_MAX as f64) as i32
}

#[inline]
fn blend_channel(terrain: u8, sky: u8, fog: i32) -> u8 {
    let t = terrain as i32;
    // Arithmetic shift: floors toward -inf for negative deltas, so the result
    // always stays between `terrain` and `sky`.
    (t + (((sky as i32 - t) * fog) >> 8)) as u8
}

/// Blend a terrain color toward the sky by `fog / 256`, per channel:
/// `t + ((s - t) * fog >> 8)`.
#[inline]
pub fn fog_blend(terrain: Rgb, sky: Rgb, fog: i32) -> Rgb {
    let fog = fog.clamp(0, FOG_MAX);
    Rgb {
        r: blend_channel(terrain.r, sky.r, fog),
        g: blend_channel(terrain.g, sky.g, fog),
        b: blend_channel(terrain.b, sky.b, fog),
    }
}

/// Screen row of a terrain sample's top edge at depth `depth`.
///
/// `(elevation - terrain) / depth * scaled_height_scale + scaled_horizon`,
/// truncated toward zero and clamped at 0 (the top of the screen).
#[inline]
pub fn project_height(
    elevation: f64,
    terrain: f64,
    depth: f64,
    scaled_height_scale: f64,
    scaled_horizon: f64,
) -> usize {
    let projected = ((elevation - terrain) / depth * scaled_height_scale + scaled_horizon) as i64;
    usize::try_from(projected.max(0)).unwrap_or(usize::MAX)
}
