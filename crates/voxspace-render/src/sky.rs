//! Sky background.
//! The sky is a flat color painted over the whole buffer before terrain is
//! drawn; rows no terrain claims keep it. Fog blends toward the same color.

use voxspace_core::types::Rgb;

use crate::framebuffer::FrameBuffer;

/// Overwrite every pixel with `sky`.
pub fn fill_sky(buffer: &mut FrameBuffer, sky: Rgb) {
    buffer.fill(sky);
}
