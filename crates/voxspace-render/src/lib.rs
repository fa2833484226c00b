pub mod framebuffer;
pub mod renderer;
pub mod sky;

pub use framebuffer::FrameBuffer;
pub use renderer::{render, RenderStats, VoxelRenderer};
