pub mod camera;
pub mod config;
pub mod constants;
pub mod error;
pub mod math;
pub mod types;

pub use camera::Camera;
pub use config::RenderConfig;
pub use error::ConfigurationError;
pub use types::Rgb;
