use thiserror::Error;

/// Invalid renderer inputs. Always detected before any output is written;
/// retrying with the same inputs fails the same way.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("output size must be positive, got {width}x{height}")]
    ZeroOutputSize { width: u32, height: u32 },

    #[error("max distance must be positive and finite, got {0}")]
    InvalidMaxDistance(f64),

    #[error("reference height must be positive and finite, got {0}")]
    InvalidReferenceHeight(f64),

    #[error("height scale must be finite, got {0}")]
    InvalidHeightScale(f64),

    #[error("terrain grid is empty")]
    EmptyGrid,

    #[error("height grid is {height_dims:?} but color grid is {color_dims:?}")]
    GridSizeMismatch {
        height_dims: (usize, usize),
        color_dims: (usize, usize),
    },

    #[error("grid data has {actual} cells, expected {expected}")]
    GridDataLength { expected: usize, actual: usize },

    #[error("frame buffer is {actual:?}, config expects {expected:?}")]
    BufferSizeMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    #[error("camera has non-finite fields")]
    NonFiniteCamera,

    #[error("failed to parse render config RON: {0}")]
    Parse(String),
}
