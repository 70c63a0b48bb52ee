//! Error type shared by every stage of the matcher.

use crate::volume::VolumeShape;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("left image is {left:?} (h, w) but right image is {right:?}")]
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("buffer holds {actual} samples, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    #[error("image has zero height or width")]
    EmptyImage,

    #[error("sample at ({row}, {col}) is not finite")]
    NonFiniteSample { row: usize, col: usize },

    #[error("no aggregated volumes to select from")]
    NoVolumes,

    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    #[error("({dy}, {dx}) is not a cardinal unit direction")]
    InvalidDirection { dy: i32, dx: i32 },

    #[error("volume shape {actual:?} does not match {expected:?}")]
    ShapeMismatch {
        expected: VolumeShape,
        actual: VolumeShape,
    },

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),
}
