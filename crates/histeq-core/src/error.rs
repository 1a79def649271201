use thiserror::Error;

#[derive(Error, Debug)]
pub enum EqualizeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid shape: {0}")]
    InvalidShape(String),

    #[error("Empty pixel buffer")]
    EmptyBuffer,

    #[error("No mapping for intensity {value} at ({row}, {col})")]
    MissingMapping { value: u8, row: usize, col: usize },

    #[error("Intensity {value} outside [0, 255] at index {index}")]
    OutOfRangeIntensity { value: f64, index: usize },
}

pub type Result<T> = std::result::Result<T, EqualizeError>;
