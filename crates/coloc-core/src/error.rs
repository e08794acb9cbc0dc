use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ColocError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("TIFF error: {0}")]
    TiffError(#[from] tiff::TiffError),

    #[error(
        "Channels must have the same size: {left_width}x{left_height}x{left_planes} vs \
         {right_width}x{right_height}x{right_planes}"
    )]
    ShapeMismatch {
        left_width: usize,
        left_height: usize,
        left_planes: usize,
        right_width: usize,
        right_height: usize,
        right_planes: usize,
    },

    #[error("Channels must have the same bit depth: {left} vs {right}")]
    BitDepthMismatch { left: u8, right: u8 },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("No pixel lies in the region of interest; check image and threshold parameters")]
    EmptyRoi,

    #[error(
        "Mean and maximum intensity of channel {channel} are both {value}; \
         all above-threshold pixels share one intensity"
    )]
    DegenerateStatistics { channel: usize, value: f64 },

    #[error("Unsupported pixel format: {0} (convert to 8-bit or 16-bit grayscale)")]
    UnsupportedPixelFormat(String),

    #[error("Empty image stack")]
    EmptyStack,

    #[error("Input folders hold a different number of files: {left} vs {right}")]
    BatchMismatch { left: usize, right: usize },

    #[error("Sub-folders within input folders are not allowed: {}", .0.display())]
    NestedDirectory(PathBuf),
}

pub type Result<T> = std::result::Result<T, ColocError>;
