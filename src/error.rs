//! Error types shared by the color codec, the image renderer and the CLIs.

use std::path::PathBuf;

use crate::color::ColorRole;

/// Errors that can occur while parsing colors or rendering images.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid {role} color: {raw}")]
    InvalidColorFormat { role: ColorRole, raw: String },

    #[error("Invalid {role} color: {raw} (values must be between 0 and 255)")]
    ColorOutOfRange { role: ColorRole, raw: String },

    #[error("Image must have 3 channels (RGB), found {channels}")]
    InvalidImageShape { channels: u8 },

    #[error("Image has no pixels")]
    EmptyImage,

    #[error("Target width must be at least 1")]
    InvalidWidth,

    #[error("Failed to load image {path}")]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("No image file given. Pass a path or use --file <PATH>.")]
    MissingInput,

    #[error("I/O error")]
    Io(#[from] std::io::Error),

    #[error("Cancelled by user")]
    UserCancelled,
}

impl Error {
    /// Process exit code for this error.
    ///
    /// A cancelled prompt is a deliberate exit and keeps status 1; every
    /// genuine failure uses 2, the same code clap uses for usage errors.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::UserCancelled => 1,
            _ => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
