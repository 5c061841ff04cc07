//! Rendering configuration.

use image::imageops::FilterType;

use crate::color::RESET;

/// Characters drawn for each image pixel. Two cells approximate a square pixel.
pub const DEFAULT_CELL: &str = "  ";

/// Options for turning an image into terminal cells.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Sequence appended after every cell
    pub reset: String,
    /// Text drawn for each pixel (colored through its background)
    pub cell: String,
    /// Resampling filter used when scaling to the target width
    pub filter: FilterType,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            reset: RESET.to_string(),
            cell: DEFAULT_CELL.to_string(),
            filter: FilterType::Triangle,
        }
    }
}
