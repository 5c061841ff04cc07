//! Image to terminal cell conversion.
//!
//! Every pixel becomes a cell string (two spaces by default) whose background
//! is set to the pixel's true color. Rows are encoded in parallel and joined
//! in order, each terminated by `\n`.

use std::borrow::Cow;
use std::path::Path;

use image::imageops;
use image::{DynamicImage, GenericImageView, RgbImage};
use rayon::prelude::*;

use crate::color::{encode_into, ColorSpec};
use crate::config::RenderOptions;
use crate::error::{Error, Result};

/// Load and decode an image file.
pub fn load(path: &Path) -> Result<DynamicImage> {
    let image = image::open(path).map_err(|source| Error::ImageDecode {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        color = ?image.color(),
        "decoded image"
    );
    Ok(image)
}

/// Render `image` with default options, scaling to `width` pixels if given.
pub fn render(image: &DynamicImage, width: Option<u32>) -> Result<String> {
    render_with(image, width, &RenderOptions::default())
}

/// Render `image`, scaling to `width` pixels (aspect ratio preserved) if given.
///
/// # Errors
/// - [`Error::InvalidImageShape`] unless the image has exactly 3 channels
/// - [`Error::EmptyImage`] if the image has no pixels
/// - [`Error::InvalidWidth`] if `width` is zero
pub fn render_with(
    image: &DynamicImage,
    width: Option<u32>,
    options: &RenderOptions,
) -> Result<String> {
    let rgb = to_rgb(image)?;

    let rgb = match width {
        Some(target_width) if target_width != rgb.width() => {
            let (w, h) = target_dimensions(rgb.width(), rgb.height(), target_width)?;
            tracing::debug!(
                from_width = rgb.width(),
                from_height = rgb.height(),
                to_width = w,
                to_height = h,
                filter = ?options.filter,
                "resizing image"
            );
            Cow::Owned(imageops::resize(&*rgb, w, h, options.filter))
        }
        _ => rgb,
    };

    Ok(render_rgb(&rgb, options))
}

/// Render an 8-bit RGB buffer at its native size.
pub fn render_rgb(image: &RgbImage, options: &RenderOptions) -> String {
    let row_len = image.width() as usize * 3;
    let total = row_len * image.height() as usize;
    if total == 0 {
        return String::new();
    }

    let rows: Vec<String> = image.as_raw()[..total]
        .par_chunks(row_len)
        .map(|row| render_row(row, options))
        .collect();

    tracing::debug!(rows = rows.len(), "rendered image rows");
    rows.concat()
}

/// Encode one row of packed RGB bytes, newline included.
fn render_row(row: &[u8], options: &RenderOptions) -> String {
    // Each cell is at most `\x1b[48;2;255;255;255m` (19 bytes) plus text and reset
    let cell_len = 19 + options.cell.len() + options.reset.len();
    let mut line = String::with_capacity(row.len() / 3 * cell_len + 1);

    for pixel in row.chunks_exact(3) {
        encode_into(
            &mut line,
            &options.cell,
            ColorSpec::None,
            ColorSpec::Rgb(pixel[0], pixel[1], pixel[2]),
            &options.reset,
        );
    }
    line.push('\n');
    line
}

/// Size of an image scaled to `target_width`, preserving aspect ratio.
///
/// The height is `height * target_width / width`, truncated, and never less
/// than one row.
pub fn target_dimensions(width: u32, height: u32, target_width: u32) -> Result<(u32, u32)> {
    if target_width == 0 {
        return Err(Error::InvalidWidth);
    }
    if width == 0 || height == 0 {
        return Err(Error::EmptyImage);
    }

    let target_height = u64::from(height) * u64::from(target_width) / u64::from(width);
    let target_height = u32::try_from(target_height).unwrap_or(u32::MAX).max(1);
    Ok((target_width, target_height))
}

/// Validate the channel layout and borrow (or narrow) the pixels as 8-bit RGB.
fn to_rgb(image: &DynamicImage) -> Result<Cow<'_, RgbImage>> {
    let channels = image.color().channel_count();
    if channels != 3 {
        return Err(Error::InvalidImageShape { channels });
    }

    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::EmptyImage);
    }

    Ok(match image.as_rgb8() {
        Some(rgb) => Cow::Borrowed(rgb),
        None => Cow::Owned(image.to_rgb8()),
    })
}
