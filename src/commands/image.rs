//! `ansi-image`: print an image as rows of colored cells.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::cli::ImageCli;
use crate::color::{encode, ColorSpec};
use crate::error::Error;
use crate::prompt::confirm;
use crate::render;

/// Color of the message printed when the user declines.
const CANCEL_COLOR: ColorSpec = ColorSpec::Rgb(255, 32, 57);

/// Load the image, confirm the native width if none was given, and render.
///
/// `input` is only read when `--width` is missing.
pub fn handle<R: BufRead, W: Write>(cli: &ImageCli, input: &mut R, output: &mut W) -> Result<()> {
    let path = cli.image_path().ok_or(Error::MissingInput)?;
    let image = render::load(&path)?;

    if cli.width.is_none() {
        let question = format!(
            "WARNING no width specified. Use image width {}? (y/n): ",
            image.width()
        );
        if !confirm(input, output, &question)? {
            writeln!(
                output,
                "{}",
                encode("Exiting without printing image...", CANCEL_COLOR, ColorSpec::None)
            )?;
            return Err(Error::UserCancelled.into());
        }
    }

    let rendered = render::render(&image, cli.width)?;
    output
        .write_all(rendered.as_bytes())
        .and_then(|()| output.flush())
        .context("Failed to write to stdout")?;
    Ok(())
}
