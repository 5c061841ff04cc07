//! `ansi-text`: print text wrapped in color codes.

use std::io::Write;

use anyhow::{Context, Result};

use crate::cli::TextCli;
use crate::color::{encode, parse_optional_color, ColorRole};

/// Parse both color arguments and write the encoded text to `output`.
///
/// Nothing is written if either color is invalid.
pub fn handle<W: Write>(cli: &TextCli, output: &mut W) -> Result<()> {
    let foreground = parse_optional_color(cli.foreground.as_deref(), ColorRole::Foreground)?;
    let background = parse_optional_color(cli.background.as_deref(), ColorRole::Background)?;
    tracing::debug!(%foreground, %background, "parsed colors");

    let encoded = encode(&cli.joined_text(), foreground, background);
    output
        .write_all(encoded.as_bytes())
        .and_then(|()| output.flush())
        .context("Failed to write to stdout")?;
    Ok(())
}
