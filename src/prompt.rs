//! Interactive yes/no confirmation.

use std::io::{BufRead, Write};

use crate::color::{encode, ColorSpec};
use crate::error::Result;

/// Color used for prompt text.
pub const PROMPT_COLOR: ColorSpec = ColorSpec::Rgb(255, 212, 0);

/// Shown when an answer is neither `y` nor `n`.
const RETRY_MESSAGE: &str = "Please enter \"y\" or \"n\": ";

/// Ask `question` until the user answers `y` or `n` (case-insensitive).
///
/// Returns `Ok(true)` for `y`, `Ok(false)` for `n`. End of input counts as
/// `n`, so a closed stdin never loops forever.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<bool> {
    let mut message = question;

    loop {
        write!(output, "{}", encode(message, PROMPT_COLOR, ColorSpec::None))?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            tracing::debug!("stdin closed while waiting for confirmation");
            writeln!(output)?;
            return Ok(false);
        }

        match line.trim().to_lowercase().as_str() {
            "y" => return Ok(true),
            "n" => return Ok(false),
            other => {
                tracing::debug!(answer = other, "unrecognised confirmation answer");
                message = RETRY_MESSAGE;
            }
        }
    }
}
