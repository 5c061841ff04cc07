//! ANSI color codec.
//!
//! Converts color specifications to SGR escape sequences and parses the
//! `--foreground`/`--background` argument grammar (`12`, `rgb(1, 2, 3)`).

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

/// Sequence appended after colored text to restore the terminal defaults.
pub const RESET: &str = "\x1b[0m";

/// A color to apply to text or to a cell background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorSpec {
    /// No color; contributes nothing to the escape prefix.
    #[default]
    None,
    /// Index into the 256-color palette.
    Palette(u8),
    /// 24-bit true color.
    Rgb(u8, u8, u8),
}

/// Which side of a cell a color applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRole {
    Foreground,
    Background,
}

impl ColorRole {
    /// SGR selector: `38` for foreground, `48` for background.
    fn selector(self) -> &'static str {
        match self {
            Self::Foreground => "38",
            Self::Background => "48",
        }
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Foreground => f.write_str("foreground"),
            Self::Background => f.write_str("background"),
        }
    }
}

impl ColorSpec {
    /// Append the escape sequence for this color to `buf`.
    ///
    /// # Returns
    /// `true` if a code was appended, `false` for [`ColorSpec::None`]
    pub fn write_sgr(&self, role: ColorRole, buf: &mut String) -> bool {
        match *self {
            Self::None => false,
            Self::Palette(n) => {
                buf.push_str("\x1b[");
                buf.push_str(role.selector());
                buf.push_str(";5;");
                buf.push_str(&format!("{:03}", n));
                buf.push('m');
                true
            }
            Self::Rgb(r, g, b) => {
                buf.push_str("\x1b[");
                buf.push_str(role.selector());
                buf.push_str(";2;");
                buf.push_str(&r.to_string());
                buf.push(';');
                buf.push_str(&g.to_string());
                buf.push(';');
                buf.push_str(&b.to_string());
                buf.push('m');
                true
            }
        }
    }

    /// The escape sequence for this color, or `None` when no color is set.
    pub fn sgr(&self, role: ColorRole) -> Option<String> {
        let mut buf = String::new();
        self.write_sgr(role, &mut buf).then_some(buf)
    }
}

/// Formats in the argument grammar, so parsing the output yields the same spec.
impl fmt::Display for ColorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => Ok(()),
            Self::Palette(n) => write!(f, "{}", n),
            Self::Rgb(r, g, b) => write!(f, "rgb({}, {}, {})", r, g, b),
        }
    }
}

/// Wrap `text` in the given colors followed by [`RESET`].
///
/// The foreground code always precedes the background code.
pub fn encode(text: &str, foreground: ColorSpec, background: ColorSpec) -> String {
    encode_with_reset(text, foreground, background, RESET)
}

/// Like [`encode`], with a caller-supplied reset sequence.
pub fn encode_with_reset(
    text: &str,
    foreground: ColorSpec,
    background: ColorSpec,
    reset: &str,
) -> String {
    let mut buf = String::with_capacity(text.len() + reset.len() + 40);
    encode_into(&mut buf, text, foreground, background, reset);
    buf
}

/// Append the encoded form of `text` to `buf`.
pub fn encode_into(
    buf: &mut String,
    text: &str,
    foreground: ColorSpec,
    background: ColorSpec,
    reset: &str,
) {
    foreground.write_sgr(ColorRole::Foreground, buf);
    background.write_sgr(ColorRole::Background, buf);
    buf.push_str(text);
    buf.push_str(reset);
}

/// `rgb(r, g, b)` anchored at the start only; trailing text is ignored.
static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgb\(\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})\s*\)")
        .expect("valid regex")
});

/// Parse a color argument: either `rgb(r, g, b)` or a palette index.
///
/// The `rgb(...)` form only has to match at the start of the string; any
/// trailing text is ignored. Numbers above 255 and negative indices other
/// than `-0` are rejected rather than emitted as malformed codes.
pub fn parse_color_argument(raw: &str, role: ColorRole) -> Result<ColorSpec> {
    let out_of_range = || Error::ColorOutOfRange {
        role,
        raw: raw.to_string(),
    };

    if let Some(caps) = RGB_RE.captures(raw) {
        let mut channels = [0u8; 3];
        for (slot, group) in channels.iter_mut().zip(1..=3) {
            *slot = caps[group].parse().map_err(|_| out_of_range())?;
        }
        let [r, g, b] = channels;
        return Ok(ColorSpec::Rgb(r, g, b));
    }

    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidColorFormat {
            role,
            raw: raw.to_string(),
        });
    }

    // Signed first so `-0` reads as zero; digits that overflow `i64` are out of range anyway
    trimmed
        .parse::<i64>()
        .ok()
        .and_then(|n| u8::try_from(n).ok())
        .map(ColorSpec::Palette)
        .ok_or_else(out_of_range)
}

/// Parse an optional argument; an absent argument means no color.
pub fn parse_optional_color(raw: Option<&str>, role: ColorRole) -> Result<ColorSpec> {
    match raw {
        Some(raw) => parse_color_argument(raw, role),
        None => Ok(ColorSpec::None),
    }
}
