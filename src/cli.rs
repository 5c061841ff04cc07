//! Command-line definitions for `ansi-text` and `ansi-image`.
//!
//! Kept in the library so `xtask` can generate man pages from them.

use std::path::PathBuf;

use clap::Parser;

/// Version with commit and build date, shown by `--version`.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("VERGEN_GIT_SHA"),
    "\nbuilt: ",
    env!("ANSI_ART_BUILD_DATE"),
);

/// Print ANSI colored text.
#[derive(Parser, Debug)]
#[command(name = "ansi-text")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Print ANSI colored text")]
#[command(after_help = "\x1b[1mExamples:\x1b[0m
  ansi-text -f 12 Hello world
  ansi-text -f 'rgb(255, 128, 0)' -b 236 Warning
  ansi-text -b 'rgb(4, 5, 6)' -- -leading dash")]
pub struct TextCli {
    /// Foreground color code or rgb value (e.g., 12, rgb(1, 2, 3))
    #[arg(short, long, value_name = "COLOR")]
    pub foreground: Option<String>,

    /// Background color (e.g., 6, 'rgb(4, 5, 6)')
    #[arg(short, long, value_name = "COLOR")]
    pub background: Option<String>,

    /// Log debug information to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Text to print; words are joined with single spaces. Everything from
    /// the first word on is text, including tokens that start with `-`
    #[arg(value_name = "TEXT", allow_hyphen_values = true)]
    pub text: Vec<String>,
}

impl TextCli {
    /// The positional words joined into one string.
    pub fn joined_text(&self) -> String {
        self.text.join(" ")
    }
}

/// Render an image as ANSI art.
#[derive(Parser, Debug)]
#[command(name = "ansi-image")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Print an image as ANSI art")]
#[command(after_help = "\x1b[1mExamples:\x1b[0m
  ansi-image -w 40 photo.png
  ansi-image --file logo.jpg --width 80")]
pub struct ImageCli {
    /// The image file to display as ANSI art
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// The width to scale the image to. Each pixel will be represented by 2
    /// characters so if you can only fit 80 characters in your terminal you
    /// should set this to 40
    #[arg(short, long, value_name = "WIDTH", value_parser = clap::value_parser!(u32).range(1..))]
    pub width: Option<u32>,

    /// Log debug information to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Image path, used when --file is not given
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: Vec<String>,
}

impl ImageCli {
    /// The image to load: `--file` wins over the positional words.
    pub fn image_path(&self) -> Option<PathBuf> {
        if let Some(file) = &self.file {
            return Some(file.clone());
        }
        let joined = self.path.join(" ");
        (!joined.is_empty()).then(|| PathBuf::from(joined))
    }
}
