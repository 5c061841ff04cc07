//! ansi-art: ANSI colored text and true-color terminal images.
//!
//! This library provides the core of the `ansi-text` and `ansi-image` tools:
//! the color codec that produces SGR escape sequences, and the renderer that
//! turns an RGB image into rows of background-colored cells.

pub mod cli;
pub mod color;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod prompt;
pub mod render;

pub use color::{encode, parse_color_argument, ColorRole, ColorSpec};
pub use config::RenderOptions;
pub use error::{Error, Result};
pub use render::render;
