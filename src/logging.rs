//! Diagnostic logging for the command-line tools.
//!
//! Stdout carries the rendered output, so logs always go to stderr.

use tracing::Level;

/// Install the global subscriber: warnings only, or debug with `verbose`.
pub fn init(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    // A subscriber may already be installed (e.g. under tests)
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
