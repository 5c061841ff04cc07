//! Command handlers behind the `ansi-text` and `ansi-image` binaries.

pub mod image;
pub mod text;

use std::process::ExitCode;

use crate::error::Error;

/// Turn a handler result into the process exit code.
///
/// Failures are printed to stderr with their cause chain. A cancelled
/// prompt has already told the user, so it exits quietly.
#[cfg(not(tarpaulin_include))]
pub fn finish(result: anyhow::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = exit_code(&err);
            if !is_cancelled(&err) {
                eprintln!("error: {:#}", err);
            }
            ExitCode::from(code)
        }
    }
}

/// Exit status for a failed handler.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<Error>())
        .map_or(2, Error::exit_code)
}

fn is_cancelled(err: &anyhow::Error) -> bool {
    err.chain()
        .any(|cause| matches!(cause.downcast_ref::<Error>(), Some(Error::UserCancelled)))
}
