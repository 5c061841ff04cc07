//! Build script for ansi-art.
//!
//! `cli::LONG_VERSION` reads `VERGEN_GIT_SHA` and `ANSI_ART_BUILD_DATE` through
//! `env!`, so both must be set on every build or the library fails to compile.
//! With the `release` feature the SHA is the literal `release`.

use std::process::Command;

/// Build date as YYYY-MM-DD, or `unknown` where `date` is unavailable
fn get_build_date() -> String {
    if let Ok(output) = Command::new("date").args(["+%Y-%m-%d"]).output() {
        if output.status.success() {
            return String::from_utf8_lossy(&output.stdout).trim().to_string();
        }
    }
    "unknown".to_string()
}

fn main() {
    println!("cargo:rustc-env=ANSI_ART_BUILD_DATE={}", get_build_date());

    #[cfg(not(feature = "release"))]
    {
        use vergen_gitcl::{Emitter, GitclBuilder};

        let git_result = GitclBuilder::default().sha(true).build();

        let emit_result = match git_result {
            Ok(git) => Emitter::default()
                .add_instructions(&git)
                .and_then(|emitter| emitter.emit()),
            Err(e) => {
                // `env!` in cli.rs still needs a value
                println!("cargo:warning=Failed to configure git info: {}", e);
                println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
                return;
            }
        };

        if let Err(e) = emit_result {
            // Building from an unpacked source archive with no .git directory
            println!("cargo:warning=Failed to get git info: {}", e);
            println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
        }
    }

    #[cfg(feature = "release")]
    println!("cargo:rustc-env=VERGEN_GIT_SHA=release");
}
