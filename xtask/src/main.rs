//! Development tasks for ansi-art.
//!
//! Usage: `cargo xtask man [--out-dir <DIR>]`

use std::fs;
use std::path::{Path, PathBuf};

use ansi_art::cli::{ImageCli, TextCli};
use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask", about = "Development tasks for ansi-art")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages for ansi-text and ansi-image
    Man {
        /// Directory to write the pages to
        #[arg(long, default_value = "target/man")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().task {
        Task::Man { out_dir } => generate_man_pages(&out_dir),
    }
}

fn generate_man_pages(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    for command in [TextCli::command(), ImageCli::command()] {
        let path = out_dir.join(format!("{}.1", command.get_name()));
        let mut page = Vec::new();
        clap_mangen::Man::new(command).render(&mut page)?;
        fs::write(&path, page).with_context(|| format!("Failed to write {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}
