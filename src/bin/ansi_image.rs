//! ansi-image - print an image as ANSI art

use std::io;
use std::process::ExitCode;

use ansi_art::cli::ImageCli;
use ansi_art::{commands, logging};
use clap::Parser;

fn main() -> ExitCode {
    let cli = ImageCli::parse();
    logging::init(cli.verbose);

    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    commands::finish(commands::image::handle(&cli, &mut stdin, &mut stdout))
}
