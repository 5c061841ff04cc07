//! ansi-text - print ANSI colored text

use std::io;
use std::process::ExitCode;

use ansi_art::cli::TextCli;
use ansi_art::{commands, logging};
use clap::Parser;

fn main() -> ExitCode {
    let cli = TextCli::parse();
    logging::init(cli.verbose);

    let mut stdout = io::stdout().lock();
    commands::finish(commands::text::handle(&cli, &mut stdout))
}
