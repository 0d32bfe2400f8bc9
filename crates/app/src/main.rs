//! Bloom storefront CLI

use std::{io, process};

use clap::Parser;

use crate::cli::Cli;

mod cli;
mod config;
mod observability;

#[tokio::main]
pub async fn main() {
    let _env = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => error.exit(),
    };

    if let Err(error) = observability::init(&cli.logging) {
        report(&error.to_string());
    }

    let stdout = io::stdout();

    if let Err(error) = cli.run(&mut stdout.lock()).await {
        report(&error);
    }
}

#[expect(
    clippy::print_stderr,
    clippy::exit,
    reason = "the CLI reports failures on stderr and exits non-zero"
)]
fn report(error: &str) -> ! {
    eprintln!("{error}");
    process::exit(1);
}
