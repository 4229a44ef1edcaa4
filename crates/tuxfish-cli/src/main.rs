// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! tuxfish: headless runner for the fishing game.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod matrices;
mod prefs;
mod run;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config_dir = cli.config_dir.as_deref();
    let mut out = std::io::stdout().lock();
    match &cli.command {
        Command::Run(args) => run::run(args, config_dir, &mut out),
        Command::Matrices(args) => matrices::matrices(args, config_dir, &mut out),
    }
}
