// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Command-line surface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Headless tuxfish runner.
#[derive(Parser, Debug)]
#[command(name = "tuxfish", author, version, about = "Tux fishing, without the window")]
pub struct Cli {
    /// Preferences directory (defaults to the platform config dir).
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Simulate a session and report what was caught.
    Run(RunArgs),
    /// Print the projection and starting view matrices.
    Matrices(MatricesArgs),
}

/// Options for `tuxfish run`.
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Frames to simulate.
    #[arg(long, default_value_t = 3600)]
    pub frames: u32,
    /// Simulated frames per second.
    #[arg(long, default_value_t = 60.0)]
    pub fps: f32,
    /// RNG seed (overrides the saved preference).
    #[arg(long, allow_hyphen_values = true)]
    pub seed: Option<i32>,
    /// Multisample level, 0..=16 (overrides the saved preference).
    #[arg(long)]
    pub msaa: Option<u8>,
    /// Let the scripted angler play.
    #[arg(long)]
    pub autocast: bool,
    /// Print the summary as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Options for `tuxfish matrices`.
#[derive(Args, Debug, Clone)]
pub struct MatricesArgs {
    /// Surface width (defaults to the saved preference).
    #[arg(long)]
    pub width: Option<u32>,
    /// Surface height (defaults to the saved preference).
    #[arg(long)]
    pub height: Option<u32>,
    /// Print JSON instead of the four-row dump.
    #[arg(long)]
    pub json: bool,
}
