// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use clap::Parser;

use pose_overlay::cli::args::{Cli, Commands};
use pose_overlay::cli::overlay::run_overlay;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Overlay(args) => run_overlay(&args),
    }
}
