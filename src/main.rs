use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use plate_reseq::cli::{Cli, Commands};
use plate_reseq::commands;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .compact()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Tile(cmd) => commands::tile::command(cmd),
        Commands::Resequence(cmd) => commands::resequence::command(cmd),
        Commands::Cherrypick(cmd) => commands::cherrypick::command(cmd),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
