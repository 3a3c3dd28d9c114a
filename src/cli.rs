use clap::{Parser, Subcommand};

use crate::commands;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert between well labels and imaging tile filenames
    #[command(subcommand)]
    Tile(commands::tile::Commands),
    /// Build resequencing lists from sequencing results
    #[command(subcommand)]
    Resequence(commands::resequence::Commands),
    /// Pack and format cherrypick lists
    #[command(subcommand)]
    Cherrypick(commands::cherrypick::Commands),
}

#[derive(Parser)]
#[command(
    name = "plate-reseq",
    color = clap::ColorChoice::Always,
    version,
    about = "Plate addressing and resequencing cherrypick lists for library screens",
)]
pub struct Cli {
    /// Log at debug level
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}
