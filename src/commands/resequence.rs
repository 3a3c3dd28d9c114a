use std::fs::File;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

use crate::cherrypick::{read_wells, write_cherrypick_list};
use crate::config::load_settings;
use crate::error::Error;
use crate::pipeline::resequencing_list;
use crate::repository::SqliteRepository;

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Cherrypick list of positive wells whose top BLAT hit is not the intended clone
    List(ListCommand),
}

#[derive(Parser, Debug, Clone)]
pub struct ListCommand {
    #[arg(short, long, default_value = "assets/config")]
    config: PathBuf,

    // CSV of plate,well rows scored positive by the screen
    #[arg(long, short)]
    positives: PathBuf,

    // Defaults to stdout
    #[arg(long, short)]
    output: Option<PathBuf>,
}

fn list(cmd: &ListCommand) -> Result<(), Error> {
    let settings = load_settings(&cmd.config)?;
    let packer = settings.packer()?;
    let mut repository = SqliteRepository::establish(settings.database_url()?)?;

    info!("Reading positives from {}", cmd.positives.display());
    let positives = read_wells(File::open(&cmd.positives)?)?;

    let packing = resequencing_list(&mut repository, &positives, settings.ordering, &packer)?;
    write_cherrypick_list(super::output(cmd.output.as_deref())?, &packing.assignments)
}

pub fn command(cmds: Commands) -> Result<(), Error> {
    match cmds {
        Commands::List(cmd) => list(&cmd),
    }
}
