use std::fs::File;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

use crate::cherrypick::packer::DEFAULT_PLATE_PREFIX;
use crate::cherrypick::{format_for_techs, read_wells, write_cherrypick_list, Packer};
use crate::error::Error;
use crate::plate::PlateLayout;

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Assign destination plates and wells to a list of candidates
    Pack(PackCommand),
    /// Add blank lines where the bench has to swap plates
    Format(FormatCommand),
}

#[derive(Parser, Debug, Clone)]
pub struct PackCommand {
    // CSV of plate,well rows, packed in file order
    #[arg()]
    candidates: PathBuf,

    // Wells filled per destination plate
    #[arg(long, short, default_value = "96")]
    capacity: usize,

    #[arg(long, default_value = "96")]
    plate_wells: usize,

    #[arg(long, default_value = DEFAULT_PLATE_PREFIX)]
    prefix: String,

    #[arg(long, short)]
    output: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct FormatCommand {
    // source_plate,source_well,destination_plate,destination_well
    #[arg()]
    cherrypick_list: PathBuf,

    #[arg(long, short)]
    output: Option<PathBuf>,
}

pub fn command(cmds: Commands) -> Result<(), Error> {
    match cmds {
        Commands::Pack(cmd) => {
            let layout = PlateLayout::from_capacity(cmd.plate_wells)?;
            let packer = Packer::with_layout(layout, cmd.capacity)?.with_prefix(cmd.prefix);

            let candidates = read_wells(File::open(&cmd.candidates)?)?;
            let packing = packer.pack(&candidates)?;
            info!(
                "Packed {} candidates onto {} plates",
                packing.assignments.len(),
                packing.plates.len()
            );

            write_cherrypick_list(super::output(cmd.output.as_deref())?, &packing.assignments)
        }
        Commands::Format(cmd) => {
            let input = File::open(&cmd.cherrypick_list)?;
            format_for_techs(input, super::output(cmd.output.as_deref())?)?;
            Ok(())
        }
    }
}
