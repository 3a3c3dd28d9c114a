use clap::{Parser, Subcommand};
use tracing::debug;

use crate::error::Error;
use crate::plate::{PlateLayout, Tile, WellAddress};

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    #[command(name = "well-to-tile")]
    WellToTile(WellToTileCommand),
    #[command(name = "tile-to-well")]
    TileToWell(TileToWellCommand),
}

#[derive(Parser, Debug, Clone)]
pub struct WellToTileCommand {
    // Well labels, e.g. B05
    #[arg(required = true)]
    wells: Vec<String>,

    // Imaged plate size
    #[arg(long, default_value = "96")]
    plate_wells: usize,
}

#[derive(Parser, Debug, Clone)]
pub struct TileToWellCommand {
    // Tile filenames, e.g. Tile000020.bmp
    #[arg(required = true)]
    tiles: Vec<String>,

    #[arg(long, default_value = "96")]
    plate_wells: usize,
}

pub fn command(cmds: Commands) -> Result<(), Error> {
    match cmds {
        Commands::WellToTile(cmd) => {
            let layout = PlateLayout::from_capacity(cmd.plate_wells)?;
            debug!("Converting {} wells on a {}-well plate", cmd.wells.len(), cmd.plate_wells);

            for label in &cmd.wells {
                let well: WellAddress = label.parse()?;
                println!("{}\t{}", well, layout.well_to_tile(&well)?);
            }
        }
        Commands::TileToWell(cmd) => {
            let layout = PlateLayout::from_capacity(cmd.plate_wells)?;
            debug!("Converting {} tiles on a {}-well plate", cmd.tiles.len(), cmd.plate_wells);

            for name in &cmd.tiles {
                let tile: Tile = name.parse()?;
                println!("{}\t{}", tile, layout.tile_to_well(&tile)?);
            }
        }
    }
    Ok(())
}
