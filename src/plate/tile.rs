//! Imaging tile filenames and the 96-well conversions between wells,
//! snake positions and tiles.
//!
//! A tile is named after its 1-based snake position: well `B05` is snake
//! position 19 and was imaged as `Tile000020.bmp`. Archived image names
//! depend on this format staying bit-exact.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::PlateError;
use crate::plate::constants::{TILE_MIN_DIGITS, TILE_PREFIX, TILE_SUFFIX};
use crate::plate::layout::{PlateLayout, PLATE_96};
use crate::plate::well::WellAddress;

lazy_static! {
    static ref TILE_REGEX: Regex = Regex::new(r"^Tile0000(\d{2,})\.bmp$").unwrap();
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Tile {
    number: usize,
}

impl Tile {
    pub fn from_index(index: usize) -> Result<Self, PlateError> {
        let number = index
            .checked_add(1)
            .ok_or_else(|| PlateError::InvalidAddress(format!("index {}", index)))?;
        Ok(Tile { number })
    }

    /// 0-based snake position.
    pub fn index(&self) -> usize {
        self.number - 1
    }
}

impl FromStr for Tile {
    type Err = PlateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PlateError::InvalidFormat(s.to_string());

        let caps = TILE_REGEX.captures(s).ok_or_else(invalid)?;
        let digits = &caps[1];

        // Only the two-digit minimum may be zero-padded
        if digits.len() > TILE_MIN_DIGITS && digits.starts_with('0') {
            return Err(invalid());
        }

        let number: usize = digits.parse().map_err(|_| invalid())?;
        if number == 0 {
            return Err(invalid());
        }

        Ok(Tile { number })
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{:0width$}{}",
            TILE_PREFIX,
            self.number,
            TILE_SUFFIX,
            width = TILE_MIN_DIGITS
        )
    }
}

impl PlateLayout {
    pub fn well_to_tile(&self, well: &WellAddress) -> Result<Tile, PlateError> {
        self.well_to_snake_index(well).and_then(Tile::from_index)
    }

    pub fn tile_to_well(&self, tile: &Tile) -> Result<WellAddress, PlateError> {
        self.snake_index_to_well(tile.index())
    }
}

pub fn well_to_index(well: &WellAddress) -> Result<usize, PlateError> {
    PLATE_96.well_to_snake_index(well)
}

pub fn index_to_well(index: usize) -> Result<WellAddress, PlateError> {
    PLATE_96.snake_index_to_well(index)
}

pub fn index_to_tile(index: usize) -> Result<Tile, PlateError> {
    Tile::from_index(index)
}

pub fn tile_to_index(tile: &str) -> Result<usize, PlateError> {
    tile.parse::<Tile>().map(|t| t.index())
}

pub fn well_to_tile(well: &WellAddress) -> Result<Tile, PlateError> {
    PLATE_96.well_to_tile(well)
}

pub fn tile_to_well(tile: &str) -> Result<WellAddress, PlateError> {
    PLATE_96.tile_to_well(&tile.parse()?)
}
