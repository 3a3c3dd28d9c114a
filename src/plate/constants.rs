// Constants for plate addressing
//
// Standard microtiter plate
pub const WELLS_96: usize = 96;
pub const ROWS_96: usize = 8;
pub const COLUMNS_96: usize = 12;

// Row labels are single letters
pub const MAX_ROWS: usize = 26;
pub const FIRST_ROW: char = 'A';

// Imaging tiles, e.g. Tile000020.bmp
pub const TILE_PREFIX: &str = "Tile0000";
pub const TILE_SUFFIX: &str = ".bmp";
pub const TILE_MIN_DIGITS: usize = 2;
