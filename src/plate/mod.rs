pub mod constants;
pub mod layout;
pub mod library_well;
pub mod ordering;
pub mod tile;
pub mod well;

pub use layout::{PlateLayout, PLATE_96};
pub use library_well::LibraryWell;
pub use ordering::PlateOrdering;
pub use tile::{
    index_to_tile, index_to_well, tile_to_index, tile_to_well, well_to_index, well_to_tile, Tile,
};
pub use well::WellAddress;
