pub mod packer;
pub mod report;

pub use packer::{pack, Assignment, DestinationPlate, Packer, Packing};
pub use report::{format_for_techs, read_wells, write_cherrypick_list, TechSummary};
