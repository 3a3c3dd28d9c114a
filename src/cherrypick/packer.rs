//! Packs wells selected for resequencing onto fresh destination plates.
//!
//! Candidates keep the order they are given in. The first `capacity` of them
//! fill destination plate 1 from A01 onward in row-major order, the next
//! `capacity` fill plate 2, and so on. Destination addressing never uses the
//! imager's snake order.

use crate::error::PlateError;
use crate::plate::{LibraryWell, PlateLayout, WellAddress, PLATE_96};

pub const DEFAULT_PLATE_PREFIX: &str = "reseq-";

/// A plate created by one packing run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationPlate {
    pub name: String,
    pub layout: PlateLayout,
    pub occupancy: usize,
}

/// Where one source well goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub source: LibraryWell,
    pub destination_plate: String,
    pub destination_well: WellAddress,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Packing {
    pub plates: Vec<DestinationPlate>,
    pub assignments: Vec<Assignment>,
}

impl Packing {
    pub fn into_assignments(self) -> Vec<Assignment> {
        self.assignments
    }
}

#[derive(Debug, Clone)]
pub struct Packer {
    layout: PlateLayout,
    capacity: usize,
    prefix: String,
}

impl Packer {
    /// Packer filling at most `capacity` wells of each 96-well plate.
    pub fn new(capacity: usize) -> Result<Self, PlateError> {
        Self::with_layout(PLATE_96, capacity)
    }

    pub fn with_layout(layout: PlateLayout, capacity: usize) -> Result<Self, PlateError> {
        if capacity == 0 || capacity > layout.capacity() {
            return Err(PlateError::InvalidCapacity(capacity));
        }
        Ok(Packer {
            layout,
            capacity,
            prefix: DEFAULT_PLATE_PREFIX.to_string(),
        })
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Name of the `number`th (1-based) destination plate.
    pub fn plate_name(&self, number: usize) -> String {
        format!("{}{}", self.prefix, number)
    }

    pub fn pack(&self, candidates: &[LibraryWell]) -> Result<Packing, PlateError> {
        let mut packing = Packing::default();

        for (plate_index, chunk) in candidates.chunks(self.capacity).enumerate() {
            let name = self.plate_name(plate_index + 1);

            for (well_index, source) in chunk.iter().enumerate() {
                packing.assignments.push(Assignment {
                    source: source.clone(),
                    destination_plate: name.clone(),
                    destination_well: self.layout.row_major_index_to_well(well_index)?,
                });
            }

            packing.plates.push(DestinationPlate {
                name,
                layout: self.layout,
                occupancy: chunk.len(),
            });
        }

        Ok(packing)
    }
}

/// Packs `candidates` onto 96-well plates holding at most `capacity` each.
pub fn pack(candidates: &[LibraryWell], capacity: usize) -> Result<Vec<Assignment>, PlateError> {
    Packer::new(capacity)?
        .pack(candidates)
        .map(Packing::into_assignments)
}
