use std::fmt;

use crate::plate::well::WellAddress;

/// A physical sample position: a named source plate and a well on it.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct LibraryWell {
    pub plate: String,
    pub well: WellAddress,
}

impl LibraryWell {
    pub fn new(plate: impl Into<String>, well: WellAddress) -> Self {
        LibraryWell {
            plate: plate.into(),
            well,
        }
    }

    /// Database key, e.g. `II-3-B2_B05`.
    pub fn id(&self) -> String {
        format!("{}_{}", self.plate, self.well)
    }
}

impl fmt::Display for LibraryWell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}
