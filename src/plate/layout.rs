//! Row/column geometry of a plate and the two numbering schemes defined on it.
//!
//! The imaging hardware numbers wells in *snake* order: rows run top to
//! bottom and every odd row (B, D, F, ...) runs right to left. Cherrypick
//! destinations are numbered in plain *row-major* order starting at A01.
//! The two orders are never interchangeable.

use crate::error::PlateError;
use crate::plate::constants::{COLUMNS_96, MAX_ROWS, ROWS_96};
use crate::plate::well::WellAddress;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlateLayout {
    rows: usize,
    columns: usize,
}

pub const PLATE_96: PlateLayout = PlateLayout {
    rows: ROWS_96,
    columns: COLUMNS_96,
};

impl Default for PlateLayout {
    fn default() -> Self {
        PLATE_96
    }
}

impl PlateLayout {
    pub fn new(rows: usize, columns: usize) -> Result<Self, PlateError> {
        if rows == 0 || rows > MAX_ROWS || columns == 0 {
            return Err(PlateError::InvalidLayout { rows, columns });
        }
        Ok(PlateLayout { rows, columns })
    }

    /// Layout of a standard plate with the given well count (2:3 aspect ratio,
    /// e.g. 24, 96 or 384 wells).
    pub fn from_capacity(capacity: usize) -> Result<Self, PlateError> {
        (1..=MAX_ROWS)
            .find(|rows| 3 * rows * rows == 2 * capacity)
            .map(|rows| PlateLayout {
                rows,
                columns: capacity / rows,
            })
            .ok_or(PlateError::InvalidCapacity(capacity))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn capacity(&self) -> usize {
        self.rows * self.columns
    }

    pub fn contains(&self, well: &WellAddress) -> bool {
        well.row_index() < self.rows && well.column() >= 1 && well.column() <= self.columns
    }

    fn check(&self, well: &WellAddress) -> Result<(), PlateError> {
        if self.contains(well) {
            Ok(())
        } else {
            Err(PlateError::InvalidAddress(well.to_string()))
        }
    }

    fn check_index(&self, index: usize) -> Result<(), PlateError> {
        if index < self.capacity() {
            Ok(())
        } else {
            Err(PlateError::InvalidAddress(format!("index {}", index)))
        }
    }

    /// Rows scanned right to left by the imager.
    fn is_reversed_row(row_index: usize) -> bool {
        row_index % 2 == 1
    }

    /// 0-based snake position of `well`.
    pub fn well_to_snake_index(&self, well: &WellAddress) -> Result<usize, PlateError> {
        self.check(well)?;

        let row_index = well.row_index();
        let offset = if Self::is_reversed_row(row_index) {
            self.columns - well.column()
        } else {
            well.column() - 1
        };

        Ok(row_index * self.columns + offset)
    }

    pub fn snake_index_to_well(&self, index: usize) -> Result<WellAddress, PlateError> {
        self.check_index(index)?;

        let row_index = index / self.columns;
        let offset = index % self.columns;
        let column = if Self::is_reversed_row(row_index) {
            self.columns - offset
        } else {
            offset + 1
        };

        Ok(WellAddress::from_indices(row_index, column))
    }

    /// 0-based left-to-right, top-to-bottom position of `well`.
    pub fn well_to_row_major_index(&self, well: &WellAddress) -> Result<usize, PlateError> {
        self.check(well)?;
        Ok(well.row_index() * self.columns + well.column() - 1)
    }

    pub fn row_major_index_to_well(&self, index: usize) -> Result<WellAddress, PlateError> {
        self.check_index(index)?;
        Ok(WellAddress::from_indices(
            index / self.columns,
            index % self.columns + 1,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn well(label: &str) -> WellAddress {
        label.parse().unwrap()
    }

    #[test]
    fn standard_capacities() {
        assert_eq!(PlateLayout::from_capacity(96), Ok(PLATE_96));
        let plate_384 = PlateLayout::from_capacity(384).unwrap();
        assert_eq!((plate_384.rows(), plate_384.columns()), (16, 24));
        let plate_24 = PlateLayout::from_capacity(24).unwrap();
        assert_eq!((plate_24.rows(), plate_24.columns()), (4, 6));
    }

    #[test]
    fn nonstandard_capacities_are_rejected() {
        assert_eq!(
            PlateLayout::from_capacity(0),
            Err(PlateError::InvalidCapacity(0))
        );
        assert_eq!(
            PlateLayout::from_capacity(100),
            Err(PlateError::InvalidCapacity(100))
        );
        // 32 rows would need two-letter row labels
        assert_eq!(
            PlateLayout::from_capacity(1536),
            Err(PlateError::InvalidCapacity(1536))
        );
        assert!(PlateLayout::new(27, 2).is_err());
        assert!(PlateLayout::new(4, 0).is_err());
    }

    #[test]
    fn snake_order_reverses_odd_rows() {
        assert_eq!(PLATE_96.well_to_snake_index(&well("A01")), Ok(0));
        assert_eq!(PLATE_96.well_to_snake_index(&well("A12")), Ok(11));
        assert_eq!(PLATE_96.well_to_snake_index(&well("B12")), Ok(12));
        assert_eq!(PLATE_96.well_to_snake_index(&well("B01")), Ok(23));
        assert_eq!(PLATE_96.well_to_snake_index(&well("B05")), Ok(19));
        assert_eq!(PLATE_96.well_to_snake_index(&well("C02")), Ok(25));
        assert_eq!(PLATE_96.well_to_snake_index(&well("H01")), Ok(95));
    }

    #[test]
    fn snake_order_is_a_bijection() {
        for layout in [PLATE_96, PlateLayout::from_capacity(384).unwrap()] {
            let mut seen = vec![false; layout.capacity()];
            for index in 0..layout.capacity() {
                let w = layout.snake_index_to_well(index).unwrap();
                assert_eq!(layout.well_to_snake_index(&w), Ok(index));
                seen[index] = true;
            }
            assert!(seen.iter().all(|s| *s));
        }
    }

    #[test]
    fn row_major_order_does_not_snake() {
        assert_eq!(PLATE_96.row_major_index_to_well(0), Ok(well("A01")));
        assert_eq!(PLATE_96.row_major_index_to_well(12), Ok(well("B01")));
        assert_eq!(PLATE_96.row_major_index_to_well(23), Ok(well("B12")));
        assert_eq!(PLATE_96.well_to_row_major_index(&well("H12")), Ok(95));
        for index in 0..96 {
            let w = PLATE_96.row_major_index_to_well(index).unwrap();
            assert_eq!(PLATE_96.well_to_row_major_index(&w), Ok(index));
        }
    }

    #[test]
    fn out_of_bounds() {
        assert_eq!(
            PLATE_96.well_to_snake_index(&well("I01")),
            Err(PlateError::InvalidAddress("I01".to_string()))
        );
        assert_eq!(
            PLATE_96.well_to_snake_index(&well("A13")),
            Err(PlateError::InvalidAddress("A13".to_string()))
        );
        assert!(PLATE_96.snake_index_to_well(96).is_err());
        assert!(PLATE_96.row_major_index_to_well(96).is_err());
    }
}
