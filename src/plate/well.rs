use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::PlateError;
use crate::plate::constants::FIRST_ROW;

lazy_static! {
    static ref WELL_REGEX: Regex = Regex::new(r"^([A-Z])(\d{1,2})$").unwrap();
}

/// A well position on a plate, e.g. `B05`.
///
/// Equality is positional only: a row letter and a 1-based column. Whether
/// the address fits a given plate is checked by [`PlateLayout`].
///
/// [`PlateLayout`]: crate::plate::PlateLayout
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct WellAddress {
    row: char,
    column: usize,
}

impl WellAddress {
    pub fn new(row: char, column: usize) -> Result<Self, PlateError> {
        if !row.is_ascii_uppercase() || column == 0 {
            return Err(PlateError::InvalidAddress(format!("{}{}", row, column)));
        }
        Ok(WellAddress { row, column })
    }

    pub fn row(&self) -> char {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// 0-based row index, `A` being 0.
    pub fn row_index(&self) -> usize {
        (self.row as u8 - FIRST_ROW as u8) as usize
    }

    pub(crate) fn from_indices(row_index: usize, column: usize) -> Self {
        WellAddress {
            row: (FIRST_ROW as u8 + row_index as u8) as char,
            column,
        }
    }
}

impl FromStr for WellAddress {
    type Err = PlateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = WELL_REGEX
            .captures(s.trim())
            .ok_or_else(|| PlateError::InvalidAddress(s.to_string()))?;

        let row = caps[1]
            .chars()
            .next()
            .ok_or_else(|| PlateError::InvalidAddress(s.to_string()))?;
        let column: usize = caps[2]
            .parse()
            .map_err(|_| PlateError::InvalidAddress(s.to_string()))?;

        WellAddress::new(row, column).map_err(|_| PlateError::InvalidAddress(s.to_string()))
    }
}

impl fmt::Display for WellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:02}", self.row, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_padded_and_unpadded_labels() {
        let padded: WellAddress = "B05".parse().unwrap();
        let unpadded: WellAddress = "B5".parse().unwrap();
        assert_eq!(padded, unpadded);
        assert_eq!(padded.row(), 'B');
        assert_eq!(padded.column(), 5);
        assert_eq!(padded.row_index(), 1);
    }

    #[test]
    fn displays_two_digit_column() {
        let well: WellAddress = "H1".parse().unwrap();
        assert_eq!(well.to_string(), "H01");
        let well: WellAddress = "C12".parse().unwrap();
        assert_eq!(well.to_string(), "C12");
    }

    #[test]
    fn rejects_malformed_labels() {
        for label in ["", "A", "a01", "A001", "A00", "01A", "AA1"] {
            assert_eq!(
                label.parse::<WellAddress>(),
                Err(PlateError::InvalidAddress(label.to_string())),
                "{label}"
            );
        }
    }

    #[test]
    fn orders_by_row_then_column() {
        let mut wells: Vec<WellAddress> = ["B01", "A12", "A02", "B10"]
            .iter()
            .map(|w| w.parse().unwrap())
            .collect();
        wells.sort();
        let labels: Vec<String> = wells.iter().map(|w| w.to_string()).collect();
        assert_eq!(labels, vec!["A02", "A12", "B01", "B10"]);
    }
}
