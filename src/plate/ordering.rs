use std::cmp::Ordering;

use strum_macros::{Display, EnumString};

use crate::plate::LibraryWell;

/// How cherrypick candidates are sorted.
///
/// `Lexicographic` compares wells by their `plate_well` id as plain strings,
/// so `10_A01` sorts before `1_A01`.
///
/// `NumericPrefix` splits plate names on `-`. Names whose first token is a
/// number come before all others and compare numerically (`2-A` before
/// `10-A`); the rest compare by that token as a string. Equal first tokens
/// then compare by the second token the same way, and any remaining tie by
/// the whole name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum PlateOrdering {
    #[default]
    Lexicographic,
    NumericPrefix,
}

/// Numbers first (by value), then words (by text).
fn token_key(token: &str) -> (bool, u64, &str) {
    let number = Some(token)
        .filter(|t| !t.is_empty() && t.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|t| t.parse::<u64>().ok());

    match number {
        Some(n) => (false, n, token),
        None => (true, 0, token),
    }
}

type PlateKey<'a> = ((bool, u64, &'a str), Option<(bool, u64, &'a str)>, &'a str);

fn numeric_prefix_key(name: &str) -> PlateKey<'_> {
    let mut tokens = name.split('-');
    let first = token_key(tokens.next().unwrap_or_default());
    let second = tokens.next().map(token_key);
    (first, second, name)
}

impl PlateOrdering {
    pub fn compare_plates(&self, a: &str, b: &str) -> Ordering {
        match self {
            PlateOrdering::Lexicographic => a.cmp(b),
            PlateOrdering::NumericPrefix => numeric_prefix_key(a).cmp(&numeric_prefix_key(b)),
        }
    }

    pub fn compare_wells(&self, a: &LibraryWell, b: &LibraryWell) -> Ordering {
        match self {
            PlateOrdering::Lexicographic => a.id().cmp(&b.id()),
            PlateOrdering::NumericPrefix => self
                .compare_plates(&a.plate, &b.plate)
                .then_with(|| a.well.cmp(&b.well)),
        }
    }
}
