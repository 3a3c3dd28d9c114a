//! Where library wells, screen scores and sequencing results come from.

pub mod models;
pub mod sqlite;

use crate::error::Error;
use crate::plate::LibraryWell;
use crate::sequencing::SequencingRecord;

pub use sqlite::SqliteRepository;

/// Secondary screen scores recorded for one library well.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WellScores {
    pub well: LibraryWell,
    pub scores: Vec<i32>,
}

pub trait Repository {
    fn well_scores(&mut self) -> Result<Vec<WellScores>, Error>;

    /// Sequencing records of `wells`, each with its hits in rank order and
    /// the intended clone of its source well.
    fn sequencing_for(&mut self, wells: &[LibraryWell]) -> Result<Vec<SequencingRecord>, Error>;
}

/// Pass/fail decision over a well's scores, supplied by the caller.
pub trait ScoringCriteria {
    fn passes(&self, scores: &[i32]) -> bool;
}

impl<F> ScoringCriteria for F
where
    F: Fn(&[i32]) -> bool,
{
    fn passes(&self, scores: &[i32]) -> bool {
        self(scores)
    }
}
