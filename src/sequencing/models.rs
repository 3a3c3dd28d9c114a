use std::fmt;

use crate::plate::LibraryWell;

// Quality thresholds
pub const MIN_CRL: i32 = 400;
pub const MIN_QUALITY_SCORE: i32 = 30;

/// One BLAT hit of a sequencing read against the clone reference.
#[derive(Debug, Clone, PartialEq)]
pub struct BlatHit {
    /// 1 is the best hit.
    pub rank: u32,
    pub clone_hit: String,
    pub e_value: f64,
    pub bit_score: i32,
}

/// A single sequencing attempt of a library well.
///
/// `hits` are expected in ascending rank order, starting at 1.
#[derive(Debug, Clone, PartialEq)]
pub struct SequencingRecord {
    pub source: LibraryWell,
    pub intended_clone: Option<String>,
    pub quality_score: Option<i32>,
    /// Contiguous read length.
    pub crl: Option<i32>,
    pub hits: Vec<BlatHit>,
}

impl SequencingRecord {
    pub fn is_decent_quality(&self) -> bool {
        matches!(
            (self.crl, self.quality_score),
            (Some(crl), Some(quality)) if crl >= MIN_CRL && quality >= MIN_QUALITY_SCORE
        )
    }
}

/// Outcome of comparing a record's BLAT hits with its intended clone.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    NoHits,
    NoMatch,
    MatchedAtRank(u32),
}

impl Category {
    /// Anything but a top-ranked match is resequenced.
    pub fn needs_resequencing(&self) -> bool {
        match self {
            Category::NoHits | Category::NoMatch => true,
            Category::MatchedAtRank(rank) => *rank > 1,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::NoHits => write!(f, "no BLAT hits"),
            Category::NoMatch => write!(f, "no matching hit"),
            Category::MatchedAtRank(rank) => write!(f, "matched at rank {}", rank),
        }
    }
}
