use std::collections::BTreeMap;

use rayon::prelude::*;

use crate::error::Error;
use crate::plate::ordering::PlateOrdering;
use crate::plate::LibraryWell;
use crate::sequencing::models::{Category, SequencingRecord};

/// Records grouped by category; within a group, input order is kept.
pub type Categorized<'a> = BTreeMap<Category, Vec<&'a SequencingRecord>>;

/// Classifies `record` against the clone it was expected to contain.
///
/// Hits are scanned in their declared order and the first hit naming
/// `expected` decides the rank. Duplicate ranks are not rejected: the
/// first one listed wins.
pub fn classify(record: &SequencingRecord, expected: &str) -> Category {
    if record.hits.is_empty() {
        return Category::NoHits;
    }

    record
        .hits
        .iter()
        .find(|hit| hit.clone_hit == expected)
        .map(|hit| Category::MatchedAtRank(hit.rank))
        .unwrap_or(Category::NoMatch)
}

/// Classifies every record against its own intended clone.
pub fn categorize(records: &[SequencingRecord]) -> Result<Categorized<'_>, Error> {
    let categories = records
        .par_iter()
        .map(|record| {
            let expected = record
                .intended_clone
                .as_deref()
                .ok_or_else(|| Error::UnresolvedIdentity(record.source.id()))?;
            Ok(classify(record, expected))
        })
        .collect::<Result<Vec<Category>, Error>>()?;

    let mut groups = Categorized::new();
    for (category, record) in categories.into_iter().zip(records) {
        groups.entry(category).or_default().push(record);
    }

    Ok(groups)
}

/// Source wells of every record whose category calls for resequencing,
/// sorted with `ordering`.
pub fn wells_to_resequence(groups: &Categorized<'_>, ordering: PlateOrdering) -> Vec<LibraryWell> {
    let mut wells: Vec<LibraryWell> = groups
        .iter()
        .filter(|(category, _)| category.needs_resequencing())
        .flat_map(|(_, records)| records.iter().map(|record| record.source.clone()))
        .collect();

    wells.sort_by(|a, b| ordering.compare_wells(a, b));
    wells
}
