//! Builds the resequencing cherrypick list.
//!
//! Wells that the screen scored positive are looked up in the sequencing
//! results. Every well whose top BLAT hit is not its intended clone is
//! sorted and packed onto new plates.

use tracing::info;

use crate::cherrypick::{Packer, Packing};
use crate::error::Error;
use crate::plate::{LibraryWell, PlateOrdering};
use crate::repository::{Repository, ScoringCriteria};
use crate::sequencing::{categorize, wells_to_resequence};

/// Library wells whose scores pass `criteria`.
pub fn positive_wells<R, C>(repository: &mut R, criteria: &C) -> Result<Vec<LibraryWell>, Error>
where
    R: Repository + ?Sized,
    C: ScoringCriteria + ?Sized,
{
    let positives: Vec<LibraryWell> = repository
        .well_scores()?
        .into_iter()
        .filter(|scored| criteria.passes(&scored.scores))
        .map(|scored| scored.well)
        .collect();

    info!("{} positive library wells", positives.len());
    Ok(positives)
}

pub fn resequencing_list<R>(
    repository: &mut R,
    positives: &[LibraryWell],
    ordering: PlateOrdering,
    packer: &Packer,
) -> Result<Packing, Error>
where
    R: Repository + ?Sized,
{
    let records = repository.sequencing_for(positives)?;
    let groups = categorize(&records)?;

    for (category, members) in &groups {
        info!("{}: {} sequencing records", category, members.len());
    }

    let wells = wells_to_resequence(&groups, ordering);
    info!("{} wells to resequence", wells.len());

    let packing = packer.pack(&wells)?;
    info!(
        "Packed {} wells onto {} destination plates",
        packing.assignments.len(),
        packing.plates.len()
    );

    Ok(packing)
}
