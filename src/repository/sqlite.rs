use std::collections::HashMap;

use diesel::prelude::*;
use tracing::{info, warn};

use crate::error::Error;
use crate::plate::{LibraryWell, WellAddress};
use crate::repository::models::*;
use crate::repository::{Repository, WellScores};
use crate::schema::*;
use crate::sequencing::{BlatHit, SequencingRecord};

pub struct SqliteRepository {
    connection: SqliteConnection,
}

impl SqliteRepository {
    pub fn establish(database_url: &str) -> Result<Self, Error> {
        let connection = SqliteConnection::establish(database_url)?;
        info!("Connected to {}", database_url);
        Ok(SqliteRepository { connection })
    }

    pub fn from_connection(connection: SqliteConnection) -> Self {
        SqliteRepository { connection }
    }

    fn load_hits(&mut self, sequencing_ids: Vec<i32>) -> Result<HashMap<i32, Vec<BlatHit>>, Error> {
        let rows: Vec<BlatResultRow> = library_sequencing_blat_results::table
            .filter(library_sequencing_blat_results::library_sequencing.eq_any(sequencing_ids))
            .order((
                library_sequencing_blat_results::library_sequencing.asc(),
                library_sequencing_blat_results::hit_rank.asc(),
            ))
            .select(BlatResultRow::as_select())
            .load(&mut self.connection)?;

        let mut hits: HashMap<i32, Vec<BlatHit>> = HashMap::new();
        for row in rows {
            let Some(rank) = u32::try_from(row.hit_rank).ok().filter(|rank| *rank >= 1) else {
                warn!("Skipping BLAT result {} with rank {}", row.id, row.hit_rank);
                continue;
            };
            hits.entry(row.library_sequencing).or_default().push(BlatHit {
                rank,
                clone_hit: row.clone_hit,
                e_value: row.e_value,
                bit_score: row.bit_score,
            });
        }

        Ok(hits)
    }
}

impl Repository for SqliteRepository {
    fn well_scores(&mut self) -> Result<Vec<WellScores>, Error> {
        let rows: Vec<(String, String, String, i32)> = secondary_scores::table
            .inner_join(library_wells::table)
            .order((library_wells::id.asc(), secondary_scores::id.asc()))
            .select((
                library_wells::id,
                library_wells::plate,
                library_wells::well,
                secondary_scores::score,
            ))
            .load(&mut self.connection)?;

        let mut all_scores: Vec<WellScores> = Vec::new();
        let mut current_id: Option<String> = None;

        for (id, plate, well, score) in rows {
            if current_id.as_deref() != Some(id.as_str()) {
                let well: WellAddress = well.parse()?;
                all_scores.push(WellScores {
                    well: LibraryWell::new(plate, well),
                    scores: Vec::new(),
                });
                current_id = Some(id);
            }
            if let Some(last) = all_scores.last_mut() {
                last.scores.push(score);
            }
        }

        info!("Loaded scores for {} library wells", all_scores.len());
        Ok(all_scores)
    }

    fn sequencing_for(&mut self, wells: &[LibraryWell]) -> Result<Vec<SequencingRecord>, Error> {
        let ids: Vec<String> = wells.iter().map(LibraryWell::id).collect();

        let well_rows: Vec<LibraryWellRow> = library_wells::table
            .filter(library_wells::id.eq_any(ids.clone()))
            .select(LibraryWellRow::as_select())
            .load(&mut self.connection)?;

        let intended: HashMap<String, Option<String>> = well_rows
            .into_iter()
            .map(|row| (row.id, row.intended_clone))
            .collect();

        let by_id: HashMap<String, &LibraryWell> = wells.iter().map(|w| (w.id(), w)).collect();
        if let Some(missing) = ids.iter().find(|id| !intended.contains_key(*id)) {
            return Err(Error::MissingWell(missing.clone()));
        }

        let sequencing_rows: Vec<SequencingRow> = library_sequencing::table
            .filter(library_sequencing::source_library_well.eq_any(ids))
            .order(library_sequencing::id.asc())
            .select(SequencingRow::as_select())
            .load(&mut self.connection)?;

        let mut hits = self.load_hits(sequencing_rows.iter().map(|row| row.id).collect())?;

        let mut records = Vec::with_capacity(sequencing_rows.len());
        for row in sequencing_rows {
            let Some(source_id) = row.source_library_well else {
                continue;
            };
            let Some(source) = by_id.get(&source_id) else {
                continue;
            };

            records.push(SequencingRecord {
                source: (*source).clone(),
                intended_clone: intended.get(&source_id).cloned().flatten(),
                quality_score: row.quality_score,
                crl: row.crl,
                hits: hits.remove(&row.id).unwrap_or_default(),
            });
        }

        info!(
            "Loaded {} sequencing records for {} library wells",
            records.len(),
            wells.len()
        );
        Ok(records)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use diesel::connection::SimpleConnection;

    pub(crate) const SCHEMA: &str = "
        CREATE TABLE library_wells (
            id TEXT PRIMARY KEY NOT NULL,
            plate TEXT NOT NULL,
            well TEXT NOT NULL,
            intended_clone TEXT
        );
        CREATE TABLE library_sequencing (
            id INTEGER PRIMARY KEY NOT NULL,
            source_library_well TEXT REFERENCES library_wells (id),
            quality_score INTEGER,
            crl INTEGER
        );
        CREATE TABLE library_sequencing_blat_results (
            id INTEGER PRIMARY KEY NOT NULL,
            library_sequencing INTEGER NOT NULL REFERENCES library_sequencing (id),
            clone_hit TEXT NOT NULL,
            e_value DOUBLE NOT NULL,
            bit_score INTEGER NOT NULL,
            hit_rank INTEGER NOT NULL
        );
        CREATE TABLE secondary_scores (
            id INTEGER PRIMARY KEY NOT NULL,
            library_well TEXT NOT NULL REFERENCES library_wells (id),
            score INTEGER NOT NULL
        );
    ";

    pub(crate) const FIXTURE: &str = "
        INSERT INTO library_wells VALUES
            ('1_A01', '1', 'A01', 'sjj_X'),
            ('1_A02', '1', 'A02', 'sjj_Y'),
            ('1_B05', '1', 'B05', 'sjj_Z'),
            ('2_A01', '2', 'A01', NULL);
        INSERT INTO library_sequencing VALUES
            (1, '1_A01', 45, 700),
            (2, '1_A02', 40, 650),
            (3, '1_B05', 12, 90),
            (4, '2_A01', 50, 800);
        INSERT INTO library_sequencing_blat_results VALUES
            (1, 1, 'sjj_X', 1e-100, 900, 1),
            (2, 2, 'sjj_Y', 1e-40, 400, 2),
            (3, 2, 'sjj_X', 1e-90, 800, 1),
            (4, 4, 'sjj_W', 1e-80, 700, 1);
        INSERT INTO secondary_scores VALUES
            (1, '1_A01', 3),
            (2, '1_A01', 2),
            (3, '1_A02', 0),
            (4, '1_B05', 3);
    ";

    pub(crate) fn repository() -> SqliteRepository {
        let mut connection = SqliteConnection::establish(":memory:").unwrap();
        connection.batch_execute(SCHEMA).unwrap();
        connection.batch_execute(FIXTURE).unwrap();
        SqliteRepository::from_connection(connection)
    }

    fn well(plate: &str, label: &str) -> LibraryWell {
        LibraryWell::new(plate, label.parse().unwrap())
    }

    #[test]
    fn groups_scores_by_well() {
        let scores = repository().well_scores().unwrap();
        assert_eq!(
            scores,
            vec![
                WellScores { well: well("1", "A01"), scores: vec![3, 2] },
                WellScores { well: well("1", "A02"), scores: vec![0] },
                WellScores { well: well("1", "B05"), scores: vec![3] },
            ]
        );
    }

    #[test]
    fn loads_records_with_ranked_hits() {
        let records = repository()
            .sequencing_for(&[well("1", "A02"), well("1", "B05")])
            .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].source, well("1", "A02"));
        assert_eq!(records[0].intended_clone.as_deref(), Some("sjj_Y"));
        let ranks: Vec<(u32, &str)> = records[0]
            .hits
            .iter()
            .map(|h| (h.rank, h.clone_hit.as_str()))
            .collect();
        assert_eq!(ranks, vec![(1, "sjj_X"), (2, "sjj_Y")]);

        assert!(records[1].hits.is_empty());
        assert!(!records[1].is_decent_quality());
    }

    #[test]
    fn missing_intended_clone_is_kept_as_none() {
        let records = repository().sequencing_for(&[well("2", "A01")]).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].intended_clone, None);
    }

    #[test]
    fn unknown_wells_are_reported() {
        match repository().sequencing_for(&[well("9", "H12")]) {
            Err(Error::MissingWell(id)) => assert_eq!(id, "9_H12"),
            other => panic!("unexpected result: {:?}", other.map(|r| r.len())),
        }
    }
}
