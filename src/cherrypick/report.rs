//! Cherrypick list CSV files.
//!
//! A cherrypick list has the header
//! `source_plate,source_well,destination_plate,destination_well`.

use std::collections::HashSet;
use std::io::{Read, Write};

use csv::{ReaderBuilder, Writer, WriterBuilder};
use tracing::info;

use crate::cherrypick::packer::Assignment;
use crate::error::{Error, PlateError};
use crate::plate::{LibraryWell, WellAddress};

pub const CHERRYPICK_HEADER: [&str; 4] = [
    "source_plate",
    "source_well",
    "destination_plate",
    "destination_well",
];

pub fn write_cherrypick_list<W: Write>(writer: W, assignments: &[Assignment]) -> Result<(), Error> {
    let mut wtr = Writer::from_writer(writer);
    wtr.write_record(CHERRYPICK_HEADER)?;

    for assignment in assignments {
        let source_well = assignment.source.well.to_string();
        let destination_well = assignment.destination_well.to_string();
        wtr.write_record([
            assignment.source.plate.as_str(),
            source_well.as_str(),
            assignment.destination_plate.as_str(),
            destination_well.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Reads `plate,well` rows (with a header line) in file order.
pub fn read_wells<R: Read>(reader: R) -> Result<Vec<LibraryWell>, Error> {
    let mut rdr = ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut wells = Vec::new();

    for result in rdr.records() {
        let record = result?;
        let plate = record
            .get(0)
            .filter(|plate| !plate.is_empty())
            .ok_or_else(|| PlateError::InvalidAddress(format!("missing plate: {:?}", record)))?;
        let well: WellAddress = record.get(1).unwrap_or_default().parse()?;
        wells.push(LibraryWell::new(plate, well));
    }

    Ok(wells)
}

/// Counts reported at the end of a formatted list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechSummary {
    pub destination_plates: usize,
    pub combos: usize,
}

/// Rewrites a cherrypick list for the bench: a blank line is inserted
/// wherever the (source plate, destination plate) pair changes, and the
/// number of destination plates and pairs is appended.
pub fn format_for_techs<R: Read, W: Write>(reader: R, writer: W) -> Result<TechSummary, Error> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut builder = WriterBuilder::new();
    builder.flexible(true);
    let mut wtr = builder.from_writer(writer);
    let mut records = rdr.records();

    if let Some(header) = records.next() {
        wtr.write_record(&header?)?;
    }

    let mut destination_plates = HashSet::new();
    let mut combos = 0;
    let mut previous: Option<(String, String)> = None;

    for result in records {
        let record = result?;
        let source_plate = record.get(0).unwrap_or_default().to_string();
        let destination_plate = record.get(2).unwrap_or_default().to_string();

        destination_plates.insert(destination_plate.clone());

        let current = (source_plate, destination_plate);
        if previous.as_ref() != Some(&current) {
            combos += 1;
            previous = Some(current);
            // Blank lines bypass the csv writer
            wtr.flush()?;
            let mut inner = wtr.into_inner().map_err(|e| e.into_error())?;
            writeln!(inner)?;
            wtr = builder.from_writer(inner);
        }

        wtr.write_record(&record)?;
    }

    let summary = TechSummary {
        destination_plates: destination_plates.len(),
        combos,
    };

    wtr.flush()?;
    let mut writer = wtr.into_inner().map_err(|e| e.into_error())?;
    write!(
        writer,
        "\n{} destination plates.\n\n{} origin/destination combos.\n",
        summary.destination_plates, summary.combos
    )?;
    writer.flush()?;

    info!(
        "Formatted cherrypick list: {} destination plates, {} combos",
        summary.destination_plates, summary.combos
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cherrypick::packer::Packer;

    fn well(plate: &str, label: &str) -> LibraryWell {
        LibraryWell::new(plate, label.parse().unwrap())
    }

    #[test]
    fn writes_one_row_per_assignment() {
        let wells = vec![well("1", "B5"), well("1", "C07"), well("2", "A01")];
        let packing = Packer::new(2).unwrap().pack(&wells).unwrap();

        let mut out = Vec::new();
        write_cherrypick_list(&mut out, &packing.assignments).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "source_plate,source_well,destination_plate,destination_well\n\
             1,B05,reseq-1,A01\n\
             1,C07,reseq-1,A02\n\
             2,A01,reseq-2,A01\n"
        );
    }

    #[test]
    fn reads_wells_in_file_order() {
        let input = "plate,well\n II-3 , B5\n1,A12\n";
        let wells = read_wells(input.as_bytes()).unwrap();
        assert_eq!(wells, vec![well("II-3", "B05"), well("1", "A12")]);
    }

    #[test]
    fn rejects_bad_well_labels() {
        let input = "plate,well\n1,A001\n";
        assert!(matches!(
            read_wells(input.as_bytes()),
            Err(Error::Plate(crate::error::PlateError::InvalidAddress(_)))
        ));
    }

    #[test]
    fn rejects_missing_plate() {
        for input in ["plate,well\n,A01\n", "plate,well\n   ,B02\n"] {
            assert!(
                matches!(
                    read_wells(input.as_bytes()),
                    Err(Error::Plate(PlateError::InvalidAddress(_)))
                ),
                "{input}"
            );
        }
    }

    #[test]
    fn quoted_plate_names_survive_formatting() {
        let wells = vec![well("Vidal, 3", "A01"), well("Vidal, 3", "A02")];
        let packing = Packer::new(96).unwrap().pack(&wells).unwrap();
        let mut list = Vec::new();
        write_cherrypick_list(&mut list, &packing.assignments).unwrap();

        let mut out = Vec::new();
        let summary = format_for_techs(list.as_slice(), &mut out).unwrap();
        assert_eq!(summary.combos, 1);

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("\n\n\"Vidal, 3\",A01,reseq-1,A01\n\"Vidal, 3\",A02,reseq-1,A02\n"));
    }

    #[test]
    fn blank_line_between_plate_pairs() {
        let input = "source_plate,source_well,destination_plate,destination_well\n\
                     1,A01,reseq-1,A01\n\
                     1,A02,reseq-1,A02\n\
                     2,A01,reseq-1,A03\n\
                     2,A05,reseq-2,A01\n";

        let mut out = Vec::new();
        let summary = format_for_techs(input.as_bytes(), &mut out).unwrap();

        assert_eq!(
            summary,
            TechSummary {
                destination_plates: 2,
                combos: 3
            }
        );
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "source_plate,source_well,destination_plate,destination_well\n\
             \n\
             1,A01,reseq-1,A01\n\
             1,A02,reseq-1,A02\n\
             \n\
             2,A01,reseq-1,A03\n\
             \n\
             2,A05,reseq-2,A01\n\
             \n\
             2 destination plates.\n\
             \n\
             3 origin/destination combos.\n"
        );
    }
}
