use diesel::prelude::*;

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::library_wells)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct LibraryWellRow {
    pub id: String,
    pub plate: String,
    pub well: String,
    pub intended_clone: Option<String>,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::library_sequencing)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SequencingRow {
    pub id: i32,
    pub source_library_well: Option<String>,
    pub quality_score: Option<i32>,
    pub crl: Option<i32>,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::library_sequencing_blat_results)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BlatResultRow {
    pub id: i32,
    pub library_sequencing: i32,
    pub clone_hit: String,
    pub e_value: f64,
    pub bit_score: i32,
    pub hit_rank: i32,
}
