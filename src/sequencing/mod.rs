pub mod classify;
pub mod models;

pub use classify::{categorize, classify, wells_to_resequence, Categorized};
pub use models::{BlatHit, Category, SequencingRecord};
