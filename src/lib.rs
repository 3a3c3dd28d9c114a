pub mod cherrypick;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod plate;
pub mod repository;
pub mod schema;
pub mod sequencing;

pub use error::{Error, PlateError};
