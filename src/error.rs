use thiserror::Error;

/// Failures of the plate coordinate algebra and the packer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlateError {
    #[error("Invalid well address: {0}")]
    InvalidAddress(String),

    #[error("Invalid tile format: {0}")]
    InvalidFormat(String),

    #[error("Invalid capacity: {0}")]
    InvalidCapacity(usize),

    #[error("Invalid plate layout: {rows} rows x {columns} columns")]
    InvalidLayout { rows: usize, columns: usize },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Plate(#[from] PlateError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] diesel::result::Error),

    #[error("Database connection error: {0}")]
    Connection(#[from] diesel::ConnectionError),

    #[error("No intended clone for library well {0}")]
    UnresolvedIdentity(String),

    #[error("Unknown library well {0}")]
    MissingWell(String),

    #[error("Invalid setting {key}: {value}")]
    InvalidSetting { key: String, value: String },
}
