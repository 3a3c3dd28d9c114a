//! Layered settings: `.env`, then the config file, then environment
//! variables (`DATABASE_URL`, `RESEQ_CHERRYPICK__CAPACITY`, ...).

use std::path::Path;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use dotenvy::dotenv;

use crate::cherrypick::packer::{Packer, DEFAULT_PLATE_PREFIX};
use crate::error::Error;
use crate::plate::constants::WELLS_96;
use crate::plate::{PlateLayout, PlateOrdering};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub database_url: Option<String>,
    pub capacity: usize,
    pub plate_wells: usize,
    pub plate_prefix: String,
    pub ordering: PlateOrdering,
}

impl Settings {
    pub fn database_url(&self) -> Result<&str, Error> {
        self.database_url
            .as_deref()
            .ok_or_else(|| Error::InvalidSetting {
                key: "database_url".to_string(),
                value: "<unset>".to_string(),
            })
    }

    pub fn packer(&self) -> Result<Packer, Error> {
        let layout = PlateLayout::from_capacity(self.plate_wells)?;
        Ok(Packer::with_layout(layout, self.capacity)?.with_prefix(self.plate_prefix.clone()))
    }
}

fn build(config_file: &str) -> Result<Config, Error> {
    let settings = ConfigBuilder::<DefaultState>::default()
        .set_default("cherrypick.capacity", WELLS_96 as i64)?
        .set_default("cherrypick.plate_wells", WELLS_96 as i64)?
        .set_default("cherrypick.plate_prefix", DEFAULT_PLATE_PREFIX)?
        .set_default("cherrypick.ordering", PlateOrdering::default().to_string())?
        .add_source(File::with_name(config_file))
        .add_source(Environment::default())
        .add_source(
            Environment::with_prefix("RESEQ")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings)
}

pub fn load_settings(path: &Path) -> Result<Settings, Error> {
    dotenv().ok();

    let config_file = path.to_str().ok_or_else(|| Error::InvalidSetting {
        key: "config".to_string(),
        value: path.display().to_string(),
    })?;
    let settings = build(config_file)?;

    let ordering = settings.get_string("cherrypick.ordering")?;
    let ordering: PlateOrdering = ordering.parse().map_err(|_| Error::InvalidSetting {
        key: "cherrypick.ordering".to_string(),
        value: ordering.clone(),
    })?;

    Ok(Settings {
        database_url: settings.get_string("database_url").ok(),
        capacity: settings.get("cherrypick.capacity")?,
        plate_wells: settings.get("cherrypick.plate_wells")?,
        plate_prefix: settings.get_string("cherrypick.plate_prefix")?,
        ordering,
    })
}
