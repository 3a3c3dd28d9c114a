pub mod cherrypick;
pub mod resequence;
pub mod tile;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::Error;

/// `path` if given, stdout otherwise.
pub(crate) fn output(path: Option<&Path>) -> Result<Box<dyn Write>, Error> {
    match path {
        Some(path) => Ok(Box::new(BufWriter::new(File::create(path)?))),
        None => Ok(Box::new(io::stdout().lock())),
    }
}
