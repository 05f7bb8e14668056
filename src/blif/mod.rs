//! BLIF (Berkeley Logic Interchange Format) I/O: the `.names`-gate
//! surface syntax this crate's core consumes and produces (spec §6).

mod parser;
mod writer;

pub use parser::parse_blif_str;
pub use writer::{to_blif_file, to_blif_string, write_blif};

use crate::error::Error;
use crate::model::Model;
use std::fs;
use std::path::Path;

/// Parse a BLIF file from disk into a [`Model`].
pub fn parse_blif_file<P: AsRef<Path>>(path: P) -> Result<Model, Error> {
    let text = fs::read_to_string(path)?;
    Ok(parse_blif_str(&text)?)
}
