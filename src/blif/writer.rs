//! BLIF serialization (spec §6).
//!
//! Grounded in the teacher's `PLAWriter` shape: a core `write_blif`
//! writing into any `Write`, with `to_blif_string`/`to_blif_file`
//! convenience wrappers over it.

use crate::model::Model;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write `model` to `writer` in BLIF text form: `.model`, `.inputs`,
/// `.outputs`, one `.names` block per gate, `.latch`/`.clock` lines
/// verbatim, then `.end`.
pub fn write_blif<W: Write>(model: &Model, writer: &mut W) -> io::Result<()> {
    writeln!(writer, ".model {}", model.name())?;

    write!(writer, ".inputs")?;
    for label in model.inputs() {
        write!(writer, " {label}")?;
    }
    writeln!(writer)?;

    write!(writer, ".outputs")?;
    for label in model.outputs() {
        write!(writer, " {label}")?;
    }
    writeln!(writer)?;

    for gate in model.gates() {
        write!(writer, ".names")?;
        for label in gate.inputs() {
            write!(writer, " {label}")?;
        }
        writeln!(writer, " {}", gate.output())?;

        for cube in gate.cover().iter() {
            let bits: String = cube.inputs().iter().map(|b| b.to_char()).collect();
            if bits.is_empty() {
                writeln!(writer, "1")?;
            } else {
                writeln!(writer, "{bits} 1")?;
            }
        }
    }

    for fields in model.latches() {
        writeln!(writer, ".latch {}", fields.join(" "))?;
    }
    for fields in model.clocks() {
        writeln!(writer, ".clock {}", fields.join(" "))?;
    }

    writeln!(writer, ".end")?;
    Ok(())
}

/// Serialize `model` to a BLIF string.
pub fn to_blif_string(model: &Model) -> io::Result<String> {
    let mut buffer = Vec::new();
    write_blif(model, &mut buffer)?;
    Ok(String::from_utf8(buffer).expect("BLIF output is always ASCII"))
}

/// Serialize `model` to a BLIF file at `path`.
pub fn to_blif_file<P: AsRef<Path>>(model: &Model, path: P) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_blif(model, &mut writer)?;
    writer.flush()
}
