//! BLIF parsing: preprocessor plus directive dispatch (spec §6).

use crate::cover::Cover;
use crate::cube::Cube;
use crate::error::BlifError;
use crate::model::{Gate, Model};
use std::sync::Arc;

/// One preprocessed logical line paired with the 1-based physical line
/// number it started on, for error reporting.
struct LogicalLine {
    line: usize,
    text: String,
}

/// Join backslash continuations, strip comments, and drop blank lines
/// (spec §6 preprocessor, property 10).
///
/// A trailing `\` joins the next physical line with a single space after
/// stripping the backslash; an unescaped `#` discards everything from
/// itself to end-of-line.
fn preprocess(source: &str) -> Vec<LogicalLine> {
    let mut out = Vec::new();
    let mut pending: Option<LogicalLine> = None;

    for (idx, raw) in source.lines().enumerate() {
        let line_no = idx + 1;
        let without_comment = match raw.find('#') {
            Some(pos) => &raw[..pos],
            None => raw,
        };
        let trimmed = without_comment.trim_end();

        let (body, continues) = match trimmed.strip_suffix('\\') {
            Some(rest) => (rest, true),
            None => (trimmed, false),
        };

        match &mut pending {
            Some(acc) => {
                if !acc.text.is_empty() && !body.is_empty() {
                    acc.text.push(' ');
                }
                acc.text.push_str(body.trim());
            }
            None => {
                pending = Some(LogicalLine {
                    line: line_no,
                    text: body.trim().to_string(),
                });
            }
        }

        if !continues {
            let finished = pending.take().unwrap();
            if !finished.text.is_empty() {
                out.push(finished);
            }
        }
    }
    if let Some(finished) = pending {
        if !finished.text.is_empty() {
            out.push(finished);
        }
    }
    out
}

struct PendingGate {
    inputs: Vec<Arc<str>>,
    output: Arc<str>,
    rows: Vec<(usize, String)>,
}

fn finish_gate(pending: PendingGate) -> Result<Gate, BlifError> {
    let mut cover = Cover::new();
    for (line, row) in &pending.rows {
        let cube =
            Cube::parse(pending.inputs.len(), row).map_err(|source| BlifError::InvalidCubeRow {
                line: *line,
                source,
            })?;
        // Only ON-set rows become cover members (spec §3: a user-visible
        // cube's output bit is always On). An explicit OFF-set row
        // (obit 0) is accepted syntax but carries no ON-set information
        // this engine tracks (don't-care/off-set handling is a non-goal).
        if cube.output() == crate::bit::Bit::On {
            cover.insert(cube);
        }
    }
    Ok(Gate::new(pending.inputs, pending.output, cover))
}

/// Parse a full BLIF document into a [`Model`].
pub fn parse_blif_str(source: &str) -> Result<Model, BlifError> {
    let lines = preprocess(source);

    let mut name: Option<Arc<str>> = None;
    let mut inputs: Vec<Arc<str>> = Vec::new();
    let mut outputs: Vec<Arc<str>> = Vec::new();
    let mut gates: Vec<Gate> = Vec::new();
    let mut latches: Vec<Vec<String>> = Vec::new();
    let mut clocks: Vec<Vec<String>> = Vec::new();
    let mut current_gate: Option<PendingGate> = None;

    macro_rules! flush_gate {
        () => {
            if let Some(pending) = current_gate.take() {
                gates.push(finish_gate(pending)?);
            }
        };
    }

    for LogicalLine { line, text } in lines {
        let mut tokens = text.split_whitespace();
        let directive = tokens.next().unwrap_or("");

        if !directive.starts_with('.') {
            // Cube row belonging to the current .names block.
            let pending = current_gate
                .as_mut()
                .ok_or(BlifError::NamesBeforeModel { line })?;
            pending.rows.push((line, text.clone()));
            continue;
        }

        match directive {
            ".model" => {
                flush_gate!();
                name = tokens.next().map(Arc::from);
            }
            ".inputs" => {
                flush_gate!();
                inputs.extend(tokens.map(Arc::from));
            }
            ".outputs" => {
                flush_gate!();
                outputs.extend(tokens.map(Arc::from));
            }
            ".names" => {
                flush_gate!();
                let fields: Vec<Arc<str>> = tokens.map(Arc::from).collect();
                let output = fields
                    .last()
                    .cloned()
                    .ok_or(BlifError::RowLengthMismatch {
                        line,
                        text: text.clone(),
                    })?;
                let gate_inputs = fields[..fields.len() - 1].to_vec();
                current_gate = Some(PendingGate {
                    inputs: gate_inputs,
                    output,
                    rows: Vec::new(),
                });
            }
            ".latch" => {
                flush_gate!();
                latches.push(tokens.map(str::to_string).collect());
            }
            ".clock" => {
                flush_gate!();
                clocks.push(tokens.map(str::to_string).collect());
            }
            ".end" => {
                flush_gate!();
                break;
            }
            other => {
                return Err(BlifError::UnknownDirective {
                    line,
                    directive: other.to_string(),
                })
            }
        }
    }
    flush_gate!();

    let mut model = Model::new(
        name.unwrap_or_else(|| Arc::from("")),
        inputs,
        outputs,
        gates,
    );
    for fields in latches {
        model.push_latch(fields);
    }
    for fields in clocks {
        model.push_clock(fields);
    }
    Ok(model)
}
