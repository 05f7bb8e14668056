//! Error types for the sum-of-products minimizer.
//!
//! Errors are organized by the concern that produces them (cube
//! construction, cube algebra, BLIF parsing), each with its own `Display`
//! + [`std::error::Error`] impl, and rolled up into a single crate-wide
//! [`Error`] via `From` conversions — the same shape the rest of the
//! crate's ancestry used for its source-level error enums.

use std::fmt;
use std::io;

/// Errors raised while constructing a [`Cube`](crate::cube::Cube).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    /// The bit-string's input word did not match the declared input arity.
    ArityMismatch {
        /// Number of input labels the cube was declared against.
        expected: usize,
        /// Number of bit characters actually found in the input word.
        found: usize,
    },
    /// A character outside `{0, 1, -}` appeared in an input word.
    InvalidInputBit {
        /// The offending character.
        character: char,
        /// Its position in the input word.
        position: usize,
    },
    /// A character outside `{0, 1}` appeared in the output bit.
    InvalidOutputBit {
        /// The offending character.
        character: char,
    },
    /// The bit-string did not split into an input word and an output bit.
    MalformedBitString {
        /// The raw string that failed to parse.
        text: String,
    },
}

impl fmt::Display for CubeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CubeError::ArityMismatch { expected, found } => write!(
                f,
                "cube input word has {found} bits but {expected} input labels were declared"
            ),
            CubeError::InvalidInputBit {
                character,
                position,
            } => write!(
                f,
                "invalid input bit '{character}' at position {position} (expected 0, 1, or -)"
            ),
            CubeError::InvalidOutputBit { character } => {
                write!(f, "invalid output bit '{character}' (expected 0 or 1)")
            }
            CubeError::MalformedBitString { text } => {
                write!(f, "malformed cube bit-string: '{text}'")
            }
        }
    }
}

impl std::error::Error for CubeError {}

/// Errors raised by the [star](crate::algebra::star)/[sharp](crate::algebra::sharp)
/// cube algebra.
///
/// These indicate a precondition violation (mismatched arity, or an
/// operand that already carries an internal `Epsilon`/`Null` bit) — per
/// spec they are implementation bugs in the caller, not recoverable input
/// errors, but they are still surfaced as a `Result` rather than a panic
/// so that callers driving the algebra from untrusted cube data can
/// report a clean diagnostic instead of aborting the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlgebraError {
    /// The two operands have a different number of input positions.
    ArityMismatch {
        /// Arity of the left-hand operand.
        lhs: usize,
        /// Arity of the right-hand operand.
        rhs: usize,
    },
    /// An operand carried an `Epsilon` or `Null` bit, which must never be
    /// persisted or fed back into the algebra.
    NonPersistedOperand,
}

impl fmt::Display for AlgebraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgebraError::ArityMismatch { lhs, rhs } => {
                write!(f, "cube algebra requires equal arity, got {lhs} and {rhs}")
            }
            AlgebraError::NonPersistedOperand => write!(
                f,
                "cube algebra operand contains a non-persisted (epsilon/null) bit"
            ),
        }
    }
}

impl std::error::Error for AlgebraError {}

/// Errors raised while parsing a BLIF model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlifError {
    /// An unrecognized `.directive` was encountered.
    UnknownDirective {
        /// 1-based line number of the offending line.
        line: usize,
        /// The directive token.
        directive: String,
    },
    /// A `.names` cube row did not match the gate's declared arity.
    RowLengthMismatch {
        /// 1-based line number of the offending line.
        line: usize,
        /// The raw row text.
        text: String,
    },
    /// A cube row contained bits outside the accepted alphabet.
    InvalidCubeRow {
        /// 1-based line number of the offending line.
        line: usize,
        /// Underlying cube construction error.
        source: CubeError,
    },
    /// A `.names` block had no corresponding `.model` to attach to.
    NamesBeforeModel {
        /// 1-based line number of the offending line.
        line: usize,
    },
}

impl fmt::Display for BlifError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlifError::UnknownDirective { line, directive } => {
                write!(f, "line {line}: unknown directive '{directive}'")
            }
            BlifError::RowLengthMismatch { line, text } => {
                write!(f, "line {line}: cube row '{text}' has the wrong length")
            }
            BlifError::InvalidCubeRow { line, source } => {
                write!(f, "line {line}: {source}")
            }
            BlifError::NamesBeforeModel { line } => {
                write!(f, "line {line}: '.names' appears before any '.model'")
            }
        }
    }
}

impl std::error::Error for BlifError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BlifError::InvalidCubeRow { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<CubeError> for io::Error {
    fn from(err: CubeError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}

impl From<BlifError> for io::Error {
    fn from(err: BlifError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}

/// Umbrella error for the crate's public, fallible entry points.
#[derive(Debug)]
pub enum Error {
    /// A cube failed to construct.
    Cube(CubeError),
    /// A cube-algebra precondition was violated.
    Algebra(AlgebraError),
    /// BLIF parsing failed.
    Blif(BlifError),
    /// An I/O error occurred while reading or writing a BLIF file.
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Cube(e) => write!(f, "{e}"),
            Error::Algebra(e) => write!(f, "{e}"),
            Error::Blif(e) => write!(f, "{e}"),
            Error::Io(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Cube(e) => Some(e),
            Error::Algebra(e) => Some(e),
            Error::Blif(e) => Some(e),
            Error::Io(e) => Some(e),
        }
    }
}

impl From<CubeError> for Error {
    fn from(err: CubeError) -> Self {
        Error::Cube(err)
    }
}

impl From<AlgebraError> for Error {
    fn from(err: AlgebraError) -> Self {
        Error::Algebra(err)
    }
}

impl From<BlifError> for Error {
    fn from(err: BlifError) -> Self {
        Error::Blif(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}
