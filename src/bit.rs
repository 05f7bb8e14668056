//! Ternary-valued bit symbols used by cubes.
//!
//! A [`Bit`] is the alphabet a cube position is drawn from. `On`/`Off`/`Dc`
//! are user-visible; `Epsilon` and `Null` only ever appear as transient
//! results of the [star/sharp](crate::algebra) cube algebra and must never
//! survive into a persisted cube.

use std::fmt;

/// A single ternary (or, internally, quinary) bit value.
///
/// `On`, `Off`, and `Dc` (don't-care) are the only values a well-formed,
/// persisted cube may contain. `Epsilon` and `Null` are produced by the
/// [`star`](crate::algebra::star) and [`sharp`](crate::algebra::sharp)
/// tables and are consumed before a result is returned to a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bit {
    /// Fixed at 1.
    On,
    /// Fixed at 0.
    Off,
    /// Don't-care: may be 0 or 1.
    Dc,
    /// Internal: "no disagreement, no information" result of sharp.
    Epsilon,
    /// Internal: "disagreement" result of star/sharp.
    Null,
}

impl Bit {
    /// `true` for the three values a persisted, user-visible cube may hold.
    pub fn is_persistable(self) -> bool {
        matches!(self, Bit::On | Bit::Off | Bit::Dc)
    }

    /// Parse a single PLA-style character (`0`, `1`, `-`) into a persistable bit.
    pub fn from_char(c: char) -> Option<Bit> {
        match c {
            '0' => Some(Bit::Off),
            '1' => Some(Bit::On),
            '-' => Some(Bit::Dc),
            _ => None,
        }
    }

    /// Render a persistable bit back to its PLA-style character.
    ///
    /// Panics if called on `Epsilon`/`Null` — those never reach serialization.
    pub fn to_char(self) -> char {
        match self {
            Bit::On => '1',
            Bit::Off => '0',
            Bit::Dc => '-',
            Bit::Epsilon | Bit::Null => {
                unreachable!("epsilon/null bits must not reach serialization")
            }
        }
    }

    /// The complement of a fixed bit (`On` <-> `Off`). Undefined on `Dc`,
    /// `Epsilon`, and `Null`.
    pub fn complement(self) -> Bit {
        match self {
            Bit::On => Bit::Off,
            Bit::Off => Bit::On,
            other => panic!("complement is only defined for On/Off, got {other:?}"),
        }
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bit::On => write!(f, "1"),
            Bit::Off => write!(f, "0"),
            Bit::Dc => write!(f, "-"),
            Bit::Epsilon => write!(f, "E"),
            Bit::Null => write!(f, "N"),
        }
    }
}
