//! Cube (implicant) representation and its primitive operations.
//!
//! A [`Cube`] is an ordered sequence of input [`Bit`]s plus a single output
//! bit, representing a product term over a gate's ON-set. Cubes are
//! value-like: equality and hashing are derived on the bit sequence alone,
//! so renaming a gate's input labels never changes which cubes compare
//! equal (labels live on [`Gate`](crate::model::Gate), not on `Cube`).

use crate::bit::Bit;
use crate::error::CubeError;
use std::collections::BTreeSet;
use std::sync::Arc;

/// A product term: a sequence of input bits plus one output bit.
///
/// A non-null cube's input bits are always in `{On, Off, Dc}`; its output
/// bit is always `On` (cubes model ON-set members, per the BLIF `.names`
/// convention). A cube flagged `null` is the distinguished empty cube
/// produced by [`sharp`](crate::algebra::sharp) when it subtracts away an
/// entire operand — it covers no minterms and must be filtered out before
/// it reaches a [`Cover`](crate::cover::Cover).
#[derive(Debug, Clone)]
pub struct Cube {
    inputs: Arc<[Bit]>,
    output: Bit,
    null: bool,
}

impl Cube {
    /// Build a cube from a "bits output" string, e.g. `"0111 1"`, or, for a
    /// constant (zero-input) gate, a single output-bit token, e.g. `"1"`.
    ///
    /// `input_labels` is used only to check arity; the cube itself does not
    /// retain labels.
    pub fn parse(input_labels_len: usize, bit_string: &str) -> Result<Cube, CubeError> {
        let tokens: Vec<&str> = bit_string.split_whitespace().collect();
        let (input_word, output_tok) = match tokens.as_slice() {
            [bits, out] => (*bits, *out),
            [out] if input_labels_len == 0 => ("", *out),
            _ => {
                return Err(CubeError::MalformedBitString {
                    text: bit_string.to_string(),
                })
            }
        };

        if input_word.len() != input_labels_len {
            return Err(CubeError::ArityMismatch {
                expected: input_labels_len,
                found: input_word.len(),
            });
        }

        let mut inputs = Vec::with_capacity(input_word.len());
        for (position, c) in input_word.chars().enumerate() {
            let bit = Bit::from_char(c).ok_or(CubeError::InvalidInputBit {
                character: c,
                position,
            })?;
            inputs.push(bit);
        }

        let output = match output_tok {
            "1" => Bit::On,
            "0" => Bit::Off,
            other => {
                let character = other.chars().next().unwrap_or('?');
                return Err(CubeError::InvalidOutputBit { character });
            }
        };

        Ok(Cube {
            inputs: inputs.into(),
            output,
            null: false,
        })
    }

    /// Build a cube directly from already-validated bits.
    pub fn new(inputs: &[Bit], output: Bit) -> Cube {
        debug_assert!(
            inputs.iter().all(|b| b.is_persistable()),
            "Cube::new requires persistable input bits, got {inputs:?}"
        );
        Cube {
            inputs: inputs.into(),
            output,
            null: false,
        }
    }

    /// The distinguished empty cube: covers no minterms, has no defined cost.
    pub fn null_cube() -> Cube {
        Cube {
            inputs: Arc::from([]),
            output: Bit::Null,
            null: true,
        }
    }

    /// Input bits of this cube. Empty for a null cube.
    pub fn inputs(&self) -> &[Bit] {
        &self.inputs
    }

    /// The output bit (always `On` for a non-null, user-visible cube).
    pub fn output(&self) -> Bit {
        self.output
    }

    /// Number of input positions.
    pub fn arity(&self) -> usize {
        self.inputs.len()
    }

    /// `true` if this is the distinguished empty cube.
    pub fn is_null(&self) -> bool {
        self.null
    }

    /// `true` if `self` generalizes `other`: at every position, either the
    /// bits are equal or `self`'s bit is a don't-care. The output bit is
    /// not compared.
    ///
    /// Panics if the two cubes have different arity (a caller invariant:
    /// covers never mix cubes of different arity).
    pub fn covers(&self, other: &Cube) -> bool {
        assert_eq!(
            self.arity(),
            other.arity(),
            "covers() requires equal arity"
        );
        self.inputs
            .iter()
            .zip(other.inputs.iter())
            .all(|(&a, &b)| a == b || a == Bit::Dc)
    }

    /// The set of minterms this cube expands to: every don't-care position
    /// is expanded to both 0 and 1. Bit ordering is big-endian — the
    /// leftmost input bit is the most-significant digit of the minterm.
    ///
    /// A cube with `k` don't-cares yields `2^k` minterms. Must not be
    /// called on a null cube.
    pub fn minterms(&self) -> BTreeSet<u64> {
        debug_assert!(!self.null, "minterms() is undefined on a null cube");
        let mut out = BTreeSet::new();
        let n = self.inputs.len();
        let mut stack = vec![(0usize, 0u64)];
        while let Some((i, acc)) = stack.pop() {
            if i == n {
                out.insert(acc);
                continue;
            }
            let shifted = acc << 1;
            match self.inputs[i] {
                Bit::Off => stack.push((i + 1, shifted)),
                Bit::On => stack.push((i + 1, shifted | 1)),
                Bit::Dc => {
                    stack.push((i + 1, shifted));
                    stack.push((i + 1, shifted | 1));
                }
                Bit::Epsilon | Bit::Null => {
                    unreachable!("minterms() requires a persisted cube")
                }
            }
        }
        out
    }

    /// Literal count: arity minus the number of don't-care positions. Must
    /// not be called on a null cube.
    pub fn cost(&self) -> usize {
        debug_assert!(!self.null, "cost() is undefined on a null cube");
        self.inputs.iter().filter(|&&b| b != Bit::Dc).count()
    }

    /// A string key that sorts cubes lexicographically on their input-bit
    /// string, for the canonical, reproducible iteration order the spec
    /// calls for (§9: "Canonicalize by sorting cubes lexicographically on
    /// their input-bit string when snapshotting for iteration").
    pub fn sort_key(&self) -> String {
        self.inputs.iter().map(|b| b.to_char()).collect()
    }
}

impl PartialEq for Cube {
    fn eq(&self, other: &Self) -> bool {
        if self.null || other.null {
            return self.null == other.null;
        }
        self.inputs == other.inputs && self.output == other.output
    }
}

impl Eq for Cube {}

impl std::hash::Hash for Cube {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.null.hash(state);
        if !self.null {
            self.inputs.hash(state);
            self.output.hash(state);
        }
    }
}
