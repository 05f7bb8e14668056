//! A BLIF logic model: a named collection of gates over shared primary
//! inputs/outputs, plus whatever latches and clock declarations it carries
//! through unminimized (spec §6).

use crate::cover::Cover;
use crate::optimize::optimize;
use std::sync::Arc;

/// A single `.names` gate: its input/output labels plus its ON-set cover.
///
/// Labels live here, not on [`Cube`](crate::cube::Cube) — renaming a
/// gate's inputs never changes which cubes compare equal.
#[derive(Debug, Clone)]
pub struct Gate {
    inputs: Vec<Arc<str>>,
    output: Arc<str>,
    cover: Cover,
}

impl Gate {
    /// Build a gate from its labels and cover. Panics if `cover` holds a
    /// cube whose arity does not match `inputs.len()` — a caller
    /// invariant enforced by the BLIF parser at construction time.
    pub fn new(inputs: Vec<Arc<str>>, output: Arc<str>, cover: Cover) -> Gate {
        for cube in cover.iter() {
            assert_eq!(
                cube.arity(),
                inputs.len(),
                "gate '{output}' cube arity does not match declared input count"
            );
        }
        Gate {
            inputs,
            output,
            cover,
        }
    }

    /// This gate's input labels, in declaration order.
    pub fn inputs(&self) -> &[Arc<str>] {
        &self.inputs
    }

    /// This gate's output label.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// This gate's ON-set cover.
    pub fn cover(&self) -> &Cover {
        &self.cover
    }

    /// Minimize this gate's cover in place, preserving its ON-set.
    pub fn optimize(&mut self) {
        self.cover = optimize(&self.cover);
    }

    /// Minimize this gate's cover, returning a new gate with the same
    /// labels and an equivalent, minimized cover.
    pub fn optimized(&self) -> Gate {
        Gate {
            inputs: self.inputs.clone(),
            output: self.output.clone(),
            cover: optimize(&self.cover),
        }
    }
}

/// A parsed BLIF model: one `.model` block's worth of declarations.
///
/// Latches and clocks are carried through as their raw declared fields —
/// this crate minimizes combinational `.names` gates only (spec
/// Non-goals) and otherwise must round-trip everything else unchanged.
#[derive(Debug, Clone)]
pub struct Model {
    name: Arc<str>,
    inputs: Vec<Arc<str>>,
    outputs: Vec<Arc<str>>,
    gates: Vec<Gate>,
    latches: Vec<Vec<String>>,
    clocks: Vec<Vec<String>>,
}

impl Model {
    /// Build a model from its declarations.
    pub fn new(
        name: Arc<str>,
        inputs: Vec<Arc<str>>,
        outputs: Vec<Arc<str>>,
        gates: Vec<Gate>,
    ) -> Model {
        Model {
            name,
            inputs,
            outputs,
            gates,
            latches: Vec::new(),
            clocks: Vec::new(),
        }
    }

    /// The model's declared name (the `.model` directive's argument).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Primary input labels, in declaration order.
    pub fn inputs(&self) -> &[Arc<str>] {
        &self.inputs
    }

    /// Primary output labels, in declaration order.
    pub fn outputs(&self) -> &[Arc<str>] {
        &self.outputs
    }

    /// The model's `.names` gates, in declaration order.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Mutable access to the model's gates, for in-place minimization.
    pub fn gates_mut(&mut self) -> &mut [Gate] {
        &mut self.gates
    }

    /// Raw `.latch` field lists, carried through unchanged.
    pub fn latches(&self) -> &[Vec<String>] {
        &self.latches
    }

    /// Raw `.clock` field lists, carried through unchanged.
    pub fn clocks(&self) -> &[Vec<String>] {
        &self.clocks
    }

    /// Append a `.latch` declaration's raw fields.
    pub fn push_latch(&mut self, fields: Vec<String>) {
        self.latches.push(fields);
    }

    /// Append a `.clock` declaration's raw fields.
    pub fn push_clock(&mut self, fields: Vec<String>) {
        self.clocks.push(fields);
    }

    /// Minimize every gate's cover, returning a new model with the same
    /// name/ports/latches/clocks and each gate replaced by its
    /// minimized equivalent (spec property 4: each gate's ON-set is
    /// preserved). Performs no cross-gate reasoning — a plain `map` over
    /// gates, not joint multi-output minimization.
    pub fn optimize_all(&self) -> Model {
        Model {
            name: self.name.clone(),
            inputs: self.inputs.clone(),
            outputs: self.outputs.clone(),
            gates: self.gates.iter().map(Gate::optimized).collect(),
            latches: self.latches.clone(),
            clocks: self.clocks.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bit::Bit;
    use crate::cube::Cube;

    fn cube(bits: &str) -> Cube {
        let input: Vec<Bit> = bits.chars().map(|c| Bit::from_char(c).unwrap()).collect();
        Cube::new(&input, Bit::On)
    }

    fn label(s: &str) -> Arc<str> {
        Arc::from(s)
    }

    #[test]
    fn gate_optimize_preserves_on_set() {
        let cover = Cover::from_cubes([cube("010"), cube("110"), cube("111")]);
        let mut gate = Gate::new(
            vec![label("a"), label("b"), label("c")],
            label("y"),
            cover.clone(),
        );
        gate.optimize();
        assert!(gate.cover().is_equivalent(&cover));
    }

    #[test]
    fn model_optimize_all_covers_every_gate() {
        let g1 = Gate::new(
            vec![label("a"), label("b")],
            label("y1"),
            Cover::from_cubes([cube("00"), cube("10")]),
        );
        let g2 = Gate::new(
            vec![label("c")],
            label("y2"),
            Cover::from_cubes([cube("1")]),
        );
        let before: Vec<_> = [&g1, &g2].iter().map(|g| g.cover().on_set()).collect();

        let model = Model::new(
            label("top"),
            vec![label("a"), label("b"), label("c")],
            vec![label("y1"), label("y2")],
            vec![g1, g2],
        );
        let optimized = model.optimize_all();

        let after: Vec<_> = optimized
            .gates()
            .iter()
            .map(|g| g.cover().on_set())
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn latches_and_clocks_round_trip_as_raw_fields() {
        let mut model = Model::new(label("top"), vec![], vec![], vec![]);
        model.push_latch(vec!["a".into(), "b".into(), "re".into(), "0".into()]);
        model.push_clock(vec!["clk".into()]);
        assert_eq!(model.latches().len(), 1);
        assert_eq!(model.clocks()[0], vec!["clk".to_string()]);
    }

    #[test]
    #[should_panic(expected = "arity")]
    fn gate_new_rejects_arity_mismatch() {
        let cover = Cover::from_cubes([cube("010")]);
        Gate::new(vec![label("a"), label("b")], label("y"), cover);
    }
}
