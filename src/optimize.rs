//! The branching optimizer: dominance pruning plus a recursive,
//! cost-minimizing branch-and-bound search over the non-essential primes
//! (spec §4.5). This is the public entry point for gate minimization.

use crate::cover::Cover;
use crate::cube::Cube;
use crate::essential::essential_primes;
use crate::primes::prime_implicants;
use std::collections::{BTreeSet, HashSet};

fn minterms_intersect(cube: &Cube, need: &BTreeSet<u64>) -> bool {
    cube.minterms().iter().any(|m| need.contains(m))
}

fn cover_cost(cubes: &[Cube]) -> usize {
    cubes.len() + cubes.iter().map(|c| c.cost()).sum::<usize>()
}

/// Dominance reduction over the non-essential primes (spec §4.5 step 5).
///
/// Removes `a` whenever a strictly cheaper `b` already covers every
/// minterm `a` would need to contribute — `need`, not `a`'s full minterm
/// set, per the spec §9 Design Note ("implementers must preserve `need`,
/// not full minterms of a, in the test").
fn dominance_reduce(cubes: &[Cube], need: &BTreeSet<u64>) -> Vec<Cube> {
    let mut redundant: HashSet<Cube> = HashSet::new();
    for a in cubes {
        for b in cubes {
            if a == b || a.cost() <= b.cost() {
                continue;
            }
            let a_needed: BTreeSet<u64> = a
                .minterms()
                .into_iter()
                .filter(|m| need.contains(m))
                .collect();
            let b_minterms = b.minterms();
            if a_needed.is_subset(&b_minterms) {
                redundant.insert(a.clone());
                break;
            }
        }
    }
    cubes
        .iter()
        .filter(|c| !redundant.contains(c))
        .cloned()
        .collect()
}

/// Recursive probe: decide whether `p` belongs in a minimum-cost cover of
/// `need` drawn from `options`, given the options still under
/// consideration. Returns the chosen sub-cover.
///
/// `options` must already be in the stable, canonical order the spec
/// calls for; `p` is always treated as a candidate for inclusion even if
/// it no longer intersects `need` (spec §4.5: the outer `branch` loop
/// drives which `p` is tested, and the recursive decision always adds `p`
/// to the `with_p` branch regardless of whether `p` survives the
/// intersects-`need` filter inside this call).
fn branch_helper(need: &BTreeSet<u64>, options: &[Cube], p: &Cube) -> Vec<Cube> {
    let mut filtered: Vec<Cube> = options
        .iter()
        .filter(|o| minterms_intersect(o, need))
        .cloned()
        .collect();
    filtered.sort_by_key(|c| c.sort_key());

    if filtered.is_empty() {
        return Vec::new();
    }

    let rest: Vec<Cube> = filtered.iter().filter(|o| *o != p).cloned().collect();
    // any(rest): a deterministic, stable pick (spec §4.5). If `rest` is
    // empty the next call's own options-filter is empty too, so it
    // returns before ever inspecting this pivot — any cube works here.
    let rest_pivot = rest.first().cloned().unwrap_or_else(|| p.clone());

    let need_without_p: BTreeSet<u64> = need
        .iter()
        .copied()
        .filter(|m| !p.minterms().contains(m))
        .collect();

    let mut with_p = branch_helper(&need_without_p, &rest, &rest_pivot);
    with_p.push(p.clone());

    let without_p = branch_helper(need, &rest, &rest_pivot);

    let without_p_cov: BTreeSet<u64> = without_p.iter().flat_map(|c| c.minterms()).collect();

    // Strict improvement only: equal cost favors with_p (spec §9 "Cost
    // tie-breaks").
    if cover_cost(&without_p) < cover_cost(&with_p) && need.is_subset(&without_p_cov) {
        without_p
    } else {
        with_p
    }
}

/// Greedy commit over the candidate primes: for each candidate (in a
/// fixed, canonical snapshot order) probe whether including it yields a
/// lower-cost cover, and lock it in if so.
fn branch(need: &BTreeSet<u64>, options: &Cover) -> Vec<Cube> {
    let mut options: Vec<Cube> = options.iter().cloned().collect();
    options.sort_by_key(|c| c.sort_key());
    let snapshot = options.clone();

    let mut need = need.clone();
    let mut chosen: Vec<Cube> = Vec::new();

    for p in snapshot {
        let decision = branch_helper(&need, &options, &p);
        if decision.contains(&p) {
            chosen.push(p.clone());
            let pm = p.minterms();
            need.retain(|m| !pm.contains(m));
            options.retain(|o| *o != p);
        }
    }
    chosen
}

/// Minimize a gate's ON-set cover.
///
/// Returns a cover with the same ON-set as `cover` (spec property 4:
/// cover-preservation) built from the gate's essential primes plus a
/// branch-and-bound selection over the rest.
pub fn optimize(cover: &Cover) -> Cover {
    let primes = prime_implicants(cover);
    let essentials = essential_primes(&primes);

    let essential_set: HashSet<Cube> = essentials.iter().cloned().collect();
    let non_essential: Vec<Cube> = primes
        .iter()
        .filter(|c| !essential_set.contains(*c))
        .cloned()
        .collect();

    let need: BTreeSet<u64> = cover
        .on_set()
        .into_iter()
        .filter(|m| !essentials.on_set().contains(m))
        .collect();

    let reduced = dominance_reduce(&non_essential, &need);
    let chosen = branch(&need, &Cover::from_cubes(reduced));

    let mut result = Cover::new();
    for e in essentials.iter() {
        result.insert(e.clone());
    }
    for c in chosen {
        result.insert(c);
    }
    result
}
