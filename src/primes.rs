//! Prime-implicant generation by iterated star-closure (spec §4.3).

use crate::algebra::star;
use crate::cover::Cover;
use crate::cube::Cube;
use std::collections::HashSet;

/// Cubes in `s` that are covered by some other, distinct cube in `s`,
/// snapshotted once so the removal decision is stable regardless of
/// iteration order.
fn dominated(s: &HashSet<Cube>) -> HashSet<Cube> {
    let mut snapshot: Vec<&Cube> = s.iter().collect();
    snapshot.sort_by_key(|c| c.sort_key());

    let mut dominated = HashSet::new();
    for &a in &snapshot {
        for &b in &snapshot {
            if a != b && a.covers(b) {
                dominated.insert(b.clone());
            }
        }
    }
    dominated
}

/// Compute the prime implicants of `cover` by repeated starring followed
/// by dominance cleanup, until a fixed point is reached.
///
/// Termination is guaranteed: the dominance cleanup bounds the live set by
/// the number of distinct cubes over `{0,1,-}^n` (`3^n`), and each new
/// star product either reproduces an existing cube or strictly generalizes
/// one (spec §4.3).
pub fn prime_implicants(cover: &Cover) -> Cover {
    let mut s: HashSet<Cube> = cover.iter().cloned().collect();

    loop {
        let prev = s.clone();

        let mut snapshot: Vec<&Cube> = prev.iter().collect();
        snapshot.sort_by_key(|c| c.sort_key());

        for i in 0..snapshot.len() {
            for j in (i + 1)..snapshot.len() {
                if let Ok(starred) = star(snapshot[i], snapshot[j]) {
                    if !starred.is_null() {
                        s.insert(starred);
                    }
                }
            }
        }

        let dead = dominated(&s);
        for d in &dead {
            s.remove(d);
        }

        if s == prev {
            break;
        }
    }

    Cover::from_cubes(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bit::Bit;

    fn cube(bits: &str) -> Cube {
        let input: Vec<Bit> = bits.chars().map(|c| Bit::from_char(c).unwrap()).collect();
        Cube::new(&input, Bit::On)
    }

    #[test]
    fn s5_three_var_example() {
        let cover = Cover::from_cubes([cube("010"), cube("110"), cube("111")]);
        let primes = prime_implicants(&cover);
        let keys: HashSet<String> = primes.iter().map(|c| c.sort_key()).collect();
        let expected: HashSet<String> = ["-10", "11-"].into_iter().map(String::from).collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn s6_xor_like_cover_is_all_essential() {
        let cover = Cover::from_cubes([cube("000"), cube("011"), cube("110"), cube("101")]);
        let primes = prime_implicants(&cover);
        // No two of these minterms differ in exactly one bit, so none combine.
        assert_eq!(primes.len(), 4);
        assert!(primes.is_equivalent(&cover));
    }

    #[test]
    fn primality_no_cube_is_strictly_dominated() {
        let cover = Cover::from_cubes([cube("010"), cube("110"), cube("111")]);
        let primes: Vec<Cube> = prime_implicants(&cover).iter().cloned().collect();
        for a in &primes {
            for b in &primes {
                if a != b {
                    assert!(!a.covers(b), "{a:?} should not dominate prime {b:?}");
                }
            }
        }
    }

    #[test]
    fn prime_implicants_preserve_on_set() {
        let cover = Cover::from_cubes([cube("010"), cube("110"), cube("111")]);
        let primes = prime_implicants(&cover);
        assert!(primes.on_set().is_superset(&cover.on_set()));
    }
}
