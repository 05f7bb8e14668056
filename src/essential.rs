//! Essential-prime identification by cascaded sharp (spec §4.4).

use crate::algebra::sharp;
use crate::cover::Cover;
use crate::cube::Cube;

/// Identify the essential primes in `primes`: a prime `p` is essential iff
/// it covers at least one minterm that no other prime in the set covers,
/// equivalently iff `p` minus every other prime still has a non-null
/// remainder.
pub fn essential_primes(primes: &Cover) -> Cover {
    let all: Vec<Cube> = primes.iter().cloned().collect();

    let mut essential = Cover::new();
    for (i, p) in all.iter().enumerate() {
        let mut remainder = vec![p.clone()];
        for (j, q) in all.iter().enumerate() {
            if i == j {
                continue;
            }
            let mut next = Vec::new();
            for r in &remainder {
                let pieces = sharp(r, q).expect("primes of a cover share arity");
                next.extend(pieces.into_iter().filter(|c| !c.is_null()));
            }
            remainder = next;
            if remainder.is_empty() {
                break;
            }
        }
        if !remainder.is_empty() {
            essential.insert(p.clone());
        }
    }
    essential
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bit::Bit;
    use crate::primes::prime_implicants;

    fn cube(bits: &str) -> Cube {
        let input: Vec<Bit> = bits.chars().map(|c| Bit::from_char(c).unwrap()).collect();
        Cube::new(&input, Bit::On)
    }

    #[test]
    fn s5_both_primes_are_essential() {
        let cover = Cover::from_cubes([cube("010"), cube("110"), cube("111")]);
        let primes = prime_implicants(&cover);
        let essentials = essential_primes(&primes);
        let keys: std::collections::HashSet<String> =
            essentials.iter().map(|c| c.sort_key()).collect();
        let expected: std::collections::HashSet<String> =
            ["-10", "11-"].into_iter().map(String::from).collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn s6_all_four_primes_are_essential() {
        let cover = Cover::from_cubes([cube("000"), cube("011"), cube("110"), cube("101")]);
        let primes = prime_implicants(&cover);
        let essentials = essential_primes(&primes);
        assert_eq!(essentials.len(), 4);
    }

    #[test]
    fn essential_soundness() {
        // Every essential prime covers a minterm no other prime covers.
        let cover = Cover::from_cubes([cube("010"), cube("110"), cube("111")]);
        let primes = prime_implicants(&cover);
        let all: Vec<Cube> = primes.iter().cloned().collect();
        let essentials = essential_primes(&primes);

        for e in essentials.iter() {
            let others_union: std::collections::BTreeSet<u64> = all
                .iter()
                .filter(|c| *c != e)
                .flat_map(|c| c.minterms())
                .collect();
            assert!(
                e.minterms().iter().any(|m| !others_union.contains(m)),
                "essential prime {e:?} has no uniquely-covered minterm"
            );
        }
    }

    #[test]
    fn a_single_prime_is_essential() {
        let cover = Cover::from_cubes([cube("1")]);
        let primes = prime_implicants(&cover);
        let essentials = essential_primes(&primes);
        assert_eq!(essentials.len(), 1);
    }
}
