//! The star (∗) and sharp (#) cube algebra (Brown & Vranesic §4.10.2).
//!
//! Both operators are defined position-wise over `{0, 1, -}` and both
//! reject operands of mismatched arity or operands already carrying an
//! internal `Epsilon`/`Null` bit — those are caller bugs, not recoverable
//! input, per spec §4.2 and §7.

use crate::bit::Bit;
use crate::cube::Cube;
use crate::error::AlgebraError;

fn check_operands(a: &Cube, b: &Cube) -> Result<(), AlgebraError> {
    if a.arity() != b.arity() {
        return Err(AlgebraError::ArityMismatch {
            lhs: a.arity(),
            rhs: b.arity(),
        });
    }
    let all_persisted = a.inputs().iter().all(|b| b.is_persistable())
        && b.inputs().iter().all(|b| b.is_persistable());
    if !all_persisted {
        return Err(AlgebraError::NonPersistedOperand);
    }
    Ok(())
}

fn star_bit(a: Bit, b: Bit) -> Bit {
    use Bit::*;
    match (a, b) {
        (Off, Off) => Off,
        (Off, On) => Null,
        (Off, Dc) => Off,
        (On, Off) => Null,
        (On, On) => On,
        (On, Dc) => On,
        (Dc, Off) => Off,
        (Dc, On) => On,
        (Dc, Dc) => Dc,
        _ => unreachable!("star_bit requires persistable operands"),
    }
}

fn sharp_bit(a: Bit, b: Bit) -> Bit {
    use Bit::*;
    match (a, b) {
        (Off, Off) => Epsilon,
        (Off, On) => Null,
        (Off, Dc) => Epsilon,
        (On, Off) => Null,
        (On, On) => Epsilon,
        (On, Dc) => Epsilon,
        (Dc, Off) => On,
        (Dc, On) => Off,
        (Dc, Dc) => Epsilon,
        _ => unreachable!("sharp_bit requires persistable operands"),
    }
}

/// The star product `a ∗ b`: the largest common subcube, or `null_cube()`
/// if `a` and `b` disagree on more than one position.
///
/// Star is commutative and idempotent (`a ∗ a = a` for any non-null `a`).
pub fn star(a: &Cube, b: &Cube) -> Result<Cube, AlgebraError> {
    check_operands(a, b)?;

    let row: Vec<Bit> = a
        .inputs()
        .iter()
        .zip(b.inputs())
        .map(|(&x, &y)| star_bit(x, y))
        .collect();

    let null_count = row.iter().filter(|&&bit| bit == Bit::Null).count();
    if null_count > 1 {
        return Ok(Cube::null_cube());
    }

    let resolved: Vec<Bit> = row
        .into_iter()
        .map(|bit| if bit == Bit::Null { Bit::Dc } else { bit })
        .collect();
    Ok(Cube::new(&resolved, Bit::On))
}

/// The sharp difference `a # b`: the set of cubes covering exactly
/// `minterms(a) \ minterms(b)`.
///
/// - If `b` fixes a position where `a` disagrees, `b` cannot remove
///   anything from `a` and the result is `{a}` unchanged.
/// - If `b` covers `a` entirely, the result is `{null_cube()}`.
/// - Otherwise each don't-care axis of `a` that `b` fixes produces one
///   cube: `a` with that axis replaced by the complement of `b`'s value.
///   These emitted cubes are pairwise disjoint and together cover
///   `a \ b`.
pub fn sharp(a: &Cube, b: &Cube) -> Result<Vec<Cube>, AlgebraError> {
    check_operands(a, b)?;

    let row: Vec<Bit> = a
        .inputs()
        .iter()
        .zip(b.inputs())
        .map(|(&x, &y)| sharp_bit(x, y))
        .collect();

    if row.iter().any(|&bit| bit == Bit::Null) {
        return Ok(vec![a.clone()]);
    }

    if row.iter().all(|&bit| bit == Bit::Epsilon) {
        return Ok(vec![Cube::null_cube()]);
    }

    let mut results = Vec::new();
    for (i, &bit) in row.iter().enumerate() {
        if bit == Bit::Epsilon {
            continue;
        }
        // bit is On or Off here: axis i is a don't-care in a, fixed in b.
        let mut split = a.inputs().to_vec();
        split[i] = bit;
        results.push(Cube::new(&split, Bit::On));
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cube(bits: &str) -> Cube {
        let input: Vec<Bit> = bits.chars().map(|c| Bit::from_char(c).unwrap()).collect();
        Cube::new(&input, Bit::On)
    }

    #[test]
    fn s1_star_single_disagreement() {
        let a = cube("0111");
        let b = cube("0011");
        let result = star(&a, &b).unwrap();
        assert_eq!(result, cube("0-11"));
    }

    #[test]
    fn s2_star_multi_disagreement_is_null() {
        let a = cube("0111");
        let b = cube("1011");
        let result = star(&a, &b).unwrap();
        assert!(result.is_null());
    }

    #[test]
    fn star_is_commutative() {
        let a = cube("0111");
        let b = cube("0011");
        assert_eq!(star(&a, &b).unwrap(), star(&b, &a).unwrap());
    }

    #[test]
    fn star_is_idempotent() {
        let a = cube("0-11");
        assert_eq!(star(&a, &a).unwrap(), a);
    }

    #[test]
    fn star_rejects_arity_mismatch() {
        let a = cube("01");
        let b = cube("011");
        assert_eq!(
            star(&a, &b).unwrap_err(),
            AlgebraError::ArityMismatch { lhs: 2, rhs: 3 }
        );
    }

    #[test]
    fn s3_sharp_multi_result() {
        let a = cube("-1-0-");
        let b = cube("110-1");
        let result = sharp(&a, &b).unwrap();
        let expected = vec![cube("01-0-"), cube("-110-"), cube("-1-00")];
        assert_eq!(result.len(), expected.len());
        for e in expected {
            assert!(result.contains(&e), "missing {e:?} in {result:?}");
        }
    }

    #[test]
    fn sharp_disagreement_returns_a_unchanged() {
        let a = cube("01");
        let b = cube("10");
        let result = sharp(&a, &b).unwrap();
        assert_eq!(result, vec![a]);
    }

    #[test]
    fn sharp_total_coverage_returns_null() {
        let a = cube("01");
        let b = cube("0-");
        let result = sharp(&a, &b).unwrap();
        assert_eq!(result, vec![Cube::null_cube()]);
    }

    #[test]
    fn sharp_exactness_property() {
        // minterms(a) \ minterms(b) == union of minterms of (a # b), nulls excluded.
        let a = cube("-1-0-");
        let b = cube("110-1");
        let result = sharp(&a, &b).unwrap();
        let lhs: std::collections::BTreeSet<u64> = a
            .minterms()
            .difference(&b.minterms())
            .copied()
            .collect();
        let rhs: std::collections::BTreeSet<u64> = result
            .iter()
            .filter(|c| !c.is_null())
            .flat_map(|c| c.minterms())
            .collect();
        assert_eq!(lhs, rhs);
    }
}
