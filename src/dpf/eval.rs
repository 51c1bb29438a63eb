//! Party-side share evaluation

use super::DpfKey;
use crate::algebra::{FiniteField, Polynomial};
use crate::machine::LookupTable;
use crate::{FssError, Result};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One party's share of `table[x*](state)`
///
/// Sums `k[i] · table[i](state)` over every index with a nonzero key entry,
/// starting from zero. Absent slots are not part of the encoded function and
/// contribute nothing. Fails with `DomainError` if the key was generated for
/// a different domain size than the table's.
pub fn evaluate_share<F: FiniteField>(
    table: &LookupTable<F>,
    key: &DpfKey<F::Element>,
    state: F::Element,
) -> Result<F::Element> {
    check_domain(table, key)?;
    let field = table.field();

    let contribution = |(token, weight): (usize, F::Element)| {
        table.entries()[token]
            .polynomial()
            .map(|poly| field.mul(weight, poly.evaluate(field, state)))
            .unwrap_or_else(|| field.zero())
    };

    #[cfg(feature = "parallel")]
    let share = key
        .terms(field)
        .into_par_iter()
        .map(contribution)
        .reduce(|| field.zero(), |a, b| field.add(a, b));
    #[cfg(not(feature = "parallel"))]
    let share = key
        .terms(field)
        .into_iter()
        .map(contribution)
        .fold(field.zero(), |a, b| field.add(a, b));

    Ok(share)
}

/// Weighted sum of the polynomials selected by `key`
///
/// Evaluating the result at any state gives the same value as
/// [`evaluate_share`], so a party can precompute it once and answer many
/// states.
pub fn share_polynomial<F: FiniteField>(
    table: &LookupTable<F>,
    key: &DpfKey<F::Element>,
) -> Result<Polynomial<F::Element>> {
    check_domain(table, key)?;
    let field = table.field();

    Ok(key
        .terms(field)
        .into_iter()
        .filter_map(|(token, weight)| {
            table.entries()[token]
                .polynomial()
                .map(|poly| poly.scale(field, weight))
        })
        .fold(Polynomial::zero(), |acc, poly| acc.add(field, &poly)))
}

/// Combine the two parties' shares
pub fn reconstruct<F: FiniteField>(field: &F, share0: F::Element, share1: F::Element) -> F::Element {
    field.add(share0, share1)
}

fn check_domain<F: FiniteField>(table: &LookupTable<F>, key: &DpfKey<F::Element>) -> Result<()> {
    if key.len() != table.domain_size() {
        return Err(FssError::DomainError(format!(
            "key covers {} tokens but table domain has {}",
            key.len(),
            table.domain_size()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dpf::{generate_keys, select_token};
    use crate::{BinaryField, PrimeField, Sample};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn reference_table() -> LookupTable<PrimeField> {
        let field = PrimeField::new(65521).unwrap();
        let samples = Sample::from_triples(
            &field,
            &[(1, 5, 1), (2, 5, 2), (1, 2, 55), (2, 2, 4), (1, 3, 111), (2, 3, 12)],
        )
        .unwrap();
        LookupTable::build(&field, &samples, 256).unwrap()
    }

    #[test]
    fn test_reference_selection_for_every_seed() {
        let table = reference_table();
        let field = *table.field();
        let state = field.element(5).unwrap();

        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let keys = select_token(&table, 2, &mut rng).unwrap();
            let s0 = evaluate_share(&table, keys.first(), state).unwrap();
            let s1 = evaluate_share(&table, keys.second(), state).unwrap();
            assert_eq!(
                reconstruct(&field, s0, s1),
                field.element(2).unwrap(),
                "seed {}",
                seed
            );
        }
    }

    #[test]
    fn test_share_polynomial_matches_pointwise_share() {
        let table = reference_table();
        let field = *table.field();
        let mut rng = StdRng::seed_from_u64(11);
        let keys = select_token(&table, 1, &mut rng).unwrap();

        let poly0 = share_polynomial(&table, keys.first()).unwrap();
        for s in [0u64, 2, 3, 5, 40000] {
            let state = field.element(s).unwrap();
            assert_eq!(
                poly0.evaluate(&field, state),
                evaluate_share(&table, keys.first(), state).unwrap()
            );
        }
    }

    #[test]
    fn test_key_domain_mismatch() {
        let table = reference_table();
        let state = table.field().element(5).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let keys = generate_keys(table.field(), 1, 128, &mut rng).unwrap();
        assert!(matches!(
            evaluate_share(&table, keys.first(), state),
            Err(FssError::DomainError(_))
        ));
        assert!(share_polynomial(&table, keys.first()).is_err());
    }

    #[test]
    fn test_select_refuses_absent_token() {
        let table = reference_table();
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(
            select_token(&table, 99, &mut rng),
            Err(FssError::UndefinedToken(99))
        );
        assert!(matches!(
            select_token(&table, 256, &mut rng),
            Err(FssError::DomainError(_))
        ));
    }

    #[test]
    fn test_binary_field_shares_combine_by_xor() {
        let field = BinaryField::new(16).unwrap();
        let samples = Sample::from_triples(
            &field,
            &[(1, 0, 2), (3, 0, 3), (1, 2, 55), (3, 2, 4), (1, 3, 111), (3, 3, 12)],
        )
        .unwrap();
        let table = LookupTable::build(&field, &samples, 4).unwrap();
        let state = field.element(0).unwrap();

        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let keys = select_token(&table, 3, &mut rng).unwrap();
            let s0 = evaluate_share(&table, keys.first(), state).unwrap();
            let s1 = evaluate_share(&table, keys.second(), state).unwrap();
            assert_eq!(s0.value() ^ s1.value(), 3, "seed {}", seed);
        }
    }
}
