//! Lagrange interpolation
//!
//! L_i(X) = Π_{j≠i} (X - x_j) / (x_i - x_j), p(X) = Σ y_i · L_i(X).
//! The numerators are obtained by dividing the master product
//! M(X) = Π_j (X - x_j) by (X - x_i), which keeps construction at O(n²).

use crate::algebra::{FieldElement, FiniteField, Polynomial};
use crate::{FssError, Result};
use std::collections::HashSet;

/// Interpolate the unique polynomial of degree < n through `(xs[i], ys[i])`
///
/// Fails with `InvalidInput` if the slices differ in length, are empty, or
/// `xs` contains a repeated value. The result always has exactly `xs.len()`
/// coefficients.
pub fn interpolate<F: FiniteField>(
    field: &F,
    xs: &[F::Element],
    ys: &[F::Element],
) -> Result<Polynomial<F::Element>> {
    if xs.len() != ys.len() {
        return Err(FssError::InvalidInput(format!(
            "{} x values but {} y values",
            xs.len(),
            ys.len()
        )));
    }
    if xs.is_empty() {
        return Err(FssError::InvalidInput(
            "cannot interpolate an empty point set".to_string(),
        ));
    }

    let mut seen = HashSet::with_capacity(xs.len());
    if let Some(dup) = xs.iter().find(|x| !seen.insert(**x)) {
        return Err(FssError::InvalidInput(format!(
            "duplicate x value {}: system is not interpolable",
            dup
        )));
    }

    let n = xs.len();
    let master = master_product(field, xs);

    let mut result = Polynomial::zero();
    for (i, (&xi, &yi)) in xs.iter().zip(ys).enumerate() {
        if yi.is_zero() {
            continue;
        }

        let numerator = divide_by_root(field, &master, xi);

        let mut denominator = field.one();
        for (j, &xj) in xs.iter().enumerate() {
            if j != i {
                denominator = field.mul(denominator, field.sub(xi, xj));
            }
        }

        let weight = field.div(yi, denominator)?;
        result = result.add(field, &numerator.scale(field, weight));
    }

    Ok(result.padded_to(field, n))
}

/// M(X) = Π (X - x_j), lowest degree first
fn master_product<F: FiniteField>(field: &F, xs: &[F::Element]) -> Vec<F::Element> {
    let mut coeffs = vec![field.one()];
    for &xj in xs {
        // multiply by (X - xj)
        let mut next = vec![field.zero(); coeffs.len() + 1];
        for (k, &c) in coeffs.iter().enumerate() {
            next[k + 1] = field.add(next[k + 1], c);
            next[k] = field.sub(next[k], field.mul(c, xj));
        }
        coeffs = next;
    }
    coeffs
}

/// Synthetic division of `m` by (X - root); the remainder is zero by construction
fn divide_by_root<F: FiniteField>(
    field: &F,
    m: &[F::Element],
    root: F::Element,
) -> Polynomial<F::Element> {
    let n = m.len() - 1;
    let mut q = vec![field.zero(); n];
    q[n - 1] = m[n];
    for k in (1..n).rev() {
        q[k - 1] = field.add(m[k], field.mul(root, q[k]));
    }
    Polynomial::from_coefficients(q)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BinaryField, PrimeField};

    #[test]
    fn test_reference_token_one() {
        // Token 1 of the reference machine: (5,1) (2,55) (3,111)
        let field = PrimeField::new(65521).unwrap();
        let e = |v| field.element(v).unwrap();
        let xs = [e(5), e(2), e(3)];
        let ys = [e(1), e(55), e(111)];
        let p = interpolate(&field, &xs, &ys).unwrap();

        assert_eq!(p.degree_bound(), Some(2));
        for (x, y) in xs.iter().zip(&ys) {
            assert_eq!(p.evaluate(&field, *x), *y);
        }
    }

    #[test]
    fn test_single_point_is_constant() {
        let field = PrimeField::new(101).unwrap();
        let e = |v| field.element(v).unwrap();
        let p = interpolate(&field, &[e(7)], &[e(42)]).unwrap();
        assert_eq!(p.coefficients(), &[e(42)]);
    }

    #[test]
    fn test_recovers_known_polynomial() {
        // 3 + 2x + x^2 over GF(101)
        let field = PrimeField::new(101).unwrap();
        let e = |v| field.element(v).unwrap();
        let xs: Vec<_> = (0..3).map(e).collect();
        let ys: Vec<_> = (0..3u64).map(|x| e((3 + 2 * x + x * x) % 101)).collect();
        let p = interpolate(&field, &xs, &ys).unwrap();
        assert_eq!(p.coefficients(), &[e(3), e(2), e(1)]);
    }

    #[test]
    fn test_zero_values_keep_full_length() {
        let field = PrimeField::new(13).unwrap();
        let e = |v| field.element(v).unwrap();
        let p = interpolate(&field, &[e(1), e(2), e(3)], &[e(0), e(0), e(0)]).unwrap();
        assert!(p.is_zero());
        assert_eq!(p.coefficients().len(), 3);
    }

    #[test]
    fn test_duplicate_x_rejected() {
        let field = PrimeField::new(13).unwrap();
        let e = |v| field.element(v).unwrap();
        let err = interpolate(&field, &[e(1), e(1)], &[e(2), e(3)]).unwrap_err();
        assert!(matches!(err, FssError::InvalidInput(_)));
    }

    #[test]
    fn test_length_mismatch_and_empty() {
        let field = PrimeField::new(13).unwrap();
        let e = |v| field.element(v).unwrap();
        assert!(interpolate(&field, &[e(1), e(2)], &[e(2)]).is_err());
        assert!(interpolate(&field, &[], &[]).is_err());
    }

    #[test]
    fn test_binary_field() {
        let field = BinaryField::new(16).unwrap();
        let e = |v| field.element(v).unwrap();
        let xs = [e(0), e(2), e(3)];
        let ys = [e(2), e(55), e(111)];
        let p = interpolate(&field, &xs, &ys).unwrap();
        for (x, y) in xs.iter().zip(&ys) {
            assert_eq!(p.evaluate(&field, *x), *y);
        }
    }
}
