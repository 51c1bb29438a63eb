//! Univariate polynomials over a finite field
//!
//! Coefficients are stored lowest degree first. A polynomial does not carry
//! its field; every operation takes the field explicitly, like the rest of
//! the arithmetic layer.

use super::{FieldElement, FiniteField};
use std::fmt;

/// Univariate polynomial Σ cᵢ Xⁱ
///
/// Interpolated polynomials keep exactly one coefficient per sample, so
/// [`Polynomial::degree_bound`] equals `samples - 1` even when the leading
/// coefficient happens to vanish.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polynomial<E> {
    coeffs: Vec<E>,
}

impl<E: FieldElement> Polynomial<E> {
    /// The zero polynomial (no coefficients)
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// Constant polynomial c
    pub fn constant(c: E) -> Self {
        Self { coeffs: vec![c] }
    }

    /// Build from coefficients, lowest degree first
    pub fn from_coefficients(coeffs: Vec<E>) -> Self {
        Self { coeffs }
    }

    /// Coefficients, lowest degree first
    pub fn coefficients(&self) -> &[E] {
        &self.coeffs
    }

    /// True if every coefficient is zero
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|c| c.is_zero())
    }

    /// Actual degree (None for the zero polynomial)
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.iter().rposition(|c| !c.is_zero())
    }

    /// Degree bound implied by the stored coefficient count
    pub fn degree_bound(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    /// Evaluate at `x` using Horner's method
    pub fn evaluate<F>(&self, field: &F, x: E) -> E
    where
        F: FiniteField<Element = E>,
    {
        self.coeffs
            .iter()
            .rev()
            .fold(field.zero(), |acc, &c| field.add(field.mul(acc, x), c))
    }

    /// Coefficient-wise sum
    pub fn add<F>(&self, field: &F, other: &Self) -> Self
    where
        F: FiniteField<Element = E>,
    {
        let len = self.coeffs.len().max(other.coeffs.len());
        let coeffs = (0..len)
            .map(|i| {
                let a = self.coeffs.get(i).copied().unwrap_or_else(|| field.zero());
                let b = other.coeffs.get(i).copied().unwrap_or_else(|| field.zero());
                field.add(a, b)
            })
            .collect();
        Self { coeffs }
    }

    /// Multiply every coefficient by `k`
    pub fn scale<F>(&self, field: &F, k: E) -> Self
    where
        F: FiniteField<Element = E>,
    {
        Self {
            coeffs: self.coeffs.iter().map(|&c| field.mul(c, k)).collect(),
        }
    }

    /// Schoolbook product
    pub fn mul<F>(&self, field: &F, other: &Self) -> Self
    where
        F: FiniteField<Element = E>,
    {
        if self.coeffs.is_empty() || other.coeffs.is_empty() {
            return Self::zero();
        }

        let mut coeffs = vec![field.zero(); self.coeffs.len() + other.coeffs.len() - 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, &b) in other.coeffs.iter().enumerate() {
                coeffs[i + j] = field.add(coeffs[i + j], field.mul(a, b));
            }
        }
        Self { coeffs }
    }

    /// Pad with zero coefficients up to `len` entries
    pub(crate) fn padded_to<F>(mut self, field: &F, len: usize) -> Self
    where
        F: FiniteField<Element = E>,
    {
        if self.coeffs.len() < len {
            self.coeffs.resize(len, field.zero());
        }
        self
    }
}

impl<E: FieldElement> fmt::Display for Polynomial<E> {
    /// Highest degree first, zero terms omitted
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let terms: Vec<String> = self
            .coeffs
            .iter()
            .enumerate()
            .rev()
            .filter(|(_, c)| !c.is_zero())
            .map(|(power, c)| match power {
                0 => format!("{}", c),
                1 => format!("{}x", c),
                _ => format!("{}x^{}", c, power),
            })
            .collect();

        if terms.is_empty() {
            write!(f, "0")
        } else {
            write!(f, "{}", terms.join(" + "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PrimeField;

    fn setup() -> (PrimeField, impl Fn(u64) -> crate::Fp) {
        let field = PrimeField::new(97).unwrap();
        let e = move |v| field.element(v).unwrap();
        (field, e)
    }

    #[test]
    fn test_horner_evaluation() {
        let (field, e) = setup();
        // 1 + 2x + 3x^2 at x = 4 → 57
        let p = Polynomial::from_coefficients(vec![e(1), e(2), e(3)]);
        assert_eq!(p.evaluate(&field, e(4)), e(57));
        assert_eq!(Polynomial::zero().evaluate(&field, e(4)), e(0));
    }

    #[test]
    fn test_degree_ignores_trailing_zeros() {
        let (_, e) = setup();
        let p = Polynomial::from_coefficients(vec![e(5), e(0), e(0)]);
        assert_eq!(p.degree(), Some(0));
        assert_eq!(p.degree_bound(), Some(2));
        assert_eq!(Polynomial::<crate::Fp>::zero().degree(), None);
    }

    #[test]
    fn test_product_and_sum() {
        let (field, e) = setup();
        // (x + 1)(x - 1) = x^2 - 1
        let a = Polynomial::from_coefficients(vec![e(1), e(1)]);
        let b = Polynomial::from_coefficients(vec![e(96), e(1)]);
        let product = a.mul(&field, &b);
        assert_eq!(product.coefficients(), &[e(96), e(0), e(1)]);

        let sum = product.add(&field, &Polynomial::constant(e(1)));
        assert_eq!(sum.coefficients(), &[e(0), e(0), e(1)]);
        assert_eq!(sum.scale(&field, e(2)).coefficients(), &[e(0), e(0), e(2)]);
    }

    #[test]
    fn test_display() {
        let (_, e) = setup();
        let p = Polynomial::from_coefficients(vec![e(7), e(0), e(3)]);
        assert_eq!(p.to_string(), "3x^2 + 7");
        assert_eq!(Polynomial::<crate::Fp>::zero().to_string(), "0");
    }
}
