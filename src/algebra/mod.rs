//! Field arithmetic provider
//!
//! Everything above this module is written against [`FiniteField`]:
//! - Prime fields ℤ/pℤ ([`PrimeField`])
//! - Binary extension fields GF(2^n) ([`BinaryField`])
//! - Dense linear solving over either ([`solve`])

mod binary;
mod field;
mod linalg;
mod polynomial;

pub use binary::{BinaryField, Gf2n};
pub(crate) use binary::irreducible_for_degree;
pub use field::{Fp, PrimeField};
pub(crate) use field::is_prime;
pub use linalg::solve;
pub use polynomial::Polynomial;

use crate::{FieldConfig, Result};
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A value living in some [`FiniteField`]
///
/// Elements are plain data; all arithmetic goes through the field so that the
/// modulus (or reduction polynomial) is never duplicated per element.
pub trait FieldElement: Copy + Eq + Hash + Debug + Display + Send + Sync + 'static {
    /// Additive identity test
    fn is_zero(&self) -> bool;
}

/// Finite field arithmetic
///
/// Implementations must keep every result inside the field: no operation may
/// produce an element outside `[0, order)`.
pub trait FiniteField: Clone + Debug + Send + Sync {
    /// Element representation
    type Element: FieldElement;

    /// Description of this field (used for fingerprints and display)
    fn config(&self) -> FieldConfig;

    /// Embed an integer; fails with `InvalidInput` if `value >= order`
    fn element(&self, value: u64) -> Result<Self::Element>;

    /// Canonical integer representative of an element
    fn to_u64(&self, element: Self::Element) -> u64;

    /// Additive identity
    fn zero(&self) -> Self::Element;

    /// Multiplicative identity
    fn one(&self) -> Self::Element;

    /// a + b
    fn add(&self, a: Self::Element, b: Self::Element) -> Self::Element;

    /// a - b
    fn sub(&self, a: Self::Element, b: Self::Element) -> Self::Element;

    /// a · b
    fn mul(&self, a: Self::Element, b: Self::Element) -> Self::Element;

    /// a⁻¹; fails with `NotInvertible` for zero
    fn inv(&self, a: Self::Element) -> Result<Self::Element>;

    /// Number of elements
    fn order(&self) -> u64 {
        self.config().order()
    }

    /// Characteristic; 2 means addition is XOR and every element is its own negative
    fn characteristic(&self) -> u64 {
        self.config().characteristic()
    }

    /// -a
    fn neg(&self, a: Self::Element) -> Self::Element {
        self.sub(self.zero(), a)
    }

    /// a / b
    fn div(&self, a: Self::Element, b: Self::Element) -> Result<Self::Element> {
        Ok(self.mul(a, self.inv(b)?))
    }

    /// a^e by square-and-multiply
    fn pow(&self, a: Self::Element, mut e: u64) -> Self::Element {
        let mut base = a;
        let mut result = self.one();
        while e > 0 {
            if e & 1 == 1 {
                result = self.mul(result, base);
            }
            base = self.mul(base, base);
            e >>= 1;
        }
        result
    }
}
