//! Binary extension field GF(2^n)
//!
//! Addition is XOR, so every element is its own additive inverse and
//! secret shares combine by XOR.

use super::{FieldElement, FiniteField};
use crate::{FieldConfig, FssError, Result};
use std::fmt;

/// Irreducible reduction polynomials, indexed by extension degree
///
/// Bit i set ⇔ coefficient of x^i is 1.
const IRREDUCIBLE: [(u32, u64); 7] = [
    (2, 0x7),            // x^2 + x + 1
    (3, 0xB),            // x^3 + x + 1
    (4, 0x13),           // x^4 + x + 1
    (8, 0x11D),          // x^8 + x^4 + x^3 + x^2 + 1
    (12, 0x1053),        // x^12 + x^6 + x^4 + x + 1
    (16, 0x1002D),       // x^16 + x^5 + x^3 + x^2 + 1
    (32, 0x1_0040_0007), // x^32 + x^22 + x^2 + x + 1
];

pub(crate) fn irreducible_for_degree(degree: u32) -> Result<u64> {
    IRREDUCIBLE
        .iter()
        .find(|(d, _)| *d == degree)
        .map(|&(_, poly)| poly)
        .ok_or_else(|| {
            FssError::UnsupportedField(format!(
                "no reduction polynomial for GF(2^{}); supported degrees: {:?}",
                degree,
                IRREDUCIBLE.iter().map(|(d, _)| *d).collect::<Vec<_>>()
            ))
        })
}

/// Element of a [`BinaryField`]
///
/// Serializes as its integer representative; deserialize through a container
/// that knows the field, such as [`crate::LookupTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Gf2n(u64);

impl Gf2n {
    /// Coefficient bits of the element polynomial
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl FieldElement for Gf2n {
    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Gf2n {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Finite field GF(2^n)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u32", into = "u32")
)]
pub struct BinaryField {
    degree: u32,
    /// Reduction polynomial including the x^n term
    modulus_poly: u64,
}

impl BinaryField {
    /// Create field of size 2^degree
    pub fn new(degree: u32) -> Result<Self> {
        let modulus_poly = irreducible_for_degree(degree)?;
        Ok(Self {
            degree,
            modulus_poly,
        })
    }

    /// Extension degree n
    pub fn degree(&self) -> u32 {
        self.degree
    }

    fn mask(&self) -> u64 {
        (1u64 << self.degree) - 1
    }
}

impl TryFrom<u32> for BinaryField {
    type Error = FssError;

    fn try_from(degree: u32) -> Result<Self> {
        Self::new(degree)
    }
}

impl From<BinaryField> for u32 {
    fn from(field: BinaryField) -> u32 {
        field.degree
    }
}

impl FiniteField for BinaryField {
    type Element = Gf2n;

    fn config(&self) -> FieldConfig {
        FieldConfig::Binary {
            degree: self.degree,
        }
    }

    fn element(&self, value: u64) -> Result<Gf2n> {
        if value & !self.mask() != 0 {
            return Err(FssError::InvalidInput(format!(
                "{} is not an element of GF(2^{})",
                value, self.degree
            )));
        }
        Ok(Gf2n(value))
    }

    fn to_u64(&self, element: Gf2n) -> u64 {
        element.0
    }

    fn zero(&self) -> Gf2n {
        Gf2n(0)
    }

    fn one(&self) -> Gf2n {
        Gf2n(1)
    }

    fn add(&self, a: Gf2n, b: Gf2n) -> Gf2n {
        Gf2n(a.0 ^ b.0)
    }

    fn sub(&self, a: Gf2n, b: Gf2n) -> Gf2n {
        Gf2n(a.0 ^ b.0)
    }

    fn neg(&self, a: Gf2n) -> Gf2n {
        a
    }

    /// Russian peasant multiplication with reduction by the field polynomial
    fn mul(&self, a: Gf2n, b: Gf2n) -> Gf2n {
        if a.0 == 0 || b.0 == 0 {
            return Gf2n(0);
        }

        let overflow = 1u64 << self.degree;
        let mut result = 0u64;
        let mut a_val = a.0;
        let mut b_val = b.0;

        while b_val > 0 {
            if b_val & 1 != 0 {
                result ^= a_val;
            }
            a_val <<= 1;
            if a_val & overflow != 0 {
                a_val ^= self.modulus_poly;
            }
            b_val >>= 1;
        }

        Gf2n(result & self.mask())
    }

    fn inv(&self, a: Gf2n) -> Result<Gf2n> {
        if a.0 == 0 {
            return Err(FssError::NotInvertible(0));
        }
        // Multiplicative group has order 2^n - 1
        Ok(self.pow(a, (1u64 << self.degree) - 2))
    }
}
