//! Prime field ℤ/pℤ
//!
//! Elements are reduced representatives in [0, p). Products go through u128
//! so any 64-bit prime is supported.

use super::{FieldElement, FiniteField};
use crate::{FieldConfig, FssError, Result};
use std::fmt;

/// Element of a [`PrimeField`]
///
/// Serializes as its integer representative; deserialize through a container
/// that knows the field, such as [`crate::LookupTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Fp(u64);

impl Fp {
    /// Canonical representative in [0, p)
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl FieldElement for Fp {
    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Fp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Integers modulo a prime p
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u64", into = "u64")
)]
pub struct PrimeField {
    modulus: u64,
}

impl PrimeField {
    /// Create field of order `modulus`
    ///
    /// Fails with `UnsupportedField` unless `modulus` is prime.
    pub fn new(modulus: u64) -> Result<Self> {
        FieldConfig::Prime { modulus }.validate()?;
        Ok(Self { modulus })
    }

    /// The prime p
    pub fn modulus(&self) -> u64 {
        self.modulus
    }
}

impl TryFrom<u64> for PrimeField {
    type Error = FssError;

    fn try_from(modulus: u64) -> Result<Self> {
        Self::new(modulus)
    }
}

impl From<PrimeField> for u64 {
    fn from(field: PrimeField) -> u64 {
        field.modulus
    }
}

impl FiniteField for PrimeField {
    type Element = Fp;

    fn config(&self) -> FieldConfig {
        FieldConfig::Prime {
            modulus: self.modulus,
        }
    }

    fn element(&self, value: u64) -> Result<Fp> {
        if value >= self.modulus {
            return Err(FssError::InvalidInput(format!(
                "{} is not an element of GF({})",
                value, self.modulus
            )));
        }
        Ok(Fp(value))
    }

    fn to_u64(&self, element: Fp) -> u64 {
        element.0
    }

    fn zero(&self) -> Fp {
        Fp(0)
    }

    fn one(&self) -> Fp {
        Fp(1)
    }

    fn add(&self, a: Fp, b: Fp) -> Fp {
        Fp(((a.0 as u128 + b.0 as u128) % self.modulus as u128) as u64)
    }

    fn sub(&self, a: Fp, b: Fp) -> Fp {
        if a.0 >= b.0 {
            Fp(a.0 - b.0)
        } else {
            Fp(self.modulus - (b.0 - a.0))
        }
    }

    fn mul(&self, a: Fp, b: Fp) -> Fp {
        Fp(mul_mod(a.0, b.0, self.modulus))
    }

    fn inv(&self, a: Fp) -> Result<Fp> {
        if a.0 == 0 {
            return Err(FssError::NotInvertible(0));
        }
        // Fermat: a^(p-2)
        Ok(self.pow(a, self.modulus - 2))
    }
}

fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

fn pow_mod(mut base: u64, mut exp: u64, m: u64) -> u64 {
    let mut result = 1 % m;
    base %= m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }
    result
}

/// Deterministic Miller–Rabin for 64-bit integers
pub(crate) fn is_prime(n: u64) -> bool {
    const WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

    if n < 2 {
        return false;
    }
    for &p in &WITNESSES {
        if n % p == 0 {
            return n == p;
        }
    }

    let mut d = n - 1;
    let mut s = 0;
    while d % 2 == 0 {
        d /= 2;
        s += 1;
    }

    'witness: for &a in &WITNESSES {
        let mut x = pow_mod(a, d, n);
        if x == 1 || x == n - 1 {
            continue;
        }
        for _ in 1..s {
            x = mul_mod(x, x, n);
            if x == n - 1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gf65521() -> PrimeField {
        PrimeField::new(65521).unwrap()
    }

    #[test]
    fn test_arithmetic_stays_in_range() {
        let field = gf65521();
        let a = field.element(65520).unwrap();
        let b = field.element(3).unwrap();
        assert_eq!(field.add(a, b).value(), 2);
        assert_eq!(field.sub(b, a).value(), 4);
        assert_eq!(field.mul(a, a).value(), 1); // (-1)^2
        assert_eq!(field.neg(b).value(), 65518);
    }

    #[test]
    fn test_inverse() {
        let field = gf65521();
        for v in [1u64, 2, 3, 1000, 65520] {
            let a = field.element(v).unwrap();
            let inv = field.inv(a).unwrap();
            assert_eq!(field.mul(a, inv), field.one());
        }
        assert_eq!(
            field.inv(field.zero()),
            Err(FssError::NotInvertible(0))
        );
    }

    #[test]
    fn test_element_rejects_out_of_range() {
        let field = gf65521();
        assert!(field.element(65521).is_err());
    }

    #[test]
    fn test_primality() {
        assert!(is_prime(2));
        assert!(is_prime(65521));
        assert!(is_prime(18446744073709551557)); // largest 64-bit prime
        assert!(!is_prime(1));
        assert!(!is_prime(65535));
        assert!(!is_prime(3215031751)); // strong pseudoprime to bases 2, 3, 5, 7
    }

    #[test]
    fn test_large_modulus_does_not_overflow() {
        let field = PrimeField::new(18446744073709551557).unwrap();
        let a = field.element(18446744073709551556).unwrap();
        assert_eq!(field.add(a, a).value(), 18446744073709551555);
        assert_eq!(field.mul(a, a), field.one());
    }
}
