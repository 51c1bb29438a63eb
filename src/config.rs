//! Field configuration
//!
//! The field is fixed once at startup, either from code or from a
//! `prime:<p>` / `gf2:<n>` string on the command line.

use crate::algebra::{is_prime, irreducible_for_degree};
use crate::{FssError, Result};
use std::fmt;
use std::str::FromStr;

/// Prime used by the reference state machine (largest prime below 2^16)
pub const DEFAULT_MODULUS: u64 = 65521;

/// Number of distinct input tokens (one byte)
pub const DEFAULT_DOMAIN_SIZE: usize = 256;

/// Which finite field the polynomials live in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldConfig {
    /// Integers modulo a prime
    Prime {
        /// The prime modulus p
        modulus: u64,
    },
    /// Binary extension field GF(2^degree)
    Binary {
        /// Extension degree n
        degree: u32,
    },
}

impl FieldConfig {
    /// Check that the configuration names a field this crate can build
    pub fn validate(&self) -> Result<()> {
        match *self {
            FieldConfig::Prime { modulus } => {
                if is_prime(modulus) {
                    Ok(())
                } else {
                    Err(FssError::UnsupportedField(format!(
                        "modulus {} is not prime",
                        modulus
                    )))
                }
            }
            FieldConfig::Binary { degree } => irreducible_for_degree(degree).map(|_| ()),
        }
    }

    /// Characteristic of the field (p, or 2 for GF(2^n))
    pub fn characteristic(&self) -> u64 {
        match *self {
            FieldConfig::Prime { modulus } => modulus,
            FieldConfig::Binary { .. } => 2,
        }
    }

    /// Number of elements in the field
    pub fn order(&self) -> u64 {
        match *self {
            FieldConfig::Prime { modulus } => modulus,
            FieldConfig::Binary { degree } => 1u64 << degree,
        }
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig::Prime {
            modulus: DEFAULT_MODULUS,
        }
    }
}

impl fmt::Display for FieldConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldConfig::Prime { modulus } => write!(f, "prime:{}", modulus),
            FieldConfig::Binary { degree } => write!(f, "gf2:{}", degree),
        }
    }
}

impl FromStr for FieldConfig {
    type Err = FssError;

    fn from_str(s: &str) -> Result<Self> {
        let (kind, value) = s.trim().split_once(':').ok_or_else(|| {
            FssError::UnsupportedField(format!(
                "expected `prime:<p>` or `gf2:<n>`, got `{}`",
                s
            ))
        })?;

        let config = match kind.to_ascii_lowercase().as_str() {
            "prime" | "p" => {
                let modulus = value.parse::<u64>().map_err(|_| {
                    FssError::UnsupportedField(format!("invalid modulus `{}`", value))
                })?;
                FieldConfig::Prime { modulus }
            }
            "gf2" | "binary" => {
                let degree = value.parse::<u32>().map_err(|_| {
                    FssError::UnsupportedField(format!("invalid extension degree `{}`", value))
                })?;
                FieldConfig::Binary { degree }
            }
            other => {
                return Err(FssError::UnsupportedField(format!(
                    "unknown field kind `{}`",
                    other
                )))
            }
        };

        config.validate()?;
        Ok(config)
    }
}
