//! # Polynomial lookup tables with private token selection
//!
//! This library encodes a two-input state-transition function
//! `(token, state) → next_state` as a table of univariate polynomials over a
//! finite field, then evaluates one entry of that table for two
//! non-colluding parties without either of them learning which token was
//! selected.
//!
//! ## Core Pipeline
//!
//! 1. **Field arithmetic**: [`FiniteField`] with a prime-modulus and a
//!    GF(2^n) implementation, plus a dense linear solver
//! 2. **Interpolation**: Lagrange (univariate) and full-grid bivariate
//! 3. **Lookup table**: one polynomial per sampled token, explicit `Absent`
//!    entries for the rest
//! 4. **DPF selection**: two random bit vectors differing only at the
//!    selected token; each party sums the polynomials its key selects
//!
//! Summing the two parties' outputs reconstructs `table[x*](state)`.
//!
//! ## Usage Example
//!
//! ```
//! use polyfss::{
//!     evaluate_share, reconstruct, select_token, FiniteField, LookupTable, PrimeField, Sample,
//! };
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let field = PrimeField::new(65521)?;
//! let samples = Sample::from_triples(&field, &[(1, 5, 1), (2, 5, 2), (1, 2, 55), (2, 2, 4)])?;
//! let table = LookupTable::build(&field, &samples, 256)?;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let keys = select_token(&table, 2, &mut rng)?;
//! let state = field.element(5)?;
//! let s0 = evaluate_share(&table, keys.first(), state)?;
//! let s1 = evaluate_share(&table, keys.second(), state)?;
//! assert_eq!(reconstruct(&field, s0, s1), field.element(2)?);
//! # Ok::<(), polyfss::FssError>(())
//! ```
//!
//! Keys are one-time use: evaluating the same key pair for two different
//! selections leaks the XOR of the selected tokens. Chaining selections across
//! several transition steps is not supported.

#![warn(missing_docs, missing_debug_implementations)]

pub mod algebra; // Field arithmetic provider
pub mod config; // Field configuration
pub mod dpf; // Point-function keys and share evaluation
pub mod interpolation; // Lagrange and bivariate interpolation
pub mod machine; // Transition samples and lookup tables

pub use algebra::{
    solve, BinaryField, FieldElement, FiniteField, Fp, Gf2n, Polynomial, PrimeField,
};
pub use config::{FieldConfig, DEFAULT_DOMAIN_SIZE, DEFAULT_MODULUS};
pub use dpf::{
    evaluate_share, generate_keys, reconstruct, select_token, share_polynomial, DpfKey,
    DpfKeyPair,
};
pub use interpolation::{interpolate, interpolate_2d, Polynomial2D};
pub use machine::{parse_samples, Entry, LookupTable, Sample};

use thiserror::Error;

/// Errors surfaced by interpolation, table lookups and DPF evaluation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FssError {
    /// Malformed or non-interpolable input (length mismatch, duplicate
    /// abscissae, incomplete grid, out-of-range integer)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Linear system has no unique solution
    #[error("Singular matrix: linear system has no unique solution")]
    SingularMatrix,

    /// Lookup of a token that was never sampled
    #[error("Undefined token {0}: no polynomial was interpolated for it")]
    UndefinedToken(usize),

    /// Key or index outside the configured token domain
    #[error("Domain error: {0}")]
    DomainError(String),

    /// Field configuration cannot be instantiated
    #[error("Unsupported field: {0}")]
    UnsupportedField(String),

    /// Inverse of a non-unit requested from the field
    #[error("Element {0} has no multiplicative inverse")]
    NotInvertible(u64),
}

/// Crate-wide result type
pub type Result<T> = std::result::Result<T, FssError>;
