//! Polynomial lookup table
//!
//! Collapses the 2-D transition function into one univariate polynomial per
//! token: `table[token](state) = next_state`. Only per-token distinct states
//! are required, unlike full-grid bivariate interpolation.

use super::Sample;
use crate::algebra::{FiniteField, Polynomial};
use crate::interpolation::interpolate;
use crate::{FssError, Result};
use std::collections::BTreeMap;
use tracing::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

const FINGERPRINT_DOMAIN: &[u8] = b"POLYFSS_LOOKUP_TABLE_V1";

/// (token, (states, next_states))
type TokenGroup<E> = (usize, (Vec<E>, Vec<E>));

/// Table slot for a single token
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Entry<E> {
    /// Token was sampled; polynomial maps state → next_state
    Present(Polynomial<E>),

    /// Token never appeared in the samples
    Absent,
}

impl<E> Entry<E> {
    /// Polynomial, if present
    pub fn polynomial(&self) -> Option<&Polynomial<E>> {
        match self {
            Entry::Present(poly) => Some(poly),
            Entry::Absent => None,
        }
    }

    /// True for `Present`
    pub fn is_present(&self) -> bool {
        matches!(self, Entry::Present(_))
    }
}

/// Token-indexed table of transition polynomials
///
/// Built once from samples and read-only afterwards; both DPF evaluators
/// share the same table.
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "RawLookupTable<F>",
        into = "RawLookupTable<F>",
        bound(
            serialize = "F: serde::Serialize",
            deserialize = "F: serde::Deserialize<'de>"
        )
    )
)]
pub struct LookupTable<F: FiniteField> {
    field: F,
    entries: Vec<Entry<F::Element>>,
}

/// Wire form of a [`LookupTable`]: coefficients as integers, `None` for absent
/// slots. Converting back re-embeds every coefficient through the field.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawLookupTable<F> {
    field: F,
    entries: Vec<Option<Vec<u64>>>,
}

#[cfg(feature = "serde")]
impl<F: FiniteField> From<LookupTable<F>> for RawLookupTable<F> {
    fn from(table: LookupTable<F>) -> Self {
        let entries = table
            .entries
            .iter()
            .map(|entry| {
                entry.polynomial().map(|poly| {
                    poly.coefficients()
                        .iter()
                        .map(|&c| table.field.to_u64(c))
                        .collect()
                })
            })
            .collect();
        Self {
            field: table.field,
            entries,
        }
    }
}

#[cfg(feature = "serde")]
impl<F: FiniteField> TryFrom<RawLookupTable<F>> for LookupTable<F> {
    type Error = FssError;

    fn try_from(raw: RawLookupTable<F>) -> Result<Self> {
        if raw.entries.is_empty() {
            return Err(FssError::DomainError(
                "token domain must not be empty".to_string(),
            ));
        }

        let field = raw.field;
        let entries = raw
            .entries
            .into_iter()
            .map(|slot| match slot {
                None => Ok(Entry::Absent),
                Some(coeffs) => coeffs
                    .into_iter()
                    .map(|c| field.element(c))
                    .collect::<Result<Vec<_>>>()
                    .map(|coeffs| Entry::Present(Polynomial::from_coefficients(coeffs))),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { field, entries })
    }
}

impl<F: FiniteField> LookupTable<F> {
    /// Interpolate one polynomial per sampled token
    ///
    /// Fails with `DomainError` if `domain_size` is zero or some token is not
    /// below it, and with `InvalidInput` for an empty sample set or a state
    /// repeated under one token.
    pub fn build(field: &F, samples: &[Sample<F::Element>], domain_size: usize) -> Result<Self> {
        if domain_size == 0 {
            return Err(FssError::DomainError(
                "token domain must not be empty".to_string(),
            ));
        }
        if samples.is_empty() {
            return Err(FssError::InvalidInput(
                "cannot build a lookup table from zero samples".to_string(),
            ));
        }

        // Group (state, next_state) pairs by token
        let mut groups: BTreeMap<usize, (Vec<F::Element>, Vec<F::Element>)> = BTreeMap::new();
        for sample in samples {
            let token = token_index(field, sample.token, domain_size)?;
            let (states, next_states) = groups.entry(token).or_default();
            states.push(sample.state);
            next_states.push(sample.next_state);
        }

        let interpolate_token = |(token, (states, next_states)): TokenGroup<F::Element>| {
            let poly = interpolate(field, &states, &next_states).map_err(|err| match err {
                FssError::InvalidInput(msg) => {
                    FssError::InvalidInput(format!("token {}: {}", token, msg))
                }
                other => other,
            })?;
            trace!(token, points = states.len(), "interpolated token polynomial");
            Ok::<_, FssError>((token, poly))
        };

        let groups: Vec<_> = groups.into_iter().collect();

        #[cfg(feature = "parallel")]
        let polys = groups
            .into_par_iter()
            .map(interpolate_token)
            .collect::<Result<Vec<_>>>()?;
        #[cfg(not(feature = "parallel"))]
        let polys = groups
            .into_iter()
            .map(interpolate_token)
            .collect::<Result<Vec<_>>>()?;

        let mut entries = vec![Entry::Absent; domain_size];
        let present = polys.len();
        for (token, poly) in polys {
            entries[token] = Entry::Present(poly);
        }

        debug!(
            field = %field.config(),
            domain_size,
            tokens = present,
            samples = samples.len(),
            "built lookup table"
        );

        Ok(Self {
            field: field.clone(),
            entries,
        })
    }

    /// Evaluate `table[token](state)`
    ///
    /// Fails with `DomainError` outside the domain and `UndefinedToken` for
    /// a token that was never sampled; never falls back to a default value.
    pub fn evaluate(&self, token: usize, state: F::Element) -> Result<F::Element> {
        let poly = self.get(token)?;
        Ok(poly.evaluate(&self.field, state))
    }

    /// Polynomial stored for `token`
    pub fn get(&self, token: usize) -> Result<&Polynomial<F::Element>> {
        self.entry(token)?
            .polynomial()
            .ok_or(FssError::UndefinedToken(token))
    }

    /// Raw slot for `token`
    pub fn entry(&self, token: usize) -> Result<&Entry<F::Element>> {
        self.entries.get(token).ok_or_else(|| {
            FssError::DomainError(format!(
                "token {} outside domain of size {}",
                token,
                self.entries.len()
            ))
        })
    }

    /// True if `token` has a polynomial
    pub fn contains(&self, token: usize) -> bool {
        self.entries.get(token).is_some_and(Entry::is_present)
    }

    /// Sampled tokens in ascending order
    pub fn tokens(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.is_present())
            .map(|(token, _)| token)
    }

    /// All slots, indexed by token
    pub fn entries(&self) -> &[Entry<F::Element>] {
        &self.entries
    }

    /// Size of the token domain
    pub fn domain_size(&self) -> usize {
        self.entries.len()
    }

    /// Field the polynomials live in
    pub fn field(&self) -> &F {
        &self.field
    }

    /// BLAKE3 digest of the field description and every slot
    ///
    /// Two parties holding equal fingerprints evaluate against the same
    /// function.
    pub fn fingerprint(&self) -> [u8; 32] {
        let mut hasher = blake3::Hasher::new();
        hasher.update(FINGERPRINT_DOMAIN);
        hasher.update(self.field.config().to_string().as_bytes());
        hasher.update(&(self.entries.len() as u64).to_be_bytes());

        for entry in &self.entries {
            match entry {
                Entry::Absent => {
                    hasher.update(&[0u8]);
                }
                Entry::Present(poly) => {
                    hasher.update(&[1u8]);
                    hasher.update(&(poly.coefficients().len() as u64).to_be_bytes());
                    for &c in poly.coefficients() {
                        hasher.update(&self.field.to_u64(c).to_be_bytes());
                    }
                }
            }
        }

        *hasher.finalize().as_bytes()
    }
}

/// Map a token element to its table index
fn token_index<F: FiniteField>(field: &F, token: F::Element, domain_size: usize) -> Result<usize> {
    let value = field.to_u64(token);
    usize::try_from(value)
        .ok()
        .filter(|&idx| idx < domain_size)
        .ok_or_else(|| {
            FssError::DomainError(format!(
                "token {} outside domain of size {}",
                value, domain_size
            ))
        })
}
