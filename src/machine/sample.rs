//! Transition samples δ(token, state) = next_state

use crate::algebra::FiniteField;
use crate::{FssError, Result};

/// Single observed transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample<E> {
    /// Input token (selects the lookup table row)
    pub token: E,

    /// Current state
    pub state: E,

    /// State after consuming `token`
    pub next_state: E,
}

impl<E: Copy> Sample<E> {
    /// Create sample from field elements
    pub fn new(token: E, state: E, next_state: E) -> Self {
        Self {
            token,
            state,
            next_state,
        }
    }

    /// Embed `(token, state, next_state)` integer triples into `field`
    pub fn from_triples<F>(field: &F, triples: &[(u64, u64, u64)]) -> Result<Vec<Self>>
    where
        F: FiniteField<Element = E>,
    {
        triples
            .iter()
            .map(|&(token, state, next_state)| {
                Ok(Self::new(
                    field.element(token)?,
                    field.element(state)?,
                    field.element(next_state)?,
                ))
            })
            .collect()
    }
}

/// Parse whitespace-separated `token state next_state` lines
///
/// Blank lines and lines starting with `#` are skipped. Commas are accepted
/// as separators too.
pub fn parse_samples<F: FiniteField>(field: &F, text: &str) -> Result<Vec<Sample<F::Element>>> {
    let mut samples = Vec::new();

    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|f| !f.is_empty())
            .collect();
        if fields.len() != 3 {
            return Err(FssError::InvalidInput(format!(
                "line {}: expected `token state next_state`, got {} fields",
                line_no + 1,
                fields.len()
            )));
        }

        let mut values = [0u64; 3];
        for (slot, raw) in values.iter_mut().zip(&fields) {
            *slot = raw.parse().map_err(|_| {
                FssError::InvalidInput(format!("line {}: invalid integer `{}`", line_no + 1, raw))
            })?;
        }

        let [token, state, next_state] = values;
        samples.push(Sample::new(
            field.element(token)?,
            field.element(state)?,
            field.element(next_state)?,
        ));
    }

    Ok(samples)
}
