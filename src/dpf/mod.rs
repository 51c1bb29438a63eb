//! Two-party distributed point function over the token domain
//!
//! The dealer splits the indicator vector e_{x*} into two additive shares
//! k0 + k1 = e_{x*}. Each party evaluates Σ_i k[i] · table[i](state); the two
//! sums add up to exactly table[x*](state).
//!
//! - Characteristic 2: shares are bit vectors and k0 ⊕ k1 = e_{x*}, so the
//!   parties simply sum the polynomials their key selects and the shares
//!   combine by XOR.
//! - Odd characteristic: bit vectors would leave 2 · Σ(common selections) in
//!   the sum, so k0 is a vector of uniform field elements and
//!   k1 = e_{x*} − k0.
//!
//! Either way each key alone is uniformly distributed and independent of x*.
//!
//! Keys are one-time use. Only single-round selection is supported: the
//! reconstructed next state is public to whoever adds the shares, and there
//! is no re-sharing step for chaining transitions.

mod eval;
mod keygen;

pub use eval::{evaluate_share, reconstruct, share_polynomial};
pub use keygen::{generate_keys, select_token};

use crate::algebra::{FieldElement, FiniteField};
use bitvec::prelude::*;

/// One party's share of the point function
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DpfKey<E> {
    /// Selection bits, used in characteristic 2
    Bits(BitVec),

    /// Additive field shares, used in odd characteristic
    Weights(Vec<E>),
}

impl<E: FieldElement> DpfKey<E> {
    /// Domain size covered by the key
    pub fn len(&self) -> usize {
        match self {
            DpfKey::Bits(bits) => bits.len(),
            DpfKey::Weights(weights) => weights.len(),
        }
    }

    /// True for a key over an empty domain
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Share bit at `index` (None outside the domain or for weight keys)
    pub fn bit(&self, index: usize) -> Option<bool> {
        match self {
            DpfKey::Bits(bits) => bits.get(index).map(|bit| *bit),
            DpfKey::Weights(_) => None,
        }
    }

    /// Raw bit vector of a characteristic-2 key
    pub fn bits(&self) -> Option<&BitSlice> {
        match self {
            DpfKey::Bits(bits) => Some(bits),
            DpfKey::Weights(_) => None,
        }
    }

    /// Coefficient applied to `table[index]` (None outside the domain)
    pub fn weight<F>(&self, field: &F, index: usize) -> Option<E>
    where
        F: FiniteField<Element = E>,
    {
        match self {
            DpfKey::Bits(bits) => bits
                .get(index)
                .map(|bit| if *bit { field.one() } else { field.zero() }),
            DpfKey::Weights(weights) => weights.get(index).copied(),
        }
    }

    /// Nonzero `(index, weight)` terms of the share sum
    pub fn terms<F>(&self, field: &F) -> Vec<(usize, E)>
    where
        F: FiniteField<Element = E>,
    {
        match self {
            DpfKey::Bits(bits) => bits.iter_ones().map(|i| (i, field.one())).collect(),
            DpfKey::Weights(weights) => weights
                .iter()
                .enumerate()
                .filter(|(_, w)| !w.is_zero())
                .map(|(i, &w)| (i, w))
                .collect(),
        }
    }
}

/// Both shares produced by the dealer
///
/// Hand [`DpfKeyPair::first`] to one party and [`DpfKeyPair::second`] to the
/// other; never give both to the same party.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DpfKeyPair<E> {
    k0: DpfKey<E>,
    k1: DpfKey<E>,
}

impl<E> DpfKeyPair<E> {
    /// Share for party 0
    pub fn first(&self) -> &DpfKey<E> {
        &self.k0
    }

    /// Share for party 1
    pub fn second(&self) -> &DpfKey<E> {
        &self.k1
    }

    /// Split into (k0, k1) for distribution
    pub fn into_parts(self) -> (DpfKey<E>, DpfKey<E>) {
        (self.k0, self.k1)
    }
}
