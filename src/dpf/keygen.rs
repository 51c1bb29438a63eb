//! Dealer-side key generation

use super::{DpfKey, DpfKeyPair};
use crate::algebra::FiniteField;
use crate::machine::LookupTable;
use crate::{FssError, Result};
use bitvec::prelude::*;
use rand::Rng;
use tracing::debug;

/// Generate shares of the point function at `x_star` over `domain_size` points
///
/// In characteristic 2, k0 is `domain_size` independent uniform bits and k1
/// is k0 with bit `x_star` flipped. Otherwise k0 is `domain_size` uniform
/// field elements and k1 = e_{x*} − k0. Fails with `DomainError` if the
/// domain is empty or `x_star` lies outside it.
pub fn generate_keys<F: FiniteField, R: Rng>(
    field: &F,
    x_star: usize,
    domain_size: usize,
    rng: &mut R,
) -> Result<DpfKeyPair<F::Element>> {
    if domain_size == 0 {
        return Err(FssError::DomainError(
            "DPF domain must not be empty".to_string(),
        ));
    }
    if x_star >= domain_size {
        return Err(FssError::DomainError(format!(
            "selected point {} outside domain of size {}",
            x_star, domain_size
        )));
    }

    let (k0, k1) = if field.characteristic() == 2 {
        let k0: BitVec = (0..domain_size).map(|_| rng.gen::<bool>()).collect();
        let mut k1 = k0.clone();
        let flipped = !k1[x_star];
        k1.set(x_star, flipped);
        (DpfKey::Bits(k0), DpfKey::Bits(k1))
    } else {
        let order = field.order();
        let k0 = (0..domain_size)
            .map(|_| field.element(rng.gen_range(0..order)))
            .collect::<Result<Vec<_>>>()?;
        let k1: Vec<_> = k0
            .iter()
            .enumerate()
            .map(|(i, &w)| {
                if i == x_star {
                    field.sub(field.one(), w)
                } else {
                    field.neg(w)
                }
            })
            .collect();
        (DpfKey::Weights(k0), DpfKey::Weights(k1))
    };

    debug!(
        domain_size,
        characteristic = field.characteristic(),
        "generated DPF key pair"
    );

    Ok(DpfKeyPair { k0, k1 })
}

/// Generate keys selecting `token` in `table`
///
/// Unlike [`generate_keys`], this refuses tokens the table has no polynomial
/// for (`UndefinedToken`), so a reconstruction can never silently yield the
/// zero an absent slot contributes.
pub fn select_token<F: FiniteField, R: Rng>(
    table: &LookupTable<F>,
    token: usize,
    rng: &mut R,
) -> Result<DpfKeyPair<F::Element>> {
    table.get(token)?;
    generate_keys(table.field(), token, table.domain_size(), rng)
}
