#![allow(dead_code)]

use polyfss::{
    BinaryField, FiniteField, LookupTable, PrimeField, Sample, DEFAULT_DOMAIN_SIZE,
    DEFAULT_MODULUS,
};

/// (token, state, next_state) triples of the reference machine
pub const REFERENCE_TRIPLES: [(u64, u64, u64); 6] = [
    (1, 5, 1),
    (2, 5, 2),
    (1, 2, 55),
    (2, 2, 4),
    (1, 3, 111),
    (2, 3, 12),
];

/// Reference machine over GF(2^16), tokens 1 and 3
pub const BINARY_TRIPLES: [(u64, u64, u64); 6] = [
    (1, 0, 2),
    (3, 0, 3),
    (1, 2, 55),
    (3, 2, 4),
    (1, 3, 111),
    (3, 3, 12),
];

pub fn reference_field() -> PrimeField {
    PrimeField::new(DEFAULT_MODULUS).expect("65521 is prime")
}

pub fn reference_table() -> (PrimeField, LookupTable<PrimeField>) {
    let field = reference_field();
    let samples = Sample::from_triples(&field, &REFERENCE_TRIPLES).expect("samples fit the field");
    let table =
        LookupTable::build(&field, &samples, DEFAULT_DOMAIN_SIZE).expect("reference table builds");
    (field, table)
}

pub fn binary_table() -> (BinaryField, LookupTable<BinaryField>) {
    let field = BinaryField::new(16).expect("GF(2^16) is supported");
    let samples = Sample::from_triples(&field, &BINARY_TRIPLES).expect("samples fit the field");
    let table = LookupTable::build(&field, &samples, 4).expect("binary table builds");
    (field, table)
}

/// Table in which every token of `0..domain_size` has a polynomial
///
/// δ(t, s) = t·s + 3t + 1 sampled at states 0..3.
pub fn dense_table(field: &PrimeField, domain_size: usize) -> LookupTable<PrimeField> {
    let p = field.modulus();
    let triples: Vec<(u64, u64, u64)> = (0..domain_size as u64)
        .flat_map(|t| (0..3u64).map(move |s| (t, s, (t * s + 3 * t + 1) % p)))
        .collect();
    let samples = Sample::from_triples(field, &triples).expect("samples fit the field");
    LookupTable::build(field, &samples, domain_size).expect("dense table builds")
}

/// Dense table over a binary field; next states mix token and state bits
pub fn dense_binary_table(field: &BinaryField, domain_size: usize) -> LookupTable<BinaryField> {
    let mask = field.order() - 1;
    let triples: Vec<(u64, u64, u64)> = (0..domain_size as u64)
        .flat_map(|t| (0..3u64).map(move |s| (t, s, ((t << 4) ^ (s * 7) ^ 1) & mask)))
        .collect();
    let samples = Sample::from_triples(field, &triples).expect("samples fit the field");
    LookupTable::build(field, &samples, domain_size).expect("dense table builds")
}
