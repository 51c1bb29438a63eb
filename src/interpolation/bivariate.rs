//! Bivariate interpolation on a full grid
//!
//! Solves A · c = z where A[k][(i, j)] = x_k^i · y_k^j. The system is square
//! only when the samples cover every (x, y) pair of the grid
//! unique(xs) × unique(ys); anything sparser is rejected up front.
//!
//! Reference: <https://en.wikipedia.org/wiki/Multilinear_polynomial>

use crate::algebra::{solve, FieldElement, FiniteField};
use crate::{FssError, Result};
use std::collections::HashSet;
use std::fmt;

/// f(x, y) = Σ c_ij · x^i · y^j for i < num_x, j < num_y
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polynomial2D<E> {
    /// Number of x powers (unique x values in the grid)
    num_x: usize,
    /// Number of y powers (unique y values in the grid)
    num_y: usize,
    /// Coefficients ordered x-power major: index = i · num_y + j
    coeffs: Vec<E>,
}

impl<E: FieldElement> Polynomial2D<E> {
    /// Exponent pairs in coefficient order
    ///
    /// [(0,0), (0,1), (1,0), (1,1)] ↔ a + b·y + c·x + d·xy
    pub fn powers(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.num_x).flat_map(move |i| (0..self.num_y).map(move |j| (i, j)))
    }

    /// Coefficient of x^i · y^j
    pub fn coefficient(&self, i: usize, j: usize) -> Option<E> {
        if i < self.num_x && j < self.num_y {
            Some(self.coeffs[i * self.num_y + j])
        } else {
            None
        }
    }

    /// All coefficients, x-power major
    pub fn coefficients(&self) -> &[E] {
        &self.coeffs
    }

    /// (num_x, num_y)
    pub fn shape(&self) -> (usize, usize) {
        (self.num_x, self.num_y)
    }

    /// Evaluate f(x, y)
    pub fn evaluate<F>(&self, field: &F, x: E, y: E) -> E
    where
        F: FiniteField<Element = E>,
    {
        let x_powers = powers_of(field, x, self.num_x);
        let y_powers = powers_of(field, y, self.num_y);

        self.powers()
            .zip(&self.coeffs)
            .fold(field.zero(), |acc, ((i, j), &c)| {
                let term = field.mul(c, field.mul(x_powers[i], y_powers[j]));
                field.add(acc, term)
            })
    }
}

impl<E: FieldElement> fmt::Display for Polynomial2D<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "f(x, y) = ")?;
        for (idx, ((i, j), c)) in self.powers().zip(&self.coeffs).enumerate() {
            if idx > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{}", c)?;
            if i != 0 {
                write!(f, "x^{}", i)?;
            }
            if j != 0 {
                write!(f, "y^{}", j)?;
            }
        }
        Ok(())
    }
}

/// Interpolate f with f(xs[k], ys[k]) = zs[k]
///
/// Fails with `InvalidInput` when the lengths differ, a (x, y) pair repeats,
/// or the samples do not cover the full grid; `SingularMatrix` is passed
/// through from the solver.
pub fn interpolate_2d<F: FiniteField>(
    field: &F,
    xs: &[F::Element],
    ys: &[F::Element],
    zs: &[F::Element],
) -> Result<Polynomial2D<F::Element>> {
    if xs.len() != ys.len() || ys.len() != zs.len() {
        return Err(FssError::InvalidInput(format!(
            "coordinate arrays must be the same length ({}, {}, {})",
            xs.len(),
            ys.len(),
            zs.len()
        )));
    }
    if xs.is_empty() {
        return Err(FssError::InvalidInput(
            "cannot interpolate an empty point set".to_string(),
        ));
    }

    let num_x = xs.iter().collect::<HashSet<_>>().len();
    let num_y = ys.iter().collect::<HashSet<_>>().len();
    let pairs = xs.iter().zip(ys).collect::<HashSet<_>>().len();

    if pairs != xs.len() {
        return Err(FssError::InvalidInput(format!(
            "{} samples but only {} distinct (x, y) pairs",
            xs.len(),
            pairs
        )));
    }
    if num_x * num_y != xs.len() {
        return Err(FssError::InvalidInput(format!(
            "(x, y) values must fully cover the {}×{} grid, got {} samples",
            num_x,
            num_y,
            xs.len()
        )));
    }

    let matrix: Vec<Vec<F::Element>> = xs
        .iter()
        .zip(ys)
        .map(|(&x, &y)| {
            let x_powers = powers_of(field, x, num_x);
            let y_powers = powers_of(field, y, num_y);
            (0..num_x)
                .flat_map(|i| (0..num_y).map(move |j| (i, j)))
                .map(|(i, j)| field.mul(x_powers[i], y_powers[j]))
                .collect()
        })
        .collect();

    let coeffs = solve(field, &matrix, zs)?;
    tracing::trace!(num_x, num_y, "bivariate system solved");

    Ok(Polynomial2D {
        num_x,
        num_y,
        coeffs,
    })
}

/// [1, v, v², …] with `count` entries
fn powers_of<F: FiniteField>(field: &F, v: F::Element, count: usize) -> Vec<F::Element> {
    let mut powers = Vec::with_capacity(count);
    let mut current = field.one();
    for _ in 0..count {
        powers.push(current);
        current = field.mul(current, v);
    }
    powers
}
