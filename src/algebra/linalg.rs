//! Dense linear solving over a finite field
//!
//! Gauss–Jordan elimination with row pivoting. Only square systems with a
//! unique solution are accepted.

use super::{FieldElement, FiniteField};
use crate::{FssError, Result};

/// Solve `A · c = b` for `c`
///
/// `matrix` is row-major and must be square with as many rows as `rhs`.
/// Fails with `InvalidInput` on shape mismatch and `SingularMatrix` if `A`
/// is not invertible.
pub fn solve<F: FiniteField>(
    field: &F,
    matrix: &[Vec<F::Element>],
    rhs: &[F::Element],
) -> Result<Vec<F::Element>> {
    let n = rhs.len();
    if matrix.len() != n {
        return Err(FssError::InvalidInput(format!(
            "matrix has {} rows but right-hand side has {} entries",
            matrix.len(),
            n
        )));
    }
    if let Some((row, bad)) = matrix.iter().enumerate().find(|(_, r)| r.len() != n) {
        return Err(FssError::InvalidInput(format!(
            "row {} has {} columns, expected {}",
            row,
            bad.len(),
            n
        )));
    }

    let mut a: Vec<Vec<F::Element>> = matrix.to_vec();
    let mut b: Vec<F::Element> = rhs.to_vec();

    for col in 0..n {
        let pivot = find_pivot(&a, col, col).ok_or(FssError::SingularMatrix)?;
        if pivot != col {
            a.swap(pivot, col);
            b.swap(pivot, col);
        }

        // Normalise pivot row so the pivot is 1
        let pivot_inv = field.inv(a[col][col])?;
        for j in col..n {
            a[col][j] = field.mul(a[col][j], pivot_inv);
        }
        b[col] = field.mul(b[col], pivot_inv);

        eliminate_col(field, &mut a, &mut b, col);
    }

    Ok(b)
}

fn find_pivot<E: FieldElement>(matrix: &[Vec<E>], start_row: usize, col: usize) -> Option<usize> {
    (start_row..matrix.len()).find(|&row| !matrix[row][col].is_zero())
}

/// Clear column `col` in every row except the pivot row
fn eliminate_col<F: FiniteField>(
    field: &F,
    a: &mut [Vec<F::Element>],
    b: &mut [F::Element],
    col: usize,
) {
    let n = b.len();
    for row in 0..n {
        if row == col || a[row][col].is_zero() {
            continue;
        }
        let factor = a[row][col];
        for j in col..n {
            let delta = field.mul(factor, a[col][j]);
            a[row][j] = field.sub(a[row][j], delta);
        }
        let delta = field.mul(factor, b[col]);
        b[row] = field.sub(b[row], delta);
    }
}
