//! Polynomial interpolation over a finite field
//!
//! - Lagrange: n points with distinct x → degree < n polynomial
//! - Bivariate: full grid of (x, y, z) → Σ c_ij x^i y^j via linear solve

mod bivariate;
mod lagrange;

pub use bivariate::{interpolate_2d, Polynomial2D};
pub use lagrange::interpolate;
