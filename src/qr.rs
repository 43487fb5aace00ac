//! QR decomposition built on classical Gram-Schmidt.
//!
//! [`qr`] orthogonalizes the columns of the input, then assembles the
//! orthonormal factor Q and the upper-triangular factor R from the
//! orthogonal set. The column norms are computed once and shared by both
//! builders; the output is identical to recomputing them independently.

use crate::error::QrError;
use crate::gram_schmidt::orthogonalize;
use crate::matrix::{dot, norm, Matrix};
use crate::types::Scalar;

/// The factors of a QR decomposition: `A = Q·R` with Q orthonormal and R
/// upper triangular.
#[derive(Debug, Clone, PartialEq)]
pub struct QrDecomposition {
    /// `m × n` factor with orthonormal columns.
    pub q: Matrix,
    /// `n × n` upper-triangular factor with non-negative diagonal.
    pub r: Matrix,
}

/// Decompose `a` into its QR factors.
///
/// `a` must have at least one row and one column, and its columns must be
/// linearly independent; otherwise the decomposition fails with a
/// [`QrError`]. No graceful handling of rank deficiency is attempted.
///
/// # Example
/// ```
/// use qr_engine::prelude::*;
///
/// let a = Matrix::from_rows(&[vec![3.0, 1.0], vec![4.0, 0.0]]).unwrap();
/// let QrDecomposition { q, r } = qr(&a).unwrap();
/// assert!((r.get(0, 0) - 5.0).abs() < 1e-12);
/// assert!((q.get(0, 0) - 0.6).abs() < 1e-12);
/// ```
pub fn qr(a: &Matrix) -> Result<QrDecomposition, QrError> {
    let orth_set = orthogonalize(a)?;
    let norms: Vec<Scalar> = orth_set.iter().map(|v| norm(v)).collect();
    let q = build_q(&orth_set, &norms, a.nrows())?;
    let r = build_r(&orth_set, &norms, a)?;
    Ok(QrDecomposition { q, r })
}

/// Assemble Q: column `i` is `orth_set[i]` scaled to unit length.
fn build_q(
    orth_set: &[Vec<Scalar>],
    norms: &[Scalar],
    nrows: usize,
) -> Result<Matrix, QrError> {
    let mut q = Matrix::zeros(nrows, orth_set.len())?;
    for (i, (orth, &n)) in orth_set.iter().zip(norms.iter()).enumerate() {
        for (row, &x) in orth.iter().enumerate() {
            q.set(row, i, x / n);
        }
    }
    Ok(q)
}

/// Assemble R: `R[i,i] = ‖orth_i‖`, and above the diagonal `R[i,j]` is the
/// coefficient of column `j` of `a` along the `i`-th orthonormal direction.
fn build_r(
    orth_set: &[Vec<Scalar>],
    norms: &[Scalar],
    a: &Matrix,
) -> Result<Matrix, QrError> {
    let n = orth_set.len();
    let mut r = Matrix::zeros(n, n)?;
    for i in 0..n {
        r.set(i, i, norms[i]);
    }
    for i in 0..n {
        for j in (i + 1)..n {
            let coeff = dot(&a.column(j), orth_set[i].as_slice()) / norms[i];
            r.set(i, j, coeff);
        }
    }
    Ok(r)
}
