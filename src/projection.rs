//! Projections onto the column space of an orthonormal factor.
//!
//! Given the Q from a QR decomposition and a query vector `x`, the
//! projection of `x` onto the column space of the original matrix is
//! `Q·(Qᵗ·x)`, and the projection onto the orthogonal complement is the
//! remainder `x − Q·(Qᵗ·x)`. The two always sum back to `x`.

use crate::error::QrError;
use crate::matrix::{sub_vec, Matrix};
use crate::types::Scalar;

/// Project `x` onto the subspace spanned by the columns of `q`.
pub fn project_onto_column_space(q: &Matrix, x: &[Scalar]) -> Result<Vec<Scalar>, QrError> {
    if x.len() != q.nrows() {
        return Err(QrError::Shape {
            what: "projection query length",
            expected: q.nrows(),
            found: x.len(),
        });
    }
    let coeffs = q.transpose().matvec(x)?;
    q.matvec(&coeffs)
}

/// Project `x` onto the orthogonal complement of the span of `q`'s columns.
///
/// Computed as `x − Q·(Qᵗ·x)` rather than by materializing `I − Q·Qᵗ`.
pub fn project_onto_complement(q: &Matrix, x: &[Scalar]) -> Result<Vec<Scalar>, QrError> {
    let onto_span = project_onto_column_space(q, x)?;
    Ok(sub_vec(x, &onto_span))
}
