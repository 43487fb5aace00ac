//! Classical Gram-Schmidt orthogonalization.
//!
//! Turns the columns of a matrix into an ordered orthogonal (not yet
//! normalized) set spanning the same subspaces:
//!
//! ```text
//! orth_0 = a_0
//! orth_i = a_i - Σ_{j<i} (⟨a_i, orth_j⟩ / ⟨orth_j, orth_j⟩) · orth_j
//! ```
//!
//! Each projection is taken against the *original* column `a_i`, which is
//! what makes this the classical rather than the modified variant. The two
//! agree in exact arithmetic but round differently for ill-conditioned
//! input; this module deliberately keeps the classical behavior.
//!
//! On linearly dependent columns the residual `orth_i` vanishes and the
//! process has no recovery path. Rather than dividing by zero, the function
//! fails fast with [`QrError::DegenerateInput`] as soon as an orthogonal
//! vector's norm drops below [`DEGENERACY_EPS`].

use crate::error::QrError;
use crate::matrix::{dot, sub_vec, Matrix};
use crate::types::Scalar;

/// Norm threshold below which an orthogonalized column counts as zero,
/// i.e. as evidence of linearly dependent input.
pub const DEGENERACY_EPS: Scalar = 1e-12;

/// Apply classical Gram-Schmidt to the columns of `a`.
///
/// Returns the orthogonal set in column order: element `i` is orthogonal to
/// every earlier element and lies in the span of columns `0..=i` of `a`.
pub fn orthogonalize(a: &Matrix) -> Result<Vec<Vec<Scalar>>, QrError> {
    let n = a.ncols();
    let mut orth_set: Vec<Vec<Scalar>> = Vec::with_capacity(n);
    orth_set.push(a.column(0));

    for i in 1..n {
        let col = a.column(i);
        let mut sum = vec![0.0; a.nrows()];
        for (j, orth) in orth_set.iter().enumerate() {
            let denom = dot(orth, orth);
            if denom.sqrt() <= DEGENERACY_EPS {
                return Err(QrError::DegenerateInput { column: j });
            }
            let coeff = dot(&col, orth) / denom;
            for (s, o) in sum.iter_mut().zip(orth.iter()) {
                *s += coeff * o;
            }
        }
        orth_set.push(sub_vec(&col, &sum));
    }

    // The last residual is never used as a projection target above, so
    // check it here to keep the degeneracy contract uniform.
    if let Some(last) = orth_set.last() {
        if dot(last, last).sqrt() <= DEGENERACY_EPS {
            return Err(QrError::DegenerateInput { column: n - 1 });
        }
    }

    Ok(orth_set)
}
