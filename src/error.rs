//! Error taxonomy for the decomposition pipeline.

use thiserror::Error;

/// Errors reported by the QR decomposition and the projection helpers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QrError {
    /// A dimension did not line up: empty matrix, ragged rows, a data
    /// buffer whose length disagrees with the declared shape, or a query
    /// vector whose length does not match the matrix row count.
    #[error("shape mismatch in {what}: expected {expected}, found {found}")]
    Shape {
        /// Which quantity was malformed.
        what: &'static str,
        /// The size the operation required.
        expected: usize,
        /// The size it was given.
        found: usize,
    },

    /// An intermediate orthogonal vector had (near-)zero norm, meaning the
    /// input columns are linearly dependent. Classical Gram-Schmidt has no
    /// recovery path for this, so the decomposition fails as a whole.
    #[error("column {column} is linearly dependent on earlier columns")]
    DegenerateInput {
        /// Index of the column whose orthogonalized residual vanished.
        column: usize,
    },
}
