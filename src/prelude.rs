// src/prelude.rs
//! The “everything” import for the QR engine.
//!
//! Brings you the most commonly used types and functions with one glob:
//! ```rust
//! use qr_engine::prelude::*;
//! ```

// core data types
pub use crate::error::QrError;
pub use crate::matrix::{dot, norm, Matrix, Rounded};
pub use crate::qr::QrDecomposition;
pub use crate::types::Scalar;

// decomposition and projections
pub use crate::gram_schmidt::{orthogonalize, DEGENERACY_EPS};
pub use crate::projection::{project_onto_column_space, project_onto_complement};
pub use crate::qr::qr;
