//! # QREngine Quickstart
//!
//! ```rust
//! use qr_engine::prelude::*;
//!
//! // Decompose a small matrix with independent columns
//! let a = Matrix::from_rows(&[
//!     vec![3.0, 1.0],
//!     vec![4.0, 0.0],
//! ]).unwrap();
//! let QrDecomposition { q, r } = qr(&a).unwrap();
//!
//! // A = Q·R, with the first column norm on R's diagonal
//! const EPS: f64 = 1e-12;
//! assert!((r.get(0, 0) - 5.0).abs() < EPS);
//! assert_eq!(r.get(1, 0), 0.0);
//! ```
//!
//! The decomposition uses **classical** Gram-Schmidt, faithfully: each
//! column is reduced against the original column, not the partially
//! orthogonalized intermediate. The classical variant loses orthogonality
//! for ill-conditioned input; that is an inherent property of the
//! algorithm and is deliberately not corrected here. Linearly dependent
//! columns fail fast with
//! [`QrError::DegenerateInput`](error::QrError::DegenerateInput).

// Core modules
pub mod error;
pub mod gram_schmidt;
pub mod matrix;
pub mod prelude;
pub mod projection;
pub mod qr;
pub mod types;

// --- Public API exports ---

pub use error::QrError;
pub use gram_schmidt::orthogonalize;
pub use matrix::{Matrix, Rounded};
pub use projection::{project_onto_column_space, project_onto_complement};
pub use qr::{qr, QrDecomposition};
pub use types::Scalar;
