//! Dense row-major matrix and the small set of vector operations the
//! decomposition needs.
//!
//! The algorithm treats a matrix as a collection of column vectors, so
//! [`Matrix::column`] hands out owned copies; input matrices are never
//! mutated in place.

use std::fmt;

use crate::error::QrError;
use crate::types::Scalar;

/// A dense `nrows × ncols` matrix of scalars, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    /// Number of rows.
    nrows: usize,
    /// Number of columns.
    ncols: usize,
    /// Row-major element storage, `data[i * ncols + j]`.
    data: Vec<Scalar>,
}

impl Matrix {
    /// Construct a matrix from a row-major buffer.
    pub fn new(nrows: usize, ncols: usize, data: Vec<Scalar>) -> Result<Self, QrError> {
        if nrows == 0 {
            return Err(QrError::Shape { what: "matrix rows", expected: 1, found: 0 });
        }
        if ncols == 0 {
            return Err(QrError::Shape { what: "matrix columns", expected: 1, found: 0 });
        }
        if data.len() != nrows * ncols {
            return Err(QrError::Shape {
                what: "matrix data",
                expected: nrows * ncols,
                found: data.len(),
            });
        }
        Ok(Self { nrows, ncols, data })
    }

    /// An `nrows × ncols` matrix of zeros.
    pub fn zeros(nrows: usize, ncols: usize) -> Result<Self, QrError> {
        Self::new(nrows, ncols, vec![0.0; nrows * ncols])
    }

    /// The `n × n` identity matrix.
    pub fn identity(n: usize) -> Result<Self, QrError> {
        let mut m = Self::zeros(n, n)?;
        for i in 0..n {
            m.set(i, i, 1.0);
        }
        Ok(m)
    }

    /// Construct from a slice of rows, each of equal length.
    pub fn from_rows(rows: &[Vec<Scalar>]) -> Result<Self, QrError> {
        if rows.is_empty() {
            return Err(QrError::Shape { what: "matrix rows", expected: 1, found: 0 });
        }
        let ncols = rows[0].len();
        for row in rows {
            if row.len() != ncols {
                return Err(QrError::Shape {
                    what: "matrix row length",
                    expected: ncols,
                    found: row.len(),
                });
            }
        }
        let data: Vec<Scalar> = rows.iter().flatten().copied().collect();
        Self::new(rows.len(), ncols, data)
    }

    /// Number of rows.
    #[inline(always)]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline(always)]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Element at row `i`, column `j`.
    #[inline(always)]
    pub fn get(&self, i: usize, j: usize) -> Scalar {
        self.data[i * self.ncols + j]
    }

    /// Overwrite the element at row `i`, column `j`.
    #[inline(always)]
    pub fn set(&mut self, i: usize, j: usize, value: Scalar) {
        self.data[i * self.ncols + j] = value;
    }

    /// Owned copy of column `j`.
    pub fn column(&self, j: usize) -> Vec<Scalar> {
        (0..self.nrows).map(|i| self.get(i, j)).collect()
    }

    /// The transpose as a new matrix.
    pub fn transpose(&self) -> Matrix {
        let mut t = vec![0.0; self.nrows * self.ncols];
        for i in 0..self.nrows {
            for j in 0..self.ncols {
                t[j * self.nrows + i] = self.get(i, j);
            }
        }
        Matrix { nrows: self.ncols, ncols: self.nrows, data: t }
    }

    /// Matrix product `self · other`.
    pub fn matmul(&self, other: &Matrix) -> Result<Matrix, QrError> {
        if self.ncols != other.nrows {
            return Err(QrError::Shape {
                what: "matmul inner dimension",
                expected: self.ncols,
                found: other.nrows,
            });
        }
        let mut out = Matrix::zeros(self.nrows, other.ncols)?;
        for i in 0..self.nrows {
            for j in 0..other.ncols {
                let mut sum = 0.0;
                for k in 0..self.ncols {
                    sum += self.get(i, k) * other.get(k, j);
                }
                out.set(i, j, sum);
            }
        }
        Ok(out)
    }

    /// Matrix-vector product `self · x`.
    pub fn matvec(&self, x: &[Scalar]) -> Result<Vec<Scalar>, QrError> {
        if x.len() != self.ncols {
            return Err(QrError::Shape {
                what: "matvec operand length",
                expected: self.ncols,
                found: x.len(),
            });
        }
        let mut out = vec![0.0; self.nrows];
        for i in 0..self.nrows {
            let mut sum = 0.0;
            for j in 0..self.ncols {
                sum += self.get(i, j) * x[j];
            }
            out[i] = sum;
        }
        Ok(out)
    }

    /// Elementwise difference `self − other`.
    pub fn sub(&self, other: &Matrix) -> Result<Matrix, QrError> {
        if self.nrows != other.nrows || self.ncols != other.ncols {
            return Err(QrError::Shape {
                what: "elementwise operand size",
                expected: self.nrows * self.ncols,
                found: other.nrows * other.ncols,
            });
        }
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a - b)
            .collect();
        Ok(Matrix { nrows: self.nrows, ncols: self.ncols, data })
    }
}

/// Dot product of two equal-length vectors.
#[inline]
pub fn dot(a: &[Scalar], b: &[Scalar]) -> Scalar {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Euclidean norm of a vector.
#[inline]
pub fn norm(v: &[Scalar]) -> Scalar {
    dot(v, v).sqrt()
}

/// Scale a vector by a scalar.
#[inline]
pub fn scale(v: &[Scalar], s: Scalar) -> Vec<Scalar> {
    v.iter().map(|x| x * s).collect()
}

/// Subtract `b` from `a` elementwise.
#[inline]
pub fn sub_vec(a: &[Scalar], b: &[Scalar]) -> Vec<Scalar> {
    a.iter().zip(b.iter()).map(|(x, y)| x - y).collect()
}

/// A wrapper for printing a [`Matrix`] with its entries rounded to
/// `decimals` places, one row per line.
pub struct Rounded<'a>(pub &'a Matrix, pub usize);

impl<'a> Rounded<'a> {
    /// Wrap a `&Matrix` for pretty-printing with `decimals` digits.
    #[inline(always)]
    pub fn new(m: &'a Matrix, decimals: usize) -> Self {
        Rounded(m, decimals)
    }
}

impl<'a> fmt::Display for Rounded<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rounded(m, dec) = *self;
        for i in 0..m.nrows() {
            write!(f, "[")?;
            for j in 0..m.ncols() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{v:>8.dec$}", v = m.get(i, j), dec = dec)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
