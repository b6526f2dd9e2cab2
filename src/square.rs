//! The square matrix value type shared by every component.
//!
//! A [`Square`] is an immutable n×n matrix of symbols. It deliberately does
//! *not* enforce the Latin property; that is the verifier's job
//! ([`crate::mols::verify`]), so that malformed candidates can be constructed,
//! checked, and reported on.

use ndarray::Array2;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An n×n matrix of symbols.
///
/// Symbols are arbitrary `u32` values; the canonical alphabet for order n is
/// `0..n`, but shifted alphabets are accepted and carried through the
/// transforms unchanged.
///
/// # Example
///
/// ```
/// use spotit::Square;
///
/// let sq = Square::from_rows(vec![
///     vec![0, 1, 2],
///     vec![1, 2, 0],
///     vec![2, 0, 1],
/// ])
/// .unwrap();
///
/// assert_eq!(sq.order(), 3);
/// assert_eq!(sq.get(1, 2), 0);
/// ```
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square {
    data: Array2<u32>,
}

impl Square {
    /// Create a square from nested rows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if the input is empty, a row's length
    /// differs from the row count, or the rows are ragged.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(Error::shape_mismatch("non-empty square matrix", "0 rows"));
        }

        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(Error::shape_mismatch(
                    format!("{n} values in row {i}"),
                    format!("{} values", row.len()),
                ));
            }
        }

        let flat: Vec<u32> = rows.into_iter().flatten().collect();
        let data = Array2::from_shape_vec((n, n), flat)
            .map_err(|e| Error::shape_mismatch(format!("{n}x{n} matrix"), e.to_string()))?;

        Ok(Self { data })
    }

    /// Create a square from an existing 2D array.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if the array is empty or not square.
    pub fn from_array(data: Array2<u32>) -> Result<Self> {
        if data.nrows() == 0 || data.nrows() != data.ncols() {
            return Err(Error::shape_mismatch(
                "non-empty square matrix",
                format!("{}x{}", data.nrows(), data.ncols()),
            ));
        }
        Ok(Self { data })
    }

    /// Get the order n of the square.
    #[must_use]
    pub fn order(&self) -> usize {
        self.data.nrows()
    }

    /// Get the value at a specific position.
    ///
    /// # Panics
    ///
    /// Panics if the indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.data[[row, col]]
    }

    /// Get a row of the square as a view.
    #[must_use]
    pub fn row(&self, idx: usize) -> ndarray::ArrayView1<'_, u32> {
        self.data.row(idx)
    }

    /// Get a column of the square as a view.
    #[must_use]
    pub fn column(&self, idx: usize) -> ndarray::ArrayView1<'_, u32> {
        self.data.column(idx)
    }

    /// Iterate over rows.
    pub fn rows(&self) -> impl Iterator<Item = ndarray::ArrayView1<'_, u32>> {
        self.data.rows().into_iter()
    }

    /// Get a reference to the underlying data.
    #[must_use]
    pub fn data(&self) -> &Array2<u32> {
        &self.data
    }

    /// Return a fresh square with rows and columns swapped.
    ///
    /// The receiver is left untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use spotit::Square;
    ///
    /// let sq = Square::from_rows(vec![vec![0, 1], vec![1, 0]]).unwrap();
    /// let t = sq.transposed();
    /// assert_eq!(t.get(0, 1), sq.get(1, 0));
    /// ```
    #[must_use]
    pub fn transposed(&self) -> Self {
        Self {
            data: self.data.t().to_owned(),
        }
    }

    /// The smallest symbol value in the square's alphabet.
    ///
    /// Taken from the first row, which for a Latin square spans the whole
    /// alphabet. Canonical alphabets give 0.
    #[must_use]
    pub fn smallest_symbol(&self) -> u32 {
        self.data.row(0).iter().copied().min().unwrap_or(0)
    }

    /// Export the square as nested rows, suitable for rendering.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.data.rows().into_iter().map(|r| r.to_vec()).collect()
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square(order {}) {:?}", self.order(), self.data)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.rows() {
            let row_str: Vec<String> = row.iter().map(ToString::to_string).collect();
            writeln!(f, "[{}]", row_str.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows() {
        let sq = Square::from_rows(vec![vec![0, 1], vec![1, 0]]).unwrap();
        assert_eq!(sq.order(), 2);
        assert_eq!(sq.get(0, 1), 1);
        assert_eq!(sq.get(1, 1), 0);
    }

    #[test]
    fn test_from_rows_invalid() {
        // empty
        assert!(Square::from_rows(vec![]).is_err());

        // ragged
        assert!(Square::from_rows(vec![vec![0, 1], vec![1]]).is_err());

        // rectangular
        assert!(Square::from_rows(vec![vec![0, 1, 2], vec![1, 2, 0]]).is_err());
    }

    #[test]
    fn test_from_array() {
        let data = Array2::from_shape_vec((2, 2), vec![0, 1, 1, 0]).unwrap();
        let sq = Square::from_array(data).unwrap();
        assert_eq!(sq.order(), 2);

        let rect = Array2::from_shape_vec((2, 3), vec![0, 1, 2, 1, 2, 0]).unwrap();
        assert!(Square::from_array(rect).is_err());
    }

    #[test]
    fn test_transposed() {
        let sq = Square::from_rows(vec![vec![0, 1, 2], vec![1, 2, 0], vec![2, 0, 1]]).unwrap();
        let t = sq.transposed();

        for r in 0..3 {
            for c in 0..3 {
                assert_eq!(t.get(r, c), sq.get(c, r));
            }
        }
        // double transpose returns the original
        assert_eq!(t.transposed(), sq);
    }

    #[test]
    fn test_smallest_symbol() {
        let sq = Square::from_rows(vec![vec![5, 6], vec![6, 5]]).unwrap();
        assert_eq!(sq.smallest_symbol(), 5);

        let sq = Square::from_rows(vec![vec![0, 1], vec![1, 0]]).unwrap();
        assert_eq!(sq.smallest_symbol(), 0);
    }

    #[test]
    fn test_to_rows_round_trip() {
        let rows = vec![vec![0, 1, 2], vec![1, 2, 0], vec![2, 0, 1]];
        let sq = Square::from_rows(rows.clone()).unwrap();
        assert_eq!(sq.to_rows(), rows);
    }

    #[test]
    fn test_display() {
        let sq = Square::from_rows(vec![vec![0, 1], vec![1, 0]]).unwrap();
        assert_eq!(format!("{sq}"), "[0, 1]\n[1, 0]\n");
    }
}
