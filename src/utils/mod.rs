//! Matrix superimposition and small combinatorial helpers.
//!
//! The central utility is [`superimpose`], which overlays k equal-order squares
//! into the flat row-major sequence of per-cell k-tuples that the verifier, the
//! standard-form normalizer, and both transforms all consume.

use std::borrow::Borrow;

use crate::error::{Error, Result};
use crate::square::Square;

/// Superimpose k squares of identical order n into n² k-tuples.
///
/// The tuples are produced in row-major traversal order: cell (i, j) lands at
/// index `i * n + j`. That order is relied upon downstream: repeated-pair
/// diagnostics translate an index back to coordinates as
/// `(index % n, index / n)`.
///
/// # Errors
///
/// Returns [`Error::ShapeMismatch`] if the slice is empty or the squares
/// disagree on order.
///
/// # Example
///
/// ```
/// use spotit::{utils::superimpose, Square};
///
/// let a = Square::from_rows(vec![vec![0, 1], vec![1, 0]]).unwrap();
/// let b = Square::from_rows(vec![vec![1, 0], vec![0, 1]]).unwrap();
///
/// let tuples = superimpose(&[a, b]).unwrap();
/// assert_eq!(tuples.len(), 4);
/// assert_eq!(tuples[0], vec![0, 1]); // cell (0, 0)
/// assert_eq!(tuples[1], vec![1, 0]); // cell (0, 1)
/// ```
pub fn superimpose<S: Borrow<Square>>(squares: &[S]) -> Result<Vec<Vec<u32>>> {
    let first = squares
        .first()
        .ok_or_else(|| Error::shape_mismatch("at least one square", "empty slice"))?;
    let n = first.borrow().order();

    for (idx, sq) in squares.iter().enumerate() {
        if sq.borrow().order() != n {
            return Err(Error::shape_mismatch(
                format!("order {n} (from square 0)"),
                format!("order {} (square {idx})", sq.borrow().order()),
            ));
        }
    }

    let mut tuples = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            tuples.push(squares.iter().map(|sq| sq.borrow().get(i, j)).collect());
        }
    }
    Ok(tuples)
}

/// Enumerate all index pairs (i, j) with i < j over `0..n`.
///
/// Pairs come out in the order of enumerating 2-combinations of a sequence,
/// (0,1), (0,2), ..., (0,n-1), (1,2), ...; this is the order in which the
/// MOLS checker walks pairwise orthogonality.
///
/// # Example
///
/// ```
/// use spotit::utils::pairs;
///
/// let p: Vec<_> = pairs(4).collect();
/// assert_eq!(p, vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
/// ```
pub fn pairs(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).flat_map(move |i| ((i + 1)..n).map(move |j| (i, j)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_superimpose_order() {
        let a = Square::from_rows(vec![vec![0, 1], vec![1, 0]]).unwrap();
        let b = Square::from_rows(vec![vec![2, 3], vec![3, 2]]).unwrap();

        let tuples = superimpose(&[a, b]).unwrap();
        assert_eq!(
            tuples,
            vec![vec![0, 2], vec![1, 3], vec![1, 3], vec![0, 2]]
        );
    }

    #[test]
    fn test_superimpose_single() {
        let a = Square::from_rows(vec![vec![0, 1], vec![1, 0]]).unwrap();
        let tuples = superimpose(std::slice::from_ref(&a)).unwrap();
        assert_eq!(tuples, vec![vec![0], vec![1], vec![1], vec![0]]);
    }

    #[test]
    fn test_superimpose_mismatch() {
        let a = Square::from_rows(vec![vec![0, 1], vec![1, 0]]).unwrap();
        let b = Square::from_rows(vec![vec![0, 1, 2], vec![1, 2, 0], vec![2, 0, 1]]).unwrap();
        assert!(superimpose(&[a, b]).is_err());
        assert!(superimpose::<Square>(&[]).is_err());
    }

    #[test]
    fn test_pairs() {
        assert_eq!(pairs(0).count(), 0);
        assert_eq!(pairs(1).count(), 0);
        assert_eq!(pairs(2).collect::<Vec<_>>(), vec![(0, 1)]);

        let p: Vec<_> = pairs(5).collect();
        assert_eq!(p.len(), 10);
        assert_eq!(p[0], (0, 1));
        assert_eq!(p[9], (3, 4));
    }
}
