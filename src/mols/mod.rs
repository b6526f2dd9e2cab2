//! Complete sets of mutually orthogonal Latin squares.
//!
//! ## Overview
//!
//! - [`MolsSet`]: a validated, immutable complete MOLS set
//! - [`verify`]: the Latin-square / orthogonality / MOLS checks
//!
//! A [`MolsSet`] can only be constructed from squares that pass every check a
//! deck conversion needs: uniform order, complete member count (n − 1 squares
//! of order n), mutual orthogonality, and reducibility to standard form.
//! Construction either fails completely or yields a value every transform
//! accepts.

mod standard;
pub mod verify;

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::square::Square;

use standard::StandardKind;
use verify::MolsFailure;

/// A complete set of mutually orthogonal Latin squares of one order.
///
/// Immutable after construction; [`MolsSet::standardize`] returns a fresh
/// value rather than mutating in place.
///
/// # Example
///
/// ```
/// use spotit::{MolsSet, Square};
///
/// let a = Square::from_rows(vec![vec![0, 1], vec![1, 0]]).unwrap();
/// let mols = MolsSet::new(vec![a]).unwrap();
///
/// assert_eq!(mols.order(), 2);
/// assert_eq!(mols.count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MolsSet {
    squares: Vec<Square>,
    order: usize,
    standard: StandardKind,
}

impl MolsSet {
    /// Build a validated MOLS set from caller-supplied squares.
    ///
    /// Validation runs in order and fails fast; no partially-built value is
    /// observable.
    ///
    /// # Errors
    ///
    /// - [`Error::ShapeMismatch`]: empty input or squares of differing order
    /// - [`Error::NotCompleteMols`]: member count is not order − 1
    /// - [`Error::NotLatinSquare`] / [`Error::NotOrthogonal`]: the set fails
    ///   the MOLS check
    /// - [`Error::NotStandardForm`]: neither row- nor column-standardization
    ///   applies
    pub fn new(squares: Vec<Square>) -> Result<Self> {
        let first = squares
            .first()
            .ok_or_else(|| Error::shape_mismatch("at least one square", "empty set"))?;
        let order = first.order();

        for (idx, sq) in squares.iter().enumerate() {
            if sq.order() != order {
                return Err(Error::shape_mismatch(
                    format!("order {order} (from square 0)"),
                    format!("order {} (square {idx})", sq.order()),
                ));
            }
        }

        if squares.len() != order - 1 {
            return Err(Error::NotCompleteMols {
                order,
                expected: order - 1,
                actual: squares.len(),
            });
        }

        let report = verify::check_mols(&squares)?;
        if let Some(failure) = report.failure() {
            return Err(match *failure {
                MolsFailure::NotLatin { index, violation } => {
                    Error::NotLatinSquare { index, violation }
                }
                MolsFailure::NotOrthogonal { pair, .. } => Error::NotOrthogonal {
                    first: pair.0,
                    second: pair.1,
                },
            });
        }

        let standard = standard::classify(&squares)?;

        Ok(Self {
            squares,
            order,
            standard,
        })
    }

    /// The order n of every square in the set.
    #[must_use]
    pub fn order(&self) -> usize {
        self.order
    }

    /// The number of squares (n − 1 for a complete set).
    #[must_use]
    pub fn count(&self) -> usize {
        self.squares.len()
    }

    /// The member squares, in input order.
    #[must_use]
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Get a member square by index.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    #[must_use]
    pub fn get(&self, idx: usize) -> &Square {
        &self.squares[idx]
    }

    /// Whether the set is already row-standard.
    #[must_use]
    pub fn is_standard(&self) -> bool {
        self.standard == StandardKind::Row
    }

    /// Return the set in standard form.
    ///
    /// A row-standard set comes back unchanged; a column-standard set comes
    /// back with every square transposed. The receiver is never mutated, and
    /// the operation is idempotent.
    ///
    /// # Example
    ///
    /// ```
    /// use spotit::{MolsSet, Square};
    ///
    /// let a = Square::from_rows(vec![
    ///     vec![0, 1, 2],
    ///     vec![1, 2, 0],
    ///     vec![2, 0, 1],
    /// ])
    /// .unwrap();
    /// let b = Square::from_rows(vec![
    ///     vec![0, 1, 2],
    ///     vec![2, 0, 1],
    ///     vec![1, 2, 0],
    /// ])
    /// .unwrap();
    ///
    /// let mols = MolsSet::new(vec![a, b]).unwrap();
    /// let std_form = mols.standardize();
    /// assert_eq!(std_form, std_form.standardize());
    /// ```
    #[must_use]
    pub fn standardize(&self) -> Self {
        match self.standard {
            StandardKind::Row => self.clone(),
            // transposing every square turns the column criterion into the
            // row criterion
            StandardKind::Column => Self {
                squares: self.squares.iter().map(Square::transposed).collect(),
                order: self.order,
                standard: StandardKind::Row,
            },
        }
    }

    /// Export the set as nested rows, one entry per square.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<Vec<u32>>> {
        self.squares.iter().map(Square::to_rows).collect()
    }
}

impl fmt::Display for MolsSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MOLS({})", self.order)?;
        for square in &self.squares {
            writeln!(f)?;
            write!(f, "{square}")?;
        }
        Ok(())
    }
}
