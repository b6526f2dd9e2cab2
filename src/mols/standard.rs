//! Standard-form classification for MOLS sets.
//!
//! A set is *row-standard* when the constant tuples (v, ..., v), one per
//! alphabet value, all occur within the first row of the superimposed table,
//! and *column-standard* when they all occur at the head of a row. A
//! column-standard set becomes row-standard by transposing every member.

use crate::error::{Error, Result};
use crate::square::Square;
use crate::utils::superimpose;

/// How a set reaches standard form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub(super) enum StandardKind {
    /// Already row-standard; no normalization needed.
    Row,
    /// Column-standard; transposing every square yields a row-standard set.
    Column,
}

/// Classify a uniform-order set of squares.
///
/// # Errors
///
/// Returns [`Error::NotStandardForm`] when neither the row nor the column
/// criterion holds, and [`Error::ShapeMismatch`] for empty or ragged input.
pub(super) fn classify(squares: &[Square]) -> Result<StandardKind> {
    let tuples = superimpose(squares)?;
    let n = squares[0].order();
    let k = squares.len();
    let smallest = squares[0].smallest_symbol();

    let constant = |delta: usize| vec![smallest + delta as u32; k];

    // row-standard: every constant tuple somewhere in the first n entries
    if (0..n).all(|d| tuples[..n].contains(&constant(d))) {
        return Ok(StandardKind::Row);
    }

    // column-standard: every constant tuple at the head of some row-group
    if (0..n).all(|d| (0..n).any(|r| tuples[r * n] == constant(d))) {
        return Ok(StandardKind::Column);
    }

    Err(Error::NotStandardForm { order: n })
}
