//! Error types for the spotit library.
//!
//! This module provides comprehensive error handling using the `thiserror` crate,
//! with specific error variants for shape validation, MOLS verification failures,
//! standard-form normalization, and card-layout validation.

use thiserror::Error;

use crate::mols::verify::LatinViolation;

/// The main error type for the spotit library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // ============ Shape Errors ============
    /// Input matrices are not square, not of uniform size, or otherwise
    /// dimensionally inconsistent.
    #[error("shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch {
        /// Expected shape description.
        expected: String,
        /// Actual shape description.
        actual: String,
    },

    // ============ MOLS Verification Errors ============
    /// A member of the input set is not a Latin square.
    #[error("square {index} is not a latin square ({violation})")]
    NotLatinSquare {
        /// Zero-based index of the offending square in the input set.
        index: usize,
        /// The first row or column violation found.
        violation: LatinViolation,
    },

    /// Two members of the input set are not orthogonal.
    #[error("squares {first} and {second} are not orthogonal")]
    NotOrthogonal {
        /// Zero-based index of the first square of the failing pair.
        first: usize,
        /// Zero-based index of the second square of the failing pair.
        second: usize,
    },

    /// The set does not contain the n-1 squares required of a complete set.
    #[error("incomplete MOLS set for order {order}: expected {expected} squares, got {actual}")]
    NotCompleteMols {
        /// The order of the squares in the set.
        order: usize,
        /// The required member count (order - 1).
        expected: usize,
        /// The supplied member count.
        actual: usize,
    },

    /// Neither row- nor column-standardization can bring the set to
    /// standard form.
    #[error("MOLS set of order {order} is not in standard form and cannot be normalized")]
    NotStandardForm {
        /// The order of the squares in the set.
        order: usize,
    },

    // ============ Catalogue Errors ============
    /// No reference MOLS set is available for the requested order.
    #[error("no reference MOLS set for order {0}")]
    UnknownOrder(usize),

    // ============ Layout Errors ============
    /// A card layout's shape does not match the expected group/card counts
    /// for its declared size, or a card carries an out-of-band symbol.
    #[error("invalid layout: {message}")]
    InvalidLayout {
        /// Description of what is invalid.
        message: String,
    },
}

/// A specialized `Result` type for spotit operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Create a new `ShapeMismatch` error.
    #[must_use]
    pub fn shape_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::ShapeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create a new `InvalidLayout` error.
    #[must_use]
    pub fn invalid_layout(message: impl Into<String>) -> Self {
        Self::InvalidLayout {
            message: message.into(),
        }
    }
}
