//! Latin-square and orthogonality verification.
//!
//! Every check comes in two forms: a `check_*` function returning a structured
//! report, and a boolean `is_*`/`are_*` wrapper derived from it. Reports carry
//! the exact violating positions and implement [`fmt::Display`] to render the
//! human-readable trace; printing a report is the verbose mode and can never
//! affect a boolean result.
//!
//! ## Checks
//!
//! - [`check_latin_square`]: no repeated symbol in any row or column. Rows are
//!   scanned first; the first row violation stops the scan without looking at
//!   columns.
//! - [`check_orthogonal`]: superimposing the two squares yields n² distinct
//!   symbol pairs. On failure, *every* repeated pair is reported with its
//!   positions.
//! - [`check_mols`]: every square is Latin, then every pair (i, j) with i < j
//!   is orthogonal, short-circuiting on the first failure of either stage. The
//!   report records each check actually performed, so callers can observe the
//!   short-circuit.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::error::{Error, Result};
use crate::square::Square;
use crate::utils::{pairs, superimpose};

/// The first Latin-property violation found in a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatinViolation {
    /// A row contains a repeated symbol.
    Row(usize),
    /// A column contains a repeated symbol.
    Column(usize),
}

impl fmt::Display for LatinViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row(idx) => write!(f, "row {idx}"),
            Self::Column(idx) => write!(f, "column {idx}"),
        }
    }
}

/// Result of checking a single square for the Latin property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatinReport {
    violation: Option<LatinViolation>,
}

impl LatinReport {
    /// Whether the square is a Latin square.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.violation.is_none()
    }

    /// The first violation found, if any.
    #[must_use]
    pub fn violation(&self) -> Option<LatinViolation> {
        self.violation
    }
}

impl fmt::Display for LatinReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.violation {
            Some(v) => write!(f, "first repeated number in {v}"),
            None => write!(f, "latin square: ok"),
        }
    }
}

/// A symbol tuple occurring more than once in a superimposed sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatedPair {
    /// The repeated symbol tuple (one entry per superimposed square).
    pub pair: Vec<u32>,
    /// Every occurrence, translated from its flat index to `(index % n,
    /// index / n)` against the row-major superimposed traversal.
    pub positions: Vec<(usize, usize)>,
}

impl fmt::Display for RepeatedPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pair: Vec<String> = self.pair.iter().map(ToString::to_string).collect();
        write!(
            f,
            "repeated ({}) at (row, column): {:?}",
            pair.join(", "),
            self.positions
        )
    }
}

/// Result of checking two squares for orthogonality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrthogonalityReport {
    repeats: Vec<RepeatedPair>,
}

impl OrthogonalityReport {
    /// Whether the two squares are orthogonal.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.repeats.is_empty()
    }

    /// Every repeated pair, in first-occurrence order.
    #[must_use]
    pub fn repeats(&self) -> &[RepeatedPair] {
        &self.repeats
    }

    /// Consume the report, returning the repeated pairs.
    #[must_use]
    pub fn into_repeats(self) -> Vec<RepeatedPair> {
        self.repeats
    }
}

impl fmt::Display for OrthogonalityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.repeats.is_empty() {
            return writeln!(f, "orthogonal: ok");
        }
        for repeat in &self.repeats {
            writeln!(f, "{repeat}")?;
        }
        Ok(())
    }
}

/// One check performed while walking a candidate MOLS set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStep {
    /// The Latin-square check of a single member.
    LatinSquare {
        /// Zero-based index of the square checked.
        index: usize,
    },
    /// The orthogonality check of a pair of members.
    Orthogonality {
        /// Zero-based indices of the pair checked.
        pair: (usize, usize),
    },
}

impl fmt::Display for CheckStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LatinSquare { index } => write!(f, "checking latin square {}", index + 1),
            Self::Orthogonality { pair: (i, j) } => write!(
                f,
                "checking orthogonality of latin squares ({}, {})",
                i + 1,
                j + 1
            ),
        }
    }
}

/// The reason a candidate set failed the MOLS check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MolsFailure {
    /// A member is not a Latin square.
    NotLatin {
        /// Zero-based index of the offending square.
        index: usize,
        /// The first row or column violation.
        violation: LatinViolation,
    },
    /// A pair of members is not orthogonal.
    NotOrthogonal {
        /// Zero-based indices of the failing pair.
        pair: (usize, usize),
        /// Every repeated symbol pair of the failing superimposition.
        repeats: Vec<RepeatedPair>,
    },
}

/// Result of checking a candidate set of squares for mutual orthogonality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MolsReport {
    steps: Vec<CheckStep>,
    failure: Option<MolsFailure>,
}

impl MolsReport {
    /// Whether the set is a set of mutually orthogonal Latin squares.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.failure.is_none()
    }

    /// The checks performed, in execution order.
    ///
    /// Both stages short-circuit, so a failed report ends at the failing
    /// check: a set whose second square is not Latin produces no
    /// [`CheckStep::Orthogonality`] entries at all.
    #[must_use]
    pub fn steps(&self) -> &[CheckStep] {
        &self.steps
    }

    /// The failure that stopped the walk, if any.
    #[must_use]
    pub fn failure(&self) -> Option<&MolsFailure> {
        self.failure.as_ref()
    }
}

impl fmt::Display for MolsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            writeln!(f, "{step}")?;
        }
        match &self.failure {
            None => writeln!(f, "mutually orthogonal latin squares: ok"),
            Some(MolsFailure::NotLatin { violation, .. }) => {
                writeln!(f, "first repeated number in {violation}")
            }
            Some(MolsFailure::NotOrthogonal { repeats, .. }) => {
                for repeat in repeats {
                    writeln!(f, "{repeat}")?;
                }
                Ok(())
            }
        }
    }
}

/// Check a square for the Latin property.
///
/// Rows are scanned before columns; the scan stops at the first violation, so
/// a square with a bad row never has its columns examined.
///
/// # Example
///
/// ```
/// use spotit::{check_latin_square, Square};
/// use spotit::mols::verify::LatinViolation;
///
/// let bad = Square::from_rows(vec![
///     vec![0, 0, 1],
///     vec![1, 2, 0],
///     vec![2, 1, 2],
/// ])
/// .unwrap();
///
/// let report = check_latin_square(&bad);
/// assert_eq!(report.violation(), Some(LatinViolation::Row(0)));
/// ```
#[must_use]
pub fn check_latin_square(square: &Square) -> LatinReport {
    let n = square.order();
    let mut seen = HashSet::with_capacity(n);

    for r in 0..n {
        seen.clear();
        for value in square.row(r) {
            if !seen.insert(*value) {
                return LatinReport {
                    violation: Some(LatinViolation::Row(r)),
                };
            }
        }
    }

    for c in 0..n {
        seen.clear();
        for value in square.column(c) {
            if !seen.insert(*value) {
                return LatinReport {
                    violation: Some(LatinViolation::Column(c)),
                };
            }
        }
    }

    LatinReport { violation: None }
}

/// Whether a square is a Latin square.
#[must_use]
pub fn is_latin_square(square: &Square) -> bool {
    check_latin_square(square).is_valid()
}

/// Check two squares for orthogonality.
///
/// The squares are superimposed in row-major order; they are orthogonal iff
/// the n² symbol pairs are pairwise distinct. Every pair value occurring more
/// than once is reported, with each occurrence translated back to
/// `(index % n, index / n)` coordinates against the superimposed traversal.
///
/// # Errors
///
/// Returns [`crate::Error::ShapeMismatch`] if the squares differ in order.
pub fn check_orthogonal(a: &Square, b: &Square) -> Result<OrthogonalityReport> {
    let tuples = superimpose(&[a, b])?;
    Ok(OrthogonalityReport {
        repeats: repeated_tuples(&tuples, a.order()),
    })
}

/// Whether two squares are orthogonal. Differing orders count as not
/// orthogonal.
#[must_use]
pub fn are_orthogonal(a: &Square, b: &Square) -> bool {
    check_orthogonal(a, b).map_or(false, |r| r.is_valid())
}

/// Collect every tuple occurring more than once, in first-occurrence order,
/// with occurrences mapped to `(index % n, index / n)`.
fn repeated_tuples(tuples: &[Vec<u32>], n: usize) -> Vec<RepeatedPair> {
    let mut occurrences: HashMap<&[u32], Vec<usize>> = HashMap::new();
    for (idx, tuple) in tuples.iter().enumerate() {
        occurrences.entry(tuple.as_slice()).or_default().push(idx);
    }

    let mut emitted: HashSet<&[u32]> = HashSet::new();
    let mut repeats = Vec::new();
    for tuple in tuples {
        let positions = &occurrences[tuple.as_slice()];
        if positions.len() > 1 && emitted.insert(tuple.as_slice()) {
            repeats.push(RepeatedPair {
                pair: tuple.clone(),
                positions: positions.iter().map(|&idx| (idx % n, idx / n)).collect(),
            });
        }
    }
    repeats
}

/// Check a candidate set of squares for mutual orthogonality.
///
/// Every member is checked for the Latin property in input order first,
/// short-circuiting on the first failure; only then is each pair (i, j) with
/// i < j checked for orthogonality, again short-circuiting. The returned
/// report records the steps actually executed.
///
/// # Errors
///
/// Returns [`crate::Error::ShapeMismatch`] if the slice is empty or the
/// squares disagree on order.
pub fn check_mols(squares: &[Square]) -> Result<MolsReport> {
    let first = squares
        .first()
        .ok_or_else(|| Error::shape_mismatch("at least one square", "empty slice"))?;
    let n = first.order();
    for (idx, sq) in squares.iter().enumerate() {
        if sq.order() != n {
            return Err(Error::shape_mismatch(
                format!("order {n} (from square 0)"),
                format!("order {} (square {idx})", sq.order()),
            ));
        }
    }

    let mut steps = Vec::new();

    for (index, square) in squares.iter().enumerate() {
        steps.push(CheckStep::LatinSquare { index });
        if let Some(violation) = check_latin_square(square).violation() {
            return Ok(MolsReport {
                steps,
                failure: Some(MolsFailure::NotLatin { index, violation }),
            });
        }
    }

    for (i, j) in pairs(squares.len()) {
        steps.push(CheckStep::Orthogonality { pair: (i, j) });
        let report = check_orthogonal(&squares[i], &squares[j])?;
        if !report.is_valid() {
            return Ok(MolsReport {
                steps,
                failure: Some(MolsFailure::NotOrthogonal {
                    pair: (i, j),
                    repeats: report.into_repeats(),
                }),
            });
        }
    }

    Ok(MolsReport {
        steps,
        failure: None,
    })
}

/// Whether the squares form a set of mutually orthogonal Latin squares.
/// Shape mismatches count as failure.
#[must_use]
pub fn are_mols(squares: &[Square]) -> bool {
    check_mols(squares).map_or(false, |r| r.is_valid())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(rows: Vec<Vec<u32>>) -> Square {
        Square::from_rows(rows).unwrap()
    }

    fn cyclic(n: u32) -> Square {
        sq((0..n)
            .map(|r| (0..n).map(|c| (r + c) % n).collect())
            .collect())
    }

    #[test]
    fn test_latin_ok() {
        for n in 2..=7 {
            assert!(is_latin_square(&cyclic(n)), "cyclic order {n}");
        }
    }

    #[test]
    fn test_latin_row_violation() {
        // duplicate in row 0; columns also broken but rows are checked first
        let bad = sq(vec![vec![0, 0, 1], vec![1, 2, 0], vec![2, 1, 2]]);
        let report = check_latin_square(&bad);
        assert!(!report.is_valid());
        assert_eq!(report.violation(), Some(LatinViolation::Row(0)));
        assert_eq!(format!("{report}"), "first repeated number in row 0");
    }

    #[test]
    fn test_latin_column_violation() {
        // all rows fine, column 0 has a repeat
        let bad = sq(vec![
            vec![0, 1, 2, 3],
            vec![0, 2, 3, 1],
            vec![2, 3, 0, 1],
            vec![3, 0, 1, 2],
        ]);
        let report = check_latin_square(&bad);
        assert_eq!(report.violation(), Some(LatinViolation::Column(0)));
    }

    #[test]
    fn test_latin_reports_first_row() {
        let bad = sq(vec![vec![0, 1, 2], vec![1, 1, 0], vec![2, 2, 1]]);
        assert_eq!(
            check_latin_square(&bad).violation(),
            Some(LatinViolation::Row(1))
        );
    }

    #[test]
    fn test_orthogonal_ok() {
        let a = sq(vec![vec![0, 1, 2], vec![1, 2, 0], vec![2, 0, 1]]);
        let b = sq(vec![vec![0, 1, 2], vec![2, 0, 1], vec![1, 2, 0]]);
        assert!(are_orthogonal(&a, &b));
        assert!(check_orthogonal(&a, &b).unwrap().repeats().is_empty());
    }

    #[test]
    fn test_orthogonal_failure_reports_positions() {
        // not orthogonal to itself: every diagonal pair repeats
        let a = cyclic(3);
        let report = check_orthogonal(&a, &a).unwrap();
        assert!(!report.is_valid());

        // pair (0, 0) occurs at flat indices 0, 5, 7
        let first = &report.repeats()[0];
        assert_eq!(first.pair, vec![0, 0]);
        assert_eq!(first.positions, vec![(0, 0), (2, 1), (1, 2)]);
    }

    #[test]
    fn test_orthogonal_known_repeat_coordinates() {
        // two order-4 squares sharing the pair (0, 1) at flat indices 1 and 10,
        // which translate to (1, 0) and (2, 2) under (idx % n, idx / n)
        let a = sq(vec![
            vec![0, 0, 0, 0],
            vec![1, 1, 1, 1],
            vec![2, 2, 0, 2],
            vec![3, 3, 3, 3],
        ]);
        let b = sq(vec![
            vec![0, 1, 2, 3],
            vec![0, 1, 2, 3],
            vec![0, 1, 1, 3],
            vec![0, 1, 2, 3],
        ]);
        let report = check_orthogonal(&a, &b).unwrap();
        let repeat = report
            .repeats()
            .iter()
            .find(|r| r.pair == vec![0, 1])
            .expect("pair (0, 1) repeats");
        assert_eq!(repeat.positions, vec![(1, 0), (2, 2)]);
    }

    #[test]
    fn test_orthogonal_shape_mismatch() {
        assert!(check_orthogonal(&cyclic(3), &cyclic(4)).is_err());
        assert!(!are_orthogonal(&cyclic(3), &cyclic(4)));
    }

    #[test]
    fn test_mols_ok() {
        let a = sq(vec![vec![0, 1, 2], vec![1, 2, 0], vec![2, 0, 1]]);
        let b = sq(vec![vec![0, 1, 2], vec![2, 0, 1], vec![1, 2, 0]]);
        let report = check_mols(&[a, b]).unwrap();
        assert!(report.is_valid());
        assert_eq!(report.steps().len(), 3); // 2 latin checks + 1 pair
    }

    #[test]
    fn test_mols_short_circuits_on_latin_failure() {
        let good = sq(vec![vec![0, 1, 2], vec![1, 2, 0], vec![2, 0, 1]]);
        let bad = sq(vec![vec![0, 1, 2], vec![0, 2, 1], vec![2, 0, 1]]);
        let also_good = sq(vec![vec![0, 1, 2], vec![2, 0, 1], vec![1, 2, 0]]);

        let report = check_mols(&[good, bad, also_good]).unwrap();
        assert!(!report.is_valid());

        // the walk stopped inside the latin stage: square 2 (index 1) failed
        // and no orthogonality pair was ever evaluated
        assert_eq!(
            report.steps(),
            &[
                CheckStep::LatinSquare { index: 0 },
                CheckStep::LatinSquare { index: 1 },
            ]
        );
        assert!(matches!(
            report.failure(),
            Some(MolsFailure::NotLatin { index: 1, .. })
        ));
    }

    #[test]
    fn test_mols_short_circuits_on_orthogonality_failure() {
        let a = cyclic(3);
        let b = sq(vec![vec![0, 1, 2], vec![2, 0, 1], vec![1, 2, 0]]);
        // a and a.clone() fail the very first pair (0, 1)
        let report = check_mols(&[a.clone(), a, b]).unwrap();
        assert!(!report.is_valid());

        let pair_steps: Vec<_> = report
            .steps()
            .iter()
            .filter(|s| matches!(s, CheckStep::Orthogonality { .. }))
            .collect();
        assert_eq!(pair_steps, vec![&CheckStep::Orthogonality { pair: (0, 1) }]);
    }

    #[test]
    fn test_mols_pair_order() {
        let a = sq(vec![vec![0, 1, 2], vec![1, 2, 0], vec![2, 0, 1]]);
        let b = sq(vec![vec![0, 1, 2], vec![2, 0, 1], vec![1, 2, 0]]);
        // order 3 has only 2 MOLS; a third member must collide with one of
        // them, so the pairs are walked in (0,1), (0,2), (1,2) order until the
        // failure surfaces
        let report = check_mols(&[a.clone(), b, a]).unwrap();
        assert!(!report.is_valid());
        assert!(matches!(
            report.failure(),
            Some(MolsFailure::NotOrthogonal { pair: (0, 2), .. })
        ));
    }

    #[test]
    fn test_mols_empty_and_mismatched() {
        assert!(check_mols(&[]).is_err());
        assert!(!are_mols(&[]));
        assert!(check_mols(&[cyclic(3), cyclic(4)]).is_err());
    }

    #[test]
    fn test_display_trace() {
        let a = cyclic(3);
        let report = check_mols(&[a.clone(), a]).unwrap();
        let trace = format!("{report}");
        assert!(trace.contains("checking latin square 1"));
        assert!(trace.contains("checking orthogonality of latin squares (1, 2)"));
        assert!(trace.contains("repeated (0, 0) at (row, column)"));
    }
}
