//! Catalogue of reference MOLS sets for small orders.
//!
//! This module provides pre-verified complete sets of mutually orthogonal
//! Latin squares in standard form, useful for demos, benches, and as known
//! inputs for the deck transforms. The tables are fixed published constants;
//! constructing a complete set for an arbitrary order is out of scope.

use crate::error::{Error, Result};
use crate::mols::MolsSet;
use crate::square::Square;

/// Retrieve the reference complete MOLS set for an order.
///
/// Supported orders:
/// - **3**: 2 squares
/// - **4**: 3 squares
/// - **5**: 4 squares
///
/// # Errors
///
/// Returns [`Error::UnknownOrder`] for any other order.
///
/// # Example
///
/// ```
/// use spotit::catalogue::get_by_order;
///
/// let mols = get_by_order(5).unwrap();
/// assert_eq!(mols.order(), 5);
/// assert_eq!(mols.count(), 4);
/// assert!(mols.is_standard());
/// ```
pub fn get_by_order(order: usize) -> Result<MolsSet> {
    let tables: &[&[&[u32]]] = match order {
        3 => &[
            &[&[0, 1, 2], &[1, 2, 0], &[2, 0, 1]],
            &[&[0, 1, 2], &[2, 0, 1], &[1, 2, 0]],
        ],
        4 => &[
            &[&[0, 1, 2, 3], &[1, 0, 3, 2], &[2, 3, 0, 1], &[3, 2, 1, 0]],
            &[&[0, 1, 2, 3], &[3, 2, 1, 0], &[1, 0, 3, 2], &[2, 3, 0, 1]],
            &[&[0, 1, 2, 3], &[2, 3, 0, 1], &[3, 2, 1, 0], &[1, 0, 3, 2]],
        ],
        5 => &[
            &[
                &[0, 1, 2, 3, 4],
                &[1, 2, 3, 4, 0],
                &[2, 3, 4, 0, 1],
                &[3, 4, 0, 1, 2],
                &[4, 0, 1, 2, 3],
            ],
            &[
                &[0, 1, 2, 3, 4],
                &[2, 3, 4, 0, 1],
                &[4, 0, 1, 2, 3],
                &[1, 2, 3, 4, 0],
                &[3, 4, 0, 1, 2],
            ],
            &[
                &[0, 1, 2, 3, 4],
                &[3, 4, 0, 1, 2],
                &[1, 2, 3, 4, 0],
                &[4, 0, 1, 2, 3],
                &[2, 3, 4, 0, 1],
            ],
            &[
                &[0, 1, 2, 3, 4],
                &[4, 0, 1, 2, 3],
                &[3, 4, 0, 1, 2],
                &[2, 3, 4, 0, 1],
                &[1, 2, 3, 4, 0],
            ],
        ],
        _ => return Err(Error::UnknownOrder(order)),
    };

    let squares = tables
        .iter()
        .map(|rows| Square::from_rows(rows.iter().map(|r| r.to_vec()).collect()))
        .collect::<Result<Vec<_>>>()?;
    MolsSet::new(squares)
}

/// The orders the catalogue covers, ascending.
#[must_use]
pub fn available_orders() -> Vec<usize> {
    vec![3, 4, 5]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mols::verify::are_mols;

    #[test]
    fn test_every_order_is_valid() {
        for order in available_orders() {
            let mols = get_by_order(order).unwrap();
            assert_eq!(mols.order(), order);
            assert_eq!(mols.count(), order - 1);
            assert!(mols.is_standard(), "order {order} should be row-standard");
            assert!(are_mols(mols.squares()));
        }
    }

    #[test]
    fn test_unknown_order() {
        assert_eq!(get_by_order(6), Err(Error::UnknownOrder(6)));
        assert_eq!(get_by_order(0), Err(Error::UnknownOrder(0)));
    }
}
