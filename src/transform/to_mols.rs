//! Deck → MOLS conversion.

use crate::deck::Deck;
use crate::error::{Error, Result};
use crate::mols::MolsSet;
use crate::square::Square;

use super::Numbering;

/// Recover the generating MOLS set from a full deck.
///
/// Exactly one leading group is trivial: the starting card. Every group
/// r + 1 supplies row r of every square; within a card, slot i (after the
/// anchor and the column marker) belongs to square i and decodes through the
/// deck's numbering scheme. The recovered squares are revalidated through
/// [`MolsSet::new`], so a structurally sound deck that does not actually
/// come from a MOLS set still fails loudly.
///
/// Inverts [`super::mols_to_deck`] exactly:
/// `deck_to_mols(&mols_to_deck(&s))` equals `s.standardize()`
/// element-for-element.
///
/// # Errors
///
/// - [`Error::InvalidLayout`]: the deck is too small to encode any squares,
///   or a card symbol falls outside its slot's band
/// - any [`MolsSet::new`] error: the decoded squares are not a complete,
///   standard-form-reducible MOLS set
///
/// # Example
///
/// ```
/// use spotit::{catalogue, deck_to_mols, mols_to_deck};
///
/// let mols = catalogue::get_by_order(5).unwrap();
/// let recovered = deck_to_mols(&mols_to_deck(&mols)).unwrap();
/// assert_eq!(recovered, mols.standardize());
/// ```
pub fn deck_to_mols(deck: &Deck) -> Result<MolsSet> {
    let n = deck.card_size();
    if n < 2 {
        return Err(Error::invalid_layout(format!(
            "card size {n} cannot encode a complete MOLS set"
        )));
    }
    let k = n - 1;
    let numbering = Numbering::new(n, deck.smallest_symbol());

    // rows[i][r][j] collects square i, filled one deck group per row r
    let mut rows = vec![vec![vec![0u32; n]; n]; k];

    for r in 0..n {
        let group = deck
            .group(r + 1)
            .ok_or_else(|| Error::invalid_layout(format!("missing group {}", r + 1)))?;
        for (j, card) in group.iter().enumerate() {
            for (i, row) in rows.iter_mut().enumerate() {
                let num = card.symbols().get(2 + i).copied().ok_or_else(|| {
                    Error::invalid_layout(format!(
                        "card {j} of group {} has no slot for square {i}",
                        r + 1
                    ))
                })?;
                row[r][j] = numbering.decode(i, num)?;
            }
        }
    }

    let squares = rows
        .into_iter()
        .map(Square::from_rows)
        .collect::<Result<Vec<_>>>()?;
    MolsSet::new(squares)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue;
    use crate::transform::mols_to_deck;

    #[test]
    fn test_round_trip_all_catalogue_orders() {
        for order in catalogue::available_orders() {
            let mols = catalogue::get_by_order(order).unwrap();
            let recovered = deck_to_mols(&mols_to_deck(&mols)).unwrap();
            assert_eq!(recovered, mols.standardize(), "order {order}");
        }
    }

    #[test]
    fn test_golden_deck_inverts_to_known_squares() {
        let deck = mols_to_deck(&catalogue::get_by_order(4).unwrap());
        let recovered = deck_to_mols(&deck).unwrap();

        assert_eq!(
            recovered.get(0).to_rows(),
            vec![
                vec![0, 1, 2, 3],
                vec![1, 0, 3, 2],
                vec![2, 3, 0, 1],
                vec![3, 2, 1, 0],
            ]
        );
        assert_eq!(
            recovered.get(1).to_rows(),
            vec![
                vec![0, 1, 2, 3],
                vec![3, 2, 1, 0],
                vec![1, 0, 3, 2],
                vec![2, 3, 0, 1],
            ]
        );
        assert_eq!(
            recovered.get(2).to_rows(),
            vec![
                vec![0, 1, 2, 3],
                vec![2, 3, 0, 1],
                vec![3, 2, 1, 0],
                vec![1, 0, 3, 2],
            ]
        );
    }

    #[test]
    fn test_raw_deck_input() {
        // a deck rebuilt from raw groups (canonical alphabet) inverts the
        // same way as the generated value
        let mols = catalogue::get_by_order(4).unwrap();
        let deck = mols_to_deck(&mols);
        let rebuilt = Deck::from_groups(deck.to_groups()).unwrap();
        assert_eq!(deck_to_mols(&rebuilt).unwrap(), mols.standardize());
    }

    #[test]
    fn test_out_of_band_symbol() {
        let deck = mols_to_deck(&catalogue::get_by_order(4).unwrap());
        let mut raw = deck.to_groups();
        // marker-band value in a square slot
        raw[1][0][2] = 6;
        let broken = Deck::from_groups(raw).unwrap();
        assert!(matches!(
            deck_to_mols(&broken),
            Err(Error::InvalidLayout { .. })
        ));
    }

    #[test]
    fn test_corrupted_deck_fails_mols_validation() {
        let deck = mols_to_deck(&catalogue::get_by_order(4).unwrap());
        let mut raw = deck.to_groups();
        // swap two in-band symbols within one group so square 0 decodes with
        // a repeated value in row 1
        let other = raw[2][1][2];
        raw[2][0][2] = other;
        let broken = Deck::from_groups(raw).unwrap();
        assert!(matches!(
            deck_to_mols(&broken),
            Err(Error::NotLatinSquare { .. })
        ));
    }

    #[test]
    fn test_too_small_deck() {
        let raw = vec![vec![vec![1, 2]], vec![vec![1, 3]]];
        let deck = Deck::from_groups(raw).unwrap();
        assert!(deck_to_mols(&deck).is_err());
    }
}
