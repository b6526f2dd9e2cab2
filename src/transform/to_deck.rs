//! MOLS → deck conversion.

use crate::deck::{Card, Deck};
use crate::mols::MolsSet;

use super::Numbering;

/// Convert a complete MOLS set into a Spot It!-style deck.
///
/// The set is brought to standard form first, so two sets differing only by
/// simultaneous transposition produce the same deck. Group 0 holds the
/// starting card; group r + 1 holds one card per column j of row r, carrying
/// the group anchor, the column marker, and one band-encoded symbol per
/// square.
///
/// The resulting deck always satisfies the single-overlap property; that is
/// a consequence of mutual orthogonality, checked in tests rather than
/// enforced here.
///
/// # Example
///
/// ```
/// use spotit::{catalogue, mols_to_deck};
///
/// let deck = mols_to_deck(&catalogue::get_by_order(4).unwrap());
/// assert_eq!(deck.group(1).unwrap()[0].symbols(), &[1, 6, 10, 14, 18]);
/// ```
#[must_use]
pub fn mols_to_deck(mols: &MolsSet) -> Deck {
    let standardized = mols.standardize();
    let n = standardized.order();
    let numbering = Numbering::new(n, standardized.get(0).smallest_symbol());

    let mut groups = Vec::with_capacity(n + 1);
    groups.push(vec![Card::new(numbering.starting_card())]);

    for r in 0..n {
        groups.push(build_group(&standardized, &numbering, r));
    }

    Deck::from_parts(groups, n, numbering.smallest())
}

/// Lay out group r + 1 from row r of every square.
fn build_group(mols: &MolsSet, numbering: &Numbering, r: usize) -> Vec<Card> {
    let n = mols.order();
    let mut group = Vec::with_capacity(n);

    for j in 0..n {
        let mut symbols = Vec::with_capacity(n + 1);
        symbols.push(numbering.anchor(r));
        symbols.push(numbering.marker(j));
        for (i, square) in mols.squares().iter().enumerate() {
            symbols.push(numbering.encode(i, square.get(r, j)));
        }
        group.push(Card::new(symbols));
    }
    group
}
