//! The Spot It! single-overlap check.
//!
//! Every pair of distinct cards in a valid layout shares exactly one symbol.
//! The checker walks every card of every group from group 2 onward against
//! every card of every later group (the starting group and group 1 are
//! trivial by the layout's construction) and records *all* offending pairs
//! in one pass rather than stopping at the first.

use std::fmt;

use crate::deck::{Card, Deck};

/// A pair of cards sharing zero or more than one symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlapViolation {
    /// (group, card) position of the first card.
    pub first: (usize, usize),
    /// (group, card) position of the second card.
    pub second: (usize, usize),
    /// The first card.
    pub first_card: Card,
    /// The second card.
    pub second_card: Card,
    /// The actual intersection, in first-card symbol order.
    pub shared: Vec<u32>,
}

impl fmt::Display for OverlapViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\tshare {:?}",
            self.first_card, self.second_card, self.shared
        )
    }
}

/// Result of checking a deck for the single-overlap property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotItReport {
    violations: Vec<OverlapViolation>,
}

impl SpotItReport {
    /// Whether the layout satisfies the single-overlap property.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Every offending card pair, in ascending (group, card) scan order.
    #[must_use]
    pub fn violations(&self) -> &[OverlapViolation] {
        &self.violations
    }
}

impl fmt::Display for SpotItReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.violations.is_empty() {
            return writeln!(f, "spot it layout: ok");
        }
        for violation in &self.violations {
            writeln!(f, "{violation}")?;
        }
        Ok(())
    }
}

/// Check every cross-group card pair from group 2 onward.
///
/// The scan does not short-circuit: all violations surface in one pass, in
/// ascending (group, card, group, card) order.
///
/// # Example
///
/// ```
/// use spotit::{catalogue, check_spotit, mols_to_deck};
///
/// let deck = mols_to_deck(&catalogue::get_by_order(4).unwrap());
/// assert!(check_spotit(&deck).is_valid());
/// ```
#[must_use]
pub fn check_spotit(deck: &Deck) -> SpotItReport {
    let groups = deck.groups();
    let mut violations = Vec::new();

    for (g1, group1) in groups.iter().enumerate().skip(2) {
        for (c1, card1) in group1.iter().enumerate() {
            for (g2, group2) in groups.iter().enumerate().skip(g1 + 1) {
                for (c2, card2) in group2.iter().enumerate() {
                    let shared = card1.shared_with(card2);
                    if shared.len() != 1 {
                        violations.push(OverlapViolation {
                            first: (g1, c1),
                            second: (g2, c2),
                            first_card: card1.clone(),
                            second_card: card2.clone(),
                            shared,
                        });
                    }
                }
            }
        }
    }

    SpotItReport { violations }
}

/// Whether the deck satisfies the single-overlap property.
#[must_use]
pub fn is_valid_spotit_layout(deck: &Deck) -> bool {
    check_spotit(deck).is_valid()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue;
    use crate::transform::mols_to_deck;

    #[test]
    fn test_valid_decks() {
        for order in catalogue::available_orders() {
            let deck = mols_to_deck(&catalogue::get_by_order(order).unwrap());
            let report = check_spotit(&deck);
            assert!(report.is_valid(), "order {order}: {report}");
        }
    }

    #[test]
    fn test_corrupted_symbol_is_reported() {
        let deck = mols_to_deck(&catalogue::get_by_order(4).unwrap());
        let mut raw = deck.to_groups();
        // make card 0 of group 2 collide twice with some group-3 card and
        // lose its overlap with another
        let stolen = raw[3][0][2];
        raw[2][0][2] = stolen;
        let broken = Deck::from_groups(raw).unwrap();

        let report = check_spotit(&broken);
        assert!(!report.is_valid());
        // the damaged card sits in group 2, so every violation names it first
        assert!(report
            .violations()
            .iter()
            .all(|v| v.first == (2, 0)));
        // at least one pair now shares two symbols
        assert!(report.violations().iter().any(|v| v.shared.len() == 2));
        // and at least one pair lost its single shared symbol
        assert!(report.violations().iter().any(|v| v.shared.is_empty()));
    }

    #[test]
    fn test_scan_does_not_short_circuit() {
        let deck = mols_to_deck(&catalogue::get_by_order(5).unwrap());
        let mut raw = deck.to_groups();
        // two independent corruptions in different groups
        let first_steal = raw[3][0][2];
        raw[2][0][2] = first_steal;
        let second_steal = raw[5][1][3];
        raw[4][1][3] = second_steal;
        let broken = Deck::from_groups(raw).unwrap();

        let report = check_spotit(&broken);
        let firsts: Vec<_> = report.violations().iter().map(|v| v.first).collect();
        assert!(firsts.contains(&(2, 0)));
        assert!(firsts.contains(&(4, 1)));

        // violations come out in ascending scan order
        let mut keys: Vec<_> = report
            .violations()
            .iter()
            .map(|v| (v.first, v.second))
            .collect();
        let sorted = {
            let mut s = keys.clone();
            s.sort_unstable();
            s
        };
        keys.sort_unstable();
        assert_eq!(keys, sorted);
    }
}
