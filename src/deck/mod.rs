//! Card and deck value types for the Spot It!-style layout.
//!
//! ## Overview
//!
//! - [`Card`]: an ordered sequence of symbols, the first being the group
//!   anchor
//! - [`Deck`]: the full layout; group 0 holds the single starting card,
//!   groups 1..=n hold n cards each
//! - [`verify`]: the pairwise single-overlap check
//!
//! A deck of size n carries n² + 1 cards of n + 1 symbols each. Two decks
//! compare equal iff their groups, cards, and numbering constants all match.

pub mod verify;

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single card: ordered symbols, anchor first.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Card {
    symbols: Vec<u32>,
}

impl Card {
    pub(crate) fn new(symbols: Vec<u32>) -> Self {
        Self { symbols }
    }

    /// The card's group anchor (its first symbol).
    ///
    /// # Panics
    ///
    /// Panics if the card is empty; deck validation rules that out.
    #[must_use]
    pub fn anchor(&self) -> u32 {
        self.symbols[0]
    }

    /// All symbols on the card, anchor included, in order.
    #[must_use]
    pub fn symbols(&self) -> &[u32] {
        &self.symbols
    }

    /// The number of symbols on the card.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the card carries no symbols.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The symbols shared with another card, in this card's order.
    #[must_use]
    pub fn shared_with(&self, other: &Card) -> Vec<u32> {
        self.symbols
            .iter()
            .filter(|s| other.symbols.contains(s))
            .copied()
            .collect()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbols: Vec<String> = self.symbols.iter().map(ToString::to_string).collect();
        write!(f, "[{}]", symbols.join(", "))
    }
}

/// A full Spot It!-style card layout.
///
/// # Example
///
/// ```
/// use spotit::{catalogue, mols_to_deck};
///
/// let deck = mols_to_deck(&catalogue::get_by_order(4).unwrap());
///
/// assert_eq!(deck.card_size(), 4);
/// assert_eq!(deck.group_count(), 5);
/// assert_eq!(deck.starting_card().symbols(), &[1, 2, 3, 4, 5]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Deck {
    groups: Vec<Vec<Card>>,
    card_size: usize,
    smallest: u32,
}

impl Deck {
    pub(crate) fn from_parts(groups: Vec<Vec<Card>>, card_size: usize, smallest: u32) -> Self {
        Self {
            groups,
            card_size,
            smallest,
        }
    }

    /// Build a deck from raw caller-supplied groups.
    ///
    /// The deck size n is inferred from the group count; the layout must then
    /// hold one starting card in group 0 and n cards of n + 1 symbols in each
    /// of the n later groups. The generating alphabet is assumed canonical
    /// (smallest symbol 0).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLayout`] for any shape deviation.
    pub fn from_groups(raw: Vec<Vec<Vec<u32>>>) -> Result<Self> {
        if raw.len() < 2 {
            return Err(Error::invalid_layout(format!(
                "expected a starting group plus at least one card group, got {} group(s)",
                raw.len()
            )));
        }
        let card_size = raw.len() - 1;

        if raw[0].len() != 1 {
            return Err(Error::invalid_layout(format!(
                "group 0 must hold exactly the starting card, got {} cards",
                raw[0].len()
            )));
        }

        for (g, group) in raw.iter().enumerate().skip(1) {
            if group.len() != card_size {
                return Err(Error::invalid_layout(format!(
                    "group {g} must hold {card_size} cards, got {}",
                    group.len()
                )));
            }
        }

        for (g, group) in raw.iter().enumerate() {
            for (c, card) in group.iter().enumerate() {
                if card.len() != card_size + 1 {
                    return Err(Error::invalid_layout(format!(
                        "card {c} of group {g} must hold {} symbols, got {}",
                        card_size + 1,
                        card.len()
                    )));
                }
            }
        }

        let groups = raw
            .into_iter()
            .map(|group| group.into_iter().map(Card::new).collect())
            .collect();

        Ok(Self {
            groups,
            card_size,
            smallest: 0,
        })
    }

    /// The deck size n: symbols per card minus the anchor, cards per group,
    /// and the order of the generating squares.
    #[must_use]
    pub fn card_size(&self) -> usize {
        self.card_size
    }

    /// The smallest symbol of the generating alphabet (0 for canonical
    /// alphabets and for decks built from raw groups).
    #[must_use]
    pub fn smallest_symbol(&self) -> u32 {
        self.smallest
    }

    /// The number of groups, starting group included.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// All groups, in order.
    #[must_use]
    pub fn groups(&self) -> &[Vec<Card>] {
        &self.groups
    }

    /// Get a single numbered group (0 is the starting group).
    #[must_use]
    pub fn group(&self, num: usize) -> Option<&[Card]> {
        self.groups.get(num).map(Vec::as_slice)
    }

    /// The starting card.
    ///
    /// # Panics
    ///
    /// Panics if the deck has no groups; both constructors rule that out.
    #[must_use]
    pub fn starting_card(&self) -> &Card {
        &self.groups[0][0]
    }

    /// Iterate over every card in layout order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.groups.iter().flatten()
    }

    /// Export the layout as nested sequences, suitable for rendering.
    #[must_use]
    pub fn to_groups(&self) -> Vec<Vec<Vec<u32>>> {
        self.groups
            .iter()
            .map(|group| group.iter().map(|card| card.symbols().to_vec()).collect())
            .collect()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (g, group) in self.groups.iter().enumerate() {
            if g > 0 {
                writeln!(f)?;
            }
            for card in group {
                writeln!(f, "{card}")?;
            }
        }
        Ok(())
    }
}
