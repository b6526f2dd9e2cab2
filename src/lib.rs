//! # Spotit
//!
//! A library for converting complete sets of mutually orthogonal Latin
//! squares (MOLS) into "Spot It!"-style card decks and back.
//!
//! ## Overview
//!
//! A complete set of MOLS of order n (n − 1 Latin squares of order n,
//! pairwise orthogonal) encodes the same combinatorial structure as a
//! matching-game deck in which every pair of cards shares exactly one symbol.
//! This library provides:
//!
//! - The exact bijection between the two representations
//!   ([`mols_to_deck`], [`deck_to_mols`])
//! - Verification of every invariant along the way: the Latin property,
//!   pairwise orthogonality, mutual orthogonality of a whole set, and the
//!   single-overlap property of a deck. Each check reports the exact
//!   violating positions
//! - A catalogue of reference MOLS sets for small orders
//!
//! ## Quick Start
//!
//! ```rust
//! use spotit::{catalogue, deck_to_mols, is_valid_spotit_layout, mols_to_deck};
//!
//! let mols = catalogue::get_by_order(4).unwrap();
//!
//! let deck = mols_to_deck(&mols);
//! assert_eq!(deck.starting_card().symbols(), &[1, 2, 3, 4, 5]);
//! assert!(is_valid_spotit_layout(&deck));
//!
//! let recovered = deck_to_mols(&deck).unwrap();
//! assert_eq!(recovered, mols.standardize());
//! ```
//!
//! Or verify caller-supplied squares directly:
//!
//! ```rust
//! use spotit::{are_mols, are_orthogonal, is_latin_square, Square};
//!
//! let a = Square::from_rows(vec![
//!     vec![0, 1, 2],
//!     vec![1, 2, 0],
//!     vec![2, 0, 1],
//! ])
//! .unwrap();
//! let b = Square::from_rows(vec![
//!     vec![0, 1, 2],
//!     vec![2, 0, 1],
//!     vec![1, 2, 0],
//! ])
//! .unwrap();
//!
//! assert!(is_latin_square(&a));
//! assert!(are_orthogonal(&a, &b));
//! assert!(are_mols(&[a, b]));
//! ```
//!
//! ## Layout shape
//!
//! A deck of size n holds one starting card of the n + 1 anchor symbols,
//! followed by n groups of n cards. Each card carries its group anchor, a
//! column marker, and one symbol per generating square, each role drawn from
//! a disjoint numeric band (see [`transform::Numbering`]). The bands make the
//! conversion invertible without ambiguity.
//!
//! ## Features
//!
//! - `serde`: enable serialization/deserialization of the value types

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod catalogue;
pub mod deck;
pub mod error;
pub mod mols;
pub mod square;
pub mod transform;
pub mod utils;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::catalogue::{available_orders, get_by_order};
    pub use crate::deck::verify::{check_spotit, is_valid_spotit_layout, SpotItReport};
    pub use crate::deck::{Card, Deck};
    pub use crate::error::{Error, Result};
    pub use crate::mols::verify::{
        are_mols, are_orthogonal, check_latin_square, check_mols, check_orthogonal,
        is_latin_square, LatinReport, MolsReport, OrthogonalityReport,
    };
    pub use crate::mols::MolsSet;
    pub use crate::square::Square;
    pub use crate::transform::{deck_to_mols, mols_to_deck, Numbering};
}

// Re-export commonly used items at crate root
pub use deck::verify::{check_spotit, is_valid_spotit_layout};
pub use deck::{Card, Deck};
pub use error::{Error, Result};
pub use mols::verify::{
    are_mols, are_orthogonal, check_latin_square, check_mols, check_orthogonal, is_latin_square,
};
pub use mols::MolsSet;
pub use square::Square;
pub use transform::{deck_to_mols, mols_to_deck};
