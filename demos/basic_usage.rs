//! Basic usage example for the spotit library.
//!
//! This example walks the full pipeline: load a reference MOLS set, verify
//! it, convert it to a deck, verify the deck, and convert back.

use spotit::{catalogue, check_mols, check_spotit, deck_to_mols, mols_to_deck};

fn main() {
    println!("Spotit Library - Basic Usage Example\n");

    // Load the order-4 reference set (3 squares)
    println!("Loading the order-4 reference MOLS set...");
    let mols = catalogue::get_by_order(4).expect("catalogue set");
    println!("{mols}");

    // Verify it, printing the full check trace
    println!("Verifying mutual orthogonality...");
    let report = check_mols(mols.squares()).expect("uniform shapes");
    print!("{report}");
    if report.is_valid() {
        println!("✓ Set is a complete family of mutually orthogonal latin squares");
    }
    println!();

    // Convert to a deck
    println!("Converting to a Spot It! deck...");
    let deck = mols_to_deck(&mols);
    println!("Deck:");
    println!("{deck}");

    println!("Starting card: {}", deck.starting_card());
    if let Some(group) = deck.group(1) {
        println!("Group 1:");
        for card in group {
            println!("  {card}");
        }
    }
    println!();

    // Verify the single-overlap property
    println!("Checking the single-overlap property...");
    let spotit = check_spotit(&deck);
    if spotit.is_valid() {
        println!("✓ Every pair of cards shares exactly one symbol");
    } else {
        print!("{spotit}");
    }
    println!();

    // Convert back and confirm the round trip
    println!("Recovering the MOLS set from the deck...");
    let recovered = deck_to_mols(&deck).expect("valid deck");
    if recovered == mols.standardize() {
        println!("✓ Round trip reproduced the standardized set exactly");
    } else {
        println!("✗ Round trip mismatch");
    }

    // The order-5 set gives a 26-card deck
    println!();
    println!("Order-5 deck sizes:");
    let deck5 = mols_to_deck(&catalogue::get_by_order(5).expect("catalogue set"));
    println!("  Groups: {}", deck5.group_count());
    println!("  Cards: {}", deck5.cards().count());
    println!("  Symbols per card: {}", deck5.starting_card().len());
}
