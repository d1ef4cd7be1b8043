//! Stud poker is a library for five card stud hands.
//!
//! It classifies a hand into one of the ten standard categories and
//! orders any number of hands strongest to weakest. Ties inside a
//! category are broken by fixed kicker rules with suit
//! (diamonds < clubs < hearts < spades) as the final word, so hands
//! dealt from a single deck always end up in a strict order.

/// Everything in core is agnostic to how the hands were produced.
pub mod core;
/// Dealing, reading test decks and printing reports for a game of stud.
pub mod stud;
