//! This is the core module. It holds the cards, hands and the
//! engine that classifies and orders five card hands.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, Suit, Value};

/// Code related to cards in hands.
mod hand;
/// Everything in there should be public.
pub use self::hand::*;

/// Deck is the normal 52 card deck.
mod deck;
/// Export `Deck`
pub use self::deck::Deck;

/// Hand category classification.
mod rank;
/// Export the trait and the results.
pub use self::rank::{CardCounts, HandCategory, Rankable};

/// Ordering of hands inside one category.
mod tie_break;
pub use self::tie_break::{compare_hands, compare_same_category};

/// Sorting many hands strongest first.
mod sort;
pub use self::sort::{HandSorter, RankedHand};

mod error;
pub use self::error::StudError;
