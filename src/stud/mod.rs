//! The pieces around the engine needed to play a hand of five card stud:
//! dealing from a shuffled deck, reading a test deck from a file and
//! turning the results into text.

/// Game settings and dealing.
mod game;
pub use self::game::{DEFAULT_HANDS, Deal, DealSource, MAX_HANDS, StudGame};

/// Test deck reader.
mod parse;
pub use self::parse::{TestDeck, TestDeckParser};

/// Text output.
pub mod report;
