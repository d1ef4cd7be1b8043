use thiserror::Error;

use super::Card;

/// This is the core error type for the stud poker library.
/// It uses `thiserror` to provide readable error messages
#[derive(Error, Debug)]
pub enum StudError {
    #[error("Unable to parse value in card {0}")]
    UnexpectedValueChar(String),
    #[error("Unable to parse suit in card {0}")]
    UnexpectedSuitChar(String),
    #[error("Error reading characters while parsing")]
    TooFewChars,
    #[error("Stud hands must have exactly 5 cards, found {0}")]
    HandSize(usize),
    #[error("Card already added to hand {0}")]
    DuplicateCardInHand(Card),
    #[error("Duplicated card found in deck {0}")]
    DuplicateCardInDeck(Card),
    #[error("Line {line} should hold 5 cards, found {found}")]
    WrongHandSize { line: usize, found: usize },
    #[error("Expected {expected} hands but only found {found}")]
    MissingHands { expected: usize, found: usize },
    #[error("Not enough cards in the deck: needed {needed}, have {remaining}")]
    NotEnoughCards { needed: usize, remaining: usize },
    #[error("Number of hands must be between 1 and {max}, got {got}")]
    InvalidHandCount { got: usize, max: usize },
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
}
