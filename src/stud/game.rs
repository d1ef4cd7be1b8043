use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::event;

use super::parse::{TestDeck, TestDeckParser};
use crate::core::{Deck, HAND_SIZE, Hand, HandSorter, RankedHand, StudError};

/// Hands dealt when nothing else is asked for.
pub const DEFAULT_HANDS: usize = 6;
/// Most hands one 52 card deck can fill.
pub const MAX_HANDS: usize = 52 / HAND_SIZE;

/// Where the hands of a deal came from.
#[derive(Debug, Clone, PartialEq)]
pub enum DealSource {
    /// A shuffled 52 card deck. `deck` is the deck before dealing,
    /// `remaining` what was left after.
    Shuffled { deck: Deck, remaining: Deck },
    /// A test deck, with its non-blank lines as read.
    TestDeck { lines: Vec<String> },
}

/// One round of stud: the hands and where they came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Deal {
    pub source: DealSource,
    pub hands: Vec<Hand>,
}

impl Deal {
    /// The hands in winning order.
    pub fn rank(&self) -> Vec<RankedHand> {
        HandSorter::sort(self.hands.iter().copied())
    }
}

/// Settings for a game of five card stud.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudGame {
    num_hands: usize,
    seed: Option<u64>,
}

impl StudGame {
    /// A game with `num_hands` players. One deck holds at most
    /// [`MAX_HANDS`] hands.
    ///
    /// ```
    /// use stud_poker::stud::StudGame;
    ///
    /// assert!(StudGame::new(6).is_ok());
    /// assert!(StudGame::new(0).is_err());
    /// assert!(StudGame::new(11).is_err());
    /// ```
    pub fn new(num_hands: usize) -> Result<Self, StudError> {
        if !(1..=MAX_HANDS).contains(&num_hands) {
            return Err(StudError::InvalidHandCount {
                got: num_hands,
                max: MAX_HANDS,
            });
        }
        Ok(Self {
            num_hands,
            seed: None,
        })
    }

    /// Shuffle with a seeded rng so the deal can be repeated.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn num_hands(&self) -> usize {
        self.num_hands
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Shuffle a fresh deck and deal the hands.
    pub fn deal_random(&self) -> Result<Deal, StudError> {
        let mut deck = Deck::new();
        match self.seed {
            Some(seed) => deck.shuffle(&mut StdRng::seed_from_u64(seed)),
            None => deck.shuffle(&mut rand::rng()),
        }
        let shuffled = deck.clone();
        let hands = deck.deal_hands(self.num_hands)?;
        event!(tracing::Level::DEBUG, seed = ?self.seed, hands = hands.len(), "Dealt random hands");
        Ok(Deal {
            source: DealSource::Shuffled {
                deck: shuffled,
                remaining: deck,
            },
            hands,
        })
    }

    /// Read the hands from a test deck file.
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<Deal, StudError> {
        self.load_lines(TestDeckParser::read_lines(path)?)
    }

    /// Read the hands from test deck text.
    pub fn load_str(&self, text: &str) -> Result<Deal, StudError> {
        Self::from_test_deck(TestDeckParser::parse_str(text, self.num_hands)?)
    }

    /// Deal the hands from test deck lines already read with
    /// [`TestDeckParser::read_lines`].
    pub fn load_lines(&self, lines: Vec<String>) -> Result<Deal, StudError> {
        Self::from_test_deck(TestDeckParser::parse_lines(lines, self.num_hands)?)
    }

    fn from_test_deck(test_deck: TestDeck) -> Result<Deal, StudError> {
        event!(tracing::Level::DEBUG, hands = test_deck.hands.len(), "Loaded test deck");
        Ok(Deal {
            source: DealSource::TestDeck {
                lines: test_deck.lines,
            },
            hands: test_deck.hands,
        })
    }
}

impl Default for StudGame {
    fn default() -> Self {
        Self {
            num_hands: DEFAULT_HANDS,
            seed: None,
        }
    }
}
