use std::cmp::Ordering;
use std::fmt;

use super::{Card, Hand, Value};

/// All the different possible hand categories.
///
/// Variants are listed strongest first. The ordering between them
/// comes from [`HandCategory::strength`] and not from the order the
/// variants are declared in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandCategory {
    /// Ten through Ace all in one suit.
    RoyalFlush,
    /// Five cards in a sequence all of the same suit.
    StraightFlush,
    /// Four of the same value.
    FourOfAKind,
    /// Three of one value and two of another value
    FullHouse,
    /// Five cards of the same suit
    Flush,
    /// Five cards in a sequence
    Straight,
    /// Three of the same value.
    ThreeOfAKind,
    /// Two different pairs of matching cards.
    TwoPair,
    /// One card matches another.
    Pair,
    /// The lowest category. No matches
    HighCard,
}

const CATEGORIES: [HandCategory; 10] = [
    HandCategory::RoyalFlush,
    HandCategory::StraightFlush,
    HandCategory::FourOfAKind,
    HandCategory::FullHouse,
    HandCategory::Flush,
    HandCategory::Straight,
    HandCategory::ThreeOfAKind,
    HandCategory::TwoPair,
    HandCategory::Pair,
    HandCategory::HighCard,
];

impl HandCategory {
    /// Every category, strongest first.
    pub const fn categories() -> [HandCategory; 10] {
        CATEGORIES
    }

    /// Strength of the category. `HighCard` is 1 and `RoyalFlush` is 10.
    pub const fn strength(self) -> u8 {
        match self {
            HandCategory::RoyalFlush => 10,
            HandCategory::StraightFlush => 9,
            HandCategory::FourOfAKind => 8,
            HandCategory::FullHouse => 7,
            HandCategory::Flush => 6,
            HandCategory::Straight => 5,
            HandCategory::ThreeOfAKind => 4,
            HandCategory::TwoPair => 3,
            HandCategory::Pair => 2,
            HandCategory::HighCard => 1,
        }
    }

    /// Name used in the winning hand report.
    pub const fn name(self) -> &'static str {
        match self {
            HandCategory::RoyalFlush => "Royal Straight Flush",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::FourOfAKind => "Four Of A Kind",
            HandCategory::FullHouse => "Full House",
            HandCategory::Flush => "Flush",
            HandCategory::Straight => "Straight",
            HandCategory::ThreeOfAKind => "Three Of A Kind",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::Pair => "Pair",
            HandCategory::HighCard => "High Card",
        }
    }
}

impl Ord for HandCategory {
    fn cmp(&self, other: &Self) -> Ordering {
        self.strength().cmp(&other.strength())
    }
}

impl PartialOrd for HandCategory {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Frequency tables for the values and suits in a hand.
///
/// `values` is indexed by face value (2..=14), `suits` by
/// [`Suit::index`](super::Suit::index).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardCounts {
    values: [u8; 15],
    suits: [u8; 4],
}

impl CardCounts {
    pub fn new(cards: &[Card]) -> Self {
        let mut values = [0u8; 15];
        let mut suits = [0u8; 4];
        for c in cards {
            values[usize::from(c.value.rank())] += 1;
            suits[c.suit.index()] += 1;
        }
        Self { values, suits }
    }

    /// How many cards of this value are in the hand.
    pub fn value_count(&self, value: Value) -> u8 {
        self.values[usize::from(value.rank())]
    }

    /// Values that appear exactly `count` times, highest first.
    pub fn values_with_count(&self, count: u8) -> impl Iterator<Item = Value> + '_ {
        Value::values()
            .into_iter()
            .rev()
            .filter(move |v| self.value_count(*v) == count)
    }

    pub fn is_flush(&self) -> bool {
        self.suits.iter().any(|&count| count == 5)
    }

    /// Five distinct consecutive values, or the wheel.
    pub fn is_straight(&self) -> bool {
        if self.is_wheel() {
            return true;
        }
        // The lowest card of a straight is at most a ten.
        let Some(low) = (2..=10).find(|&r| self.values[r] > 0) else {
            return false;
        };
        self.values[low..low + 5].iter().all(|&count| count == 1)
    }

    /// Exactly A, 2, 3, 4, 5.
    pub fn is_wheel(&self) -> bool {
        self.has_exactly(&[Value::Ace, Value::Two, Value::Three, Value::Four, Value::Five])
    }

    /// Exactly 10, J, Q, K, A.
    pub fn is_royal(&self) -> bool {
        self.has_exactly(&[Value::Ten, Value::Jack, Value::Queen, Value::King, Value::Ace])
    }

    fn has_exactly(&self, wanted: &[Value; 5]) -> bool {
        Value::values()
            .into_iter()
            .all(|v| self.value_count(v) == u8::from(wanted.contains(&v)))
    }

    /// Decide the category. The order of the checks matters: flush and
    /// straight together first, then quads and full houses before a
    /// plain flush or straight, then the remaining pair based groups.
    pub fn category(&self) -> HandCategory {
        let flush = self.is_flush();
        let straight = self.is_straight();

        if flush && straight {
            return if self.is_royal() {
                HandCategory::RoyalFlush
            } else {
                HandCategory::StraightFlush
            };
        }

        let mut triples = 0;
        let mut pairs = 0;
        for &count in &self.values[2..] {
            match count {
                4 => return HandCategory::FourOfAKind,
                3 => triples += 1,
                2 => pairs += 1,
                _ => {}
            }
        }

        if triples == 1 && pairs == 1 {
            HandCategory::FullHouse
        } else if flush {
            HandCategory::Flush
        } else if straight {
            HandCategory::Straight
        } else if triples == 1 {
            HandCategory::ThreeOfAKind
        } else if pairs == 2 {
            HandCategory::TwoPair
        } else if pairs == 1 {
            HandCategory::Pair
        } else {
            HandCategory::HighCard
        }
    }
}

/// Can this be put into a hand category?
pub trait Rankable {
    /// Value and suit frequency tables for the cards.
    fn card_counts(&self) -> CardCounts;

    /// Classify the cards. It doesn't do any caching so it's left up to
    /// the caller to understand that duplicate work will be done if this
    /// is called more than once.
    fn classify(&self) -> HandCategory {
        self.card_counts().category()
    }
}

impl Rankable for Hand {
    fn card_counts(&self) -> CardCounts {
        CardCounts::new(self.cards())
    }
}
