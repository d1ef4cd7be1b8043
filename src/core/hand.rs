use std::fmt;
use std::ops::Index;
use std::slice::Iter;

use super::{Card, StudError};

/// Number of cards in a stud hand.
pub const HAND_SIZE: usize = 5;

/// Five distinct cards in the order they were dealt.
///
/// A `Hand` can only be built through the checked constructors so
/// everything downstream of it may assume there are exactly five
/// cards and no card appears twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Card>", into = "Vec<Card>")
)]
pub struct Hand([Card; HAND_SIZE]);

impl Hand {
    /// Create a hand from five cards.
    ///
    /// # Examples
    ///
    /// ```
    /// use stud_poker::core::{Card, Hand, Suit, Value};
    ///
    /// let hand = Hand::new([
    ///     Card::new(Value::Ace, Suit::Spade),
    ///     Card::new(Value::King, Suit::Spade),
    ///     Card::new(Value::Queen, Suit::Spade),
    ///     Card::new(Value::Jack, Suit::Spade),
    ///     Card::new(Value::Ten, Suit::Spade),
    /// ])
    /// .unwrap();
    /// assert_eq!(5, hand.len());
    /// ```
    pub fn new(cards: [Card; HAND_SIZE]) -> Result<Self, StudError> {
        for (i, card) in cards.iter().enumerate() {
            if cards[..i].contains(card) {
                return Err(StudError::DuplicateCardInHand(*card));
            }
        }
        Ok(Self(cards))
    }

    /// Create a hand from any number of cards, failing unless
    /// there are exactly five.
    pub fn new_with_cards(cards: Vec<Card>) -> Result<Self, StudError> {
        let found = cards.len();
        let cards: [Card; HAND_SIZE] = cards
            .try_into()
            .map_err(|_| StudError::HandSize(found))?;
        Self::new(cards)
    }

    /// Parse a hand from a string of cards separated by
    /// whitespace or commas.
    ///
    /// # Examples
    ///
    /// ```
    /// use stud_poker::core::Hand;
    ///
    /// let hand = Hand::new_from_str("AS, KS, QS, JS, 10S").unwrap();
    /// assert_eq!("AS KS QS JS 10S", hand.to_string());
    ///
    /// assert!(Hand::new_from_str("AS KS QS JS").is_err());
    /// assert!(Hand::new_from_str("AS AS QS JS 10S").is_err());
    /// ```
    pub fn new_from_str(hand_string: &str) -> Result<Self, StudError> {
        let cards = hand_string
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(str::parse::<Card>)
            .collect::<Result<Vec<Card>, StudError>>()?;
        Self::new_with_cards(cards)
    }

    /// The cards in dealt order.
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.0
    }

    pub fn contains(&self, c: &Card) -> bool {
        self.0.contains(c)
    }

    pub fn iter(&self) -> Iter<'_, Card> {
        self.0.iter()
    }

    /// Always five. Here for symmetry with the collections.
    pub fn len(&self) -> usize {
        HAND_SIZE
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Index<usize> for Hand {
    type Output = Card;
    fn index(&self, index: usize) -> &Card {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = StudError;

    fn try_from(value: Vec<Card>) -> Result<Self, Self::Error> {
        Self::new_with_cards(value)
    }
}

impl From<Hand> for Vec<Card> {
    fn from(val: Hand) -> Self {
        val.0.to_vec()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
