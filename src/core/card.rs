use std::fmt;
use std::str::FromStr;

use super::StudError;

/// Card rank or value.
/// The discriminant is the face value, so an Ace is 14.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Value {
    /// 2
    Two = 2,
    /// 3
    Three = 3,
    /// 4
    Four = 4,
    /// 5
    Five = 5,
    /// 6
    Six = 6,
    /// 7
    Seven = 7,
    /// 8
    Eight = 8,
    /// 9
    Nine = 9,
    /// 10
    Ten = 10,
    /// J
    Jack = 11,
    /// Q
    Queen = 12,
    /// K
    King = 13,
    /// A
    Ace = 14,
}

/// Constant of all the values.
/// This is what `Value::values()` returns
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Get all of the `Value`'s that are possible, lowest first.
    /// This is used to iterate through all possible
    /// values when creating a new deck.
    pub const fn values() -> [Value; 13] {
        VALUES
    }

    /// The face value of the card, 2 through 14.
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Take a face value and convert it to a `Value`.
    ///
    /// ```
    /// use stud_poker::core::Value;
    ///
    /// assert_eq!(Some(Value::Jack), Value::from_rank(11));
    /// assert_eq!(None, Value::from_rank(1));
    /// ```
    pub fn from_rank(rank: u8) -> Option<Value> {
        match rank {
            2..=14 => Some(VALUES[usize::from(rank - 2)]),
            _ => None,
        }
    }

    /// Parse the rank part of a card.
    ///
    /// Digits 2 to 9 map directly, `10` and `T` are a ten,
    /// and `J`, `Q`, `K`, `A` are the faces. Case is ignored.
    ///
    /// ```
    /// use stud_poker::core::Value;
    ///
    /// assert_eq!(Some(Value::Ten), Value::from_token("10"));
    /// assert_eq!(Some(Value::Ten), Value::from_token("t"));
    /// assert_eq!(Some(Value::Ace), Value::from_token("A"));
    /// assert_eq!(None, Value::from_token("1"));
    /// ```
    pub fn from_token(token: &str) -> Option<Value> {
        if token == "10" {
            return Some(Value::Ten);
        }
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Value::from_char(c),
            _ => None,
        }
    }

    /// Parse a single character value.
    pub fn from_char(c: char) -> Option<Value> {
        match c.to_ascii_uppercase() {
            'A' => Some(Value::Ace),
            'K' => Some(Value::King),
            'Q' => Some(Value::Queen),
            'J' => Some(Value::Jack),
            'T' => Some(Value::Ten),
            '9' => Some(Value::Nine),
            '8' => Some(Value::Eight),
            '7' => Some(Value::Seven),
            '6' => Some(Value::Six),
            '5' => Some(Value::Five),
            '4' => Some(Value::Four),
            '3' => Some(Value::Three),
            '2' => Some(Value::Two),
            _ => None,
        }
    }

    /// How the value is printed in a card.
    pub const fn to_str(self) -> &'static str {
        match self {
            Value::Two => "2",
            Value::Three => "3",
            Value::Four => "4",
            Value::Five => "5",
            Value::Six => "6",
            Value::Seven => "7",
            Value::Eight => "8",
            Value::Nine => "9",
            Value::Ten => "10",
            Value::Jack => "J",
            Value::Queen => "Q",
            Value::King => "K",
            Value::Ace => "A",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

/// Enum for the four different suits.
///
/// Suits never decide a hand category. The ordering
/// Diamond < Club < Heart < Spade is only used as the
/// last resort when breaking ties between hands.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Suit {
    /// Diamonds
    Diamond = 0,
    /// Clubs
    Club = 1,
    /// Hearts
    Heart = 2,
    /// Spades
    Spade = 3,
}

/// All of the `Suit`'s in tie break order. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Diamond, Suit::Club, Suit::Heart, Suit::Spade];

impl Suit {
    /// Provide all the Suit's that there are, weakest first.
    pub const fn suits() -> [Suit; 4] {
        SUITS
    }

    /// Position of this suit in the tie break order, 0 for diamonds.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_char(s: char) -> Option<Suit> {
        match s.to_ascii_uppercase() {
            'D' => Some(Suit::Diamond),
            'C' => Some(Suit::Club),
            'H' => Some(Suit::Heart),
            'S' => Some(Suit::Spade),
            _ => None,
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            Suit::Diamond => 'D',
            Suit::Club => 'C',
            Suit::Heart => 'H',
            Suit::Spade => 'S',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// The main struct of this library.
/// This is a carrier for Suit and Value combined.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.suit)
    }
}

/// Parse a card such as `AS`, `10D` or `th`.
///
/// The last character is the suit, everything in front of it is the value.
impl FromStr for Card {
    type Err = StudError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let suit_char = s.chars().last().ok_or(StudError::TooFewChars)?;
        let value_str = &s[..s.len() - suit_char.len_utf8()];
        if value_str.is_empty() {
            return Err(StudError::TooFewChars);
        }
        let suit = Suit::from_char(suit_char)
            .ok_or_else(|| StudError::UnexpectedSuitChar(s.to_string()))?;
        let value = Value::from_token(value_str)
            .ok_or_else(|| StudError::UnexpectedValueChar(s.to_string()))?;
        Ok(Card { value, suit })
    }
}
