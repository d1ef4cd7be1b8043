use std::collections::VecDeque;
use std::collections::vec_deque::Iter;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::event;

use super::{Card, HAND_SIZE, Hand, StudError, Suit, Value};

/// An ordered deck of cards. Cards are dealt off the top.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Create the standard 52 card deck in suit order
    /// (diamonds, clubs, hearts, spades), two through ace within a suit.
    ///
    /// ```
    /// use stud_poker::core::Deck;
    ///
    /// let deck = Deck::new();
    /// assert_eq!(52, deck.len());
    /// assert_eq!("2D", deck.iter().next().unwrap().to_string());
    /// ```
    pub fn new() -> Self {
        let cards = Suit::suits()
            .into_iter()
            .flat_map(|s| Value::values().into_iter().map(move |v| Card::new(v, s)))
            .collect();
        Self { cards }
    }

    /// Randomly shuffle the deck.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
        event!(tracing::Level::DEBUG, cards = self.cards.len(), "Shuffled deck");
    }

    /// Deal a card if there is one there to deal.
    /// None if the deck is empty
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Deal `num_hands` five card hands, one card to each hand per
    /// pass, the way a dealer goes around the table.
    ///
    /// ```
    /// use stud_poker::core::Deck;
    ///
    /// let mut deck = Deck::new();
    /// let hands = deck.deal_hands(6).unwrap();
    /// assert_eq!(6, hands.len());
    /// assert_eq!(22, deck.len());
    /// ```
    pub fn deal_hands(&mut self, num_hands: usize) -> Result<Vec<Hand>, StudError> {
        let remaining = self.cards.len();
        let needed = num_hands.checked_mul(HAND_SIZE).unwrap_or(usize::MAX);
        if needed > remaining {
            return Err(StudError::NotEnoughCards { needed, remaining });
        }

        let mut seats: Vec<Vec<Card>> = vec![Vec::with_capacity(HAND_SIZE); num_hands];
        for _ in 0..HAND_SIZE {
            for seat in seats.iter_mut() {
                // The length check above guarantees a card here.
                if let Some(card) = self.cards.pop_front() {
                    seat.push(card);
                }
            }
        }
        event!(
            tracing::Level::DEBUG,
            num_hands,
            remaining = self.cards.len(),
            "Dealt hands"
        );
        seats.into_iter().map(Hand::new_with_cards).collect()
    }

    /// Given a card, is it in the current deck?
    pub fn contains(&self, c: &Card) -> bool {
        self.cards.contains(c)
    }

    /// How many cards are there in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Have all of the cards been dealt from this deck?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate the cards, top of the deck first.
    pub fn iter(&self) -> Iter<'_, Card> {
        self.cards.iter()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<Card>> for Deck {
    fn from(value: Vec<Card>) -> Self {
        Self {
            cards: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_new_deck_is_complete() {
        let d = Deck::new();
        assert_eq!(52, d.len());
        let unique: HashSet<Card> = d.iter().copied().collect();
        assert_eq!(52, unique.len());
        assert!(d.contains(&Card::new(Value::Eight, Suit::Heart)));
    }

    #[test]
    fn test_new_deck_order() {
        let d = Deck::new();
        let first: Vec<String> = d.iter().take(14).map(|c| c.to_string()).collect();
        assert_eq!("2D", first[0]);
        assert_eq!("AD", first[12]);
        assert_eq!("2C", first[13]);
        assert_eq!(Some(&Card::new(Value::Ace, Suit::Spade)), d.iter().last());
    }

    #[test]
    fn test_shuffle_rng() {
        let mut d_one = Deck::new();
        let mut d_two = Deck::new();

        let mut rng_one = StdRng::seed_from_u64(420);
        let mut rng_two = StdRng::seed_from_u64(420);

        d_one.shuffle(&mut rng_one);
        d_two.shuffle(&mut rng_two);

        assert_eq!(d_one, d_two);
        assert_eq!(52, d_one.len());
        assert_ne!(Deck::new(), d_one);
    }

    #[test]
    fn test_deal_round_robin() {
        let mut d = Deck::new();
        let hands = d.deal_hands(2).unwrap();
        // Cards alternate between the two seats.
        assert_eq!("2D 4D 6D 8D 10D", hands[0].to_string());
        assert_eq!("3D 5D 7D 9D JD", hands[1].to_string());
        assert_eq!(Some(Card::new(Value::Queen, Suit::Diamond)), d.deal());
    }

    #[test_log::test]
    fn test_deal_six_hands() {
        let mut d = Deck::new();
        d.shuffle(&mut StdRng::seed_from_u64(7));
        let hands = d.deal_hands(6).unwrap();
        assert_eq!(22, d.len());

        let mut seen = HashSet::new();
        for h in &hands {
            for c in h {
                assert!(seen.insert(*c));
                assert!(!d.contains(c));
            }
        }
        assert_eq!(30, seen.len());
    }

    #[test]
    fn test_not_enough_cards() {
        let mut d = Deck::new();
        assert!(matches!(
            d.deal_hands(11),
            Err(StudError::NotEnoughCards {
                needed: 55,
                remaining: 52
            })
        ));
        // Nothing was dealt.
        assert_eq!(52, d.len());
    }

    #[test]
    fn test_huge_hand_count() {
        let mut d = Deck::new();
        assert!(matches!(
            d.deal_hands(usize::MAX),
            Err(StudError::NotEnoughCards {
                needed: usize::MAX,
                remaining: 52
            })
        ));
        assert_eq!(52, d.len());
    }

    #[test]
    fn test_deal_until_empty() {
        let mut d: Deck = vec![Card::new(Value::Nine, Suit::Heart)].into();
        assert_eq!(Some(Card::new(Value::Nine, Suit::Heart)), d.deal());
        assert!(d.is_empty());
        assert_eq!(None, d.deal());
    }
}
