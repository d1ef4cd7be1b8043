use tracing::{event, trace_span};

use super::{Hand, HandCategory, Rankable, compare_same_category};

/// A hand together with the category it was classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedHand {
    pub hand: Hand,
    pub category: HandCategory,
}

impl RankedHand {
    pub fn new(hand: Hand) -> Self {
        let category = hand.classify();
        Self { hand, category }
    }
}

/// Orders hands from strongest to weakest.
pub struct HandSorter;

impl HandSorter {
    /// Classify every hand and sort them strongest first.
    ///
    /// Each hand is classified once. Categories decide first, the tie
    /// breaker settles hands in the same category. The sort is stable so
    /// hands that can't be told apart stay in input order.
    ///
    /// ```
    /// use stud_poker::core::{Hand, HandCategory, HandSorter};
    ///
    /// let hands = vec![
    ///     Hand::new_from_str("4D 4C 4H 4S 2D").unwrap(),
    ///     Hand::new_from_str("AS KS QS JS 10S").unwrap(),
    ///     Hand::new_from_str("9H 8H 7H 6H 5H").unwrap(),
    /// ];
    /// let ranked = HandSorter::sort(hands);
    /// assert_eq!(HandCategory::RoyalFlush, ranked[0].category);
    /// assert_eq!(HandCategory::StraightFlush, ranked[1].category);
    /// assert_eq!(HandCategory::FourOfAKind, ranked[2].category);
    /// ```
    pub fn sort<I>(hands: I) -> Vec<RankedHand>
    where
        I: IntoIterator<Item = Hand>,
    {
        let mut ranked: Vec<RankedHand> = hands.into_iter().map(RankedHand::new).collect();
        let _span = trace_span!("sort_hands", count = ranked.len()).entered();
        for r in &ranked {
            event!(tracing::Level::TRACE, hand = %r.hand, category = %r.category, "Classified hand");
        }
        Self::sort_ranked(&mut ranked);
        ranked
    }

    /// Sort hands that already carry their category, strongest first.
    pub fn sort_ranked(ranked: &mut [RankedHand]) {
        ranked.sort_by(|a, b| {
            b.category
                .cmp(&a.category)
                .then_with(|| compare_same_category(a.category, &b.hand, &a.hand))
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hands(list: &[&str]) -> Vec<Hand> {
        list.iter().map(|s| Hand::new_from_str(s).unwrap()).collect()
    }

    fn order(ranked: &[RankedHand]) -> Vec<String> {
        ranked.iter().map(|r| r.hand.to_string()).collect()
    }

    #[test_log::test]
    fn test_sort_by_category() {
        let ranked = HandSorter::sort(hands(&[
            "4D 4C 4H 4S 2D",
            "9H 8H 7H 6H 5H",
            "AS KS QS JS 10S",
        ]));
        assert_eq!(
            vec!["AS KS QS JS 10S", "9H 8H 7H 6H 5H", "4D 4C 4H 4S 2D"],
            order(&ranked)
        );
        let categories: Vec<HandCategory> = ranked.iter().map(|r| r.category).collect();
        assert_eq!(
            vec![
                HandCategory::RoyalFlush,
                HandCategory::StraightFlush,
                HandCategory::FourOfAKind
            ],
            categories
        );
    }

    #[test_log::test]
    fn test_sort_within_category() {
        let ranked = HandSorter::sort(hands(&[
            "7D 7C 7H 7S AS",
            "AH 10C 8D 6S 3C",
            "9D 9C 9H 9S 2D",
            "AS 10D 8C 6H 3D",
        ]));
        assert_eq!(
            vec![
                "9D 9C 9H 9S 2D",
                "7D 7C 7H 7S AS",
                "AS 10D 8C 6H 3D",
                "AH 10C 8D 6S 3C"
            ],
            order(&ranked)
        );
    }

    #[test]
    fn test_sort_is_stable() {
        // Same quads, kicker not compared. Input order has to survive.
        let ranked = HandSorter::sort(hands(&["9D 9C 9H 9S 2D", "9D 9C 9H 9S AS"]));
        assert_eq!(vec!["9D 9C 9H 9S 2D", "9D 9C 9H 9S AS"], order(&ranked));

        let ranked = HandSorter::sort(hands(&["9D 9C 9H 9S AS", "9D 9C 9H 9S 2D"]));
        assert_eq!(vec!["9D 9C 9H 9S AS", "9D 9C 9H 9S 2D"], order(&ranked));
    }

    #[test]
    fn test_sort_is_idempotent() {
        let ranked = HandSorter::sort(hands(&[
            "JD JC 2H 3S 4D",
            "KD KC 5H 5S 3D",
            "AD 2C 3H 4S 5S",
            "2D 3C 4H 5S 6D",
            "AD 8D 6D 4D 2D",
            "KH KS 5D 5C AH",
        ]));
        let again = HandSorter::sort(ranked.iter().map(|r| r.hand));
        assert_eq!(ranked, again);
    }

    #[test]
    fn test_empty() {
        assert!(HandSorter::sort(Vec::new()).is_empty());
    }
}
