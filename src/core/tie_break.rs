use std::cmp::Ordering;

use super::{Card, CardCounts, Hand, HandCategory, Rankable, Value};

/// Compare two hands. `Greater` means `a` is the stronger hand.
///
/// Different categories are ordered by category strength. Hands in the
/// same category go through [`compare_same_category`].
///
/// ```
/// use std::cmp::Ordering;
/// use stud_poker::core::{Hand, compare_hands};
///
/// let quads = Hand::new_from_str("9D 9C 9H 9S 2D").unwrap();
/// let boat = Hand::new_from_str("AD AC AH KS KD").unwrap();
/// assert_eq!(Ordering::Greater, compare_hands(&quads, &boat));
/// ```
pub fn compare_hands(a: &Hand, b: &Hand) -> Ordering {
    let category_a = a.classify();
    let category_b = b.classify();
    category_a
        .cmp(&category_b)
        .then_with(|| compare_same_category(category_a, a, b))
}

/// Break a tie between two hands that are both in `category`.
///
/// Each category has a fixed list of things to look at. Suits are the
/// last resort, so two hands dealt from one deck never come back
/// `Equal`. Hands that agree on everything the category looks at do.
pub fn compare_same_category(category: HandCategory, a: &Hand, b: &Hand) -> Ordering {
    let counts_a = a.card_counts();
    let counts_b = b.card_counts();

    match category {
        HandCategory::RoyalFlush => {
            let suit_a = highest_card(a).map(|c| c.suit);
            let suit_b = highest_card(b).map(|c| c.suit);
            suit_a.cmp(&suit_b)
        }
        HandCategory::StraightFlush | HandCategory::Straight => {
            by_value_then_suit(straight_top(a, &counts_a), straight_top(b, &counts_b))
        }
        HandCategory::FourOfAKind => group(&counts_a, 4).cmp(&group(&counts_b, 4)),
        HandCategory::FullHouse => group(&counts_a, 3)
            .cmp(&group(&counts_b, 3))
            .then_with(|| group(&counts_a, 2).cmp(&group(&counts_b, 2))),
        HandCategory::ThreeOfAKind => group(&counts_a, 3).cmp(&group(&counts_b, 3)),
        HandCategory::TwoPair => {
            // Higher pair first, then the lower pair.
            counts_a
                .values_with_count(2)
                .cmp(counts_b.values_with_count(2))
                .then_with(|| {
                    let kicker_a = unmatched_card(a, &counts_a).map(|c| c.suit);
                    let kicker_b = unmatched_card(b, &counts_b).map(|c| c.suit);
                    kicker_a.cmp(&kicker_b)
                })
        }
        HandCategory::Pair => group(&counts_a, 2)
            .cmp(&group(&counts_b, 2))
            .then_with(|| {
                by_value_then_suit(unmatched_card(a, &counts_a), unmatched_card(b, &counts_b))
            }),
        HandCategory::Flush | HandCategory::HighCard => {
            by_value_then_suit(highest_card(a), highest_card(b))
        }
    }
}

fn by_value_then_suit(a: Option<Card>, b: Option<Card>) -> Ordering {
    let key = |c: Option<Card>| c.map(|c| (c.value, c.suit));
    key(a).cmp(&key(b))
}

/// The value that appears `size` times, highest if there are several.
fn group(counts: &CardCounts, size: u8) -> Option<Value> {
    counts.values_with_count(size).next()
}

fn highest_card(hand: &Hand) -> Option<Card> {
    hand.iter().copied().max_by_key(|c| (c.value, c.suit))
}

/// Highest card whose value isn't shared with any other card.
fn unmatched_card(hand: &Hand, counts: &CardCounts) -> Option<Card> {
    hand.iter()
        .copied()
        .filter(|c| counts.value_count(c.value) == 1)
        .max_by_key(|c| (c.value, c.suit))
}

/// Top card of a straight. In the wheel the ace plays low so the five is
/// on top.
fn straight_top(hand: &Hand, counts: &CardCounts) -> Option<Card> {
    if counts.is_wheel() {
        hand.iter().copied().find(|c| c.value == Value::Five)
    } else {
        highest_card(hand)
    }
}
