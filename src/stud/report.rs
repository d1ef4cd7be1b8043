use crate::core::{Card, Hand, RankedHand, StudError};

/// Cards printed per row when a deck is shown over several lines.
pub const CARDS_PER_ROW: usize = 13;

/// Cards separated by spaces. Unless `single_line` is set a new row
/// starts after every 13 cards, one suit's worth in a fresh deck.
pub fn format_deck<'a, I>(cards: I, single_line: bool) -> String
where
    I: IntoIterator<Item = &'a Card>,
{
    let cards: Vec<String> = cards.into_iter().map(Card::to_string).collect();
    if single_line {
        return cards.join(" ");
    }
    cards
        .chunks(CARDS_PER_ROW)
        .map(|row| row.join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One hand per line.
pub fn format_hands(hands: &[Hand]) -> String {
    hands
        .iter()
        .map(Hand::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// The final ranking, strongest hand on top.
pub fn format_winning_order(ranked: &[RankedHand]) -> String {
    let mut out = String::from("--- WINNING HAND ORDER ---");
    for r in ranked {
        out.push('\n');
        out.push_str(&format!("{} - {}", r.hand, r.category));
    }
    out
}

/// How an error is shown to the person running the analyzer.
pub fn format_error(err: &StudError) -> String {
    match err {
        StudError::DuplicateCardInDeck(card) => format!(
            "*** ERROR - DUPLICATED CARD FOUND IN DECK ***\n\n*** DUPLICATE: {card} ***"
        ),
        other => format!("*** ERROR - {other} ***"),
    }
}
