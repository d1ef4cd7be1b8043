use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::event;

use crate::core::{Card, HAND_SIZE, Hand, StudError};

/// A test deck read from text. `lines` holds every non-blank line as it
/// appeared so it can be echoed back, `hands` the parsed hands.
#[derive(Debug, Clone, PartialEq)]
pub struct TestDeck {
    pub lines: Vec<String>,
    pub hands: Vec<Hand>,
}

/// Reads test decks: one hand per line, five comma separated cards.
///
/// ```text
/// AS, KS, QS, JS, 10S
/// 9H, 8H, 7H, 6H, 5H
/// ```
///
/// A card may appear only once in the whole deck, including lines past the
/// requested hands. Nothing is returned unless every line parsed cleanly.
pub struct TestDeckParser;

impl TestDeckParser {
    /// Read and parse a test deck file.
    pub fn parse_file<P: AsRef<Path>>(path: P, num_hands: usize) -> Result<TestDeck, StudError> {
        Self::parse_lines(Self::read_lines(path)?, num_hands)
    }

    /// Read the non-blank lines of a test deck file without checking them,
    /// so they can be shown even when the deck turns out to be bad.
    pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, StudError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).inspect_err(|e| {
            event!(tracing::Level::WARN, path = %path.display(), error = %e, "Unable to read test deck");
        })?;
        Ok(Self::split_lines(&text))
    }

    /// Parse the first `num_hands` non-blank lines of `text`.
    pub fn parse_str(text: &str, num_hands: usize) -> Result<TestDeck, StudError> {
        Self::parse_lines(Self::split_lines(text), num_hands)
    }

    /// Deal the first `num_hands` lines as hands. Later lines are not dealt
    /// but their cards still count towards the duplicate check.
    pub fn parse_lines(lines: Vec<String>, num_hands: usize) -> Result<TestDeck, StudError> {
        if lines.len() < num_hands {
            return Err(StudError::MissingHands {
                expected: num_hands,
                found: lines.len(),
            });
        }

        let mut seen: HashSet<Card> = HashSet::with_capacity(lines.len() * HAND_SIZE);
        let mut hands = Vec::with_capacity(num_hands);
        for (idx, line) in lines.iter().enumerate() {
            let cards = Self::parse_cards(line, &mut seen).inspect_err(|e| {
                event!(tracing::Level::WARN, line = idx + 1, error = %e, "Rejected test deck");
            })?;
            if idx >= num_hands {
                continue;
            }
            if cards.len() != HAND_SIZE {
                return Err(StudError::WrongHandSize {
                    line: idx + 1,
                    found: cards.len(),
                });
            }
            hands.push(Hand::new_with_cards(cards)?);
        }

        Ok(TestDeck { lines, hands })
    }

    fn split_lines(text: &str) -> Vec<String> {
        text.lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect()
    }

    fn parse_cards(line: &str, seen: &mut HashSet<Card>) -> Result<Vec<Card>, StudError> {
        let mut cards = Vec::with_capacity(HAND_SIZE);
        for token in line.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let card: Card = token.parse()?;
            if !seen.insert(card) {
                return Err(StudError::DuplicateCardInDeck(card));
            }
            cards.push(card);
        }
        Ok(cards)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::core::{Suit, Value};

    const SIX_HANDS: &str = "\
AS, KS, QS, JS, 10S
9H, 8H, 7H, 6H, 5H
3D, 3C, 3H, 3S, 2D
KD, KC, KH, 2S, 2C
4D, 6D, 8D, 9D, JD
10D, 9C, 8C, 7C, 6S
";

    #[test]
    fn test_parse_six_hands() {
        let deck = TestDeckParser::parse_str(SIX_HANDS, 6).unwrap();
        assert_eq!(6, deck.hands.len());
        assert_eq!(6, deck.lines.len());
        assert_eq!("AS KS QS JS 10S", deck.hands[0].to_string());
        assert_eq!("10D 9C 8C 7C 6S", deck.hands[5].to_string());
        assert_eq!("AS, KS, QS, JS, 10S", deck.lines[0]);
    }

    #[test]
    fn test_blank_lines_and_spacing() {
        let text = "\n  AS,KS , QS,JS,TS  \n\n9H, 8H, 7H, 6H, 5H,\n";
        let deck = TestDeckParser::parse_str(text, 2).unwrap();
        assert_eq!("AS KS QS JS 10S", deck.hands[0].to_string());
        assert_eq!("9H 8H 7H 6H 5H", deck.hands[1].to_string());
    }

    #[test_log::test]
    fn test_duplicate_across_lines() {
        let text = "AS, KS, QS, JS, 10S\n9H, 8H, 7H, 6H, AS\n";
        let err = TestDeckParser::parse_str(text, 2).unwrap_err();
        assert!(matches!(
            err,
            StudError::DuplicateCardInDeck(c) if c == Card::new(Value::Ace, Suit::Spade)
        ));
    }

    #[test]
    fn test_duplicate_written_two_ways() {
        let text = "TS, KS, QS, JS, AS\n9H, 8H, 7H, 6H, 10S\n";
        let err = TestDeckParser::parse_str(text, 2).unwrap_err();
        assert!(matches!(err, StudError::DuplicateCardInDeck(_)));
    }

    #[test]
    fn test_bad_cards() {
        assert!(matches!(
            TestDeckParser::parse_str("AS, KS, QS, JS, 1S", 1),
            Err(StudError::UnexpectedValueChar(s)) if s == "1S"
        ));
        assert!(matches!(
            TestDeckParser::parse_str("AS, KS, QS, JS, 10X", 1),
            Err(StudError::UnexpectedSuitChar(s)) if s == "10X"
        ));
    }

    #[test]
    fn test_wrong_hand_size() {
        let text = "AS, KS, QS, JS, 10S\n9H, 8H, 7H, 6H\n";
        assert!(matches!(
            TestDeckParser::parse_str(text, 2),
            Err(StudError::WrongHandSize { line: 2, found: 4 })
        ));
    }

    #[test]
    fn test_missing_hands() {
        assert!(matches!(
            TestDeckParser::parse_str("AS, KS, QS, JS, 10S\n", 6),
            Err(StudError::MissingHands {
                expected: 6,
                found: 1
            })
        ));
    }

    #[test]
    fn test_extra_lines_are_echoed_not_dealt() {
        let text = "AS, KS, QS, JS, 10S\n9H, 8H, 7H, 6H, 5H\n";
        let deck = TestDeckParser::parse_str(text, 1).unwrap();
        assert_eq!(1, deck.hands.len());
        assert_eq!(2, deck.lines.len());
    }

    #[test_log::test]
    fn test_duplicate_after_dealt_lines() {
        let text = "AS, KS, QS, JS, 10S\n9H, 8H, 7H, 6H, AS\n";
        let err = TestDeckParser::parse_str(text, 1).unwrap_err();
        assert!(matches!(
            err,
            StudError::DuplicateCardInDeck(c) if c == Card::new(Value::Ace, Suit::Spade)
        ));
    }

    #[test]
    fn test_bad_card_after_dealt_lines() {
        let text = "AS, KS, QS, JS, 10S\n9H, 8H, 7H, 6H, 5X\n";
        assert!(matches!(
            TestDeckParser::parse_str(text, 1),
            Err(StudError::UnexpectedSuitChar(s)) if s == "5X"
        ));
    }

    #[test]
    fn test_short_extra_line_is_not_a_hand() {
        let text = "AS, KS, QS, JS, 10S\n9H, 8H\n";
        let deck = TestDeckParser::parse_str(text, 1).unwrap();
        assert_eq!(1, deck.hands.len());
        assert_eq!("9H, 8H", deck.lines[1]);
    }

    #[test]
    fn test_read_lines_of_bad_deck() {
        let text = "AS, KS, QS, JS, 10S\n\n9H, 8H, 7H, 6H, AS\n";
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();

        let lines = TestDeckParser::read_lines(file.path()).unwrap();
        assert_eq!(vec!["AS, KS, QS, JS, 10S", "9H, 8H, 7H, 6H, AS"], lines);
        assert!(matches!(
            TestDeckParser::parse_lines(lines, 2),
            Err(StudError::DuplicateCardInDeck(_))
        ));
    }

    #[test]
    fn test_parse_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SIX_HANDS.as_bytes()).unwrap();

        let deck = TestDeckParser::parse_file(file.path(), 6).unwrap();
        assert_eq!(TestDeckParser::parse_str(SIX_HANDS, 6).unwrap(), deck);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = TestDeckParser::parse_file(dir.path().join("nope.txt"), 6).unwrap_err();
        assert!(matches!(err, StudError::Io(_)));
    }
}
