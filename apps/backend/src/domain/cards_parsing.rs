//! Card tokens: rank number followed by a suit letter ("3S", "13H", "1D"),
//! or `JOKER`. Parsing is case-insensitive.

use std::fmt;
use std::str::FromStr;

use super::cards_types::{Card, JokerSlot, Rank, Suit};
use crate::errors::domain::DomainError;

const JOKER_TOKEN: &str = "JOKER";

impl Suit {
    pub fn letter(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }

    fn from_letter(ch: char) -> Option<Suit> {
        match ch {
            'C' => Some(Suit::Clubs),
            'D' => Some(Suit::Diamonds),
            'H' => Some(Suit::Hearts),
            'S' => Some(Suit::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Standard { suit, rank } => write!(f, "{}{}", rank.number(), suit.letter()),
            Card::Joker(_) => f.write_str(JOKER_TOKEN),
        }
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_uppercase();
        if token == JOKER_TOKEN {
            return Ok(Card::joker());
        }

        let bad = || DomainError::parse_card(format!("Parse card: {s}"));

        let suit_ch = token.chars().last().ok_or_else(bad)?;
        let suit = Suit::from_letter(suit_ch).ok_or_else(bad)?;
        let digits = &token[..token.len() - suit_ch.len_utf8()];
        if digits.is_empty() || digits.len() > 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(bad());
        }
        let rank = digits
            .parse::<u8>()
            .ok()
            .and_then(Rank::from_number)
            .ok_or_else(bad)?;
        Ok(Card::new(suit, rank))
    }
}

/// Non-panicking helper to parse a list of card tokens.
///
/// A second `JOKER` in the same list becomes the second Joker slot so both
/// Jokers of one hand can be submitted together.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut jokers_seen = 0usize;
    tokens
        .into_iter()
        .map(|s| {
            let card = s.as_ref().parse::<Card>()?;
            if card.is_joker() {
                jokers_seen += 1;
                if jokers_seen > 1 {
                    return Ok(Card::Joker(JokerSlot::Second));
                }
            }
            Ok(card)
        })
        .collect()
}

/// Render cards back to their tokens.
pub fn format_cards(cards: &[Card]) -> Vec<String> {
    cards.iter().map(Card::to_string).collect()
}
