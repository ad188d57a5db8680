//! Core card-related types: Card, Rank, Suit, JokerSlot

use std::cmp::Ordering;

/// Comparison value of a Joker. Jokers keep it even under revolution.
pub const JOKER_VALUE: i16 = 99;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

/// Printed rank of a standard card, 1 (Ace) through 13 (King).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    pub fn from_number(n: u8) -> Option<Rank> {
        Self::ALL.get(usize::from(n).checked_sub(1)?).copied()
    }

    pub fn number(self) -> u8 {
        self as u8
    }

    /// Comparison value: 3..=13 map to themselves, Ace and Two sit above King.
    pub fn value(self) -> i16 {
        match self {
            Rank::Ace => 14,
            Rank::Two => 15,
            other => i16::from(other.number()),
        }
    }
}

/// Disambiguates the two physically identical Jokers inside one hand.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum JokerSlot {
    First,
    Second,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Card {
    Standard { suit: Suit, rank: Rank },
    Joker(JokerSlot),
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Card::Standard { suit, rank }
    }

    pub const fn joker() -> Self {
        Card::Joker(JokerSlot::First)
    }

    pub fn is_joker(&self) -> bool {
        matches!(self, Card::Joker(_))
    }

    pub fn is_spade_three(&self) -> bool {
        matches!(
            self,
            Card::Standard {
                suit: Suit::Spades,
                rank: Rank::Three
            }
        )
    }

    pub fn suit(&self) -> Option<Suit> {
        match self {
            Card::Standard { suit, .. } => Some(*suit),
            Card::Joker(_) => None,
        }
    }

    pub fn rank(&self) -> Option<Rank> {
        match self {
            Card::Standard { rank, .. } => Some(*rank),
            Card::Joker(_) => None,
        }
    }

    /// Comparison value under normal ordering.
    pub fn value(&self) -> i16 {
        match self {
            Card::Standard { rank, .. } => rank.value(),
            Card::Joker(_) => JOKER_VALUE,
        }
    }

    /// Comparison value as seen by the legality checker. Revolution negates
    /// every standard card; Jokers keep [`JOKER_VALUE`].
    pub fn strength(&self, inverted: bool) -> i16 {
        match self {
            Card::Joker(_) => JOKER_VALUE,
            Card::Standard { .. } if inverted => -self.value(),
            Card::Standard { .. } => self.value(),
        }
    }

    /// Same printed face. The two Jokers are interchangeable.
    pub fn same_face(&self, other: &Card) -> bool {
        match (self, other) {
            (Card::Joker(_), Card::Joker(_)) => true,
            _ => self == other,
        }
    }
}

// Ord on Card is only for presenting hands: value, then suit, Jokers last.
// The legality checker compares `strength`, never this ordering.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Card::Joker(a), Card::Joker(b)) => a.cmp(b),
            (Card::Joker(_), _) => Ordering::Greater,
            (_, Card::Joker(_)) => Ordering::Less,
            (
                Card::Standard { suit: sa, rank: ra },
                Card::Standard { suit: sb, rank: rb },
            ) => ra.value().cmp(&rb.value()).then(sa.cmp(sb)),
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
