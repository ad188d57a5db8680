//! Deck construction, shuffling and round-robin dealing.

use rand::seq::SliceRandom;
use rand::Rng;

use super::cards_types::{Card, JokerSlot, Rank, Suit};
use super::rules::DECK_SIZE;

/// Full 54-card deck in a fixed order: four suits of 13 ranks, then both Jokers.
pub fn full_deck() -> Vec<Card> {
    let suits = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in suits {
        for rank in Rank::ALL {
            deck.push(Card::new(suit, rank));
        }
    }
    deck.push(Card::Joker(JokerSlot::First));
    deck.push(Card::Joker(JokerSlot::Second));
    deck
}

/// A freshly shuffled deck. Deterministic for a seeded `rng`.
pub fn build_shuffled_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    let mut deck = full_deck();
    deck.shuffle(rng);
    deck
}

/// Deal every card round-robin starting at seat 0, so hand sizes differ by
/// at most one. Returns an empty vector when `player_count` is zero.
pub fn deal_round_robin(deck: Vec<Card>, player_count: usize) -> Vec<Vec<Card>> {
    if player_count == 0 {
        return Vec::new();
    }
    let mut hands: Vec<Vec<Card>> = (0..player_count)
        .map(|_| Vec::with_capacity(deck.len() / player_count + 1))
        .collect();
    for (i, card) in deck.into_iter().enumerate() {
        hands[i % player_count].push(card);
    }
    hands
}
