//! Test-only game construction helpers for domain unit tests.

use crate::domain::cards_parsing::try_parse_cards;
use crate::domain::modes::RuleSet;
use crate::domain::player::Player;
use crate::domain::state::{Game, GamePhase};
use crate::domain::Card;

pub fn cards(tokens: &[&str]) -> Vec<Card> {
    try_parse_cards(tokens).expect("hardcoded valid card tokens")
}

/// A round in progress with fixed seating and hands, turn at seat 0.
///
/// Hands need not add up to a full deck; tests that check card
/// conservation deal through `start_round` instead.
pub fn playing_game(seats: &[(&str, &[&str])], rules: RuleSet) -> Game {
    let mut game = Game::with_seed(rules, 42);
    game.players = seats
        .iter()
        .map(|(name, hand)| {
            let mut p = Player::new(*name);
            p.hand = cards(hand);
            p
        })
        .collect();
    game.phase = GamePhase::PlayingCards;
    game
}

pub fn hand_tokens(game: &Game, seat: usize) -> Vec<String> {
    game.players[seat].hand.iter().map(Card::to_string).collect()
}
