//! Round lifecycle: dealing a new round and recording its result.

use rand::seq::SliceRandom;

use super::dealing::{build_shuffled_deck, deal_round_robin};
use super::modes::ModeSet;
use super::rules::{role_for_rank, Role, MAX_PLAYERS, MIN_PLAYERS};
use super::state::{Game, GamePhase, RoundResult};
use crate::errors::domain::{DomainError, OperationKind};

/// Reseat, deal and assign roles from the previous round's finish order.
pub fn start_round(game: &mut Game) -> Result<(), DomainError> {
    let n = game.players.len();
    if n < MIN_PLAYERS {
        return Err(DomainError::operation(
            OperationKind::NotEnoughPlayers,
            format!("At least {MIN_PLAYERS} players are needed, {n} seated"),
        ));
    }
    if n > MAX_PLAYERS {
        return Err(DomainError::operation(
            OperationKind::TooManyPlayers,
            format!("At most {MAX_PLAYERS} players can play, {n} seated"),
        ));
    }
    if game.is_playing() {
        return Err(DomainError::operation(
            OperationKind::RoundInProgress,
            "A round is already being played",
        ));
    }

    game.players.shuffle(&mut game.rng);

    let deck = build_shuffled_deck(&mut game.rng);
    let hands = deal_round_robin(deck, n);

    let previous = game.history.last();
    for (player, hand) in game.players.iter_mut().zip(hands) {
        player.hand = hand;
        let rank = previous.and_then(|result| {
            result
                .finish_order
                .iter()
                .position(|name| *name == player.name)
        });
        player.role = Some(match rank {
            Some(i) => role_for_rank(i + 1, n),
            None => Role::Commoner,
        });
    }

    game.phase = GamePhase::PlayingCards;
    game.turn = 0;
    game.last_submitted_turn = None;
    game.table.clear();
    game.last_submitted_count = 0;
    game.discard_pile.clear();
    game.finished_order.clear();
    game.pass_streak = 0;
    game.active_modes = ModeSet::empty();
    Ok(())
}

/// Append unfinished players in seating order and record the result.
pub fn end_round(game: &mut Game) -> RoundResult {
    let remaining: Vec<String> = game
        .players
        .iter()
        .filter(|p| !game.finished_order.contains(&p.name))
        .map(|p| p.name.clone())
        .collect();
    game.finished_order.extend(remaining);

    let result = RoundResult {
        round_no: game.history.len() as u32 + 1,
        finish_order: game.finished_order.clone(),
    };
    game.history.push(result.clone());
    game.phase = GamePhase::RoundEnded;
    result
}
