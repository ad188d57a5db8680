//! Turn actions during a round: submitting cards and passing.

use serde::Serialize;

use super::cards_types::Card;
use super::legality::{check_submission, Acceptance};
use super::modes::{HouseRule, Mode};
use super::rounds::end_round;
use super::rules::{EIGHT_CLEAR_VALUE, REVOLUTION_MIN_CARDS};
use super::state::Game;
use crate::errors::domain::{DomainError, RejectKind};

/// What removed the table after a play or pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClearReason {
    EightClear,
    JokerSpadeThree,
    AllPassed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitResult {
    pub acceptance: Acceptance,
    pub cleared: Option<ClearReason>,
    pub revolution_toggled: bool,
    pub player_finished: bool,
    pub round_ended: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PassResult {
    pub cleared: Option<ClearReason>,
}

/// Seat of `player` if it holds the turn in a round being played.
fn acting_seat(game: &Game, player: &str) -> Result<usize, DomainError> {
    if !game.is_playing() {
        return Err(DomainError::rejected(
            RejectKind::PhaseMismatch,
            "No round is being played",
        ));
    }
    // Anyone other than the turn holder is refused the same way, seated or not.
    match game.seat_of(player) {
        Some(seat) if seat == game.turn => Ok(seat),
        _ => Err(DomainError::rejected(
            RejectKind::NotYourTurn,
            format!("It is not {player}'s turn"),
        )),
    }
}

fn ends_with_joker_then_spade_three(table: &[Card]) -> bool {
    matches!(table, [.., joker, three] if joker.is_joker() && three.is_spade_three())
}

/// Try to play `cards` from `player`'s hand. A rejection leaves `game`
/// untouched.
pub fn try_submit(
    game: &mut Game,
    player: &str,
    cards: &[Card],
) -> Result<SubmitResult, DomainError> {
    let seat = acting_seat(game, player)?;
    if !game.players[seat].holds_all(cards) {
        return Err(DomainError::rejected(
            RejectKind::CardsNotInHand,
            "Submitted cards are not all in hand",
        ));
    }
    let acceptance = check_submission(
        game.top_group(),
        cards,
        game.active_modes,
        game.enabled_rules,
    )?;

    game.table.extend_from_slice(cards);
    game.last_submitted_count = cards.len();
    game.last_submitted_turn = Some(seat);
    game.pass_streak = 0;
    game.advance_turn();

    let cleared = if game.enabled_rules.contains(HouseRule::EightClear)
        && cards.iter().any(|c| c.value() == EIGHT_CLEAR_VALUE)
    {
        Some(ClearReason::EightClear)
    } else if ends_with_joker_then_spade_three(&game.table) {
        Some(ClearReason::JokerSpadeThree)
    } else {
        None
    };
    if cleared.is_some() {
        game.clear_table();
        game.turn = seat;
    }

    let revolution_toggled = cards.len() >= REVOLUTION_MIN_CARDS;
    if revolution_toggled {
        game.active_modes.toggle(Mode::Revolution);
    }

    game.players[seat].remove_cards(cards);

    let mut player_finished = false;
    let mut round_ended = false;
    if game.players[seat].hand.is_empty() {
        player_finished = true;
        game.finished_order.push(game.players[seat].name.clone());
        if game.finished_order.len() + 1 >= game.players.len() {
            end_round(game);
            round_ended = true;
        } else if game.turn == seat {
            game.advance_turn();
        }
    }

    Ok(SubmitResult {
        acceptance,
        cleared,
        revolution_toggled,
        player_finished,
        round_ended,
    })
}

/// Decline to play. The table clears once play comes back to the last
/// submitter or every active player has passed in a row.
pub fn pass(game: &mut Game, player: &str) -> Result<PassResult, DomainError> {
    acting_seat(game, player)?;

    game.advance_turn();
    game.pass_streak += 1;

    let back_to_submitter = game.last_submitted_turn == Some(game.turn);
    let everyone_passed = game.pass_streak == game.active_count();
    let cleared = if back_to_submitter || everyone_passed {
        game.clear_table();
        Some(ClearReason::AllPassed)
    } else {
        None
    };

    Ok(PassResult { cleared })
}
