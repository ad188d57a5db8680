//! Public snapshot API for observing game state without exposing hands.

use serde::Serialize;

use super::cards_types::Card;
use super::modes::{ModeSet, RuleSet};
use super::rules::Role;
use super::state::{Game, GamePhase, RoundResult};

/// Public info about a single seat.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlayerPublic {
    pub name: String,
    pub role: Option<Role>,
    pub hand_size: usize,
    /// 1-based finishing place this round, once the hand is empty.
    pub finished_rank: Option<usize>,
}

/// Everything every subscriber of a room may see.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameSnapshot {
    pub phase: GamePhase,
    /// Current round, or the last completed one between rounds. 0 before the first deal.
    pub round_no: u32,
    pub players: Vec<PlayerPublic>,
    pub turn: Option<String>,
    pub active_modes: ModeSet,
    pub enabled_rules: RuleSet,
    pub top_group: Vec<Card>,
    pub table_size: usize,
    pub discard_size: usize,
    pub finished_order: Vec<String>,
    pub pass_streak: usize,
    pub history: Vec<RoundResult>,
}

/// What only the viewing player may see.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ViewerState {
    pub name: String,
    pub hand: Vec<Card>,
    pub is_turn: bool,
}

pub fn snapshot(game: &Game) -> GameSnapshot {
    let round_no = game.history.len() as u32 + u32::from(game.is_playing());
    let players = game
        .players
        .iter()
        .map(|p| PlayerPublic {
            name: p.name.clone(),
            role: p.role,
            hand_size: p.hand.len(),
            finished_rank: game
                .finished_order
                .iter()
                .position(|n| *n == p.name)
                .map(|i| i + 1),
        })
        .collect();

    GameSnapshot {
        phase: game.phase,
        round_no,
        players,
        turn: game.turn_holder().map(str::to_string),
        active_modes: game.active_modes,
        enabled_rules: game.enabled_rules,
        top_group: game.top_group().to_vec(),
        table_size: game.table.len(),
        discard_size: game.discard_pile.len(),
        finished_order: game.finished_order.clone(),
        pass_streak: game.pass_streak,
        history: game.history.clone(),
    }
}

/// The viewer's sorted hand, or None if `name` is not seated.
pub fn viewer_state(game: &Game, name: &str) -> Option<ViewerState> {
    let player = game.player(name)?;
    Some(ViewerState {
        name: player.name.clone(),
        hand: player.sorted_hand(),
        is_turn: game.turn_holder() == Some(name),
    })
}
