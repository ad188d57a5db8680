use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use super::cards_types::Card;
use super::modes::{Mode, ModeSet, RuleSet};
use super::player::Player;
use super::rules::MAX_NAME_LEN;
use crate::errors::domain::{DomainError, NotFoundKind, OperationKind};

/// Round progression for one room.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GamePhase {
    /// Room created, no round dealt yet.
    WaitingForPlayers,
    PlayingCards,
    RoundEnded,
}

/// Finishing order of one completed round, first place first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundResult {
    pub round_no: u32,
    pub finish_order: Vec<String>,
}

/// Entire room state, sufficient for pure domain operations.
#[derive(Debug, Clone)]
pub struct Game {
    /// Seating order; reshuffled when a round starts.
    pub players: Vec<Player>,
    pub phase: GamePhase,
    /// Index into `players` of the player expected to act.
    pub turn: usize,
    /// Seat of the most recent accepted submission this round.
    pub last_submitted_turn: Option<usize>,
    pub active_modes: ModeSet,
    /// Fixed at room creation.
    pub enabled_rules: RuleSet,
    pub table: Vec<Card>,
    /// Size of the top group, the suffix of `table` that must be beaten.
    pub last_submitted_count: usize,
    pub discard_pile: Vec<Card>,
    pub finished_order: Vec<String>,
    /// Consecutive passes since the last accepted submission or clear.
    pub pass_streak: usize,
    pub history: Vec<RoundResult>,
    pub(crate) rng: ChaCha8Rng,
}

impl Game {
    /// A new room with an OS-seeded shuffler.
    pub fn new(enabled_rules: RuleSet) -> Self {
        Self::with_rng(enabled_rules, ChaCha8Rng::from_os_rng())
    }

    /// Deterministic seating and dealing for a given seed.
    pub fn with_seed(enabled_rules: RuleSet, seed: u64) -> Self {
        Self::with_rng(enabled_rules, ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(enabled_rules: RuleSet, rng: ChaCha8Rng) -> Self {
        Self {
            players: Vec::new(),
            phase: GamePhase::WaitingForPlayers,
            turn: 0,
            last_submitted_turn: None,
            active_modes: ModeSet::empty(),
            enabled_rules,
            table: Vec::new(),
            last_submitted_count: 0,
            discard_pile: Vec::new(),
            finished_order: Vec::new(),
            pass_streak: 0,
            history: Vec::new(),
            rng,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::PlayingCards
    }

    pub fn seat_of(&self, name: &str) -> Option<usize> {
        self.players.iter().position(|p| p.name == name)
    }

    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name == name)
    }

    /// Name of the player holding the turn, while a round is being played.
    pub fn turn_holder(&self) -> Option<&str> {
        if !self.is_playing() {
            return None;
        }
        self.players.get(self.turn).map(|p| p.name.as_str())
    }

    pub fn is_finished(&self, name: &str) -> bool {
        self.finished_order.iter().any(|n| n == name)
    }

    pub fn active_count(&self) -> usize {
        self.players.len().saturating_sub(self.finished_order.len())
    }

    /// The suffix of the table that the next submission must beat.
    pub fn top_group(&self) -> &[Card] {
        let count = self.last_submitted_count.min(self.table.len());
        &self.table[self.table.len() - count..]
    }

    /// Cards in hands, on the table and in the discard pile.
    pub fn cards_in_play(&self) -> usize {
        let in_hands: usize = self.players.iter().map(|p| p.hand.len()).sum();
        in_hands + self.table.len() + self.discard_pile.len()
    }

    /// Move the turn clockwise to the next player who has not finished.
    /// Leaves the turn unchanged when every player has finished.
    pub fn advance_turn(&mut self) {
        let n = self.players.len();
        if n == 0 {
            return;
        }
        let mut next = self.turn;
        for _ in 0..n {
            next = (next + 1) % n;
            if !self.is_finished(&self.players[next].name) {
                self.turn = next;
                return;
            }
        }
    }

    /// Table to discard; resets the top group, shibari lock and pass streak.
    pub fn clear_table(&mut self) {
        self.discard_pile.append(&mut self.table);
        self.last_submitted_count = 0;
        self.active_modes.remove(Mode::ShibariLock);
        self.pass_streak = 0;
    }
}

fn validate_name(name: &str) -> Result<&str, DomainError> {
    let trimmed = name.trim();
    if trimmed.is_empty() || trimmed.chars().count() > MAX_NAME_LEN {
        return Err(DomainError::operation(
            OperationKind::InvalidName,
            format!("Name must be 1 to {MAX_NAME_LEN} characters"),
        ));
    }
    Ok(trimmed)
}

fn ensure_roster_open(game: &Game) -> Result<(), DomainError> {
    if game.is_playing() {
        return Err(DomainError::operation(
            OperationKind::RoundInProgress,
            "Players cannot join or leave while a round is being played",
        ));
    }
    Ok(())
}

/// Seat a new player with an empty hand and no role.
pub fn add_player(game: &mut Game, name: &str) -> Result<(), DomainError> {
    let name = validate_name(name)?;
    if game.seat_of(name).is_some() {
        return Err(DomainError::operation(
            OperationKind::DuplicateName,
            format!("Player {name} is already seated"),
        ));
    }
    ensure_roster_open(game)?;
    game.players.push(Player::new(name));
    Ok(())
}

pub fn remove_player(game: &mut Game, name: &str) -> Result<Player, DomainError> {
    let seat = game.seat_of(name.trim()).ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Player, format!("Player {name} is not seated"))
    })?;
    ensure_roster_open(game)?;
    Ok(game.players.remove(seat))
}
