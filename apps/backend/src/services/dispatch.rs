//! Maps one inbound intent to exactly one engine operation.

use serde::Serialize;

use crate::domain::{self, Card, Game, PassResult, SubmitResult};
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    AddPlayer { name: String },
    RemovePlayer { name: String },
    StartRound,
    SubmitCards { player: String, cards: Vec<Card> },
    Pass { player: String },
}

impl Intent {
    /// Stable name for logs and acks.
    pub fn kind(&self) -> &'static str {
        match self {
            Intent::AddPlayer { .. } => "add_player",
            Intent::RemovePlayer { .. } => "remove_player",
            Intent::StartRound => "start_round",
            Intent::SubmitCards { .. } => "submit_cards",
            Intent::Pass { .. } => "pass",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    PlayerAdded { name: String },
    PlayerRemoved { name: String },
    RoundStarted { round_no: u32 },
    Submitted(SubmitResult),
    Passed(PassResult),
}

pub fn apply(game: &mut Game, intent: &Intent) -> Result<Outcome, DomainError> {
    match intent {
        Intent::AddPlayer { name } => {
            domain::add_player(game, name)?;
            Ok(Outcome::PlayerAdded {
                name: name.trim().to_string(),
            })
        }
        Intent::RemovePlayer { name } => {
            let removed = domain::remove_player(game, name)?;
            Ok(Outcome::PlayerRemoved { name: removed.name })
        }
        Intent::StartRound => {
            domain::start_round(game)?;
            Ok(Outcome::RoundStarted {
                round_no: game.history.len() as u32 + 1,
            })
        }
        Intent::SubmitCards { player, cards } => {
            domain::try_submit(game, player, cards).map(Outcome::Submitted)
        }
        Intent::Pass { player } => domain::pass(game, player).map(Outcome::Passed),
    }
}
