use serde::{Deserialize, Serialize};

use crate::domain::{GameSnapshot, ViewerState};
use crate::errors::ErrorCode;
use crate::services::dispatch::Outcome;

pub const PROTOCOL_VERSION: i32 = 1;

/// Inbound frames. Card tokens are parsed by the session, not by serde, so
/// a bad token becomes a `PARSE_CARD` error instead of a malformed frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMsg {
    /// Optional version handshake.
    Hello { protocol: i32 },
    AddPlayer { name: String },
    RemovePlayer { name: String },
    StartRound,
    SubmitCards { cards: Vec<String> },
    Pass,
}

#[allow(clippy::large_enum_variant)]
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMsg {
    HelloAck {
        protocol: i32,
        player: String,
    },

    Ack {
        action: &'static str,
        #[serde(flatten)]
        outcome: Outcome,
    },

    GameState {
        room: String,
        version: u64,
        game: GameSnapshot,
        viewer: Option<ViewerState>,
    },

    Error {
        code: ErrorCode,
        message: String,
    },
}
