use std::sync::Arc;

use actix::prelude::*;
use dashmap::DashMap;
use parking_lot::Mutex;
use serde::Serialize;
use time::OffsetDateTime;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::domain::{self, Game, GamePhase, GameSnapshot, RuleSet, ViewerState};
use crate::errors::domain::DomainError;
use crate::services::dispatch::{self, Intent, Outcome};

/// A versioned state push to one subscriber.
#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct RoomEvent {
    pub room: String,
    pub version: u64,
    pub game: Arc<GameSnapshot>,
    /// Only present for subscribers seated in the room.
    pub viewer: Option<ViewerState>,
}

/// Anything that can receive room events: websocket sessions in production,
/// channels in tests.
pub trait RoomSubscriber: Send + Sync {
    fn deliver(&self, event: RoomEvent);
}

impl RoomSubscriber for Recipient<RoomEvent> {
    fn deliver(&self, event: RoomEvent) {
        self.do_send(event);
    }
}

impl RoomSubscriber for UnboundedSender<RoomEvent> {
    fn deliver(&self, event: RoomEvent) {
        // A closed receiver means the test dropped it; nothing to do.
        let _ = self.send(event);
    }
}

struct Subscriber {
    player: Option<String>,
    sink: Box<dyn RoomSubscriber>,
}

struct RoomInner {
    game: Game,
    version: u64,
}

/// How a connecting participant ended up in the room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Joined {
    Seated,
    Reattached,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoomSummary {
    pub name: String,
    pub phase: GamePhase,
    pub players: usize,
    pub subscribers: usize,
    pub version: u64,
    #[serde(serialize_with = "time::serde::rfc3339::serialize")]
    pub created_at: OffsetDateTime,
}

/// One game plus the connections watching it.
///
/// Every mutation takes the game lock, applies one operation, bumps the
/// version and queues a snapshot for each subscriber before releasing, so
/// all subscribers observe the same sequence of versions.
pub struct Room {
    name: String,
    created_at: OffsetDateTime,
    inner: Mutex<RoomInner>,
    subscribers: DashMap<Uuid, Subscriber>,
}

impl Room {
    pub fn new(name: impl Into<String>, rules: RuleSet) -> Self {
        Self::with_game(name, Game::new(rules))
    }

    pub fn with_game(name: impl Into<String>, game: Game) -> Self {
        Self {
            name: name.into(),
            created_at: OffsetDateTime::now_utc(),
            inner: Mutex::new(RoomInner { game, version: 0 }),
            subscribers: DashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> u64 {
        self.inner.lock().version
    }

    pub fn snapshot(&self) -> (u64, GameSnapshot) {
        let inner = self.inner.lock();
        (inner.version, domain::snapshot(&inner.game))
    }

    pub fn summary(&self) -> RoomSummary {
        let inner = self.inner.lock();
        RoomSummary {
            name: self.name.clone(),
            phase: inner.game.phase,
            players: inner.game.players.len(),
            subscribers: self.subscribers.len(),
            version: inner.version,
            created_at: self.created_at,
        }
    }

    /// Apply one intent under the room lock and broadcast on success.
    pub fn dispatch(&self, intent: Intent) -> Result<Outcome, DomainError> {
        let mut inner = self.inner.lock();
        match dispatch::apply(&mut inner.game, &intent) {
            Ok(outcome) => {
                inner.version += 1;
                info!(
                    room = %self.name,
                    intent = intent.kind(),
                    version = inner.version,
                    "intent applied"
                );
                self.broadcast_locked(&inner);
                Ok(outcome)
            }
            Err(err) => {
                self.log_refusal(&intent, &err);
                Err(err)
            }
        }
    }

    /// Seat `player`, or re-attach if the name is already seated.
    pub fn join(&self, player: &str) -> Result<Joined, DomainError> {
        let mut inner = self.inner.lock();
        if inner.game.seat_of(player.trim()).is_some() {
            debug!(room = %self.name, player, "player re-attached");
            return Ok(Joined::Reattached);
        }
        domain::add_player(&mut inner.game, player)?;
        inner.version += 1;
        info!(room = %self.name, player, version = inner.version, "player seated");
        self.broadcast_locked(&inner);
        Ok(Joined::Seated)
    }

    /// Register a connection and push it the current state.
    pub fn subscribe(&self, conn_id: Uuid, player: Option<String>, sink: Box<dyn RoomSubscriber>) {
        let inner = self.inner.lock();
        let event = RoomEvent {
            room: self.name.clone(),
            version: inner.version,
            game: Arc::new(domain::snapshot(&inner.game)),
            viewer: player
                .as_deref()
                .and_then(|p| domain::viewer_state(&inner.game, p)),
        };
        sink.deliver(event);
        self.subscribers.insert(conn_id, Subscriber { player, sink });
        debug!(room = %self.name, conn_id = %conn_id, "subscribed");
    }

    /// Drop a connection. Game state is left as is.
    pub fn unsubscribe(&self, conn_id: Uuid) {
        if self.subscribers.remove(&conn_id).is_some() {
            debug!(room = %self.name, conn_id = %conn_id, "unsubscribed");
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn broadcast_locked(&self, inner: &RoomInner) {
        let game = Arc::new(domain::snapshot(&inner.game));
        for entry in self.subscribers.iter() {
            let subscriber = entry.value();
            let viewer = subscriber
                .player
                .as_deref()
                .and_then(|p| domain::viewer_state(&inner.game, p));
            subscriber.sink.deliver(RoomEvent {
                room: self.name.clone(),
                version: inner.version,
                game: Arc::clone(&game),
                viewer,
            });
        }
    }

    fn log_refusal(&self, intent: &Intent, err: &DomainError) {
        match err {
            DomainError::Unimplemented(feature, detail) => {
                error!(room = %self.name, intent = intent.kind(), ?feature, detail = %detail, "unimplemented rule feature");
            }
            _ => {
                debug!(room = %self.name, intent = intent.kind(), code = %err.code(), "intent refused");
            }
        }
    }
}
