use std::sync::Arc;
use std::time::{Duration, Instant};

use actix::prelude::*;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::try_parse_cards;
use crate::error::AppError;
use crate::errors::domain::{DomainError, OperationKind};
use crate::errors::ErrorCode;
use crate::rooms::{Room, RoomEvent};
use crate::services::dispatch::Intent;
use crate::state::app_state::AppState;
use crate::ws::protocol::{ClientMsg, ServerMsg, PROTOCOL_VERSION};

const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(20);
const CLIENT_TIMEOUT: Duration = Duration::from_secs(40);

/// `GET /ws/rooms/{room}/{player}`
///
/// Creates the room on first reference and seats the player before the
/// upgrade. A bad room or player name fails the handshake; a player who
/// cannot be seated right now (round in progress, table full) still
/// connects and watches.
pub async fn upgrade(
    req: HttpRequest,
    stream: web::Payload,
    path: web::Path<(String, String)>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let (room_name, player) = path.into_inner();
    let room = app_state
        .registry()
        .get_or_create(&room_name)
        .map_err(AppError::from)?;

    let player = player.trim().to_string();
    let seat_refusal = match room.join(&player) {
        Ok(joined) => {
            debug!(room = %room_name, player = %player, ?joined, "[WS SESSION] joined");
            None
        }
        Err(err @ DomainError::Operation(OperationKind::InvalidName, _)) => {
            return Err(AppError::from(err).into());
        }
        Err(err) => Some(err),
    };

    let session = WsSession::new(Uuid::new_v4(), room, player, seat_refusal);
    ws::start(session, &req, stream)
}

pub struct WsSession {
    conn_id: Uuid,
    room: Arc<Room>,
    player: String,
    /// Why the player is watching instead of seated, reported once on start.
    seat_refusal: Option<DomainError>,

    last_heartbeat: Instant,
}

impl WsSession {
    fn new(
        conn_id: Uuid,
        room: Arc<Room>,
        player: String,
        seat_refusal: Option<DomainError>,
    ) -> Self {
        Self {
            conn_id,
            room,
            player,
            seat_refusal,
            last_heartbeat: Instant::now(),
        }
    }

    fn send_json(ctx: &mut ws::WebsocketContext<Self>, msg: &ServerMsg) {
        match serde_json::to_string(msg) {
            Ok(payload) => ctx.text(payload),
            Err(err) => warn!(error = %err, "[WS SESSION] failed to serialize outbound message"),
        }
    }

    fn send_error(ctx: &mut ws::WebsocketContext<Self>, code: ErrorCode, message: impl Into<String>) {
        Self::send_json(
            ctx,
            &ServerMsg::Error {
                code,
                message: message.into(),
            },
        );
    }

    fn send_error_and_close(
        &self,
        ctx: &mut ws::WebsocketContext<Self>,
        code: ErrorCode,
        message: impl Into<String>,
    ) {
        Self::send_error(ctx, code, message);
        ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Error)));
        ctx.stop();
    }

    fn start_heartbeat(&self, ctx: &mut ws::WebsocketContext<Self>) {
        ctx.run_interval(HEARTBEAT_INTERVAL, |actor, ctx| {
            if Instant::now().duration_since(actor.last_heartbeat) > CLIENT_TIMEOUT {
                warn!(
                    conn_id = %actor.conn_id,
                    room = %actor.room.name(),
                    player = %actor.player,
                    "[WS SESSION] heartbeat timed out"
                );
                ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Normal)));
                ctx.stop();
                return;
            }
            ctx.ping(b"keepalive");
        });
    }

    fn intent_for(&self, msg: ClientMsg) -> Result<Option<Intent>, DomainError> {
        let intent = match msg {
            ClientMsg::Hello { .. } => return Ok(None),
            ClientMsg::AddPlayer { name } => Intent::AddPlayer { name },
            ClientMsg::RemovePlayer { name } => Intent::RemovePlayer { name },
            ClientMsg::StartRound => Intent::StartRound,
            ClientMsg::SubmitCards { cards } => Intent::SubmitCards {
                player: self.player.clone(),
                cards: try_parse_cards(cards.iter().map(String::as_str))?,
            },
            ClientMsg::Pass => Intent::Pass {
                player: self.player.clone(),
            },
        };
        Ok(Some(intent))
    }

    fn handle_client_msg(&mut self, msg: ClientMsg, ctx: &mut ws::WebsocketContext<Self>) {
        if let ClientMsg::Hello { protocol } = msg {
            if protocol != PROTOCOL_VERSION {
                self.send_error_and_close(ctx, ErrorCode::BadProtocol, "Unsupported protocol version");
                return;
            }
            Self::send_json(
                ctx,
                &ServerMsg::HelloAck {
                    protocol: PROTOCOL_VERSION,
                    player: self.player.clone(),
                },
            );
            return;
        }

        let intent = match self.intent_for(msg) {
            Ok(Some(intent)) => intent,
            Ok(None) => return,
            Err(err) => {
                Self::send_error(ctx, err.code(), err.detail());
                return;
            }
        };

        let action = intent.kind();
        // The room pushes the new state to every subscriber, this session
        // included, through the mailbox; the ack is written first.
        match self.room.dispatch(intent) {
            Ok(outcome) => Self::send_json(ctx, &ServerMsg::Ack { action, outcome }),
            Err(err) => Self::send_error(ctx, err.code(), err.detail()),
        }
    }
}

impl Actor for WsSession {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        info!(
            conn_id = %self.conn_id,
            room = %self.room.name(),
            player = %self.player,
            "[WS SESSION] started"
        );

        let recipient = ctx.address().recipient::<RoomEvent>();
        self.room
            .subscribe(self.conn_id, Some(self.player.clone()), Box::new(recipient));

        if let Some(err) = self.seat_refusal.take() {
            Self::send_error(ctx, err.code(), err.detail());
        }

        self.start_heartbeat(ctx);
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        self.room.unsubscribe(self.conn_id);
        info!(
            conn_id = %self.conn_id,
            room = %self.room.name(),
            player = %self.player,
            "[WS SESSION] stopped"
        );
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for WsSession {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Ping(payload)) => {
                self.last_heartbeat = Instant::now();
                ctx.pong(&payload);
            }
            Ok(ws::Message::Pong(_)) => {
                self.last_heartbeat = Instant::now();
            }
            Ok(ws::Message::Text(text)) => {
                self.last_heartbeat = Instant::now();

                let parsed: Result<ClientMsg, _> = serde_json::from_str(&text);
                match parsed {
                    Ok(cmd) => self.handle_client_msg(cmd, ctx),
                    Err(err) => {
                        debug!(conn_id = %self.conn_id, error = %err, "[WS SESSION] malformed frame");
                        Self::send_error(ctx, ErrorCode::BadRequest, "Malformed JSON");
                    }
                }
            }
            Ok(ws::Message::Binary(_)) => {
                self.last_heartbeat = Instant::now();
                self.send_error_and_close(ctx, ErrorCode::BadRequest, "Binary not supported");
            }
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            Ok(ws::Message::Continuation(_)) | Ok(ws::Message::Nop) => {
                self.last_heartbeat = Instant::now();
            }
            Err(err) => {
                warn!(
                    conn_id = %self.conn_id,
                    room = %self.room.name(),
                    error = %err,
                    "[WS SESSION] protocol error"
                );
                ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Error)));
                ctx.stop();
            }
        }
    }
}

impl Handler<RoomEvent> for WsSession {
    type Result = ();

    fn handle(&mut self, event: RoomEvent, ctx: &mut Self::Context) -> Self::Result {
        let RoomEvent {
            room,
            version,
            game,
            viewer,
        } = event;
        Self::send_json(
            ctx,
            &ServerMsg::GameState {
                room,
                version,
                game: Arc::unwrap_or_clone(game),
                viewer,
            },
        );
    }
}
