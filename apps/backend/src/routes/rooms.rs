//! Room HTTP routes.

use actix_web::http::header::{ETAG, IF_NONE_MATCH};
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::config::rules::parse_rule_list;
use crate::domain::{GameSnapshot, RuleSet};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::rooms::RoomSummary;
use crate::state::app_state::AppState;

#[derive(Debug, Default, Deserialize)]
struct CreateRoomRequest {
    #[serde(default)]
    rules: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
struct RoomListResponse {
    rooms: Vec<RoomSummary>,
}

#[derive(Debug, Serialize)]
struct CreateRoomResponse {
    #[serde(flatten)]
    room: RoomSummary,
    rules: RuleSet,
    created: bool,
}

#[derive(Debug, Serialize)]
struct RoomStateResponse {
    room: String,
    version: u64,
    game: GameSnapshot,
}

fn room_etag(room: &str, version: u64) -> String {
    format!("\"room-{room}-v{version}\"")
}

/// GET /api/rooms
async fn list_rooms(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let rooms = app_state.registry().summaries();
    Ok(HttpResponse::Ok().json(RoomListResponse { rooms }))
}

/// POST /api/rooms/{room}
///
/// Body is optional. `{"rules": [...]}` picks the house rules of a new room;
/// an existing room keeps its rules and answers 200 instead of 201.
async fn create_room(
    path: web::Path<String>,
    body: web::Bytes,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let name = path.into_inner();

    let request: CreateRoomRequest = if body.iter().all(u8::is_ascii_whitespace) {
        CreateRoomRequest::default()
    } else {
        serde_json::from_slice(&body).map_err(|e| {
            AppError::bad_request(ErrorCode::BadRequest, format!("Invalid request body: {e}"))
        })?
    };
    let rules = request.rules.map(parse_rule_list).transpose()?;

    let (room, created) = app_state.registry().create_with_rules(&name, rules)?;
    let (_, snapshot) = room.snapshot();
    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok(HttpResponse::build(status).json(CreateRoomResponse {
        room: room.summary(),
        rules: snapshot.enabled_rules,
        created,
    }))
}

/// GET /api/rooms/{room}
///
/// Public snapshot only; hands are never exposed over HTTP. The ETag carries
/// the room version, so `If-None-Match` answers 304 until the next change.
async fn get_room(
    http_req: HttpRequest,
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let name = path.into_inner();
    let room = app_state.registry().get(&name).ok_or_else(|| {
        AppError::not_found(ErrorCode::RoomNotFound, format!("Room {name} not found"))
    })?;

    let (version, game) = room.snapshot();
    let etag_value = room_etag(&name, version);

    if let Some(if_none_match) = http_req.headers().get(IF_NONE_MATCH) {
        if let Ok(client_etag) = if_none_match.to_str() {
            let matches = client_etag.trim() == "*"
                || client_etag
                    .split(',')
                    .map(str::trim)
                    .any(|etag| etag == etag_value);
            if matches {
                return Ok(HttpResponse::build(StatusCode::NOT_MODIFIED)
                    .insert_header((ETAG, etag_value))
                    .finish());
            }
        }
    }

    Ok(HttpResponse::Ok()
        .insert_header((ETAG, etag_value))
        .json(RoomStateResponse {
            room: name,
            version,
            game,
        }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list_rooms))
        .route("/{room}", web::post().to(create_room))
        .route("/{room}", web::get().to(get_room));
}
