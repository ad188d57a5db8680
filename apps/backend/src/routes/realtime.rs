use actix_web::web;

use crate::ws::session::upgrade;

/// `/ws/rooms/{room}/{player}`: one websocket per participant.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/rooms/{room}/{player}", web::get().to(upgrade));
}
