use actix_web::web;

pub mod health;
pub mod realtime;
pub mod rooms;

/// Register every route. `main.rs` adds the middleware stack around this;
/// tests call it directly on a bare `App`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check: /health
    cfg.configure(health::configure_routes);

    // Room management: /api/rooms/**
    cfg.service(web::scope("/api/rooms").configure(rooms::configure_routes));

    // Realtime: /ws/rooms/{room}/{player}
    cfg.service(web::scope("/ws").configure(realtime::configure_routes));
}
