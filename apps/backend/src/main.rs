use actix_web::{web, App, HttpServer};
use daifugo_backend::config::rules::default_rules_from_env;
use daifugo_backend::middleware::cors::cors_middleware;
use daifugo_backend::middleware::request_trace::RequestTrace;
use daifugo_backend::middleware::structured_logger::StructuredLogger;
use daifugo_backend::routes;
use daifugo_backend::state::app_state::AppState;
use daifugo_backend::ServerConfig;
use tracing::info;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // BACKEND_HOST, BACKEND_PORT, CORS_ALLOWED_ORIGINS, DAIFUGO_DEFAULT_RULES.
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };
    let default_rules = match default_rules_from_env() {
        Ok(rules) => rules,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    println!(
        "🚀 Starting Daifugo Backend on http://{}:{}",
        config.host, config.port
    );
    info!(?default_rules, origins = ?config.cors_origins, "server configured");

    let host = config.host.clone();
    let port = config.port;
    let origins = config.cors_origins.clone();

    // Wrap AppState with web::Data before passing to HttpServer
    let data = web::Data::new(AppState::new(config, default_rules));

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware(&origins))
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
