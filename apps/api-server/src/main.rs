//! # Journal API Server
//!
//! The main entry point for the Actix-web HTTP server.

use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

use journal_core::ports::{PasswordService, TokenService};
use journal_infra::{Argon2PasswordService, JwtTokenService};

mod config;
mod handlers;
mod middleware;
mod state;

use config::AppConfig;
use state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing();

    // Load configuration
    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Journal API Server on {}:{}",
        config.host,
        config.port
    );

    // Build application state and services
    let state = AppState::new(config.database.as_ref()).await;
    let token_service: Arc<dyn TokenService> = Arc::new(JwtTokenService::from_env());
    let password_service: Arc<dyn PasswordService> = Arc::new(Argon2PasswordService::new());

    std::fs::create_dir_all(&config.upload_dir)?;
    let upload_dir = config.upload_dir.clone();
    let max_upload_bytes = config.max_upload_bytes;

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(token_service.clone()))
            .app_data(web::Data::new(password_service.clone()))
            .app_data(web::Data::new(handlers::UploadConfig {
                dir: upload_dir.clone(),
                max_bytes: max_upload_bytes,
            }))
            .configure(handlers::configure_routes)
            .service(actix_files::Files::new("/uploads", upload_dir.clone()))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,api_server=debug,journal_infra=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}
