use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;

mod config;
mod controllers;
mod db;
mod notes;

use config::Config;
use db::Database;
use notes::NoteService;

pub struct AppState {
    pub db: Arc<Database>,
    pub notes: NoteService,
    /// Server start time for uptime calculation
    pub started_at: std::time::Instant,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    log::info!("notes-backend v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env();

    log::info!(
        "Initializing database at {} (pool size {})",
        config.database_url,
        config.db_pool_size
    );
    let db = Database::new(&config.database_url, config.db_pool_size)
        .map_err(|e| std::io::Error::other(format!("Failed to initialize database: {}", e)))?;
    let db = Arc::new(db);

    let bind_addr = (config.host.clone(), config.port);
    log::info!("Starting notes server on {}:{}", bind_addr.0, bind_addr.1);

    let state = web::Data::new(AppState {
        notes: NoteService::new(Arc::clone(&db)),
        db,
        started_at: std::time::Instant::now(),
    });

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .wrap(cors)
            .configure(controllers::health::config_routes)
            .configure(controllers::notes::config)
    })
    .bind(bind_addr)?
    .run();

    // Get server handle for graceful shutdown
    let server_handle = server.handle();

    // Spawn Ctrl+C handler
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        log::info!("Received Ctrl+C, shutting down...");

        log::info!("Stopping HTTP server...");
        let server_stop = server_handle.stop(true);
        if tokio::time::timeout(std::time::Duration::from_secs(5), server_stop).await.is_err() {
            log::warn!("Timeout waiting for HTTP server to stop, forcing exit...");
        }

        log::info!("Shutdown complete");
    });

    server.await
}
