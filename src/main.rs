//! Main entry point for the application.
//!
//! This module initializes logging, loads environment variables and
//! configuration, prepares the SQLite store and starts the HTTP server.

use clap::Parser;
use quizbar::api::server;
use quizbar::auth::AuthGate;
use quizbar::cli::Cli;
use quizbar::config::{self, AppConfig};
use quizbar::db::Database;
use quizbar::utils;
use tracing::{error, info, warn};

/// Main entry point that initializes and runs the application.
///
/// # Initialization steps:
/// 1. Parse CLI arguments
/// 2. Initialize logging system
/// 3. Load environment variables and configuration
/// 4. Prepare the database and auth gate
/// 5. Serve the API
#[tokio::main]
async fn main() {
    let cli = Cli::try_parse().expect("Failed to parse CLI arguments");
    utils::init_logging(&cli.logging_level, !cli.no_log_file);

    if let Err(e) = dotenvy::dotenv() {
        warn!("Failed to load .env file: {}", e);
    }

    let config = match &cli.config {
        Some(path) => {
            config::load_app_config(path).expect("Failed to parse application configuration")
        }
        None => AppConfig::default(),
    };

    let port = cli.port.unwrap_or(config.server.port);
    let database_path = cli
        .database_path
        .clone()
        .or_else(|| std::env::var("DATABASE_PATH").ok())
        .unwrap_or_else(|| config.database.path.clone());

    let database = Database::new(&database_path);
    if let Err(e) = database.init_schema() {
        error!("Failed to prepare database schema: {}", e);
        return;
    }

    let gate = AuthGate::from_config(&config.auth);

    info!("Starting API server on port {}", port);
    if let Err(e) = server::launch_server(port, database, gate).await {
        error!("Failed to start server: {}", e);
    }
}
