use crate::api::routes;
use crate::auth::AuthGate;
use crate::db::Database;
use std::net::SocketAddr;
use tracing::info;

/// Starts and runs the HTTP server using Axum web framework
///
/// # Arguments
/// * `port` - Port number to listen on for incoming HTTP connections
/// * `database` - Database connection pool shared across handlers
/// * `gate` - Auth gate consulted by the permission-protected handlers
///
/// # Returns
/// * `Result<(), Box<dyn std::error::Error>>` - Ok when the server shuts down, Error if it fails to start
pub async fn launch_server(
    port: u16,
    database: Database,
    gate: AuthGate,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = routes::app(database, gate);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
