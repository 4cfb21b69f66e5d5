mod parser;
use serde::{Deserialize, Serialize};

pub use parser::load_app_config;

use crate::constants::{DEFAULT_DATABASE_PATH, DEFAULT_PORT};

/// Main configuration structure for the application
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Persistence settings
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Bearer-token permission grants
    #[serde(default)]
    pub auth: AuthConfig,
}

/// HTTP server settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    /// Port to listen on for incoming HTTP connections
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Persistence settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file
    #[serde(default = "default_database_path")]
    pub path: String,
}

/// Bearer-token permission grants
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct AuthConfig {
    /// Tokens accepted by the auth gate and the permissions each carries
    #[serde(default)]
    pub tokens: Vec<TokenGrant>,
}

/// Permissions granted to a single bearer token
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TokenGrant {
    /// The bearer token value
    pub token: String,
    /// Permission strings this token carries
    #[serde(default)]
    pub permissions: Vec<String>,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_database_path() -> String {
    DEFAULT_DATABASE_PATH.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            port: default_port(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        DatabaseConfig {
            path: default_database_path(),
        }
    }
}
