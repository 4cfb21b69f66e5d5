use super::AppConfig;
use std::error::Error;
use std::fs;

use tracing::info;

/// Loads and parses the application configuration from a YAML file
///
/// # Arguments
///
/// * `file_path` - Path to the YAML configuration file
///
/// # Returns
///
/// * `Result<AppConfig, Box<dyn Error>>` - The parsed AppConfig on success, or an error if loading/parsing fails
///
/// # Errors
///
/// Returns an error if:
/// * The file cannot be read
/// * The YAML content cannot be parsed into an AppConfig
pub fn load_app_config(file_path: &str) -> Result<AppConfig, Box<dyn Error>> {
    let yaml_str = fs::read_to_string(file_path)?;
    let app_config: AppConfig = serde_yaml::from_str(&yaml_str)?;
    info!("Loaded application configuration from {}", file_path);
    Ok(app_config)
}
