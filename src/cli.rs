use clap::Parser;

/// Command line interface for the application
#[derive(Parser)]
pub struct Cli {
    /// Path to the YAML configuration file with server, database and auth settings
    #[arg(short, long)]
    pub config: Option<String>,

    /// Sets the logging verbosity level for the application
    /// Possible values: "error", "warn", "info", "debug", "trace"
    /// Default: "info"
    #[arg(long, default_value_t = String::from("info"))]
    pub logging_level: String,

    /// Overrides the configured HTTP port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Overrides the configured SQLite database path
    #[arg(long)]
    pub database_path: Option<String>,

    /// Logs to stdout only instead of also writing the rolling log file
    #[arg(long)]
    pub no_log_file: bool,
}
