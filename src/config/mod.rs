// Configuration module entry point
// Loads layered configuration once at startup; nothing here is mutated afterwards

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::Config;

pub const DEFAULT_CONFIG_PATH: &str = "config";
pub const DEFAULT_ARCHIVE_ROOT: &str = "/var/www/story-archive/archive";
pub const DEFAULT_AUTO_EXPORT_ROOT: &str = "/mnt/nfs/MM/AutoExport";

impl Config {
    /// Load configuration from specified file path (without extension)
    /// Default config file is "config.toml" when no path specified
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        Self::load_with_env(config_path, environment())
    }

    fn load_with_env(
        config_path: &str,
        env: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(env)
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("archive.root", DEFAULT_ARCHIVE_ROOT)?
            .set_default("archive.auto_export_root", DEFAULT_AUTO_EXPORT_ROOT)?
            .set_default("static_files.root", ".")?
            .set_default("static_files.index_file", "index.html")?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", false)?
            .set_default("performance.keep_alive", true)?
            .set_default("performance.connection_timeout", 0)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

/// `STORY_` variables, e.g. STORY_ARCHIVE__ROOT=/srv/archive
fn environment() -> config::Environment {
    config::Environment::with_prefix("STORY")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("archive.snapshot_excluded_users")
}
