use crate::constants::{
    DEFAULT_HTTP_TIMEOUT_SECONDS, DEFAULT_SERVER_URL, DEFAULT_SETTINGS_PATH, DEFAULT_STATE_PATH,
    LOG_FILE_NAME, env_vars,
};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Runtime configuration for the scheduler.
///
/// This covers where things live and how to reach the server. The tournament
/// parameters themselves are in the settings record (see
/// [`crate::store::TournamentSettings`]).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the chess server, e.g. `https://lichess.org`.
    #[serde(default = "default_server_url")]
    pub server_url: String,
    /// Path of the tournament settings JSON record.
    #[serde(default = "default_settings_path")]
    pub settings_path: String,
    /// Path of the run state JSON record.
    #[serde(default = "default_state_path")]
    pub state_path: String,
    /// Teams invited to every battle besides the host.
    #[serde(default)]
    pub invited_teams: Vec<String>,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
}

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

fn default_settings_path() -> String {
    DEFAULT_SETTINGS_PATH.to_string()
}

fn default_state_path() -> String {
    DEFAULT_STATE_PATH.to_string()
}

fn default_http_timeout() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_url: default_server_url(),
            settings_path: default_settings_path(),
            state_path: default_state_path(),
            invited_teams: Vec::new(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        }
    }
}

impl Config {
    /// Loads configuration from `custom_path`, or from the default config file
    /// location when none is given. A missing file yields the defaults.
    ///
    /// # Environment Variables
    /// - `BATTLE_SERVER_URL` - Override server URL
    /// - `BATTLE_LOG_FILE` - Override log file path
    /// - `BATTLE_HTTP_TIMEOUT` - Override HTTP timeout in seconds
    /// - `BATTLE_INVITED_TEAMS` - Override invited teams (comma separated)
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded configuration
    /// * `Err(AppError)` - The file is unreadable, malformed or invalid
    pub async fn load(custom_path: Option<&str>) -> Result<Self, AppError> {
        let config_path = custom_path
            .map(str::to_string)
            .unwrap_or_else(get_config_path);

        let mut config = if Path::new(&config_path).exists() {
            Config::load_from_path(&config_path).await?
        } else {
            debug!("No config file at {config_path}, using defaults");
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides on top of file values.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(server_url) = std::env::var(env_vars::SERVER_URL) {
            self.server_url = server_url;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }

        if let Ok(teams) = std::env::var(env_vars::INVITED_TEAMS) {
            self.invited_teams = teams
                .split(',')
                .map(str::trim)
                .filter(|team| !team.is_empty())
                .map(str::to_string)
                .collect();
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            &self.server_url,
            self.http_timeout_seconds,
            &self.invited_teams,
            &self.settings_path,
            &self.state_path,
        )
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Saves configuration to the given file path, creating the parent
    /// directory when needed. A trailing slash on the server URL is dropped.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }

        let content = toml::to_string_pretty(&Config {
            server_url: self.server_url.trim_end_matches('/').to_string(),
            ..self.clone()
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a file path without env overrides or validation.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Displays the effective configuration to stdout.
    pub fn display(&self, config_path: &str) {
        let config_state = if Path::new(config_path).exists() {
            ""
        } else {
            " (not found, using defaults)"
        };

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}{config_state}");
        println!("────────────────────────────────────");
        println!("Server URL:");
        println!("{}", self.server_url);
        println!("────────────────────────────────────");
        println!("Settings / State:");
        println!("{}", self.settings_path);
        println!("{}", self.state_path);
        println!("────────────────────────────────────");
        println!("Invited Teams:");
        if self.invited_teams.is_empty() {
            println!("(none)");
        } else {
            println!("{}", self.invited_teams.join(", "));
        }
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", self.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &self.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{}/{LOG_FILE_NAME}", get_log_dir_path());
            println!("(Default location)");
        }
    }
}
