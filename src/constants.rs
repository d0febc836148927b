//! Application-wide constants and configuration values
//!
//! This module centralizes the magic numbers, environment variable names and
//! fixed strings used across the scheduler.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 4;

/// Default server the tournaments are created on
pub const DEFAULT_SERVER_URL: &str = "https://lichess.org";

/// User agent sent with every request so the server can identify the tool
pub const USER_AGENT: &str = concat!("team-battle-scheduler/", env!("CARGO_PKG_VERSION"));

/// Default location of the tournament settings record
pub const DEFAULT_SETTINGS_PATH: &str = "tournament_settings.json";

/// Default location of the tournament state record
pub const DEFAULT_STATE_PATH: &str = "tournament_state.json";

/// Default log file name inside the log directory
pub const LOG_FILE_NAME: &str = "team_battle_scheduler.log";

/// Scheduling parameters
pub mod schedule {
    /// Number of upcoming calendar days covered by one run
    pub const HORIZON_DAYS: u32 = 7;

    /// Delay between consecutive create requests (the server's rate limit)
    pub const SUBMISSION_DELAY_SECONDS: u64 = 10;

    /// Fixed prefix of every tournament name
    pub const NAME_PREFIX: &str = "Team Battle";

    /// Placeholder replaced with the event type label in description templates
    pub const TYPE_PLACEHOLDER: &str = "{TYPE}";

    /// Placeholder replaced with the sequence number in description templates
    pub const DAY_NUM_PLACEHOLDER: &str = "{DAY_NUM}";

    /// Calendar date format used for the idempotence key
    pub const DATE_FORMAT: &str = "%Y-%m-%d";
}

/// Credential checks
pub mod token {
    /// Tokens of this length or shorter are rejected
    pub const MIN_EXCLUSIVE_LENGTH: usize = 10;

    /// Template values that must never be sent as a real credential
    pub const PLACEHOLDER_MARKERS: [&str; 3] = ["***", "YOUR_TOKEN", "PLACEHOLDER"];
}

/// Environment variable names
pub mod env_vars {
    /// Bearer credential for the create endpoint (required)
    pub const API_TOKEN: &str = "LICHESS_TOKEN";

    /// Enables dry-run mode when set to `1` or `true`
    pub const DRY_RUN: &str = "DRY_RUN";

    /// Overrides the configured server URL
    pub const SERVER_URL: &str = "BATTLE_SERVER_URL";

    /// Overrides the configured log file path
    pub const LOG_FILE: &str = "BATTLE_LOG_FILE";

    /// Overrides the configured HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "BATTLE_HTTP_TIMEOUT";

    /// Overrides the invited team list (comma separated team ids)
    pub const INVITED_TEAMS: &str = "BATTLE_INVITED_TEAMS";
}
