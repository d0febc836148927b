use thiserror::Error;

/// Errors that abort a run. Anything that goes wrong while creating a single
/// tournament is a [`SubmissionError`] instead.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing API token: environment variable {var} is not set")]
    MissingToken { var: String },

    #[error("Failed to load settings from {path}: {message}")]
    SettingsLoad { path: String, message: String },

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a missing token error for the given environment variable
    pub fn missing_token(var: impl Into<String>) -> Self {
        Self::MissingToken { var: var.into() }
    }

    /// Create a settings load error
    pub fn settings_load(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SettingsLoad {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a settings validation error
    pub fn invalid_settings(msg: impl Into<String>) -> Self {
        Self::InvalidSettings(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }
}

/// Why a credential was refused before any request was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenRejection {
    #[error("token is empty")]
    Empty,

    #[error("token contains the placeholder marker {0:?}")]
    Placeholder(&'static str),

    #[error("token may only contain letters, digits, '-' and '_'")]
    InvalidCharacters,

    #[error("token is too short")]
    TooShort,
}

/// Failure to create one tournament. Recorded and counted, never fatal.
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("Invalid API token: {0}")]
    InvalidToken(TokenRejection),

    #[error("{status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("{0}")]
    Network(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl SubmissionError {
    /// Create an error for a non-success HTTP status
    pub fn rejected(status: u16, body: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            body: body.into(),
        }
    }
}

/// Outcome of one create request: the tournament URL on success.
pub type SubmissionResult = Result<String, SubmissionError>;
