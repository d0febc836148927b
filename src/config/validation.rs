use crate::error::AppError;

/// Validates the runtime configuration
///
/// # Validation Rules
/// - Server URL cannot be empty and must carry an http:// or https:// scheme
/// - HTTP timeout must be positive
/// - Invited team ids cannot be empty or contain whitespace
/// - Settings and state paths cannot be empty
pub fn validate_config(
    server_url: &str,
    http_timeout_seconds: u64,
    invited_teams: &[String],
    settings_path: &str,
    state_path: &str,
) -> Result<(), AppError> {
    if server_url.is_empty() {
        return Err(AppError::config_error("Server URL cannot be empty"));
    }

    if !server_url.starts_with("http://") && !server_url.starts_with("https://") {
        return Err(AppError::config_error(format!(
            "Server URL must start with http:// or https://, got '{server_url}'"
        )));
    }

    if http_timeout_seconds == 0 {
        return Err(AppError::config_error("HTTP timeout must be positive"));
    }

    if let Some(team) = invited_teams
        .iter()
        .find(|team| team.is_empty() || team.chars().any(char::is_whitespace))
    {
        return Err(AppError::config_error(format!(
            "Invalid invited team id '{team}'"
        )));
    }

    if settings_path.is_empty() || state_path.is_empty() {
        return Err(AppError::config_error(
            "Settings and state paths cannot be empty",
        ));
    }

    Ok(())
}
