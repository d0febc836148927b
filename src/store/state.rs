use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tracing::{info, warn};

/// Run state used as the once-per-day guard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentState {
    /// UTC date (`YYYY-MM-DD`) of the last run that created anything.
    /// Empty when no run has succeeded yet.
    #[serde(default)]
    pub last_creation_date: String,
}

/// Loads the run state. A missing or unreadable record is not an error: the
/// default (empty) state is returned and the problem is logged as a warning.
pub async fn load_state(path: &Path) -> TournamentState {
    let content = match fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) => {
            warn!(
                "Could not read state file {}: {e}. Starting from an empty state",
                path.display()
            );
            return TournamentState::default();
        }
    };

    match serde_json::from_str(&content) {
        Ok(state) => state,
        Err(e) => {
            warn!(
                "State file {} is corrupt: {e}. Starting from an empty state",
                path.display()
            );
            TournamentState::default()
        }
    }
}

/// Overwrites the run state record.
pub async fn save_state(path: &Path, state: &TournamentState) -> Result<(), AppError> {
    super::write_json(path, state).await?;
    info!(
        "Saved state to {} (lastCreationDate = {})",
        path.display(),
        state.last_creation_date
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_missing_state_defaults_to_empty_date() {
        let temp_dir = tempdir().unwrap();
        let state = load_state(&temp_dir.path().join("state.json")).await;
        assert_eq!(state.last_creation_date, "");
    }

    #[tokio::test]
    async fn test_corrupt_state_defaults_to_empty_date() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("state.json");
        tokio::fs::write(&path, "{ not json").await.unwrap();

        assert_eq!(load_state(&path).await, TournamentState::default());
    }

    #[tokio::test]
    async fn test_state_uses_camel_case_field() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("state.json");
        tokio::fs::write(&path, r#"{"lastCreationDate":"2024-05-01"}"#)
            .await
            .unwrap();

        let state = load_state(&path).await;

        assert_eq!(state.last_creation_date, "2024-05-01");
    }

    #[tokio::test]
    async fn test_save_state_then_load() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("state.json");
        let state = TournamentState {
            last_creation_date: "2024-05-02".to_string(),
        };

        save_state(&path, &state).await.unwrap();

        let content = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(content.contains("\"lastCreationDate\": \"2024-05-02\""));
        assert_eq!(load_state(&path).await, state);
    }
}
