use crate::constants::schedule::HORIZON_DAYS;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tracing::{debug, info};

/// Tournament parameters shared by every event, plus the sequence counter.
///
/// Field names on disk are camelCase. Unknown fields are ignored and every
/// listed field is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentSettings {
    /// Team organising the battles.
    pub host_team_id: String,
    /// Description template with `{TYPE}` and `{DAY_NUM}` placeholders.
    pub description: String,
    /// Highest sequence number already used. Never decreases.
    pub last_tournament_day_num: u32,
    pub leaders_per_team: u32,
    /// UTC hour (0-23) the Day event starts.
    pub day_start_hour: u32,
    /// UTC hour (0-23) the Night event starts.
    pub night_start_hour: u32,
    pub tournament_duration_minutes: u32,
    /// Initial clock in minutes; fractions such as 0.5 are allowed.
    pub clock_time_minutes: f64,
    pub clock_increment_seconds: u32,
    pub rated: bool,
    pub variant: String,
}

impl TournamentSettings {
    /// Checks value ranges that the JSON schema alone cannot express.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.host_team_id.trim().is_empty() {
            return Err(AppError::invalid_settings("hostTeamId cannot be empty"));
        }
        if self.variant.trim().is_empty() {
            return Err(AppError::invalid_settings("variant cannot be empty"));
        }
        for (field, hour) in [
            ("dayStartHour", self.day_start_hour),
            ("nightStartHour", self.night_start_hour),
        ] {
            if hour > 23 {
                return Err(AppError::invalid_settings(format!(
                    "{field} must be between 0 and 23, got {hour}"
                )));
            }
        }
        if self.tournament_duration_minutes == 0 {
            return Err(AppError::invalid_settings(
                "tournamentDurationMinutes must be positive",
            ));
        }
        if !self.clock_time_minutes.is_finite() || self.clock_time_minutes < 0.0 {
            return Err(AppError::invalid_settings(
                "clockTimeMinutes must be a non-negative number",
            ));
        }
        if self.last_tournament_day_num > u32::MAX - HORIZON_DAYS {
            return Err(AppError::invalid_settings(format!(
                "lastTournamentDayNum must be at most {}, got {}",
                u32::MAX - HORIZON_DAYS,
                self.last_tournament_day_num
            )));
        }
        Ok(())
    }
}

/// Loads and validates the settings record. Any failure here aborts the run.
pub async fn load_settings(path: &Path) -> Result<TournamentSettings, AppError> {
    let path_str = path.display().to_string();
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::settings_load(&path_str, e.to_string()))?;
    let settings: TournamentSettings = serde_json::from_str(&content)
        .map_err(|e| AppError::settings_load(&path_str, e.to_string()))?;
    settings.validate()?;

    debug!("Loaded settings from {path_str}: {settings:?}");
    Ok(settings)
}

/// Overwrites the settings record.
pub async fn save_settings(path: &Path, settings: &TournamentSettings) -> Result<(), AppError> {
    super::write_json(path, settings).await?;
    info!(
        "Saved settings to {} (lastTournamentDayNum = {})",
        path.display(),
        settings.last_tournament_day_num
    );
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use tempfile::tempdir;

    pub(crate) fn sample_settings() -> TournamentSettings {
        TournamentSettings {
            host_team_id: "rust-club".to_string(),
            description: "Weekly {TYPE} battle number {DAY_NUM}".to_string(),
            last_tournament_day_num: 41,
            leaders_per_team: 5,
            day_start_hour: 14,
            night_start_hour: 20,
            tournament_duration_minutes: 90,
            clock_time_minutes: 3.0,
            clock_increment_seconds: 2,
            rated: true,
            variant: "standard".to_string(),
        }
    }

    const SAMPLE_JSON: &str = r#"{
  "hostTeamId": "rust-club",
  "description": "Weekly {TYPE} battle number {DAY_NUM}",
  "lastTournamentDayNum": 41,
  "leadersPerTeam": 5,
  "dayStartHour": 14,
  "nightStartHour": 20,
  "tournamentDurationMinutes": 90,
  "clockTimeMinutes": 3,
  "clockIncrementSeconds": 2,
  "rated": true,
  "variant": "standard"
}"#;

    #[tokio::test]
    async fn test_load_settings_with_camel_case_fields() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("settings.json");
        tokio::fs::write(&path, SAMPLE_JSON).await.unwrap();

        let settings = load_settings(&path).await.unwrap();

        assert_eq!(settings, sample_settings());
    }

    #[tokio::test]
    async fn test_load_settings_ignores_unknown_fields() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("settings.json");
        let content = SAMPLE_JSON.replacen('{', r#"{ "comment": "kept by hand", "#, 1);
        tokio::fs::write(&path, content).await.unwrap();

        let settings = load_settings(&path).await.unwrap();

        assert_eq!(settings.host_team_id, "rust-club");
    }

    #[tokio::test]
    async fn test_load_settings_missing_field_is_fatal() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("settings.json");
        let content = SAMPLE_JSON.replace("\"variant\": \"standard\"", "\"unused\": 1");
        tokio::fs::write(&path, content).await.unwrap();

        let result = load_settings(&path).await;

        match result {
            Err(AppError::SettingsLoad { message, .. }) => assert!(message.contains("variant")),
            other => panic!("expected SettingsLoad error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_load_settings_missing_file_is_fatal() {
        let temp_dir = tempdir().unwrap();
        let result = load_settings(&temp_dir.path().join("absent.json")).await;
        assert!(matches!(result, Err(AppError::SettingsLoad { .. })));
    }

    #[tokio::test]
    async fn test_load_settings_rejects_out_of_range_hour() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("settings.json");
        let content = SAMPLE_JSON.replace("\"dayStartHour\": 14", "\"dayStartHour\": 25");
        tokio::fs::write(&path, content).await.unwrap();

        let result = load_settings(&path).await;

        assert!(matches!(result, Err(AppError::InvalidSettings(_))));
    }

    #[test]
    fn test_validate_rejects_empty_host_team() {
        let mut settings = sample_settings();
        settings.host_team_id = "  ".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_duration() {
        let mut settings = sample_settings();
        settings.tournament_duration_minutes = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_day_num_without_room_for_a_week() {
        let mut settings = sample_settings();
        settings.last_tournament_day_num = u32::MAX;
        assert!(matches!(
            settings.validate(),
            Err(AppError::InvalidSettings(_))
        ));

        settings.last_tournament_day_num = u32::MAX - HORIZON_DAYS;
        assert!(settings.validate().is_ok());
    }

    #[tokio::test]
    async fn test_load_settings_rejects_day_num_near_u32_max() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("settings.json");
        let content = SAMPLE_JSON.replace(
            "\"lastTournamentDayNum\": 41",
            "\"lastTournamentDayNum\": 4294967295",
        );
        tokio::fs::write(&path, content).await.unwrap();

        let result = load_settings(&path).await;

        assert!(matches!(result, Err(AppError::InvalidSettings(_))));
    }

    #[tokio::test]
    async fn test_save_settings_overwrites_whole_record() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("settings.json");
        let mut settings = sample_settings();
        save_settings(&path, &settings).await.unwrap();

        settings.last_tournament_day_num = 48;
        save_settings(&path, &settings).await.unwrap();

        let content = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(content.contains("\"lastTournamentDayNum\": 48"));
        assert_eq!(load_settings(&path).await.unwrap(), settings);
    }
}
