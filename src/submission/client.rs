//! Turns one tournament definition into a create request

use reqwest::Client;
use reqwest::header::LOCATION;
use serde::Deserialize;
use std::fmt;
use tracing::{debug, error, info, instrument};

use super::urls::{
    build_create_tournament_url, build_team_tournaments_url, build_tournament_page_url,
};
use crate::error::{SubmissionError, SubmissionResult};
use crate::schedule::TournamentDefinition;
use crate::store::TournamentSettings;
use crate::token::check_token;

/// Everything a create request needs besides the tournament itself.
#[derive(Clone)]
pub struct RuntimeParams {
    pub server_url: String,
    pub token: String,
    pub clock_time_minutes: f64,
    pub clock_increment_seconds: u32,
    pub duration_minutes: u32,
    pub rated: bool,
    pub variant: String,
    pub host_team_id: String,
    pub leaders_per_team: u32,
    pub invited_teams: Vec<String>,
    pub dry_run: bool,
}

impl RuntimeParams {
    pub fn from_settings(
        settings: &TournamentSettings,
        server_url: impl Into<String>,
        token: impl Into<String>,
        invited_teams: Vec<String>,
        dry_run: bool,
    ) -> Self {
        Self {
            server_url: server_url.into(),
            token: token.into(),
            clock_time_minutes: settings.clock_time_minutes,
            clock_increment_seconds: settings.clock_increment_seconds,
            duration_minutes: settings.tournament_duration_minutes,
            rated: settings.rated,
            variant: settings.variant.clone(),
            host_team_id: settings.host_team_id.clone(),
            leaders_per_team: settings.leaders_per_team,
            invited_teams,
            dry_run,
        }
    }

    /// Invited teams without the host, which takes part implicitly.
    pub fn invited_teams(&self) -> impl Iterator<Item = &str> {
        self.invited_teams
            .iter()
            .map(String::as_str)
            .filter(move |team| *team != self.host_team_id)
    }
}

impl fmt::Debug for RuntimeParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuntimeParams")
            .field("server_url", &self.server_url)
            .field("token", &"<redacted>")
            .field("clock_time_minutes", &self.clock_time_minutes)
            .field("clock_increment_seconds", &self.clock_increment_seconds)
            .field("duration_minutes", &self.duration_minutes)
            .field("rated", &self.rated)
            .field("variant", &self.variant)
            .field("host_team_id", &self.host_team_id)
            .field("leaders_per_team", &self.leaders_per_team)
            .field("invited_teams", &self.invited_teams)
            .field("dry_run", &self.dry_run)
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct CreatedTournament {
    #[serde(default)]
    id: Option<String>,
}

/// Builds the form-encoded body of a create request. `teams[]` repeats once
/// per invited team.
pub fn build_form(
    definition: &TournamentDefinition,
    params: &RuntimeParams,
) -> Vec<(&'static str, String)> {
    let mut form = vec![
        ("name", definition.name.clone()),
        ("description", definition.description.clone()),
        ("clockTime", params.clock_time_minutes.to_string()),
        ("clockIncrement", params.clock_increment_seconds.to_string()),
        ("minutes", params.duration_minutes.to_string()),
        ("rated", params.rated.to_string()),
        ("variant", params.variant.clone()),
        ("startDate", definition.start_date_iso()),
        ("teamBattleByTeam", params.host_team_id.clone()),
        ("nbLeaders", params.leaders_per_team.to_string()),
    ];
    form.extend(
        params
            .invited_teams()
            .map(|team| ("teams[]", team.to_string())),
    );
    form
}

/// Creates one tournament on the server.
///
/// Never fails the run: a rejected credential, a transport error, a
/// non-success status or an unparsable body all come back as a
/// [`SubmissionError`]. In dry-run mode no request is made and the host
/// team's tournament page is returned.
///
/// # Returns
/// * `Ok(url)` - Page of the created tournament, the `Location` header when
///   the body carries no id, or `"unknown"` when neither is present
/// * `Err(SubmissionError)` - The tournament was not created
#[instrument(skip(client, definition, params), fields(name = %definition.name))]
pub async fn submit_tournament(
    client: &Client,
    definition: &TournamentDefinition,
    params: &RuntimeParams,
) -> SubmissionResult {
    check_token(&params.token).map_err(SubmissionError::InvalidToken)?;

    let form = build_form(definition, params);

    if params.dry_run {
        let teams: Vec<&str> = params.invited_teams().collect();
        info!(
            "[DRY RUN] Would create '{}' starting {} with teams {:?}",
            definition.name,
            definition.start_date_iso(),
            teams
        );
        return Ok(build_team_tournaments_url(
            &params.server_url,
            &params.host_team_id,
        ));
    }

    let url = build_create_tournament_url(&params.server_url);
    debug!("POST {url} with {} form fields", form.len());

    let response = client
        .post(&url)
        .bearer_auth(&params.token)
        .form(&form)
        .send()
        .await
        .map_err(|e| {
            error!("Request to {url} failed: {e}");
            SubmissionError::Network(e.to_string())
        })?;

    let status = response.status();
    let location = response
        .headers()
        .get(LOCATION)
        .and_then(|h| h.to_str().ok())
        .map(str::to_string);

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        error!("HTTP {} from {url}: {body}", status.as_u16());
        return Err(SubmissionError::rejected(status.as_u16(), body));
    }

    let body = response
        .text()
        .await
        .map_err(|e| SubmissionError::Network(e.to_string()))?;

    let created: CreatedTournament = serde_json::from_str(&body).map_err(|e| {
        error!("Failed to parse create response from {url}: {e}");
        SubmissionError::MalformedResponse(e.to_string())
    })?;

    Ok(match created.id {
        Some(id) => build_tournament_page_url(&params.server_url, &id),
        None => location.unwrap_or_else(|| "unknown".to_string()),
    })
}
