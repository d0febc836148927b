//! One scheduling pass.
//!
//! A run moves through `Init -> GuardCheck -> Scheduling -> Submitting ->
//! Finalizing -> Done`. [`run`] covers the whole pass including file I/O;
//! [`run_batch`] is the part between loading and persisting and works purely
//! on the values it is given. Fatal problems (missing credential, unreadable
//! settings) surface as `Err(AppError)`; individual submission failures never
//! do.

use chrono::{DateTime, Utc};
use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::constants::env_vars;
use crate::constants::schedule::{DATE_FORMAT, HORIZON_DAYS, SUBMISSION_DELAY_SECONDS};
use crate::error::{AppError, SubmissionResult};
use crate::schedule::{TournamentDefinition, build_schedule};
use crate::store::{
    TournamentSettings, TournamentState, load_settings, load_state, save_settings, save_state,
};
use crate::submission::{RuntimeParams, create_http_client_with_timeout, submit_tournament};

/// Inputs of a run that do not come from the persisted records.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub settings_path: PathBuf,
    pub state_path: PathBuf,
    pub server_url: String,
    pub invited_teams: Vec<String>,
    pub dry_run: bool,
    pub http_timeout_seconds: u64,
    /// Pause before every submission but the first.
    pub submission_delay: Duration,
}

impl RunOptions {
    pub fn from_config(config: &Config, dry_run: bool) -> Self {
        Self {
            settings_path: PathBuf::from(&config.settings_path),
            state_path: PathBuf::from(&config.state_path),
            server_url: config.server_url.clone(),
            invited_teams: config.invited_teams.clone(),
            dry_run,
            http_timeout_seconds: config.http_timeout_seconds,
            submission_delay: Duration::from_secs(SUBMISSION_DELAY_SECONDS),
        }
    }
}

/// One attempted tournament and how it went.
#[derive(Debug)]
pub struct SubmissionRecord {
    pub definition: TournamentDefinition,
    pub result: SubmissionResult,
}

/// Totals of a run that reached the submission phase.
#[derive(Debug)]
pub struct RunSummary {
    pub success_count: usize,
    pub failure_count: usize,
    /// First unused sequence number after this run.
    pub next_day_num: u32,
    /// Whether settings and state changed and must be written back.
    pub persisted: bool,
    pub settings: TournamentSettings,
    pub state: TournamentState,
    pub records: Vec<SubmissionRecord>,
}

#[derive(Debug)]
pub enum RunOutcome {
    /// Tournaments were already created on this UTC date; nothing was done.
    AlreadyCreated { date: String },
    Completed(RunSummary),
}

impl RunOutcome {
    /// Process exit status: 1 when any submission failed, otherwise 0.
    pub fn exit_status(&self) -> u8 {
        match self {
            RunOutcome::Completed(summary) if summary.failure_count > 0 => 1,
            _ => 0,
        }
    }
}

/// Reads the bearer credential. An absent or blank variable is fatal.
pub fn read_token() -> Result<String, AppError> {
    match std::env::var(env_vars::API_TOKEN) {
        Ok(token) if !token.trim().is_empty() => Ok(token),
        _ => Err(AppError::missing_token(env_vars::API_TOKEN)),
    }
}

/// True when the dry-run variable is `1` or `true`.
pub fn dry_run_from_env() -> bool {
    std::env::var(env_vars::DRY_RUN)
        .map(|value| is_truthy(&value))
        .unwrap_or(false)
}

fn is_truthy(value: &str) -> bool {
    matches!(value, "1" | "true")
}

/// The idempotence key: the UTC calendar date of `now`.
pub fn today_utc(now: DateTime<Utc>) -> String {
    now.format(DATE_FORMAT).to_string()
}

pub fn already_created_today(state: &TournamentState, today: &str) -> bool {
    state.last_creation_date == today
}

/// Submits every definition in order, waiting `delay` between requests.
/// Failures are recorded and the loop carries on.
pub async fn submit_all(
    client: &Client,
    params: &RuntimeParams,
    definitions: Vec<TournamentDefinition>,
    delay: Duration,
) -> Vec<SubmissionRecord> {
    let total = definitions.len();
    let mut records = Vec::with_capacity(total);

    for (index, definition) in definitions.into_iter().enumerate() {
        if index > 0 && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let result = submit_tournament(client, &definition, params).await;
        match &result {
            Ok(url) => info!(
                "[{}/{total}] Created {} ({}): {url}",
                index + 1,
                definition.name,
                definition.start_date_iso()
            ),
            Err(e) => error!(
                "[{}/{total}] Failed to create {}: {e}",
                index + 1,
                definition.name
            ),
        }
        records.push(SubmissionRecord { definition, result });
    }

    records
}

/// Computes the records to persist after the submissions.
///
/// Returns `None` when nothing succeeded, so the whole batch is retried on the
/// next invocation. Otherwise the sequence counter moves to the highest day
/// number attempted, failed ones included, and today becomes the last
/// creation date.
pub fn finalize(
    settings: &TournamentSettings,
    records: &[SubmissionRecord],
    success_count: usize,
    today: &str,
) -> Option<(TournamentSettings, TournamentState)> {
    if success_count == 0 {
        return None;
    }

    let highest_attempted = records
        .iter()
        .map(|record| record.definition.day_num)
        .max()
        .unwrap_or(settings.last_tournament_day_num);

    let settings = TournamentSettings {
        last_tournament_day_num: settings.last_tournament_day_num.max(highest_attempted),
        ..settings.clone()
    };
    let state = TournamentState {
        last_creation_date: today.to_string(),
    };
    Some((settings, state))
}

fn next_day_num(settings: &TournamentSettings) -> Result<u32, AppError> {
    settings
        .last_tournament_day_num
        .checked_add(1)
        .ok_or_else(|| AppError::invalid_settings("lastTournamentDayNum is already at its maximum"))
}

/// Guard check, scheduling, submission and finalization on in-memory records.
pub async fn run_batch(
    client: &Client,
    params: &RuntimeParams,
    settings: TournamentSettings,
    state: TournamentState,
    now: DateTime<Utc>,
    delay: Duration,
) -> Result<RunOutcome, AppError> {
    let today = today_utc(now);
    if already_created_today(&state, &today) {
        info!("Tournaments were already created on {today}, nothing to do");
        return Ok(RunOutcome::AlreadyCreated { date: today });
    }

    let start_day_num = next_day_num(&settings)?;
    let definitions = build_schedule(now, start_day_num, HORIZON_DAYS, &settings)?;
    info!(
        "Scheduling {} tournaments starting at day {start_day_num}{}",
        definitions.len(),
        if params.dry_run { " (dry run)" } else { "" }
    );

    let records = submit_all(client, params, definitions, delay).await;
    let success_count = records.iter().filter(|r| r.result.is_ok()).count();
    let failure_count = records.len() - success_count;

    let (settings, state, persisted) = match finalize(&settings, &records, success_count, &today) {
        Some((settings, state)) => (settings, state, true),
        None => {
            warn!("No tournament was created; settings and state are left untouched");
            (settings, state, false)
        }
    };

    Ok(RunOutcome::Completed(RunSummary {
        success_count,
        failure_count,
        next_day_num: next_day_num(&settings)?,
        persisted,
        settings,
        state,
        records,
    }))
}

/// Full run: load settings and state, run the batch, persist on success.
pub async fn run(
    options: &RunOptions,
    token: String,
    now: DateTime<Utc>,
) -> Result<RunOutcome, AppError> {
    let settings = load_settings(&options.settings_path).await?;
    let state = load_state(&options.state_path).await;

    let params = RuntimeParams::from_settings(
        &settings,
        options.server_url.clone(),
        token,
        options.invited_teams.clone(),
        options.dry_run,
    );
    let client = create_http_client_with_timeout(options.http_timeout_seconds)?;

    let outcome = run_batch(
        &client,
        &params,
        settings,
        state,
        now,
        options.submission_delay,
    )
    .await?;

    if let RunOutcome::Completed(summary) = &outcome
        && summary.persisted
    {
        save_settings(&options.settings_path, &summary.settings).await?;
        save_state(&options.state_path, &summary.state).await?;
    }

    Ok(outcome)
}
