//! Builds the ordered list of tournaments for the upcoming days

use chrono::{DateTime, Days, NaiveDate, Utc};
use std::fmt;

use crate::constants::schedule::{DAY_NUM_PLACEHOLDER, NAME_PREFIX, TYPE_PLACEHOLDER};
use crate::error::AppError;
use crate::store::TournamentSettings;

/// The two events held on every scheduled day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TournamentType {
    Day,
    Night,
}

impl TournamentType {
    pub fn label(self) -> &'static str {
        match self {
            TournamentType::Day => "Day",
            TournamentType::Night => "Night",
        }
    }
}

impl fmt::Display for TournamentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One tournament to create. Built per run and consumed by a single submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TournamentDefinition {
    pub day_num: u32,
    pub kind: TournamentType,
    pub name: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
}

impl TournamentDefinition {
    /// Start time in the `2024-01-15T18:00:00.000Z` form the server expects.
    pub fn start_date_iso(&self) -> String {
        self.start_date.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
    }
}

/// Formats a tournament name, e.g. `Team Battle Night '7'`.
pub fn build_tournament_name(day_num: u32, kind: TournamentType) -> String {
    format!("{NAME_PREFIX} {kind} '{day_num}'")
}

/// Fills the description template.
///
/// Only the first occurrence of `{TYPE}` and of `{DAY_NUM}` is replaced;
/// further occurrences are left in the text as written.
pub fn build_tournament_description(template: &str, day_num: u32, kind: TournamentType) -> String {
    template
        .replacen(TYPE_PLACEHOLDER, kind.label(), 1)
        .replacen(DAY_NUM_PLACEHOLDER, &day_num.to_string(), 1)
}

/// Produces `2 * horizon_days` definitions: for each day starting at the
/// calendar date of `base`, a Day event then a Night event sharing the same
/// sequence number. Days are in ascending order; that order is the
/// submission order.
pub fn build_schedule(
    base: DateTime<Utc>,
    start_day_num: u32,
    horizon_days: u32,
    settings: &TournamentSettings,
) -> Result<Vec<TournamentDefinition>, AppError> {
    let base_date = base.date_naive();
    let mut definitions = Vec::with_capacity(horizon_days as usize * 2);

    for offset in 0..horizon_days {
        let target_date = base_date
            .checked_add_days(Days::new(u64::from(offset)))
            .ok_or_else(|| {
                AppError::invalid_settings(format!("date overflow {offset} days after {base_date}"))
            })?;
        let day_num = start_day_num.checked_add(offset).ok_or_else(|| {
            AppError::invalid_settings(format!("day number overflow after {start_day_num}"))
        })?;

        for (kind, hour) in [
            (TournamentType::Day, settings.day_start_hour),
            (TournamentType::Night, settings.night_start_hour),
        ] {
            definitions.push(TournamentDefinition {
                day_num,
                kind,
                name: build_tournament_name(day_num, kind),
                description: build_tournament_description(&settings.description, day_num, kind),
                start_date: start_at(target_date, hour)?,
            });
        }
    }

    Ok(definitions)
}

fn start_at(date: NaiveDate, hour: u32) -> Result<DateTime<Utc>, AppError> {
    date.and_hms_opt(hour, 0, 0)
        .map(|naive| naive.and_utc())
        .ok_or_else(|| AppError::invalid_settings(format!("start hour {hour} is not in 0..=23")))
}
