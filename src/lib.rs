//! Team Battle Scheduler Library
//!
//! Creates a week of recurring Day/Night team battles on a lichess-compatible
//! server, at most once per UTC calendar day.
//!
//! # Examples
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use team_battle_scheduler::config::Config;
//! use team_battle_scheduler::error::AppError;
//! use team_battle_scheduler::orchestrator::{RunOptions, RunOutcome, read_token, run};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load(None).await?;
//!     let options = RunOptions::from_config(&config, true);
//!
//!     match run(&options, read_token()?, Utc::now()).await? {
//!         RunOutcome::AlreadyCreated { date } => println!("Already done for {date}"),
//!         RunOutcome::Completed(summary) => {
//!             println!("{} created, {} failed", summary.success_count, summary.failure_count)
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod orchestrator;
pub mod schedule;
pub mod store;
pub mod submission;
pub mod token;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::{AppError, SubmissionError, SubmissionResult};
pub use orchestrator::{RunOptions, RunOutcome, RunSummary, run, run_batch};
pub use schedule::{TournamentDefinition, TournamentType, build_schedule};
pub use store::{TournamentSettings, TournamentState};
pub use token::is_valid_token;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
