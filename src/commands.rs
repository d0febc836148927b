use crate::cli::Args;
use chrono::Utc;
use crossterm::style::Stylize;
use std::path::PathBuf;
use std::process::ExitCode;
use team_battle_scheduler::config::Config;
use team_battle_scheduler::error::AppError;
use team_battle_scheduler::orchestrator::{
    RunOptions, RunOutcome, RunSummary, dry_run_from_env, read_token, run,
};
use tracing::info;

/// Path of the config file in use: `--config` or the platform default.
pub fn config_path(args: &Args) -> String {
    args.config.clone().unwrap_or_else(Config::get_config_path)
}

/// Handles the --list-config command.
pub fn handle_list_config_command(args: &Args, config: &Config) {
    config.display(&config_path(args));
}

/// Handles the --set-server command.
///
/// Loads the config file without environment overrides so they are not
/// written back, replaces the server URL and saves it.
pub async fn handle_set_server_command(args: &Args, server_url: &str) -> Result<(), AppError> {
    let path = config_path(args);
    let mut config = Config::load_from_path(&path).await.unwrap_or_default();
    config.server_url = server_url.to_string();
    config.validate()?;
    config.save_to_path(&path).await?;
    println!("Config updated successfully! Server URL is now {server_url}");
    Ok(())
}

/// Handles a scheduling run, the default command.
///
/// Returns the exit code for the process: failure when any tournament could
/// not be created.
pub async fn handle_run_command(args: &Args, config: &Config) -> Result<ExitCode, AppError> {
    let token = read_token()?;
    let dry_run = args.dry_run || dry_run_from_env();

    let mut options = RunOptions::from_config(config, dry_run);
    if let Some(settings) = &args.settings {
        options.settings_path = PathBuf::from(settings);
    }
    if let Some(state) = &args.state {
        options.state_path = PathBuf::from(state);
    }
    if dry_run {
        info!("Dry run: no tournaments will be created on {}", options.server_url);
    }

    let outcome = run(&options, token, Utc::now()).await?;
    match &outcome {
        RunOutcome::AlreadyCreated { date } => {
            println!("Tournaments were already created today ({date}). Nothing to do.");
        }
        RunOutcome::Completed(summary) => print_summary(summary, dry_run),
    }

    Ok(ExitCode::from(outcome.exit_status()))
}

fn print_summary(summary: &RunSummary, dry_run: bool) {
    println!();
    println!("{}", "Team battle summary".bold());
    println!("────────────────────────────────────");
    for record in &summary.records {
        match &record.result {
            Ok(url) => println!("{} {}  {url}", "✓".green(), record.definition.name),
            Err(e) => println!("{} {}  {e}", "✗".red(), record.definition.name),
        }
    }
    println!("────────────────────────────────────");
    println!(
        "Created: {}{}",
        summary.success_count.to_string().green(),
        if dry_run { " (dry run)" } else { "" }
    );
    if summary.failure_count > 0 {
        println!("Failed:  {}", summary.failure_count.to_string().red());
    } else {
        println!("Failed:  0");
    }
    if !summary.persisted {
        println!("{}", "Nothing was created; settings and state were not updated.".yellow());
    }
    println!("Next sequence number: {}", summary.next_day_num);
}
