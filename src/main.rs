// src/main.rs
mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::Args;
use std::process::ExitCode;
use team_battle_scheduler::config::Config;
use team_battle_scheduler::error::AppError;

#[tokio::main]
async fn main() -> Result<ExitCode, AppError> {
    let args = Args::parse();

    // Config updates must not go through validation of the current file
    if let Some(server_url) = &args.set_server {
        commands::handle_set_server_command(&args, server_url).await?;
        return Ok(ExitCode::SUCCESS);
    }

    let config = Config::load(args.config.as_deref()).await?;

    if args.list_config {
        commands::handle_list_config_command(&args, &config);
        return Ok(ExitCode::SUCCESS);
    }

    let (log_file_path, _guard) = logging::setup_logging(&args, &config).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    let result = commands::handle_run_command(&args, &config).await;
    if let Err(e) = &result {
        tracing::error!("Run aborted: {e}");
    }
    result
}
