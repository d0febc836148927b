use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Team Battle Scheduler
///
/// Creates the Day and Night team battles for the next seven days, spacing
/// requests ten seconds apart. Safe to run repeatedly (e.g. from cron): once
/// tournaments have been created on a UTC date, later runs that day do nothing.
///
/// The API token is read from LICHESS_TOKEN. Set DRY_RUN=1 (or pass
/// --dry-run) to log what would be created without contacting the server.
#[derive(Parser, Debug)]
#[command(version)]
#[command(styles = get_styles())]
pub struct Args {
    /// Log the tournaments that would be created instead of creating them.
    /// Settings and state are still updated as after a successful run.
    #[arg(long = "dry-run", short = 'n')]
    pub dry_run: bool,

    /// Use a specific config file instead of the platform default.
    #[arg(long = "config", short = 'c', help_heading = "Configuration")]
    pub config: Option<String>,

    /// Path of the tournament settings JSON file (overrides config).
    #[arg(long = "settings", help_heading = "Configuration")]
    pub settings: Option<String>,

    /// Path of the run state JSON file (overrides config).
    #[arg(long = "state", help_heading = "Configuration")]
    pub state: Option<String>,

    /// Save a new server URL to the config file and exit.
    #[arg(long = "set-server", value_name = "URL", help_heading = "Configuration")]
    pub set_server: Option<String>,

    /// List current configuration settings and exit.
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Enable debug logging.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_run_flags() {
        let args = Args::parse_from([
            "team_battle_scheduler",
            "--dry-run",
            "--settings",
            "s.json",
            "--state",
            "t.json",
        ]);
        assert!(args.dry_run);
        assert_eq!(args.settings.as_deref(), Some("s.json"));
        assert_eq!(args.state.as_deref(), Some("t.json"));
        assert!(!args.list_config);
    }
}
