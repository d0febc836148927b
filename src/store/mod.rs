//! Persisted records: the tournament settings and the per-day run state.
//!
//! Both are small JSON documents that are read once when a run starts and
//! overwritten as a whole, at most once, when it ends.

use crate::error::AppError;
use serde::Serialize;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod settings;
pub mod state;

pub use settings::{TournamentSettings, load_settings, save_settings};
pub use state::{TournamentState, load_state, save_state};

/// Serializes `value` as pretty JSON and replaces the file at `path`,
/// creating the parent directory when needed.
async fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), AppError> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
        && !dir.exists()
    {
        fs::create_dir_all(dir).await?;
    }

    let mut content = serde_json::to_string_pretty(value)?;
    content.push('\n');

    let mut file = fs::File::create(path).await?;
    file.write_all(content.as_bytes()).await?;
    file.flush().await?;
    Ok(())
}
