// Logging setup.
// Sends tracing output to a log file since the terminal belongs to the TUI.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::error::Result;
use crate::paths;

const FALLBACK_FILTER: &str = "roster=info";

/// Install the global subscriber writing to the platform log file.
///
/// Returns the log file path, or `None` when no cache directory exists.
pub fn init(filter: &str) -> Result<Option<PathBuf>> {
    let Some(path) = paths::log_path() else {
        return Ok(None);
    };
    init_at(&path, filter)?;
    Ok(Some(path))
}

fn init_at(path: &Path, filter: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let (directives, rejected) = env_filter(filter);

    tracing_subscriber::fmt()
        .with_env_filter(directives)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();

    if let Some(reason) = rejected {
        warn!(filter, %reason, "invalid log filter, using {}", FALLBACK_FILTER);
    }
    Ok(())
}

/// Parse `directive`, falling back to the default filter with the parse error.
fn env_filter(directive: &str) -> (EnvFilter, Option<String>) {
    match EnvFilter::try_new(directive) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(FALLBACK_FILTER), Some(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_filter_is_kept() {
        let (filter, rejected) = env_filter("roster=debug");
        assert!(rejected.is_none());
        assert_eq!(filter.to_string(), "roster=debug");
    }

    #[test]
    fn test_invalid_filter_falls_back() {
        let (filter, rejected) = env_filter("roster=loudest");
        assert!(rejected.is_some());
        assert_eq!(filter.to_string(), FALLBACK_FILTER);
    }
}
