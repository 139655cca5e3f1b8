//! Tracing setup.
//!
//! The subscriber is installed before settings are loaded so load errors
//! are logged. Once settings exist, the filter is swapped for the one
//! they ask for. Logs go to stderr; stdout carries command output.

use std::path::Path;

use settings::Settings;
use tracing_subscriber::{
    layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter, Registry,
};

pub type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Install the global subscriber and return a handle to its filter.
pub fn init(verbose: bool) -> FilterHandle {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }));
    let (filter, handle) = reload::Layer::new(filter);

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    handle
}

/// Swap in the filter requested by `settings`.
///
/// `RUST_LOG` and `--verbose` take precedence and leave the filter alone.
pub fn apply_settings(handle: &FilterHandle, settings: &Settings, verbose: bool) {
    if verbose || std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        return;
    }

    let directives = if settings.server.debug {
        Some("debug".to_string())
    } else {
        read_directives(&settings.app.logging_config_file)
    };
    let Some(directives) = directives else {
        return;
    };

    match EnvFilter::try_new(&directives) {
        Ok(filter) => match handle.reload(filter) {
            Ok(()) => tracing::debug!(%directives, "Log filter updated"),
            Err(e) => tracing::warn!("Failed to update log filter: {}", e),
        },
        Err(e) => tracing::warn!(
            path = %settings.app.logging_config_file.display(),
            "Ignoring invalid log directives: {}",
            e
        ),
    }
}

/// Read filter directives from `path`, one per line. Blank lines and `#`
/// comments are skipped. Returns `None` if the file is unreadable or has
/// no directives.
fn read_directives(path: &Path) -> Option<String> {
    let contents = std::fs::read_to_string(path).ok()?;
    let directives: Vec<&str> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();

    if directives.is_empty() {
        None
    } else {
        Some(directives.join(","))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_read_directives_skips_comments() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# log levels").unwrap();
        writeln!(file, "info").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  tower_http=debug  ").unwrap();

        let directives = read_directives(file.path()).unwrap();

        assert_eq!(directives, "info,tower_http=debug");
        assert!(EnvFilter::try_new(&directives).is_ok());
    }

    #[test]
    fn test_read_directives_empty_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# nothing here").unwrap();

        assert!(read_directives(file.path()).is_none());
    }

    #[test]
    fn test_read_directives_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        assert!(read_directives(&dir.path().join("logging.conf")).is_none());
    }
}
