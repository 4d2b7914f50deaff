use std::path::Path;

use tracing_appender::rolling::{Builder, RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{Result, SocialError};

const DEFAULT_LOG_FILE: &str = "social-graph.log";

/// Install the global subscriber.
///
/// Stderr gets compact lines filtered by `RUST_LOG` (or `info`, `debug` when
/// `verbose`). With `log_file`, JSON lines also go to a daily-rotated file
/// next to it; its directory is created if missing.
pub fn init(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("social_graph={}", default_level)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let file_layer = log_file
        .map(file_appender)
        .transpose()?
        .map(|appender| {
            fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .json()
        });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| SocialError::Logging(e.to_string()))
}

/// Daily appender writing `<stem>.<date>` files beside `log_path`.
pub fn file_appender(log_path: &Path) -> Result<RollingFileAppender> {
    let dir = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(|e| {
        SocialError::Logging(format!("cannot create log directory {}: {}", dir.display(), e))
    })?;

    let prefix = log_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    Builder::new()
        .rotation(Rotation::DAILY)
        .filename_prefix(prefix)
        .build(dir)
        .map_err(|e| SocialError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_file_appender_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("logs/nested/app.log");

        let mut appender = file_appender(&log_path).unwrap();
        appender.write_all(b"{\"msg\":\"hi\"}\n").unwrap();
        appender.flush().unwrap();

        let dir = temp_dir.path().join("logs/nested");
        assert!(dir.is_dir());
        let written: Vec<_> = std::fs::read_dir(&dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert!(written.iter().any(|name| name.starts_with("app.log")));
    }

    #[test]
    fn test_file_appender_reports_unusable_directory() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not-a-dir");
        std::fs::write(&blocker, "plain file").unwrap();

        let err = file_appender(&blocker.join("app.log")).unwrap_err();
        assert!(matches!(err, SocialError::Logging(_)));
        assert!(err.to_string().contains("not-a-dir"));
    }
}
