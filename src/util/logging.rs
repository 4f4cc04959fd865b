// AgentDeck - util/logging.rs
//
// Structured logging with runtime-selectable debug mode.
//
// Activation:
//   - Environment variable: RUST_LOG=debug (or trace)
//   - CLI flag: --debug (sets level to debug)
//   - Config file: [logging] level = "debug"
//
// Output: stderr, and optionally a log file from [logging] file.
// Form contents are never logged above debug level.

use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Resolve the filter directive following the documented priority.
///
/// Priority: RUST_LOG env var > CLI --debug flag > config level > default "info".
pub fn resolve_filter(
    env_value: Option<&str>,
    debug_flag: bool,
    config_level: Option<&str>,
) -> String {
    if let Some(env) = env_value.filter(|v| !v.trim().is_empty()) {
        env.to_string()
    } else if debug_flag {
        "debug".to_string()
    } else if let Some(level) = config_level {
        level.to_lowercase()
    } else {
        super::constants::DEFAULT_LOG_LEVEL.to_string()
    }
}

/// Initialise the logging subsystem.
///
/// `debug_flag` is true when the user passed --debug on the CLI.
/// `config_level` is the level from config.toml (if present).
/// `log_file` is the optional log file path from config.toml; when it cannot
/// be opened logging falls back to stderr with a warning.
pub fn init(debug_flag: bool, config_level: Option<&str>, log_file: Option<&str>) {
    let env_value = std::env::var("RUST_LOG").ok();
    let directive = resolve_filter(env_value.as_deref(), debug_flag, config_level);
    let filter = EnvFilter::try_new(&directive)
        .unwrap_or_else(|_| EnvFilter::new(super::constants::DEFAULT_LOG_LEVEL));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .compact();

    let mut file_error = None;
    let file = log_file.and_then(|path| {
        match std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
        {
            Ok(f) => Some(f),
            Err(e) => {
                file_error = Some(format!("{path}: {e}"));
                None
            }
        }
    });

    // try_init: a second init (e.g. from tests) is a no-op rather than a panic.
    let installed = match file {
        Some(f) => builder
            .with_ansi(false)
            .with_writer(Mutex::new(f))
            .try_init()
            .is_ok(),
        None => builder.try_init().is_ok(),
    };

    if let Some(err) = file_error {
        tracing::warn!(error = %err, "Could not open log file; logging to stderr only");
    }

    if installed {
        tracing::debug!(
            app = super::constants::APP_NAME,
            version = super::constants::APP_VERSION,
            filter = %directive,
            "Logging initialised"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_var_wins() {
        assert_eq!(resolve_filter(Some("trace"), true, Some("warn")), "trace");
    }

    #[test]
    fn test_debug_flag_beats_config() {
        assert_eq!(resolve_filter(None, true, Some("warn")), "debug");
    }

    #[test]
    fn test_config_level_used_when_no_flag() {
        assert_eq!(resolve_filter(None, false, Some("WARN")), "warn");
    }

    #[test]
    fn test_blank_env_var_ignored() {
        assert_eq!(resolve_filter(Some("  "), false, None), "info");
    }
}
