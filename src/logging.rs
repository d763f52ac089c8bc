//! Diagnostic logging setup.
//!
//! Progress meant for the user goes through the message sink on stdout.
//! `tracing` carries diagnostics only and writes to stderr, so hook output
//! captured by Composer stays clean.

use std::env;
use std::sync::Once;

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable selecting the diagnostic level.
pub const ENV_LOG_LEVEL: &str = "PGMOD_LOG";

static INIT: Once = Once::new();

/// Parses a log level, case-insensitively. Unknown values fall back to `WARN`.
#[must_use]
pub fn parse_level(level_str: &str) -> Level {
    match level_str.trim().to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    }
}

/// Installs the stderr subscriber at `level`. Later calls are ignored.
///
/// `RUST_LOG` directives, when set, are layered on top.
pub fn init_logging(level: Level) {
    INIT.call_once(|| {
        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = format!("pgmod={level}").parse() {
            filter = filter.add_directive(directive);
        }
        // A subscriber installed by an embedding host takes precedence.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .try_init();
    });
}

/// Installs the subscriber at the level named by `PGMOD_LOG` (default `warn`).
pub fn init_from_env() {
    let level = env::var(ENV_LOG_LEVEL).map_or(Level::WARN, |v| parse_level(&v));
    init_logging(level);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_levels() {
        assert_eq!(parse_level("trace"), Level::TRACE);
        assert_eq!(parse_level("debug"), Level::DEBUG);
        assert_eq!(parse_level("info"), Level::INFO);
        assert_eq!(parse_level("warn"), Level::WARN);
        assert_eq!(parse_level("error"), Level::ERROR);
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!(parse_level("DEBUG"), Level::DEBUG);
        assert_eq!(parse_level(" Info "), Level::INFO);
    }

    #[test]
    fn unknown_level_falls_back_to_warn() {
        assert_eq!(parse_level("verbose"), Level::WARN);
        assert_eq!(parse_level(""), Level::WARN);
    }

    #[test]
    fn repeated_init_does_not_panic() {
        init_logging(Level::WARN);
        init_logging(Level::DEBUG);
    }
}
