//! Tracing set-up for the demo binaries.
//!
//! Diagnostics go to stderr so that the demo scripts own stdout.  The
//! verbosity comes from the `SINGLETON_LOG` environment variable.

use sg_core::{ensure, Error, Result};
use tracing::Level;

/// Environment variable holding the maximum log level.
pub const LOG_ENV_VAR: &str = "SINGLETON_LOG";

/// Level used when [`LOG_ENV_VAR`] is unset.
pub const DEFAULT_LEVEL: Level = Level::WARN;

/// Parse a level name (`error`, `warn`, `info`, `debug`, `trace`).
pub fn parse_level(raw: &str) -> Result<Level> {
    let raw = raw.trim();
    ensure!(!raw.is_empty(), "{LOG_ENV_VAR} is set but empty");
    raw.parse::<Level>()
        .map_err(|_| Error::InvalidArgument(format!("unknown log level `{raw}`")))
}

/// Read the configured level from the environment.
pub fn level_from_env() -> Result<Level> {
    match std::env::var(LOG_ENV_VAR) {
        Ok(raw) => parse_level(&raw),
        Err(_) => Ok(DEFAULT_LEVEL),
    }
}

/// Install a `fmt` subscriber writing to stderr.
///
/// If a global subscriber is already installed it is left in place.
pub fn init_tracing() -> Result<()> {
    let level = level_from_env()?;
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_levels() {
        assert_eq!(parse_level("debug").unwrap(), Level::DEBUG);
        assert_eq!(parse_level(" WARN ").unwrap(), Level::WARN);
        assert_eq!(parse_level("trace").unwrap(), Level::TRACE);
    }

    #[test]
    fn rejects_unknown_and_empty() {
        assert_eq!(
            parse_level("loud"),
            Err(Error::InvalidArgument("unknown log level `loud`".into()))
        );
        assert!(matches!(parse_level("   "), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn init_twice_is_harmless() {
        assert!(init_tracing().is_ok() || level_from_env().is_err());
        assert!(init_tracing().is_ok() || level_from_env().is_err());
    }
}
