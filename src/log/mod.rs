use std::str::FromStr;

pub use log::{max_level as get_max_level, set_max_level, Level, LevelFilter};

pub mod internal;
#[cfg(feature = "logger")]
mod logger;
mod macros;

/// Environment variable holding the level filter of the installed logger.
pub const LOG_VAR: &str = "BRANCH_HINT_LOG";

/// Level used when [`LOG_VAR`] is unset or invalid.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

/// Parses the value of [`LOG_VAR`].
///
/// `Ok(None)` if the variable is unset, `Err` with the rejected input if it
/// names no level.
pub fn parse_level(value: Option<&str>) -> Result<Option<LevelFilter>, &str> {
	match value {
		Some(value) => LevelFilter::from_str(value.trim())
			.map(Some)
			.map_err(|_| value),
		None => Ok(None)
	}
}
