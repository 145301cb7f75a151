use std::env::var;

use branch_hint::log::{get_max_level, parse_level, LevelFilter, DEFAULT_LEVEL, LOG_VAR};

#[test]
fn test_level_from_environment() {
	let expected = match parse_level(var(LOG_VAR).ok().as_deref()) {
		Ok(level) => level.unwrap_or(DEFAULT_LEVEL),
		Err(_) => DEFAULT_LEVEL
	};

	assert_eq!(get_max_level(), expected);
}

#[test]
fn test_invalid_level_falls_back() {
	assert_eq!(parse_level(Some("chatty")), Err("chatty"));
	assert_eq!(DEFAULT_LEVEL, LevelFilter::Info);
	assert_eq!(parse_level(Some("debug")), Ok(Some(LevelFilter::Debug)));
}

#[test]
fn test_logging_through_installed_logger() {
	branch_hint::info!("logger reached from {}", "tests");
	branch_hint::mode::report();
}
