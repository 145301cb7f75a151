//! A stderr logger installed at load time.
//!
//! Each line of a record is prefixed with the level and target, so multi-line
//! messages stay attributable:
//!
//! ```text
//! | WARN  branch_hint::mode | == Branch hints unsupported by the toolchain, using passthrough
//! ```

use std::env::var;
use std::fmt::Arguments;
use std::io::{stderr, BufWriter, Result, Stderr, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

use ctor::ctor;
use lazy_static::lazy_static;
use log::{set_boxed_logger, Log, Metadata, Record};

use super::*;
use crate::mode::report;
use crate::{error, trace};

lazy_static! {
	static ref STDERR: Mutex<BufWriter<Stderr>> =
		Mutex::new(BufWriter::with_capacity(1024, stderr()));
}

fn get_stderr() -> MutexGuard<'static, BufWriter<Stderr>> {
	STDERR.lock().unwrap_or_else(PoisonError::into_inner)
}

const fn color(level: Level) -> &'static str {
	match level {
		Level::Error => "\x1b[1;48;5;1m",
		Level::Warn => "\x1b[1;48;5;11m",
		Level::Info => "\x1b[1;48;5;10m",
		Level::Debug => "\x1b[1;48;5;14m",
		Level::Trace => "\x1b[1m"
	}
}

const RESET: &str = "\x1b[0m";

/// Formats a whole record before it is written, so concurrent records never
/// interleave within a line.
fn render(level: Level, target: &str, args: Arguments<'_>, colored: bool) -> String {
	let message = args.to_string();
	let (paint, reset) = if colored { (color(level), RESET) } else { ("", "") };

	let mut out = String::with_capacity(message.len() + 64);

	for line in message.lines() {
		out.push_str(&format!("{paint}| {level: <5} {target} |{reset} {line}\n"));
	}

	if out.is_empty() {
		out.push_str(&format!("{paint}| {level: <5} {target} |{reset}\n"));
	}

	out
}

struct Logger;

impl Logger {
	fn write(&self, record: &Record<'_>) -> Result<()> {
		let text = render(record.level(), record.target(), *record.args(), true);
		let mut output = get_stderr();

		output.write_all(text.as_bytes())?;
		output.flush()
	}
}

impl Log for Logger {
	fn enabled(&self, metadata: &Metadata<'_>) -> bool {
		metadata.level() <= get_max_level()
	}

	fn log(&self, record: &Record<'_>) {
		if self.enabled(record.metadata()) {
			/* nowhere left to report a failing stderr */
			let _ = self.write(record);
		}
	}

	fn flush(&self) {
		let _ = get_stderr().flush();
	}
}

#[ctor]
fn init() {
	/* the host program already installed its own logger */
	if set_boxed_logger(Box::new(Logger)).is_err() {
		return;
	}

	let value = var(LOG_VAR).ok();

	match parse_level(value.as_deref()) {
		Ok(level) => {
			let level = level.unwrap_or(DEFAULT_LEVEL);

			set_max_level(level);
			trace!("== Log level {} from {}", level, LOG_VAR);
		}

		Err(input) => {
			set_max_level(DEFAULT_LEVEL);
			error!("== Invalid log level {:?} in {}", input, LOG_VAR);
		}
	}

	report();
}
