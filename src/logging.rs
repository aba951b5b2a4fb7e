//! Structured logging through `tracing`.
//!
//! The interactive UI owns the terminal, so sessions log to a file. One-shot
//! evaluation logs to stderr instead. The filter comes from `METHEMATICS_LOG`
//! when set, then from the configured directive, then defaults to `warn`.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::app_dirs;

/// Environment variable holding a filter directive that beats configuration.
pub const LOG_ENV: &str = "METHEMATICS_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";
const LOG_FILE_NAME: &str = "methematics.log";

/// Where log lines end up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
	File(PathBuf),
	Stderr,
}

/// Logging options resolved from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
	/// Filter directive such as `info` or `methematics=debug`.
	pub directive: Option<String>,
	pub sink: LogSink,
}

/// Log file used when the configuration does not name one.
pub fn default_log_file() -> Result<PathBuf> {
	Ok(app_dirs::get_data_dir()?.join(LOG_FILE_NAME))
}

/// Check that `directive` is something [`EnvFilter`] accepts.
pub fn validate_directive(directive: &str) -> Result<(), String> {
	EnvFilter::try_new(directive)
		.map(|_| ())
		.map_err(|err| err.to_string())
}

fn build_filter(directive: Option<&str>) -> EnvFilter {
	EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
		EnvFilter::try_new(directive.unwrap_or(DEFAULT_DIRECTIVE))
			.unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
	})
}

/// Install the global subscriber.
pub fn initialize(config: &LogConfig) -> Result<()> {
	let filter = build_filter(config.directive.as_deref());
	match &config.sink {
		LogSink::Stderr => tracing_subscriber::registry()
			.with(filter)
			.with(fmt::layer().with_writer(io::stderr))
			.try_init()
			.context("failed to install stderr logger")?,
		LogSink::File(path) => {
			if let Some(parent) = path.parent() {
				fs::create_dir_all(parent)
					.with_context(|| format!("failed to create {}", parent.display()))?;
			}
			let file = OpenOptions::new()
				.create(true)
				.append(true)
				.open(path)
				.with_context(|| format!("failed to open log file {}", path.display()))?;
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
				.try_init()
				.context("failed to install file logger")?;
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn plain_levels_and_targets_are_accepted() {
		assert!(validate_directive("info").is_ok());
		assert!(validate_directive("methematics=debug,warn").is_ok());
	}

	#[test]
	fn nonsense_directives_are_rejected() {
		assert!(validate_directive("methematics=loud").is_err());
	}
}
