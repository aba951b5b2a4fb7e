use std::path::PathBuf;

use serde::Deserialize;

use super::super::util::non_blank;
use crate::cli::CliArgs;

/// Logging configuration prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LoggingSection {
	pub(super) level: Option<String>,
	pub(super) file: Option<PathBuf>,
}

impl LoggingSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(level) = cli.log_level.clone() {
			self.level = Some(level);
		}
	}

	pub(super) fn directive(&self) -> Option<String> {
		non_blank(self.level.clone())
	}
}
