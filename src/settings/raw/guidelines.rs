use std::path::PathBuf;

use serde::Deserialize;

use crate::cli::CliArgs;

/// Where the guideline table comes from. Unset means the bundled table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct GuidelinesSection {
	pub(super) path: Option<PathBuf>,
}

impl GuidelinesSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.guidelines.clone() {
			self.path = Some(path);
		}
	}
}
