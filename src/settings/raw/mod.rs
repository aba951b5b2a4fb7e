use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod guidelines;
mod logging;
mod ui;

use guidelines::GuidelinesSection;
use logging::LoggingSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	ui: UiSection,
	guidelines: GuidelinesSection,
	logging: LoggingSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.ui.apply_cli_overrides(cli);
		self.guidelines.apply_cli_overrides(cli);
		self.logging.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			title: detect_source(
				cli.title.is_some(),
				self.ui.title.is_some(),
				"METHEMATICS__UI__TITLE",
				"--title",
				"ui.title",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"METHEMATICS__UI__THEME",
				"--theme",
				"ui.theme",
			),
			guidelines_path: detect_source(
				cli.guidelines.is_some(),
				self.guidelines.path.is_some(),
				"METHEMATICS__GUIDELINES__PATH",
				"--guidelines",
				"guidelines.path",
			),
			log_level: detect_source(
				cli.log_level.is_some(),
				self.logging.level.is_some(),
				"METHEMATICS__LOGGING__LEVEL",
				"--log-level",
				"logging.level",
			),
		};

		let log_directive = self.logging.directive();
		let ui = self.ui.finalize();

		let config = ResolvedConfig {
			labels: ui.labels,
			initial_input: ui.initial_input,
			theme: ui.theme,
			guidelines_path: self.guidelines.path,
			log_directive,
			log_file: self.logging.file,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
