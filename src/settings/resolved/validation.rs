use methematics::logging;
use methematics::terminal::theme;

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.labels.title.trim().is_empty() {
		return Err(ConfigError::invalid(
			"ui.title",
			config.labels.title.clone(),
			sources.source_for_title(),
			"must not be empty",
		));
	}

	if let Some(name) = &config.theme
		&& theme::by_name(name).is_none()
	{
		return Err(ConfigError::invalid(
			"ui.theme",
			name.clone(),
			sources.source_for_theme(),
			format!("unknown theme, expected one of {}", theme::names().join(", ")),
		));
	}

	if let Some(path) = &config.guidelines_path
		&& !path.is_file()
	{
		return Err(ConfigError::invalid(
			"guidelines.path",
			path.display().to_string(),
			sources.source_for_guidelines(),
			"file does not exist",
		));
	}

	if let Some(directive) = &config.log_directive
		&& let Err(reason) = logging::validate_directive(directive)
	{
		return Err(ConfigError::invalid(
			"logging.level",
			directive.clone(),
			sources.source_for_log_level(),
			reason,
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use methematics::UiLabels;
	use tempfile::NamedTempFile;

	use super::super::SettingSource;
	use super::*;

	fn config() -> ResolvedConfig {
		ResolvedConfig {
			labels: UiLabels::default(),
			initial_input: String::new(),
			theme: None,
			guidelines_path: None,
			log_directive: None,
			log_file: None,
		}
	}

	#[test]
	fn defaults_are_valid() {
		assert!(validate(&config(), &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_rejects_empty_title() {
		let mut config = config();
		config.labels.title = String::new();
		let sources = ConfigSources {
			title: Some(SettingSource::Environment("METHEMATICS__UI__TITLE")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, "ui.title");
		let message = err.to_string();
		assert!(message.contains("must not be empty"));
		assert!(message.contains("environment variable `METHEMATICS__UI__TITLE`"));
	}

	#[test]
	fn validation_rejects_unknown_theme() {
		let config = ResolvedConfig {
			theme: Some("neon".into()),
			..config()
		};
		let sources = ConfigSources {
			theme: Some(SettingSource::CliFlag("--theme")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, "ui.theme");
		let message = err.to_string();
		assert!(message.contains("value: neon"));
		assert!(message.contains("CLI flag"));
		assert!(message.contains("slate"));
	}

	#[test]
	fn theme_aliases_are_accepted() {
		let config = ResolvedConfig {
			theme: Some("dark".into()),
			..config()
		};
		assert!(validate(&config, &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_rejects_missing_guidelines() {
		let config = ResolvedConfig {
			guidelines_path: Some(PathBuf::from("/definitely/not/here.json")),
			..config()
		};
		let sources = ConfigSources {
			guidelines_path: Some(SettingSource::Environment(
				"METHEMATICS__GUIDELINES__PATH",
			)),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, "guidelines.path");
		assert!(err.to_string().contains("environment variable"));
	}

	#[test]
	fn existing_guidelines_file_is_accepted() {
		let file = NamedTempFile::new().expect("temp file");
		let config = ResolvedConfig {
			guidelines_path: Some(file.path().to_path_buf()),
			..config()
		};
		assert!(validate(&config, &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_rejects_bad_log_level() {
		let config = ResolvedConfig {
			log_directive: Some("methematics=loud".into()),
			..config()
		};

		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key, "logging.level");
		assert!(err.to_string().contains("configuration key `logging.level`"));
	}
}
