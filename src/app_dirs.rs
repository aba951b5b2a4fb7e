//! Where `methematics` keeps its files on disk.
//!
//! `config.toml` is read from the config directory and the session log goes to
//! the data directory. `METHEMATICS_CONFIG_DIR` and `METHEMATICS_DATA_DIR`
//! redirect either one; an empty value counts as unset.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

/// The two directories the application touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Location {
	Config,
	Data,
}

impl Location {
	fn override_var(self) -> &'static str {
		match self {
			Self::Config => "METHEMATICS_CONFIG_DIR",
			Self::Data => "METHEMATICS_DATA_DIR",
		}
	}

	fn platform_dir(self, dirs: &ProjectDirs) -> PathBuf {
		match self {
			Self::Config => dirs.config_local_dir().to_path_buf(),
			Self::Data => dirs.data_local_dir().to_path_buf(),
		}
	}

	fn resolve(self) -> Result<PathBuf> {
		if let Some(dir) = env::var_os(self.override_var()).filter(|value| !value.is_empty()) {
			return Ok(PathBuf::from(dir));
		}

		let dirs = ProjectDirs::from("io", "methematics", "methematics")
			.ok_or_else(|| anyhow!("no home directory to place methematics files in"))?;
		Ok(self.platform_dir(&dirs))
	}
}

/// Directory holding `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	Location::Config.resolve()
}

/// Directory the session log is written to.
pub fn get_data_dir() -> Result<PathBuf> {
	Location::Data.resolve()
}
