//! Static guideline text attached to individual divisors.
//!
//! A [`GuidelineTable`] maps the decimal form of a divisor to a short piece of
//! commentary. It is loaded once, never mutated, and handed to the controller
//! at construction time.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

const BUNDLED_GUIDELINES: &str = include_str!("../assets/guidelines.json");

/// Errors raised while reading a guideline file.
#[derive(Debug, Error)]
pub enum GuidelineError {
	/// The file could not be read.
	#[error("failed to read guidelines from {path}: {source}")]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// The file is not a flat JSON object of strings.
	#[error("guidelines in {origin} are not a JSON object of strings: {source}")]
	Parse {
		origin: String,
		#[source]
		source: serde_json::Error,
	},
}

/// Read-only mapping from a divisor's decimal string to its guideline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuidelineTable {
	entries: HashMap<String, String>,
}

impl GuidelineTable {
	/// The table shipped inside the binary.
	pub fn bundled() -> Result<Self, GuidelineError> {
		Self::from_json("bundled guidelines", BUNDLED_GUIDELINES)
	}

	/// Load a replacement table from a JSON file on disk.
	pub fn from_path(path: &Path) -> Result<Self, GuidelineError> {
		let contents = fs::read_to_string(path).map_err(|source| GuidelineError::Read {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_json(&path.display().to_string(), &contents)
	}

	fn from_json(origin: &str, contents: &str) -> Result<Self, GuidelineError> {
		let entries = serde_json::from_str(contents).map_err(|source| GuidelineError::Parse {
			origin: origin.to_string(),
			source,
		})?;
		Ok(Self { entries })
	}

	pub fn contains(&self, key: &str) -> bool {
		self.entries.contains_key(key)
	}

	pub fn get(&self, key: &str) -> Option<&str> {
		self.entries.get(key).map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Pair every divisor that has a guideline with its text, keeping the
	/// order of `divisors`.
	pub fn annotate(&self, divisors: &[u64]) -> Vec<Annotation<'_>> {
		divisors
			.iter()
			.filter_map(|&divisor| {
				self.get(&divisor.to_string())
					.map(|text| Annotation { divisor, text })
			})
			.collect()
	}
}

impl<K, V> FromIterator<(K, V)> for GuidelineTable
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			entries: iter
				.into_iter()
				.map(|(key, value)| (key.into(), value.into()))
				.collect(),
		}
	}
}

/// A divisor paired with its guideline text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Annotation<'a> {
	pub divisor: u64,
	pub text: &'a str,
}
