use methematics::UiLabels;
use serde::Deserialize;

use super::super::util::non_blank;
use crate::cli::CliArgs;

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) title: Option<String>,
	pub(super) placeholder: Option<String>,
	pub(super) empty_message: Option<String>,
	pub(super) initial_input: Option<String>,
	pub(super) theme: Option<String>,
}

pub(super) struct UiResolution {
	pub(super) labels: UiLabels,
	pub(super) initial_input: String,
	pub(super) theme: Option<String>,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(title) = cli.title.clone() {
			self.title = Some(title);
		}
		if let Some(placeholder) = cli.placeholder.clone() {
			self.placeholder = Some(placeholder);
		}
		if let Some(input) = cli.initial_input.clone() {
			self.initial_input = Some(input);
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
	}

	pub(super) fn finalize(self) -> UiResolution {
		let mut labels = UiLabels::default();
		if let Some(title) = self.title {
			// Kept even when blank so validation can reject it.
			labels.title = title.trim().to_string();
		}
		if let Some(placeholder) = non_blank(self.placeholder) {
			labels.placeholder = placeholder;
		}
		if let Some(message) = non_blank(self.empty_message) {
			labels.empty_message = message;
		}

		UiResolution {
			labels,
			initial_input: non_blank(self.initial_input).unwrap_or_default(),
			theme: non_blank(self.theme),
		}
	}
}
