use std::path::Path;

use anyhow::{Context, Result};
use methematics::{DivisorUi, GuidelineTable, Outcome, UiLabels, evaluate};
use tracing::info;

use crate::settings::ResolvedConfig;

/// Coordinates building and running the divisor page.
pub(crate) struct DivisorWorkflow {
	divisor_ui: DivisorUi,
	guidelines: GuidelineTable,
}

impl DivisorWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let guidelines = load_guidelines(config.guidelines_path.as_deref())?;
		let divisor_ui = DivisorUiFactory::build(config, guidelines.clone());
		Ok(Self {
			divisor_ui,
			guidelines,
		})
	}

	/// Open the interactive page and return what it showed when closed.
	pub(crate) fn run(self) -> Result<Outcome> {
		self.divisor_ui.run()
	}

	/// Submit `text` once without opening the terminal UI.
	pub(crate) fn evaluate(self, text: &str) -> Outcome {
		evaluate(self.guidelines, text)
	}
}

fn load_guidelines(path: Option<&Path>) -> Result<GuidelineTable> {
	let table = match path {
		Some(path) => GuidelineTable::from_path(path)?,
		None => GuidelineTable::bundled().context("bundled guideline table is malformed")?,
	};
	info!(entries = table.len(), custom = path.is_some(), "guidelines loaded");
	Ok(table)
}

/// Helper for translating resolved configuration into a configured `DivisorUi`.
struct DivisorUiFactory {
	divisor_ui: DivisorUi,
}

impl DivisorUiFactory {
	fn build(config: ResolvedConfig, guidelines: GuidelineTable) -> DivisorUi {
		let ResolvedConfig {
			labels,
			initial_input,
			theme,
			..
		} = config;

		Self::new(guidelines)
			.with_labels(labels)
			.with_theme(theme)
			.with_initial_input(initial_input)
			.finish()
	}

	fn new(guidelines: GuidelineTable) -> Self {
		Self {
			divisor_ui: DivisorUi::new(guidelines),
		}
	}

	fn with_labels(mut self, labels: UiLabels) -> Self {
		self.divisor_ui = self.divisor_ui.with_labels(labels);
		self
	}

	fn with_theme(mut self, theme: Option<String>) -> Self {
		if let Some(theme) = theme {
			self.divisor_ui = self.divisor_ui.with_theme_name(&theme);
		}
		self
	}

	fn with_initial_input(mut self, input: String) -> Self {
		self.divisor_ui = self.divisor_ui.with_initial_input(input);
		self
	}

	fn finish(self) -> DivisorUi {
		self.divisor_ui
	}
}
