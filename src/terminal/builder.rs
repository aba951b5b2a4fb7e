use anyhow::Result;

use super::App;
use super::config::UiLabels;
use super::theme::{self, Theme};
use crate::controller::{InteractionController, UiEvent};
use crate::guidelines::GuidelineTable;
use crate::outcome::Outcome;

/// A small builder for configuring the divisor page before running it.
pub struct DivisorUi {
	guidelines: GuidelineTable,
	labels: UiLabels,
	theme: Option<Theme>,
	initial_input: Option<String>,
}

impl DivisorUi {
	pub fn new(guidelines: GuidelineTable) -> Self {
		Self {
			guidelines,
			labels: UiLabels::default(),
			theme: None,
			initial_input: None,
		}
	}

	pub fn with_labels(mut self, labels: UiLabels) -> Self {
		self.labels = labels;
		self
	}

	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	/// Apply a built-in theme by name. Unknown names keep the current theme.
	pub fn with_theme_name(mut self, name: &str) -> Self {
		if let Some(theme) = theme::by_name(name) {
			self.theme = Some(theme);
		}
		self
	}

	/// Pre-fill the input as if the user had typed `text`.
	pub fn with_initial_input(mut self, text: impl Into<String>) -> Self {
		let text = text.into();
		self.initial_input = (!text.is_empty()).then_some(text);
		self
	}

	/// Build the [`App`] without touching the terminal.
	pub fn into_app<'a>(self) -> App<'a> {
		let mut app = App::new(
			InteractionController::new(self.guidelines),
			self.labels,
			self.theme.unwrap_or_default(),
		);
		if let Some(text) = self.initial_input {
			app.dispatch(UiEvent::TextChanged(text));
		}
		app
	}

	pub fn run(self) -> Result<Outcome> {
		self.into_app().run()
	}
}
