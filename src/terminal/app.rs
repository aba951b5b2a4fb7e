//! State held by the terminal front-end around the controller.

use ratatui::layout::Rect;

use super::chips::ChipSlot;
use super::config::UiLabels;
use super::input::OperandInput;
use super::theme::Theme;
use crate::controller::{Effect, InteractionController, Phase, UiEvent};
use crate::outcome::Outcome;

/// Which part of the page receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
	/// Nothing focused yet; typing still reaches the input.
	#[default]
	Idle,
	Input,
	Chips,
}

/// Terminal adapter: executes controller effects and keeps the bits of state
/// that only matter for drawing.
pub struct App<'a> {
	pub(crate) controller: InteractionController,
	pub(crate) input: OperandInput<'a>,
	pub(crate) labels: UiLabels,
	pub(crate) theme: Theme,
	pub(crate) focus: Focus,
	pub(crate) selected_chip: usize,
	/// Message attached to the input through [`Effect::SetValidityMessage`].
	pub(crate) validity_message: &'static str,
	/// Reason the last submission was refused, cleared by the next edit.
	pub(crate) status: Option<&'static str>,
	pub(crate) input_area: Option<Rect>,
	pub(crate) chip_slots: Vec<ChipSlot>,
}

impl<'a> App<'a> {
	pub fn new(controller: InteractionController, labels: UiLabels, theme: Theme) -> Self {
		let mut input = OperandInput::new(labels.placeholder.clone());
		input.set_placeholder_style(theme.placeholder);
		input.set_text(controller.state().raw_input());
		Self {
			controller,
			input,
			labels,
			theme,
			focus: Focus::Idle,
			selected_chip: 0,
			validity_message: "",
			status: None,
			input_area: None,
			chip_slots: Vec::new(),
		}
	}

	/// Run the controller's mount transition.
	pub fn mount(&mut self) {
		let effects = self.controller.mount();
		self.run_effects(effects);
	}

	/// Route an event through the controller and act on what it asks for.
	pub(crate) fn dispatch(&mut self, event: UiEvent) {
		let effects = self.controller.dispatch(event);
		self.input.set_text(self.controller.state().raw_input());
		self.run_effects(effects);
	}

	fn run_effects(&mut self, effects: Vec<Effect>) {
		for effect in effects {
			match effect {
				Effect::FocusInput => self.set_focus(Focus::Input),
				Effect::SetValidityMessage(message) => self.validity_message = message,
				Effect::BlockSubmit(reason) => self.status = Some(reason.message()),
			}
		}
	}

	pub(crate) fn set_focus(&mut self, focus: Focus) {
		let focus = if focus == Focus::Chips && self.divisor_count() == 0 {
			Focus::Input
		} else {
			focus
		};
		self.focus = focus;
		self.input.set_cursor_visible(focus != Focus::Chips);
	}

	pub(crate) fn divisor_count(&self) -> usize {
		self.controller.state().divisors().len()
	}

	/// Chips the keyboard can reach: the ones drawn last frame, or every
	/// divisor before the first frame.
	pub(crate) fn navigable_chip_count(&self) -> usize {
		if self.chip_slots.is_empty() {
			self.divisor_count()
		} else {
			self.chip_slots.len().min(self.divisor_count())
		}
	}

	pub(crate) fn selected_divisor(&self) -> Option<u64> {
		self.controller
			.state()
			.divisors()
			.get(self.selected_chip)
			.copied()
	}

	pub(crate) fn is_queried(&self) -> bool {
		self.controller.state().phase() == Phase::Queried
	}

	pub fn focus(&self) -> Focus {
		self.focus
	}

	pub fn controller(&self) -> &InteractionController {
		&self.controller
	}

	/// Summarize the session for printing once the UI has closed.
	pub fn outcome(&self) -> Outcome {
		Outcome::from_controller(&self.controller, self.status.map(str::to_string))
	}
}
