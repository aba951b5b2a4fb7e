use tracing::{debug, info};

use super::effects::{BlockReason, Effect, Transition};
use crate::operand::{Operand, Validity};

/// Coarse stage of the interaction, derived from the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
	/// No text and no results.
	Empty,
	/// Text present, nothing computed yet.
	Editing,
	/// A query produced a divisor list.
	Queried,
}

/// Events a front-end feeds into the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
	TextChanged(String),
	Submit,
	SelectDivisor(u64),
}

/// Everything the controller tracks between events.
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
	raw_input: String,
	operand: Option<Operand>,
	validity: Validity,
	divisors: Vec<u64>,
}

impl Default for UiState {
	fn default() -> Self {
		Self {
			raw_input: String::new(),
			operand: Operand::parse(""),
			validity: Validity::Neutral,
			divisors: Vec::new(),
		}
	}
}

impl UiState {
	pub fn raw_input(&self) -> &str {
		&self.raw_input
	}

	/// The parsed input, `None` when the text is not a number.
	pub fn operand(&self) -> Option<Operand> {
		self.operand
	}

	pub fn validity(&self) -> Validity {
		self.validity
	}

	pub fn divisors(&self) -> &[u64] {
		&self.divisors
	}

	pub fn phase(&self) -> Phase {
		if !self.divisors.is_empty() {
			Phase::Queried
		} else if self.raw_input.is_empty() {
			Phase::Empty
		} else {
			Phase::Editing
		}
	}

	fn with_input(mut self, text: String) -> Self {
		self.operand = Operand::parse(&text);
		self.validity = Validity::judge(&text, self.operand.as_ref());
		self.raw_input = text;
		self
	}
}

/// The one-off transition run when the front-end first shows the input.
#[must_use]
pub fn mount(state: UiState) -> Transition {
	Transition::with_effect(state, Effect::FocusInput)
}

/// Apply `event` to `state`.
#[must_use]
pub fn transition(state: UiState, event: UiEvent) -> Transition {
	match event {
		UiEvent::TextChanged(text) => text_changed(state, text),
		UiEvent::Submit => submit(state),
		UiEvent::SelectDivisor(divisor) => select_divisor(state, divisor),
	}
}

fn text_changed(state: UiState, text: String) -> Transition {
	if state.raw_input == text {
		return Transition::quiet(state);
	}

	let state = state.with_input(text);
	debug!(input = %state.raw_input, validity = ?state.validity, "input changed");
	let message = state.validity.message();
	Transition::with_effect(state, Effect::SetValidityMessage(message))
}

fn submit(mut state: UiState) -> Transition {
	let operand = match (state.validity, state.operand) {
		(Validity::Valid, Some(operand)) => operand,
		(Validity::Neutral, _) => return blocked(state, BlockReason::MissingValue),
		_ => return blocked(state, BlockReason::NotPositive),
	};

	state.divisors = operand.divisors();
	info!(%operand, found = state.divisors.len(), "divisors computed");
	Transition::quiet(state)
}

fn blocked(state: UiState, reason: BlockReason) -> Transition {
	info!(input = %state.raw_input, ?reason, "submission blocked");
	Transition::with_effect(state, Effect::BlockSubmit(reason))
}

fn select_divisor(state: UiState, divisor: u64) -> Transition {
	if state.phase() != Phase::Queried || !state.divisors.contains(&divisor) {
		debug!(divisor, "ignoring selection of a divisor that is not on display");
		return Transition::quiet(state);
	}

	let mut state = state.with_input(divisor.to_string());
	state.divisors = Operand::Whole(divisor).divisors();
	info!(divisor, found = state.divisors.len(), "re-queried from selection");
	let message = state.validity.message();
	Transition::with_effect(state, Effect::SetValidityMessage(message))
}
