use crate::operand::{MISSING_VALUE_MESSAGE, POSITIVE_NUMBER_MESSAGE};

use super::UiState;

/// Side effects requested by a transition, executed by whichever front-end
/// hosts the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
	/// Move keyboard focus to the input field.
	FocusInput,
	/// Replace the validity message attached to the input. Empty clears it.
	SetValidityMessage(&'static str),
	/// A submission was refused before any computation happened.
	BlockSubmit(BlockReason),
}

/// Why a submission was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockReason {
	/// The input is required but empty.
	MissingValue,
	/// The input does not hold a positive number.
	NotPositive,
}

impl BlockReason {
	/// Text a front-end can show when reporting the refusal.
	#[must_use]
	pub fn message(&self) -> &'static str {
		match self {
			Self::MissingValue => MISSING_VALUE_MESSAGE,
			Self::NotPositive => POSITIVE_NUMBER_MESSAGE,
		}
	}
}

/// The state produced by a transition together with the effects it asks for.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
	pub state: UiState,
	pub effects: Vec<Effect>,
}

impl Transition {
	pub(super) fn quiet(state: UiState) -> Self {
		Self {
			state,
			effects: Vec::new(),
		}
	}

	pub(super) fn with_effect(state: UiState, effect: Effect) -> Self {
		Self {
			state,
			effects: vec![effect],
		}
	}
}
