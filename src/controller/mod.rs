//! The interaction state machine behind the divisor page.
//!
//! Transitions are plain functions from a [`UiState`] and a [`UiEvent`] to a
//! [`Transition`]: the next state plus the [`Effect`]s a front-end should carry
//! out. [`InteractionController`] owns one state, applies events to it one at a
//! time, and pairs the result with a [`GuidelineTable`] to build the [`View`]
//! handed to rendering.

mod effects;
mod state;

pub use effects::{BlockReason, Effect, Transition};
pub use state::{Phase, UiEvent, UiState, mount, transition};

use crate::guidelines::{Annotation, GuidelineTable};

/// Owns the [`UiState`] and the guideline table used to annotate it.
#[derive(Debug)]
pub struct InteractionController {
	state: UiState,
	guidelines: GuidelineTable,
	mounted: bool,
}

impl InteractionController {
	pub fn new(guidelines: GuidelineTable) -> Self {
		Self {
			state: UiState::default(),
			guidelines,
			mounted: false,
		}
	}

	/// Run the mount transition. Only the first call yields effects.
	pub fn mount(&mut self) -> Vec<Effect> {
		if self.mounted {
			return Vec::new();
		}
		self.mounted = true;
		self.apply(mount)
	}

	/// Feed a single event through the state machine.
	pub fn dispatch(&mut self, event: UiEvent) -> Vec<Effect> {
		self.apply(|state| transition(state, event))
	}

	fn apply(&mut self, step: impl FnOnce(UiState) -> Transition) -> Vec<Effect> {
		let Transition { state, effects } = step(std::mem::take(&mut self.state));
		self.state = state;
		effects
	}

	pub fn state(&self) -> &UiState {
		&self.state
	}

	pub fn guidelines(&self) -> &GuidelineTable {
		&self.guidelines
	}

	/// Snapshot of everything a renderer needs.
	pub fn view(&self) -> View<'_> {
		View {
			input: self.state.raw_input(),
			validity_message: self.state.validity().message(),
			divisors: self.state.divisors(),
			annotations: self.guidelines.annotate(self.state.divisors()),
			phase: self.state.phase(),
		}
	}
}

/// Render-time projection of the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View<'a> {
	pub input: &'a str,
	pub validity_message: &'static str,
	pub divisors: &'a [u64],
	pub annotations: Vec<Annotation<'a>>,
	pub phase: Phase,
}
