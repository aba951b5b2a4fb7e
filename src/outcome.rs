//! Serializable summary of a finished session.

use serde::Serialize;

use crate::controller::{Effect, InteractionController, UiEvent};
use crate::guidelines::GuidelineTable;

/// A guideline attached to one of the reported divisors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
	pub divisor: u64,
	pub text: String,
}

/// What the user ended up looking at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
	/// Input text at the end of the session.
	pub input: String,
	pub divisors: Vec<u64>,
	pub notes: Vec<Note>,
	/// Set when the last submission was refused.
	pub blocked: Option<String>,
}

impl Outcome {
	pub fn from_controller(controller: &InteractionController, blocked: Option<String>) -> Self {
		let view = controller.view();
		Self {
			input: view.input.to_string(),
			divisors: view.divisors.to_vec(),
			notes: view
				.annotations
				.iter()
				.map(|annotation| Note {
					divisor: annotation.divisor,
					text: annotation.text.to_string(),
				})
				.collect(),
			blocked,
		}
	}

	pub fn accepted(&self) -> bool {
		self.blocked.is_none()
	}
}

/// Type `text` into a fresh controller and submit it, without any UI.
pub fn evaluate(guidelines: GuidelineTable, text: &str) -> Outcome {
	let mut controller = InteractionController::new(guidelines);
	controller.mount();
	controller.dispatch(UiEvent::TextChanged(text.to_string()));
	let blocked = controller
		.dispatch(UiEvent::Submit)
		.into_iter()
		.find_map(|effect| match effect {
			Effect::BlockSubmit(reason) => Some(reason.message().to_string()),
			_ => None,
		});
	Outcome::from_controller(&controller, blocked)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::operand::{MISSING_VALUE_MESSAGE, POSITIVE_NUMBER_MESSAGE};

	fn table() -> GuidelineTable {
		[("2", "even"), ("5", "ends in 0 or 5")].into_iter().collect()
	}

	#[test]
	fn evaluation_collects_divisors_and_notes() {
		let outcome = evaluate(table(), "10");
		assert!(outcome.accepted());
		assert_eq!(outcome.divisors, vec![1, 2, 5, 10]);
		assert_eq!(
			outcome.notes,
			vec![
				Note {
					divisor: 2,
					text: "even".into()
				},
				Note {
					divisor: 5,
					text: "ends in 0 or 5".into()
				},
			]
		);
	}

	#[test]
	fn evaluation_reports_blocked_submissions() {
		let outcome = evaluate(table(), "-2");
		assert_eq!(outcome.blocked.as_deref(), Some(POSITIVE_NUMBER_MESSAGE));
		assert!(outcome.divisors.is_empty());

		let outcome = evaluate(table(), "");
		assert_eq!(outcome.blocked.as_deref(), Some(MISSING_VALUE_MESSAGE));
	}
}
