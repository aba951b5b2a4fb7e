use std::fmt::Write;

use anyhow::Result;
use methematics::Outcome;
use serde_json::json;

/// Render the outcome as plain text: the divisor line followed by one line
/// per guideline note.
pub(crate) fn format_plain(outcome: &Outcome, empty_message: &str) -> String {
	if let Some(reason) = &outcome.blocked {
		return format!("{reason} (input: '{}')", outcome.input);
	}

	if outcome.divisors.is_empty() {
		return empty_message.to_string();
	}

	let divisors: Vec<String> = outcome.divisors.iter().map(u64::to_string).collect();
	let mut text = format!("{}: {}", outcome.input, divisors.join(" "));
	for note in &outcome.notes {
		let _ = write!(text, "\n  {}: {}", note.divisor, note.text);
	}
	text
}

/// Print a plain-text representation of the outcome.
pub(crate) fn print_plain(outcome: &Outcome, empty_message: &str) {
	println!("{}", format_plain(outcome, empty_message));
}

/// Format the outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &Outcome) -> Result<String> {
	let payload = json!({
		"accepted": outcome.accepted(),
		"input": outcome.input,
		"divisors": outcome.divisors,
		"annotations": outcome.notes,
		"blocked": outcome.blocked,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the outcome.
pub(crate) fn print_json(outcome: &Outcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use methematics::{GuidelineTable, evaluate};
	use serde_json::Value;

	use super::*;

	fn table() -> GuidelineTable {
		[("2", "even"), ("3", "digit sum")].into_iter().collect()
	}

	#[test]
	fn plain_format_lists_divisors_then_notes() {
		let outcome = evaluate(table(), "12");
		insta::assert_snapshot!(
			format_plain(&outcome, "Nothing to show..."),
			@"12: 1 2 3 4 6 12\n  2: even\n  3: digit sum"
		);
	}

	#[test]
	fn plain_format_reports_blocked_input() {
		let outcome = evaluate(table(), "0");
		insta::assert_snapshot!(
			format_plain(&outcome, "Nothing to show..."),
			@"Please provide a positive number. (input: '0')"
		);
	}

	#[test]
	fn json_format_reports_blocked_input() {
		let outcome = evaluate(table(), "-3");

		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["accepted"], false);
		assert_eq!(value["blocked"], "Please provide a positive number.");
		assert_eq!(value["annotations"], serde_json::json!([]));
	}

	#[test]
	fn json_format_includes_divisors_and_annotations() {
		let outcome = evaluate(table(), "6");

		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["accepted"], true);
		assert_eq!(value["input"], "6");
		assert_eq!(value["divisors"], serde_json::json!([1, 2, 3, 6]));
		assert_eq!(value["annotations"][1]["text"], "digit sum");
		assert!(value["blocked"].is_null());

		let mut keys: Vec<&str> = value
			.as_object()
			.expect("object")
			.keys()
			.map(String::as_str)
			.collect();
		keys.sort_unstable();
		assert_eq!(
			keys,
			vec!["accepted", "annotations", "blocked", "divisors", "input"]
		);
	}
}
