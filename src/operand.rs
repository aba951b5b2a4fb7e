//! Parsing free-text input into an [`Operand`] and judging its validity.

use std::fmt;

use serde::Serialize;

use crate::divisors::find_divisors;

/// Message attached to the input whenever it holds a non-positive number.
pub const POSITIVE_NUMBER_MESSAGE: &str = "Please provide a positive number.";

/// Message surfaced when an empty input is submitted.
pub const MISSING_VALUE_MESSAGE: &str = "Please fill out this field.";

/// A number read from the input field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Operand {
	/// A non-negative integral value.
	Whole(u64),
	/// Anything else that parsed: fractions, negatives, and integral values
	/// too large for `u64` such as `1e20`.
	Fractional(f64),
}

impl Operand {
	/// Parse the raw input text. Empty text reads as zero.
	///
	/// Returns `None` when the text is not a finite number.
	#[must_use]
	pub fn parse(text: &str) -> Option<Self> {
		let trimmed = text.trim();
		if trimmed.is_empty() {
			return Some(Self::Whole(0));
		}

		if let Ok(whole) = trimmed.parse::<u64>() {
			return Some(Self::Whole(whole));
		}

		let value = trimmed.parse::<f64>().ok().filter(|value| value.is_finite())?;
		Some(Self::from_f64(value))
	}

	fn from_f64(value: f64) -> Self {
		if value.fract() == 0.0 && value >= 0.0 && value <= u64::MAX as f64 {
			Self::Whole(value as u64)
		} else {
			Self::Fractional(value)
		}
	}

	/// Whether the operand is strictly greater than zero.
	#[must_use]
	pub fn is_positive(&self) -> bool {
		match *self {
			Self::Whole(value) => value > 0,
			Self::Fractional(value) => value > 0.0,
		}
	}

	/// Run the divisor scan on this operand.
	///
	/// [`Operand::Fractional`] values are outside the range the scan supports
	/// and always produce `[1]`.
	#[must_use]
	pub fn divisors(&self) -> Vec<u64> {
		match *self {
			Self::Whole(value) => find_divisors(value),
			Self::Fractional(_) => vec![1],
		}
	}
}

impl fmt::Display for Operand {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Whole(value) => write!(f, "{value}"),
			Self::Fractional(value) => write!(f, "{value}"),
		}
	}
}

/// Verdict for the current input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validity {
	/// Nothing typed yet. Shows no message but cannot be submitted.
	#[default]
	Neutral,
	/// A positive number.
	Valid,
	/// Zero, a negative value, or text that is not a number.
	NotPositive,
}

impl Validity {
	/// Judge `text`, given what [`Operand::parse`] made of it.
	#[must_use]
	pub fn judge(text: &str, operand: Option<&Operand>) -> Self {
		if text.is_empty() {
			return Self::Neutral;
		}
		match operand {
			Some(operand) if operand.is_positive() => Self::Valid,
			_ => Self::NotPositive,
		}
	}

	/// The message shown under the input, empty when there is nothing to say.
	#[must_use]
	pub fn message(&self) -> &'static str {
		match self {
			Self::Neutral | Self::Valid => "",
			Self::NotPositive => POSITIVE_NUMBER_MESSAGE,
		}
	}
}

/// Whether `ch` may appear in a number literal typed into the input.
#[must_use]
pub fn is_number_char(ch: char) -> bool {
	ch.is_ascii_digit() || matches!(ch, '.' | '-' | '+' | 'e' | 'E')
}
