/// Text shown around the input and results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
	/// Heading rendered above the input.
	pub title: String,
	/// Placeholder displayed while the input is empty.
	pub placeholder: String,
	/// Shown in place of the chips before the first query.
	pub empty_message: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			title: "Methematics".to_string(),
			placeholder: "Give me a number".to_string(),
			empty_message: "Nothing to show...".to_string(),
		}
	}
}
