//! Colour schemes for the terminal page.
//!
//! Themes are plain `const` values. Lookup is case-insensitive and accepts a
//! few aliases per theme.

use ratatui::style::{Color, Modifier, Style};

/// Styles for every element drawn on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	pub heading: Style,
	/// Border of the focused input.
	pub prompt: Style,
	/// Border of the input when focus is elsewhere.
	pub idle: Style,
	pub placeholder: Style,
	pub invalid: Style,
	pub chip: Style,
	pub chip_selected: Style,
	pub empty: Style,
	pub guideline_key: Style,
	pub guideline_text: Style,
	pub hint: Style,
}

/// A named built-in theme.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
	pub name: &'static str,
	pub aliases: &'static [&'static str],
	pub theme: Theme,
}

const SPACE_CADET: Color = Color::Rgb(41, 50, 65);
const LAPIS: Color = Color::Rgb(61, 90, 128);
const SKY: Color = Color::Rgb(152, 193, 217);
const MIST: Color = Color::Rgb(224, 251, 252);
const BURNT: Color = Color::Rgb(238, 108, 77);

pub const SLATE: Theme = Theme {
	heading: Style::new().fg(MIST).add_modifier(Modifier::BOLD),
	prompt: Style::new().fg(SKY),
	idle: Style::new().fg(LAPIS),
	placeholder: Style::new().fg(Color::DarkGray),
	invalid: Style::new().fg(BURNT),
	chip: Style::new().fg(SPACE_CADET).bg(SKY),
	chip_selected: Style::new()
		.fg(MIST)
		.bg(LAPIS)
		.add_modifier(Modifier::BOLD),
	empty: Style::new().fg(Color::DarkGray),
	guideline_key: Style::new().fg(SKY).add_modifier(Modifier::BOLD),
	guideline_text: Style::new().fg(MIST),
	hint: Style::new().fg(Color::DarkGray),
};

pub const LIGHT: Theme = Theme {
	heading: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.add_modifier(Modifier::BOLD),
	prompt: Style::new().fg(Color::Rgb(0, 102, 153)),
	idle: Style::new().fg(Color::Rgb(148, 163, 184)),
	placeholder: Style::new().fg(Color::Rgb(100, 100, 100)),
	invalid: Style::new().fg(Color::Rgb(185, 28, 28)),
	chip: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(226, 232, 240)),
	chip_selected: Style::new()
		.fg(Color::Rgb(255, 255, 255))
		.bg(Color::Rgb(0, 102, 153))
		.add_modifier(Modifier::BOLD),
	empty: Style::new().fg(Color::Rgb(100, 100, 100)),
	guideline_key: Style::new()
		.fg(Color::Rgb(0, 102, 153))
		.add_modifier(Modifier::BOLD),
	guideline_text: Style::new().fg(Color::Rgb(15, 23, 42)),
	hint: Style::new().fg(Color::Rgb(100, 100, 100)),
};

const BUILT_IN_DEFINITIONS: &[ThemeDefinition] = &[
	ThemeDefinition {
		name: "slate",
		aliases: &["default", "dark"],
		theme: SLATE,
	},
	ThemeDefinition {
		name: "light",
		aliases: &["day"],
		theme: LIGHT,
	},
];

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

#[must_use]
pub fn default_theme() -> Theme {
	SLATE
}

fn normalize_name(name: &str) -> String {
	name.trim().to_ascii_lowercase()
}

/// Lookup a theme by case-insensitive name or alias.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let normalized = normalize_name(name);
	BUILT_IN_DEFINITIONS
		.iter()
		.find(|definition| {
			definition.name == normalized || definition.aliases.contains(&normalized.as_str())
		})
		.map(|definition| definition.theme)
}

/// Canonical theme names, sorted.
#[must_use]
pub fn names() -> Vec<&'static str> {
	let mut names: Vec<_> = BUILT_IN_DEFINITIONS
		.iter()
		.map(|definition| definition.name)
		.collect();
	names.sort_unstable();
	names
}
