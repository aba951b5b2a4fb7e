use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::*;
use crate::guidelines::GuidelineTable;
use crate::operand::{MISSING_VALUE_MESSAGE, POSITIVE_NUMBER_MESSAGE};

fn guidelines() -> GuidelineTable {
	[("2", "Even numbers"), ("3", "Digit sums")]
		.into_iter()
		.collect()
}

fn mounted_app() -> App<'static> {
	let mut app = DivisorUi::new(guidelines()).into_app();
	app.mount();
	app
}

fn press(app: &mut App<'_>, code: KeyCode) -> Option<crate::outcome::Outcome> {
	app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_text(app: &mut App<'_>, text: &str) {
	for ch in text.chars() {
		press(app, KeyCode::Char(ch));
	}
}

fn render(app: &mut App<'_>) -> (Terminal<TestBackend>, String) {
	render_sized(app, 60, 20)
}

fn render_sized(app: &mut App<'_>, width: u16, height: u16) -> (Terminal<TestBackend>, String) {
	let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
	terminal.draw(|frame| app.draw(frame)).expect("draw");
	let view = buffer_to_string(terminal.backend().buffer());
	(terminal, view)
}

fn buffer_to_string(buf: &Buffer) -> String {
	let mut lines = Vec::new();
	for y in 0..buf.area.height {
		let mut line = String::new();
		for x in 0..buf.area.width {
			line.push_str(buf[(x, y)].symbol());
		}
		lines.push(line);
	}
	lines.join("\n")
}

#[test]
fn mount_focuses_the_input() {
	let app = mounted_app();
	assert_eq!(app.focus(), Focus::Input);
}

#[test]
fn empty_page_shows_placeholder_and_empty_message() {
	let mut app = mounted_app();
	let (_, view) = render(&mut app);
	assert!(view.contains("Methematics"));
	assert!(view.contains("Give me a number"));
	assert!(view.contains("Nothing to show..."));
}

#[test]
fn submitting_renders_chips_and_guidelines() {
	let mut app = mounted_app();
	type_text(&mut app, "12");
	press(&mut app, KeyCode::Enter);

	let (_, view) = render(&mut app);
	assert!(view.contains(" 1   2   3   4   6   12 "), "{view}");
	assert!(view.contains("2: Even numbers"));
	assert!(view.contains("3: Digit sums"));
	assert!(!view.contains("Nothing to show..."));
}

#[test]
fn letters_never_reach_the_input() {
	let mut app = mounted_app();
	type_text(&mut app, "1a2");
	assert_eq!(app.controller().state().raw_input(), "12");
}

#[test]
fn non_positive_input_shows_the_validity_message() {
	let mut app = mounted_app();
	type_text(&mut app, "0");
	let (_, view) = render(&mut app);
	assert!(view.contains(POSITIVE_NUMBER_MESSAGE));

	press(&mut app, KeyCode::Backspace);
	let (_, view) = render(&mut app);
	assert!(!view.contains(POSITIVE_NUMBER_MESSAGE));
}

#[test]
fn empty_submission_reports_missing_value() {
	let mut app = mounted_app();
	press(&mut app, KeyCode::Enter);
	let (_, view) = render(&mut app);
	assert!(view.contains(MISSING_VALUE_MESSAGE));
	assert!(app.controller().state().divisors().is_empty());
}

#[test]
fn keyboard_chip_selection_requeries() {
	let mut app = mounted_app();
	type_text(&mut app, "12");
	press(&mut app, KeyCode::Enter);

	press(&mut app, KeyCode::Tab);
	assert_eq!(app.focus(), Focus::Chips);
	press(&mut app, KeyCode::End);
	press(&mut app, KeyCode::Left);
	press(&mut app, KeyCode::Enter);

	assert_eq!(app.controller().state().raw_input(), "6");
	assert_eq!(app.controller().state().divisors(), &[1, 2, 3, 6]);
	assert_eq!(app.input.text(), "6");
}

#[test]
fn tab_stays_on_input_without_results() {
	let mut app = mounted_app();
	press(&mut app, KeyCode::Tab);
	assert_eq!(app.focus(), Focus::Input);
}

#[test]
fn clicking_a_chip_requeries() {
	let mut app = mounted_app();
	type_text(&mut app, "8");
	press(&mut app, KeyCode::Enter);
	render(&mut app);

	let slot = app
		.chip_slots
		.iter()
		.find(|slot| slot.divisor == 4)
		.copied()
		.expect("chip for 4");
	app.handle_mouse(MouseEvent {
		kind: MouseEventKind::Down(MouseButton::Left),
		column: slot.area.x,
		row: slot.area.y,
		modifiers: KeyModifiers::NONE,
	});

	assert_eq!(app.controller().state().divisors(), &[1, 2, 4]);
	assert_eq!(app.focus(), Focus::Chips);
}

#[test]
fn typing_from_chips_returns_to_input() {
	let mut app = mounted_app();
	type_text(&mut app, "9");
	press(&mut app, KeyCode::Enter);
	press(&mut app, KeyCode::Tab);

	press(&mut app, KeyCode::Char('9'));
	assert_eq!(app.focus(), Focus::Input);
	assert_eq!(app.controller().state().raw_input(), "99");
}

#[test]
fn escape_returns_the_outcome() {
	let mut app = mounted_app();
	type_text(&mut app, "6");
	press(&mut app, KeyCode::Enter);

	let outcome = press(&mut app, KeyCode::Esc).expect("outcome");
	assert_eq!(outcome.input, "6");
	assert_eq!(outcome.divisors, vec![1, 2, 3, 6]);
	assert_eq!(outcome.notes.len(), 2);
	assert!(outcome.accepted());
}

#[test]
fn initial_input_is_prefilled() {
	let mut app = DivisorUi::new(guidelines())
		.with_initial_input("15")
		.with_theme_name("light")
		.into_app();
	app.mount();
	assert_eq!(app.input.text(), "15");
	assert_eq!(app.theme, theme::LIGHT);

	press(&mut app, KeyCode::Enter);
	assert_eq!(app.controller().state().divisors(), &[1, 3, 5, 15]);
}

#[test]
fn chip_selection_stops_at_the_last_visible_chip() {
	let mut app = mounted_app();
	type_text(&mut app, "720720");
	press(&mut app, KeyCode::Enter);
	render_sized(&mut app, 60, 14);

	let visible = app.chip_slots.len();
	assert!(visible > 0);
	assert!(visible < app.divisor_count(), "{visible} chips fit");

	press(&mut app, KeyCode::Tab);
	press(&mut app, KeyCode::End);
	assert_eq!(app.selected_chip, visible - 1);
	press(&mut app, KeyCode::Right);
	assert_eq!(app.selected_chip, visible - 1);
	assert_eq!(app.selected_divisor(), Some(app.chip_slots[visible - 1].divisor));

	let (_, view) = render_sized(&mut app, 60, 14);
	assert_eq!(app.selected_chip, visible - 1);
	assert!(view.contains(" 1 "));
}

#[test]
fn shrinking_the_terminal_pulls_the_selection_back_on_screen() {
	let mut app = mounted_app();
	type_text(&mut app, "720720");
	press(&mut app, KeyCode::Enter);
	render_sized(&mut app, 60, 20);
	press(&mut app, KeyCode::Tab);
	press(&mut app, KeyCode::End);

	render_sized(&mut app, 60, 14);
	assert!(app.selected_chip < app.chip_slots.len());
}
