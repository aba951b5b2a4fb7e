use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::App;
use super::app::Focus;
use super::chips::point_in_rect;
use crate::controller::UiEvent;
use crate::operand::is_number_char;
use crate::outcome::Outcome;

impl<'a> App<'a> {
	/// Process a keyboard event and return the outcome if the user exits.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<Outcome> {
		match key.code {
			KeyCode::Esc => return Some(self.outcome()),
			KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				return Some(self.outcome());
			}
			KeyCode::Tab | KeyCode::BackTab => self.toggle_focus(),
			_ if self.focus == Focus::Chips => self.handle_chip_key(key),
			_ => self.handle_input_key(key),
		}
		None
	}

	fn toggle_focus(&mut self) {
		let next = match self.focus {
			Focus::Chips => Focus::Input,
			Focus::Idle | Focus::Input => Focus::Chips,
		};
		self.set_focus(next);
	}

	fn handle_input_key(&mut self, key: KeyEvent) {
		if self.focus == Focus::Idle {
			self.set_focus(Focus::Input);
		}

		if key.code == KeyCode::Enter {
			self.status = None;
			self.dispatch(UiEvent::Submit);
			self.selected_chip = 0;
			return;
		}

		if self.input.input(key) {
			self.status = None;
			let text = self.input.text().to_string();
			self.dispatch(UiEvent::TextChanged(text));
		}
	}

	fn handle_chip_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Left | KeyCode::Up => {
				self.selected_chip = self.selected_chip.saturating_sub(1);
			}
			KeyCode::Right | KeyCode::Down => {
				if self.selected_chip + 1 < self.navigable_chip_count() {
					self.selected_chip += 1;
				}
			}
			KeyCode::Home => self.selected_chip = 0,
			KeyCode::End => self.selected_chip = self.navigable_chip_count().saturating_sub(1),
			KeyCode::Enter | KeyCode::Char(' ') => self.select_current_chip(),
			KeyCode::Char(ch) if is_number_char(ch) => {
				self.set_focus(Focus::Input);
				self.handle_input_key(key);
			}
			KeyCode::Backspace => {
				self.set_focus(Focus::Input);
				self.handle_input_key(key);
			}
			_ => {}
		}
	}

	fn select_current_chip(&mut self) {
		if let Some(divisor) = self.selected_divisor() {
			self.select_divisor(divisor);
		}
	}

	fn select_divisor(&mut self, divisor: u64) {
		if !self.is_queried() {
			return;
		}
		self.status = None;
		self.dispatch(UiEvent::SelectDivisor(divisor));
		self.selected_chip = 0;
	}

	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) {
		let MouseEventKind::Down(MouseButton::Left) = mouse.kind else {
			return;
		};

		let clicked = self
			.chip_slots
			.iter()
			.position(|slot| point_in_rect(mouse.column, mouse.row, slot.area));
		if let Some(index) = clicked {
			let divisor = self.chip_slots[index].divisor;
			self.set_focus(Focus::Chips);
			self.selected_chip = index;
			self.select_divisor(divisor);
			return;
		}

		if let Some(area) = self.input_area
			&& point_in_rect(mouse.column, mouse.row, area)
		{
			self.set_focus(Focus::Input);
		}
	}
}
