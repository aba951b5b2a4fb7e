//! Single-line numeric text field backed by `tui-textarea`.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use tui_textarea::{CursorMove, TextArea};

use crate::operand::is_number_char;

/// Text field that only accepts characters a number literal can contain.
#[derive(Debug, Clone)]
pub struct OperandInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> OperandInput<'a> {
	pub fn new(placeholder: impl Into<String>) -> Self {
		let mut textarea = TextArea::default();
		textarea.set_cursor_line_style(Style::default());
		textarea.set_placeholder_text(placeholder);
		Self { textarea }
	}

	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or_default()
	}

	/// Replace the contents and park the cursor at the end.
	pub fn set_text(&mut self, text: &str) {
		if self.text() == text {
			return;
		}
		let mut textarea = TextArea::new(vec![text.to_string()]);
		textarea.set_cursor_line_style(self.textarea.cursor_line_style());
		textarea.set_cursor_style(self.textarea.cursor_style());
		textarea.set_placeholder_text(self.textarea.placeholder_text());
		textarea.set_placeholder_style(self.textarea.placeholder_style().unwrap_or_default());
		if let Some(block) = self.textarea.block() {
			textarea.set_block(block.clone());
		}
		textarea.move_cursor(CursorMove::End);
		self.textarea = textarea;
	}

	/// Forward a key press. Returns `true` when the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if !accepts(&key) {
			return false;
		}
		self.textarea.input(key)
	}

	pub fn set_block(&mut self, block: Block<'a>) {
		self.textarea.set_block(block);
	}

	pub fn set_placeholder_style(&mut self, style: Style) {
		self.textarea.set_placeholder_style(style);
	}

	/// Show or hide the cursor cell.
	pub fn set_cursor_visible(&mut self, visible: bool) {
		let style = if visible {
			Style::default().add_modifier(Modifier::REVERSED)
		} else {
			Style::default()
		};
		self.textarea.set_cursor_style(style);
	}

	pub fn widget(&self) -> &TextArea<'a> {
		&self.textarea
	}
}

fn accepts(key: &KeyEvent) -> bool {
	match key.code {
		KeyCode::Enter | KeyCode::Tab => false,
		KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => {
			// Ctrl+M and Ctrl+J would insert a line break.
			!matches!(key.code, KeyCode::Char('m' | 'j'))
		}
		KeyCode::Char(ch) => is_number_char(ch),
		_ => true,
	}
}
