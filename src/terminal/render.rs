use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use super::App;
use super::app::Focus;
use super::chips::{chip_label, layout_chips, rows_needed};
use crate::guidelines::Annotation;

const INPUT_HINT: &str = "Enter go · Tab divisors · Esc quit";
/// Rows taken by everything except the chips and the guideline notes.
const FIXED_ROWS: u16 = 9;
const CHIP_HINT: &str = "←/→ move · Enter select · Tab input · Esc quit";

impl App<'_> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 1,
			horizontal: 2,
		});

		let border_style = if self.focus == Focus::Chips {
			self.theme.idle
		} else {
			self.theme.prompt
		};
		self.input.set_block(
			Block::bordered()
				.border_style(border_style)
				.title_bottom(Line::from(" Enter: Go ").right_aligned()),
		);

		let view = self.controller.view();
		let chip_rows = rows_needed(view.divisors, area.width)
			.clamp(1, area.height.saturating_sub(FIXED_ROWS).max(1));
		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Length(3),
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Length(chip_rows),
				Constraint::Length(1),
				Constraint::Min(0),
				Constraint::Length(1),
			])
			.split(area);

		let heading = Paragraph::new(self.labels.title.as_str())
			.style(self.theme.heading)
			.alignment(Alignment::Center);
		frame.render_widget(heading, layout[0]);

		self.input_area = Some(layout[2]);
		frame.render_widget(self.input.widget(), layout[2]);

		let message = self.status.unwrap_or(self.validity_message);
		frame.render_widget(
			Paragraph::new(message).style(self.theme.invalid),
			layout[3],
		);

		if view.divisors.is_empty() {
			self.chip_slots.clear();
			let empty = Paragraph::new(self.labels.empty_message.as_str())
				.style(self.theme.empty)
				.alignment(Alignment::Center);
			frame.render_widget(empty, layout[5]);
		} else {
			self.chip_slots = layout_chips(view.divisors, layout[5]);
			self.selected_chip = self
				.selected_chip
				.min(self.chip_slots.len().saturating_sub(1));
			for (index, slot) in self.chip_slots.iter().enumerate() {
				let style = if self.focus == Focus::Chips && index == self.selected_chip {
					self.theme.chip_selected
				} else {
					self.theme.chip
				};
				frame.render_widget(
					Paragraph::new(chip_label(slot.divisor)).style(style),
					slot.area,
				);
			}
		}

		if !view.annotations.is_empty() {
			self.render_guidelines(frame, layout[6], layout[7], &view.annotations);
		}

		let hint = if self.focus == Focus::Chips {
			CHIP_HINT
		} else {
			INPUT_HINT
		};
		frame.render_widget(
			Paragraph::new(hint)
				.style(self.theme.hint)
				.alignment(Alignment::Center),
			layout[8],
		);
	}

	fn render_guidelines(
		&self,
		frame: &mut Frame,
		rule_area: Rect,
		area: Rect,
		annotations: &[Annotation<'_>],
	) {
		let rule = "─".repeat(rule_area.width as usize);
		frame.render_widget(Paragraph::new(rule).style(self.theme.idle), rule_area);

		let lines: Vec<Line> = annotations
			.iter()
			.map(|annotation| {
				Line::from(vec![
					Span::styled(format!("{}:", annotation.divisor), self.theme.guideline_key),
					Span::raw(" "),
					Span::styled(annotation.text, self.theme.guideline_text),
				])
			})
			.collect();
		frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
	}
}
