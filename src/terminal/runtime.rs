//! Application runtime and event loop.

use std::io::stdout;
use std::time::Duration;

use anyhow::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{
	self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use ratatui::crossterm::execute;
use tracing::debug;

use super::App;
use crate::outcome::Outcome;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

impl<'a> App<'a> {
	/// Take over the terminal and pump events until the user exits.
	pub fn run(&mut self) -> Result<Outcome> {
		let mut terminal = ratatui::init();
		terminal.clear()?;
		execute!(stdout(), EnableMouseCapture)?;

		self.mount();
		let result = self.event_loop(&mut terminal);

		ratatui::restore();
		execute!(stdout(), DisableMouseCapture)?;

		result
	}

	fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<Outcome> {
		loop {
			terminal.draw(|frame| self.draw(frame))?;

			if !event::poll(POLL_INTERVAL)? {
				continue;
			}

			match event::read()? {
				Event::Key(key) if key.kind == KeyEventKind::Press => {
					if let Some(outcome) = self.handle_key(key) {
						debug!(input = %outcome.input, "session closed");
						return Ok(outcome);
					}
				}
				Event::Mouse(mouse) => self.handle_mouse(mouse),
				_ => {}
			}
		}
	}
}
