use crate::error::Result;
use crate::modules::KeyModule;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::terminal;

use std::io::{self, IsTerminal};
use std::time::Duration;

/// Raw mode for the lifetime of the guard; prior settings come back on drop.
struct RawMode;

impl RawMode {
	fn acquire() -> io::Result<Self> {
		terminal::enable_raw_mode()?;
		Ok(RawMode)
	}
}

impl Drop for RawMode {
	fn drop(&mut self) {
		if let Err(err) = terminal::disable_raw_mode() {
			log::error!("failed to restore terminal mode: {}", err);
		}
	}
}

/// Polls the controlling terminal for a single pending keystroke.
pub struct Terminal {
	interactive: bool,
}

impl KeyModule for Terminal {
	fn poll(&mut self) -> Result<Option<char>> {
		if !self.interactive {
			return Ok(None);
		}

		let _raw = RawMode::acquire()?;
		if !event::poll(Duration::ZERO)? {
			return Ok(None);
		}
		match event::read()? {
			Event::Key(KeyEvent { code: KeyCode::Char(c), kind: KeyEventKind::Press, .. }) => Ok(Some(c)),
			_ => Ok(None),
		}
	}
}

impl Terminal {
	pub fn new() -> Self {
		let interactive = io::stdin().is_terminal();
		if !interactive {
			log::info!("stdin is not a terminal, preset keys disabled");
		}
		Self { interactive }
	}
}

impl Default for Terminal {
	fn default() -> Self {
		Self::new()
	}
}
