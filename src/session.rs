use crate::error::Result;
use crate::modules::control::Preset;
use crate::modules::filter::{Morphology, Moments};
use crate::modules::output::Trail;
use crate::modules::threshold::{ColorRange, InRange};
use crate::modules::{InputModule, KeyModule, OutputModule, KEY_ESCAPE};
use crate::settings::Settings;

use opencv::core::Point;
use opencv::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
	Running,
	Terminated(Exit),
}

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
	Escape,
	EndOfStream,
	ReadFailed,
}

/// Everything that survives from one iteration to the next.
pub struct Session {
	input: Box<dyn InputModule>,
	keys: Box<dyn KeyModule>,
	output: Box<dyn OutputModule>,

	segmenter: InRange,
	cleaner: Morphology,
	extractor: Moments,
	trail: Trail,

	range: ColorRange,
	frame_delay_ms: i32,
	state: State,
}

impl Session {
	pub fn new(settings: &Settings, input: Box<dyn InputModule>, keys: Box<dyn KeyModule>, output: Box<dyn OutputModule>) -> Result<Self> {
		Ok(Self {
			input,
			keys,
			output,

			segmenter: InRange::new(settings.threshold.color_space),
			cleaner: Morphology::new(settings.filter.kernel_size)?,
			extractor: Moments::new(settings.filter.min_area),
			trail: Trail::new(settings.output.trail_thickness),

			range: settings.threshold.initial_range(),
			frame_delay_ms: settings.output.frame_delay_ms,
			state: State::Running,
		})
	}

	/// Runs until escape or end of stream, then waits for one last key.
	pub fn run(&mut self) -> Result<Exit> {
		let exit = loop {
			self.step()?;
			if let State::Terminated(exit) = self.state {
				break exit;
			}
		};
		log::info!("tracking stopped: {:?} after {} trail segments", exit, self.trail.segments());

		self.output.wait_key(0)?;
		Ok(exit)
	}

	/// Processes one frame.
	pub fn step(&mut self) -> Result<State> {
		if self.state != State::Running {
			return Ok(self.state);
		}

		let frame = match self.input.run() {
			Ok(Some(frame)) => frame,
			Ok(None) => {
				self.state = State::Terminated(Exit::EndOfStream);
				return Ok(self.state);
			}
			Err(err) => {
				eprintln!("{}", err);
				log::error!("{}", err);
				self.state = State::Terminated(Exit::ReadFailed);
				return Ok(self.state);
			}
		};
		self.trail.ensure_size(frame.size()?)?;

		self.range = self.output.read_range(&self.range)?;
		self.apply_preset_key()?;
		if self.range.is_inverted() {
			log::trace!("range {} is inverted, mask will be empty", self.range);
		}

		let mask = self.segmenter.run(&frame, &self.range)?;
		let cleaned = self.cleaner.run(&mask)?;

		let centroid = self.extractor.run(&cleaned)?;
		if let Some((from, to)) = self.trail.update(centroid)? {
			log::debug!("trail ({}, {}) -> ({}, {})", from.x, from.y, to.x, to.y);
		}

		self.output.show_mask(&cleaned)?;
		self.output.show_frame(&frame)?;

		if self.output.wait_key(self.frame_delay_ms)? == Some(KEY_ESCAPE) {
			self.state = State::Terminated(Exit::Escape);
		}
		Ok(self.state)
	}

	fn apply_preset_key(&mut self) -> Result<()> {
		let key = match self.keys.poll() {
			Ok(Some(key)) => key,
			Ok(None) => return Ok(()),
			Err(err) => {
				log::debug!("key poll failed: {}", err);
				return Ok(());
			}
		};

		if let Some(preset) = Preset::for_key(key) {
			self.range = preset.range;
			self.output.show_range(&self.range)?;
			log::info!("preset {} {}", preset.name, self.range);

			println!();
			println!("{}", preset.name);
			println!("{}", position_notice(self.trail.last()));
		}
		Ok(())
	}

	pub fn range(&self) -> ColorRange {
		self.range
	}

	#[cfg(test)]
	pub fn state(&self) -> State {
		self.state
	}

	#[cfg(test)]
	pub fn trail(&self) -> &Trail {
		&self.trail
	}
}

/// Last known centroid, -1 in both coordinates before the first one.
fn position_notice(last: Option<Point>) -> String {
	let last = last.unwrap_or(Point::new(-1, -1));
	format!("X: {}\nY: {}", last.x, last.y)
}
