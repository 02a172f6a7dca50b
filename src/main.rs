mod error;
mod modules;
mod session;
mod settings;

use crate::error::Result;
use crate::modules::control::Terminal;
use crate::modules::output::HighGui;
use crate::modules::InputModule;
use crate::session::Session;
use crate::settings::Settings;

use std::process;

#[cfg(feature = "camera")]
fn open_input(settings: &Settings) -> Result<Box<dyn InputModule>> {
	use crate::modules::input::Camera;
	Ok(Box::new(Camera::open(&settings.input)?))
}

#[cfg(not(feature = "camera"))]
fn open_input(settings: &Settings) -> Result<Box<dyn InputModule>> {
	use crate::modules::input::StillImage;
	Ok(Box::new(StillImage::open(&settings.input.image)?))
}

fn run() -> Result<()> {
	let settings = Settings::load_default()?;

	let input = open_input(&settings)?;
	let keys = Box::new(Terminal::new());
	let output = Box::new(HighGui::new(settings.threshold.color_space, &settings.threshold.initial_range())?);

	let mut session = Session::new(&settings, input, keys, output)?;
	log::info!("tracking in {:?} with range {}", settings.threshold.color_space, session.range());
	session.run()?;
	Ok(())
}

// Main
fn main() {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	if let Err(err) = run() {
		log::error!("{}", err);
		eprintln!("{}", err);
		process::exit(-1);
	}
}
