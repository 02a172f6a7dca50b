use crate::error::{Result, TrackerError};
use crate::modules::InputModule;

use opencv::core::Mat;
use opencv::imgcodecs;
use opencv::prelude::*;

use std::path::Path;

/// A decoded still image handed out again on every iteration. Never ends.
pub struct StillImage {
	image: Mat,
}

impl InputModule for StillImage {
	fn run(&mut self) -> Result<Option<Mat>> {
		Ok(Some(self.image.try_clone()?))
	}
}

impl StillImage {
	pub fn open(path: &Path) -> Result<Self> {
		let image = imgcodecs::imread(&path.to_string_lossy(), imgcodecs::IMREAD_COLOR)?;
		if image.size()?.width == 0 {
			return Err(TrackerError::SourceUnavailable(path.display().to_string()));
		}
		log::info!("loaded {} ({}x{})", path.display(), image.cols(), image.rows());
		Ok(Self::from_mat(image))
	}

	pub fn from_mat(image: Mat) -> Self {
		Self { image }
	}
}
