use crate::error::{Result, TrackerError};
use crate::modules::InputModule;
use crate::settings::InputSettings;

use opencv::core::Mat;
use opencv::prelude::*;
use opencv::videoio::{self, VideoCapture};

/// Live capture from a camera device. A failed or empty read ends the stream.
pub struct Camera {
	cap: VideoCapture,
	device: i32,
}

impl InputModule for Camera {
	fn run(&mut self) -> Result<Option<Mat>> {
		let mut frame = Mat::default();
		let ok = self
			.cap
			.read(&mut frame)
			.map_err(|e| TrackerError::FrameRead(format!("camera {}: {}", self.device, e.message)))?;
		if !ok || frame.size()?.width == 0 {
			log::warn!("camera {} returned no frame", self.device);
			return Ok(None);
		}
		Ok(Some(frame))
	}
}

impl Camera {
	pub fn open(settings: &InputSettings) -> Result<Self> {
		let device = settings.device;
		let mut cap = VideoCapture::new(device, videoio::CAP_ANY)
			.map_err(|e| TrackerError::SourceUnavailable(format!("camera {}: {}", device, e.message)))?;
		if !cap.is_opened()? {
			return Err(TrackerError::SourceUnavailable(format!("camera {}", device)));
		}

		if let Some(width) = settings.width {
			cap.set(videoio::CAP_PROP_FRAME_WIDTH, width as f64)?;
		}
		if let Some(height) = settings.height {
			cap.set(videoio::CAP_PROP_FRAME_HEIGHT, height as f64)?;
		}
		if let Some(fps) = settings.fps {
			cap.set(videoio::CAP_PROP_FPS, fps as f64)?;
		}

		log::info!(
			"camera {} opened at {}x{}",
			device,
			cap.get(videoio::CAP_PROP_FRAME_WIDTH)?,
			cap.get(videoio::CAP_PROP_FRAME_HEIGHT)?
		);
		Ok(Self { cap, device })
	}
}
