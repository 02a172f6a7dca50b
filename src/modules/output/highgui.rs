use crate::error::Result;
use crate::modules::threshold::{ColorRange, ColorSpace};
use crate::modules::OutputModule;

use opencv::core::Mat;
use opencv::highgui;

pub const CONTROL_WINDOW: &str = "Control";
pub const MASK_WINDOW: &str = "Thresholded";
pub const FRAME_WINDOW: &str = "Original";

const TRACKBAR_MAX: i32 = 255;

/// OpenCV windows: six range trackbars on "Control", the cleaned mask and
/// the raw frame on their own windows.
pub struct HighGui {
	labels: [String; 6],
}

impl OutputModule for HighGui {
	fn show_mask(&mut self, mask: &Mat) -> Result<()> {
		highgui::imshow(MASK_WINDOW, mask)?;
		Ok(())
	}

	fn show_frame(&mut self, frame: &Mat) -> Result<()> {
		highgui::imshow(FRAME_WINDOW, frame)?;
		Ok(())
	}

	fn read_range(&mut self, _current: &ColorRange) -> Result<ColorRange> {
		let mut bounds = [0u8; 6];
		for (bound, label) in bounds.iter_mut().zip(self.labels.iter()) {
			let pos = highgui::get_trackbar_pos(label, CONTROL_WINDOW)?;
			*bound = pos.clamp(0, TRACKBAR_MAX) as u8;
		}
		Ok(ColorRange::from_bounds(bounds))
	}

	fn show_range(&mut self, range: &ColorRange) -> Result<()> {
		for (bound, label) in range.to_bounds().iter().zip(self.labels.iter()) {
			highgui::set_trackbar_pos(label, CONTROL_WINDOW, *bound as i32)?;
		}
		Ok(())
	}

	fn wait_key(&mut self, delay_ms: i32) -> Result<Option<i32>> {
		let key = highgui::wait_key(delay_ms)?;
		Ok(if key < 0 { None } else { Some(key & 0xFF) })
	}
}

impl HighGui {
	pub fn new(color_space: ColorSpace, initial: &ColorRange) -> Result<Self> {
		highgui::named_window(CONTROL_WINDOW, highgui::WINDOW_AUTOSIZE)?;
		let labels = color_space.bound_labels();
		for label in labels.iter() {
			highgui::create_trackbar(label, CONTROL_WINDOW, None, TRACKBAR_MAX, None)?;
		}

		let mut gui = Self { labels };
		gui.show_range(initial)?;
		Ok(gui)
	}
}

impl Drop for HighGui {
	fn drop(&mut self) {
		if let Err(err) = highgui::destroy_all_windows() {
			log::warn!("failed to close windows: {}", err.message);
		}
	}
}
