pub mod control;
pub mod filter;
pub mod input;
pub mod output;
pub mod threshold;

use opencv::core::Mat;

use crate::error::Result;
use crate::modules::threshold::ColorRange;

/// Key code the display window reports for escape.
pub const KEY_ESCAPE: i32 = 27;

pub trait InputModule {
	/// Next frame, or `None` once the stream has ended.
	fn run(&mut self) -> Result<Option<Mat>>;
}

/// Non-blocking single keystroke reader feeding the preset controller.
pub trait KeyModule {
	fn poll(&mut self) -> Result<Option<char>>;
}

/// Display windows plus the range control surface.
pub trait OutputModule {
	fn show_mask(&mut self, mask: &Mat) -> Result<()>;
	fn show_frame(&mut self, frame: &Mat) -> Result<()>;

	/// Current control positions; `current` is returned where the surface
	/// has nothing to report.
	fn read_range(&mut self, current: &ColorRange) -> Result<ColorRange>;
	fn show_range(&mut self, range: &ColorRange) -> Result<()>;

	/// Waits up to `delay_ms` (0 waits forever) and returns the key code.
	fn wait_key(&mut self, delay_ms: i32) -> Result<Option<i32>>;
}
