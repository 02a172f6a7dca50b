use opencv::core::{Mat, Point, Size, BORDER_CONSTANT};
use opencv::imgproc;

use crate::error::Result;

/// Mask Cleaner: opening (erode, dilate) to drop speckles, then closing
/// (dilate, erode) to fill pinholes, all with one elliptical kernel.
pub struct Morphology {
	kernel: Mat,
}

impl Morphology {
	pub fn new(kernel_size: i32) -> Result<Self> {
		let kernel = imgproc::get_structuring_element(imgproc::MORPH_ELLIPSE, Size::new(kernel_size, kernel_size), Point::new(-1, -1))?;
		Ok(Self { kernel })
	}

	pub fn run(&self, mask: &Mat) -> Result<Mat> {
		let opened = self.dilate(&self.erode(mask)?)?;
		self.erode(&self.dilate(&opened)?)
	}

	fn erode(&self, src: &Mat) -> Result<Mat> {
		let mut dst = Mat::default();
		imgproc::erode(src, &mut dst, &self.kernel, Point::new(-1, -1), 1, BORDER_CONSTANT, imgproc::morphology_default_border_value()?)?;
		Ok(dst)
	}

	fn dilate(&self, src: &Mat) -> Result<Mat> {
		let mut dst = Mat::default();
		imgproc::dilate(src, &mut dst, &self.kernel, Point::new(-1, -1), 1, BORDER_CONSTANT, imgproc::morphology_default_border_value()?)?;
		Ok(dst)
	}
}
