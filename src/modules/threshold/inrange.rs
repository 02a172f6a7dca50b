use opencv::core::{self, Mat};
use opencv::imgproc;

use crate::error::Result;
use crate::modules::threshold::{ColorRange, ColorSpace};

/// Color Segmenter: marks pixels whose every channel lies inside the range.
pub struct InRange {
	color_space: ColorSpace,
}

impl InRange {
	pub fn new(color_space: ColorSpace) -> Self {
		Self { color_space }
	}

	/// Returns a single channel mask, 255 where in range and 0 elsewhere.
	pub fn run(&self, frame: &Mat, range: &ColorRange) -> Result<Mat> {
		let mut mask = Mat::default();
		match self.color_space {
			ColorSpace::Bgr => {
				core::in_range(frame, &range.lower(), &range.upper(), &mut mask)?;
			}
			ColorSpace::Hsv => {
				let mut hsv = Mat::default();
				imgproc::cvt_color(frame, &mut hsv, imgproc::COLOR_BGR2HSV, 0)?;
				core::in_range(&hsv, &range.lower(), &range.upper(), &mut mask)?;
			}
		}
		Ok(mask)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	use opencv::core::{Rect, Scalar, CV_8UC3};
	use opencv::prelude::*;

	fn frame_with_block(bg: Scalar, fg: Scalar) -> Mat {
		let mut frame = Mat::new_rows_cols_with_default(40, 60, CV_8UC3, bg).unwrap();
		imgproc::rectangle(&mut frame, Rect::new(10, 10, 20, 10), fg, imgproc::FILLED, imgproc::LINE_8, 0).unwrap();
		frame
	}

	#[test]
	fn test_mask_marks_in_range_pixels() {
		let frame = frame_with_block(Scalar::all(0.), Scalar::new(20., 10., 200., 0.));
		let red = ColorRange::from_bounds([0, 94, 0, 36, 150, 255]);
		let mask = InRange::new(ColorSpace::Bgr).run(&frame, &red).unwrap();
		assert_eq!(mask.rows(), 40);
		assert_eq!(mask.cols(), 60);
		assert_eq!(core::count_non_zero(&mask).unwrap(), 200);
		assert_eq!(*mask.at_2d::<u8>(15, 15).unwrap(), 255);
		assert_eq!(*mask.at_2d::<u8>(0, 0).unwrap(), 0);
	}

	#[test]
	fn test_bounds_are_inclusive() {
		let frame = Mat::new_rows_cols_with_default(4, 4, CV_8UC3, Scalar::new(94., 36., 150., 0.)).unwrap();
		let red = ColorRange::from_bounds([0, 94, 0, 36, 150, 255]);
		let mask = InRange::new(ColorSpace::Bgr).run(&frame, &red).unwrap();
		assert_eq!(core::count_non_zero(&mask).unwrap(), 16);
	}

	#[test]
	fn test_inverted_range_yields_empty_mask() {
		let frame = frame_with_block(Scalar::all(128.), Scalar::all(255.));
		let inverted = ColorRange::from_bounds([0, 255, 200, 100, 0, 255]);
		assert!(inverted.is_inverted());
		let mask = InRange::new(ColorSpace::Bgr).run(&frame, &inverted).unwrap();
		assert_eq!(core::count_non_zero(&mask).unwrap(), 0);
	}

	#[test]
	fn test_hsv_space_converts_before_threshold() {
		// pure BGR red is hue 0, full saturation and value
		let frame = frame_with_block(Scalar::all(0.), Scalar::new(0., 0., 255., 0.));
		let range = ColorRange::from_bounds([0, 5, 200, 255, 200, 255]);
		let mask = InRange::new(ColorSpace::Hsv).run(&frame, &range).unwrap();
		assert_eq!(core::count_non_zero(&mask).unwrap(), 200);
	}
}
