use opencv::core::{Mat, Point};
use opencv::imgproc;

use crate::error::Result;

pub const NOISE_FLOOR_AREA: f64 = 10000.;

/// Centroid Extractor over a cleaned mask.
pub struct Moments {
	min_area: f64,
}

impl Moments {
	pub fn new(min_area: f64) -> Self {
		Self { min_area }
	}

	/// The mask centroid, or `None` when the in-range pixel count does not
	/// exceed the noise floor.
	pub fn run(&self, mask: &Mat) -> Result<Option<Point>> {
		// binary: every non-zero pixel weighs 1, so m00 is the pixel count
		let m = imgproc::moments(mask, true)?;
		log::trace!("mask area {}", m.m00);
		if self.min_area.is_nan() || m.m00 <= self.min_area {
			return Ok(None);
		}

		let area = m.m00 as i64;
		if area == 0 {
			return Ok(None);
		}
		let pos_x = m.m10 as i64 / area;
		let pos_y = m.m01 as i64 / area;
		Ok(Some(Point::new(pos_x as i32, pos_y as i32)))
	}
}

impl Default for Moments {
	fn default() -> Self {
		Self::new(NOISE_FLOOR_AREA)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	use opencv::core::{Rect, Scalar, CV_8UC1};

	fn mask_with(rect: Rect, rows: i32, cols: i32) -> Mat {
		let mut mask = Mat::new_rows_cols_with_default(rows, cols, CV_8UC1, Scalar::all(0.)).unwrap();
		imgproc::rectangle(&mut mask, rect, Scalar::all(255.), imgproc::FILLED, imgproc::LINE_8, 0).unwrap();
		mask
	}

	#[test]
	fn test_rectangle_centroid_truncates() {
		// 200x150 = 30000 pixels, center at (149.5, 124.5)
		let mask = mask_with(Rect::new(50, 50, 200, 150), 300, 400);
		let centroid = Moments::default().run(&mask).unwrap();
		assert_eq!(centroid, Some(Point::new(149, 124)));
	}

	#[test]
	fn test_area_at_noise_floor_is_absent() {
		let mask = mask_with(Rect::new(0, 0, 100, 100), 300, 400);
		assert_eq!(Moments::default().run(&mask).unwrap(), None);
	}

	#[test]
	fn test_area_just_above_noise_floor_is_present() {
		let mask = mask_with(Rect::new(0, 0, 100, 101), 300, 400);
		assert_eq!(Moments::default().run(&mask).unwrap(), Some(Point::new(49, 50)));
	}

	#[test]
	fn test_empty_mask_is_absent() {
		let mask = Mat::new_rows_cols_with_default(300, 400, CV_8UC1, Scalar::all(0.)).unwrap();
		assert_eq!(Moments::default().run(&mask).unwrap(), None);
	}

	#[test]
	fn test_negative_floor_with_empty_mask_is_absent() {
		let mask = Mat::new_rows_cols_with_default(20, 20, CV_8UC1, Scalar::all(0.)).unwrap();
		assert_eq!(Moments::new(-1.).run(&mask).unwrap(), None);
		assert_eq!(Moments::new(f64::NAN).run(&mask).unwrap(), None);
	}

	#[test]
	fn test_custom_floor() {
		let mask = mask_with(Rect::new(10, 20, 10, 10), 100, 100);
		assert_eq!(Moments::new(50.).run(&mask).unwrap(), Some(Point::new(14, 24)));
	}
}
