use crate::error::Result;

use opencv::core::{Mat, Point, Scalar, Size, CV_8UC3};
use opencv::imgproc;
use opencv::prelude::*;

/// Trail Renderer. The canvas accumulates for the whole session and is
/// sized from the first frame it sees.
pub struct Trail {
	canvas: Mat,
	last: Option<Point>,
	thickness: i32,
	segments: usize,
}

impl Trail {
	pub fn new(thickness: i32) -> Self {
		Self {
			canvas: Mat::default(),
			last: None,
			thickness,
			segments: 0,
		}
	}

	/// Allocates a zeroed canvas the first time it is called.
	pub fn ensure_size(&mut self, size: Size) -> Result<()> {
		if self.canvas.size()?.width == 0 {
			self.canvas = Mat::new_size_with_default(size, CV_8UC3, Scalar::all(0.))?;
		}
		Ok(())
	}

	/// Draws from the last centroid to `current` and remembers `current`.
	/// An absent centroid draws nothing and keeps the last one.
	pub fn update(&mut self, current: Option<Point>) -> Result<Option<(Point, Point)>> {
		let pos = match current {
			Some(pos) => pos,
			None => return Ok(None),
		};

		let mut drawn = None;
		if let Some(last) = self.last {
			if last.x >= 0 && last.y >= 0 && pos.x >= 0 && pos.y >= 0 {
				// BGR red
				imgproc::line(&mut self.canvas, last, pos, Scalar::new(0., 0., 255., 0.), self.thickness, imgproc::LINE_8, 0)?;
				self.segments += 1;
				drawn = Some((last, pos));
			}
		}
		self.last = Some(pos);
		Ok(drawn)
	}

	pub fn last(&self) -> Option<Point> {
		self.last
	}

	pub fn segments(&self) -> usize {
		self.segments
	}

	#[cfg(test)]
	pub fn canvas(&self) -> &Mat {
		&self.canvas
	}
}
