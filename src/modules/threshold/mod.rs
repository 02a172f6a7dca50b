pub mod inrange;

pub use inrange::InRange;

use opencv::core::Scalar;

use itertools::Itertools;
use serde::Deserialize;

use std::fmt;

/// Inclusive per-channel bounds. `low > high` on a channel is allowed and
/// simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorRange {
	pub low: [u8; 3],
	pub high: [u8; 3],
}

impl ColorRange {
	pub const FULL: ColorRange = ColorRange {
		low: [0, 0, 0],
		high: [255, 255, 255],
	};

	/// Builds a range from `(lowA, highA, lowB, highB, lowC, highC)`.
	pub const fn from_bounds(b: [u8; 6]) -> Self {
		Self {
			low: [b[0], b[2], b[4]],
			high: [b[1], b[3], b[5]],
		}
	}

	pub fn to_bounds(&self) -> [u8; 6] {
		[self.low[0], self.high[0], self.low[1], self.high[1], self.low[2], self.high[2]]
	}

	pub fn lower(&self) -> Scalar {
		Scalar::new(self.low[0] as f64, self.low[1] as f64, self.low[2] as f64, 0.)
	}

	pub fn upper(&self) -> Scalar {
		Scalar::new(self.high[0] as f64, self.high[1] as f64, self.high[2] as f64, 0.)
	}

	pub fn is_inverted(&self) -> bool {
		self.low.iter().zip(self.high.iter()).any(|(l, h)| l > h)
	}
}

impl fmt::Display for ColorRange {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({})", self.to_bounds().iter().join(", "))
	}
}

/// Colour space the segmenter compares bounds in. Frames arrive as BGR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSpace {
	Bgr,
	Hsv,
}

impl ColorSpace {
	pub fn channel_names(&self) -> [&'static str; 3] {
		match self {
			ColorSpace::Bgr => ["B", "G", "R"],
			ColorSpace::Hsv => ["H", "S", "V"],
		}
	}

	/// Trackbar labels in bound order: LowA, HighA, LowB, ...
	pub fn bound_labels(&self) -> [String; 6] {
		let [a, b, c] = self.channel_names();
		[
			format!("Low{}", a),
			format!("High{}", a),
			format!("Low{}", b),
			format!("High{}", b),
			format!("Low{}", c),
			format!("High{}", c),
		]
	}
}
