use serde::Deserialize;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Result, TrackerError};
use crate::modules::threshold::{ColorRange, ColorSpace};

pub const DEFAULT_SETTINGS_FILE: &str = "colortrack.toml";
pub const SETTINGS_ENV: &str = "COLORTRACK_CONFIG";

/// Tuning values for a tracking session. Every field falls back to the
/// tracker's fixed constants, so an empty or missing file is valid.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
	pub input: InputSettings,
	pub threshold: ThresholdSettings,
	pub filter: FilterSettings,
	pub output: OutputSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct InputSettings {
	pub image: PathBuf,
	pub device: i32,
	pub width: Option<u32>,
	pub height: Option<u32>,
	pub fps: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThresholdSettings {
	pub color_space: ColorSpace,
	/// lowA, highA, lowB, highB, lowC, highC
	pub bounds: [u8; 6],
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FilterSettings {
	pub kernel_size: i32,
	pub min_area: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
	pub frame_delay_ms: i32,
	pub trail_thickness: i32,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			input: InputSettings::default(),
			threshold: ThresholdSettings::default(),
			filter: FilterSettings::default(),
			output: OutputSettings::default(),
		}
	}
}

impl Default for InputSettings {
	fn default() -> Self {
		Self {
			image: PathBuf::from("test.jpg"),
			device: 0,
			width: None,
			height: None,
			fps: None,
		}
	}
}

impl Default for ThresholdSettings {
	fn default() -> Self {
		Self {
			color_space: ColorSpace::Bgr,
			bounds: ColorRange::FULL.to_bounds(),
		}
	}
}

impl Default for FilterSettings {
	fn default() -> Self {
		Self {
			kernel_size: 5,
			min_area: 10000.,
		}
	}
}

impl Default for OutputSettings {
	fn default() -> Self {
		Self {
			frame_delay_ms: 33,
			trail_thickness: 2,
		}
	}
}

impl ThresholdSettings {
	pub fn initial_range(&self) -> ColorRange {
		ColorRange::from_bounds(self.bounds)
	}
}

impl Settings {
	pub fn from_toml(content: &str) -> Result<Self> {
		let settings: Settings = toml::from_str(content)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Reads `path`, or returns the defaults when it does not exist.
	pub fn load(path: &Path) -> Result<Self> {
		match fs::read_to_string(path) {
			Ok(content) => {
				log::info!("loading settings from {}", path.display());
				Self::from_toml(&content)
			}
			Err(err) if err.kind() == ErrorKind::NotFound => {
				log::debug!("{} not found, using default settings", path.display());
				Ok(Self::default())
			}
			Err(err) => Err(TrackerError::Config(format!("{}: {}", path.display(), err))),
		}
	}

	pub fn load_default() -> Result<Self> {
		let path = std::env::var_os(SETTINGS_ENV)
			.map(PathBuf::from)
			.unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE));
		Self::load(&path)
	}

	fn validate(&self) -> Result<()> {
		if self.filter.kernel_size < 1 {
			return Err(TrackerError::Config(format!("filter.kernel_size must be positive, got {}", self.filter.kernel_size)));
		}
		if !self.filter.min_area.is_finite() || self.filter.min_area < 0. {
			return Err(TrackerError::Config(format!("filter.min_area must be a non-negative number, got {}", self.filter.min_area)));
		}
		if self.output.frame_delay_ms < 1 {
			return Err(TrackerError::Config(format!("output.frame_delay_ms must be positive, got {}", self.output.frame_delay_ms)));
		}
		if self.output.trail_thickness < 1 {
			return Err(TrackerError::Config(format!("output.trail_thickness must be positive, got {}", self.output.trail_thickness)));
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	use std::io::Write;

	#[test]
	fn test_defaults_match_tracker_constants() {
		let settings = Settings::default();
		assert_eq!(settings.input.image, PathBuf::from("test.jpg"));
		assert_eq!(settings.input.device, 0);
		assert_eq!(settings.filter.kernel_size, 5);
		assert_eq!(settings.filter.min_area, 10000.);
		assert_eq!(settings.output.frame_delay_ms, 33);
		assert_eq!(settings.output.trail_thickness, 2);
		assert_eq!(settings.threshold.bounds, [0, 255, 0, 255, 0, 255]);
		assert_eq!(settings.threshold.color_space, ColorSpace::Bgr);
	}

	#[test]
	fn test_partial_file_keeps_other_defaults() {
		let settings = Settings::from_toml(
			r#"
			[input]
			image = "ball.png"

			[threshold]
			color_space = "hsv"
			bounds = [0, 94, 0, 36, 150, 255]
			"#,
		)
		.unwrap();
		assert_eq!(settings.input.image, PathBuf::from("ball.png"));
		assert_eq!(settings.threshold.color_space, ColorSpace::Hsv);
		assert_eq!(settings.threshold.initial_range(), ColorRange::from_bounds([0, 94, 0, 36, 150, 255]));
		assert_eq!(settings.filter, FilterSettings::default());
	}

	#[test]
	fn test_malformed_file_is_config_error() {
		let err = Settings::from_toml("[filter]\nkernel_size = \"big\"").unwrap_err();
		assert!(matches!(err, TrackerError::Config(_)));
	}

	#[test]
	fn test_zero_kernel_rejected() {
		let err = Settings::from_toml("[filter]\nkernel_size = 0").unwrap_err();
		assert!(err.to_string().contains("kernel_size"));
	}

	#[test]
	fn test_negative_min_area_rejected() {
		let err = Settings::from_toml("[filter]\nmin_area = -1.0").unwrap_err();
		assert!(err.to_string().contains("min_area"));
	}

	#[test]
	fn test_nan_min_area_rejected() {
		let err = Settings::from_toml("[filter]\nmin_area = nan").unwrap_err();
		assert!(matches!(err, TrackerError::Config(_)));
	}

	#[test]
	fn test_env_var_overrides_settings_path() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "[input]\ndevice = 3").unwrap();
		std::env::set_var(SETTINGS_ENV, file.path());
		let settings = Settings::load_default();
		std::env::remove_var(SETTINGS_ENV);
		assert_eq!(settings.unwrap().input.device, 3);
	}

	#[test]
	fn test_missing_file_uses_defaults() {
		let dir = tempfile::tempdir().unwrap();
		let settings = Settings::load(&dir.path().join("absent.toml")).unwrap();
		assert_eq!(settings, Settings::default());
	}

	#[test]
	fn test_load_reads_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "[output]\nframe_delay_ms = 50").unwrap();
		let settings = Settings::load(file.path()).unwrap();
		assert_eq!(settings.output.frame_delay_ms, 50);
		assert_eq!(settings.output.trail_thickness, 2);
	}
}
