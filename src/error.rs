use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
	#[error("Could not open or find the input source: {0}")]
	SourceUnavailable(String),

	#[error("Cannot read a frame from the input source: {0}")]
	FrameRead(String),

	#[error("OpenCV error: {0}")]
	OpenCv(String),

	#[error("Terminal error: {0}")]
	Terminal(#[from] std::io::Error),

	#[error("Configuration error: {0}")]
	Config(String),
}

impl From<opencv::Error> for TrackerError {
	fn from(err: opencv::Error) -> Self {
		TrackerError::OpenCv(err.message)
	}
}

impl From<toml::de::Error> for TrackerError {
	fn from(err: toml::de::Error) -> Self {
		TrackerError::Config(err.to_string())
	}
}

pub type Result<T> = std::result::Result<T, TrackerError>;
