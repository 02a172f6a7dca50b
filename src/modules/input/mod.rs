#[cfg(feature = "camera")]
pub mod camera;
pub mod still;

#[cfg(feature = "camera")]
pub use camera::Camera;
pub use still::StillImage;
