pub mod highgui;
pub mod trail;

pub use self::highgui::HighGui;
pub use trail::Trail;
