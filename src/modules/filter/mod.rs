pub mod morphology;
pub mod moments;

pub use morphology::Morphology;
pub use moments::Moments;
