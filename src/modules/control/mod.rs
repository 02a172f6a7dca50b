pub mod presets;
pub mod terminal;

pub use presets::{Preset, PRESETS};
pub use terminal::Terminal;
