pub mod design;
pub mod palette;
pub mod pattern;

pub use design::{ConfigError, DesignParams};
pub use palette::ColorScheme;
pub use pattern::PatternKind;
