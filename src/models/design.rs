// src/models/design.rs
// Mutable design parameters for the current session, plus the errors a
// bad scheme/pattern selection can produce.

use std::error::Error;
use std::fmt;

use crate::config::DesignConfig;
use crate::models::palette;
use crate::models::pattern::PatternKind;

pub const DEFAULT_SIZE: f32 = 100.0;
pub const DEFAULT_PETAL_COUNT: u32 = 36;
pub const SIZE_FLOOR: f32 = 10.0;
pub const PETAL_COUNT_FLOOR: u32 = 4;

/// Everything the composer needs to draw one flower. Owned by the session
/// controller; read-only during a render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignParams {
    pub size: f32,
    pub petal_count: u32,
    pub color_scheme: usize,
    pub pattern: PatternKind,
    pub embellish: bool,
}

impl Default for DesignParams {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            petal_count: DEFAULT_PETAL_COUNT,
            color_scheme: 0,
            pattern: PatternKind::Classic,
            embellish: false,
        }
    }
}

impl DesignParams {
    /// Resolve the config file's named scheme/pattern into runtime values.
    /// Floors are applied here so a hand-edited config can't start the
    /// session below the controller's minimums.
    pub fn from_config(config: &DesignConfig) -> Result<Self, ConfigError> {
        let color_scheme = palette::scheme_index(&config.color_scheme)
            .ok_or_else(|| ConfigError::UnknownSchemeName(config.color_scheme.clone()))?;
        let pattern = PatternKind::from_name(&config.pattern)
            .ok_or_else(|| ConfigError::UnknownPattern(config.pattern.clone()))?;

        Ok(Self {
            size: config.size.max(SIZE_FLOOR),
            petal_count: config.petal_count.max(PETAL_COUNT_FLOOR),
            color_scheme,
            pattern,
            embellish: config.embellish,
        })
    }
}

#[derive(Debug)]
pub enum ConfigError {
    UnknownScheme(usize),
    UnknownSchemeName(String),
    UnknownPattern(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownScheme(index) => {
                write!(f, "no color scheme at index {}", index)
            }
            ConfigError::UnknownSchemeName(name) => {
                write!(f, "unknown color scheme \"{}\"", name)
            }
            ConfigError::UnknownPattern(name) => {
                write!(f, "unknown petal pattern \"{}\"", name)
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn design_config(scheme: &str, pattern: &str) -> DesignConfig {
        DesignConfig {
            size: 100.0,
            petal_count: 36,
            color_scheme: scheme.to_string(),
            pattern: pattern.to_string(),
            embellish: false,
        }
    }

    #[test]
    fn test_defaults() {
        let params = DesignParams::default();
        assert_eq!(params.size, 100.0);
        assert_eq!(params.petal_count, 36);
        assert_eq!(params.color_scheme, 0);
        assert_eq!(params.pattern, PatternKind::Classic);
        assert!(!params.embellish);
    }

    #[test]
    fn test_from_config_resolves_names() {
        let params = DesignParams::from_config(&design_config("ocean", "spiral")).unwrap();
        assert_eq!(params.color_scheme, 2);
        assert_eq!(params.pattern, PatternKind::Spiral);
    }

    #[test]
    fn test_from_config_rejects_unknown_names() {
        assert!(DesignParams::from_config(&design_config("neon", "classic")).is_err());
        assert!(DesignParams::from_config(&design_config("rainbow", "starburst")).is_err());
    }

    #[test]
    fn test_from_config_applies_floors() {
        let mut config = design_config("rainbow", "classic");
        config.size = 1.0;
        config.petal_count = 2;
        let params = DesignParams::from_config(&config).unwrap();
        assert_eq!(params.size, SIZE_FLOOR);
        assert_eq!(params.petal_count, PETAL_COUNT_FLOOR);
    }
}
