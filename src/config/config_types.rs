// src/config/config_types.rs

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Deserialize)]
pub struct RenderConfig {
    pub texture_width: u32,
    pub texture_height: u32,
    pub texture_samples: u32,
}

/// Startup values for the design parameters. Scheme and pattern are given
/// by name here and resolved to runtime ids when the session starts.
#[derive(Debug, Deserialize)]
pub struct DesignConfig {
    pub size: f32,
    pub petal_count: u32,
    pub color_scheme: String,
    pub pattern: String,
    pub embellish: bool,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    pub directory: String,
    pub prefix: String,
}
