// src/models/palette.rs
// Fixed color scheme tables. Schemes are selected by index from the
// keyboard (1-4) or by name from config.toml; petal colors cycle through
// the scheme by petal index.

use nannou::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    pub name: &'static str,
    colors: &'static [(u8, u8, u8)],
}

const RAINBOW: &[(u8, u8, u8)] = &[
    (255, 0, 0),     // red
    (255, 165, 0),   // orange
    (255, 255, 0),   // yellow
    (0, 128, 0),     // green
    (0, 0, 255),     // blue
    (75, 0, 130),    // indigo
    (238, 130, 238), // violet
];

const SUNSET: &[(u8, u8, u8)] = &[
    (0xFF, 0x7F, 0x50),
    (0xFF, 0x6B, 0x6B),
    (0xFF, 0xA0, 0x7A),
    (0xFF, 0xD7, 0x00),
    (0xFF, 0x45, 0x00),
];

const OCEAN: &[(u8, u8, u8)] = &[
    (0x00, 0xFF, 0xFF),
    (0x00, 0xCE, 0xD1),
    (0x20, 0xB2, 0xAA),
    (0x48, 0xD1, 0xCC),
    (0x40, 0xE0, 0xD0),
];

const FOREST: &[(u8, u8, u8)] = &[
    (0x22, 0x8B, 0x22),
    (0x32, 0xCD, 0x32),
    (0x90, 0xEE, 0x90),
    (0x98, 0xFB, 0x98),
    (0x3C, 0xB3, 0x71),
];

pub const SCHEMES: [ColorScheme; 4] = [
    ColorScheme {
        name: "rainbow",
        colors: RAINBOW,
    },
    ColorScheme {
        name: "sunset",
        colors: SUNSET,
    },
    ColorScheme {
        name: "ocean",
        colors: OCEAN,
    },
    ColorScheme {
        name: "forest",
        colors: FOREST,
    },
];

pub fn scheme(index: usize) -> Option<&'static ColorScheme> {
    SCHEMES.get(index)
}

pub fn scheme_index(name: &str) -> Option<usize> {
    SCHEMES.iter().position(|s| s.name == name)
}

impl ColorScheme {
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color for petal `index`, cycling through the scheme.
    pub fn color(&self, index: usize) -> Rgb<f32> {
        let (r, g, b) = self.colors[index % self.colors.len()];
        rgb(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
        )
    }
}
