// src/render/composer.rs
// Radial composition: one flower = petal_count pattern draws, stepped
// clockwise around a full rotation with cyclic scheme colors.

use nannou::prelude::*;
use rand::Rng;

use crate::draw::{draw_petal, Turtle};
use crate::effects::glitter;
use crate::models::design::ConfigError;
use crate::models::{palette, DesignParams};

// The first petal is anchored a fixed distance below center, independent
// of the current petal size.
const START_ANCHOR_Y: f32 = -100.0;

// Glitter lands on every third petal.
const GLITTER_STRIDE: usize = 3;

/// Replace the current drawing with one full flower. Degenerate
/// parameters (non-positive size, zero petals) clear the canvas and
/// return without drawing.
pub fn render_flower<R: Rng>(
    turtle: &mut Turtle,
    params: &DesignParams,
    rng: &mut R,
) -> Result<(), ConfigError> {
    let scheme = palette::scheme(params.color_scheme)
        .ok_or(ConfigError::UnknownScheme(params.color_scheme))?;

    turtle.clear();

    if params.size <= 0.0 || params.petal_count == 0 {
        println!(
            "Nothing to draw: size {} with {} petals",
            params.size, params.petal_count
        );
        return Ok(());
    }

    turtle.pen_up();
    turtle.goto(pt2(0.0, START_ANCHOR_Y));
    turtle.pen_down();

    let rotation_step = 360.0 / params.petal_count as f32;
    for i in 0..params.petal_count as usize {
        turtle.set_pen_color(scheme.color(i));
        draw_petal(turtle, params.pattern, params.size);

        if params.embellish && i % GLITTER_STRIDE == 0 {
            glitter::scatter(turtle, rng, glitter::SPARK_COUNT, glitter::JITTER_RANGE);
        }

        turtle.turn_right(rotation_step);
    }

    Ok(())
}
