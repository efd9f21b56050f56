// src/effects/glitter.rs
// Sparkle overlay: small white dots scattered around the current pen
// position. Purely decorative; the pen pose is restored exactly so the
// surrounding path is unaffected.

use nannou::prelude::*;
use rand::Rng;

use crate::draw::turtle::Turtle;

pub const SPARK_COUNT: usize = 3;
pub const JITTER_RANGE: i32 = 10;
const DOT_RADIUS: f32 = 2.0;

/// Stamp `count` dots at uniform integer offsets within ±`jitter` of the
/// current position, then return the pen to its original position and
/// heading and lower it.
pub fn scatter<R: Rng>(turtle: &mut Turtle, rng: &mut R, count: usize, jitter: i32) {
    let origin = turtle.pose();

    turtle.pen_up();
    for _ in 0..count {
        let offset_x = rng.gen_range(-jitter..=jitter) as f32;
        let offset_y = rng.gen_range(-jitter..=jitter) as f32;
        turtle.goto(origin.position + vec2(offset_x, offset_y));
        turtle.dot(DOT_RADIUS, rgb(1.0, 1.0, 1.0));
    }

    turtle.goto(origin.position);
    turtle.set_heading(origin.heading);
    turtle.pen_down();
}
