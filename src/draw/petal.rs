// src/draw/petal.rs
// The four petal path generators. Each one starts and ends pen-down and
// leaves the pen at a fixed net offset from its entry pose, so the
// composer can place petals by pure rotation between calls. Internal
// detail strokes save and restore the pen pose so they never shift that
// net offset.

use crate::draw::turtle::Turtle;
use crate::models::pattern::PatternKind;

const OUTLINE_WEIGHT: f32 = 2.0;
const DETAIL_WEIGHT: f32 = 1.0;
const SPIRAL_TURNS: u32 = 15;

/// Draw one petal of the chosen pattern at the current pen pose.
/// A non-positive size degenerates to a zero-length path: nothing is
/// drawn and the pen does not move.
pub fn draw_petal(turtle: &mut Turtle, pattern: PatternKind, size: f32) {
    if size <= 0.0 {
        return;
    }

    match pattern {
        PatternKind::Classic => classic(turtle, size),
        PatternKind::Curved => curved(turtle, size),
        PatternKind::Pointed => pointed(turtle, size),
        PatternKind::Spiral => spiral(turtle, size),
    }
}

/// Lens-shaped outline from two 60° arcs, with three vein strokes inside.
fn classic(turtle: &mut Turtle, size: f32) {
    turtle.set_pen_width(OUTLINE_WEIGHT);
    for _ in 0..2 {
        turtle.arc(size, 60.0);
        turtle.turn_left(120.0);
    }

    turtle.with_pose_restored(|t| {
        t.set_pen_width(DETAIL_WEIGHT);
        t.forward(size / 2.0);
        t.backward(size / 2.0);
        t.turn_left(30.0);
        t.forward(size / 3.0);
        t.backward(size / 3.0);
        t.turn_right(60.0);
        t.forward(size / 3.0);
        t.backward(size / 3.0);
    });
}

/// Flowing outline with an inner loop. The loop is drawn between the two
/// outer arcs and fully restored, so only the outer arcs displace the pen.
fn curved(turtle: &mut Turtle, size: f32) {
    turtle.set_pen_width(OUTLINE_WEIGHT);
    turtle.arc(size, 60.0);

    turtle.with_pose_restored(|t| {
        t.turn_left(30.0);
        t.arc(size * 0.7, 60.0);
        t.turn_left(120.0);
        t.arc(size * 0.7, 60.0);
    });

    turtle.turn_left(120.0);
    turtle.arc(size, 60.0);
}

/// Bilaterally symmetric petal with a sharp tip. The negative-radius arc
/// at the apex curves against the outline to form the point. The whole
/// sequence is the net path; there is nothing to restore.
fn pointed(turtle: &mut Turtle, size: f32) {
    turtle.set_pen_width(OUTLINE_WEIGHT);
    turtle.arc(size, 45.0);
    turtle.turn_left(90.0);
    turtle.forward(size * 1.2);
    turtle.turn_left(135.0);
    turtle.arc(-size / 2.0, 90.0);
    turtle.turn_left(135.0);
    turtle.forward(size * 1.2);
    turtle.turn_left(90.0);
    turtle.arc(size, 45.0);
}

/// Tightening spiral of shrinking arcs and stroke widths, finished with a
/// small three-arc core drawn at the post-spiral heading and restored.
fn spiral(turtle: &mut Turtle, size: f32) {
    let base_size = size * 0.8;
    turtle.set_pen_width(OUTLINE_WEIGHT);
    for i in 0..SPIRAL_TURNS {
        let ratio = (SPIRAL_TURNS - i) as f32 / SPIRAL_TURNS as f32;
        turtle.set_pen_width(OUTLINE_WEIGHT * ratio);
        turtle.arc(base_size * ratio, 30.0);
        turtle.turn_left(15.0);
    }

    turtle.set_pen_width(DETAIL_WEIGHT);
    turtle.with_pose_restored(|t| {
        for _ in 0..3 {
            t.arc(size / 4.0, 120.0);
        }
    });
}
