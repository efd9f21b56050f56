// src/draw/stroke.rs
//
// Pen output is flattened into StrokeCommands and cached so the full
// drawing can be replayed onto a nannou Draw every frame without
// re-running the turtle.

use nannou::prelude::*;

#[derive(Debug, Clone)]
pub enum StrokeCommand {
    Line {
        start: Point2,
        end: Point2,
        weight: f32,
        color: Rgb<f32>,
    },
    Arc {
        points: Vec<Point2>,
        weight: f32,
        color: Rgb<f32>,
    },
    Dot {
        center: Point2,
        radius: f32,
        color: Rgb<f32>,
    },
}

impl StrokeCommand {
    pub fn draw(&self, draw: &Draw) {
        match self {
            StrokeCommand::Line {
                start,
                end,
                weight,
                color,
            } => {
                draw.line()
                    .start(*start)
                    .end(*end)
                    .stroke_weight(*weight)
                    .color(*color)
                    .caps_round();
            }
            StrokeCommand::Arc {
                points,
                weight,
                color,
            } => {
                for window in points.windows(2) {
                    if let [p1, p2] = window {
                        draw.line()
                            .start(*p1)
                            .end(*p2)
                            .stroke_weight(*weight)
                            .color(*color)
                            .caps_round();
                    }
                }
            }
            StrokeCommand::Dot {
                center,
                radius,
                color,
            } => {
                draw.ellipse()
                    .x_y(center.x, center.y)
                    .radius(*radius)
                    .color(*color);
            }
        }
    }
}
