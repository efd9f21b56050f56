// src/draw/turtle.rs
//
// Turtle kinematics over a cached stroke list. Heading is in degrees,
// 0 = +x, counterclockwise positive, y up — the same frame nannou draws
// in, so no coordinate conversion happens anywhere downstream.
//
// Every primitive call is also appended to an op trace so callers can
// assert on exactly what was asked of the pen.

use nannou::prelude::*;

use super::stroke::StrokeCommand;

// Segments per full circle when flattening arcs into polylines.
const ARC_RESOLUTION: usize = 128;

/// Position + heading snapshot for save/restore.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Point2,
    pub heading: f32,
}

/// One primitive pen call, recorded verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum TurtleOp {
    Forward(f32),
    Backward(f32),
    TurnLeft(f32),
    TurnRight(f32),
    Arc { radius: f32, extent: f32 },
    PenUp,
    PenDown,
    Goto(Point2),
    SetHeading(f32),
    PenWidth(f32),
    PenColor(Rgb<f32>),
    Dot { radius: f32 },
}

pub struct Turtle {
    position: Point2,
    heading: f32,
    pen_down: bool,
    pen_width: f32,
    pen_color: Rgb<f32>,
    strokes: Vec<StrokeCommand>,
    trace: Vec<TurtleOp>,
}

impl Default for Turtle {
    fn default() -> Self {
        Self::new()
    }
}

impl Turtle {
    pub fn new() -> Self {
        Self {
            position: pt2(0.0, 0.0),
            heading: 0.0,
            pen_down: true,
            pen_width: 1.0,
            pen_color: rgb(1.0, 1.0, 1.0),
            strokes: Vec::new(),
            trace: Vec::new(),
        }
    }

    pub fn position(&self) -> Point2 {
        self.position
    }

    pub fn heading(&self) -> f32 {
        self.heading
    }

    pub fn is_pen_down(&self) -> bool {
        self.pen_down
    }

    pub fn pen_width(&self) -> f32 {
        self.pen_width
    }

    pub fn pose(&self) -> Pose {
        Pose {
            position: self.position,
            heading: self.heading,
        }
    }

    pub fn strokes(&self) -> &[StrokeCommand] {
        &self.strokes
    }

    pub fn trace(&self) -> &[TurtleOp] {
        &self.trace
    }

    /// Drop all cached strokes and the op trace. Pen pose and style are kept.
    pub fn clear(&mut self) {
        self.strokes.clear();
        self.trace.clear();
    }

    pub fn forward(&mut self, distance: f32) {
        self.trace.push(TurtleOp::Forward(distance));
        self.displace(distance);
    }

    pub fn backward(&mut self, distance: f32) {
        self.trace.push(TurtleOp::Backward(distance));
        self.displace(-distance);
    }

    pub fn turn_left(&mut self, degrees: f32) {
        self.trace.push(TurtleOp::TurnLeft(degrees));
        self.heading = normalize_degrees(self.heading + degrees);
    }

    pub fn turn_right(&mut self, degrees: f32) {
        self.trace.push(TurtleOp::TurnRight(degrees));
        self.heading = normalize_degrees(self.heading - degrees);
    }

    /// Draw a circular arc of `extent` degrees. A positive radius puts the
    /// arc center 90° to the pen's left and curves counterclockwise; a
    /// negative radius flips the center to the right and curves clockwise.
    /// Heading advances by `extent` along the direction of travel.
    pub fn arc(&mut self, radius: f32, extent: f32) {
        self.trace.push(TurtleOp::Arc { radius, extent });

        if radius == 0.0 {
            // Degenerate circle: pure rotation in place.
            self.heading = normalize_degrees(self.heading + extent);
            return;
        }

        let side = radius.signum();
        let center = self.position + radius * unit_vector(self.heading + 90.0);
        let start_angle = self.heading - 90.0 * side;
        let sweep = extent * side;

        let steps = ((extent.abs() / 360.0) * ARC_RESOLUTION as f32)
            .ceil()
            .max(1.0) as usize;
        let mut points = Vec::with_capacity(steps + 1);
        for i in 0..=steps {
            let angle = start_angle + sweep * (i as f32 / steps as f32);
            points.push(center + radius.abs() * unit_vector(angle));
        }

        self.position = points[points.len() - 1];
        self.heading = normalize_degrees(self.heading + sweep);

        if self.pen_down {
            self.strokes.push(StrokeCommand::Arc {
                points,
                weight: self.pen_width,
                color: self.pen_color,
            });
        }
    }

    pub fn pen_up(&mut self) {
        self.trace.push(TurtleOp::PenUp);
        self.pen_down = false;
    }

    pub fn pen_down(&mut self) {
        self.trace.push(TurtleOp::PenDown);
        self.pen_down = true;
    }

    /// Move straight to `target`, drawing the connecting line when the pen
    /// is down. Heading is unchanged.
    pub fn goto(&mut self, target: Point2) {
        self.trace.push(TurtleOp::Goto(target));
        if self.pen_down && target != self.position {
            self.strokes.push(StrokeCommand::Line {
                start: self.position,
                end: target,
                weight: self.pen_width,
                color: self.pen_color,
            });
        }
        self.position = target;
    }

    pub fn set_heading(&mut self, degrees: f32) {
        self.trace.push(TurtleOp::SetHeading(degrees));
        self.heading = normalize_degrees(degrees);
    }

    pub fn set_pen_width(&mut self, width: f32) {
        self.trace.push(TurtleOp::PenWidth(width));
        self.pen_width = width;
    }

    pub fn set_pen_color(&mut self, color: Rgb<f32>) {
        self.trace.push(TurtleOp::PenColor(color));
        self.pen_color = color;
    }

    /// Stamp a filled dot at the current position. Dots draw whether or not
    /// the pen is down.
    pub fn dot(&mut self, radius: f32, color: Rgb<f32>) {
        self.trace.push(TurtleOp::Dot { radius });
        self.strokes.push(StrokeCommand::Dot {
            center: self.position,
            radius,
            color,
        });
    }

    /// Run `body`, then return the pen to the pose captured on entry.
    /// The restore goes through goto/set_heading, so a pen-down restore
    /// draws the closing chord back to the saved position.
    pub fn with_pose_restored<F>(&mut self, body: F)
    where
        F: FnOnce(&mut Turtle),
    {
        let saved = self.pose();
        body(self);
        self.goto(saved.position);
        self.set_heading(saved.heading);
    }

    fn displace(&mut self, distance: f32) {
        let target = self.position + distance * unit_vector(self.heading);
        if self.pen_down && distance != 0.0 {
            self.strokes.push(StrokeCommand::Line {
                start: self.position,
                end: target,
                weight: self.pen_width,
                color: self.pen_color,
            });
        }
        self.position = target;
    }
}

fn unit_vector(degrees: f32) -> Vec2 {
    let radians = degrees.to_radians();
    vec2(radians.cos(), radians.sin())
}

fn normalize_degrees(degrees: f32) -> f32 {
    degrees.rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 0.001;

    fn assert_near(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < EPS,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    fn assert_point_near(actual: Point2, expected: Point2) {
        assert_near(actual.x, expected.x);
        assert_near(actual.y, expected.y);
    }

    mod movement_tests {
        use super::*;

        #[test]
        fn test_forward_moves_along_heading() {
            let mut turtle = Turtle::new();
            turtle.forward(50.0);
            assert_point_near(turtle.position(), pt2(50.0, 0.0));

            turtle.set_heading(90.0);
            turtle.forward(25.0);
            assert_point_near(turtle.position(), pt2(50.0, 25.0));
        }

        #[test]
        fn test_backward_reverses_forward() {
            let mut turtle = Turtle::new();
            turtle.set_heading(37.0);
            turtle.forward(80.0);
            turtle.backward(80.0);
            assert_point_near(turtle.position(), pt2(0.0, 0.0));
            assert_near(turtle.heading(), 37.0);
        }

        #[test]
        fn test_turns_normalize_heading() {
            let mut turtle = Turtle::new();
            turtle.turn_left(270.0);
            turtle.turn_left(180.0);
            assert_near(turtle.heading(), 90.0);
            turtle.turn_right(100.0);
            assert_near(turtle.heading(), 350.0);
        }

        #[test]
        fn test_pen_up_moves_leave_no_strokes() {
            let mut turtle = Turtle::new();
            turtle.pen_up();
            turtle.forward(100.0);
            turtle.goto(pt2(-30.0, 40.0));
            assert!(turtle.strokes().is_empty());
        }

        #[test]
        fn test_goto_draws_chord_when_pen_down() {
            let mut turtle = Turtle::new();
            turtle.set_heading(45.0);
            turtle.goto(pt2(10.0, -10.0));
            assert_eq!(turtle.strokes().len(), 1);
            // goto never changes heading
            assert_near(turtle.heading(), 45.0);
        }
    }

    mod arc_tests {
        use super::*;

        #[test]
        fn test_arc_endpoint_and_heading() {
            // 60° arc, radius 100, from the origin heading east: the center
            // sits at (0, 100), so the pen ends at (100·cos(-30°),
            // 100 + 100·sin(-30°)).
            let mut turtle = Turtle::new();
            turtle.arc(100.0, 60.0);
            assert_point_near(turtle.position(), pt2(86.6025, 50.0));
            assert_near(turtle.heading(), 60.0);
        }

        #[test]
        fn test_negative_radius_curves_clockwise() {
            let mut turtle = Turtle::new();
            turtle.arc(-50.0, 90.0);
            // Center at (0, -50); clockwise quarter turn ends at (50, -50).
            assert_point_near(turtle.position(), pt2(50.0, -50.0));
            assert_near(turtle.heading(), 270.0);
        }

        #[test]
        fn test_full_circle_returns_to_start() {
            let mut turtle = Turtle::new();
            turtle.set_heading(30.0);
            turtle.arc(75.0, 360.0);
            assert_point_near(turtle.position(), pt2(0.0, 0.0));
            assert_near(turtle.heading(), 30.0);
        }

        #[test]
        fn test_zero_radius_is_pure_rotation() {
            let mut turtle = Turtle::new();
            turtle.arc(0.0, 45.0);
            assert_point_near(turtle.position(), pt2(0.0, 0.0));
            assert_near(turtle.heading(), 45.0);
            assert!(turtle.strokes().is_empty());
        }

        #[test]
        fn test_arc_with_pen_up_moves_without_stroke() {
            let mut turtle = Turtle::new();
            turtle.pen_up();
            turtle.arc(100.0, 60.0);
            assert!(turtle.strokes().is_empty());
            assert_point_near(turtle.position(), pt2(86.6025, 50.0));
        }
    }

    mod pose_tests {
        use super::*;

        #[test]
        fn test_with_pose_restored_round_trips() {
            let mut turtle = Turtle::new();
            turtle.set_heading(10.0);
            turtle.forward(30.0);
            let before = turtle.pose();

            turtle.with_pose_restored(|t| {
                t.turn_left(77.0);
                t.forward(123.0);
                t.arc(40.0, 200.0);
            });

            assert_point_near(turtle.position(), before.position);
            assert_near(turtle.heading(), before.heading);
        }

        #[test]
        fn test_restore_draws_closing_chord_when_displaced() {
            let mut turtle = Turtle::new();
            turtle.with_pose_restored(|t| {
                t.forward(50.0);
            });
            // forward stroke + the goto back
            assert_eq!(turtle.strokes().len(), 2);
        }

        #[test]
        fn test_clear_keeps_pose() {
            let mut turtle = Turtle::new();
            turtle.set_heading(120.0);
            turtle.forward(60.0);
            let pose = turtle.pose();

            turtle.clear();
            assert!(turtle.strokes().is_empty());
            assert!(turtle.trace().is_empty());
            assert_eq!(turtle.pose(), pose);
        }
    }

    mod trace_tests {
        use super::*;

        #[test]
        fn test_trace_records_calls_in_order() {
            let mut turtle = Turtle::new();
            turtle.pen_up();
            turtle.goto(pt2(0.0, -100.0));
            turtle.pen_down();
            turtle.forward(10.0);
            turtle.turn_right(90.0);

            assert_eq!(
                turtle.trace(),
                &[
                    TurtleOp::PenUp,
                    TurtleOp::Goto(pt2(0.0, -100.0)),
                    TurtleOp::PenDown,
                    TurtleOp::Forward(10.0),
                    TurtleOp::TurnRight(90.0),
                ]
            );
        }

        #[test]
        fn test_dot_draws_with_pen_up() {
            let mut turtle = Turtle::new();
            turtle.pen_up();
            turtle.dot(2.0, rgb(1.0, 1.0, 1.0));
            assert_eq!(turtle.strokes().len(), 1);
            assert!(matches!(turtle.trace(), [TurtleOp::PenUp, TurtleOp::Dot { .. }]));
        }
    }
}
