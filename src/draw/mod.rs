// src/draw/mod.rs
// The turtle pen, its cached stroke output, and the petal path generators

pub mod petal;
pub mod stroke;
pub mod turtle;

pub use petal::draw_petal;
pub use stroke::StrokeCommand;
pub use turtle::{Pose, Turtle, TurtleOp};
