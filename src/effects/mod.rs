pub mod glitter;

pub use glitter::scatter;
