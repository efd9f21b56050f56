pub mod message;

pub use message::MessageOverlay;
