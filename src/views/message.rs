// src/views/message.rs
//
// A simple module to manage the temporary status text drawn over the
// canvas (welcome line, help menu, save confirmations). Messages expire
// on their own; nothing blocks the event loop.

use nannou::prelude::*;

const TEXT_Y: f32 = 350.0;
const FONT_SIZE: u32 = 16;

#[derive(Default)]
pub struct MessageOverlay {
    text: Option<String>,
    expires_at: f32,
}

impl MessageOverlay {
    pub fn new() -> Self {
        Self {
            text: None,
            expires_at: 0.0,
        }
    }

    pub fn show(&mut self, text: impl Into<String>, duration: f32, current_time: f32) {
        self.text = Some(text.into());
        self.expires_at = current_time + duration;
    }

    pub fn is_active(&self, current_time: f32) -> bool {
        self.text.is_some() && current_time < self.expires_at
    }

    pub fn draw(&mut self, draw: &Draw, current_time: f32) {
        if self.text.is_some() && current_time >= self.expires_at {
            self.text = None;
        }
        if let Some(text) = &self.text {
            draw.text(text)
                .color(WHITE)
                .font_size(FONT_SIZE)
                .x_y(0.0, TEXT_Y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_expires() {
        let mut overlay = MessageOverlay::new();
        overlay.show("saved", 2.0, 10.0);

        assert!(overlay.is_active(10.0));
        assert!(overlay.is_active(11.9));
        assert!(!overlay.is_active(12.0));
    }

    #[test]
    fn test_new_message_replaces_old() {
        let mut overlay = MessageOverlay::new();
        overlay.show("first", 1.0, 0.0);
        overlay.show("second", 5.0, 0.5);
        assert!(overlay.is_active(3.0));
    }

    #[test]
    fn test_starts_empty() {
        let overlay = MessageOverlay::new();
        assert!(!overlay.is_active(0.0));
    }
}
