// src/controllers/session.rs
// SessionController owns the live design parameters and the queue of
// control commands coming in from the keyboard. Parameter edits mark the
// session dirty; the app loop re-renders when it drains the flag.

use crate::models::design::{DesignParams, PETAL_COUNT_FLOOR, SIZE_FLOOR};
use crate::models::palette;
use crate::models::pattern::PatternKind;

pub const SIZE_STEP: f32 = 10.0;
pub const PETAL_COUNT_STEP: i32 = 2;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    SetColorScheme(usize),
    SetPattern(usize),
    AdjustSize(f32),
    AdjustPetalCount(i32),
    ToggleEmbellish,
    SaveSnapshot,
    ShowHelp,
    Quit,
}

pub struct SessionController {
    params: DesignParams,
    command_queue: Vec<SessionCommand>,
    dirty: bool,
}

impl SessionController {
    pub fn new(params: DesignParams) -> Self {
        Self {
            params,
            command_queue: Vec::new(),
            // Render once on startup.
            dirty: true,
        }
    }

    pub fn params(&self) -> &DesignParams {
        &self.params
    }

    pub fn queue_command(&mut self, command: SessionCommand) {
        self.command_queue.push(command);
    }

    pub fn take_commands(&mut self) -> Vec<SessionCommand> {
        std::mem::take(&mut self.command_queue)
    }

    /// True once after any parameter change.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Out-of-range indices are ignored without error.
    pub fn set_color_scheme(&mut self, index: usize) {
        if palette::scheme(index).is_some() {
            self.params.color_scheme = index;
            self.dirty = true;
        }
    }

    /// Out-of-range indices are ignored without error.
    pub fn set_pattern(&mut self, index: usize) {
        if let Some(pattern) = PatternKind::from_index(index) {
            self.params.pattern = pattern;
            self.dirty = true;
        }
    }

    pub fn adjust_size(&mut self, delta: f32) {
        self.params.size = (self.params.size + delta).max(SIZE_FLOOR);
        self.dirty = true;
    }

    pub fn adjust_petal_count(&mut self, delta: i32) {
        let next = self.params.petal_count as i64 + delta as i64;
        self.params.petal_count = next.max(PETAL_COUNT_FLOOR as i64) as u32;
        self.dirty = true;
    }

    pub fn toggle_embellish(&mut self) {
        self.params.embellish = !self.params.embellish;
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> SessionController {
        let mut controller = SessionController::new(DesignParams::default());
        // Swallow the startup render flag so tests see only their own edits.
        controller.take_dirty();
        controller
    }

    mod parameter_tests {
        use super::*;

        #[test]
        fn test_size_clamps_to_floor() {
            let mut c = controller();
            c.adjust_size(-1000.0);
            assert_eq!(c.params().size, 10.0);

            c.adjust_size(-10.0);
            assert_eq!(c.params().size, 10.0);

            c.adjust_size(SIZE_STEP);
            assert_eq!(c.params().size, 20.0);
        }

        #[test]
        fn test_petal_count_clamps_to_floor() {
            let mut c = controller();
            c.adjust_petal_count(-100);
            assert_eq!(c.params().petal_count, 4);

            c.adjust_petal_count(PETAL_COUNT_STEP);
            assert_eq!(c.params().petal_count, 6);
        }

        #[test]
        fn test_out_of_range_pattern_is_ignored() {
            let mut c = controller();
            c.set_pattern(99);
            assert_eq!(c.params().pattern, PatternKind::Classic);
            assert!(!c.take_dirty());
        }

        #[test]
        fn test_out_of_range_scheme_is_ignored() {
            let mut c = controller();
            c.set_color_scheme(4);
            assert_eq!(c.params().color_scheme, 0);
            assert!(!c.take_dirty());
        }

        #[test]
        fn test_valid_selections_apply_and_mark_dirty() {
            let mut c = controller();
            c.set_color_scheme(2);
            assert_eq!(c.params().color_scheme, 2);
            assert!(c.take_dirty());

            c.set_pattern(3);
            assert_eq!(c.params().pattern, PatternKind::Spiral);
            assert!(c.take_dirty());
        }

        #[test]
        fn test_toggle_embellish_flips() {
            let mut c = controller();
            assert!(!c.params().embellish);
            c.toggle_embellish();
            assert!(c.params().embellish);
            c.toggle_embellish();
            assert!(!c.params().embellish);
        }
    }

    mod queue_tests {
        use super::*;

        #[test]
        fn test_new_controller_renders_once() {
            let mut c = SessionController::new(DesignParams::default());
            assert!(c.take_dirty());
            assert!(!c.take_dirty());
        }

        #[test]
        fn test_take_commands_drains_in_order() {
            let mut c = controller();
            c.queue_command(SessionCommand::SetPattern(1));
            c.queue_command(SessionCommand::SaveSnapshot);

            let drained = c.take_commands();
            assert_eq!(
                drained,
                vec![SessionCommand::SetPattern(1), SessionCommand::SaveSnapshot]
            );
            assert!(c.take_commands().is_empty());
        }
    }
}
