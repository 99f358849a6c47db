//! Capabilities the simulation needs from whatever hosts it.

use egui::{Color32, Pos2};

/// A 2-D drawing surface in viewport coordinates.
pub trait RenderSurface {
    fn clear(&mut self);
    fn fill_circle(&mut self, centre: Pos2, radius: f32, colour: Color32);
    fn stroke_line(&mut self, from: Pos2, to: Pos2, width: f32, colour: Color32);
}

/// Asks the host to call back before the next repaint.
pub trait FrameScheduler {
    fn request_frame(&self);
}

impl FrameScheduler for egui::Context {
    fn request_frame(&self) {
        self.request_repaint();
    }
}

#[cfg(test)]
pub mod testing {
    //! Recording doubles for single-stepping frames in tests.

    use super::*;
    use std::cell::Cell;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Command {
        Clear,
        Circle {
            centre: Pos2,
            radius: f32,
            colour: Color32,
        },
        Line {
            from: Pos2,
            to: Pos2,
            width: f32,
            colour: Color32,
        },
    }

    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub commands: Vec<Command>,
    }

    impl RecordingSurface {
        pub fn circles(&self) -> usize {
            self.commands
                .iter()
                .filter(|c| matches!(c, Command::Circle { .. }))
                .count()
        }

        pub fn lines(&self) -> Vec<&Command> {
            self.commands
                .iter()
                .filter(|c| matches!(c, Command::Line { .. }))
                .collect()
        }
    }

    impl RenderSurface for RecordingSurface {
        fn clear(&mut self) {
            self.commands.push(Command::Clear);
        }

        fn fill_circle(&mut self, centre: Pos2, radius: f32, colour: Color32) {
            self.commands.push(Command::Circle {
                centre,
                radius,
                colour,
            });
        }

        fn stroke_line(&mut self, from: Pos2, to: Pos2, width: f32, colour: Color32) {
            self.commands.push(Command::Line {
                from,
                to,
                width,
                colour,
            });
        }
    }

    #[derive(Debug, Default)]
    pub struct CountingScheduler {
        pub requests: Cell<u32>,
    }

    impl FrameScheduler for CountingScheduler {
        fn request_frame(&self) {
            self.requests.set(self.requests.get() + 1);
        }
    }
}
