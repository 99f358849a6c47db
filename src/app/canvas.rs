//! Helper struct for drawing the particle field onto the screen.
//! Viewport coordinates are pixels measured from the top-left of `screen_extent`.

use egui::{Color32, Pos2, Rect, Stroke, Ui, epaint::CircleShape};

use super::simulation::RenderSurface;

const BACKGROUND: Color32 = Color32::from_rgb(10, 10, 15);

pub struct Canvas<'a> {
    ui: &'a Ui,
    screen_extent: Rect,
}

impl<'a> Canvas<'a> {
    pub fn new(ui: &'a Ui, screen_extent: Rect) -> Self {
        Canvas { ui, screen_extent }
    }

    fn viewport_to_screen_pos(&self, pos: Pos2) -> Pos2 {
        self.screen_extent.min + pos.to_vec2()
    }
}

impl RenderSurface for Canvas<'_> {
    fn clear(&mut self) {
        self.ui
            .painter()
            .rect_filled(self.screen_extent, 0.0, BACKGROUND);
    }

    fn fill_circle(&mut self, centre: Pos2, radius: f32, colour: Color32) {
        let screen_pos = self.viewport_to_screen_pos(centre);
        self.ui
            .painter()
            .add(CircleShape::filled(screen_pos, radius, colour));
    }

    fn stroke_line(&mut self, from: Pos2, to: Pos2, width: f32, colour: Color32) {
        self.ui.painter().line_segment(
            [
                self.viewport_to_screen_pos(from),
                self.viewport_to_screen_pos(to),
            ],
            Stroke::new(width, colour),
        );
    }
}
