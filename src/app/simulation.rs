//! Contains all simulation logic

mod field;
mod palette;
mod particle;
mod surface;
pub mod variables;

pub use field::{Field, Viewport};
pub use palette::Palette;
pub use surface::{FrameScheduler, RenderSurface};
#[cfg(test)]
pub use surface::testing;

use egui::{Color32, Pos2};
use log::{debug, info};
use rand::Rng;
use variables::{CONNECTION_DISTANCE, LINE_MAX_OPACITY, LINE_WIDTH, POPULATION, SPEED_FACTOR};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldConfig {
    /// Only read when the field is (re)built.
    pub population: usize,
    pub connection_distance: f32,
    pub line_max_opacity: f32,
    pub line_width: f32,
    pub speed: f32,
    pub palette: Palette,
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            population: POPULATION.default as usize,
            connection_distance: CONNECTION_DISTANCE.default,
            line_max_opacity: LINE_MAX_OPACITY,
            line_width: LINE_WIDTH,
            speed: SPEED_FACTOR.default,
            palette: Palette::default(),
        }
    }
}

/// A connective line between two nearby particles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    pub from: Pos2,
    pub to: Pos2,
    pub opacity: f32,
}

pub struct Simulation {
    pub config: FieldConfig,
    field: Field,
    viewport: Viewport,
    frames: u64,
}

impl Simulation {
    pub fn new(config: FieldConfig, viewport: Viewport, rng: &mut impl Rng) -> Self {
        let field = Field::random(config.population, viewport, rng);
        info!(
            "Created particle field of {} in {}x{}",
            field.len(),
            viewport.width,
            viewport.height
        );
        Simulation::from_field(config, viewport, field)
    }

    pub fn from_field(config: FieldConfig, viewport: Viewport, field: Field) -> Self {
        Simulation {
            config,
            field,
            viewport,
            frames: 0,
        }
    }

    /// Replaces every particle with a fresh random population of `config.population`.
    pub fn reseed(&mut self, rng: &mut impl Rng) {
        *self = Simulation::new(self.config, self.viewport, rng);
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Stores the new drawable size. Particles are not moved; any left outside
    /// the new bounds are wrapped by their next update.
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport != self.viewport {
            debug!(
                "Viewport resized from {}x{} to {}x{}",
                self.viewport.width, self.viewport.height, viewport.width, viewport.height
            );
            self.viewport = viewport;
        }
    }

    pub fn update(&mut self) {
        self.field.update(self.viewport, self.config.speed);
        self.frames += 1;
    }

    /// Line opacity for two particles `distance` apart, decaying linearly to
    /// zero at the connection distance.
    pub fn line_opacity(&self, distance: f32) -> f32 {
        let threshold = self.config.connection_distance;
        if distance >= threshold {
            0.0
        } else {
            self.config.line_max_opacity * (1.0 - distance / threshold)
        }
    }

    pub fn connections(&self) -> impl Iterator<Item = Connection> + '_ {
        self.field
            .neighbours(self.config.connection_distance)
            .map(|(i, j, distance)| Connection {
                from: self.field[i].position(),
                to: self.field[j].position(),
                opacity: self.line_opacity(distance),
            })
    }

    pub fn render(&self, surface: &mut impl RenderSurface) {
        let (r, g, b) = self.config.palette.colour();
        let tint = |opacity: f32| {
            Color32::from_rgba_unmultiplied(r, g, b, (opacity.clamp(0.0, 1.0) * 255.0).round() as u8)
        };

        surface.clear();
        for particle in self.field.particles() {
            surface.fill_circle(particle.position(), particle.radius(), tint(particle.opacity()));
        }
        for connection in self.connections() {
            surface.stroke_line(
                connection.from,
                connection.to,
                self.config.line_width,
                tint(connection.opacity),
            );
        }
    }

    /// One animation tick: advance, draw, then ask for the next tick.
    pub fn frame(&mut self, surface: &mut impl RenderSurface, scheduler: &impl FrameScheduler) {
        self.update();
        self.render(surface);
        scheduler.request_frame();
    }
}
