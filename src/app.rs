//! Contains all application code, including application state and drawing logic

mod canvas;
mod simulation;

use canvas::Canvas;
use simulation::variables::{CONNECTION_DISTANCE, POPULATION, SPEED_FACTOR};
use simulation::{FieldConfig, Palette, Simulation, Viewport};

use egui::{Pos2, Rect, Response, Style, Vec2};
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::env::VarError;
use std::time::{Duration, Instant};
use strum::IntoEnumIterator;

const FPS_SAMPLE_FRAMES: u32 = 60;
const SEED_VARIABLE: &str = "PARTICLE_FIELD_SEED";

/// Reads a fixed seed from the environment so a field can be reproduced,
/// otherwise picks a fresh one.
fn seed() -> u64 {
    parse_seed(std::env::var(SEED_VARIABLE)).unwrap_or_else(rand::random)
}

fn parse_seed(value: Result<String, VarError>) -> Option<u64> {
    match value {
        Ok(value) => match value.trim().parse() {
            Ok(seed) => Some(seed),
            Err(e) => {
                warn!("Ignoring {SEED_VARIABLE}={value:?}: {e}");
                None
            }
        },
        Err(VarError::NotPresent) => None,
        Err(e) => {
            warn!("Ignoring {SEED_VARIABLE}: {e}");
            None
        }
    }
}

/// Average repaint rate over windows of `FPS_SAMPLE_FRAMES` running frames.
struct FpsMeter {
    frame: u32,
    window_start: Instant,
    last_window: Option<Duration>,
}

impl FpsMeter {
    fn new(now: Instant) -> Self {
        FpsMeter {
            frame: 0,
            window_start: now,
            last_window: None,
        }
    }

    fn tick(&mut self, now: Instant) {
        self.frame += 1;
        if self.frame == FPS_SAMPLE_FRAMES {
            self.last_window = Some(now.duration_since(self.window_start));
            self.frame = 0;
            self.window_start = now;
        }
    }

    /// Drops the partial window; repaints while paused are input driven.
    fn restart(&mut self, now: Instant) {
        self.frame = 0;
        self.window_start = now;
        self.last_window = None;
    }

    fn fps(&self) -> Option<f32> {
        self.last_window
            .filter(|window| !window.is_zero())
            .map(|window| FPS_SAMPLE_FRAMES as f32 / window.as_secs_f32())
    }
}

pub struct ParticleFieldApp {
    simulation: Simulation,
    rng: SmallRng,
    paused: bool,
    laid_out: bool,
    fps: FpsMeter,
}

impl ParticleFieldApp {
    /// Called once before the first frame. The field is reseeded once the
    /// first layout reports the real canvas size.
    pub fn new(_cc: &eframe::CreationContext<'_>, initial_size: Vec2) -> Self {
        let seed = seed();
        info!("Seeding particle field with {seed}");
        let mut rng = SmallRng::seed_from_u64(seed);

        Self {
            simulation: Simulation::new(FieldConfig::default(), Viewport::from(initial_size), &mut rng),
            rng,
            paused: false,
            laid_out: false,
            fps: FpsMeter::new(Instant::now()),
        }
    }
}

impl eframe::App for ParticleFieldApp {
    /// Called each time the UI needs repainting
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.paused {
            self.fps.restart(Instant::now());
        } else {
            self.fps.tick(Instant::now());
        }

        // draws field settings at the top of the window
        let settings = egui::TopBottomPanel::top("settings");
        let settings_drawn: Response = settings
            .show(ctx, |ui| {
                let config = &mut self.simulation.config;
                ui.horizontal(|ui| {
                    ui.label("N").on_hover_text("Particle count, applied on reseed");
                    ui.add(egui::Slider::new(
                        &mut config.population,
                        POPULATION.min as usize..=POPULATION.max as usize,
                    ));
                    if ui.button("↺").on_hover_text("Reset").clicked() {
                        config.population = POPULATION.default as usize;
                    }

                    ui.separator();

                    ui.label("Link").on_hover_text("Connection distance in pixels");
                    ui.add(egui::Slider::new(
                        &mut config.connection_distance,
                        CONNECTION_DISTANCE.min..=CONNECTION_DISTANCE.max,
                    ));
                    if ui.button("↺").on_hover_text("Reset").clicked() {
                        config.connection_distance = CONNECTION_DISTANCE.default;
                    }

                    ui.separator();

                    ui.label("Speed");
                    ui.add(egui::Slider::new(
                        &mut config.speed,
                        SPEED_FACTOR.min..=SPEED_FACTOR.max,
                    ));
                    if ui.button("↺").on_hover_text("Reset").clicked() {
                        config.speed = SPEED_FACTOR.default;
                    }

                    ui.separator();

                    egui::ComboBox::from_id_salt("palette")
                        .selected_text(config.palette.to_string())
                        .show_ui(ui, |ui| {
                            for palette in Palette::iter() {
                                ui.selectable_value(&mut config.palette, palette, palette.name());
                            }
                        });
                });
            })
            .response;

        // draws simulation controls at the bottom of the window
        let controls = egui::TopBottomPanel::bottom("controls");
        let controls_drawn: Response = controls
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui
                        .add_enabled(self.paused, egui::Button::new("▶"))
                        .on_hover_text("Play simulation")
                        .clicked()
                    {
                        self.paused = false;
                    }
                    if ui
                        .add_enabled(!self.paused, egui::Button::new("⏸"))
                        .on_hover_text("Pause simulation")
                        .clicked()
                    {
                        self.paused = true;
                    }
                    if ui
                        .add_enabled(self.paused, egui::Button::new("⏭"))
                        .on_hover_text("Advance simulation by one frame")
                        .clicked()
                    {
                        self.simulation.update();
                    }
                    if ui
                        .button("⟲")
                        .on_hover_text("Reseed particle field")
                        .clicked()
                    {
                        self.simulation.reseed(&mut self.rng);
                    }

                    ui.separator();

                    let size = self.simulation.viewport().size();
                    if self.simulation.field().is_empty() {
                        ui.label(format!("Empty field in {:.0}x{:.0}", size.x, size.y));
                    } else {
                        ui.label(format!(
                            "{} particles in {:.0}x{:.0}, frame {}",
                            self.simulation.field().len(),
                            size.x,
                            size.y,
                            self.simulation.frames()
                        ));
                    }

                    ui.separator();

                    match self.fps.fps() {
                        Some(fps) => ui.label(format!("{fps:.0} FPS")),
                        None => ui.label("- FPS"),
                    };
                });
            })
            .response;

        let canvas_extent = Rect::from_two_pos(
            Pos2::new(ctx.screen_rect().left(), settings_drawn.rect.bottom()),
            Pos2::new(ctx.screen_rect().right(), controls_drawn.rect.top()),
        );
        self.simulation.resize(Viewport::from(canvas_extent.size()));
        if !self.laid_out {
            // spread the first field over the real canvas rather than the window
            self.simulation.reseed(&mut self.rng);
            self.laid_out = true;
        }

        // draws the particle field in the main panel of the window
        let style = Style::default();
        egui::CentralPanel::default()
            .frame(egui::Frame::canvas(&style))
            .show(ctx, |ui| {
                let mut canvas = Canvas::new(ui, canvas_extent);
                if self.paused {
                    self.simulation.render(&mut canvas);
                } else {
                    self.simulation.frame(&mut canvas, ctx);
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_parses_valid_value() {
        assert_eq!(parse_seed(Ok("42".to_string())), Some(42));
    }

    #[test]
    fn seed_trims_surrounding_whitespace() {
        assert_eq!(parse_seed(Ok("  1234\n".to_string())), Some(1234));
    }

    #[test]
    fn seed_ignores_garbage() {
        assert_eq!(parse_seed(Ok("forty-two".to_string())), None);
        assert_eq!(parse_seed(Ok("-1".to_string())), None);
        assert_eq!(parse_seed(Ok(String::new())), None);
    }

    #[test]
    fn seed_absent_is_none() {
        assert_eq!(parse_seed(Err(VarError::NotPresent)), None);
    }

    #[test]
    fn fps_reported_after_a_full_window() {
        let start = Instant::now();
        let mut meter = FpsMeter::new(start);
        for i in 1..FPS_SAMPLE_FRAMES {
            meter.tick(start + Duration::from_millis(i as u64 * 16));
        }
        assert_eq!(meter.fps(), None);

        meter.tick(start + Duration::from_secs(1));
        let fps = meter.fps().unwrap();
        assert!((fps - FPS_SAMPLE_FRAMES as f32).abs() < 1e-3);
    }

    #[test]
    fn restart_discards_time_spent_paused() {
        let start = Instant::now();
        let mut meter = FpsMeter::new(start);
        for i in 1..=FPS_SAMPLE_FRAMES {
            meter.tick(start + Duration::from_millis(i as u64 * 10));
        }
        assert!(meter.fps().is_some());

        // a long pause with a few input-driven repaints
        let resumed = start + Duration::from_secs(30);
        meter.restart(resumed);
        assert_eq!(meter.fps(), None);

        for i in 1..=FPS_SAMPLE_FRAMES {
            meter.tick(resumed + Duration::from_millis(i as u64 * 20));
        }
        let fps = meter.fps().unwrap();
        assert!((fps - 50.0).abs() < 1e-2);
    }
}
