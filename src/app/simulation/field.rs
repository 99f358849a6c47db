use egui::Vec2;
use rand::Rng;
use std::ops::Index;

use super::particle::Particle;

/// Drawable area the particles live in. Owned by the host, copied into the
/// simulation on construction and on every resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Negative or non-finite dimensions collapse to 0.
    pub fn new(width: f32, height: f32) -> Self {
        let sanitise = |span: f32| {
            if span.is_finite() && span >= 0.0 {
                span
            } else {
                log::warn!("Ignoring invalid viewport dimension {span}");
                0.0
            }
        };
        Viewport {
            width: sanitise(width),
            height: sanitise(height),
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

impl From<Vec2> for Viewport {
    fn from(size: Vec2) -> Self {
        Viewport::new(size.x, size.y)
    }
}

/// Fixed-size population of particles. Nothing here adds or removes particles
/// after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    particles: Vec<Particle>,
}

impl Field {
    pub fn random(population: usize, viewport: Viewport, rng: &mut impl Rng) -> Self {
        Field::from_particles(
            (0..population)
                .map(|_| Particle::random(viewport, &mut *rng))
                .collect(),
        )
    }

    pub fn from_particles(particles: Vec<Particle>) -> Self {
        Field { particles }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn update(&mut self, viewport: Viewport, speed_factor: f32) {
        for particle in &mut self.particles {
            particle.update(viewport, speed_factor);
        }
    }

    /// Every unordered pair `(i, j)` with `i < j` closer than `threshold`,
    /// along with their distance.
    pub fn neighbours(&self, threshold: f32) -> impl Iterator<Item = (usize, usize, f32)> + '_ {
        self.particles.iter().enumerate().flat_map(move |(i, a)| {
            self.particles[i + 1..]
                .iter()
                .enumerate()
                .filter_map(move |(offset, b)| {
                    let distance = a.position().distance(b.position());
                    (distance < threshold).then_some((i, i + 1 + offset, distance))
                })
        })
    }
}

impl Index<usize> for Field {
    type Output = Particle;

    fn index(&self, index: usize) -> &Self::Output {
        &self.particles[index]
    }
}
