//! A single point in the ambient particle field.

use egui::{Pos2, Vec2, pos2, vec2};
use rand::Rng;

use super::field::Viewport;
use super::variables::{MAX_SPEED, OPACITY, RADIUS};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    position: Pos2,
    velocity: Vec2,
    radius: f32,
    opacity: f32,
}

impl Particle {
    pub fn new(position: Pos2, velocity: Vec2, radius: f32, opacity: f32) -> Self {
        Particle {
            position,
            velocity,
            radius,
            opacity,
        }
    }

    /// Places a particle uniformly over the viewport with random drift, size and opacity.
    pub fn random(viewport: Viewport, rng: &mut impl Rng) -> Self {
        let mut coordinate = |span: f32| {
            if span > 0.0 {
                rng.gen_range(0.0..span)
            } else {
                0.0
            }
        };
        let position = pos2(coordinate(viewport.width), coordinate(viewport.height));

        Particle::new(
            position,
            vec2(
                rng.gen_range(-MAX_SPEED..MAX_SPEED),
                rng.gen_range(-MAX_SPEED..MAX_SPEED),
            ),
            rng.gen_range(RADIUS.min..RADIUS.max),
            rng.gen_range(OPACITY.min..OPACITY.max),
        )
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    #[cfg(test)]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Advances by one frame of drift and wraps around the viewport edges.
    pub fn update(&mut self, viewport: Viewport, speed_factor: f32) {
        self.position += self.velocity * speed_factor;
        self.position.x = wrap(self.position.x, viewport.width);
        self.position.y = wrap(self.position.y, viewport.height);
    }
}

/// Toroidal wrap on one axis. Leaving past the far edge restarts at 0, leaving
/// below 0 restarts at the last representable coordinate inside the span.
/// Values already past the edge before the step are only corrected here.
fn wrap(value: f32, span: f32) -> f32 {
    if value >= span {
        0.0
    } else if value < 0.0 {
        below(span)
    } else {
        value
    }
}

// largest f32 strictly less than `span`, or 0 for an empty span
fn below(span: f32) -> f32 {
    if span > 0.0 {
        f32::from_bits(span.to_bits() - 1)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    const VIEW: Viewport = Viewport {
        width: 200.0,
        height: 100.0,
    };

    #[test]
    fn random_particles_respect_ranges() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..500 {
            let p = Particle::random(VIEW, &mut rng);
            assert!(p.position().x >= 0.0 && p.position().x < VIEW.width);
            assert!(p.position().y >= 0.0 && p.position().y < VIEW.height);
            assert!(p.velocity().x.abs() <= MAX_SPEED);
            assert!(p.velocity().y.abs() <= MAX_SPEED);
            assert!(p.radius() >= RADIUS.min && p.radius() < RADIUS.max);
            assert!(p.opacity() > 0.0 && p.opacity() < 1.0);
        }
    }

    #[test]
    fn random_particle_on_empty_viewport_sits_at_origin() {
        let mut rng = SmallRng::seed_from_u64(1);
        let p = Particle::random(Viewport::new(0.0, 0.0), &mut rng);
        assert_eq!(p.position(), Pos2::ZERO);
    }

    #[test]
    fn crossing_right_edge_wraps_to_zero() {
        let mut p = Particle::new(pos2(199.9, 40.0), vec2(0.2, 0.0), 1.0, 0.5);
        p.update(VIEW, 1.0);
        assert_eq!(p.position(), pos2(0.0, 40.0));
    }

    #[test]
    fn landing_exactly_on_edge_wraps_to_zero() {
        let mut p = Particle::new(pos2(199.5, 10.0), vec2(0.5, 0.0), 1.0, 0.5);
        p.update(VIEW, 1.0);
        assert_eq!(p.position().x, 0.0);
    }

    #[test]
    fn short_of_edge_keeps_moving() {
        let mut p = Particle::new(pos2(199.0, 10.0), vec2(0.25, 0.0), 1.0, 0.5);
        p.update(VIEW, 1.0);
        assert_eq!(p.position().x, 199.25);
    }

    #[test]
    fn crossing_top_edge_wraps_to_far_side() {
        let mut p = Particle::new(pos2(50.0, 0.1), vec2(0.0, -0.2), 1.0, 0.5);
        p.update(VIEW, 1.0);
        assert_eq!(p.position().x, 50.0);
        assert!(p.position().y < VIEW.height);
        assert!(VIEW.height - p.position().y < 1e-4);
    }

    #[test]
    fn outside_after_shrink_is_corrected_on_next_update() {
        let mut p = Particle::new(pos2(150.0, 20.0), vec2(-0.1, 0.0), 1.0, 0.5);
        p.update(Viewport::new(100.0, 100.0), 1.0);
        assert_eq!(p.position().x, 0.0);
    }

    #[test]
    fn speed_factor_scales_drift() {
        let mut p = Particle::new(pos2(10.0, 10.0), vec2(0.25, -0.25), 1.0, 0.5);
        p.update(VIEW, 4.0);
        assert_eq!(p.position(), pos2(11.0, 9.0));
    }
}
