use crate::config::Config;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
}

impl Particle {
    pub fn spawn(bounds: Vec2, cfg: &Config, rng: &mut impl Rng) -> Self {
        let mut p = Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size: cfg.min_size,
        };
        p.reset(bounds, cfg, rng);
        p
    }

    /// Re-randomizes position, size, and drift velocity within `bounds`.
    pub fn reset(&mut self, bounds: Vec2, cfg: &Config, rng: &mut impl Rng) {
        self.pos = Vec2::new(
            rng.random_range(0.0..=bounds.x),
            rng.random_range(0.0..=bounds.y),
        );
        self.size = rng.random_range(cfg.min_size..cfg.max_size);
        self.vel = Vec2::new(
            rng.random_range(-cfg.max_drift..cfg.max_drift),
            rng.random_range(-cfg.max_drift..cfg.max_drift),
        );
    }

    /// Advances one frame: ease toward a nearby pointer or drift freely,
    /// then reflect at the surface bounds.
    ///
    /// The reflection check runs after the move, so a particle may sit
    /// slightly outside `bounds` for one frame before bouncing back.
    pub fn update(&mut self, pointer: Option<Vec2>, bounds: Vec2, cfg: &Config) {
        let eased = match pointer {
            Some(m) => {
                let to_pointer = m - self.pos;
                // NaN distances fail this comparison and fall through to
                // free drift.
                if to_pointer.length() < cfg.attraction_radius {
                    self.pos += to_pointer * cfg.ease;
                    true
                } else {
                    false
                }
            }
            None => false,
        };

        if !eased {
            self.pos += self.vel;
        }

        if self.pos.x < 0.0 || self.pos.x > bounds.x {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y < 0.0 || self.pos.y > bounds.y {
            self.vel.y = -self.vel.y;
        }
    }
}
