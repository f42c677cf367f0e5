use crate::{config::Config, particle::Particle, pointer::PointerState};
use glam::Vec2;
use rand::Rng;

/// Particle population for one visual section.
///
/// The field owns its drawing-surface size, its particles, and the
/// pointer state scoped to that surface. Nothing here is shared with any
/// other section's field.
#[derive(Debug)]
pub struct Field {
    pub size: Vec2,
    pub particles: Vec<Particle>,
    pub pointer: PointerState,
    pub cfg: Config,
}

impl Field {
    pub fn new(cfg: Config) -> Self {
        Self {
            size: Vec2::ZERO,
            particles: Vec::new(),
            pointer: PointerState::default(),
            cfg,
        }
    }

    /// Matches the drawing surface to the hosting section's current size.
    /// Must run before any particle positions are generated, and again on
    /// every resize.
    pub fn resize(&mut self, size: Vec2) {
        self.size = size;
    }

    /// Particle count supported by the current surface: one per
    /// `area_per_particle` units of area, capped at `max_particles`.
    pub fn particle_budget(&self) -> usize {
        let by_area = (self.size.x * self.size.y / self.cfg.area_per_particle).floor() as usize;
        by_area.min(self.cfg.max_particles)
    }

    /// Rebuilds the particle collection from scratch. The prior population
    /// is replaced, never appended to, so resizing cannot leak particles.
    pub fn initialize(&mut self, rng: &mut impl Rng) {
        let count = self.particle_budget();
        self.particles = (0..count)
            .map(|_| Particle::spawn(self.size, &self.cfg, rng))
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn sized_field(w: f32, h: f32) -> Field {
        let mut field = Field::new(Config::default());
        field.resize(Vec2::new(w, h));
        field
    }

    #[test]
    fn budget_scales_with_area() {
        // 200 x 50 = 10_000 area units -> exactly one particle.
        assert_eq!(sized_field(200.0, 50.0).particle_budget(), 1);
        assert_eq!(sized_field(350.0, 100.0).particle_budget(), 3);
    }

    #[test]
    fn budget_is_capped_at_fifty() {
        assert_eq!(sized_field(1000.0, 1000.0).particle_budget(), 50);
    }

    #[test]
    fn empty_surface_yields_no_particles() {
        let mut field = sized_field(0.0, 0.0);
        assert_eq!(field.particle_budget(), 0);

        let mut rng = rand::rng();
        field.initialize(&mut rng);
        assert!(field.particles.is_empty());
    }

    #[test]
    fn initialize_populates_to_budget_within_bounds() {
        let mut field = sized_field(500.0, 400.0);
        let mut rng = rand::rng();
        field.initialize(&mut rng);

        assert_eq!(field.particles.len(), 20);
        for p in &field.particles {
            assert!(p.pos.x >= 0.0 && p.pos.x <= 500.0);
            assert!(p.pos.y >= 0.0 && p.pos.y <= 400.0);
        }
    }

    #[test]
    fn initialize_twice_regenerates_instead_of_appending() {
        let mut field = sized_field(500.0, 400.0);
        let mut rng = rand::rng();

        field.initialize(&mut rng);
        let first: Vec<Vec2> = field.particles.iter().map(|p| p.pos).collect();

        field.initialize(&mut rng);
        let second: Vec<Vec2> = field.particles.iter().map(|p| p.pos).collect();

        // Same count, fresh positions.
        assert_eq!(first.len(), second.len());
        assert!(first.iter().zip(&second).any(|(a, b)| a != b));
    }

    #[test]
    fn resize_then_initialize_adopts_the_new_budget() {
        let mut field = sized_field(1000.0, 1000.0);
        let mut rng = rand::rng();
        field.initialize(&mut rng);
        assert_eq!(field.particles.len(), 50);

        field.resize(Vec2::new(200.0, 50.0));
        field.initialize(&mut rng);
        assert_eq!(field.particles.len(), 1);
    }
}
