#[derive(Clone, Copy, Debug)]
pub struct Config {
    pub attraction_radius: f32,
    pub ease: f32,
    pub particle_link_radius: f32,
    pub particle_link_width: f32,
    pub pointer_link_radius: f32,
    pub pointer_link_width: f32,
    pub max_particles: usize,
    pub area_per_particle: f32,
    pub min_size: f32,
    pub max_size: f32,
    pub max_drift: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            attraction_radius: 150.0,
            ease: 0.015,
            particle_link_radius: 80.0,
            particle_link_width: 0.5,
            pointer_link_radius: 100.0,
            pointer_link_width: 0.8,
            max_particles: 50,
            area_per_particle: 10_000.0,
            min_size: 1.0,
            max_size: 3.0,
            max_drift: 0.5,
        }
    }
}
