use crate::animator::SectionAnimator;
use glam::Vec2;
use rand::Rng;
use std::collections::BTreeMap;

/// Process-wide map from section index to its animator.
///
/// Owned by the entry point for the lifetime of the process. Animators
/// are added lazily as sections first become visible and never removed.
/// All operations are total: an unknown index or a surface-less section
/// never fails the caller.
#[derive(Debug, Default)]
pub struct AnimatorRegistry {
    animators: BTreeMap<usize, SectionAnimator>,
}

impl AnimatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, animator: SectionAnimator) {
        self.animators.insert(animator.section(), animator);
    }

    pub fn contains(&self, section: usize) -> bool {
        self.animators.contains_key(&section)
    }

    pub fn get(&self, section: usize) -> Option<&SectionAnimator> {
        self.animators.get(&section)
    }

    pub fn get_mut(&mut self, section: usize) -> Option<&mut SectionAnimator> {
        self.animators.get_mut(&section)
    }

    pub fn len(&self) -> usize {
        self.animators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animators.is_empty()
    }

    pub fn start(&mut self, section: usize, surface_size: Vec2, rng: &mut impl Rng) {
        match self.animators.get_mut(&section) {
            Some(animator) => animator.start(surface_size, rng),
            None => tracing::debug!(section, "start ignored: unknown section"),
        }
    }

    pub fn stop(&mut self, section: usize) {
        if let Some(animator) = self.animators.get_mut(&section) {
            animator.stop();
        }
    }

    /// The navigation switch: stops every other section's animator, then
    /// starts this one.
    pub fn activate(&mut self, section: usize, surface_size: Vec2, rng: &mut impl Rng) {
        for (&index, animator) in self.animators.iter_mut() {
            if index != section {
                animator.stop();
            }
        }
        self.start(section, surface_size, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, field::Field};
    use glam::Vec2;

    const SURFACE: Vec2 = Vec2::new(600.0, 400.0);

    fn registry_with(sections: &[usize]) -> AnimatorRegistry {
        let mut registry = AnimatorRegistry::new();
        for &section in sections {
            registry.insert(SectionAnimator::new(section, Some(Field::new(Config::default()))));
        }
        registry
    }

    #[test]
    fn start_and_stop_on_unknown_sections_are_ignored() {
        let mut registry = registry_with(&[0, 1]);
        let mut rng = rand::rng();
        registry.start(99, SURFACE, &mut rng);
        registry.stop(99);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn activate_leaves_exactly_one_section_running() {
        let mut registry = registry_with(&[0, 1, 2]);
        let mut rng = rand::rng();

        registry.activate(0, SURFACE, &mut rng);
        registry.activate(2, SURFACE, &mut rng);

        assert!(!registry.get(0).unwrap().is_active());
        assert!(!registry.get(1).unwrap().is_active());
        assert!(registry.get(2).unwrap().is_active());
    }

    #[test]
    fn animators_persist_across_switches() {
        let mut registry = registry_with(&[0, 1, 2]);
        let mut rng = rand::rng();

        for section in [0, 1, 2, 0] {
            registry.activate(section, SURFACE, &mut rng);
        }
        // Never removed, only deactivated.
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn activate_tolerates_a_surfaceless_section() {
        let mut registry = registry_with(&[0]);
        registry.insert(SectionAnimator::new(1, None));
        let mut rng = rand::rng();

        registry.activate(1, SURFACE, &mut rng);

        // The switch still stops the previous section; the target stays
        // inert instead of failing.
        assert!(!registry.get(0).unwrap().is_active());
        assert!(!registry.get(1).unwrap().is_active());
    }
}
