use crate::{
    field::Field,
    frame::{self, Link},
};
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activity {
    Inactive,
    Active,
}

/// Start/stop lifecycle for one section's particle field.
///
/// The activity flag is owned by [`SectionAnimator::start`] and
/// [`SectionAnimator::stop`] alone — it is never inferred from how the
/// section is presented. Each tick re-checks the flag, so a stale frame
/// callback arriving after a stop cancels itself instead of rendering.
#[derive(Debug)]
pub struct SectionAnimator {
    section: usize,
    field: Option<Field>,
    activity: Activity,
}

impl SectionAnimator {
    /// `field` is `None` when the hosting section has no drawing surface.
    /// Such an animator is inert: every operation is a no-op, and the
    /// condition is reported here rather than thrown at the caller.
    pub fn new(section: usize, field: Option<Field>) -> Self {
        if field.is_none() {
            tracing::warn!(section, "section has no drawing surface; animation disabled");
        }
        Self {
            section,
            field,
            activity: Activity::Inactive,
        }
    }

    pub fn section(&self) -> usize {
        self.section
    }

    pub fn is_active(&self) -> bool {
        self.activity == Activity::Active
    }

    pub fn has_surface(&self) -> bool {
        self.field.is_some()
    }

    pub fn field(&self) -> Option<&Field> {
        self.field.as_ref()
    }

    /// Inactive → Active: size the surface and regenerate the particles.
    ///
    /// A second `start` while already Active is a no-op — the population
    /// is kept and no second loop can appear.
    pub fn start(&mut self, surface_size: Vec2, rng: &mut impl Rng) {
        let Some(field) = self.field.as_mut() else {
            tracing::debug!(section = self.section, "start ignored: no drawing surface");
            return;
        };
        if self.activity == Activity::Active {
            return;
        }
        field.resize(surface_size);
        field.initialize(rng);
        self.activity = Activity::Active;
    }

    /// Active → Inactive. Idempotent, and safe before any `start`.
    pub fn stop(&mut self) {
        self.activity = Activity::Inactive;
    }

    /// Per-frame callback: advances the field and returns the links to
    /// draw, or `None` when the animator is not Active. A stopped
    /// animator never renders again until the next `start`.
    pub fn tick(&mut self) -> Option<Vec<Link>> {
        if self.activity != Activity::Active {
            return None;
        }
        let field = self.field.as_mut()?;
        frame::motion_phase(field);
        Some(frame::link_phase(field))
    }

    /// Pointer-move signal in surface-local coordinates. Honored only
    /// while Active, matching the subscription window between `start`
    /// and `stop`.
    pub fn pointer_moved(&mut self, local: Vec2) {
        if self.activity != Activity::Active {
            return;
        }
        if let Some(field) = self.field.as_mut() {
            field.pointer.set(local);
        }
    }

    /// Pointer-leave signal; clears the tracked position.
    pub fn pointer_left(&mut self) {
        if self.activity != Activity::Active {
            return;
        }
        if let Some(field) = self.field.as_mut() {
            field.pointer.clear();
        }
    }

    /// Container-resize signal. Resizing is destructive: the surface is
    /// re-measured and the whole population regenerated from scratch.
    pub fn handle_resize(&mut self, surface_size: Vec2, rng: &mut impl Rng) {
        if self.activity != Activity::Active {
            return;
        }
        if let Some(field) = self.field.as_mut()
            && field.size != surface_size
        {
            field.resize(surface_size);
            field.initialize(rng);
        }
    }
}
