//! Per-frame phases for a particle field.
//!
//! A rendered frame runs:
//! 1. [`motion_phase`] — every particle eases toward the pointer or
//!    drifts, then reflects at the surface bounds.
//! 2. [`link_phase`] — proximity links are collected for drawing, first
//!    between particle pairs, then from particles to the pointer.
//!
//! Pair enumeration is O(n²) over at most `Config::max_particles`
//! particles; no spatial index is needed at that scale.

use crate::field::Field;
use glam::Vec2;

/// A line segment to draw this frame, with its stroke settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: Vec2,
    pub b: Vec2,
    pub opacity: f32,
    pub width: f32,
}

/// Linear fade: fully opaque at distance 0, exactly 0 at `radius`.
#[inline]
pub fn link_opacity(dist: f32, radius: f32) -> f32 {
    1.0 - dist / radius
}

/// Updates every particle in collection order against the field's
/// current pointer and bounds. Order affects draw overlap only.
pub fn motion_phase(field: &mut Field) {
    let pointer = field.pointer.pos();
    let bounds = field.size;
    for p in &mut field.particles {
        p.update(pointer, bounds, &field.cfg);
    }
}

/// Collects the links to draw for the current particle positions.
///
/// Every unordered particle pair closer than the particle-link radius
/// yields one link; if the pointer is present, every particle within the
/// pointer-link radius yields one more. Pointer links are suppressed
/// while either pointer coordinate sits exactly at zero.
pub fn link_phase(field: &Field) -> Vec<Link> {
    let cfg = &field.cfg;
    let particles = &field.particles;
    let mut links = Vec::new();

    for a in 0..particles.len() {
        for b in (a + 1)..particles.len() {
            let dist = particles[a].pos.distance(particles[b].pos);
            if dist < cfg.particle_link_radius {
                links.push(Link {
                    a: particles[a].pos,
                    b: particles[b].pos,
                    opacity: link_opacity(dist, cfg.particle_link_radius),
                    width: cfg.particle_link_width,
                });
            }
        }
    }

    if let Some(pointer) = field.pointer.pos()
        && pointer.x != 0.0
        && pointer.y != 0.0
    {
        for p in particles {
            let dist = p.pos.distance(pointer);
            if dist < cfg.pointer_link_radius {
                links.push(Link {
                    a: p.pos,
                    b: pointer,
                    opacity: link_opacity(dist, cfg.pointer_link_radius),
                    width: cfg.pointer_link_width,
                });
            }
        }
    }

    links
}
