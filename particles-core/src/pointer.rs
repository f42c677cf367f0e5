use glam::Vec2;

/// Pointer location in one field's local coordinate space.
///
/// `None` means the pointer is outside the surface (or has never entered
/// it); particles then drift freely and no pointer links are drawn. Each
/// field owns exactly one `PointerState`; it is never shared between
/// sections.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerState {
    pos: Option<Vec2>,
}

impl PointerState {
    pub fn set(&mut self, pos: Vec2) {
        self.pos = Some(pos);
    }

    pub fn clear(&mut self) {
        self.pos = None;
    }

    pub fn pos(&self) -> Option<Vec2> {
        self.pos
    }

    /// Translates a raw on-screen position into surface-local coordinates
    /// by subtracting the surface's on-screen origin, so pointer motion is
    /// independent of page scroll and layout.
    pub fn to_local(raw: Vec2, surface_origin: Vec2) -> Vec2 {
        raw - surface_origin
    }
}
