//! Single-page portfolio viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the per-section animator
//! registry and implements [`eframe::App`]. It plays the navigation
//! collaborator role: clicking a section label activates that section's
//! animator and deactivates every other one, and each `update` pass
//! drives exactly one animation tick for the active field.

use eframe::App;
use glam::Vec2;
use particles_core::{
    animator::SectionAnimator, config::Config, field::Field, pointer::PointerState,
    registry::AnimatorRegistry,
};

/// Section labels, in navigation order.
pub const SECTIONS: [&str; 5] = ["Home", "About", "Resume", "Portfolio", "Contact"];

const RESUME_TABS: [&str; 3] = ["Experience", "Education", "Skills"];
const PORTFOLIO_TABS: [&str; 3] = ["Web", "Apps", "Design"];

const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(13, 17, 23);

/// Main application state for the portfolio viewer.
///
/// [`Viewer`] glues together:
/// - The animator registry from `particles-core`, one animator per
///   visited section.
/// - Navigation state (active section, pending switch) and the
///   resume/portfolio tab selections.
/// - eframe/egui callbacks for input translation and painting.
///
/// The per-frame update is:
/// 1. Draw the navigation bar; a click records a pending switch.
/// 2. Apply the pending switch through [`AnimatorRegistry::activate`].
/// 3. Draw the active section: heading, tab row, then the particle
///    surface — resize check, pointer translation, one tick, painting.
pub struct Viewer {
    registry: AnimatorRegistry,
    active_section: usize,
    pending_section: Option<usize>,
    started: bool,
    resume_tab: usize,
    portfolio_tab: usize,
    surface_size: Vec2,
    rng: rand::rngs::ThreadRng,
}

impl Viewer {
    pub fn new() -> Self {
        Self {
            registry: AnimatorRegistry::new(),
            active_section: 0,
            pending_section: None,
            started: false,
            resume_tab: 0,
            portfolio_tab: 0,
            surface_size: Vec2::ZERO,
            rng: rand::rng(),
        }
    }

    /// Lazily creates the animator for a section the first time it is
    /// shown. Every section in this layout hosts a drawing surface; an
    /// animator built without one would simply stay inert.
    fn ensure_section(&mut self, section: usize) {
        if !self.registry.contains(section) {
            let field = Field::new(Config::default());
            self.registry.insert(SectionAnimator::new(section, Some(field)));
        }
    }

    /// Switches the visible section: start its animator, stop the rest.
    fn select_section(&mut self, section: usize, surface_size: Vec2) {
        self.active_section = section;
        self.ensure_section(section);
        self.registry.activate(section, surface_size, &mut self.rng);
        self.started = true;
    }

    /// Builds the top navigation bar. Clicks are deferred one step so the
    /// switch happens before the section body is drawn.
    fn ui_nav_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                for (index, label) in SECTIONS.iter().enumerate() {
                    let selected = self.active_section == index;
                    if ui.selectable_label(selected, *label).clicked() && !selected {
                        self.pending_section = Some(index);
                    }
                }
            });
        });
    }

    /// Exclusive tab row used by the resume and portfolio sections.
    fn ui_tab_row(ui: &mut egui::Ui, labels: &[&str], selected: &mut usize) {
        ui.horizontal(|ui| {
            for (index, label) in labels.iter().enumerate() {
                if ui.selectable_label(*selected == index, *label).clicked() {
                    *selected = index;
                }
            }
        });
    }

    /// Draws the active section: heading, tab row where the section has
    /// one, and the particle surface filling the remaining area.
    fn ui_section_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(SECTIONS[self.active_section]);
            match self.active_section {
                2 => Self::ui_tab_row(ui, &RESUME_TABS, &mut self.resume_tab),
                3 => Self::ui_tab_row(ui, &PORTFOLIO_TABS, &mut self.portfolio_tab),
                _ => {}
            }

            let response = ui.allocate_response(ui.available_size(), egui::Sense::hover());
            let rect = response.rect;
            let painter = ui.painter_at(rect);
            let size = Vec2::new(rect.width(), rect.height());
            self.surface_size = size;

            // First pass plays the document-ready role: the initial
            // section starts once its surface has a measured size.
            if !self.started {
                self.select_section(self.active_section, size);
            }

            painter.rect_filled(rect, egui::CornerRadius::ZERO, BACKGROUND);

            let active = self.active_section;
            let rng = &mut self.rng;
            let Some(animator) = self.registry.get_mut(active) else {
                return;
            };

            animator.handle_resize(size, rng);

            let origin = Vec2::new(rect.min.x, rect.min.y);
            match response.hover_pos() {
                Some(p) => {
                    animator.pointer_moved(PointerState::to_local(Vec2::new(p.x, p.y), origin));
                }
                None => animator.pointer_left(),
            }

            if let Some(links) = animator.tick() {
                if let Some(field) = animator.field() {
                    for particle in &field.particles {
                        painter.circle_filled(
                            to_screen(rect, particle.pos),
                            particle.size,
                            egui::Color32::WHITE,
                        );
                    }
                }
                for link in &links {
                    let alpha = (link.opacity * 255.0) as u8;
                    painter.line_segment(
                        [to_screen(rect, link.a), to_screen(rect, link.b)],
                        egui::Stroke::new(link.width, egui::Color32::from_white_alpha(alpha)),
                    );
                }

                // One repaint request per active field per frame keeps
                // the loop synced to the display refresh; a stopped
                // animator issues none.
                ctx.request_repaint();
            }
        });
    }
}

/// Maps a surface-local position onto the screen.
fn to_screen(rect: egui::Rect, p: Vec2) -> egui::Pos2 {
    egui::pos2(rect.min.x + p.x, rect.min.y + p.y)
}

impl App for Viewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_nav_bar(ctx);

        if let Some(next) = self.pending_section.take() {
            let size = self.surface_size;
            self.select_section(next, size);
        }

        self.ui_section_panel(ctx);
    }
}
