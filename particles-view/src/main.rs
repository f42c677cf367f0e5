//! Application entry point for the portfolio section viewer.
//!
//! This binary installs the log subscriber, sets up eframe/egui, and
//! delegates all interactive logic and rendering to [`Viewer`] from the
//! `viewer` module.

mod viewer;

use viewer::Viewer;

/// Starts the native eframe application.
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if eframe fails to create the native window or event loop.
fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let options = eframe::NativeOptions::default();

    eframe::run_native(
        "Portfolio Sections",
        options,
        Box::new(|_cc| Ok(Box::new(Viewer::new()))),
    )
}
