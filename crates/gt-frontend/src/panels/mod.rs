//! UI panels

mod stats;
mod viewport;

pub use stats::StatsPanel;
pub use viewport::ViewportPanel;

use crate::state::SharedAppState;

/// Panel trait for UI panels
pub trait Panel {
    /// Panel name for headings
    fn name(&self) -> &str;

    /// Draw the panel UI
    fn ui(&mut self, ui: &mut egui::Ui, app_state: &SharedAppState);
}
