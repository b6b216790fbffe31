//! Rendering entry point for the demo host.

use ratatui::Frame;

use crate::app::App;
use crate::ui;

impl App {
    /// Render the page, the tour chrome and the key hints.
    pub fn render(&mut self, f: &mut Frame) {
        self.last_area = f.area();
        ui::render_page(f, &self.page, &self.theme);
        if let Some(presenter) = self.tour.presenter() {
            ui::panel::render_panel(f, &self.page, presenter, &self.theme);
        } else {
            ui::render_hint(f, &self.theme);
        }
    }
}
