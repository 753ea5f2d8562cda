//! Side menu - persistent view selector

use egui::{Color32, RichText, Ui};
use geo_form_types::ViewMode;

const ACTIVE_FILL: Color32 = Color32::from_rgb(180, 83, 9);

/// Render the menu; returns the view the user picked, if any
pub fn side_menu(ui: &mut Ui, active: ViewMode) -> Option<ViewMode> {
    let mut picked = None;

    ui.add_space(24.0);
    ui.vertical_centered_justified(|ui| {
        for &mode in ViewMode::all() {
            let is_active = mode == active;
            let text = RichText::new(mode.display_name()).size(17.0).strong();
            let button = egui::Button::new(text)
                .min_size(egui::vec2(0.0, 36.0))
                .fill(if is_active {
                    ACTIVE_FILL
                } else {
                    Color32::TRANSPARENT
                });
            if ui.add(button).clicked() {
                picked = Some(mode);
            }
            ui.add_space(8.0);
        }
    });

    picked
}
