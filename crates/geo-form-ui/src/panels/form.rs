//! Form panel - name and phone inputs
//!
//! Inputs are bound to the record: each frame they show the current value,
//! and an edit comes back as a [`FieldEdit`] for the controller to apply.

use egui::{RichText, Ui};
use geo_form_types::{UserField, UserRecord};

/// One field the user changed this frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEdit {
    pub field: UserField,
    pub value: String,
}

pub fn form_panel(ui: &mut Ui, record: &UserRecord) -> Option<FieldEdit> {
    let mut edit = None;

    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.25);
        ui.heading(RichText::new("Enter Details").strong());
        ui.add_space(12.0);

        for &field in UserField::all() {
            let mut value = record.field(field).to_string();
            let response = ui.add(
                egui::TextEdit::singleline(&mut value)
                    .hint_text(field.placeholder())
                    .desired_width(f32::INFINITY),
            );
            if response.changed() {
                edit = Some(FieldEdit { field, value });
            }
            ui.add_space(6.0);
        }
    });

    edit
}
