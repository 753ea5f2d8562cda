//! Info panel - read-only summary of the record

use egui::{RichText, Ui};
use geo_form_types::{UserRecord, NOT_ENTERED};

/// One line of the summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub label: &'static str,
    pub value: String,
}

/// Summary lines in display order, empty values replaced by "Not entered"
pub fn summary_rows(record: &UserRecord) -> Vec<SummaryRow> {
    let address = &record.address;
    [
        ("Name", &record.name),
        ("Phone", &record.phone),
        ("City", &address.city),
        ("State", &address.state),
        ("Country", &address.country),
        ("Postcode", &address.postcode),
    ]
    .into_iter()
    .map(|(label, value)| SummaryRow {
        label,
        value: if value.is_empty() {
            NOT_ENTERED.to_string()
        } else {
            value.clone()
        },
    })
    .collect()
}

pub fn info_panel(ui: &mut Ui, record: &UserRecord) {
    ui.vertical(|ui| {
        ui.add_space(ui.available_height() * 0.2);
        ui.heading(RichText::new("User Details").strong());
        ui.add_space(10.0);

        for row in summary_rows(record) {
            ui.label(format!("{}: {}", row.label, row.value));
            ui.add_space(4.0);
        }
    });
}
