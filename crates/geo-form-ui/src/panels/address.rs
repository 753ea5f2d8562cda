//! Address panel - hosts the map view

use egui::Ui;
use geo_form_types::GeoPoint;

use crate::map::{MapView, MapViewData};
use crate::state::ViewController;

/// Render the map for the current controller state; returns a picked point
pub fn address_panel(
    ui: &mut Ui,
    map: &mut MapView,
    controller: &ViewController,
    show_lookup_errors: bool,
) -> Option<GeoPoint> {
    let status = controller.lookup_status();
    let data = MapViewData {
        marker: controller.marker(),
        popup: controller
            .marker()
            .map(|_| controller.record().address.popup_label()),
        is_pending: status.is_pending(),
        failure: status.failure().filter(|_| show_lookup_errors),
    };
    map.ui(ui, &data)
}
