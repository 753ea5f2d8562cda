//! geo-form UI - name / phone / map-picked address widget
//!
//! ## Modules
//!
//! - `state` - view controller (record, active view, marker, lookup generations)
//! - `resolver` - map click -> reverse geocode -> controller
//! - `api` - reverse-geocoding client (web-sys fetch / reqwest)
//! - `map` - Web-Mercator camera, point picker, painter
//! - `panels` - side menu, form, map host, summary
//! - `app` - eframe shell wiring it together

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod map;
pub mod panels;
pub mod resolver;
pub mod state;

pub use app::GeoFormApp;
pub use config::GeoFormConfig;
pub use error::LookupFailure;
pub use resolver::{LocationResolver, LookupQueue, PendingLookup};
pub use state::ViewController;

/// Id of the `<canvas>` the WASM build renders into
pub const CANVAS_ID: &str = "geo_form_canvas";

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use wasm_bindgen::JsCast;

    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    tracing::info!("geo-form UI loaded");

    let canvas = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CANVAS_ID))
        .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok());
    let Some(canvas) = canvas else {
        tracing::error!("Canvas #{} not found", CANVAS_ID);
        return;
    };

    wasm_bindgen_futures::spawn_local(async move {
        let result = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|cc| Ok(Box::new(GeoFormApp::new(cc, GeoFormConfig::default())))),
            )
            .await;
        if let Err(e) = result {
            tracing::error!("Failed to start eframe: {:?}", e);
        }
    });
}
