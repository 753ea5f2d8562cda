//! Widget configuration
//!
//! Defaults reproduce the stock widget: public Nominatim, map centred on
//! Pokhara at zoom 13, no visible lookup errors. The native launcher
//! overrides these from flags / environment; the WASM build uses them as-is.

use geo_form_types::GeoPoint;

pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";
pub const DEFAULT_MAP_CENTER: GeoPoint = GeoPoint::new(28.20883485213087, 83.98121383675318);
pub const DEFAULT_MAP_ZOOM: f64 = 13.0;

#[derive(Debug, Clone, PartialEq)]
pub struct GeoFormConfig {
    /// Base URL of the reverse-geocoding service (`/reverse` is appended)
    pub geocoder_url: String,
    /// Sent on native builds; browsers set their own
    pub user_agent: String,
    /// Initial map centre
    pub map_center: GeoPoint,
    /// Initial map zoom level
    pub map_zoom: f64,
    /// Show an inline notice on the Address view when a lookup fails
    pub show_lookup_errors: bool,
}

impl Default for GeoFormConfig {
    fn default() -> Self {
        Self {
            geocoder_url: DEFAULT_GEOCODER_URL.to_string(),
            user_agent: default_user_agent(),
            map_center: DEFAULT_MAP_CENTER,
            map_zoom: DEFAULT_MAP_ZOOM,
            show_lookup_errors: false,
        }
    }
}

pub fn default_user_agent() -> String {
    format!("geo-form/{}", env!("CARGO_PKG_VERSION"))
}
