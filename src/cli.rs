//! Command-line / environment configuration for the desktop launcher

use clap::Parser;
use geo_form_types::GeoPoint;
use geo_form_ui::config::{self, GeoFormConfig};

#[derive(Parser, Debug)]
#[command(name = "geo-form")]
#[command(version)]
#[command(about = "Enter a name and phone number, pick a location on the map, review the address")]
pub struct Cli {
    /// Reverse-geocoding service base URL (`/reverse` is appended)
    #[arg(long, env = "GEO_FORM_GEOCODER_URL", default_value = config::DEFAULT_GEOCODER_URL)]
    pub geocoder_url: String,

    /// User-Agent sent to the geocoder
    #[arg(long, env = "GEO_FORM_USER_AGENT")]
    pub user_agent: Option<String>,

    /// Initial map centre latitude
    #[arg(long, env = "GEO_FORM_CENTER_LAT", default_value_t = config::DEFAULT_MAP_CENTER.latitude, allow_negative_numbers = true)]
    pub center_lat: f64,

    /// Initial map centre longitude
    #[arg(long, env = "GEO_FORM_CENTER_LON", default_value_t = config::DEFAULT_MAP_CENTER.longitude, allow_negative_numbers = true)]
    pub center_lon: f64,

    /// Initial map zoom level (1-19)
    #[arg(long, env = "GEO_FORM_ZOOM", default_value_t = config::DEFAULT_MAP_ZOOM)]
    pub zoom: f64,

    /// Show an inline notice when an address lookup fails
    #[arg(long, env = "GEO_FORM_SHOW_LOOKUP_ERRORS")]
    pub show_lookup_errors: bool,
}

impl Cli {
    pub fn into_config(self) -> GeoFormConfig {
        GeoFormConfig {
            geocoder_url: self.geocoder_url,
            user_agent: self.user_agent.unwrap_or_else(config::default_user_agent),
            map_center: GeoPoint::new(self.center_lat, self.center_lon),
            map_zoom: self.zoom,
            show_lookup_errors: self.show_lookup_errors,
        }
    }
}
