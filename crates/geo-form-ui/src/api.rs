//! Reverse-geocoding client
//!
//! Uses web-sys fetch for WASM, reqwest for native. The raw body is handed
//! back as text; parsing and normalization live in `geo_form_types`.

use async_trait::async_trait;
use geo_form_types::GeoPoint;
use url::Url;

use crate::error::LookupFailure;

/// Source of reverse-geocode response bodies.
///
/// The production implementation is [`NominatimClient`]; tests substitute
/// canned or never-completing backends.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait GeocodeBackend: Send + Sync {
    /// Fetch the JSON body for the address at `point`
    async fn reverse(&self, point: GeoPoint) -> Result<String, LookupFailure>;
}

/// `GET {base}/reverse?lat=..&lon=..&format=json`
#[derive(Clone)]
pub struct NominatimClient {
    base_url: String,
    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    user_agent: String,
    #[cfg(not(target_arch = "wasm32"))]
    http: reqwest::Client,
}

impl NominatimClient {
    pub fn new(base_url: &str, user_agent: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            user_agent: user_agent.to_string(),
            #[cfg(not(target_arch = "wasm32"))]
            http: reqwest::Client::new(),
        }
    }

    pub fn reverse_url(&self, point: GeoPoint) -> Result<Url, LookupFailure> {
        let endpoint = format!("{}/reverse", self.base_url);
        let url = Url::parse_with_params(
            &endpoint,
            &[
                ("lat", point.latitude.to_string()),
                ("lon", point.longitude.to_string()),
                ("format", "json".to_string()),
            ],
        )?;
        Ok(url)
    }

    #[cfg(target_arch = "wasm32")]
    async fn get_text(&self, url: &Url) -> Result<String, LookupFailure> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen_futures::JsFuture;
        use web_sys::{Request, RequestInit, RequestMode, Response};

        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::Cors);

        let request = Request::new_with_str_and_init(url.as_str(), &opts)
            .map_err(|e| LookupFailure::Transport(format!("request error: {:?}", e)))?;

        let window =
            web_sys::window().ok_or_else(|| LookupFailure::Transport("no window".to_string()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| LookupFailure::Transport(format!("fetch error: {:?}", e)))?;

        let resp: Response = resp_value
            .dyn_into()
            .map_err(|_| LookupFailure::Transport("response is not a Response".to_string()))?;

        if !resp.ok() {
            return Err(LookupFailure::Status(resp.status()));
        }

        let text = JsFuture::from(
            resp.text()
                .map_err(|e| LookupFailure::Malformed(format!("text promise error: {:?}", e)))?,
        )
        .await
        .map_err(|e| LookupFailure::Transport(format!("body error: {:?}", e)))?;

        text.as_string()
            .ok_or_else(|| LookupFailure::Malformed("body is not text".to_string()))
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn get_text(&self, url: &Url) -> Result<String, LookupFailure> {
        let response = self
            .http
            .get(url.clone())
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(|e| LookupFailure::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(LookupFailure::Status(response.status().as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| LookupFailure::Transport(e.to_string()))
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl GeocodeBackend for NominatimClient {
    async fn reverse(&self, point: GeoPoint) -> Result<String, LookupFailure> {
        let url = self.reverse_url(point)?;
        tracing::debug!(%url, "GET reverse geocode");
        self.get_text(&url).await
    }
}
