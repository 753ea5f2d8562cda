//! Shared helpers for lookup-flow tests

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use geo_form_types::GeoPoint;
use geo_form_ui::api::GeocodeBackend;
use geo_form_ui::{LocationResolver, LookupFailure, LookupQueue, ViewController};
use tokio::sync::Notify;

pub const POKHARA_BODY: &str = r#"{
    "place_id": 150119406,
    "display_name": "Lakeside Road, Baidam, Pokhara, Gandaki Province, 33700, Nepal",
    "address": {
        "road": "Lakeside Road",
        "neighbourhood": "Baidam",
        "city": "Pokhara",
        "state": "Gandaki Province",
        "postcode": "33700",
        "country": "Nepal",
        "country_code": "np"
    }
}"#;

pub const LAKESIDE: GeoPoint = GeoPoint::new(28.2088, 83.9589);

/// Always answers with the same body
pub struct CannedBackend {
    body: String,
    calls: AtomicUsize,
}

impl CannedBackend {
    pub fn new(body: &str) -> Self {
        Self {
            body: body.to_string(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GeocodeBackend for CannedBackend {
    async fn reverse(&self, _point: GeoPoint) -> Result<String, LookupFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.body.clone())
    }
}

/// Always fails
pub struct FailingBackend(pub LookupFailure);

#[async_trait]
impl GeocodeBackend for FailingBackend {
    async fn reverse(&self, _point: GeoPoint) -> Result<String, LookupFailure> {
        Err(self.0.clone())
    }
}

/// Never answers
pub struct StalledBackend;

#[async_trait]
impl GeocodeBackend for StalledBackend {
    async fn reverse(&self, _point: GeoPoint) -> Result<String, LookupFailure> {
        std::future::pending().await
    }
}

/// Answers every point immediately except `held`, which waits for `release`
pub struct GatedBackend {
    pub held: GeoPoint,
    pub release: Notify,
}

#[async_trait]
impl GeocodeBackend for GatedBackend {
    async fn reverse(&self, point: GeoPoint) -> Result<String, LookupFailure> {
        if point == self.held {
            self.release.notified().await;
            return Ok(r#"{"address": {"city": "Held"}}"#.to_string());
        }
        Ok(r#"{"address": {"city": "Fresh"}}"#.to_string())
    }
}

pub fn resolver(backend: Arc<dyn GeocodeBackend>) -> LocationResolver {
    LocationResolver::new(backend, tokio::runtime::Handle::current())
}

/// Yield to spawned lookups until the queue drains (or give up)
pub async fn settle(queue: &mut LookupQueue, controller: &mut ViewController) {
    for _ in 0..200 {
        queue.apply_completed(controller);
        if queue.is_empty() {
            return;
        }
        tokio::task::yield_now().await;
    }
}
