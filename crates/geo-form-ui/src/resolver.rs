//! Location Resolver
//!
//! Turns a map click into an address. Each click:
//!
//! 1. places the marker synchronously (via [`ViewController::begin_lookup`])
//! 2. spawns one task that fetches and normalizes the reverse-geocode body
//! 3. deposits the outcome in a result slot the UI polls each frame
//!
//! No timeout, no retry, no cancellation. Outcomes of superseded clicks are
//! dropped by the controller's generation check.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use geo_form_types::{AddressRecord, GeoPoint, ReverseGeocodeResponse};

use crate::api::GeocodeBackend;
use crate::error::LookupFailure;
use crate::state::{LookupTicket, ViewController};

/// How often the UI re-checks in-flight lookups when idle
pub const LOOKUP_POLL_INTERVAL: Duration = Duration::from_millis(100);

pub type LookupResult = Result<AddressRecord, LookupFailure>;

/// Fetch and normalize the address at `point`. Holds no state between calls.
pub async fn resolve_point(
    backend: &dyn GeocodeBackend,
    point: GeoPoint,
) -> LookupResult {
    let body = backend.reverse(point).await?;
    let response = ReverseGeocodeResponse::parse(&body)?;
    if let Some(message) = response.error_message() {
        tracing::debug!(%point, %message, "Geocoder returned no address");
    }
    Ok(response.to_address())
}

// =============================================================================
// RESOLVER
// =============================================================================

pub struct LocationResolver {
    backend: Arc<dyn GeocodeBackend>,
    #[cfg(not(target_arch = "wasm32"))]
    runtime: tokio::runtime::Handle,
}

impl LocationResolver {
    #[cfg(target_arch = "wasm32")]
    pub fn new(backend: Arc<dyn GeocodeBackend>) -> Self {
        Self { backend }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn new(backend: Arc<dyn GeocodeBackend>, runtime: tokio::runtime::Handle) -> Self {
        Self { backend, runtime }
    }

    /// Stateless transform, usable without spawning
    pub async fn resolve(&self, point: GeoPoint) -> LookupResult {
        resolve_point(self.backend.as_ref(), point).await
    }

    /// Handle a point selection: marker first, then one background lookup
    pub fn on_point_selected(
        &self,
        controller: &mut ViewController,
        point: GeoPoint,
    ) -> PendingLookup {
        let ticket = controller.begin_lookup(point);
        tracing::debug!(generation = ticket.generation, %point, "Point selected");

        let slot: Arc<Mutex<Option<LookupResult>>> = Arc::new(Mutex::new(None));
        let slot_clone = slot.clone();
        let backend = self.backend.clone();

        let task = async move {
            let outcome = resolve_point(backend.as_ref(), point).await;
            if let Ok(mut guard) = slot_clone.lock() {
                *guard = Some(outcome);
            }
        };

        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(task);

        #[cfg(not(target_arch = "wasm32"))]
        self.runtime.spawn(task);

        PendingLookup { ticket, slot }
    }
}

// =============================================================================
// IN-FLIGHT LOOKUPS
// =============================================================================

/// One spawned lookup and the slot its task writes into
pub struct PendingLookup {
    ticket: LookupTicket,
    slot: Arc<Mutex<Option<LookupResult>>>,
}

impl PendingLookup {
    pub fn ticket(&self) -> LookupTicket {
        self.ticket
    }

    /// Take the outcome if the task has finished
    pub fn try_take(&self) -> Option<LookupResult> {
        self.slot.try_lock().ok().and_then(|mut guard| guard.take())
    }
}

/// Lookups the UI is still waiting on
#[derive(Default)]
pub struct LookupQueue {
    in_flight: Vec<PendingLookup>,
}

impl LookupQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, lookup: PendingLookup) {
        self.in_flight.push(lookup);
    }

    pub fn is_empty(&self) -> bool {
        self.in_flight.is_empty()
    }

    pub fn len(&self) -> usize {
        self.in_flight.len()
    }

    /// Delay before the next frame should poll again, if anything is in flight
    pub fn repaint_after(&self) -> Option<Duration> {
        (!self.is_empty()).then_some(LOOKUP_POLL_INTERVAL)
    }

    /// Hand every finished outcome to the controller, in click order.
    /// Returns how many outcomes were applied (stale ones are not counted).
    pub fn apply_completed(&mut self, controller: &mut ViewController) -> usize {
        let mut applied = 0;
        self.in_flight.retain(|lookup| match lookup.try_take() {
            Some(outcome) => {
                if controller.complete_lookup(lookup.ticket(), outcome) {
                    applied += 1;
                }
                false
            }
            None => true,
        });
        applied
    }
}
