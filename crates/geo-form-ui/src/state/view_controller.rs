//! View Controller
//!
//! Single source of truth for the widget:
//!
//! - **view_mode**: which of Form / Address / Info is shown
//! - **record**: name, phone and the last resolved address
//! - **marker**: last picked map point (overwritten, never accumulated)
//! - **lookup generation**: tags in-flight lookups so only the newest click
//!   can write the address
//!
//! State machine: any view reachable from any other, initial `Form`, no
//! terminal state. Switching views never touches the record.

use geo_form_types::{AddressRecord, GeoPoint, UserField, UserRecord, ViewMode};

use super::{LookupStatus, LookupTicket};
use crate::error::LookupFailure;

#[derive(Debug, Clone, Default)]
pub struct ViewController {
    view_mode: ViewMode,
    record: UserRecord,
    marker: Option<GeoPoint>,
    lookup_status: LookupStatus,
    generation: u64,
}

impl ViewController {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // READ ACCESS
    // =========================================================================

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn record(&self) -> &UserRecord {
        &self.record
    }

    pub fn marker(&self) -> Option<GeoPoint> {
        self.marker
    }

    pub fn lookup_status(&self) -> &LookupStatus {
        &self.lookup_status
    }

    // =========================================================================
    // VIEW + FORM
    // =========================================================================

    pub fn select_view(&mut self, mode: ViewMode) {
        if self.view_mode != mode {
            tracing::info!(from = ?self.view_mode, to = ?mode, "View changed");
        }
        self.view_mode = mode;
    }

    /// Replace one editable field, leaving everything else untouched
    pub fn update_field(&mut self, field: UserField, value: String) {
        self.record.set_field(field, value);
    }

    /// Replace the address wholesale.
    ///
    /// `None` means resolution failed: the address is cleared so every
    /// address line in the summary reads "Not entered".
    pub fn apply_address(&mut self, address: Option<AddressRecord>) {
        match address {
            Some(address) => {
                tracing::info!(
                    city = %address.city,
                    country = %address.country,
                    "Address applied"
                );
                self.record.address = address;
            }
            None => {
                self.record.address = AddressRecord::default();
            }
        }
    }

    // =========================================================================
    // MARKER + LOOKUPS
    // =========================================================================

    pub fn place_marker(&mut self, point: GeoPoint) {
        self.marker = Some(point);
    }

    /// Place the marker and open a new lookup generation.
    ///
    /// Runs synchronously before any network I/O, so the marker is visible
    /// even if the lookup never completes.
    pub fn begin_lookup(&mut self, point: GeoPoint) -> LookupTicket {
        self.place_marker(point);
        self.generation += 1;
        self.lookup_status = LookupStatus::Pending;
        LookupTicket {
            generation: self.generation,
            point,
        }
    }

    /// Apply a finished lookup. Returns false if a newer lookup superseded it.
    pub fn complete_lookup(
        &mut self,
        ticket: LookupTicket,
        outcome: Result<AddressRecord, LookupFailure>,
    ) -> bool {
        if ticket.generation != self.generation {
            match &outcome {
                Ok(_) => tracing::warn!(
                    generation = ticket.generation,
                    latest = self.generation,
                    point = %ticket.point,
                    "Dropping stale reverse-geocode response"
                ),
                Err(failure) => tracing::warn!(
                    generation = ticket.generation,
                    latest = self.generation,
                    point = %ticket.point,
                    error = %failure,
                    "Dropping stale reverse-geocode failure"
                ),
            }
            return false;
        }

        match outcome {
            Ok(address) => {
                self.lookup_status = LookupStatus::Resolved;
                self.apply_address(Some(address));
            }
            Err(failure) => {
                tracing::error!(point = %ticket.point, error = %failure, "Reverse geocoding error");
                self.lookup_status = LookupStatus::Failed(failure.to_string());
                self.apply_address(None);
            }
        }
        true
    }
}
