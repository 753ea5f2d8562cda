//! State types shared by the controller, resolver and panels

use geo_form_types::GeoPoint;

/// Identifies one reverse-geocode request.
///
/// Issued by [`super::ViewController::begin_lookup`]; only the ticket with the
/// newest generation may write the address.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookupTicket {
    pub generation: u64,
    pub point: GeoPoint,
}

/// Outcome of the most recent lookup (UI-only, never touches the record)
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LookupStatus {
    #[default]
    Idle,
    Pending,
    Resolved,
    Failed(String),
}

impl LookupStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, LookupStatus::Pending)
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            LookupStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}
