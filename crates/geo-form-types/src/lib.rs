//! Shared Types for geo-form
//!
//! Plain data shared by the widget and its launcher. Nothing in here performs
//! IO or touches egui.
//!
//! ## Contents
//!
//! - [`UserRecord`] - the single piece of state every view renders
//! - [`AddressRecord`] - normalized reverse-geocode result, always fully populated
//! - [`GeoPoint`] - a selected map position
//! - [`ViewMode`] / [`UserField`] - closed enumerations driving the UI

pub mod address;
pub mod geo;

use serde::{Deserialize, Serialize};

pub use address::{AddressRecord, PayloadError, ReverseGeocodeResponse};
pub use geo::GeoPoint;

/// Placeholder shown for any empty field in the summary view
pub const NOT_ENTERED: &str = "Not entered";

// ============================================================================
// USER RECORD
// ============================================================================

/// Everything the user has entered or picked during the session.
///
/// Starts empty; discarded with the session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: String,
    pub phone: String,
    pub address: AddressRecord,
}

impl UserRecord {
    /// Read one of the directly editable fields
    pub fn field(&self, field: UserField) -> &str {
        match field {
            UserField::Name => &self.name,
            UserField::Phone => &self.phone,
        }
    }

    /// Replace exactly one editable field
    pub fn set_field(&mut self, field: UserField, value: String) {
        match field {
            UserField::Name => self.name = value,
            UserField::Phone => self.phone = value,
        }
    }
}

/// Fields of [`UserRecord`] the form edits directly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserField {
    Name,
    Phone,
}

impl UserField {
    /// Input placeholder text
    pub fn placeholder(&self) -> &'static str {
        match self {
            UserField::Name => "Name",
            UserField::Phone => "Phone",
        }
    }

    pub fn all() -> &'static [UserField] {
        &[UserField::Name, UserField::Phone]
    }
}

// ============================================================================
// VIEW MODE
// ============================================================================

/// Which content view is active. Exactly one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ViewMode {
    /// Name / phone inputs
    #[default]
    Form,
    /// Map with point picker
    Address,
    /// Read-only summary
    Info,
}

impl ViewMode {
    /// Get display name for the side menu
    pub fn display_name(&self) -> &'static str {
        match self {
            ViewMode::Form => "Form",
            ViewMode::Address => "Address",
            ViewMode::Info => "Info",
        }
    }

    /// Get all view modes in menu order
    pub fn all() -> &'static [ViewMode] {
        &[ViewMode::Form, ViewMode::Address, ViewMode::Info]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_field_only_touches_named_field() {
        let mut record = UserRecord {
            name: "Asha".to_string(),
            phone: "9800000000".to_string(),
            address: AddressRecord {
                city: "Pokhara".to_string(),
                ..Default::default()
            },
        };
        let before = record.clone();

        record.set_field(UserField::Phone, "9811111111".to_string());

        assert_eq!(record.phone, "9811111111");
        assert_eq!(record.name, before.name);
        assert_eq!(record.address, before.address);
    }

    #[test]
    fn test_view_mode_defaults_to_form() {
        assert_eq!(ViewMode::default(), ViewMode::Form);
        assert_eq!(ViewMode::all().len(), 3);
    }
}
