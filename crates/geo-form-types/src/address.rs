//! Address record and reverse-geocode payload normalization
//!
//! The reverse endpoint returns a loosely-typed `address` object whose keys
//! vary by locality. [`AddressRecord`] is the fixed shape the UI renders: seven
//! string fields, never missing.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Keys tried in order for the city line
const CITY_KEYS: &[&str] = &["city", "town", "village"];

/// Normalized address. Absent source data is always the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRecord {
    pub road: String,
    pub house_number: String,
    pub neighbourhood: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postcode: String,
}

impl AddressRecord {
    /// Build from the `address` object of a reverse-geocode response
    pub fn from_components(components: &Map<String, Value>) -> Self {
        Self {
            road: component(components, "road"),
            house_number: component(components, "house_number"),
            neighbourhood: component(components, "neighbourhood"),
            city: first_component(components, CITY_KEYS),
            state: component(components, "state"),
            country: component(components, "country"),
            postcode: component(components, "postcode"),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Marker popup text: `road, city, country`
    pub fn popup_label(&self) -> String {
        format!("{}, {}, {}", self.road, self.city, self.country)
    }
}

fn component(components: &Map<String, Value>, key: &str) -> String {
    text_value(components.get(key)).unwrap_or_default()
}

fn first_component(components: &Map<String, Value>, keys: &[&str]) -> String {
    keys.iter()
        .find_map(|key| text_value(components.get(*key)))
        .unwrap_or_default()
}

/// Strings and numbers count as present; empty strings and anything else do not.
fn text_value(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

// ============================================================================
// RESPONSE PAYLOAD
// ============================================================================

/// Why a reverse-geocode body could not be read
#[derive(Error, Debug)]
pub enum PayloadError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("`address` member is not an object")]
    AddressNotAnObject,
}

/// Body of `GET /reverse?format=json`.
///
/// Only the members the widget uses are kept. A missing or `null` `address`
/// is an empty object, not an error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReverseGeocodeResponse {
    #[serde(default)]
    pub address: Option<Map<String, Value>>,
    /// Set by the service when nothing is found at the point (e.g. open sea)
    #[serde(default)]
    pub error: Option<Value>,
}

impl ReverseGeocodeResponse {
    pub fn parse(body: &str) -> Result<Self, PayloadError> {
        let value: Value = serde_json::from_str(body)?;
        let mut object = match value {
            Value::Object(object) => object,
            other => return Err(PayloadError::NotAnObject(json_kind(&other))),
        };

        let address = match object.remove("address") {
            None | Some(Value::Null) => None,
            Some(Value::Object(components)) => Some(components),
            Some(_) => return Err(PayloadError::AddressNotAnObject),
        };

        Ok(Self {
            address,
            error: object.remove("error"),
        })
    }

    /// Service-reported error text, if any
    pub fn error_message(&self) -> Option<String> {
        match self.error.as_ref()? {
            Value::String(s) => Some(s.clone()),
            Value::Null => None,
            other => Some(other.to_string()),
        }
    }

    pub fn to_address(&self) -> AddressRecord {
        match &self.address {
            Some(components) => AddressRecord::from_components(components),
            None => AddressRecord::default(),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
