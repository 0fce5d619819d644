//! Payload checks run before restaurant handlers touch the repository.
//!
//! Checks are plain functions executed in order; the first failure stops
//! the pipeline.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::domain::restaurant::{RestaurantChanges, RestaurantFields};

/// The `data` object of a request body, keys in the order the client sent them
pub type Payload = Map<String, Value>;

/// A single validation step
pub type Check = fn(&Payload) -> Result<(), ValidationError>;

/// Client-writable restaurant fields; also the required set on create
pub const VALID_PROPERTIES: [&str; 3] = ["restaurant_name", "cuisine", "address"];

/// Pipeline applied to create payloads
pub const CREATE_CHECKS: &[Check] = &[has_only_valid_properties, has_required_properties];

/// Pipeline applied to update payloads
pub const UPDATE_CHECKS: &[Check] = &[has_only_updatable_properties];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid field(s): {}", .0.join(", "))]
    InvalidFields(Vec<String>),

    #[error("A '{0}' property is required.")]
    MissingProperty(&'static str),

    #[error("Invalid restaurant data: {0}")]
    InvalidValue(String),
}

/// Runs `checks` against `data`, stopping at the first failure
pub fn run(checks: &[Check], data: &Payload) -> Result<(), ValidationError> {
    checks.iter().try_for_each(|check| check(data))
}

/// Rejects any key outside [`VALID_PROPERTIES`]
pub fn has_only_valid_properties(data: &Payload) -> Result<(), ValidationError> {
    reject_unknown(data, &VALID_PROPERTIES)
}

/// Like [`has_only_valid_properties`] but tolerates `restaurant_id`, which the
/// update handler overrides with the stored identifier
pub fn has_only_updatable_properties(data: &Payload) -> Result<(), ValidationError> {
    reject_unknown(data, &["restaurant_name", "cuisine", "address", "restaurant_id"])
}

/// Requires every field in [`VALID_PROPERTIES`] to be present and non-empty
pub fn has_required_properties(data: &Payload) -> Result<(), ValidationError> {
    match VALID_PROPERTIES
        .iter()
        .find(|property| data.get(**property).map_or(true, is_blank))
    {
        Some(missing) => Err(ValidationError::MissingProperty(*missing)),
        None => Ok(()),
    }
}

/// Converts a validated create payload into typed fields
pub fn into_fields(data: Payload) -> Result<RestaurantFields, ValidationError> {
    serde_json::from_value(Value::Object(data))
        .map_err(|e| ValidationError::InvalidValue(e.to_string()))
}

/// Converts a validated update payload into the set of changed fields
pub fn into_changes(data: Payload) -> Result<RestaurantChanges, ValidationError> {
    serde_json::from_value(Value::Object(data))
        .map_err(|e| ValidationError::InvalidValue(e.to_string()))
}

fn reject_unknown(data: &Payload, allowed: &[&str]) -> Result<(), ValidationError> {
    let invalid: Vec<String> = data
        .keys()
        .filter(|field| !allowed.contains(&field.as_str()))
        .cloned()
        .collect();

    if invalid.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::InvalidFields(invalid))
    }
}

// null, "", false and 0 count as absent
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::Array(_) | Value::Object(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> Payload {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {}", other),
        }
    }

    fn complete() -> Payload {
        payload(json!({
            "restaurant_name": "A",
            "cuisine": "B",
            "address": "C"
        }))
    }

    #[test]
    fn complete_payload_passes_create_checks() {
        assert_eq!(run(CREATE_CHECKS, &complete()), Ok(()));
    }

    #[test]
    fn invalid_fields_listed_in_input_order() {
        let data = payload(json!({
            "zeta": 1,
            "restaurant_name": "A",
            "alpha": 2,
            "cuisine": "B",
            "address": "C"
        }));

        let err = has_only_valid_properties(&data).unwrap_err();

        assert_eq!(
            err,
            ValidationError::InvalidFields(vec!["zeta".to_string(), "alpha".to_string()])
        );
        assert_eq!(err.to_string(), "Invalid field(s): zeta, alpha");
    }

    #[test]
    fn restaurant_id_is_invalid_on_create() {
        let mut data = complete();
        data.insert("restaurant_id".to_string(), json!(9));

        assert_eq!(
            run(CREATE_CHECKS, &data).unwrap_err().to_string(),
            "Invalid field(s): restaurant_id"
        );
    }

    #[test]
    fn restaurant_id_is_tolerated_on_update() {
        let data = payload(json!({ "restaurant_id": 9, "cuisine": "B" }));
        assert_eq!(run(UPDATE_CHECKS, &data), Ok(()));
    }

    #[test]
    fn unknown_field_rejected_on_update() {
        let data = payload(json!({ "rating": 5 }));
        assert_eq!(
            run(UPDATE_CHECKS, &data).unwrap_err().to_string(),
            "Invalid field(s): rating"
        );
    }

    #[test]
    fn missing_property_names_first_in_required_order() {
        let data = payload(json!({ "restaurant_name": "A" }));

        let err = has_required_properties(&data).unwrap_err();

        assert_eq!(err, ValidationError::MissingProperty("cuisine"));
        assert_eq!(err.to_string(), "A 'cuisine' property is required.");
    }

    #[test]
    fn blank_values_count_as_missing() {
        for blank in [json!(null), json!(""), json!(false), json!(0)] {
            let mut data = complete();
            data.insert("address".to_string(), blank);

            assert_eq!(
                has_required_properties(&data),
                Err(ValidationError::MissingProperty("address"))
            );
        }
    }

    #[test]
    fn empty_payload_reports_restaurant_name() {
        assert_eq!(
            run(CREATE_CHECKS, &Payload::new()),
            Err(ValidationError::MissingProperty("restaurant_name"))
        );
    }

    #[test]
    fn invalid_fields_checked_before_required() {
        let data = payload(json!({ "bogus": true }));
        assert!(matches!(
            run(CREATE_CHECKS, &data),
            Err(ValidationError::InvalidFields(_))
        ));
    }

    #[test]
    fn into_fields_rejects_non_string_values() {
        let mut data = complete();
        data.insert("cuisine".to_string(), json!(42));

        assert!(matches!(
            into_fields(data),
            Err(ValidationError::InvalidValue(_))
        ));
    }

    #[test]
    fn into_changes_ignores_restaurant_id() {
        let data = payload(json!({ "restaurant_id": 99, "address": "New" }));

        let changes = into_changes(data).unwrap();

        assert_eq!(changes.address.as_deref(), Some("New"));
        assert!(changes.restaurant_name.is_none());
        assert!(changes.cuisine.is_none());
    }
}
