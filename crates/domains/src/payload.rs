//! # Raw payloads
//!
//! Entities are parsed from untyped JSON objects: request bodies on the way in,
//! storage rows (`row_to_json`) on the way out. `Shape` holds the two rules
//! every entity applies in order: presence of all required keys first, then
//! their JSON types.

use serde_json::{Map, Value};

use crate::error::ValidationError;

/// A raw mapping of string keys to JSON values.
pub type Payload = Map<String, Value>;

/// Shape checker bound to one entity name and one payload.
pub(crate) struct Shape<'a> {
    entity: &'static str,
    payload: &'a Payload,
}

impl<'a> Shape<'a> {
    pub(crate) fn new(entity: &'static str, payload: &'a Payload) -> Self {
        Self { entity, payload }
    }

    /// Fails on the first key that is absent, `null`, or an empty string.
    /// `false` and `0` count as present.
    pub(crate) fn require(&self, keys: &[&'static str]) -> Result<(), ValidationError> {
        match keys.iter().find(|key| is_absent(self.payload.get(**key))) {
            Some(key) => Err(ValidationError::missing(self.entity, *key)),
            None => Ok(()),
        }
    }

    pub(crate) fn string(&self, key: &'static str) -> Result<String, ValidationError> {
        match self.payload.get(key) {
            Some(Value::String(s)) => Ok(s.clone()),
            _ => Err(ValidationError::wrong_type(self.entity, key)),
        }
    }

    pub(crate) fn boolean(&self, key: &'static str) -> Result<bool, ValidationError> {
        match self.payload.get(key) {
            Some(Value::Bool(b)) => Ok(*b),
            _ => Err(ValidationError::wrong_type(self.entity, key)),
        }
    }
}

fn is_absent(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

/// Builds a payload from `json!({...})` literals. Non-objects yield an empty payload.
pub fn payload_from(value: Value) -> Payload {
    match value {
        Value::Object(map) => map,
        _ => Payload::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationKind;
    use serde_json::json;

    #[test]
    fn presence_treats_false_and_zero_as_present() {
        let payload = payload_from(json!({ "flag": false, "count": 0 }));
        let shape = Shape::new("TEST", &payload);
        assert!(shape.require(&["flag", "count"]).is_ok());
    }

    #[test]
    fn presence_rejects_null_and_empty_string() {
        let payload = payload_from(json!({ "a": null, "b": "" }));
        let shape = Shape::new("TEST", &payload);

        let err = shape.require(&["a"]).unwrap_err();
        assert_eq!(err.kind, ValidationKind::MissingProperty);
        assert_eq!(err.property, "a");

        let err = shape.require(&["b"]).unwrap_err();
        assert_eq!(err.property, "b");
    }

    #[test]
    fn non_object_values_become_empty_payloads() {
        assert!(payload_from(json!([1, 2, 3])).is_empty());
        assert!(payload_from(json!("text")).is_empty());
    }
}
