use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{EngineError, EntityType, FieldValue, Position, Result, Size};

/// One entity record as stored in a map file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntityData {
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub layer: i32,
    #[serde(default)]
    pub position: Position,
    #[serde(default, skip_serializing_if = "Size::is_empty")]
    pub size: Size,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<i32>,
    #[serde(default)]
    fields: BTreeMap<String, FieldValue>,
}

impl EntityData {
    /// Creates a record with every declared field set to its default.
    pub fn new(entity_type: EntityType) -> Self {
        let fields = entity_type
            .fields()
            .iter()
            .map(|spec| (spec.key.to_string(), spec.default.to_value()))
            .collect();
        Self {
            entity_type,
            name: None,
            layer: 0,
            position: Position::default(),
            size: Size::default(),
            direction: None,
            fields,
        }
    }

    /// Adds defaults for declared fields the record is missing and drops
    /// values that do not match their declared kind.
    pub fn complete_fields(&mut self) {
        for spec in self.entity_type.fields() {
            match self.fields.get(spec.key) {
                Some(value) if value.kind() == spec.kind() => {}
                Some(value) => {
                    log::warn!(
                        "{} field '{}' has a {} value, resetting to default",
                        self.entity_type,
                        spec.key,
                        value.kind()
                    );
                    self.fields.insert(spec.key.to_string(), spec.default.to_value());
                }
                None => {
                    self.fields.insert(spec.key.to_string(), spec.default.to_value());
                }
            }
        }
    }

    pub fn get_field(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get_field(key).and_then(FieldValue::as_bool)
    }

    pub fn get_integer(&self, key: &str) -> Option<i32> {
        self.get_field(key).and_then(FieldValue::as_integer)
    }

    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.get_field(key).and_then(FieldValue::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Stores a field value after checking it against the type's schema.
    /// Returns the previous value.
    pub fn set_field(&mut self, key: &str, value: FieldValue) -> Result<Option<FieldValue>> {
        let Some(spec) = self.entity_type.field_spec(key) else {
            return Err(EngineError::UnknownField {
                entity_type: self.entity_type,
                key: key.to_string(),
            });
        };
        if spec.kind() != value.kind() {
            return Err(EngineError::FieldTypeMismatch {
                key: key.to_string(),
                expected: spec.kind(),
                actual: value.kind(),
            });
        }
        Ok(self.fields.insert(key.to_string(), value))
    }
}
