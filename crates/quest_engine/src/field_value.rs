use serde::{Deserialize, Serialize};

/// Value of an entity-specific field.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Boolean(bool),
    Integer(i32),
    String(String),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Boolean,
    Integer,
    String,
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldKind::Boolean => write!(f, "boolean"),
            FieldKind::Integer => write!(f, "integer"),
            FieldKind::String => write!(f, "string"),
        }
    }
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Boolean(_) => FieldKind::Boolean,
            FieldValue::Integer(_) => FieldKind::Integer,
            FieldValue::String(_) => FieldKind::String,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i32> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Boolean(b) => write!(f, "{b}"),
            FieldValue::Integer(i) => write!(f, "{i}"),
            FieldValue::String(s) => write!(f, "\"{s}\""),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

/// Compile-time default of a field, usable in static tables.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DefaultValue {
    Boolean(bool),
    Integer(i32),
    String(&'static str),
}

impl DefaultValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            DefaultValue::Boolean(_) => FieldKind::Boolean,
            DefaultValue::Integer(_) => FieldKind::Integer,
            DefaultValue::String(_) => FieldKind::String,
        }
    }

    pub fn to_value(&self) -> FieldValue {
        match self {
            DefaultValue::Boolean(b) => FieldValue::Boolean(*b),
            DefaultValue::Integer(i) => FieldValue::Integer(*i),
            DefaultValue::String(s) => FieldValue::String((*s).to_string()),
        }
    }
}

/// Declared field of an entity type.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub default: DefaultValue,
}

impl FieldSpec {
    pub const fn new(key: &'static str, default: DefaultValue) -> Self {
        Self { key, default }
    }

    pub fn kind(&self) -> FieldKind {
        self.default.kind()
    }
}
