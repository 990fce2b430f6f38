use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// A generic list row as fetched by the host: the row name plus the
/// fields requested through `add_fields`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    pub name: String,
    pub fields: BTreeMap<String, Value>,
}

impl Document {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style setter used by the store and by tests.
    pub fn with(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(field.to_string(), value.into());
        self
    }

    /// Build a document from an arbitrary JSON object. Non-object input
    /// yields an empty document; a string `name` key becomes the row name.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Object(map) => {
                let name = map
                    .get("name")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string();
                Self {
                    name,
                    fields: map.into_iter().collect(),
                }
            }
            _ => Self::default(),
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Field value rendered as text the way filter expressions compare it:
    /// booleans as 1/0, null/missing as "".
    pub fn text(&self, field: &str) -> String {
        value_text(self.get(field))
    }

    /// Loose truthiness: false, 0, null, missing and "" are falsy.
    pub fn truthy(&self, field: &str) -> bool {
        match self.get(field) {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(_)) | Some(Value::Object(_)) => true,
        }
    }
}

/// Text form of a field value: booleans as 1/0, null/missing as "".
pub fn value_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::Bool(b)) => String::from(if *b { "1" } else { "0" }),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
