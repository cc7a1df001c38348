//! Schema repairer: makes a parsed model response schema-complete.
//!
//! Only absence is repaired. A field the model returned with the wrong shape
//! (a string where an object belongs, `null`, ...) is passed through untouched,
//! and fields the schema does not know about are kept as-is.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::review::schema::{example_document, Field, Shape, TaskKind};

pub const STATUS_FIELD: &str = "status";
pub const STATUS_SUCCESS: &str = "success";

/// A schema-complete result, tagged with the success status marker.
///
/// Only [`repair`] and [`sample_document`] construct one, so every instance
/// carries every field of its schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResultDocument(Map<String, Value>);

impl ResultDocument {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[cfg(test)]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    #[cfg(test)]
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

pub fn repair(mut value: Map<String, Value>, kind: TaskKind) -> ResultDocument {
    fill_missing(&mut value, kind.schema());
    value.insert(STATUS_FIELD.to_string(), Value::from(STATUS_SUCCESS));
    ResultDocument(value)
}

/// A document populated entirely from the schema's example values.
pub fn sample_document(kind: TaskKind) -> ResultDocument {
    repair(example_document(kind.schema()), kind)
}

/// Names of top-level schema fields the model omitted.
pub fn missing_fields(value: &Map<String, Value>, kind: TaskKind) -> Vec<&'static str> {
    kind.schema()
        .iter()
        .filter(|f| !value.contains_key(f.name))
        .map(|f| f.name)
        .collect()
}

fn fill_missing(target: &mut Map<String, Value>, fields: &[Field]) {
    for field in fields {
        match target.get_mut(field.name) {
            Some(existing) => descend(existing, &field.shape),
            None => {
                target.insert(field.name.to_string(), field.shape.default_value());
            }
        }
    }
}

fn descend(value: &mut Value, shape: &Shape) {
    match (shape, value) {
        (Shape::Object(fields), Value::Object(map)) => fill_missing(map, fields),
        (Shape::ObjectList(fields), Value::Array(items)) => {
            for item in items {
                if let Value::Object(map) = item {
                    fill_missing(map, fields);
                }
            }
        }
        _ => {}
    }
}
