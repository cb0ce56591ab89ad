//! Database loader.
//!
//! Parses the mime-db style dataset (`{ "<type>": { "source", "extensions",
//! "compressible", "charset" } }`) into a table of [`TypeDescriptor`]s.
//! Individual fields with the wrong JSON type are left at their defaults;
//! only a dataset that is not valid JSON, or whose top level is not an
//! object, fails the load.

use crate::error::{MimeError, Result};
use crate::types::{Source, TypeDescriptor};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// The dataset bundled into the binary.
pub const EMBEDDED_DB: &str = include_str!("../../data/db.json");

/// Type-name keyed descriptor table. Ordered by type name so every build
/// over the same data walks it the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Database {
    types: BTreeMap<String, TypeDescriptor>,
}

/// Load the embedded dataset.
pub fn load() -> Result<Database> {
    Database::from_json(EMBEDDED_DB)
}

impl Database {
    pub fn from_json(json: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(json)?;
        let entries = match root {
            Value::Object(entries) => entries,
            other => {
                return Err(MimeError::InvalidDatabase {
                    message: format!("expected a top-level object, found {}", json_kind(&other)),
                })
            }
        };

        let types = entries
            .into_iter()
            .map(|(name, value)| {
                let descriptor = parse_descriptor(&name, &value);
                (name, descriptor)
            })
            .collect();

        Ok(Self { types })
    }

    pub fn from_descriptors<I, S>(descriptors: I) -> Self
    where
        I: IntoIterator<Item = (S, TypeDescriptor)>,
        S: Into<String>,
    {
        Self {
            types: descriptors
                .into_iter()
                .map(|(name, d)| (name.into(), d))
                .collect(),
        }
    }

    pub fn get(&self, type_name: &str) -> Option<&TypeDescriptor> {
        self.types.get(type_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypeDescriptor)> {
        self.types.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

fn parse_descriptor(type_name: &str, value: &Value) -> TypeDescriptor {
    let mut descriptor = TypeDescriptor::default();

    let Value::Object(fields) = value else {
        tracing::warn!(
            type_name,
            found = json_kind(value),
            "descriptor is not an object, using defaults"
        );
        return descriptor;
    };

    if let Some(source) = field(fields, type_name, "source", Value::as_str) {
        descriptor.source = Source::from_name(source);
        if descriptor.source == Source::Unknown && !source.eq_ignore_ascii_case("unknown") {
            tracing::warn!(type_name, source, "unrecognised source, treating as unknown");
        }
    }

    if let Some(extensions) = field(fields, type_name, "extensions", string_array) {
        descriptor.extensions = extensions;
    }

    if let Some(compressible) = field(fields, type_name, "compressible", Value::as_bool) {
        descriptor.compressible = compressible;
    }

    if let Some(charset) = field(fields, type_name, "charset", Value::as_str) {
        descriptor.charset = charset.to_string();
    }

    descriptor
}

/// Read one optional field. A present field that `extract` rejects is logged
/// and treated as absent.
fn field<'a, T>(
    fields: &'a Map<String, Value>,
    type_name: &str,
    key: &str,
    extract: impl FnOnce(&'a Value) -> Option<T>,
) -> Option<T> {
    let value = fields.get(key)?;
    let extracted = extract(value);
    if extracted.is_none() {
        tracing::warn!(
            type_name,
            field = key,
            found = json_kind(value),
            "ignoring malformed field"
        );
    }
    extracted
}

/// All-or-nothing: one non-string element rejects the whole list.
fn string_array(value: &Value) -> Option<Vec<String>> {
    value
        .as_array()?
        .iter()
        .map(|v| v.as_str().map(str::to_string))
        .collect()
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_dataset_loads() {
        let db = load().unwrap();
        assert!(!db.is_empty());
        let json = db.get("application/json").unwrap();
        assert_eq!(json.source, Source::Iana);
        assert_eq!(json.charset, "UTF-8");
        assert!(json.compressible);
        assert_eq!(json.extensions, vec!["json", "map"]);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let db = Database::from_json(r#"{ "application/x-empty": {} }"#).unwrap();
        assert_eq!(db.get("application/x-empty"), Some(&TypeDescriptor::default()));
    }

    #[test]
    fn malformed_fields_are_left_at_defaults() {
        let json = r#"{
            "text/x-odd": {
                "source": 7,
                "extensions": ["odd", 3],
                "compressible": "yes",
                "charset": ["UTF-8"]
            },
            "text/x-fine": {
                "source": "Apache",
                "extensions": ["fine"],
                "compressible": true,
                "charset": "latin1"
            }
        }"#;
        let db = Database::from_json(json).unwrap();

        assert_eq!(db.get("text/x-odd"), Some(&TypeDescriptor::default()));

        let fine = db.get("text/x-fine").unwrap();
        assert_eq!(fine.source, Source::Apache);
        assert_eq!(fine.extensions, vec!["fine"]);
        assert!(fine.compressible);
        assert_eq!(fine.charset, "latin1");
    }

    #[test]
    fn non_object_descriptor_is_defaulted() {
        let db = Database::from_json(r#"{ "text/x-list": ["a", "b"] }"#).unwrap();
        assert_eq!(db.get("text/x-list"), Some(&TypeDescriptor::default()));
    }

    #[test]
    fn unknown_source_string_maps_to_unknown() {
        let db = Database::from_json(r#"{ "text/x-a": { "source": "custom" } }"#).unwrap();
        assert_eq!(db.get("text/x-a").unwrap().source, Source::Unknown);
    }

    #[test]
    fn unparseable_dataset_fails() {
        let err = Database::from_json("{ not json").unwrap_err();
        assert!(matches!(err, MimeError::Database(_)));
    }

    #[test]
    fn non_object_dataset_fails() {
        let err = Database::from_json("[1, 2, 3]").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid mime database: expected a top-level object, found array"
        );
    }

    #[test]
    fn iteration_is_ordered_by_type_name() {
        let db = Database::from_json(r#"{ "text/b": {}, "audio/a": {}, "image/c": {} }"#).unwrap();
        let names: Vec<&str> = db.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["audio/a", "image/c", "text/b"]);
    }
}
