//! Parsed schema document model
//!
//! The in-memory form of one input file: title, description, and the
//! ordered `properties` mapping. Only the keys the converter consumes are
//! modeled; every other JSON Schema keyword is ignored, not validated.
//!
//! Copyright (c) 2025 Json2Rst Team
//! Licensed under the Apache-2.0 license

use crate::error::{ConvertError, ConvertResult};
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// One parsed schema file. Read-only once constructed, discarded after its
/// document has been emitted.
#[derive(Debug, Clone)]
pub struct SchemaDocument {
    /// File this document was parsed from, kept for error messages
    pub source: PathBuf,
    pub title: String,
    pub description: String,
    /// Properties in document order
    pub properties: Vec<Property>,
    /// Names listed under `required`
    pub required: HashSet<String>,
}

/// One named attribute within a document's `properties` mapping
#[derive(Debug, Clone)]
pub struct Property {
    pub name: String,
    pub spec: PropertySpec,
}

/// The schema keywords consumed for one property.
///
/// All fields are explicit options; an absent key is `None`, never a
/// sentinel value.
#[derive(Debug, Clone, Default)]
pub struct PropertySpec {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Primitive type name (JSON `type`)
    pub type_name: Option<String>,
    /// Element spec when the property is an array
    pub items: Option<Box<PropertySpec>>,
    /// Relative path to another schema file (JSON `$ref`)
    pub reference: Option<String>,
}

impl PropertySpec {
    /// The object carrying this property's `type`/`$ref`: the `items`
    /// sub-object for arrays, the property itself otherwise.
    pub fn type_object(&self) -> &PropertySpec {
        self.items.as_deref().unwrap_or(self)
    }

    /// Whether the property documents an array of values
    pub fn is_array(&self) -> bool {
        self.items.is_some()
    }

    fn from_value(value: &Value, name: &str, source: &Path) -> ConvertResult<Self> {
        let obj = value.as_object().ok_or_else(|| {
            ConvertError::schema_error(source, format!("property '{}' must be a JSON object", name))
        })?;
        Ok(Self {
            title: optional_string(obj, "title", name, source)?,
            description: optional_string(obj, "description", name, source)?,
            type_name: optional_string(obj, "type", name, source)?,
            items: match obj.get("items") {
                Some(items) => Some(Box::new(Self::from_value(items, name, source)?)),
                None => None,
            },
            reference: optional_string(obj, "$ref", name, source)?,
        })
    }
}

impl SchemaDocument {
    /// Convert a parsed JSON tree into the document model.
    ///
    /// Fails with a `Schema` error when the tree is missing the structure
    /// described in the module docs; `source` is only used for error
    /// context.
    pub fn from_value(value: &Value, source: &Path) -> ConvertResult<Self> {
        let obj = value.as_object().ok_or_else(|| {
            ConvertError::schema_error(source, "schema root must be a JSON object")
        })?;
        let title = required_string(obj, "title", source)?;
        let description = required_string(obj, "description", source)?;

        let raw_properties = obj
            .get("properties")
            .ok_or_else(|| ConvertError::schema_error(source, "missing 'properties' object"))?
            .as_object()
            .ok_or_else(|| {
                ConvertError::schema_error(source, "'properties' must be a JSON object")
            })?;
        let mut properties = Vec::with_capacity(raw_properties.len());
        for (name, spec) in raw_properties {
            properties.push(Property {
                name: name.clone(),
                spec: PropertySpec::from_value(spec, name, source)?,
            });
        }

        let required = parse_required(obj, &properties, source)?;

        Ok(Self {
            source: source.to_path_buf(),
            title,
            description,
            properties,
            required,
        })
    }
}

fn parse_required(
    obj: &Map<String, Value>,
    properties: &[Property],
    source: &Path,
) -> ConvertResult<HashSet<String>> {
    let mut required = HashSet::new();
    let Some(value) = obj.get("required") else {
        return Ok(required);
    };
    let entries = value.as_array().ok_or_else(|| {
        ConvertError::schema_error(source, "'required' must be an array of property names")
    })?;
    for entry in entries {
        let name = entry.as_str().ok_or_else(|| {
            ConvertError::schema_error(source, "'required' entries must be strings")
        })?;
        if !properties.iter().any(|property| property.name == name) {
            return Err(ConvertError::schema_error(
                source,
                format!("'required' lists unknown property '{}'", name),
            ));
        }
        required.insert(name.to_string());
    }
    Ok(required)
}

fn required_string(obj: &Map<String, Value>, key: &str, source: &Path) -> ConvertResult<String> {
    match obj.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ConvertError::schema_error(
            source,
            format!("'{}' must be a string", key),
        )),
        None => Err(ConvertError::schema_error(
            source,
            format!("missing '{}'", key),
        )),
    }
}

fn optional_string(
    obj: &Map<String, Value>,
    key: &str,
    property: &str,
    source: &Path,
) -> ConvertResult<Option<String>> {
    match obj.get(key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(ConvertError::schema_error(
            source,
            format!("property '{}': '{}' must be a string", property, key),
        )),
    }
}
