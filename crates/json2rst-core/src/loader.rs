//! Schema file loading
//!
//! Reads one schema file from disk and parses it into a [`SchemaDocument`].
//! Schema semantics beyond the consumed keys are not interpreted.
//!
//! Copyright (c) 2025 Json2Rst Team
//! Licensed under the Apache-2.0 license

use crate::error::{ConvertError, ConvertResult};
use crate::schema::SchemaDocument;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Parses schema files into the document model
#[derive(Debug, Default)]
pub struct SchemaLoader;

impl SchemaLoader {
    /// Create a new schema loader
    pub fn new() -> Self {
        Self
    }

    /// Load and parse a single schema file.
    ///
    /// Fails with an `Io` error when the file cannot be read, a `Parse`
    /// error when it is not valid JSON, and a `Schema` error when the tree
    /// is missing the structure the converter consumes.
    pub fn load(&self, path: &Path) -> ConvertResult<SchemaDocument> {
        let content = fs::read_to_string(path)
            .map_err(|e| ConvertError::io_error(path.to_path_buf(), e))?;
        let value: Value = serde_json::from_str(&content)
            .map_err(|e| ConvertError::parse_error(path.to_path_buf(), e))?;
        SchemaDocument::from_value(&value, path)
    }
}
