//! reStructuredText document emission
//!
//! Renders one parsed schema document into its output page: title header,
//! toctree of referenced documents, and the CSV attribute table. The
//! emitter reports the references a document makes; run-wide deduplication
//! belongs to the traversal driver.
//!
//! Copyright (c) 2025 Json2Rst Team
//! Licensed under the Apache-2.0 license

use crate::error::{ConvertError, ConvertResult};
use crate::naming::{self, SCHEMA_SUFFIX};
use crate::schema::{Property, SchemaDocument};
use std::io::Write;
use std::path::PathBuf;

/// Layout written into each `.. tabularcolumns::` directive unless overridden
pub const DEFAULT_TABULAR_COLUMNS: &str = "|p{4cm}|l|p{8cm}|l|";

/// Renders one schema document into reStructuredText
#[derive(Debug, Clone)]
pub struct DocumentEmitter {
    tabular_columns: String,
}

impl Default for DocumentEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentEmitter {
    /// Create an emitter with the default table layout
    pub fn new() -> Self {
        Self {
            tabular_columns: DEFAULT_TABULAR_COLUMNS.to_string(),
        }
    }

    /// Create an emitter with a custom `.. tabularcolumns::` layout
    pub fn with_tabular_columns(tabular_columns: impl Into<String>) -> Self {
        Self {
            tabular_columns: tabular_columns.into(),
        }
    }

    /// Write `doc` as reStructuredText and return the references it makes,
    /// in first-seen order, deduplicated within the document.
    ///
    /// The document is rendered completely before the first byte is
    /// written, so a malformed property never leaves partial output behind.
    pub fn emit<W: Write>(
        &self,
        doc: &SchemaDocument,
        out: &mut W,
        out_file_name: &str,
    ) -> ConvertResult<Vec<String>> {
        let (text, refs) = self.render(doc, out_file_name)?;
        out.write_all(text.as_bytes())
            .map_err(|e| ConvertError::io_error(PathBuf::from(out_file_name), e))?;
        Ok(refs)
    }

    /// Render without touching the filesystem
    pub fn render(
        &self,
        doc: &SchemaDocument,
        out_file_name: &str,
    ) -> ConvertResult<(String, Vec<String>)> {
        let refs = discover_refs(doc)?;
        let mut text = String::new();
        write_header(&mut text, doc);
        if !refs.is_empty() {
            write_toctree(&mut text, &refs);
        }
        self.write_attributes_header(&mut text, doc, out_file_name);
        for property in &doc.properties {
            write_property(&mut text, doc, property)?;
        }
        Ok((text, refs))
    }

    fn write_attributes_header(&self, text: &mut String, doc: &SchemaDocument, out_file_name: &str) {
        let stem = naming::document_stem(out_file_name);
        text.push('\n');
        text.push_str(".. tabularcolumns:: ");
        text.push_str(&self.tabular_columns);
        text.push('\n');
        text.push_str(".. csv-table:: ");
        text.push_str(&doc.title);
        text.push_str(" Attributes (LDAP Object: ");
        text.push_str(&naming::ldap_object_label(stem));
        text.push_str(")\n");
        text.push_str("    :header: Name, Type, Description, LDAP Attribute\n");
        text.push_str("    :widths: 20, 7, 60, 13\n\n");
    }
}

fn write_header(text: &mut String, doc: &SchemaDocument) {
    text.push_str(&doc.title);
    text.push('\n');
    text.push_str(&"=".repeat(doc.title.chars().count()));
    text.push('\n');
    text.push_str(&doc.description);
    text.push('\n');
}

fn write_toctree(text: &mut String, refs: &[String]) {
    text.push_str("\n.. toctree::\n\n");
    for reference in refs {
        text.push_str("    ");
        text.push_str(reference.strip_suffix(SCHEMA_SUFFIX).unwrap_or(reference));
        text.push('\n');
    }
}

/// References made by `doc`, in first-seen property order
fn discover_refs(doc: &SchemaDocument) -> ConvertResult<Vec<String>> {
    let mut refs: Vec<String> = Vec::new();
    for property in &doc.properties {
        if let Some(reference) = &property.spec.type_object().reference {
            if naming::strip_schema_suffix(reference).is_none() {
                return Err(ConvertError::schema_error(
                    &doc.source,
                    format!(
                        "property '{}': reference '{}' does not end in '{}'",
                        property.name, reference, SCHEMA_SUFFIX
                    ),
                ));
            }
            if !refs.iter().any(|seen| seen == reference) {
                refs.push(reference.clone());
            }
        }
    }
    Ok(refs)
}

fn write_property(text: &mut String, doc: &SchemaDocument, property: &Property) -> ConvertResult<()> {
    let spec = &property.spec;
    let type_obj = spec.type_object();
    let is_array = spec.is_array();
    let required = doc.required.contains(&property.name);

    text.push_str("    \"");
    let type_name = if let Some(reference) = &type_obj.reference {
        let target = reference.strip_suffix(SCHEMA_SUFFIX).unwrap_or(reference);
        text.push_str(":doc:`");
        text.push_str(target);
        text.push_str("` ");
        if is_array {
            text.push_str("(s)");
        }
        "object"
    } else {
        let title = spec
            .title
            .as_deref()
            .ok_or_else(|| missing_field(doc, property, "title"))?;
        let type_name = type_obj
            .type_name
            .as_deref()
            .ok_or_else(|| missing_field(doc, property, "type"))?;
        if required {
            text.push_str("**");
        }
        text.push_str(title);
        if is_array {
            text.push_str("(s)");
        }
        if required {
            text.push_str("**");
        }
        type_name
    };
    let description = spec
        .description
        .as_deref()
        .ok_or_else(|| missing_field(doc, property, "description"))?;

    text.push_str("\",");
    text.push_str(type_name);
    text.push_str(",\"");
    // CSV cells escape literal quotes by doubling them
    text.push_str(&description.replace('"', "\"\""));
    text.push_str("\",\"\n");
    text.push_str("    .. _");
    text.push_str(&property.name);
    text.push_str(":\n\n    ");
    text.push_str(&property.name);
    text.push_str("_\"\n");
    Ok(())
}

fn missing_field(doc: &SchemaDocument, property: &Property, field: &str) -> ConvertError {
    ConvertError::schema_error(
        &doc.source,
        format!("property '{}' is missing '{}'", property.name, field),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::Path;

    fn document(value: serde_json::Value) -> SchemaDocument {
        SchemaDocument::from_value(&value, Path::new("device.schema.json")).unwrap()
    }

    fn render(doc: &SchemaDocument, out_file_name: &str) -> (String, Vec<String>) {
        DocumentEmitter::new().render(doc, out_file_name).unwrap()
    }

    #[test]
    fn test_device_document_renders_exactly() {
        let doc = document(json!({
            "title": "Device",
            "description": "DICOM Device related information",
            "properties": {
                "dicomDeviceName": {
                    "title": "dicomDeviceName",
                    "description": "Unique name for this device",
                    "type": "string"
                },
                "dicomNetworkAE": {
                    "description": "Network AE of this device",
                    "$ref": "networkAE.schema.json"
                }
            },
            "required": ["dicomDeviceName"]
        }));

        let (text, refs) = render(&doc, "device.rst");
        assert_eq!(refs, ["networkAE.schema.json"]);

        let expected = concat!(
            "Device\n",
            "======\n",
            "DICOM Device related information\n",
            "\n",
            ".. toctree::\n",
            "\n",
            "    networkAE\n",
            "\n",
            ".. tabularcolumns:: |p{4cm}|l|p{8cm}|l|\n",
            ".. csv-table:: Device Attributes (LDAP Object: dcmDevice)\n",
            "    :header: Name, Type, Description, LDAP Attribute\n",
            "    :widths: 20, 7, 60, 13\n",
            "\n",
            "    \"**dicomDeviceName**\",string,\"Unique name for this device\",\"\n",
            "    .. _dicomDeviceName:\n",
            "\n",
            "    dicomDeviceName_\"\n",
            "    \":doc:`networkAE` \",object,\"Network AE of this device\",\"\n",
            "    .. _dicomNetworkAE:\n",
            "\n",
            "    dicomNetworkAE_\"\n",
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_underline_matches_multibyte_title_length() {
        let doc = document(json!({
            "title": "Gerät",
            "description": "d",
            "properties": {}
        }));
        let (text, _) = render(&doc, "device.rst");
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Gerät"));
        assert_eq!(lines.next(), Some("====="));
    }

    #[test]
    fn test_array_of_references_names_and_types() {
        let doc = document(json!({
            "title": "Network AE",
            "description": "Network Application Entity",
            "properties": {
                "dicomTransferCapability": {
                    "description": "Transfer Capabilities",
                    "items": { "$ref": "transferCapability.schema.json" }
                }
            }
        }));
        let (text, refs) = render(&doc, "networkAE.rst");
        assert_eq!(refs, ["transferCapability.schema.json"]);
        assert!(text.contains("    \":doc:`transferCapability` (s)\",object,"));
        assert!(text.contains("    transferCapability\n"));
    }

    #[test]
    fn test_required_array_of_primitives() {
        let doc = document(json!({
            "title": "Network AE",
            "description": "d",
            "properties": {
                "dicomApplicationCluster": {
                    "title": "Application Cluster",
                    "description": "Locally defined names",
                    "items": { "type": "string" }
                }
            },
            "required": ["dicomApplicationCluster"]
        }));
        let (text, refs) = render(&doc, "networkAE.rst");
        assert!(refs.is_empty());
        assert!(!text.contains(".. toctree::"));
        assert!(text.contains("    \"**Application Cluster(s)**\",string,"));
    }

    #[test]
    fn test_description_quotes_are_doubled() {
        let doc = document(json!({
            "title": "Device",
            "description": "d",
            "properties": {
                "dicomDeviceName": {
                    "title": "Device Name",
                    "description": "The \"canonical\" name",
                    "type": "string"
                }
            }
        }));
        let (text, _) = render(&doc, "device.rst");
        assert!(text.contains(",\"The \"\"canonical\"\" name\","));
        assert!(!text.contains("The \"canonical\" name"));
    }

    #[test]
    fn test_duplicate_references_reported_once_per_document() {
        let doc = document(json!({
            "title": "Device",
            "description": "d",
            "properties": {
                "first": {
                    "description": "d",
                    "$ref": "common.schema.json"
                },
                "second": {
                    "description": "d",
                    "items": { "$ref": "common.schema.json" }
                }
            }
        }));
        let (text, refs) = render(&doc, "device.rst");
        assert_eq!(refs, ["common.schema.json"]);
        assert_eq!(text.matches("    common\n").count(), 1);
    }

    #[test]
    fn test_hl7_stem_keeps_label() {
        let doc = document(json!({
            "title": "HL7 Application",
            "description": "d",
            "properties": {}
        }));
        let (text, _) = render(&doc, "hl7Application.rst");
        assert!(text.contains("(LDAP Object: hl7Application)"));
    }

    #[test]
    fn test_missing_description_is_schema_error() {
        let doc = document(json!({
            "title": "Device",
            "description": "d",
            "properties": {
                "dicomDeviceName": {
                    "title": "Device Name",
                    "type": "string"
                }
            }
        }));
        let err = DocumentEmitter::new().render(&doc, "device.rst").unwrap_err();
        assert!(err.to_string().contains("'dicomDeviceName' is missing 'description'"));
    }

    #[test]
    fn test_missing_title_on_primitive_is_schema_error() {
        let doc = document(json!({
            "title": "Device",
            "description": "d",
            "properties": {
                "dicomDeviceName": {
                    "description": "d",
                    "type": "string"
                }
            }
        }));
        let err = DocumentEmitter::new().render(&doc, "device.rst").unwrap_err();
        assert!(err.to_string().contains("missing 'title'"));
    }

    #[test]
    fn test_missing_type_on_primitive_is_schema_error() {
        let doc = document(json!({
            "title": "Device",
            "description": "d",
            "properties": {
                "dicomDeviceName": {
                    "title": "Device Name",
                    "description": "d"
                }
            }
        }));
        let err = DocumentEmitter::new().render(&doc, "device.rst").unwrap_err();
        assert!(err.to_string().contains("missing 'type'"));
    }

    #[test]
    fn test_reference_without_schema_suffix_is_schema_error() {
        let doc = document(json!({
            "title": "Device",
            "description": "d",
            "properties": {
                "dicomNetworkAE": {
                    "description": "d",
                    "$ref": "networkAE.json"
                }
            }
        }));
        let err = DocumentEmitter::new().render(&doc, "device.rst").unwrap_err();
        assert!(matches!(err, ConvertError::Schema { .. }));
        assert!(err.to_string().contains("does not end in '.schema.json'"));
    }

    #[test]
    fn test_custom_tabular_columns() {
        let doc = document(json!({
            "title": "Device",
            "description": "d",
            "properties": {}
        }));
        let emitter = DocumentEmitter::with_tabular_columns("|l|l|l|l|");
        let (text, _) = emitter.render(&doc, "device.rst").unwrap();
        assert!(text.contains(".. tabularcolumns:: |l|l|l|l|\n"));
    }
}
