//! Input and output file naming rules
//!
//! Every input schema file ends in [`SCHEMA_SUFFIX`]; output documents swap
//! that suffix for [`RST_SUFFIX`]. The attribute-table caption additionally
//! carries an LDAP object label derived from the output file's base name.
//!
//! Copyright (c) 2025 Json2Rst Team
//! Licensed under the Apache-2.0 license

/// Suffix shared by every input schema file
pub const SCHEMA_SUFFIX: &str = ".schema.json";

/// Suffix of emitted reStructuredText documents
pub const RST_SUFFIX: &str = ".rst";

/// Strip [`SCHEMA_SUFFIX`] from a file name or `$ref` path.
///
/// Returns `None` when the name does not end in the suffix, or when nothing
/// would remain after stripping it.
pub fn strip_schema_suffix(name: &str) -> Option<&str> {
    name.strip_suffix(SCHEMA_SUFFIX).filter(|stem| !stem.is_empty())
}

/// Derive the output document name for a schema file name.
pub fn rst_file_name(schema_file_name: &str) -> Option<String> {
    strip_schema_suffix(schema_file_name).map(|stem| format!("{}{}", stem, RST_SUFFIX))
}

/// Base name of an output document, [`RST_SUFFIX`] removed.
pub fn document_stem(out_file_name: &str) -> &str {
    out_file_name.strip_suffix(RST_SUFFIX).unwrap_or(out_file_name)
}

/// LDAP object label shown in the attribute-table caption.
///
/// `hl7*` stems name HL7 application objects and pass through unchanged;
/// `id*` stems become `dcmID` plus the remainder; everything else becomes
/// `dcm` plus the stem with its first character upper-cased.
pub fn ldap_object_label(stem: &str) -> String {
    if stem.starts_with("hl7") {
        stem.to_string()
    } else if let Some(rest) = stem.strip_prefix("id") {
        format!("dcmID{}", rest)
    } else {
        let mut chars = stem.chars();
        match chars.next() {
            Some(first) => format!("dcm{}{}", first.to_uppercase(), chars.as_str()),
            None => "dcm".to_string(),
        }
    }
}
