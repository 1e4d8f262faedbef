//! Traversal driver
//!
//! Owns the queue of schema files awaiting processing and the run-wide set
//! of references already claimed. Files are processed strictly one at a
//! time: loaded, emitted, flushed, and only then are their discoveries
//! enqueued.
//!
//! Copyright (c) 2025 Json2Rst Team
//! Licensed under the Apache-2.0 license

use crate::emit::DocumentEmitter;
use crate::error::{ConvertError, ConvertResult};
use crate::loader::SchemaLoader;
use crate::naming;
use std::collections::{HashSet, VecDeque};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Drives one conversion run: the root schema file and every schema it
/// transitively references, one output document per distinct schema file.
#[derive(Debug)]
pub struct Converter {
    /// Directory every `$ref` resolves against, regardless of which file
    /// made the reference
    source_dir: PathBuf,
    output_dir: PathBuf,
    loader: SchemaLoader,
    emitter: DocumentEmitter,
    pending: VecDeque<PathBuf>,
    visited: HashSet<String>,
}

impl Converter {
    /// Create a converter for one run, rooted at `root_file`.
    pub fn new(root_file: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        let root_file = root_file.into();
        let source_dir = root_file
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        let mut visited = HashSet::new();
        // A reference cycle pointing back at the root must not re-enqueue it.
        if let Some(name) = root_file.file_name().and_then(|name| name.to_str()) {
            visited.insert(name.to_string());
        }
        let mut pending = VecDeque::new();
        pending.push_back(root_file);
        Self {
            source_dir,
            output_dir: output_dir.into(),
            loader: SchemaLoader::new(),
            emitter: DocumentEmitter::new(),
            pending,
            visited,
        }
    }

    /// Override the `.. tabularcolumns::` layout written into each document
    pub fn set_tabular_columns(&mut self, tabular_columns: impl Into<String>) {
        self.emitter = DocumentEmitter::with_tabular_columns(tabular_columns);
    }

    /// Process every pending schema file and return the number of documents
    /// written.
    ///
    /// The first failure aborts the run; documents already written stay on
    /// disk.
    pub fn run(&mut self) -> ConvertResult<usize> {
        let mut written = 0;
        while let Some(in_file) = self.pending.pop_front() {
            self.transform(&in_file)?;
            written += 1;
        }
        Ok(written)
    }

    fn transform(&mut self, in_file: &Path) -> ConvertResult<()> {
        let file_name = in_file
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                ConvertError::schema_error(in_file, "schema file has no usable file name")
            })?;
        let out_file_name = naming::rst_file_name(file_name).ok_or_else(|| {
            ConvertError::schema_error(
                in_file,
                format!("schema file name does not end in '{}'", naming::SCHEMA_SUFFIX),
            )
        })?;
        let out_path = self.output_dir.join(&out_file_name);

        let doc = self.loader.load(in_file)?;
        info!(input = %in_file.display(), output = %out_path.display(), "converting schema");

        let refs = {
            let file = File::create(&out_path)
                .map_err(|e| ConvertError::io_error(out_path.clone(), e))?;
            let mut writer = BufWriter::new(file);
            let refs = self.emitter.emit(&doc, &mut writer, &out_file_name)?;
            writer
                .flush()
                .map_err(|e| ConvertError::io_error(out_path.clone(), e))?;
            refs
        };

        // Discoveries enqueue only after the document is fully on disk.
        for reference in refs {
            if self.visited.insert(reference.clone()) {
                debug!(reference = %reference, "queued referenced schema");
                self.pending.push_back(self.source_dir.join(&reference));
            }
        }
        Ok(())
    }
}
