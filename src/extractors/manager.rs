//! ExtractorManager - public API for file and directory extraction.
//!
//! Reads source text, parses it, runs the Python extractor, and assembles
//! the per-file output documents. Batch runs fan out over rayon with no
//! shared mutable state; one file's failure never blocks another's.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, warn};
use tree_sitter::Node;
use walkdir::WalkDir;

use super::base::slicing;
use super::base::types::{FileDocument, FileMeta};
use super::python::PythonExtractor;
use crate::error::ExtractError;
use crate::language;

/// Options controlling a run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractOptions {
    /// Embed base64 source slices per declaration plus the whole-file blob.
    pub include_code: bool,
}

/// A file skipped during a batch run, with the error that caused it.
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: ExtractError,
}

/// Outcome of a directory run: documents in discovery order plus the
/// per-file failures that were skipped over.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub documents: Vec<FileDocument>,
    pub failures: Vec<FileFailure>,
}

/// Manager driving extraction for one file or a directory of files.
pub struct ExtractorManager {
    options: ExtractOptions,
}

impl ExtractorManager {
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// Extract one file. Read and parse failures abort the call.
    pub fn extract_file(&self, path: &Path) -> Result<FileDocument, ExtractError> {
        let content = fs::read_to_string(path).map_err(|source| ExtractError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.extract_source(path, content)
    }

    /// Extract every `.py` file under `dir`, in discovery order.
    pub fn extract_directory(&self, dir: &Path) -> Result<BatchOutcome, ExtractError> {
        if !dir.is_dir() {
            return Err(ExtractError::NotADirectory {
                path: dir.to_path_buf(),
            });
        }

        let files = discover_python_files(dir);
        debug!("discovered {} Python files under {}", files.len(), dir.display());

        // Each file reads only its own text and tree; collect() keeps
        // discovery order regardless of completion order.
        let results: Vec<(PathBuf, Result<FileDocument, ExtractError>)> = files
            .into_par_iter()
            .map(|path| {
                let result = self.extract_file(&path);
                (path, result)
            })
            .collect();

        let mut outcome = BatchOutcome::default();
        for (path, result) in results {
            match result {
                Ok(document) => outcome.documents.push(document),
                Err(error) => {
                    warn!("skipping {}: {}", path.display(), error);
                    outcome.failures.push(FileFailure { path, error });
                }
            }
        }
        Ok(outcome)
    }

    fn extract_source(&self, path: &Path, content: String) -> Result<FileDocument, ExtractError> {
        let mut parser = language::python_parser()?;
        let tree = parser.parse(&content, None).ok_or_else(|| ExtractError::Parse {
            path: path.to_path_buf(),
            message: "parser produced no tree".to_string(),
        })?;
        if tree.root_node().has_error() {
            return Err(ExtractError::Parse {
                path: path.to_path_buf(),
                message: syntax_error_message(tree.root_node()),
            });
        }

        let code = self.options.include_code.then(|| slicing::encode(&content));
        let extractor = PythonExtractor::new(content, self.options.include_code);
        let extraction = extractor.extract(&tree);
        debug!(
            imports = extraction.imports.len(),
            classes = extraction.classes.len(),
            functions = extraction.functions.len(),
            variables = extraction.variables.len(),
            "extracted {}",
            path.display()
        );

        Ok(FileDocument::assemble(file_meta(path), extraction, code))
    }
}

/// Metadata block for one processed file.
fn file_meta(path: &Path) -> FileMeta {
    // Canonicalize so `meta.path` is stable regardless of how the file
    // was addressed; fall back to the given path when resolution fails.
    let absolute = path.canonicalize().unwrap_or_else(|e| {
        warn!("failed to canonicalize {}: {}", path.display(), e);
        path.to_path_buf()
    });
    let file = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    FileMeta {
        file,
        path: absolute.display().to_string(),
        parser_version: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
    }
}

/// All `.py` files under `dir`, sorted per directory level so discovery
/// order is deterministic.
fn discover_python_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| language::is_python_file(path))
        .collect()
}

fn syntax_error_message(root: Node) -> String {
    match first_error_node(root) {
        Some(node) => format!("invalid syntax at line {}", node.start_position().row + 1),
        None => "invalid syntax".to_string(),
    }
}

fn first_error_node(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = first_error_node(child) {
            return Some(found);
        }
    }
    None
}
