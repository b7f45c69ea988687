//! Tree-sitter language configuration.
//!
//! Single source of truth for parser construction and the file-extension
//! filter used by batch discovery.

use std::path::Path;

use tree_sitter::Parser;

use crate::error::ExtractError;

/// The Python grammar used for every parse.
pub fn python_language() -> tree_sitter::Language {
    tree_sitter_python::LANGUAGE.into()
}

/// A parser configured for Python.
pub fn python_parser() -> Result<Parser, ExtractError> {
    let mut parser = Parser::new();
    parser
        .set_language(&python_language())
        .map_err(|e| ExtractError::Language(e.to_string()))?;
    Ok(parser)
}

/// Whether a discovered file should be parsed as Python.
pub fn is_python_file(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some("py")
}
