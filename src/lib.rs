// pystruct - tree-sitter powered structural metadata extraction for Python
//
// The extraction engine walks each file's parsed tree exactly once and
// emits one structured document per input: imports, classes, functions,
// module variables, and optional base64 source slices.

pub mod cli;
pub mod error;
pub mod extractors;
pub mod language;

pub use error::ExtractError;
pub use extractors::base::types::{
    ArgumentKind, ArgumentRecord, ClassRecord, Extraction, FileDocument, FileMeta, FunctionRecord,
    ImportRecord, Span, VariableRecord,
};
pub use extractors::manager::{BatchOutcome, ExtractOptions, ExtractorManager, FileFailure};
pub use extractors::python::PythonExtractor;
