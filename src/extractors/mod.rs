//! The extraction pipeline.
//!
//! # Architecture
//!
//! - `base` - shared record types, per-file state, and source slicing
//! - `ancestry` - read-only parent/scope index built once per file
//! - `python` - the traversal visitor and declaration extractors
//! - `manager` - ExtractorManager public API for files and directories

pub mod ancestry;
pub mod base;
pub mod manager;
pub mod python;

// Re-export the public API
pub use base::{
    ArgumentKind, ArgumentRecord, ClassRecord, Extraction, FileDocument, FileMeta, FunctionRecord,
    ImportRecord, VariableRecord,
};
pub use manager::{BatchOutcome, ExtractOptions, ExtractorManager, FileFailure};
pub use python::PythonExtractor;
