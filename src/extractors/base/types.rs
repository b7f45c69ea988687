// Record types shared by the extraction pipeline.
//
// All data structures for import, argument, function, class, and variable
// records, plus the per-file output document. Records are write-once:
// built during traversal, never mutated after being appended.

use serde::{Deserialize, Serialize};

/// 1-based inclusive line span of a declaration, captured from the node
/// at the moment its record is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start_line: usize,
    pub end_line: usize,
}

/// A single imported name.
///
/// One record per name: `import a, b` and `from m import a, b` both
/// produce two records, in source order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ImportRecord {
    /// `import module [as alias]`
    Import { name: String, alias: Option<String> },
    /// `from module import name [as alias]`
    ///
    /// `module` is `None` for pure-relative imports (`from . import x`).
    FromImport {
        module: Option<String>,
        name: String,
        alias: Option<String>,
    },
}

/// Argument-passing kinds, in the order they may appear in a signature:
/// positional*, vararg?, keyword_only*, kwarg?.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ArgumentKind {
    Positional,
    Vararg,
    KeywordOnly,
    Kwarg,
}

/// One function or method parameter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArgumentRecord {
    pub name: String,
    pub kind: ArgumentKind,
    /// Resolved annotation display string. Vararg and kwarg entries never
    /// carry one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
}

/// A function or method declaration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FunctionRecord {
    pub name: String,
    pub decorators: Vec<String>,
    pub args: Vec<ArgumentRecord>,
    pub is_async: bool,
    /// Docstring text, present iff the body's first statement is a bare
    /// string literal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Base64 slice of the declaration's source lines, when embedding is
    /// requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// A class declaration with its direct members.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassRecord {
    pub name: String,
    /// Base references as resolved display strings, keyword arguments
    /// (metaclass=...) excluded.
    pub bases: Vec<String>,
    pub decorators: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Direct synchronous function statements of the class body only.
    pub methods: Vec<FunctionRecord>,
    /// Direct simple-identifier assignments of the class body only.
    pub class_variables: Vec<VariableRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// A module-scope or class-scope variable assignment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VariableRecord {
    pub name: String,
    /// Lossy right-hand-side summary: containers and calls collapse to
    /// fixed sentinels.
    pub value: String,
}

/// Per-file metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileMeta {
    pub file: String,
    pub path: String,
    pub parser_version: String,
}

/// Record lists accumulated by a single traversal, in source order.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub imports: Vec<ImportRecord>,
    pub classes: Vec<ClassRecord>,
    pub functions: Vec<FunctionRecord>,
    pub variables: Vec<VariableRecord>,
}

/// The per-file output document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FileDocument {
    pub meta: FileMeta,
    pub imports: Vec<ImportRecord>,
    pub classes: Vec<ClassRecord>,
    pub functions: Vec<FunctionRecord>,
    pub variables: Vec<VariableRecord>,
    /// Base64 of the entire source file, when embedding is requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl FileDocument {
    /// Combine the traversal's record lists with file metadata. Insertion
    /// order of each list is preserved as-is.
    pub fn assemble(meta: FileMeta, extraction: Extraction, code: Option<String>) -> Self {
        Self {
            meta,
            imports: extraction.imports,
            classes: extraction.classes,
            functions: extraction.functions,
            variables: extraction.variables,
            code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn import_records_serialize_with_type_tag() {
        let plain = ImportRecord::Import {
            name: "os".to_string(),
            alias: None,
        };
        let json = serde_json::to_value(&plain).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "import", "name": "os", "alias": null})
        );

        let from = ImportRecord::FromImport {
            module: Some("collections".to_string()),
            name: "OrderedDict".to_string(),
            alias: Some("OD".to_string()),
        };
        let json = serde_json::to_value(&from).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "from_import",
                "module": "collections",
                "name": "OrderedDict",
                "alias": "OD"
            })
        );
    }

    #[test]
    fn absent_comment_and_code_are_omitted() {
        let record = FunctionRecord {
            name: "f".to_string(),
            decorators: Vec::new(),
            args: Vec::new(),
            is_async: false,
            comment: None,
            code: None,
        };
        let json = serde_json::to_value(&record).unwrap();
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("comment"));
        assert!(!object.contains_key("code"));
    }

    #[test]
    fn argument_kind_uses_snake_case_tags() {
        let kinds = [
            (ArgumentKind::Positional, "positional"),
            (ArgumentKind::Vararg, "vararg"),
            (ArgumentKind::KeywordOnly, "keyword_only"),
            (ArgumentKind::Kwarg, "kwarg"),
        ];
        for (kind, expected) in kinds {
            assert_eq!(
                serde_json::to_value(kind).unwrap(),
                serde_json::Value::String(expected.to_string())
            );
        }
    }
}
