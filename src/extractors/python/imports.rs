/// Import statement extraction.
///
/// Handles import, from...import, aliased, wildcard, and relative forms.
/// One record per imported name, in source order.
use tree_sitter::Node;

use super::super::base::{BaseExtractor, ImportRecord};

/// Extract import records from an import-like statement node.
pub(crate) fn extract_imports(base: &BaseExtractor, node: &Node) -> Vec<ImportRecord> {
    match node.kind() {
        "import_statement" => extract_plain_imports(base, node),
        "import_from_statement" => extract_from_imports(base, node, None),
        // `from __future__ import ...` has its own statement kind.
        "future_import_statement" => {
            extract_from_imports(base, node, Some("__future__".to_string()))
        }
        _ => Vec::new(),
    }
}

/// `import a.b, c as d`: one record per listed name.
fn extract_plain_imports(base: &BaseExtractor, node: &Node) -> Vec<ImportRecord> {
    let mut records = Vec::new();
    let mut cursor = node.walk();
    for name_node in node.children_by_field_name("name", &mut cursor) {
        match name_node.kind() {
            "dotted_name" => records.push(ImportRecord::Import {
                name: base.get_node_text(&name_node),
                alias: None,
            }),
            "aliased_import" => {
                if let Some((name, alias)) = aliased(base, &name_node) {
                    records.push(ImportRecord::Import {
                        name,
                        alias: Some(alias),
                    });
                }
            }
            _ => {}
        }
    }
    records
}

/// `from module import a, b as c` (or `*`): one record per name.
fn extract_from_imports(
    base: &BaseExtractor,
    node: &Node,
    module_override: Option<String>,
) -> Vec<ImportRecord> {
    let module = module_override.or_else(|| {
        node.child_by_field_name("module_name")
            .and_then(|m| module_of(base, &m))
    });

    let mut records = Vec::new();
    let mut cursor = node.walk();
    for name_node in node.children_by_field_name("name", &mut cursor) {
        match name_node.kind() {
            "dotted_name" => records.push(ImportRecord::FromImport {
                module: module.clone(),
                name: base.get_node_text(&name_node),
                alias: None,
            }),
            "aliased_import" => {
                if let Some((name, alias)) = aliased(base, &name_node) {
                    records.push(ImportRecord::FromImport {
                        module: module.clone(),
                        name,
                        alias: Some(alias),
                    });
                }
            }
            _ => {}
        }
    }

    if records.is_empty() {
        // `from module import *`
        let mut cursor = node.walk();
        let wildcard = node
            .named_children(&mut cursor)
            .any(|c| c.kind() == "wildcard_import");
        if wildcard {
            records.push(ImportRecord::FromImport {
                module,
                name: "*".to_string(),
                alias: None,
            });
        }
    }

    records
}

/// `name as alias` fields of an `aliased_import` node.
fn aliased(base: &BaseExtractor, node: &Node) -> Option<(String, String)> {
    let name = node.child_by_field_name("name")?;
    let alias = node.child_by_field_name("alias")?;
    Some((base.get_node_text(&name), base.get_node_text(&alias)))
}

/// Module part of a `module_name` field. Relative imports keep only the
/// dotted tail (`from .pkg import x` -> `pkg`); a pure-relative import
/// has no module at all.
fn module_of(base: &BaseExtractor, node: &Node) -> Option<String> {
    match node.kind() {
        "dotted_name" => Some(base.get_node_text(node)),
        "relative_import" => {
            let mut cursor = node.walk();
            let result = node
                .named_children(&mut cursor)
                .find(|c| c.kind() == "dotted_name")
                .map(|c| base.get_node_text(&c));
            result
        }
        _ => Some(base.get_node_text(node)),
    }
}
