/// Python extractor: walks a parsed tree once and accumulates structural
/// records in source order.
///
/// This module is organized into focused sub-modules:
/// - resolve: name/value rendering with sentinel degradation
/// - docstrings: leading-string docstring detection
/// - signatures: parameter extraction
/// - decorators: decorator name extraction
/// - imports: import statement handling
/// - assignments: variable assignment extraction
/// - classes / functions: per-declaration record builders
pub(crate) mod assignments;
pub(crate) mod classes;
pub(crate) mod decorators;
pub(crate) mod docstrings;
pub(crate) mod functions;
pub(crate) mod imports;
pub(crate) mod resolve;
pub(crate) mod signatures;

use tree_sitter::{Node, Tree};

use super::ancestry::AncestryIndex;
use super::base::types::Extraction;
use super::base::BaseExtractor;

/// Single-pass traversal visitor over one file's tree.
pub struct PythonExtractor {
    base: BaseExtractor,
    include_code: bool,
}

impl PythonExtractor {
    pub fn new(content: String, include_code: bool) -> Self {
        Self {
            base: BaseExtractor::new(content),
            include_code,
        }
    }

    /// Walk the tree once and collect every record list, in source order.
    pub fn extract(&self, tree: &Tree) -> Extraction {
        let index = AncestryIndex::build(tree.root_node());
        let mut out = Extraction::default();
        self.traverse(tree.root_node(), &index, &mut out);
        out
    }

    fn traverse(&self, node: Node, index: &AncestryIndex, out: &mut Extraction) {
        match node.kind() {
            "import_statement" | "import_from_statement" | "future_import_statement" => {
                out.imports.extend(imports::extract_imports(self.base(), &node));
            }
            "class_definition" => {
                // Classes are collected wherever they appear; nesting does
                // not filter them out of the flat list.
                out.classes.push(classes::extract_class(self, &node, index));
            }
            "function_definition" | "async_function_definition" => {
                // Sync members of a class body were already captured as
                // methods by the class extractor; async members are
                // dropped outright.
                if !index.has_class_ancestor(&node) {
                    let is_async = signatures::is_async_definition(&node);
                    out.functions
                        .push(functions::extract_function(self, &node, is_async));
                }
            }
            "assignment" => {
                if !index.has_class_ancestor(&node) && !index.has_function_ancestor(&node) {
                    if let Some(record) = assignments::extract_assignment(self.base(), &node) {
                        out.variables.push(record);
                    }
                }
            }
            _ => {}
        }

        // Recursively traverse children
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.traverse(child, index, out);
        }
    }

    pub(crate) fn base(&self) -> &BaseExtractor {
        &self.base
    }

    /// Base64 slice for a declaration node, captured here while the node
    /// in hand is the one the record is being built from.
    pub(crate) fn encoded_code(&self, node: &Node) -> Option<String> {
        self.include_code
            .then(|| self.base.encode_span(self.base.node_span(node)))
    }
}
