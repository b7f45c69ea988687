//! Ancestry index: read-only parent/scope lookup built once per file.
//!
//! A side-table keyed by node identity answers "does this node's ancestor
//! chain contain a class or function boundary?" and "is this node a
//! direct statement of that definition's body?" without re-walking the
//! tree per query. Nothing is ever patched onto tree nodes, and the table
//! is never written after construction.

use std::collections::HashMap;

use tree_sitter::Node;

/// Node kinds that open a function scope. The grammar folds `async def`
/// into `function_definition` with an `async` token; the separate kind is
/// matched for older grammar revisions.
pub(crate) fn is_function_kind(kind: &str) -> bool {
    matches!(kind, "function_definition" | "async_function_definition")
}

#[derive(Debug, Clone, Copy, Default)]
struct NodeScope {
    /// Definition whose body block directly contains this node, when the
    /// node is a member statement. A `decorated_definition` wrapper is
    /// transparent: the wrapped definition keeps the wrapper's owner.
    body_owner: Option<usize>,
    in_class: bool,
    in_function: bool,
}

/// Parent/scope information for every node in a parsed tree.
pub struct AncestryIndex {
    entries: HashMap<usize, NodeScope>,
}

impl AncestryIndex {
    /// Walk the whole tree once and record each node's scope.
    pub fn build(root: Node) -> Self {
        let mut index = Self {
            entries: HashMap::new(),
        };
        index.visit(root, None, NodeScope::default());
        index
    }

    fn visit(&mut self, node: Node, parent: Option<Node>, scope: NodeScope) {
        let in_class = scope.in_class || node.kind() == "class_definition";
        let in_function = scope.in_function || is_function_kind(node.kind());
        let body_owner = match node.kind() {
            // Direct children of a definition's body block are its member
            // statements.
            "block" => parent
                .filter(|p| p.kind() == "class_definition" || is_function_kind(p.kind()))
                .map(|p| p.id()),
            // Decorators do not change what the wrapped definition is a
            // member of.
            "decorated_definition" => scope.body_owner,
            _ => None,
        };

        self.entries.insert(node.id(), scope);

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            let child_scope = NodeScope {
                body_owner,
                in_class,
                in_function,
            };
            self.visit(child, Some(node), child_scope);
        }
    }

    /// True when any ancestor of `node` is a class definition.
    pub fn has_class_ancestor(&self, node: &Node) -> bool {
        self.entries.get(&node.id()).is_some_and(|s| s.in_class)
    }

    /// True when any ancestor of `node` is a function definition, async
    /// included.
    pub fn has_function_ancestor(&self, node: &Node) -> bool {
        self.entries.get(&node.id()).is_some_and(|s| s.in_function)
    }

    /// True when `node` is a direct statement of `owner`'s body, looking
    /// through a `decorated_definition` wrapper.
    pub fn is_direct_member(&self, owner: &Node, node: &Node) -> bool {
        self.entries
            .get(&node.id())
            .is_some_and(|s| s.body_owner == Some(owner.id()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language;

    fn find_kind<'a>(node: Node<'a>, kind: &str) -> Option<Node<'a>> {
        if node.kind() == kind {
            return Some(node);
        }
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if let Some(found) = find_kind(child, kind) {
                return Some(found);
            }
        }
        None
    }

    fn parse(source: &str) -> tree_sitter::Tree {
        language::python_parser().unwrap().parse(source, None).unwrap()
    }

    #[test]
    fn method_has_class_ancestor_but_module_function_does_not() {
        let source = "class C:\n    def m(self):\n        pass\n\ndef f():\n    pass\n";
        let tree = parse(source);
        let index = AncestryIndex::build(tree.root_node());

        let method = find_kind(tree.root_node(), "function_definition").unwrap();
        assert!(index.has_class_ancestor(&method));

        let class_node = find_kind(tree.root_node(), "class_definition").unwrap();
        assert!(!index.has_class_ancestor(&class_node));

        // The last function in the module is top-level.
        let module = tree.root_node();
        let top_level = module.named_child(module.named_child_count() - 1).unwrap();
        assert_eq!(top_level.kind(), "function_definition");
        assert!(!index.has_class_ancestor(&top_level));
        assert!(!index.has_function_ancestor(&top_level));
    }

    #[test]
    fn assignment_scopes_track_function_bodies() {
        let source = "x = 1\ndef f():\n    y = 2\n";
        let tree = parse(source);
        let index = AncestryIndex::build(tree.root_node());

        let module_assign = find_kind(tree.root_node(), "assignment").unwrap();
        assert!(!index.has_function_ancestor(&module_assign));

        let function = find_kind(tree.root_node(), "function_definition").unwrap();
        let local_assign = find_kind(function, "assignment").unwrap();
        assert!(index.has_function_ancestor(&local_assign));
    }

    #[test]
    fn direct_membership_sees_through_decorators() {
        let source = "class C:\n    @property\n    def m(self):\n        pass\n";
        let tree = parse(source);
        let index = AncestryIndex::build(tree.root_node());

        let class_node = find_kind(tree.root_node(), "class_definition").unwrap();
        let method = find_kind(tree.root_node(), "function_definition").unwrap();
        assert!(index.is_direct_member(&class_node, &method));
    }

    #[test]
    fn nested_definitions_are_not_direct_members_of_the_outer_class() {
        let source =
            "class C:\n    def m(self):\n        def inner():\n            pass\n";
        let tree = parse(source);
        let index = AncestryIndex::build(tree.root_node());

        let class_node = find_kind(tree.root_node(), "class_definition").unwrap();
        let method = find_kind(tree.root_node(), "function_definition").unwrap();
        let body = method.child_by_field_name("body").unwrap();
        let inner = find_kind(body, "function_definition").unwrap();

        assert!(index.is_direct_member(&class_node, &method));
        assert!(!index.is_direct_member(&class_node, &inner));
        assert!(index.has_class_ancestor(&inner));
        assert!(index.has_function_ancestor(&inner));
    }
}
