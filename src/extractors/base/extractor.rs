// Shared per-file extractor state.
//
// Holds the original source text and the node-to-text / node-to-span
// helpers every declaration extractor leans on.

use tree_sitter::Node;

use super::slicing;
use super::types::Span;

/// Per-file state shared by the Python extractor's sub-modules.
pub struct BaseExtractor {
    pub content: String,
}

impl BaseExtractor {
    pub fn new(content: String) -> Self {
        Self { content }
    }

    /// Text of a node, straight from the source bytes.
    pub fn get_node_text(&self, node: &Node) -> String {
        let bytes = self.content.as_bytes();
        let (start, end) = (node.start_byte(), node.end_byte());
        if start < bytes.len() && end <= bytes.len() {
            String::from_utf8_lossy(&bytes[start..end]).to_string()
        } else {
            String::new()
        }
    }

    /// 1-based inclusive line span of a node.
    pub fn node_span(&self, node: &Node) -> Span {
        Span {
            start_line: node.start_position().row + 1,
            end_line: node.end_position().row + 1,
        }
    }

    /// Base64 of the exact source lines covering `span`.
    pub fn encode_span(&self, span: Span) -> String {
        slicing::encode(&slicing::slice_lines(&self.content, span))
    }
}
