//! Plain/ANSI text dumper - JSON notation with colorized tokens.
//!
//! Straightforward recursive descent: brackets and braces are explicit,
//! commas precede every non-first element, indentation is two spaces per
//! nesting level tracked through the path stack.

use super::{quote, DumpVisitor, PathStack};
use crate::highlight::RenderSpec;
use crate::types::Node;

/// Spaces per nesting level
const INDENT: usize = 2;

/// Renders a tree as indented, colorized JSON-style text.
///
/// Single-use: each instance owns a private path stack and output buffer
/// and must not be reused across renders.
pub struct TextDumper<'a> {
    spec: &'a dyn RenderSpec,
    path: PathStack,
    out: String,
}

impl<'a> TextDumper<'a> {
    pub fn new(spec: &'a dyn RenderSpec) -> Self {
        Self {
            spec,
            path: PathStack::new(),
            out: String::new(),
        }
    }

    pub fn into_output(self) -> String {
        self.out
    }

    /// Break the line and indent to the given nesting level.
    fn newline(&mut self, level: usize) {
        self.out.push('\n');
        for _ in 0..level * INDENT {
            self.out.push(' ');
        }
    }

    fn put_syntax(&mut self, token: &str) {
        let markup = self.spec.highlight_syntax(token);
        self.out.push_str(&markup);
    }
}

impl DumpVisitor for TextDumper<'_> {
    fn visit_null(&mut self) {
        let markup = self.spec.highlight_null();
        self.out.push_str(&markup);
    }

    fn visit_scalar(&mut self, text: &str) {
        let markup = self.spec.highlight_value(&quote(text));
        self.out.push_str(&markup);
    }

    fn visit_sequence(&mut self, items: &[Node]) {
        if items.is_empty() {
            self.put_syntax("[]");
            return;
        }

        self.put_syntax("[");
        for (index, item) in items.iter().enumerate() {
            if index > 0 {
                self.put_syntax(",");
            }
            self.newline(self.path.depth() + 1);
            self.path.push_index(index);
            self.visit_node(item);
            self.path.pop();
        }
        self.newline(self.path.depth());
        self.put_syntax("]");
    }

    fn visit_mapping(&mut self, entries: &[(String, Node)]) {
        if entries.is_empty() {
            self.put_syntax("{}");
            return;
        }

        self.put_syntax("{");
        for (index, (key, value)) in entries.iter().enumerate() {
            if index > 0 {
                self.put_syntax(",");
            }
            self.newline(self.path.depth() + 1);
            let markup = self.spec.highlight_key(&quote(key));
            self.out.push_str(&markup);
            self.put_syntax(":");
            self.out.push(' ');
            self.path.push_key(key);
            self.visit_node(value);
            self.path.pop();
        }
        self.newline(self.path.depth());
        self.put_syntax("}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Identity strategy so layout can be asserted without escape codes
    struct PlainSpec;

    impl RenderSpec for PlainSpec {
        fn highlight_key(&self, text: &str) -> String {
            text.to_string()
        }
        fn highlight_value(&self, text: &str) -> String {
            text.to_string()
        }
        fn highlight_null(&self) -> String {
            "null".to_string()
        }
        fn highlight_syntax(&self, token: &str) -> String {
            token.to_string()
        }
    }

    fn render_plain(tree: &Node) -> String {
        let spec = PlainSpec;
        let mut dumper = TextDumper::new(&spec);
        dumper.visit_root(tree);
        dumper.into_output()
    }

    #[test]
    fn test_null_root_is_bare_token() {
        assert_eq!(render_plain(&Node::Null), "null");
    }

    #[test]
    fn test_empty_collections_render_inline() {
        assert_eq!(render_plain(&Node::mapping(vec![])), "{}");
        assert_eq!(render_plain(&Node::sequence(vec![])), "[]");
    }

    #[test]
    fn test_mapping_block_with_commas() {
        let tree = Node::mapping(vec![
            ("a".to_string(), Node::scalar("1")),
            ("b".to_string(), Node::scalar("2")),
        ]);
        let expected = r#"{
  "a": "1",
  "b": "2"
}"#;
        assert_eq!(render_plain(&tree), expected);
    }

    #[test]
    fn test_nested_mixed_tree() {
        let tree = Node::mapping(vec![
            (
                "k1".to_string(),
                Node::sequence(vec![Node::scalar("1"), Node::scalar("2")]),
            ),
            ("k2".to_string(), Node::Null),
        ]);
        let expected = r#"{
  "k1": [
    "1",
    "2"
  ],
  "k2": null
}"#;
        assert_eq!(render_plain(&tree), expected);
    }
}
