//! Highlighting strategies - token-to-markup mapping, one per output target.
//!
//! A strategy maps a (token kind, text) pair to a styled fragment for its
//! target: ANSI escape-wrapped text, an HTML `<span>`, or an SVG `<tspan>`.
//! Layout is entirely the dumper's job; every function here is pure, so the
//! same arguments always produce the same bytes.

use colored::{Color, Colorize};

/// Map token kind + text to a styled markup fragment for one target.
pub trait RenderSpec {
    /// A mapping key
    fn highlight_key(&self, text: &str) -> String;
    /// A scalar value
    fn highlight_value(&self, text: &str) -> String;
    /// The null token
    fn highlight_null(&self) -> String;
    /// Punctuation: `:`, `,`, brackets, `- `, `[]`, `{}`
    fn highlight_syntax(&self, token: &str) -> String;
}

/// ANSI escape coloring for terminal output
#[derive(Debug, Clone)]
pub struct AnsiSpec {
    pub key: Color,
    pub value: Color,
    pub null: Color,
    pub syntax: Color,
}

impl Default for AnsiSpec {
    fn default() -> Self {
        Self {
            key: Color::Cyan,
            value: Color::Green,
            null: Color::Magenta,
            syntax: Color::BrightBlack,
        }
    }
}

impl RenderSpec for AnsiSpec {
    fn highlight_key(&self, text: &str) -> String {
        text.color(self.key).to_string()
    }

    fn highlight_value(&self, text: &str) -> String {
        text.color(self.value).to_string()
    }

    fn highlight_null(&self) -> String {
        "null".color(self.null).to_string()
    }

    fn highlight_syntax(&self, token: &str) -> String {
        token.color(self.syntax).to_string()
    }
}

/// `<span>` fragments with theme-driven classes for HTML output
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlSpec;

impl RenderSpec for HtmlSpec {
    fn highlight_key(&self, text: &str) -> String {
        format!(r#"<span class="tree-key">{}</span>"#, escape_xml(text))
    }

    fn highlight_value(&self, text: &str) -> String {
        format!(r#"<span class="tree-value">{}</span>"#, escape_xml(text))
    }

    fn highlight_null(&self) -> String {
        r#"<span class="tree-null">null</span>"#.to_string()
    }

    fn highlight_syntax(&self, token: &str) -> String {
        format!(r#"<span class="tree-syntax">{}</span>"#, escape_xml(token))
    }
}

/// `<tspan>` fragments with theme-driven classes for SVG output
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgSpec;

impl RenderSpec for SvgSpec {
    fn highlight_key(&self, text: &str) -> String {
        format!(r#"<tspan class="tree-key">{}</tspan>"#, escape_xml(text))
    }

    fn highlight_value(&self, text: &str) -> String {
        format!(r#"<tspan class="tree-value">{}</tspan>"#, escape_xml(text))
    }

    fn highlight_null(&self) -> String {
        r#"<tspan class="tree-null">null</tspan>"#.to_string()
    }

    fn highlight_syntax(&self, token: &str) -> String {
        format!(r#"<tspan class="tree-syntax">{}</tspan>"#, escape_xml(token))
    }
}

/// Escape special XML characters in text content
pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a&b"), "a&amp;b");
        assert_eq!(escape_xml("<tag>"), "&lt;tag&gt;");
        assert_eq!(escape_xml(r#"say "hi""#), "say &quot;hi&quot;");
    }

    #[test]
    fn test_html_fragments_are_escaped() {
        let spec = HtmlSpec;
        assert_eq!(
            spec.highlight_key("a&b"),
            r#"<span class="tree-key">a&amp;b</span>"#
        );
        assert_eq!(
            spec.highlight_value("<x>"),
            r#"<span class="tree-value">&lt;x&gt;</span>"#
        );
    }

    #[test]
    fn test_svg_fragments_use_tspan() {
        let spec = SvgSpec;
        assert_eq!(
            spec.highlight_syntax("- "),
            r#"<tspan class="tree-syntax">- </tspan>"#
        );
        assert_eq!(spec.highlight_null(), r#"<tspan class="tree-null">null</tspan>"#);
    }

    #[test]
    fn test_ansi_null_token_is_colored() {
        colored::control::set_override(true);
        let spec = AnsiSpec::default();
        let out = spec.highlight_null();
        assert!(out.contains("null"));
        assert!(out.contains('\x1b'));
    }

    #[test]
    fn test_specs_are_pure() {
        let ansi = AnsiSpec::default();
        let html = HtmlSpec;
        let svg = SvgSpec;
        assert_eq!(ansi.highlight_key("k"), ansi.highlight_key("k"));
        assert_eq!(html.highlight_value("v"), html.highlight_value("v"));
        assert_eq!(svg.highlight_syntax("{"), svg.highlight_syntax("{"));
    }
}
