//! Theme system - CSS custom property-based theming for HTML and SVG output.
//!
//! Architecture:
//!   - Two required variables: --bg (background) and --fg (foreground)
//!   - Optional enrichment variables: --key, --value, --null, --syntax
//!   - Unset optionals fall back to color-mix() derivations from bg + fg
//!
//! The ANSI target takes its palette from `AnsiSpec` instead; terminal
//! colors are named, not hex.

use serde::{Deserialize, Serialize};

/// Built-in theme names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeTheme {
    /// Light theme (white background, dark text)
    Default,
    /// Dark theme (dark background, light text)
    Dark,
}

impl TreeTheme {
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "dark" => TreeTheme::Dark,
            _ => TreeTheme::Default,
        }
    }
}

impl std::fmt::Display for TreeTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TreeTheme::Default => write!(f, "default"),
            TreeTheme::Dark => write!(f, "dark"),
        }
    }
}

/// Output color configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    /// Background color → CSS variable --bg
    pub bg: String,
    /// Foreground / default text color → CSS variable --fg
    pub fg: String,
    /// Mapping key color → CSS variable --key (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Scalar value color → CSS variable --value (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Null token color → CSS variable --null (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub null: Option<String>,
    /// Punctuation color → CSS variable --syntax (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syntax: Option<String>,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_theme(TreeTheme::Default)
    }
}

impl Theme {
    pub fn from_theme(theme: TreeTheme) -> Self {
        match theme {
            TreeTheme::Default => Self {
                bg: "#FFFFFF".to_string(),
                fg: "#24292F".to_string(),
                key: Some("#0550AE".to_string()),
                value: Some("#0A7F3E".to_string()),
                null: Some("#8250DF".to_string()),
                syntax: None,
            },
            TreeTheme::Dark => Self {
                bg: "#1F1F1F".to_string(),
                fg: "#CCCCCC".to_string(),
                key: Some("#79C0FF".to_string()),
                value: Some("#7EE787".to_string()),
                null: Some("#D2A8FF".to_string()),
                syntax: None,
            },
        }
    }

    /// Inline style value carrying the CSS variables for this theme.
    pub(crate) fn css_variables(&self) -> String {
        let mut vars = vec![format!("--bg:{}", self.bg), format!("--fg:{}", self.fg)];

        if let Some(ref key) = self.key {
            vars.push(format!("--key:{}", key));
        }
        if let Some(ref value) = self.value {
            vars.push(format!("--value:{}", value));
        }
        if let Some(ref null) = self.null {
            vars.push(format!("--null:{}", null));
        }
        if let Some(ref syntax) = self.syntax {
            vars.push(format!("--syntax:{}", syntax));
        }

        vars.join(";")
    }
}

/// color-mix() weights for derived CSS variables
pub struct Mix;

impl Mix {
    pub const NULL_TOKEN: u8 = 60;
    pub const SYNTAX: u8 = 55;
}

/// Build the derived CSS variable declarations shared by both markup targets.
pub(crate) fn derived_variables() -> String {
    format!(
        r#"
    /* Derived from --bg and --fg (overridable via --key, --value, etc.) */
    --_key:    var(--key, var(--fg));
    --_value:  var(--value, var(--fg));
    --_null:   var(--null, color-mix(in srgb, var(--fg) {}%, var(--bg)));
    --_syntax: var(--syntax, color-mix(in srgb, var(--fg) {}%, var(--bg)));"#,
        Mix::NULL_TOKEN,
        Mix::SYNTAX,
    )
}
