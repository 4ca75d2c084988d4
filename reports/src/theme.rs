//! Design tokens: the named color/shadow values every rule refers to.
//!
//! A [`Theme`] is an ordered list of CSS custom properties. The stylesheet in
//! [`crate::styles`] only ever references tokens through `var(--name)`, so a
//! theme can be swapped, serialized to a `:root { ... }` block, parsed back,
//! and re-applied without touching any rule.
//!
//! ```rust
//! use dashboard_leptos::theme::Theme;
//!
//! let theme = Theme::default();
//! let css = theme.to_custom_properties();
//! let parsed = Theme::from_custom_properties(&css).unwrap();
//! assert_eq!(parsed, theme);
//! ```

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Names of every token a theme defines, in serialization order.
pub const TOKEN_NAMES: [&str; 14] = [
    "--primary-color",
    "--success-color",
    "--danger-color",
    "--warning-color",
    "--neutral-color",
    "--background-color",
    "--card-background",
    "--text-color",
    "--muted-text-color",
    "--border-color",
    "--detection-color",
    "--recovery-color",
    "--isolation-color",
    "--shadow",
];

const LIGHT: [&str; 14] = [
    "#3498db",
    "#2ecc71",
    "#e74c3c",
    "#f39c12",
    "#95a5a6",
    "#f5f7fa",
    "#ffffff",
    "#2c3e50",
    "#7f8c8d",
    "#dfe4ea",
    "#c0392b",
    "#27ae60",
    "#8e44ad",
    "0 2px 10px rgba(0, 0, 0, 0.08)",
];

const DARK: [&str; 14] = [
    "#4aa3df",
    "#3ddc84",
    "#ff5c5c",
    "#ffb347",
    "#6c7a89",
    "#0f1115",
    "#171a21",
    "#d7dde5",
    "#8a94a6",
    "#2a2f3a",
    "#ff6b6b",
    "#4cd98a",
    "#b07cd8",
    "0 2px 12px rgba(0, 0, 0, 0.45)",
];

/// Errors raised while building or parsing a theme.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error("unknown design token `{0}`")]
    UnknownToken(String),
    #[error("empty value for design token `{0}`")]
    EmptyValue(String),
    #[error("value for design token `{name}` contains `{found}`, which cannot appear in a custom property")]
    InvalidValue { name: String, found: char },
    #[error("no `:root {{ ... }}` block found")]
    MissingRoot,
    #[error("malformed declaration `{0}`")]
    MalformedDeclaration(String),
}

/// One named token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignToken {
    /// Custom property name including the leading `--`
    pub name: String,
    pub value: String,
}

/// An ordered set of design tokens.
///
/// Serializes as a map from token name to value, in declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    tokens: Vec<DesignToken>,
}

impl Serialize for Theme {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.tokens.iter().map(|t| (&t.name, &t.value)))
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_values(&LIGHT)
    }
}

/// First character that would end the declaration, the `:root` block or
/// the surrounding `<style>` element.
fn forbidden_char(value: &str) -> Option<char> {
    value
        .chars()
        .find(|c| matches!(c, ';' | '{' | '}' | '<') || c.is_control())
}

/// Accept `primary-color` as well as `--primary-color`.
fn normalize(name: &str) -> String {
    let name = name.trim();
    if name.starts_with("--") {
        name.to_string()
    } else {
        format!("--{name}")
    }
}

impl Theme {
    fn from_values(values: &[&str; 14]) -> Self {
        let tokens = TOKEN_NAMES
            .iter()
            .zip(values.iter())
            .map(|(name, value)| DesignToken {
                name: (*name).to_string(),
                value: (*value).to_string(),
            })
            .collect();
        Self { tokens }
    }

    /// Dark palette for low-light control rooms.
    pub fn dark() -> Self {
        Self::from_values(&DARK)
    }

    /// All tokens in order.
    pub fn tokens(&self) -> &[DesignToken] {
        &self.tokens
    }

    /// Look up a token by name (leading `--` optional).
    pub fn get(&self, name: &str) -> Option<&str> {
        let name = normalize(name);
        self.tokens
            .iter()
            .find(|t| t.name == name)
            .map(|t| t.value.as_str())
    }

    /// Replace a token's value. Values must stay a single declaration.
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), ThemeError> {
        let name = normalize(name);
        let value = value.trim();
        if value.is_empty() {
            return Err(ThemeError::EmptyValue(name));
        }
        if let Some(found) = forbidden_char(value) {
            return Err(ThemeError::InvalidValue { name, found });
        }
        match self.tokens.iter_mut().find(|t| t.name == name) {
            Some(token) => {
                token.value = value.to_string();
                Ok(())
            }
            None => Err(ThemeError::UnknownToken(name)),
        }
    }

    /// Apply a batch of overrides, failing on the first unknown token.
    pub fn with_overrides<I, K, V>(mut self, overrides: I) -> Result<Self, ThemeError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (name, value) in overrides {
            self.set(name.as_ref(), value.as_ref())?;
        }
        Ok(self)
    }

    /// Serialize as a `:root { ... }` block.
    pub fn to_custom_properties(&self) -> String {
        let mut out = String::from(":root {\n");
        for token in &self.tokens {
            out.push_str("    ");
            out.push_str(&token.name);
            out.push_str(": ");
            out.push_str(&token.value);
            out.push_str(";\n");
        }
        out.push('}');
        out
    }

    /// Parse a `:root { ... }` block. Tokens not mentioned keep their
    /// default (light) values.
    pub fn from_custom_properties(css: &str) -> Result<Self, ThemeError> {
        let start = css.find(":root").ok_or(ThemeError::MissingRoot)?;
        let rest = &css[start..];
        let open = rest.find('{').ok_or(ThemeError::MissingRoot)?;
        let close = rest[open..].find('}').ok_or(ThemeError::MissingRoot)? + open;
        let body = &rest[open + 1..close];

        let mut theme = Theme::default();
        for decl in body.split(';') {
            let decl = decl.trim();
            if decl.is_empty() {
                continue;
            }
            let (name, value) = decl
                .split_once(':')
                .ok_or_else(|| ThemeError::MalformedDeclaration(decl.to_string()))?;
            let name = name.trim();
            if !name.starts_with("--") {
                return Err(ThemeError::MalformedDeclaration(decl.to_string()));
            }
            theme.set(name, value)?;
        }
        Ok(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn custom_properties_round_trip() {
        for theme in [Theme::default(), Theme::dark()] {
            let css = theme.to_custom_properties();
            assert_eq!(Theme::from_custom_properties(&css), Ok(theme));
        }
    }

    #[test]
    fn get_accepts_bare_names() {
        let theme = Theme::default();
        assert_eq!(theme.get("primary-color"), Some("#3498db"));
        assert_eq!(theme.get("--primary-color"), Some("#3498db"));
        assert_eq!(theme.get("--nope"), None);
    }

    #[test]
    fn overrides_apply_and_reject_unknown() {
        let theme = Theme::default()
            .with_overrides([("danger-color", "#ff0000")])
            .expect("known token");
        assert_eq!(theme.get("danger-color"), Some("#ff0000"));

        let err = Theme::default().with_overrides([("--sparkle", "#fff")]);
        assert_eq!(err, Err(ThemeError::UnknownToken("--sparkle".into())));

        let err = Theme::default().with_overrides([("--text-color", "  ")]);
        assert_eq!(err, Err(ThemeError::EmptyValue("--text-color".into())));
    }

    #[test]
    fn partial_block_keeps_defaults() {
        let theme = Theme::from_custom_properties(":root { --primary-color: #000; }")
            .expect("parse");
        assert_eq!(theme.get("--primary-color"), Some("#000"));
        assert_eq!(theme.get("--danger-color"), Some("#e74c3c"));
    }

    #[test]
    fn malformed_blocks_are_rejected() {
        assert_eq!(
            Theme::from_custom_properties("body { color: red; }"),
            Err(ThemeError::MissingRoot)
        );
        assert_eq!(
            Theme::from_custom_properties(":root { color: red; }"),
            Err(ThemeError::MalformedDeclaration("color: red".into()))
        );
        assert_eq!(
            Theme::from_custom_properties(":root { --primary-color }"),
            Err(ThemeError::MalformedDeclaration("--primary-color".into()))
        );
    }

    #[test]
    fn values_that_escape_the_declaration_are_rejected() {
        let err = Theme::default().with_overrides([("primary-color", "red; --danger-color: blue")]);
        assert_eq!(
            err,
            Err(ThemeError::InvalidValue {
                name: "--primary-color".into(),
                found: ';',
            })
        );

        for value in ["red}</style><h1>x</h1><style>", "red { x", "</style>", "red\n--x: 1"] {
            let result = Theme::default().with_overrides([("--shadow", value)]);
            assert!(
                matches!(result, Err(ThemeError::InvalidValue { .. })),
                "{value:?} accepted"
            );
        }
    }

    #[test]
    fn accepted_overrides_survive_round_trip() {
        let theme = Theme::dark()
            .with_overrides([
                ("primary-color", "rgb(10, 20, 30)"),
                ("shadow", "0 0 4px hsl(0 0% 0% / 0.5)"),
            ])
            .expect("plain values");
        let reparsed =
            Theme::from_custom_properties(&theme.to_custom_properties()).expect("reparse");
        assert_eq!(reparsed, theme);
    }

    #[test]
    fn serializes_tokens_in_declaration_order() {
        let json = serde_json::to_string(&Theme::default()).expect("serialize");
        let positions: Vec<usize> = TOKEN_NAMES
            .iter()
            .map(|name| json.find(&format!("\"{name}\"")).expect("token present"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{json}");
    }

    #[test]
    fn category_tokens_are_distinct() {
        for theme in [Theme::default(), Theme::dark()] {
            let d = theme.get("--detection-color");
            let r = theme.get("--recovery-color");
            let i = theme.get("--isolation-color");
            assert!(d != r && r != i && d != i);
        }
    }
}
