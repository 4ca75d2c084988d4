//! CSS for the dashboard, built as typed rules.
//!
//! The stylesheet is assembled from [`StyleRule`]s instead of one big string
//! so it can be queried: tests and tools look up what a selector resolves to
//! (`declaration`, `media_declaration`) and substitute design tokens
//! (`resolve_vars`) the way a browser computes values.
//!
//! # Customization
//!
//! Colors live in [`crate::theme::Theme`]; swap the theme, keep the rules:
//!
//! ```rust
//! use dashboard_leptos::{styles::render_css, theme::Theme};
//!
//! let css = render_css(&Theme::dark());
//! assert!(css.starts_with(":root {"));
//! assert!(css.contains(".log-entry.detection"));
//! ```
//!
//! # Features
//!
//! - Category-colored log lines and severity dots with glow
//! - Intent-colored buttons with a shared disabled affordance
//! - Two-column rows collapsing to one column at the mobile breakpoint
//! - Spinner keyframes for the loader

use std::fmt::Write as _;
use std::sync::LazyLock;

use crate::layout::MOBILE_BREAKPOINT_PX;
use crate::theme::Theme;

/// A selector (possibly a comma-separated group) and its declarations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleRule {
    pub selector: String,
    pub declarations: Vec<(String, String)>,
}

impl StyleRule {
    pub fn new(selector: &str) -> Self {
        Self {
            selector: selector.to_string(),
            declarations: Vec::new(),
        }
    }

    /// Builder-style declaration.
    pub fn decl(mut self, property: &str, value: &str) -> Self {
        self.declarations
            .push((property.to_string(), value.to_string()));
        self
    }

    /// True if `selector` is one of this rule's comma-separated selectors.
    pub fn matches(&self, selector: &str) -> bool {
        self.selector.split(',').any(|s| s.trim() == selector)
    }

    /// Last value declared for `property`.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .rev()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    fn write_css(&self, out: &mut String, indent: &str) {
        let _ = writeln!(out, "{indent}{} {{", self.selector);
        for (p, v) in &self.declarations {
            let _ = writeln!(out, "{indent}    {p}: {v};");
        }
        let _ = writeln!(out, "{indent}}}");
    }
}

/// `@media (max-width: Npx) { ... }`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaBlock {
    pub max_width_px: u32,
    pub rules: Vec<StyleRule>,
}

/// `@keyframes name { ... }`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Keyframes {
    pub name: String,
    /// (offset, declarations), e.g. ("from", [("transform", "rotate(0deg)")])
    pub frames: Vec<(String, Vec<(String, String)>)>,
}

/// A complete stylesheet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stylesheet {
    pub rules: Vec<StyleRule>,
    pub media: Vec<MediaBlock>,
    pub keyframes: Vec<Keyframes>,
}

fn lookup<'a>(rules: &'a [StyleRule], selector: &str, property: &str) -> Option<&'a str> {
    rules
        .iter()
        .filter(|r| r.matches(selector))
        .filter_map(|r| r.get(property))
        .last()
}

impl Stylesheet {
    /// Value of `property` for an exact `selector`, last rule wins.
    pub fn declaration(&self, selector: &str, property: &str) -> Option<&str> {
        lookup(&self.rules, selector, property)
    }

    /// Value of `property` inside the `max-width` media block, if declared there.
    pub fn media_declaration(&self, max_width_px: u32, selector: &str, property: &str) -> Option<&str> {
        self.media
            .iter()
            .filter(|m| m.max_width_px == max_width_px)
            .filter_map(|m| lookup(&m.rules, selector, property))
            .last()
    }

    /// Value for a given viewport width: media blocks whose `max-width`
    /// covers the viewport override the base rules.
    pub fn declaration_at(&self, viewport_px: u32, selector: &str, property: &str) -> Option<&str> {
        self.media
            .iter()
            .filter(|m| viewport_px <= m.max_width_px)
            .filter_map(|m| lookup(&m.rules, selector, property))
            .last()
            .or_else(|| self.declaration(selector, property))
    }

    /// Every selector in the base rules, group members split out.
    pub fn selectors(&self) -> impl Iterator<Item = &str> {
        self.rules
            .iter()
            .flat_map(|r| r.selector.split(',').map(str::trim))
    }

    pub fn to_css(&self) -> String {
        let mut out = String::new();
        for rule in &self.rules {
            rule.write_css(&mut out, "");
        }
        for kf in &self.keyframes {
            let _ = writeln!(out, "@keyframes {} {{", kf.name);
            for (offset, decls) in &kf.frames {
                let _ = write!(out, "    {offset} {{");
                for (p, v) in decls {
                    let _ = write!(out, " {p}: {v};");
                }
                let _ = writeln!(out, " }}");
            }
            let _ = writeln!(out, "}}");
        }
        for block in &self.media {
            let _ = writeln!(out, "@media (max-width: {}px) {{", block.max_width_px);
            for rule in &block.rules {
                rule.write_css(&mut out, "    ");
            }
            let _ = writeln!(out, "}}");
        }
        out
    }
}

/// Substitute `var(--name)` and `var(--name, fallback)` with theme values.
///
/// Unknown tokens without a fallback are left untouched.
pub fn resolve_vars(value: &str, theme: &Theme) -> String {
    resolve_depth(value, theme, 0)
}

fn resolve_depth(value: &str, theme: &Theme, depth: u8) -> String {
    if depth > 8 {
        return value.to_string();
    }
    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(pos) = rest.find("var(") {
        out.push_str(&rest[..pos]);
        let args_start = pos + 4;
        let Some(args_len) = matching_paren(&rest[args_start..]) else {
            out.push_str(&rest[pos..]);
            return out;
        };
        let args = &rest[args_start..args_start + args_len];
        let (name, fallback) = match args.split_once(',') {
            Some((n, f)) => (n.trim(), Some(f.trim())),
            None => (args.trim(), None),
        };
        match (theme.get(name), fallback) {
            (Some(v), _) => out.push_str(&resolve_depth(v, theme, depth + 1)),
            (None, Some(fb)) => out.push_str(&resolve_depth(fb, theme, depth + 1)),
            (None, None) => out.push_str(&rest[pos..args_start + args_len + 1]),
        }
        rest = &rest[args_start + args_len + 1..];
    }
    out.push_str(rest);
    out
}

/// Length of `s` up to the `)` closing an already-open paren.
fn matching_paren(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' if depth == 0 => return Some(i),
            ')' => depth -= 1,
            _ => {}
        }
    }
    None
}

/// Resolved (token-substituted) value of a base declaration.
pub fn resolved_declaration(
    sheet: &Stylesheet,
    theme: &Theme,
    selector: &str,
    property: &str,
) -> Option<String> {
    sheet
        .declaration(selector, property)
        .map(|v| resolve_vars(v, theme))
}

/// The dashboard stylesheet, built once.
pub static DASHBOARD_STYLESHEET: LazyLock<Stylesheet> = LazyLock::new(dashboard_stylesheet);

/// Custom properties for `theme` followed by the dashboard rules.
pub fn render_css(theme: &Theme) -> String {
    format!(
        "{}\n{}",
        theme.to_custom_properties(),
        DASHBOARD_STYLESHEET.to_css()
    )
}

/// Build every rule of the dashboard stylesheet.
pub fn dashboard_stylesheet() -> Stylesheet {
    let mut rules = Vec::new();

    // Base
    rules.push(StyleRule::new("*, *::before, *::after").decl("box-sizing", "border-box"));
    rules.push(
        StyleRule::new("body")
            .decl("margin", "0")
            .decl("font-family", "'Segoe UI', Tahoma, Geneva, Verdana, sans-serif")
            .decl("background-color", "var(--background-color)")
            .decl("color", "var(--text-color)")
            .decl("line-height", "1.6"),
    );
    rules.push(
        StyleRule::new(".container")
            .decl("max-width", "1200px")
            .decl("margin", "0 auto")
            .decl("padding", "20px"),
    );
    rules.push(
        StyleRule::new("header")
            .decl("display", "flex")
            .decl("justify-content", "space-between")
            .decl("align-items", "center")
            .decl("flex-wrap", "wrap")
            .decl("gap", "12px")
            .decl("margin-bottom", "24px")
            .decl("padding-bottom", "12px")
            .decl("border-bottom", "1px solid var(--border-color)"),
    );
    rules.push(
        StyleRule::new("header h1")
            .decl("margin", "0")
            .decl("font-size", "1.75rem")
            .decl("color", "var(--primary-color)"),
    );
    rules.push(
        StyleRule::new(".subtitle")
            .decl("margin", "4px 0 0")
            .decl("color", "var(--muted-text-color)")
            .decl("font-size", "0.9rem"),
    );

    // Cards and layout grids
    rules.push(
        StyleRule::new(".card")
            .decl("background-color", "var(--card-background)")
            .decl("border", "1px solid var(--border-color)")
            .decl("border-radius", "8px")
            .decl("box-shadow", "var(--shadow)")
            .decl("padding", "20px")
            .decl("margin-bottom", "20px"),
    );
    rules.push(
        StyleRule::new(".card h2")
            .decl("margin", "0 0 16px")
            .decl("font-size", "1.2rem")
            .decl("color", "var(--text-color)"),
    );
    rules.push(
        StyleRule::new(".dashboard-row")
            .decl("display", "grid")
            .decl("grid-template-columns", "repeat(2, minmax(0, 1fr))")
            .decl("gap", "20px"),
    );
    rules.push(
        StyleRule::new(".flex-grid")
            .decl("display", "grid")
            .decl("grid-template-columns", "repeat(2, minmax(0, 1fr))")
            .decl("gap", "12px"),
    );
    rules.push(
        StyleRule::new(".status-grid")
            .decl("display", "grid")
            .decl("grid-template-columns", "repeat(auto-fill, minmax(200px, 1fr))")
            .decl("gap", "12px"),
    );
    rules.push(
        StyleRule::new(".status-item")
            .decl("display", "flex")
            .decl("flex-direction", "column")
            .decl("padding", "12px")
            .decl("border-radius", "6px")
            .decl("background-color", "var(--background-color)"),
    );
    rules.push(
        StyleRule::new(".status-label")
            .decl("font-size", "0.8rem")
            .decl("color", "var(--muted-text-color)")
            .decl("text-transform", "uppercase")
            .decl("letter-spacing", "0.04em"),
    );
    rules.push(
        StyleRule::new(".status-value")
            .decl("font-size", "1.1rem")
            .decl("font-weight", "600")
            .decl("word-break", "break-all"),
    );

    // Badges
    rules.push(StyleRule::new(".badge-row").decl("display", "flex").decl("gap", "8px").decl("flex-wrap", "wrap"));
    rules.push(
        StyleRule::new(".status-badge")
            .decl("display", "inline-block")
            .decl("padding", "4px 12px")
            .decl("border-radius", "12px")
            .decl("font-size", "0.8rem")
            .decl("font-weight", "600")
            .decl("color", "#ffffff"),
    );
    rules.push(StyleRule::new(".status-badge.badge-active").decl("background-color", "var(--success-color)"));
    rules.push(StyleRule::new(".status-badge.badge-inactive").decl("background-color", "var(--neutral-color)"));

    // Alert indicators
    rules.push(
        StyleRule::new(".alert-list")
            .decl("list-style", "none")
            .decl("margin", "0")
            .decl("padding", "0"),
    );
    rules.push(
        StyleRule::new(".alert-list li")
            .decl("display", "flex")
            .decl("align-items", "center")
            .decl("gap", "10px")
            .decl("padding", "6px 0"),
    );
    rules.push(
        StyleRule::new(".alert-indicator")
            .decl("display", "inline-block")
            .decl("width", "12px")
            .decl("height", "12px")
            .decl("border-radius", "50%")
            .decl("background-color", "var(--neutral-color)"),
    );
    rules.push(
        StyleRule::new(".alert-indicator.alert-high")
            .decl("background-color", "var(--danger-color)")
            .decl("box-shadow", "0 0 8px var(--danger-color)"),
    );
    rules.push(
        StyleRule::new(".alert-indicator.alert-medium")
            .decl("background-color", "var(--warning-color)")
            .decl("box-shadow", "0 0 6px var(--warning-color)"),
    );
    rules.push(StyleRule::new(".alert-indicator.alert-low").decl("background-color", "var(--success-color)"));

    // Metrics
    rules.push(
        StyleRule::new(".metric")
            .decl("display", "flex")
            .decl("flex-direction", "column")
            .decl("padding", "12px")
            .decl("border-left", "4px solid var(--primary-color)"),
    );
    rules.push(StyleRule::new(".metric-label").decl("color", "var(--muted-text-color)").decl("font-size", "0.85rem"));
    rules.push(StyleRule::new(".metric-value").decl("font-size", "1.8rem").decl("font-weight", "700"));
    rules.push(StyleRule::new(".metric-change").decl("font-size", "0.85rem").decl("font-weight", "600"));
    rules.push(StyleRule::new(".metric-change.metric-positive").decl("color", "var(--success-color)"));
    rules.push(StyleRule::new(".metric-change.metric-negative").decl("color", "var(--danger-color)"));

    // Log panels
    rules.push(
        StyleRule::new(".log-container")
            .decl("max-height", "320px")
            .decl("overflow-y", "auto")
            .decl("font-family", "Consolas, 'Courier New', monospace")
            .decl("font-size", "0.85rem")
            .decl("background-color", "var(--background-color)")
            .decl("border-radius", "6px")
            .decl("padding", "8px"),
    );
    rules.push(
        StyleRule::new(".log-entry")
            .decl("padding", "4px 6px")
            .decl("border-bottom", "1px solid var(--border-color)")
            .decl("color", "var(--text-color)")
            .decl("white-space", "pre-wrap"),
    );
    rules.push(StyleRule::new(".log-entry:last-child").decl("border-bottom", "none"));
    rules.push(StyleRule::new(".log-time").decl("color", "var(--muted-text-color)").decl("margin-right", "8px"));
    rules.push(
        StyleRule::new(".log-entry.detection")
            .decl("color", "var(--detection-color)")
            .decl("font-weight", "600"),
    );
    rules.push(
        StyleRule::new(".log-entry.recovery")
            .decl("color", "var(--recovery-color)")
            .decl("font-weight", "600"),
    );
    rules.push(
        StyleRule::new(".log-entry.isolation")
            .decl("color", "var(--isolation-color)")
            .decl("font-weight", "600"),
    );
    rules.push(StyleRule::new(".log-entry.log-info").decl("color", "var(--primary-color)"));
    rules.push(StyleRule::new(".log-entry.log-warning").decl("color", "var(--warning-color)"));
    rules.push(StyleRule::new(".log-entry.log-success").decl("color", "var(--success-color)"));
    rules.push(
        StyleRule::new(".log-empty")
            .decl("color", "var(--muted-text-color)")
            .decl("font-style", "italic")
            .decl("text-align", "center")
            .decl("padding", "16px"),
    );

    // Buttons
    rules.push(StyleRule::new(".controls").decl("display", "flex").decl("flex-wrap", "wrap").decl("gap", "10px"));
    rules.push(
        StyleRule::new("button, .btn")
            .decl("border", "none")
            .decl("border-radius", "6px")
            .decl("padding", "10px 18px")
            .decl("font-size", "0.9rem")
            .decl("font-weight", "600")
            .decl("color", "#ffffff")
            .decl("cursor", "pointer")
            .decl("transition", "transform 0.15s ease, box-shadow 0.15s ease, opacity 0.15s ease"),
    );
    rules.push(
        StyleRule::new("button:hover, .btn:hover")
            .decl("transform", "translateY(-1px)")
            .decl("box-shadow", "var(--shadow)"),
    );
    for (class, token) in [
        (".primary-btn", "var(--primary-color)"),
        (".success-btn", "var(--success-color)"),
        (".danger-btn", "var(--danger-color)"),
        (".warning-btn", "var(--warning-color)"),
        (".neutral-btn", "var(--neutral-color)"),
    ] {
        rules.push(StyleRule::new(class).decl("background-color", token));
    }
    rules.push(
        StyleRule::new("button:disabled, .disabled")
            .decl("opacity", "0.6")
            .decl("cursor", "not-allowed"),
    );
    rules.push(
        StyleRule::new("button:disabled:hover, .disabled:hover")
            .decl("transform", "none")
            .decl("box-shadow", "none"),
    );

    // Loader
    rules.push(
        StyleRule::new(".loader")
            .decl("display", "inline-block")
            .decl("width", "24px")
            .decl("height", "24px")
            .decl("border", "3px solid var(--border-color)")
            .decl("border-top-color", "var(--primary-color)")
            .decl("border-radius", "50%")
            .decl("animation", "spin 1s linear infinite"),
    );
    rules.push(
        StyleRule::new(".loading-row")
            .decl("display", "flex")
            .decl("align-items", "center")
            .decl("gap", "10px")
            .decl("color", "var(--muted-text-color)"),
    );

    let spin = Keyframes {
        name: "spin".to_string(),
        frames: vec![
            ("from".to_string(), vec![("transform".to_string(), "rotate(0deg)".to_string())]),
            ("to".to_string(), vec![("transform".to_string(), "rotate(360deg)".to_string())]),
        ],
    };

    let mobile = MediaBlock {
        max_width_px: MOBILE_BREAKPOINT_PX,
        rules: vec![
            StyleRule::new(".dashboard-row, .flex-grid").decl("grid-template-columns", "1fr"),
            StyleRule::new(".status-grid").decl("grid-template-columns", "1fr"),
            StyleRule::new("header").decl("flex-direction", "column").decl("align-items", "flex-start"),
            StyleRule::new(".container").decl("padding", "12px"),
        ],
    };

    Stylesheet {
        rules,
        media: vec![mobile],
        keyframes: vec![spin],
    }
}

/// Content Security Policy: inline styles only, no scripts, no network.
pub const CSP: &str = "default-src 'none'; img-src 'self' data:; style-src 'unsafe-inline'; script-src 'none'; connect-src 'none';";
