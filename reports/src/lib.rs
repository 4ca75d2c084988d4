//! # dashboard-leptos
//!
//! Leptos SSR renderer for the ransomware-detection dashboard.
//!
//! The crate owns the presentation contract between dashboard state and its
//! stylesheet: which class every view model gets, which design tokens the
//! rules reference, and where the layout collapses. Output is a single static
//! HTML page with the stylesheet inlined and no scripts.
//!
//! ## Quick Start
//!
//! ```rust
//! use dashboard_leptos::{render_dashboard, theme::Theme, types::*};
//!
//! let state = DashboardState {
//!     event_log: vec![LogEntry {
//!         message: "POTENTIAL RANSOMWARE ACTIVITY DETECTED".into(),
//!         category: Some(LogCategory::Detection),
//!         ..Default::default()
//!     }],
//!     ..Default::default()
//! };
//!
//! let html = render_dashboard(&state, &Theme::default());
//! assert!(html.contains("log-entry detection"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - View models and their class names
//! - [`theme`] - Design tokens (CSS custom properties)
//! - [`styles`] - Typed stylesheet, token resolution
//! - [`layout`] - Responsive breakpoint and grid columns
//! - [`components`] - Leptos UI components
//!
//! No reactive runtime or hydration is needed - pure static HTML generation.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod layout;
pub mod styles;
pub mod theme;
pub mod types;

use components::DashboardDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use theme::Theme;
use types::DashboardState;

/// Render a complete HTML dashboard page.
///
/// Returns a full document including `<!DOCTYPE html>`.
///
/// ```rust
/// use dashboard_leptos::{render_dashboard, theme::Theme, types::DashboardState};
///
/// let html = render_dashboard(&DashboardState::default(), &Theme::dark());
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// ```
pub fn render_dashboard(state: &DashboardState, theme: &Theme) -> String {
    tracing::debug!(
        events = state.event_log.len(),
        activity = state.activity_log.len(),
        metrics = state.metrics.len(),
        "rendering dashboard"
    );

    let css = styles::render_css(theme);
    let doc = view! {
        <DashboardDocument state=state.clone() css=css />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::*;

    fn sample_state() -> DashboardState {
        DashboardState {
            title: "Test Dashboard".into(),
            subtitle: Some("Generated 2025-03-14 09:26:53".into()),
            badges: vec![
                StatusBadge { label: "Monitoring".into(), active: true },
                StatusBadge { label: "Telegram".into(), active: false },
            ],
            status_items: vec![StatusItem {
                label: "Monitored directory".into(),
                value: "./test_directory".into(),
            }],
            metrics: vec![MetricValue {
                label: "Detections".into(),
                value: "3".into(),
                change: Some(MetricChange::Count(2)),
            }],
            alerts: vec![AlertIndicator {
                label: "Ransomware activity detected".into(),
                severity: Some(Severity::High),
            }],
            event_log: vec![
                LogEntry {
                    time: Some("2025-03-14 09:26:53".into()),
                    message: "POTENTIAL RANSOMWARE ACTIVITY DETECTED".into(),
                    category: Some(LogCategory::Detection),
                    tone: None,
                },
                LogEntry {
                    message: "Isolated process 4242".into(),
                    category: Some(LogCategory::Isolation),
                    ..Default::default()
                },
                LogEntry {
                    message: "TEST ALERT".into(),
                    ..Default::default()
                },
            ],
            activity_log: vec![],
            buttons: vec![ActionButton {
                label: "Stop Monitoring".into(),
                action: "stop_monitoring".into(),
                intent: ButtonIntent::Danger,
                disabled: true,
            }],
            loading: true,
        }
    }

    #[test]
    fn renders_empty_dashboard() {
        let html = render_dashboard(&DashboardState::default(), &Theme::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("Ransomware Detection System"));
        assert!(html.contains("No alerts recorded"));
        assert!(html.contains("No activity yet"));
        assert!(!html.contains("class=\"loader\""));
    }

    #[test]
    fn renders_category_and_state_classes() {
        let html = render_dashboard(&sample_state(), &Theme::default());

        assert!(html.contains("Test Dashboard"));
        assert!(html.contains("class=\"log-entry detection\""));
        assert!(html.contains("class=\"log-entry isolation\""));
        assert!(html.contains("class=\"log-entry\""));
        assert!(html.contains("[2025-03-14 09:26:53]"));
        assert!(html.contains("status-badge badge-active"));
        assert!(html.contains("status-badge badge-inactive"));
        assert!(html.contains("alert-indicator alert-high"));
        assert!(html.contains("metric-change metric-positive"));
        assert!(html.contains("+2"));
        assert!(html.contains("btn danger-btn disabled"));
        assert!(html.contains("data-action=\"stop_monitoring\""));
        assert!(html.contains("class=\"loader\""));
    }

    #[test]
    fn inlines_theme_tokens_and_rules() {
        let theme = Theme::dark();
        let html = render_dashboard(&DashboardState::default(), &theme);

        assert!(html.contains("--primary-color: #4aa3df;"));
        assert!(html.contains(".log-entry.recovery"));
        assert!(html.contains("@media (max-width: 768px)"));
        assert!(html.contains("Content-Security-Policy"));
    }

    #[test]
    fn escapes_log_text() {
        let state = DashboardState {
            event_log: vec![LogEntry {
                message: "<script>alert(1)</script>".into(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let html = render_dashboard(&state, &Theme::default());
        assert!(!html.contains("<script>alert(1)</script>"));
    }
}
