//! Leptos UI components for rendering the dashboard.
//!
//! Each component is a Leptos `#[component]` function; they compose into
//! [`DashboardDocument`] but can be rendered on their own.
//!
//! # Component Hierarchy
//!
//! ```text
//! DashboardDocument
//! ├── header
//! │   └── BadgeRow
//! ├── dashboard-row
//! │   ├── StatusGrid
//! │   └── AlertPanel
//! ├── MetricsPanel
//! │   └── MetricTile
//! ├── ControlPanel
//! │   └── Loader (while busy)
//! └── dashboard-row
//!     ├── LogPanel: Recent Alerts
//!     └── LogPanel: Simulation Activity
//!         └── LogLine
//! ```

mod alerts;
mod controls;
mod document;
mod icons;
mod log_panel;
mod metrics;
mod status;

pub use alerts::AlertPanel;
pub use controls::{ControlPanel, Loader};
pub use document::DashboardDocument;
pub use icons::*;
pub use log_panel::{LogLine, LogPanel};
pub use metrics::{MetricTile, MetricsPanel};
pub use status::{BadgeRow, StatusGrid};
