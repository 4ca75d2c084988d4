//! # sentinel
//!
//! Turns the ransomware-detection system's outputs into a static dashboard.
//!
//! Inputs are a status snapshot (JSON), the alert log the detection engine
//! appends to, and captured simulator output. They are parsed into view
//! models and rendered by [`dashboard_leptos`].
//!
//! ```rust
//! use sentinel::alerts::parse_alerts;
//! use sentinel::state::{build_state, StateInputs};
//! use sentinel::status::SystemStatus;
//!
//! let alerts = parse_alerts("[2025-03-14 09:26:53] ALERT: Isolated process 4242");
//! let status = SystemStatus::default();
//! let state = build_state(StateInputs {
//!     status: &status,
//!     previous: None,
//!     alerts: &alerts,
//!     activity: Vec::new(),
//!     title: None,
//!     generated_at: None,
//!     recent_limit: 10,
//! });
//! assert_eq!(state.event_log[0].class(), "log-entry isolation");
//! ```

pub mod activity;
pub mod alerts;
pub mod args;
pub mod commands;
pub mod config;
pub mod error;
pub mod state;
pub mod status;
pub mod watch;

pub use error::{Result, SentinelError};
