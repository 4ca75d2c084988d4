//! Basic dashboard generation example.
//!
//! Run with: `cargo run --example basic_dashboard`

use dashboard_leptos::render_dashboard;
use dashboard_leptos::theme::Theme;
use dashboard_leptos::types::{
    ActionButton, ButtonIntent, DashboardState, LogCategory, LogEntry, StatusBadge,
};

fn main() {
    let state = DashboardState {
        badges: vec![StatusBadge {
            label: "Monitoring".into(),
            active: true,
        }],
        event_log: vec![
            LogEntry {
                time: Some("2025-03-14 09:26:53".into()),
                message: "POTENTIAL RANSOMWARE ACTIVITY DETECTED".into(),
                category: Some(LogCategory::Detection),
                ..Default::default()
            },
            LogEntry {
                time: Some("2025-03-14 09:27:04".into()),
                message: "RECOVERY COMPLETE: All files restored to their original state.".into(),
                category: Some(LogCategory::Recovery),
                ..Default::default()
            },
        ],
        buttons: vec![ActionButton {
            label: "Stop Monitoring".into(),
            action: "stop_monitoring".into(),
            intent: ButtonIntent::Danger,
            disabled: false,
        }],
        ..Default::default()
    };

    let html = render_dashboard(&state, &Theme::default());

    let output_path = "dashboard.html";
    std::fs::write(output_path, &html).expect("Failed to write dashboard");

    println!("Dashboard written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
