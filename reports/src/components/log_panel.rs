//! Event/activity log component
//!
//! Each line gets `log-entry` plus at most one modifier class; lines with an
//! unknown category fall back to the base styling.

use leptos::prelude::*;
use crate::types::LogEntry;
use super::{Icon, ICON_TERMINAL};

/// Titled, scrollable log
#[component]
pub fn LogPanel(
    title: &'static str,
    entries: Vec<LogEntry>,
    /// Shown when there are no entries
    #[prop(default = "Nothing logged yet")]
    empty_text: &'static str,
) -> impl IntoView {
    view! {
        <h2>
            <Icon path=ICON_TERMINAL size="18" />
            " "
            {title}
        </h2>
        <div class="log-container">
            {if entries.is_empty() {
                view! { <div class="log-empty">{empty_text}</div> }.into_any()
            } else {
                entries.into_iter().map(|entry| view! { <LogLine entry=entry /> })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
        </div>
    }
}

/// A single log line
#[component]
pub fn LogLine(entry: LogEntry) -> impl IntoView {
    let class = entry.class();
    view! {
        <div class=class>
            {entry.time.map(|t| view! { <span class="log-time">{format!("[{t}]")}</span> })}
            {entry.message}
        </div>
    }
}
