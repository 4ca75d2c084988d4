//! Status grid and status badges

use leptos::prelude::*;
use crate::types::{StatusBadge, StatusItem};

/// Responsive grid of label/value cells
#[component]
pub fn StatusGrid(items: Vec<StatusItem>) -> impl IntoView {
    view! {
        <div class="status-grid">
            {items.into_iter().map(|item| {
                view! {
                    <div class="status-item">
                        <span class="status-label">{item.label}</span>
                        <span class="status-value">{item.value}</span>
                    </div>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}

/// Row of on/off pills
#[component]
pub fn BadgeRow(badges: Vec<StatusBadge>) -> impl IntoView {
    view! {
        <div class="badge-row">
            {badges.into_iter().map(|badge| {
                let state = if badge.active { "on" } else { "off" };
                view! {
                    <span class=badge.class() title=format!("{}: {}", badge.label, state)>
                        {badge.label.clone()}
                    </span>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}
