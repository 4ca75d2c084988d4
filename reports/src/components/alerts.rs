//! Threat-level indicator list

use leptos::prelude::*;
use crate::types::AlertIndicator;

/// List of severity dots with their labels
#[component]
#[allow(clippy::unit_arg, clippy::unused_unit)]
pub fn AlertPanel(alerts: Vec<AlertIndicator>) -> impl IntoView {
    if alerts.is_empty() {
        return view! { <p class="log-empty">"No indicators"</p> }.into_any();
    }

    view! {
        <ul class="alert-list">
            {alerts.into_iter().map(|alert| {
                let severity = alert.severity.map(|s| s.as_label()).unwrap_or("unknown");
                view! {
                    <li>
                        <span class=alert.class() title=severity></span>
                        <span>{alert.label.clone()}</span>
                    </li>
                }
            }).collect::<Vec<_>>()}
        </ul>
    }.into_any()
}
