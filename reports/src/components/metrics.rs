//! Headline metrics with signed deltas

use leptos::prelude::*;
use crate::types::MetricValue;

/// Grid of metric tiles
#[component]
pub fn MetricsPanel(metrics: Vec<MetricValue>) -> impl IntoView {
    view! {
        <div class="flex-grid">
            {metrics.into_iter().map(|metric| view! { <MetricTile metric=metric /> })
                .collect::<Vec<_>>()}
        </div>
    }
}

/// One metric: label, value, and the delta colored by sign
#[component]
pub fn MetricTile(metric: MetricValue) -> impl IntoView {
    let change = metric.change_text().map(|text| {
        let class = match metric.change_class() {
            Some(sign) => format!("metric-change {sign}"),
            None => "metric-change".to_string(),
        };
        view! { <span class=class>{text}</span> }
    });

    view! {
        <div class="metric">
            <span class="metric-label">{metric.label}</span>
            <span class="metric-value">{metric.value}</span>
            {change}
        </div>
    }
}
