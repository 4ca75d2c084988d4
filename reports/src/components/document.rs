//! Root document component - the complete HTML page

use leptos::prelude::*;
use crate::styles::CSP;
use crate::types::DashboardState;
use super::{
    AlertPanel, BadgeRow, ControlPanel, Icon, LogPanel, MetricsPanel, StatusGrid,
    ICON_PULSE, ICON_SHIELD_WARNING, ICON_SQUARES_FOUR, ICON_WARNING_CIRCLE,
};

/// The complete HTML document for the dashboard
#[component]
pub fn DashboardDocument(
    state: DashboardState,
    /// Full stylesheet (custom properties + rules)
    css: String,
) -> impl IntoView {
    let DashboardState {
        title,
        subtitle,
        badges,
        status_items,
        metrics,
        alerts,
        event_log,
        activity_log,
        buttons,
        loading,
    } = state;

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1.0" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <title>{title.clone()}</title>
                <style inner_html=css></style>
            </head>
            <body>
                <div class="container">
                    <header>
                        <div>
                            <h1>
                                <Icon path=ICON_SHIELD_WARNING size="28" />
                                " "
                                {title}
                            </h1>
                            {subtitle.map(|s| view! { <p class="subtitle">{s}</p> })}
                        </div>
                        <BadgeRow badges=badges />
                    </header>

                    <div class="dashboard-row">
                        <section class="card">
                            <h2><Icon path=ICON_SQUARES_FOUR size="18" />" System Status"</h2>
                            <StatusGrid items=status_items />
                        </section>
                        <section class="card">
                            <h2><Icon path=ICON_WARNING_CIRCLE size="18" />" Threat Level"</h2>
                            <AlertPanel alerts=alerts />
                        </section>
                    </div>

                    <section class="card">
                        <h2><Icon path=ICON_PULSE size="18" />" Metrics"</h2>
                        <MetricsPanel metrics=metrics />
                    </section>

                    <section class="card">
                        <h2>"Controls"</h2>
                        <ControlPanel buttons=buttons loading=loading />
                    </section>

                    <div class="dashboard-row">
                        <section class="card">
                            <LogPanel title="Recent Alerts" entries=event_log empty_text="No alerts recorded" />
                        </section>
                        <section class="card">
                            <LogPanel title="Simulation Activity" entries=activity_log empty_text="No activity yet" />
                        </section>
                    </div>
                </div>
            </body>
        </html>
    }
}
