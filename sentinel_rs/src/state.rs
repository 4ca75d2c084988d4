//! Assemble a [`DashboardState`] from status, alerts and activity.

use chrono::NaiveDateTime;
use dashboard_leptos::types::{
    ActionButton, AlertIndicator, ButtonIntent, DashboardState, LogCategory, LogEntry,
    MetricChange, MetricValue, Severity, StatusBadge, StatusItem,
};

use crate::alerts::{self, AlertRecord, TIMESTAMP_FORMAT};
use crate::status::SystemStatus;

/// Everything the dashboard is built from.
#[derive(Debug, Clone)]
pub struct StateInputs<'a> {
    pub status: &'a SystemStatus,
    /// Earlier snapshot; metric deltas are computed against it
    pub previous: Option<&'a SystemStatus>,
    pub alerts: &'a [AlertRecord],
    pub activity: Vec<LogEntry>,
    pub title: Option<String>,
    pub generated_at: Option<NaiveDateTime>,
    pub recent_limit: usize,
}

pub fn build_state(inputs: StateInputs<'_>) -> DashboardState {
    let status = inputs.status;
    let recent = alerts::recent(inputs.alerts, inputs.recent_limit);

    let mut state = DashboardState {
        subtitle: inputs
            .generated_at
            .map(|t| format!("Generated {}", t.format(TIMESTAMP_FORMAT))),
        badges: badges(status),
        status_items: status_items(status),
        metrics: metrics(status, inputs.previous),
        alerts: indicators(status, recent),
        event_log: recent.iter().map(AlertRecord::to_log_entry).collect(),
        activity_log: inputs.activity,
        buttons: buttons(status),
        loading: status.simulation_running,
        ..Default::default()
    };
    if let Some(title) = inputs.title {
        state.title = title;
    }
    state
}

fn badges(status: &SystemStatus) -> Vec<StatusBadge> {
    [
        ("Monitoring", status.monitoring_active),
        ("Auto-recovery", status.auto_recovery),
        ("Telegram alerts", status.telegram_enabled),
        ("Simulation", status.simulation_running),
    ]
    .into_iter()
    .map(|(label, active)| StatusBadge {
        label: label.to_string(),
        active,
    })
    .collect()
}

fn or_dash(value: &str) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

fn status_items(status: &SystemStatus) -> Vec<StatusItem> {
    vec![
        StatusItem {
            label: "Monitored directory".into(),
            value: or_dash(&status.monitoring_dir),
        },
        StatusItem {
            label: "Backup directory".into(),
            value: or_dash(&status.backup_dir),
        },
        StatusItem {
            label: "Monitored files".into(),
            value: status.monitored_files.to_string(),
        },
        StatusItem {
            label: "Backup files".into(),
            value: status.backup_files.to_string(),
        },
    ]
}

fn metrics(status: &SystemStatus, previous: Option<&SystemStatus>) -> Vec<MetricValue> {
    let metric = |label: &str, pick: fn(&SystemStatus) -> u64| MetricValue {
        label: label.to_string(),
        value: pick(status).to_string(),
        change: previous.map(|p| MetricChange::between(pick(status), pick(p))),
    };
    vec![
        metric(LogCategory::Detection.display_name(), |s| s.detection_events),
        metric(LogCategory::Recovery.display_name(), |s| s.recovery_events),
        metric(LogCategory::Isolation.display_name(), |s| s.isolated_processes),
        metric("Monitored files", |s| s.monitored_files),
    ]
}

/// Threat level, then monitoring health.
///
/// High: a detection without a matching recovery, or the newest
/// categorized alert is a detection. Medium: activity seen but contained.
/// Low: nothing seen.
fn indicators(status: &SystemStatus, recent: &[AlertRecord]) -> Vec<AlertIndicator> {
    let last_category = recent.iter().rev().find_map(|r| r.category);
    let (severity, label) = if status.has_unresolved_detections()
        || last_category == Some(LogCategory::Detection)
    {
        (Severity::High, "Unresolved ransomware activity")
    } else if status.detection_events > 0
        || status.isolated_processes > 0
        || last_category.is_some()
    {
        (Severity::Medium, "Activity detected and contained")
    } else {
        (Severity::Low, "No threats detected")
    };

    let mut out = vec![AlertIndicator {
        label: label.to_string(),
        severity: Some(severity),
    }];
    if !status.monitoring_active {
        out.push(AlertIndicator {
            label: "Monitoring is offline".to_string(),
            severity: Some(Severity::Medium),
        });
    }
    out
}

fn buttons(status: &SystemStatus) -> Vec<ActionButton> {
    let busy = status.simulation_running;
    let button = |label: &str, action: &str, intent, disabled| ActionButton {
        label: label.to_string(),
        action: action.to_string(),
        intent,
        disabled,
    };
    vec![
        button("Start Monitoring", "start_monitoring", ButtonIntent::Success, status.monitoring_active),
        button("Stop Monitoring", "stop_monitoring", ButtonIntent::Danger, !status.monitoring_active),
        button("Run Normal Simulation", "run_normal_simulation", ButtonIntent::Primary, busy),
        button("Run Ransomware Simulation", "run_ransomware_simulation", ButtonIntent::Warning, busy),
        button("Cleanup", "cleanup", ButtonIntent::Neutral, busy),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::parse_alerts;

    fn inputs<'a>(status: &'a SystemStatus, alerts: &'a [AlertRecord]) -> StateInputs<'a> {
        StateInputs {
            status,
            previous: None,
            alerts,
            activity: Vec::new(),
            title: None,
            generated_at: None,
            recent_limit: 10,
        }
    }

    #[test]
    fn idle_system_is_low_and_offline() {
        let status = SystemStatus::default();
        let state = build_state(inputs(&status, &[]));

        assert_eq!(state.title, "Ransomware Detection System");
        assert_eq!(state.alerts[0].severity, Some(Severity::Low));
        assert_eq!(state.alerts[1].label, "Monitoring is offline");
        assert_eq!(state.status_items[0].value, "-");
        assert!(!state.loading);
    }

    #[test]
    fn unresolved_detection_is_high() {
        let status = SystemStatus {
            monitoring_active: true,
            detection_events: 2,
            recovery_events: 1,
            ..Default::default()
        };
        let state = build_state(inputs(&status, &[]));
        assert_eq!(state.alerts.len(), 1);
        assert_eq!(state.alerts[0].severity, Some(Severity::High));
    }

    #[test]
    fn recovered_activity_is_medium() {
        let status = SystemStatus {
            monitoring_active: true,
            detection_events: 1,
            recovery_events: 1,
            ..Default::default()
        };
        let alerts = parse_alerts(
            "[2025-03-14 09:26:53] ALERT: POTENTIAL RANSOMWARE ACTIVITY DETECTED\n\n\
[2025-03-14 09:27:04] ALERT: RECOVERY COMPLETE: restored",
        );
        let state = build_state(inputs(&status, &alerts));
        assert_eq!(state.alerts[0].severity, Some(Severity::Medium));
        assert_eq!(state.event_log.len(), 2);
        assert_eq!(state.event_log[1].category, Some(LogCategory::Recovery));
    }

    #[test]
    fn event_log_is_limited_to_recent() {
        let status = SystemStatus::default();
        let alerts = parse_alerts("one\n\ntwo\n\nthree");
        let mut i = inputs(&status, &alerts);
        i.recent_limit = 2;
        let state = build_state(i);
        let messages: Vec<_> = state.event_log.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["two", "three"]);
    }

    #[test]
    fn buttons_follow_run_state() {
        let status = SystemStatus {
            monitoring_active: true,
            simulation_running: true,
            ..Default::default()
        };
        let state = build_state(inputs(&status, &[]));
        let disabled: Vec<(&str, bool)> = state
            .buttons
            .iter()
            .map(|b| (b.action.as_str(), b.disabled))
            .collect();
        assert_eq!(
            disabled,
            vec![
                ("start_monitoring", true),
                ("stop_monitoring", false),
                ("run_normal_simulation", true),
                ("run_ransomware_simulation", true),
                ("cleanup", true),
            ]
        );
        assert!(state.loading);
    }

    #[test]
    fn metrics_carry_deltas_against_previous() {
        let previous = SystemStatus {
            detection_events: 3,
            recovery_events: 1,
            ..Default::default()
        };
        let status = SystemStatus {
            detection_events: 4,
            recovery_events: 1,
            monitored_files: 10,
            ..Default::default()
        };
        let mut i = inputs(&status, &[]);
        i.previous = Some(&previous);
        let state = build_state(i);

        assert_eq!(state.metrics[0].label, "Detections");
        assert_eq!(state.metrics[0].change, Some(MetricChange::Count(1)));
        assert_eq!(state.metrics[1].change_class(), None);
        assert_eq!(state.metrics[3].change, Some(MetricChange::Count(10)));
    }

    #[test]
    fn title_and_subtitle_come_from_inputs() {
        let status = SystemStatus::default();
        let mut i = inputs(&status, &[]);
        i.title = Some("Lab Watch".into());
        i.generated_at = crate::alerts::parse_timestamp("2025-03-14 10:00:00").ok();
        let state = build_state(i);
        assert_eq!(state.title, "Lab Watch");
        assert_eq!(state.subtitle.as_deref(), Some("Generated 2025-03-14 10:00:00"));
    }
}
