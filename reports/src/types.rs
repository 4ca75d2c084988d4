//! Dashboard view models and the class-name contract they map onto.
//!
//! These types carry no behavior beyond deciding which CSS class a value
//! receives. They're designed to be:
//!
//! - **Serializable** - dashboard state can be written/read as JSON
//! - **Clone-friendly** - components take owned data
//! - **Default-able** - build partial states with `..Default::default()`
//!
//! Enumerated tags (log category, severity, tone) deserialize leniently: an
//! unrecognized label becomes `None` and the element keeps only its base
//! class, so it renders with default styling instead of failing.
//!
//! # Example
//!
//! ```rust
//! use dashboard_leptos::types::{LogCategory, LogEntry};
//!
//! let entry = LogEntry {
//!     message: "RECOVERY COMPLETE: All files restored".into(),
//!     category: Some(LogCategory::Recovery),
//!     ..Default::default()
//! };
//! assert_eq!(entry.class(), "log-entry recovery");
//! ```

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// Category of an event-log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogCategory {
    /// Suspicious activity was detected
    Detection,
    /// Files were restored from backup
    Recovery,
    /// A process was isolated
    Isolation,
}

impl LogCategory {
    /// Every category, in display order.
    pub const ALL: [LogCategory; 3] = [
        LogCategory::Detection,
        LogCategory::Recovery,
        LogCategory::Isolation,
    ];

    /// Modifier class applied next to `log-entry`.
    pub fn as_class(&self) -> &'static str {
        match self {
            LogCategory::Detection => "detection",
            LogCategory::Recovery => "recovery",
            LogCategory::Isolation => "isolation",
        }
    }

    /// Human-readable name used in counters and legends.
    pub fn display_name(&self) -> &'static str {
        match self {
            LogCategory::Detection => "Detections",
            LogCategory::Recovery => "Recoveries",
            LogCategory::Isolation => "Isolated processes",
        }
    }

    /// Parse a label case-insensitively. Unknown labels yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "detection" => Some(LogCategory::Detection),
            "recovery" => Some(LogCategory::Recovery),
            "isolation" => Some(LogCategory::Isolation),
            _ => None,
        }
    }
}

/// Tone of an operator/activity log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogTone {
    /// Neutral progress message
    Info,
    /// Something worth a second look (e.g. a file was encrypted)
    Warning,
    /// An operation finished cleanly
    Success,
}

impl LogTone {
    /// Modifier class applied next to `log-entry`.
    pub fn as_class(&self) -> &'static str {
        match self {
            LogTone::Info => "log-info",
            LogTone::Warning => "log-warning",
            LogTone::Success => "log-success",
        }
    }

    /// Parse a label case-insensitively. Unknown labels yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "info" => Some(LogTone::Info),
            "warning" => Some(LogTone::Warning),
            "success" => Some(LogTone::Success),
            _ => None,
        }
    }
}

/// Severity of an alert indicator dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Active threat
    High,
    /// Contained, needs attention
    Medium,
    /// Nothing pending
    Low,
}

impl Severity {
    /// Every severity, most severe first.
    pub const ALL: [Severity; 3] = [Severity::High, Severity::Medium, Severity::Low];

    /// Modifier class applied next to `alert-indicator`.
    pub fn as_class(&self) -> &'static str {
        match self {
            Severity::High => "alert-high",
            Severity::Medium => "alert-medium",
            Severity::Low => "alert-low",
        }
    }

    /// Lowercase label (`"high"`, `"medium"`, `"low"`).
    pub fn as_label(&self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }

    /// Parse a label case-insensitively. Unknown labels yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "high" => Some(Severity::High),
            "medium" => Some(Severity::Medium),
            "low" => Some(Severity::Low),
            _ => None,
        }
    }
}

/// Intent of an action button; drives its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonIntent {
    /// Main call to action
    #[default]
    Primary,
    /// Safe, positive action
    Success,
    /// Destructive or attack-like action
    Danger,
    /// Action with side effects worth a warning
    Warning,
    /// Housekeeping
    Neutral,
}

impl ButtonIntent {
    /// Every intent.
    pub const ALL: [ButtonIntent; 5] = [
        ButtonIntent::Primary,
        ButtonIntent::Success,
        ButtonIntent::Danger,
        ButtonIntent::Warning,
        ButtonIntent::Neutral,
    ];

    /// Intent class (`primary-btn`, `danger-btn`, ...).
    pub fn as_class(&self) -> &'static str {
        match self {
            ButtonIntent::Primary => "primary-btn",
            ButtonIntent::Success => "success-btn",
            ButtonIntent::Danger => "danger-btn",
            ButtonIntent::Warning => "warning-btn",
            ButtonIntent::Neutral => "neutral-btn",
        }
    }
}

trait FromLabel: Sized {
    fn parse_label(label: &str) -> Option<Self>;
}

impl FromLabel for LogCategory {
    fn parse_label(label: &str) -> Option<Self> {
        Self::from_label(label)
    }
}

impl FromLabel for LogTone {
    fn parse_label(label: &str) -> Option<Self> {
        Self::from_label(label)
    }
}

impl FromLabel for Severity {
    fn parse_label(label: &str) -> Option<Self> {
        Self::from_label(label)
    }
}

fn lenient_label<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromLabel,
{
    let raw: Option<RawLabel> = Option::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawLabel::Text(label)) => T::parse_label(&label),
        Some(RawLabel::Other(_)) | None => None,
    })
}

/// Any JSON value in a label slot; only strings can name a variant.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawLabel {
    Text(String),
    Other(IgnoredAny),
}

/// One line of the event or activity log.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Pre-formatted timestamp (e.g. `2025-03-14 09:26:53`)
    #[serde(default)]
    pub time: Option<String>,
    /// Log line text
    pub message: String,
    /// Event category; `None` when unknown
    #[serde(default, deserialize_with = "lenient_label")]
    pub category: Option<LogCategory>,
    /// Tone for activity lines; ignored when `category` is set
    #[serde(default, deserialize_with = "lenient_label")]
    pub tone: Option<LogTone>,
}

impl LogEntry {
    /// Full class attribute: `log-entry` plus at most one modifier.
    pub fn class(&self) -> String {
        let modifier = self
            .category
            .map(|c| c.as_class())
            .or_else(|| self.tone.map(|t| t.as_class()));
        match modifier {
            Some(m) => format!("log-entry {m}"),
            None => "log-entry".to_string(),
        }
    }
}

/// A label/value cell in the status grid.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusItem {
    pub label: String,
    pub value: String,
}

/// A colored dot signalling the current threat level.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertIndicator {
    /// Text shown next to the dot
    pub label: String,
    #[serde(default, deserialize_with = "lenient_label")]
    pub severity: Option<Severity>,
}

impl AlertIndicator {
    /// Full class attribute for the dot.
    pub fn class(&self) -> String {
        match self.severity {
            Some(s) => format!("alert-indicator {}", s.as_class()),
            None => "alert-indicator".to_string(),
        }
    }
}

/// Signed difference between two snapshots.
///
/// Counters are compared as whole numbers so large values keep their
/// exact delta; `Ratio` covers rates and averages.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricChange {
    Count(i128),
    Ratio(f64),
}

impl MetricChange {
    /// Exact delta between two counters.
    pub fn between(now: u64, before: u64) -> Self {
        Self::Count(i128::from(now) - i128::from(before))
    }

    fn signum(self) -> i8 {
        match self {
            Self::Count(n) => n.signum() as i8,
            Self::Ratio(r) if r > 0.0 => 1,
            Self::Ratio(r) if r < 0.0 => -1,
            Self::Ratio(_) => 0,
        }
    }
}

/// A headline number with an optional signed delta.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricValue {
    pub label: String,
    pub value: String,
    /// Change since the previous snapshot; zero or absent renders uncolored
    #[serde(default)]
    pub change: Option<MetricChange>,
}

impl MetricValue {
    /// Sign class for the delta, if any.
    pub fn change_class(&self) -> Option<&'static str> {
        match self.change.map(MetricChange::signum) {
            Some(1) => Some("metric-positive"),
            Some(-1) => Some("metric-negative"),
            _ => None,
        }
    }

    /// Delta text with explicit sign (`+3`, `-1.5`, `0`).
    pub fn change_text(&self) -> Option<String> {
        self.change.map(format_change)
    }
}

fn format_change(change: MetricChange) -> String {
    let body = match change {
        MetricChange::Count(n) => n.unsigned_abs().to_string(),
        // f64 Display never switches to exponent notation
        MetricChange::Ratio(r) if r.fract() == 0.0 => format!("{}", r.abs()),
        MetricChange::Ratio(r) => format!("{:.1}", r.abs()),
    };
    match change.signum() {
        1 => format!("+{body}"),
        -1 => format!("-{body}"),
        _ => body,
    }
}

/// Pill showing whether a subsystem is on.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBadge {
    pub label: String,
    pub active: bool,
}

impl StatusBadge {
    /// Full class attribute: `status-badge badge-active|badge-inactive`.
    pub fn class(&self) -> &'static str {
        if self.active {
            "status-badge badge-active"
        } else {
            "status-badge badge-inactive"
        }
    }
}

/// A dashboard control. Rendered inert; `action` is exposed as `data-action`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionButton {
    pub label: String,
    /// Machine name of the action (`start_monitoring`, `cleanup`, ...)
    pub action: String,
    #[serde(default)]
    pub intent: ButtonIntent,
    #[serde(default)]
    pub disabled: bool,
}

impl ActionButton {
    /// Full class attribute, including `disabled` when the button is off.
    pub fn class(&self) -> String {
        if self.disabled {
            format!("btn {} disabled", self.intent.as_class())
        } else {
            format!("btn {}", self.intent.as_class())
        }
    }
}

/// Everything one dashboard page shows.
///
/// This is the main structure passed to [`crate::render_dashboard`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardState {
    pub title: String,
    /// Line under the title (e.g. generation time)
    pub subtitle: Option<String>,
    pub badges: Vec<StatusBadge>,
    pub status_items: Vec<StatusItem>,
    pub metrics: Vec<MetricValue>,
    pub alerts: Vec<AlertIndicator>,
    /// Detection/recovery/isolation events
    pub event_log: Vec<LogEntry>,
    /// Simulation and operator activity
    pub activity_log: Vec<LogEntry>,
    pub buttons: Vec<ActionButton>,
    /// Show the spinner (e.g. while a simulation is running)
    pub loading: bool,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            title: "Ransomware Detection System".to_string(),
            subtitle: None,
            badges: Vec::new(),
            status_items: Vec::new(),
            metrics: Vec::new(),
            alerts: Vec::new(),
            event_log: Vec::new(),
            activity_log: Vec::new(),
            buttons: Vec::new(),
            loading: false,
        }
    }
}
