//! Alert log ingestion.
//!
//! The detection engine appends alerts to `alerts.log`, one entry per
//! blank-line-separated block:
//!
//! ```text
//! [2025-03-14 09:26:53] ALERT: POTENTIAL RANSOMWARE ACTIVITY DETECTED ...
//!
//! [2025-03-14 09:27:04] ALERT: RECOVERY COMPLETE: All files restored ...
//! ```
//!
//! Entries are classified into log categories by well-known markers.
//! Anything unrecognized stays uncategorized and renders with the base
//! log styling.

use std::path::Path;

use chrono::{NaiveDateTime, TimeDelta};
use dashboard_leptos::types::{LogCategory, LogEntry};
use tracing::{debug, trace};

use crate::error::{Result, SentinelError};

/// Timestamp layout used inside `[...]`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub const DETECTION_MARKER: &str = "POTENTIAL RANSOMWARE ACTIVITY DETECTED";
pub const RECOVERY_MARKER: &str = "RECOVERY COMPLETE";
pub const ISOLATION_MARKER: &str = "Isolated process";

/// How many alerts the dashboard shows by default.
pub const DEFAULT_RECENT_ALERTS: usize = 10;

/// One parsed alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertRecord {
    /// `None` when the entry had no parseable `[timestamp]`
    pub time: Option<NaiveDateTime>,
    pub message: String,
    pub category: Option<LogCategory>,
}

impl AlertRecord {
    pub fn to_log_entry(&self) -> LogEntry {
        LogEntry {
            time: self.time.map(|t| t.format(TIMESTAMP_FORMAT).to_string()),
            message: self.message.clone(),
            category: self.category,
            tone: None,
        }
    }
}

/// Map an alert message to its category. Markers are checked in
/// detection, recovery, isolation order; the first hit wins.
pub fn classify(message: &str) -> Option<LogCategory> {
    if message.contains(DETECTION_MARKER) {
        Some(LogCategory::Detection)
    } else if message.contains(RECOVERY_MARKER) {
        Some(LogCategory::Recovery)
    } else if message.contains(ISOLATION_MARKER) {
        Some(LogCategory::Isolation)
    } else {
        None
    }
}

/// Parse a `YYYY-MM-DD HH:MM:SS` timestamp.
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT)
        .map_err(|_| SentinelError::Timestamp(raw.trim().to_string()))
}

fn parse_entry(raw: &str) -> AlertRecord {
    let stamped = raw.strip_prefix('[').and_then(|rest| {
        let (stamp, body) = rest.split_once(']')?;
        let time = parse_timestamp(stamp).ok()?;
        Some((time, body.trim()))
    });

    let (time, body) = match stamped {
        Some((time, body)) => (Some(time), body),
        None => {
            trace!(entry = raw, "alert without timestamp");
            (None, raw)
        }
    };
    let message = body
        .strip_prefix("ALERT:")
        .map(str::trim)
        .unwrap_or(body)
        .to_string();

    AlertRecord {
        time,
        category: classify(&message),
        message,
    }
}

/// Split an alert log into records, oldest first.
pub fn parse_alerts(text: &str) -> Vec<AlertRecord> {
    let normalized = text.replace("\r\n", "\n");
    normalized
        .split("\n\n")
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(parse_entry)
        .collect()
}

/// Read and parse an alert log. A missing file means no alerts yet.
pub fn load_alerts(path: &Path) -> Result<Vec<AlertRecord>> {
    if !path.exists() {
        debug!(path = %path.display(), "alert log not found, treating as empty");
        return Ok(Vec::new());
    }
    let text = std::fs::read_to_string(path).map_err(|source| SentinelError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_alerts(&text);
    debug!(path = %path.display(), count = records.len(), "parsed alert log");
    Ok(records)
}

/// The last `n` records, still oldest first.
pub fn recent(records: &[AlertRecord], n: usize) -> &[AlertRecord] {
    &records[records.len().saturating_sub(n)..]
}

/// Per-category event counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    pub detection: usize,
    pub recovery: usize,
    pub isolation: usize,
}

impl CategoryCounts {
    pub fn get(&self, category: LogCategory) -> usize {
        match category {
            LogCategory::Detection => self.detection,
            LogCategory::Recovery => self.recovery,
            LogCategory::Isolation => self.isolation,
        }
    }

    fn bump(&mut self, category: LogCategory) {
        match category {
            LogCategory::Detection => self.detection += 1,
            LogCategory::Recovery => self.recovery += 1,
            LogCategory::Isolation => self.isolation += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.detection + self.recovery + self.isolation
    }
}

/// Count every categorized record.
pub fn tally(records: &[AlertRecord]) -> CategoryCounts {
    let mut counts = CategoryCounts::default();
    for category in records.iter().filter_map(|r| r.category) {
        counts.bump(category);
    }
    counts
}

/// Events that happened during one run window starting at `since`.
///
/// Walks newest to oldest and counts each category at most once, with one
/// second of slack before `since`. Undated records are ignored.
pub fn count_since(records: &[AlertRecord], since: NaiveDateTime) -> CategoryCounts {
    let cutoff = since - TimeDelta::seconds(1);
    let mut counts = CategoryCounts::default();

    for record in records.iter().rev() {
        let (Some(time), Some(category)) = (record.time, record.category) else {
            continue;
        };
        if time < cutoff || counts.get(category) > 0 {
            continue;
        }
        counts.bump(category);
        if counts.detection > 0 && counts.recovery > 0 && counts.isolation > 0 {
            break;
        }
    }
    counts
}
