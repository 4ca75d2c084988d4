//! System status snapshot.
//!
//! A JSON document describing what the detection system is doing right now.
//! Every field is optional; missing fields take their zero value.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::alerts::CategoryCounts;
use crate::error::{Result, SentinelError};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemStatus {
    pub monitoring_active: bool,
    pub monitoring_dir: String,
    pub backup_dir: String,
    pub monitored_files: u64,
    pub backup_files: u64,
    pub detection_events: u64,
    pub recovery_events: u64,
    pub isolated_processes: u64,
    pub auto_recovery: bool,
    pub simulation_running: bool,
    pub telegram_enabled: bool,
}

impl SystemStatus {
    /// Add events observed in the alert log to the counters.
    pub fn absorb(&mut self, counts: CategoryCounts) {
        self.detection_events += counts.detection as u64;
        self.recovery_events += counts.recovery as u64;
        self.isolated_processes += counts.isolation as u64;
    }

    /// True when more attacks were detected than recovered from.
    pub fn has_unresolved_detections(&self) -> bool {
        self.detection_events > self.recovery_events
    }
}

pub fn parse_status(json: &str, path: &Path) -> Result<SystemStatus> {
    serde_json::from_str(json).map_err(|source| SentinelError::Status {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_status(path: &Path) -> Result<SystemStatus> {
    let text = std::fs::read_to_string(path).map_err(|source| SentinelError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_status(&text, path)
}
