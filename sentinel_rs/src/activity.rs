//! Simulation activity log.
//!
//! The simulator prints one line per file operation plus headers and
//! footers. Only operation lines are shown, each once.

use std::collections::HashSet;
use std::path::Path;

use clap::ValueEnum;
use dashboard_leptos::types::{LogEntry, LogTone};

use crate::error::{Result, SentinelError};

/// Line prefixes that describe a file operation.
pub const OPERATION_PREFIXES: [&str; 4] = ["Created:", "Modified:", "Deleted:", "Encrypted:"];

const HEADER_PREFIXES: [&str; 3] = ["Simulating", "Starting", "simulation completed"];

/// Which kind of simulation produced the activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SimulationMode {
    /// Ordinary file churn
    Normal,
    /// Mass encryption and renames
    Ransomware,
}

impl SimulationMode {
    pub fn as_label(&self) -> &'static str {
        match self {
            SimulationMode::Normal => "normal",
            SimulationMode::Ransomware => "ransomware",
        }
    }
}

/// Keep unique operation lines, in first-seen order.
pub fn parse_activity(text: &str) -> Vec<LogEntry> {
    let mut seen = HashSet::new();
    text.lines()
        .map(str::trim)
        .filter(|line| !HEADER_PREFIXES.iter().any(|p| line.starts_with(p)))
        .filter(|line| OPERATION_PREFIXES.iter().any(|p| line.starts_with(p)))
        .filter(|line| seen.insert(*line))
        .map(|line| LogEntry {
            message: line.to_string(),
            tone: line.starts_with("Encrypted:").then_some(LogTone::Warning),
            ..Default::default()
        })
        .collect()
}

pub fn load_activity(path: &Path) -> Result<Vec<LogEntry>> {
    let text = std::fs::read_to_string(path).map_err(|source| SentinelError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_activity(&text))
}

/// First line of a simulation run.
pub fn simulation_banner(mode: SimulationMode, count: usize) -> LogEntry {
    let (message, tone) = match mode {
        SimulationMode::Normal => (
            format!("Simulating {count} normal file operations"),
            LogTone::Info,
        ),
        SimulationMode::Ransomware => (
            format!("Simulating {count} ransomware file operations"),
            LogTone::Warning,
        ),
    };
    LogEntry {
        message,
        tone: Some(tone),
        ..Default::default()
    }
}

/// Last line of a finished simulation run.
pub fn simulation_footer(mode: SimulationMode) -> LogEntry {
    let (message, tone) = match mode {
        SimulationMode::Normal => ("Normal simulation completed", LogTone::Success),
        SimulationMode::Ransomware => ("Ransomware simulation completed", LogTone::Warning),
    };
    LogEntry {
        message: message.to_string(),
        tone: Some(tone),
        ..Default::default()
    }
}

/// Frame operation lines with the run's banner, and its footer once done.
pub fn frame_simulation(
    mode: SimulationMode,
    count: usize,
    operations: Vec<LogEntry>,
    finished: bool,
) -> Vec<LogEntry> {
    let mut out = Vec::with_capacity(operations.len() + 2);
    out.push(simulation_banner(mode, count));
    out.extend(operations);
    if finished {
        out.push(simulation_footer(mode));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const OUTPUT: &str = "Simulating 3 ransomware file operations\n\
Starting ransomware simulation...\n\
Created: ./test_directory/a.txt\n\
Encrypted: ./test_directory/a.txt -> a.txt.locked\n\
Encrypted: ./test_directory/a.txt -> a.txt.locked\n\
   Deleted: ./test_directory/b.txt   \n\
random noise\n\
Ransomware simulation completed\n";

    #[test]
    fn keeps_unique_operations_only() {
        let entries = parse_activity(OUTPUT);
        let messages: Vec<&str> = entries.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Created: ./test_directory/a.txt",
                "Encrypted: ./test_directory/a.txt -> a.txt.locked",
                "Deleted: ./test_directory/b.txt",
            ]
        );
    }

    #[test]
    fn encrypted_lines_are_warnings() {
        let entries = parse_activity(OUTPUT);
        assert_eq!(entries[0].tone, None);
        assert_eq!(entries[1].tone, Some(LogTone::Warning));
        assert_eq!(entries[1].class(), "log-entry log-warning");
    }

    #[test]
    fn frames_runs_by_mode() {
        let running = frame_simulation(SimulationMode::Normal, 5, vec![], false);
        assert_eq!(running.len(), 1);
        assert_eq!(running[0].message, "Simulating 5 normal file operations");
        assert_eq!(running[0].tone, Some(LogTone::Info));

        let done = frame_simulation(SimulationMode::Ransomware, 2, parse_activity(OUTPUT), true);
        assert_eq!(done.len(), 5);
        assert_eq!(done[0].tone, Some(LogTone::Warning));
        assert_eq!(done[4].message, "Ransomware simulation completed");
    }

    #[test]
    fn normal_footer_is_success() {
        assert_eq!(simulation_footer(SimulationMode::Normal).tone, Some(LogTone::Success));
        assert_eq!(SimulationMode::Ransomware.as_label(), "ransomware");
    }
}
