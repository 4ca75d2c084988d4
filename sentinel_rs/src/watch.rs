//! Watch mode: re-render the dashboard when an input file changes.
//!
//! Input files are often replaced rather than edited in place, so the
//! parent directories are watched and events are filtered by file name.
//! A parent that does not exist yet is covered by watching its nearest
//! existing ancestor recursively. Changes are debounced (500ms default);
//! Ctrl+C exits.

use std::collections::{BTreeMap, BTreeSet};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{RecvTimeoutError, channel};
use std::time::Duration;

use notify::{RecommendedWatcher, RecursiveMode};
use notify_debouncer_full::{DebounceEventResult, Debouncer, RecommendedCache, new_debouncer};
use tracing::{debug, info, warn};

use crate::error::Result;

/// How often the event loop checks whether it should stop.
const STOP_POLL: Duration = Duration::from_millis(100);

/// Watch configuration
pub struct WatchConfig {
    /// Files whose changes trigger a re-render
    pub files: Vec<PathBuf>,
    /// Debounce duration (default: 500ms)
    pub debounce_duration: Duration,
}

impl WatchConfig {
    pub fn new(files: Vec<PathBuf>) -> Self {
        Self {
            files,
            debounce_duration: Duration::from_millis(500),
        }
    }

    /// Directory -> file names inside it we care about.
    fn targets(&self) -> BTreeMap<PathBuf, BTreeSet<OsString>> {
        let mut targets: BTreeMap<PathBuf, BTreeSet<OsString>> = BTreeMap::new();
        for file in &self.files {
            let Some(name) = file.file_name() else {
                continue;
            };
            let dir = match file.parent() {
                Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
                _ => PathBuf::from("."),
            };
            targets.entry(dir).or_default().insert(name.to_os_string());
        }
        targets
    }

    /// Directories to register, `true` meaning recursive.
    fn watch_points(&self) -> BTreeMap<PathBuf, bool> {
        let mut points: BTreeMap<PathBuf, bool> = BTreeMap::new();
        for dir in self.targets().keys() {
            match watch_point(dir) {
                Some((path, recursive)) => {
                    let entry = points.entry(path).or_insert(recursive);
                    *entry |= recursive;
                }
                None => warn!(dir = %dir.display(), "no existing ancestor to watch"),
            }
        }
        points
    }
}

/// The directory itself when it exists, otherwise its nearest existing
/// ancestor (recursive, so the directory is seen once created).
fn watch_point(dir: &Path) -> Option<(PathBuf, bool)> {
    if dir.is_dir() {
        return Some((dir.to_path_buf(), false));
    }
    let ancestor = dir
        .ancestors()
        .skip(1)
        .map(|p| if p.as_os_str().is_empty() { Path::new(".") } else { p })
        .find(|p| p.is_dir())?;
    debug!(
        missing = %dir.display(),
        ancestor = %ancestor.display(),
        "input directory missing, watching ancestor"
    );
    Some((ancestor.to_path_buf(), true))
}

fn is_target(path: &Path, names: &BTreeSet<OsString>) -> bool {
    path.file_name().is_some_and(|n| names.contains(n))
}

/// Render once, then again after every debounced change to a watched file.
pub fn watch_and_render<F>(config: WatchConfig, render: F) -> Result<()>
where
    F: FnMut() -> anyhow::Result<()>,
{
    watch_until(config, render, || false)
}

/// [`watch_and_render`] that returns once `should_stop` reports true.
pub fn watch_until<F, S>(config: WatchConfig, mut render: F, should_stop: S) -> Result<()>
where
    F: FnMut() -> anyhow::Result<()>,
    S: Fn() -> bool,
{
    let (tx, rx) = channel();

    let mut debouncer: Debouncer<RecommendedWatcher, RecommendedCache> = new_debouncer(
        config.debounce_duration,
        None,
        move |result: DebounceEventResult| {
            if let Err(e) = tx.send(result) {
                warn!("watch channel closed: {e}");
            }
        },
    )?;

    let names: BTreeSet<OsString> = config.targets().into_values().flatten().collect();
    for (dir, recursive) in config.watch_points() {
        let mode = if recursive {
            RecursiveMode::Recursive
        } else {
            RecursiveMode::NonRecursive
        };
        debouncer.watch(&dir, mode)?;
    }

    if let Err(e) = render() {
        warn!("initial render failed: {e:#}");
    }
    info!(files = config.files.len(), "watching inputs, press Ctrl+C to exit");

    while !should_stop() {
        match rx.recv_timeout(STOP_POLL) {
            Ok(Ok(events)) => {
                let changed: BTreeSet<&Path> = events
                    .iter()
                    .flat_map(|event| event.paths.iter())
                    .map(PathBuf::as_path)
                    .filter(|p| is_target(p, &names))
                    .collect();
                if changed.is_empty() {
                    continue;
                }

                info!(changed = changed.len(), "inputs changed, re-rendering");
                if let Err(e) = render() {
                    warn!("re-render failed: {e:#}");
                }
            }
            Ok(Err(errors)) => {
                for error in errors {
                    warn!("watch error: {error}");
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                warn!("watch stopped: event channel closed");
                break;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::thread;
    use std::time::Instant;

    #[test]
    fn groups_files_by_directory() {
        let config = WatchConfig::new(vec![
            PathBuf::from("logs/alerts.log"),
            PathBuf::from("logs/activity.txt"),
            PathBuf::from("status.json"),
        ]);
        let targets = config.targets();
        assert_eq!(targets.len(), 2);
        assert_eq!(targets[&PathBuf::from("logs")].len(), 2);
        assert!(targets[&PathBuf::from(".")].contains(&OsString::from("status.json")));
    }

    #[test]
    fn matches_by_file_name() {
        let names: BTreeSet<OsString> = [OsString::from("alerts.log")].into_iter().collect();
        assert!(is_target(Path::new("/abs/logs/alerts.log"), &names));
        assert!(!is_target(Path::new("/abs/logs/notification.log"), &names));
    }

    #[test]
    fn missing_directory_falls_back_to_ancestor() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let existing = dir.path().join("status.json");
        let nested = dir.path().join("logs/today/alerts.log");
        let points = WatchConfig::new(vec![existing, nested]).watch_points();

        assert_eq!(points.len(), 1);
        // the ancestor is recursive so `logs/today` is seen once created
        assert_eq!(points.get(dir.path()), Some(&true));
    }

    /// Run the watch loop on a background thread until told to stop.
    struct Harness {
        renders: Arc<AtomicUsize>,
        stop: Arc<AtomicBool>,
        handle: thread::JoinHandle<Result<()>>,
    }

    impl Harness {
        fn start(files: Vec<PathBuf>) -> Self {
            let renders = Arc::new(AtomicUsize::new(0));
            let stop = Arc::new(AtomicBool::new(false));
            let mut config = WatchConfig::new(files);
            config.debounce_duration = Duration::from_millis(50);

            let counter = Arc::clone(&renders);
            let flag = Arc::clone(&stop);
            let handle = thread::spawn(move || {
                watch_until(
                    config,
                    move || {
                        counter.fetch_add(1, Ordering::SeqCst);
                        Ok(())
                    },
                    move || flag.load(Ordering::SeqCst),
                )
            });
            Self { renders, stop, handle }
        }

        fn renders(&self) -> usize {
            self.renders.load(Ordering::SeqCst)
        }

        /// Keep poking until the render count passes `above`.
        fn wait_for_render(&self, above: usize, mut poke: impl FnMut()) -> bool {
            let deadline = Instant::now() + Duration::from_secs(10);
            while Instant::now() < deadline {
                if self.renders() > above {
                    return true;
                }
                poke();
                thread::sleep(Duration::from_millis(200));
            }
            false
        }

        fn finish(self) -> Result<()> {
            self.stop.store(true, Ordering::SeqCst);
            self.handle.join().expect("watch thread panicked")
        }
    }

    #[test]
    fn write_to_watched_file_triggers_render() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let alerts = dir.path().join("alerts.log");
        std::fs::write(&alerts, "").expect("seed file");

        let harness = Harness::start(vec![alerts.clone()]);
        assert!(harness.wait_for_render(0, || {}), "no initial render");

        let mut n = 0;
        let rerendered = harness.wait_for_render(1, || {
            n += 1;
            std::fs::write(&alerts, format!("[2025-03-14 09:26:53] ALERT: Isolated process {n}\n\n"))
                .expect("append alert");
        });
        assert!(rerendered, "write did not trigger a re-render");
        harness.finish().expect("watch loop");
    }

    #[test]
    fn unrelated_file_does_not_trigger_render() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let alerts = dir.path().join("alerts.log");
        let harness = Harness::start(vec![alerts]);
        assert!(harness.wait_for_render(0, || {}), "no initial render");

        std::fs::write(dir.path().join("notification.log"), "hi").expect("write other");
        thread::sleep(Duration::from_millis(500));
        assert_eq!(harness.renders(), 1);
        harness.finish().expect("watch loop");
    }

    #[test]
    fn watches_inputs_whose_directory_appears_later() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let logs = dir.path().join("logs");
        let alerts = logs.join("alerts.log");

        let harness = Harness::start(vec![alerts.clone()]);
        assert!(harness.wait_for_render(0, || {}), "no initial render");

        let rerendered = harness.wait_for_render(1, || {
            std::fs::create_dir_all(&logs).expect("create logs dir");
            std::fs::write(&alerts, "[2025-03-14 09:26:53] ALERT: RECOVERY COMPLETE\n\n")
                .expect("write alert");
        });
        assert!(rerendered, "file in new directory did not trigger a re-render");
        harness.finish().expect("watch loop");
    }
}
