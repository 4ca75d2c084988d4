//! Command dispatch: load inputs, build state, render, write.

use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dashboard_leptos::render_dashboard;
use dashboard_leptos::styles::render_css;
use tracing::{debug, info};

use crate::activity::{frame_simulation, load_activity};
use crate::alerts::{classify, count_since, load_alerts, parse_timestamp};
use crate::args::{Cli, Command, CssArgs, RenderArgs, ThemeArgs, TokenFormat, TokensArgs};
use crate::config::SentinelConfig;
use crate::error::SentinelError;
use crate::state::{StateInputs, build_state};
use crate::status::{SystemStatus, load_status};
use crate::watch::{WatchConfig, watch_and_render};

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Render(args) => run_render(&args),
        Command::Css(args) => run_css(&args),
        Command::Tokens(args) => run_tokens(&args),
        Command::Classify { message } => {
            println!("{}", classify_label(&message));
            Ok(())
        }
    }
}

/// Category label for a message, or `uncategorized`.
pub fn classify_label(message: &str) -> &'static str {
    classify(message).map_or("uncategorized", |c| c.as_class())
}

fn load_config(args: &ThemeArgs) -> Result<SentinelConfig> {
    match &args.config {
        Some(path) => SentinelConfig::try_load(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(SentinelConfig::load(Path::new("."))),
    }
}

/// Input paths after merging flags over config defaults.
#[derive(Debug, Default, Clone)]
struct InputPaths {
    status: Option<PathBuf>,
    previous: Option<PathBuf>,
    alerts: Option<PathBuf>,
    activity: Option<PathBuf>,
}

impl InputPaths {
    fn resolve(args: &RenderArgs, config: &SentinelConfig) -> Self {
        let pick = |flag: &Option<PathBuf>, cfg: &Option<PathBuf>| flag.clone().or_else(|| cfg.clone());
        Self {
            status: pick(&args.status, &config.inputs.status),
            previous: pick(&args.previous, &config.inputs.previous),
            alerts: pick(&args.alerts, &config.inputs.alerts),
            activity: pick(&args.activity, &config.inputs.activity),
        }
    }

    fn all(&self) -> Vec<PathBuf> {
        [&self.status, &self.previous, &self.alerts, &self.activity]
            .into_iter()
            .flatten()
            .cloned()
            .collect()
    }
}

/// Build the full HTML page for one render.
pub fn render_page(args: &RenderArgs, config: &SentinelConfig) -> Result<String> {
    let paths = InputPaths::resolve(args, config);
    debug!(?paths, "resolved inputs");

    let mut status = match &paths.status {
        Some(path) => load_status(path)?,
        None => SystemStatus::default(),
    };
    let previous = paths.previous.as_deref().map(load_status).transpose()?;
    let alerts = match &paths.alerts {
        Some(path) => load_alerts(path)?,
        None => Vec::new(),
    };

    if let Some(since) = &args.since {
        let since = parse_timestamp(since)?;
        let counts = count_since(&alerts, since);
        debug!(?counts, "events since window start");
        status.absorb(counts);
    }

    let mut activity = match &paths.activity {
        Some(path) => load_activity(path)?,
        None => Vec::new(),
    };
    if let Some(mode) = args.simulation {
        activity = frame_simulation(mode, args.count, activity, !status.simulation_running);
    }

    let theme = config.theme(args.theme.dark)?;
    let state = build_state(StateInputs {
        status: &status,
        previous: previous.as_ref(),
        alerts: &alerts,
        activity,
        title: config.title.clone(),
        generated_at: Some(chrono::Local::now().naive_local()),
        recent_limit: args.limit.unwrap_or(config.recent_alerts),
    });

    Ok(render_dashboard(&state, &theme))
}

fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content).map_err(|source| SentinelError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            info!(path = %path.display(), bytes = content.len(), "wrote output");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            if !content.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }
    Ok(())
}

fn run_render(args: &RenderArgs) -> Result<()> {
    let config = load_config(&args.theme)?;
    let render_once = || -> Result<()> {
        let html = render_page(args, &config)?;
        write_output(args.output.as_deref(), &html)
    };

    if !args.watch {
        return render_once();
    }

    let files = InputPaths::resolve(args, &config).all();
    if files.is_empty() {
        anyhow::bail!("--watch needs at least one input file (--status, --alerts, --activity)");
    }
    watch_and_render(WatchConfig::new(files), render_once)?;
    Ok(())
}

fn run_css(args: &CssArgs) -> Result<()> {
    let config = load_config(&args.theme)?;
    let theme = config.theme(args.theme.dark)?;
    write_output(args.output.as_deref(), &render_css(&theme))
}

fn run_tokens(args: &TokensArgs) -> Result<()> {
    let config = load_config(&args.theme)?;
    let theme = config.theme(args.theme.dark)?;
    let out = match args.format {
        TokenFormat::Css => theme.to_custom_properties(),
        TokenFormat::Json => serde_json::to_string_pretty(&theme)?,
    };
    write_output(None, &out)
}
