//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::activity::SimulationMode;

#[derive(Parser, Debug)]
#[command(name = "sentinel")]
#[command(about = "Render the ransomware-detection dashboard as a static HTML page")]
#[command(version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error); RUST_LOG overrides it
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the dashboard HTML page
    Render(RenderArgs),
    /// Print the stylesheet (design tokens + rules)
    Css(CssArgs),
    /// Print the resolved design tokens
    Tokens(TokensArgs),
    /// Show which log category an alert message maps to
    Classify {
        /// Alert message text
        message: String,
    },
}

/// Options shared by every command that needs a theme.
#[derive(Args, Debug, Clone, Default)]
pub struct ThemeArgs {
    /// Config file (default: .sentinel/config.toml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Use the dark palette
    #[arg(long)]
    pub dark: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct RenderArgs {
    #[command(flatten)]
    pub theme: ThemeArgs,

    /// Status snapshot (JSON)
    #[arg(long)]
    pub status: Option<PathBuf>,

    /// Earlier status snapshot for metric deltas (JSON)
    #[arg(long)]
    pub previous: Option<PathBuf>,

    /// Alert log (blank-line separated entries)
    #[arg(long)]
    pub alerts: Option<PathBuf>,

    /// Captured simulator output
    #[arg(long)]
    pub activity: Option<PathBuf>,

    /// Frame the activity log as a simulation run of this kind
    #[arg(long, value_enum)]
    pub simulation: Option<SimulationMode>,

    /// Number of files the simulation touched (used in its banner)
    #[arg(long, default_value_t = 10)]
    pub count: usize,

    /// Add alert-log events at or after this time (YYYY-MM-DD HH:MM:SS) to the counters
    #[arg(long)]
    pub since: Option<String>,

    /// Maximum alerts in the event log
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Re-render whenever an input file changes
    #[arg(long, requires = "output")]
    pub watch: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct CssArgs {
    #[command(flatten)]
    pub theme: ThemeArgs,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct TokensArgs {
    #[command(flatten)]
    pub theme: ThemeArgs,

    #[arg(long, value_enum, default_value_t = TokenFormat::Css)]
    pub format: TokenFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum TokenFormat {
    /// `:root { --name: value; }`
    #[default]
    Css,
    /// `{"--name": "value"}`
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_render_flags() {
        let cli = Cli::try_parse_from([
            "sentinel", "render", "--status", "s.json", "--simulation", "ransomware",
            "--count", "25", "--dark", "-o", "out.html",
        ])
        .expect("parse");
        let Command::Render(args) = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.status, Some(PathBuf::from("s.json")));
        assert_eq!(args.simulation, Some(SimulationMode::Ransomware));
        assert_eq!(args.count, 25);
        assert!(args.theme.dark);
        assert_eq!(args.output, Some(PathBuf::from("out.html")));
    }

    #[test]
    fn watch_requires_output() {
        assert!(Cli::try_parse_from(["sentinel", "render", "--watch"]).is_err());
    }

    #[test]
    fn tokens_default_to_css() {
        let cli = Cli::try_parse_from(["sentinel", "tokens"]).expect("parse");
        let Command::Tokens(args) = cli.command else {
            panic!("expected tokens");
        };
        assert_eq!(args.format, TokenFormat::Css);
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
