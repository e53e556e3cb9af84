use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use vista_tui::{RunOptions, outline};
use vista_util::{UserPreferences, default_log_path};

/// Terminal admin dashboard with a collapsible navigation tree.
#[derive(Debug, Parser)]
#[command(name = "vista", version, about)]
struct Cli {
    /// Theme id or alias for this session (see `vista themes`)
    #[arg(long, global = true, value_name = "ID")]
    theme: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the navigation tree without starting the dashboard
    Tree(TreeArgs),
    /// List available themes
    Themes,
}

#[derive(Debug, Args)]
struct TreeArgs {
    /// Expand the first entry with this label (repeatable)
    #[arg(long = "expand", value_name = "LABEL")]
    expand: Vec<String>,
    /// Expand every entry that has children
    #[arg(long, conflicts_with = "expand")]
    expand_all: bool,
    /// Print the visible rows as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let preferences = Arc::new(open_preferences());

    match cli.command {
        // No subcommands => TUI
        None => {
            init_tracing(TraceTarget::LogFile)?;
            vista_tui::run(RunOptions {
                theme_override: cli.theme,
                preferences,
            })
            .await
        }
        Some(Command::Tree(args)) => {
            init_tracing(TraceTarget::Stderr)?;
            print_tree(&args)
        }
        Some(Command::Themes) => {
            init_tracing(TraceTarget::Stderr)?;
            print_themes(&preferences)
        }
    }
}

fn open_preferences() -> UserPreferences {
    UserPreferences::new().unwrap_or_else(|error| {
        // Logging is not configured yet.
        eprintln!("vista: preferences unavailable ({error}); using defaults for this session");
        UserPreferences::ephemeral()
    })
}

fn print_tree(args: &TreeArgs) -> Result<()> {
    write_tree(&mut io::stdout().lock(), args)
}

fn write_tree(out: &mut impl Write, args: &TreeArgs) -> Result<()> {
    let entries = vista_tui::nav_entries();
    let expansion = outline::expansion_for(entries, &args.expand, args.expand_all);
    if args.json {
        writeln!(out, "{}", outline::outline_json(entries, &expansion)?)?;
    } else {
        for line in outline::outline_lines(entries, &expansion) {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}

fn print_themes(preferences: &UserPreferences) -> Result<()> {
    if !preferences.is_persistent() {
        warn!("preferences are in-memory only; theme changes will not be saved");
    }
    write_themes(&mut io::stdout().lock(), preferences)
}

fn write_themes(out: &mut impl Write, preferences: &UserPreferences) -> Result<()> {
    let preferred = preferences.preferred_theme();
    for definition in vista_tui::all_themes() {
        let marker = if preferred.as_deref() == Some(definition.id) { "*" } else { " " };
        let mut traits = Vec::new();
        if definition.is_high_contrast {
            traits.push("high contrast");
        }
        if definition.is_ansi_fallback {
            traits.push("256 colors");
        }
        let traits = if traits.is_empty() {
            String::new()
        } else {
            format!(" ({})", traits.join(", "))
        };
        writeln!(
            out,
            "{marker} {:<12} {}{traits}\n    {}",
            definition.id, definition.label, definition.description
        )?;
    }
    Ok(())
}

enum TraceTarget {
    /// The dashboard owns the terminal, so its logs go to a file.
    LogFile,
    Stderr,
}

fn init_tracing(target: TraceTarget) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match target {
        TraceTarget::LogFile => {
            let path = default_log_path();
            let file = open_log_file(&path)?;
            let _ = builder.with_ansi(false).with_writer(Mutex::new(file)).try_init();
            info!(path = %path.display(), "logging initialized");
        }
        TraceTarget::Stderr => {
            let _ = builder.with_writer(io::stderr).try_init();
        }
    }
    Ok(())
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("create log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn tree_flags_parse() {
        let cli = Cli::try_parse_from(["vista", "tree", "--expand", "Analytics", "--expand", "Commerce", "--json"]).expect("parse");
        let Some(Command::Tree(args)) = cli.command else {
            panic!("expected tree subcommand");
        };
        assert_eq!(args.expand, vec!["Analytics", "Commerce"]);
        assert!(args.json);
        assert!(!args.expand_all);
    }

    #[test]
    fn expand_all_conflicts_with_labels() {
        assert!(Cli::try_parse_from(["vista", "tree", "--expand", "Analytics", "--expand-all"]).is_err());
    }

    #[test]
    fn theme_flag_is_global() {
        let cli = Cli::try_parse_from(["vista", "--theme", "nord"]).expect("parse");
        assert_eq!(cli.theme.as_deref(), Some("nord"));
        assert!(cli.command.is_none());
    }

    #[test]
    fn json_tree_is_an_array_of_visible_rows() {
        let args = TreeArgs {
            expand: vec!["Analytics".into()],
            expand_all: false,
            json: true,
        };
        let mut out = Vec::new();
        write_tree(&mut out, &args).expect("write tree");
        let rows: serde_json::Value = serde_json::from_slice(&out).expect("valid json");
        let rows = rows.as_array().expect("array");
        assert_eq!(rows[1]["label"], "Analytics");
        assert_eq!(rows[2]["label"], "Overview");
        assert_eq!(rows[2]["depth"], 1);
    }

    #[test]
    fn plain_tree_prints_one_line_per_row() {
        let args = TreeArgs {
            expand: Vec::new(),
            expand_all: false,
            json: false,
        };
        let mut out = Vec::new();
        write_tree(&mut out, &args).expect("write tree");
        let text = String::from_utf8(out).expect("utf8");
        assert_eq!(text.lines().count(), vista_tui::nav_entries().len());
        assert!(text.contains("Analytics"));
    }

    #[test]
    fn themes_listing_marks_the_preferred_theme() {
        let preferences = UserPreferences::ephemeral();
        preferences.set_preferred_theme(Some("nord".into())).expect("set theme");
        let mut out = Vec::new();
        write_themes(&mut out, &preferences).expect("write themes");
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.lines().any(|line| line.starts_with("* nord ")));
        assert!(text.lines().any(|line| line.starts_with("  dracula ")));
        assert!(text.contains("high contrast"));
    }

    #[test]
    fn log_file_parent_directories_are_created() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("vista.log");
        open_log_file(&path).expect("open log file");
        assert!(path.exists());
    }
}
