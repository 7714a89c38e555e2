// crates/tr_cli/src/args.rs
//
// CLI argument surface: clap derive struct, settings merge, and validation.
// The binary refuses to start the pass until it holds a complete, explicit
// run configuration (input file + attribute selector); everything else has
// defaults. Flags win over settings-file values.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tr_core::{AttrSelector, Params, Weights, DEFAULT_MIN_SCORE};
use tr_io::Settings;

/// Parsed CLI arguments (raw). Value defaults are applied during `resolve`
/// so the settings file can fill anything left unset.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "tagrank",
    about = "Rank users by first-touch contributions in an entity edit history"
)]
pub struct Args {
    /// Input history file (JSON Lines, one entity version per line).
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Attribute key to filter on; `*` accepts every version.
    #[arg(short = 't', long)]
    pub attribute: Option<String>,

    /// Output file for the rendered report (default: index.html).
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Minimum score for a user to appear in the report (inclusive, default 100).
    #[arg(short, long)]
    pub min_score: Option<u64>,

    /// Score multiplier for points (default 1).
    #[arg(long)]
    pub point_weight: Option<u64>,

    /// Score multiplier for paths (default 5).
    #[arg(long)]
    pub path_weight: Option<u64>,

    /// Score multiplier for relations (default 10).
    #[arg(long)]
    pub relation_weight: Option<u64>,

    /// Optional JSON settings file; explicit flags win over its values.
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Renderer(s) to emit. Choose up to 2 (html, json). Defaults to html.
    #[arg(long, value_parser = ["html", "json"], num_args = 0..=2)]
    pub render: Vec<String>,

    /// Number of leaderboard rows echoed to stdout.
    #[arg(long, default_value_t = 25)]
    pub top: usize,

    /// Suppress the stdout preview and totals (errors still print).
    #[arg(short, long)]
    pub quiet: bool,

    /// Debug-level logging.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Fully-resolved run configuration.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub file: PathBuf,
    pub out: PathBuf,
    pub params: Params,
    pub render: Vec<String>,
    pub top: usize,
    pub quiet: bool,
    pub verbose: bool,
}

/// Errors surfaced by argument/settings validation.
/// Keep messages short/stable (handy for scripts/tests).
#[derive(Debug)]
pub enum CliError {
    Missing(&'static str),
    NotFound(String),
    Settings(String),
    BadSelector(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use CliError::*;
        match self {
            Missing(s) => write!(f, "missing required value: {s}"),
            NotFound(p) => write!(f, "input file not found: {p}"),
            Settings(m) => write!(f, "settings: {m}"),
            BadSelector(s) => write!(f, "invalid attribute selector: {s:?}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Entry point used by main.rs
pub fn parse_and_validate() -> Result<RunConfig, CliError> {
    resolve(Args::parse())
}

/// Merge flags over settings, apply defaults, and validate.
pub fn resolve(args: Args) -> Result<RunConfig, CliError> {
    let settings = match &args.settings {
        Some(p) => Settings::load(p).map_err(|e| CliError::Settings(e.to_string()))?,
        None => Settings::default(),
    };

    let file = args
        .file
        .clone()
        .or_else(|| settings.file.clone().map(PathBuf::from))
        .ok_or(CliError::Missing("--file"))?;
    match fs::metadata(&file) {
        Ok(meta) if meta.is_file() => {}
        _ => return Err(CliError::NotFound(file.display().to_string())),
    }

    let attribute = args
        .attribute
        .clone()
        .or_else(|| settings.attribute.clone())
        .ok_or(CliError::Missing("--attribute"))?;
    let selector =
        AttrSelector::parse(&attribute).map_err(|_| CliError::BadSelector(attribute.clone()))?;

    let defaults = Weights::default();
    let sw = settings.weights;
    let weights = Weights {
        point: args
            .point_weight
            .or(sw.and_then(|w| w.point))
            .unwrap_or(defaults.point),
        path: args
            .path_weight
            .or(sw.and_then(|w| w.path))
            .unwrap_or(defaults.path),
        relation: args
            .relation_weight
            .or(sw.and_then(|w| w.relation))
            .unwrap_or(defaults.relation),
    };

    let min_score = args
        .min_score
        .or(settings.min_score)
        .unwrap_or(DEFAULT_MIN_SCORE);

    let out = args
        .out
        .clone()
        .or_else(|| settings.out.clone().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("index.html"));

    let render = if args.render.is_empty() {
        vec![String::from("html")]
    } else {
        args.render.clone()
    };

    Ok(RunConfig {
        file,
        out,
        params: Params { selector, weights, min_score },
        render,
        top: args.top,
        quiet: args.quiet,
        verbose: args.verbose,
    })
}
