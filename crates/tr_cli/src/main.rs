// crates/tr_cli/src/main.rs
//
// Binary entry point: exit-code mapping, logging setup, and the single run
// path (resolve config → stream pass → stdout preview → render reports).

mod args;

mod exitcodes {
    /// Stable exit codes for scripts.
    pub const OK: i32 = 0;
    /// Configuration errors (flags/settings incomplete or invalid).
    pub const CONFIG: i32 = 2;
    /// I/O, decode, render, or write failures.
    pub const IO: i32 = 4;
}

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};
use tracing::debug;

use args::{parse_and_validate, CliError, RunConfig};
use tr_pipeline::{run_path, PipelineError, PipelineOutputs};
use tr_report::{build_model, ReportError, ReportModel};

/// Central error type for CLI → exit-code mapping.
#[derive(Debug)]
enum MainError {
    /// I/O failures (stream open/decode, report writes)
    Io(String),
    /// Rendering errors (template or serialization)
    Render(String),
}

impl std::fmt::Display for MainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MainError::Io(m) => write!(f, "{m}"),
            MainError::Render(m) => write!(f, "render: {m}"),
        }
    }
}

fn main() -> ExitCode {
    let cfg = match parse_and_validate() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("tagrank: error: {e}");
            // A missing input file is an input error, not a flag mistake.
            let rc = match e {
                CliError::NotFound(_) => exitcodes::IO,
                _ => exitcodes::CONFIG,
            };
            return ExitCode::from(rc as u8);
        }
    };

    let filter = if cfg.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let rc = match run_once(&cfg) {
        Ok(()) => exitcodes::OK,
        Err(e) => {
            eprintln!("tagrank: error: {e}");
            map_error(&e)
        }
    };
    ExitCode::from(rc as u8)
}

/// Full run path: one stream pass, stdout preview, report rendering.
fn run_once(cfg: &RunConfig) -> Result<(), MainError> {
    let outputs = run_path(&cfg.file, cfg.params.clone()).map_err(map_pipeline_err)?;

    if !cfg.quiet {
        print_preview(&outputs, cfg.top);
        print_totals(&outputs);
    }

    let model = build_model(&outputs);
    for fmt in &cfg.render {
        match fmt.as_str() {
            "html" => write_html(&model, &cfg.out)?,
            "json" => write_json(&model, &cfg.out.with_extension("json"))?,
            other => return Err(MainError::Render(format!("unknown renderer: {other}"))),
        }
    }
    Ok(())
}

/// Map our typed errors to the exit-code table.
fn map_error(e: &MainError) -> i32 {
    match e {
        MainError::Io(_) => exitcodes::IO,
        MainError::Render(_) => exitcodes::IO,
    }
}

fn map_pipeline_err(e: PipelineError) -> MainError {
    match e {
        PipelineError::Io(m) => MainError::Io(m),
    }
}

fn map_report_err(e: ReportError) -> MainError {
    MainError::Render(e.to_string())
}

/// Echo the top rows to stdout (operator preview; the report is the real
/// output).
fn print_preview(outputs: &PipelineOutputs, top: usize) {
    if outputs.rows.is_empty() {
        println!("no users above the minimum score");
        return;
    }
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(tr_report::COLUMNS.to_vec());
    for row in outputs.rows.iter().take(top) {
        table.add_row(vec![
            row.rank.to_string(),
            row.user.clone(),
            row.points.to_string(),
            row.paths.to_string(),
            row.relations.to_string(),
            row.score.to_string(),
            row.total.to_string(),
        ]);
    }
    println!("{table}");
}

fn print_totals(outputs: &PipelineOutputs) {
    let t = &outputs.totals;
    println!("total point versions seen    : {}", group_digits(t.point_versions));
    println!("total path versions seen     : {}", group_digits(t.path_versions));
    println!("total relation versions seen : {}", group_digits(t.relation_versions));
}

/// Thousands-separated rendering for the totals lines.
fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

// Always accept the concrete model type; gate the body by feature.
fn write_html(model: &ReportModel, out: &Path) -> Result<(), MainError> {
    #[cfg(feature = "report-html")]
    {
        let html = tr_report::render_html(model).map_err(map_report_err)?;
        fs::write(out, html)
            .map_err(|e| MainError::Io(format!("write {}: {e}", out.display())))?;
        debug!(path = %out.display(), "wrote html report");
        return Ok(());
    }
    #[cfg(not(feature = "report-html"))]
    {
        let _ = (model, out);
        Err(MainError::Render(
            "html renderer not enabled (build with feature `report-html`)".into(),
        ))
    }
}

fn write_json(model: &ReportModel, out: &Path) -> Result<(), MainError> {
    #[cfg(feature = "report-json")]
    {
        let json = tr_report::render_json(model).map_err(map_report_err)?;
        fs::write(out, json)
            .map_err(|e| MainError::Io(format!("write {}: {e}", out.display())))?;
        debug!(path = %out.display(), "wrote json report");
        return Ok(());
    }
    #[cfg(not(feature = "report-json"))]
    {
        let _ = (model, out);
        Err(MainError::Render(
            "json renderer not enabled (build with feature `report-json`)".into(),
        ))
    }
}
