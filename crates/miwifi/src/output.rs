//! Output formatting: table, JSON, YAML, debug.
//!
//! Renders data in the format selected by `--output`. Tables use `tabled`,
//! structured formats use serde.

use std::fmt::Debug;
use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use serde::Serialize;
use serde_json::Value;
use tabled::{Table, Tabled, settings::Style};

use crate::cli::{ColorMode, OutputFormat};
use crate::error::CliError;

// ── Color helpers ────────────────────────────────────────────────────

/// Determine whether color output should be enabled.
pub fn should_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

/// Bold title line shown above tables.
pub fn title(text: &str, color: bool) -> String {
    if color {
        text.bold().to_string()
    } else {
        text.to_owned()
    }
}

/// `ok` / `FAIL` marker used in batch summaries.
pub fn status_marker(ok: bool, color: bool) -> String {
    match (ok, color) {
        (true, true) => "ok".green().to_string(),
        (true, false) => "ok".to_owned(),
        (false, true) => "FAIL".red().bold().to_string(),
        (false, false) => "FAIL".to_owned(),
    }
}

// ── Render dispatchers ───────────────────────────────────────────────

/// Render a list of items: table rows through `to_row`, everything else
/// through serde (or `Debug` for the debug format).
pub fn render_list<T, R>(
    format: OutputFormat,
    data: &[T],
    to_row: impl Fn(&T) -> R,
) -> Result<String, CliError>
where
    T: Serialize + Debug,
    R: Tabled,
{
    match format {
        OutputFormat::Table => {
            let rows: Vec<R> = data.iter().map(to_row).collect();
            Ok(render_table(&rows))
        }
        other => render_record(other, data),
    }
}

/// Render one value. Tables show the flattened field paths and values.
pub fn render_record<T>(format: OutputFormat, data: &T) -> Result<String, CliError>
where
    T: Serialize + Debug + ?Sized,
{
    match format {
        OutputFormat::Table => {
            let value = serde_json::to_value(data).map_err(render_err)?;
            Ok(render_table(&flatten(&value)))
        }
        OutputFormat::Json => serde_json::to_string_pretty(data).map_err(render_err),
        OutputFormat::JsonCompact => serde_json::to_string(data).map_err(render_err),
        // print_output adds the final newline
        OutputFormat::Yaml => serde_yaml::to_string(data)
            .map(|yaml| yaml.trim_end().to_owned())
            .map_err(render_err),
        OutputFormat::Debug => Ok(format!("{data:#?}")),
    }
}

/// Serialization failures are output errors, never input errors.
pub fn render_err(err: impl std::fmt::Display) -> CliError {
    CliError::Render(err.to_string())
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

// ── Format-specific renderers ────────────────────────────────────────

fn render_table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

// ── Flattening ───────────────────────────────────────────────────────

#[derive(Debug, Tabled, PartialEq, Eq)]
pub struct FieldRow {
    #[tabled(rename = "Field")]
    pub field: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

/// Flatten a JSON value into `path = scalar` rows, keys in sorted order.
pub fn flatten(value: &Value) -> Vec<FieldRow> {
    let mut rows = Vec::new();
    flatten_into(String::new(), value, &mut rows);
    rows
}

fn flatten_into(prefix: String, value: &Value, rows: &mut Vec<FieldRow>) {
    match value {
        Value::Object(map) if !map.is_empty() => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten_into(path, child, rows);
            }
        }
        Value::Array(items) if !items.is_empty() => {
            for (i, child) in items.iter().enumerate() {
                flatten_into(format!("{prefix}[{i}]"), child, rows);
            }
        }
        Value::String(s) => rows.push(FieldRow {
            field: prefix,
            value: s.clone(),
        }),
        other => rows.push(FieldRow {
            field: prefix,
            value: other.to_string(),
        }),
    }
}
