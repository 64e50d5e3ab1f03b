//! `miwifi batch`: validate a JSON object of `{endpoint: payload}` pairs,
//! reporting every failure across all of them.

use std::collections::BTreeSet;

use serde::Serialize;
use serde_json::{Map, Value};
use tabled::Tabled;

use miwifi_api::{PathSegment, Response, ValidationError, ValidationErrors};

use crate::cli::{BatchArgs, OutputFormat};
use crate::config::Settings;
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Debug, Serialize)]
struct Accepted {
    endpoint: String,
    record: &'static str,
    code: Option<i64>,
}

impl From<&Response> for Accepted {
    fn from(response: &Response) -> Self {
        Self {
            endpoint: response.endpoint().to_string(),
            record: response.endpoint().record_name(),
            code: response.code(),
        }
    }
}

#[derive(Tabled)]
struct AcceptedRow {
    #[tabled(rename = "Endpoint")]
    endpoint: String,
    #[tabled(rename = "Record")]
    record: &'static str,
    #[tabled(rename = "Code")]
    code: String,
}

fn to_row(a: &Accepted) -> AcceptedRow {
    AcceptedRow {
        endpoint: a.endpoint.clone(),
        record: a.record,
        code: a.code.map_or_else(|| "-".into(), |c| c.to_string()),
    }
}

pub fn handle(args: &BatchArgs, settings: &Settings) -> Result<(), CliError> {
    let raw = util::read_json(args.file.as_deref())?;
    let Value::Object(payloads) = raw else {
        return Err(CliError::InvalidArgument {
            field: "batch".into(),
            reason: "expected a JSON object mapping endpoint identifiers to payloads".into(),
        });
    };

    let responses = match miwifi_api::parse_named_batch(
        payloads.iter().map(|(name, payload)| (name.as_str(), payload)),
    ) {
        Ok(responses) => responses,
        Err(errors) => {
            if !settings.quiet {
                report_statuses(&payloads, &errors, output::should_color(settings.color));
            }
            return Err(errors.into());
        }
    };

    for response in &responses {
        util::check_code(response, settings.strict_code)?;
    }
    tracing::info!(count = responses.len(), "batch accepted");

    let body = match settings.output {
        OutputFormat::Table => {
            let accepted: Vec<Accepted> = responses.iter().map(Accepted::from).collect();
            output::render_list(settings.output, &accepted, to_row)?
        }
        format => {
            let mut by_endpoint = Map::new();
            for response in &responses {
                by_endpoint.insert(
                    response.endpoint().to_string(),
                    serde_json::to_value(response).map_err(output::render_err)?,
                );
            }
            output::render_record(format, &by_endpoint)?
        }
    };
    output::print_output(&body, settings.quiet);
    Ok(())
}

/// One `ok`/`FAIL` line per submitted identifier, on stderr.
fn report_statuses(payloads: &Map<String, Value>, errors: &ValidationErrors, color: bool) {
    let failed = failed_endpoints(errors);
    for name in payloads.keys() {
        eprintln!(
            "{:>4}  {name}",
            output::status_marker(!failed.contains(name.as_str()), color)
        );
    }
}

/// Identifiers named by the failures: the root of each error path, or the
/// unknown identifier itself.
fn failed_endpoints(errors: &ValidationErrors) -> BTreeSet<&str> {
    errors
        .iter()
        .filter_map(|err| match err {
            ValidationError::UnknownRecord { name } => Some(name.as_str()),
            other => match other.path()?.segments().first()? {
                PathSegment::Key(key) => Some(key.as_str()),
                PathSegment::Index(_) => None,
            },
        })
        .collect()
}
