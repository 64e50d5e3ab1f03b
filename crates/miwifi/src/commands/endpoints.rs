//! `miwifi endpoints`: every registered identifier and its record.

use serde::Serialize;
use strum::IntoEnumIterator;
use tabled::Tabled;

use miwifi_api::Endpoint;

use crate::config::Settings;
use crate::error::CliError;
use crate::output;

#[derive(Debug, Serialize)]
struct EndpointEntry {
    endpoint: &'static str,
    record: &'static str,
}

#[derive(Tabled)]
struct EndpointRow {
    #[tabled(rename = "Endpoint")]
    endpoint: &'static str,
    #[tabled(rename = "Record")]
    record: &'static str,
}

fn to_row(e: &EndpointEntry) -> EndpointRow {
    EndpointRow {
        endpoint: e.endpoint,
        record: e.record,
    }
}

pub fn handle(settings: &Settings) -> Result<(), CliError> {
    let entries: Vec<EndpointEntry> = Endpoint::iter()
        .map(|endpoint| EndpointEntry {
            endpoint: endpoint.as_str(),
            record: endpoint.record_name(),
        })
        .collect();
    let out = output::render_list(settings.output, &entries, to_row)?;
    output::print_output(&out, settings.quiet);
    Ok(())
}
