//! `miwifi bytes`: a byte count in every unit, the way records display it.

use serde::Serialize;
use serde_json::Value;

use miwifi_api::{ByteCount, FieldPath};

use crate::cli::BytesArgs;
use crate::config::Settings;
use crate::error::CliError;
use crate::output;

#[derive(Debug, PartialEq, Serialize)]
struct BytesReport {
    bytes: u64,
    kilobytes: f64,
    megabytes: f64,
    gigabytes: f64,
    terabytes: f64,
    display: String,
}

impl From<ByteCount> for BytesReport {
    fn from(count: ByteCount) -> Self {
        Self {
            bytes: count.bytes(),
            kilobytes: count.kilobytes(),
            megabytes: count.megabytes(),
            gigabytes: count.gigabytes(),
            terabytes: count.terabytes(),
            display: count.to_string(),
        }
    }
}

fn parse_count(value: &str) -> Result<ByteCount, CliError> {
    ByteCount::parse(&Value::String(value.to_owned()), &FieldPath::root("value")).map_err(|err| {
        CliError::InvalidArgument {
            field: "value".into(),
            reason: err.to_string(),
        }
    })
}

pub fn handle(args: &BytesArgs, settings: &Settings) -> Result<(), CliError> {
    let report = BytesReport::from(parse_count(&args.value)?);
    let out = output::render_record(settings.output, &report)?;
    output::print_output(&out, settings.quiet);
    Ok(())
}
