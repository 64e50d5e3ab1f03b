//! Shared helpers for command handlers.

use std::io::Read;
use std::path::Path;

use serde_json::Value;

use miwifi_api::Response;

use crate::error::CliError;

/// Read a JSON document from `path`, or stdin when absent or `-`.
pub fn read_json(path: Option<&Path>) -> Result<Value, CliError> {
    let text = match path {
        Some(path) if path != Path::new("-") => {
            std::fs::read_to_string(path).map_err(|source| CliError::Read {
                path: path.to_path_buf(),
                source,
            })?
        }
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(serde_json::from_str(&text)?)
}

/// Under `--strict-code`, a non-zero envelope code fails the command.
pub fn check_code(response: &Response, strict: bool) -> Result<(), CliError> {
    match response.code() {
        Some(code) if strict && code != 0 => Err(CliError::ErrorCode {
            endpoint: response.endpoint().to_string(),
            code,
        }),
        _ => Ok(()),
    }
}
