//! CLI error types with miette diagnostics.
//!
//! Maps validation failures from `miwifi_api` into user-facing errors with
//! actionable help text and distinct exit codes.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use miwifi_api::{ErrorKind, ValidationErrors};

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const REJECTED: i32 = 3;
    pub const UNKNOWN_ENDPOINT: i32 = 4;
    pub const ERROR_CODE: i32 = 5;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Validation ───────────────────────────────────────────────────

    #[error("{errors}")]
    #[diagnostic(
        code(miwifi::rejected),
        help("Each line names the field path that failed. Fix the payload or check the endpoint.")
    )]
    Rejected { errors: ValidationErrors },

    #[error("Unknown endpoint '{name}'")]
    #[diagnostic(
        code(miwifi::unknown_endpoint),
        help("Run: miwifi endpoints to see every registered identifier")
    )]
    UnknownEndpoint { name: String },

    #[error("{endpoint} answered with result code {code}")]
    #[diagnostic(
        code(miwifi::error_code),
        help("The payload is well-formed but the router reported a failure. Drop --strict-code to accept it.")
    )]
    ErrorCode { endpoint: String, code: i64 },

    // ── Input ────────────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(miwifi::invalid_argument))]
    InvalidArgument { field: String, reason: String },

    #[error("Could not read {}", path.display())]
    #[diagnostic(code(miwifi::read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON input: {0}")]
    #[diagnostic(code(miwifi::json), help("Check the JSON file contents and try again."))]
    Json(#[from] serde_json::Error),

    // ── Configuration ────────────────────────────────────────────────

    #[error(transparent)]
    #[diagnostic(code(miwifi::config))]
    Config(Box<figment::Error>),

    // ── IO / Serialization ───────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Could not render output: {0}")]
    #[diagnostic(code(miwifi::render))]
    Render(String),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl From<ValidationErrors> for CliError {
    fn from(errors: ValidationErrors) -> Self {
        // A lone unknown identifier gets its own diagnostic.
        if errors.len() == 1 {
            if let miwifi_api::ValidationError::UnknownRecord { name } = errors.first() {
                return Self::UnknownEndpoint { name: name.clone() };
            }
        }
        Self::Rejected { errors }
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Rejected { errors } if errors.kinds().contains(&ErrorKind::UnknownRecord) => {
                exit_code::UNKNOWN_ENDPOINT
            }
            Self::Rejected { .. } => exit_code::REJECTED,
            Self::UnknownEndpoint { .. } => exit_code::UNKNOWN_ENDPOINT,
            Self::ErrorCode { .. } => exit_code::ERROR_CODE,
            Self::InvalidArgument { .. } | Self::Json(_) => exit_code::USAGE,
            Self::Read { .. } | Self::Config(_) | Self::Io(_) | Self::Render(_) => {
                exit_code::GENERAL
            }
        }
    }
}
