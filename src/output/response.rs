//! CLI output: the `--json` envelope, the plain-text report, and exit codes.

use std::io::{self, Write};

use forui_migrate::error::Hint;
use forui_migrate::{Error, ErrorCode, Result};
use serde::Serialize;

/// `{ "success": .., "data": .. }` or `{ "success": false, "error": .. }`.
#[derive(Debug, Serialize)]
pub struct CliResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CliError>,
}

#[derive(Debug, Serialize)]
pub struct CliError {
    pub code: &'static str,
    pub message: String,
    pub details: serde_json::Value,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hints: Vec<Hint>,
}

impl From<&Error> for CliError {
    fn from(err: &Error) -> Self {
        Self {
            code: err.code.as_str(),
            message: err.message.clone(),
            details: err.details.clone(),
            hints: err.hints.clone(),
        }
    }
}

impl<T: Serialize> From<Result<T>> for CliResponse<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(data) => Self {
                success: true,
                data: Some(data),
                error: None,
            },
            Err(err) => Self {
                success: false,
                data: None,
                error: Some(CliError::from(&err)),
            },
        }
    }
}

/// Write to stdout, treating a closed pipe (`| head`) as success.
fn write_stdout(payload: &str) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    match handle.write_all(payload.as_bytes()).and_then(|_| handle.flush()) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        Err(e) => Err(Error::internal_io(e.to_string(), Some("write stdout".to_string()))),
    }
}

pub fn print_json<T: Serialize>(result: Result<T>) -> Result<()> {
    let response = CliResponse::from(result);
    let mut payload = serde_json::to_string_pretty(&response).map_err(|e| {
        Error::internal_json(e.to_string(), Some("serialize response".to_string()))
    })?;
    payload.push('\n');
    write_stdout(&payload)
}

pub fn print_text(text: &str) -> Result<()> {
    write_stdout(text)
}

/// Text-mode counterpart of the error envelope, on stderr.
pub fn print_error(err: &Error) {
    eprintln!("❌ {} [{}]", err.message, err.code.as_str());
    for hint in &err.hints {
        eprintln!("💡 {}", hint.message);
    }
}

/// Process exit code for a command result. Completed runs carry their own.
pub fn exit_code<T>(result: &Result<(T, i32)>) -> i32 {
    match result {
        Ok((_, code)) => *code,
        Err(err) => exit_code_for_error(err.code),
    }
}

fn exit_code_for_error(code: ErrorCode) -> i32 {
    match code {
        ErrorCode::ValidationInvalidArgument => 2,
        ErrorCode::DiscoveryFailed => 3,
        ErrorCode::InternalIoError | ErrorCode::InternalJsonError => 1,
    }
}
