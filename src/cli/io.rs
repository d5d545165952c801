//! JSON I/O handling for the CLI
//!
//! - Input: one JSON object per line
//! - Output: one JSON object per line, tagged with `status`
//! - UTF-8 only

use std::io::{BufRead, Write};

use serde_json::{json, Value};

use super::errors::{CliError, CliResult};

/// Read JSON requests line by line, skipping blank lines
pub fn read_requests<R: BufRead>(input: R) -> impl Iterator<Item = CliResult<Value>> {
    input
        .lines()
        .filter(|line| !matches!(line, Ok(l) if l.trim().is_empty()))
        .map(|line| {
            let line = line.map_err(CliError::from)?;
            serde_json::from_str(&line).map_err(|e| CliError::invalid_event(e.to_string()))
        })
}

/// Write a success response
pub fn write_response<W: Write>(out: &mut W, data: Value) -> CliResult<()> {
    write_line(out, &json!({ "status": "ok", "data": data }))
}

/// Write a response for an event that was refused
pub fn write_rejected<W: Write>(out: &mut W, reason: Value, data: Value) -> CliResult<()> {
    write_line(
        out,
        &json!({ "status": "rejected", "reason": reason, "data": data }),
    )
}

/// Write an error response
pub fn write_error<W: Write>(out: &mut W, code: &str, message: &str) -> CliResult<()> {
    write_line(
        out,
        &json!({ "status": "error", "code": code, "message": message }),
    )
}

fn write_line<W: Write>(out: &mut W, response: &Value) -> CliResult<()> {
    serde_json::to_writer(&mut *out, response)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
