use chrono::Utc;
use std::fs::OpenOptions;
use std::io::{self, Write};

const LOG_FILE: &str = "lighthouse-audit.log";

/// Append a timestamped progress line to the run log. Callers ignore the
/// result; an unwritable log never interrupts an audit.
pub fn audit_log(text: &str) -> io::Result<()> {
    let timestamp = Utc::now().format("%Y-%m-%dT%H:%M:%S%.fZ");
    let mut file = OpenOptions::new().append(true).create(true).open(LOG_FILE)?;
    writeln!(file, "{}::{}", timestamp, text)?;
    Ok(())
}
