//! Plain-text report: one banner block per selected file.

use crate::record::FileRecord;
use std::io::{self, Write};

/// Banner line written above and below each `FILE:` header.
pub const SEPARATOR: &str = "--------------------------------------------------";

/// Write one report block.
///
/// Layout: separator, `FILE: <path>`, separator, the content (or
/// `Error reading file: <reason>`) terminated by a newline, then a spacer
/// of two newlines.
///
/// # Errors
/// Propagates any error from the underlying writer.
pub fn write_record<W: Write>(out: &mut W, record: &FileRecord) -> io::Result<()> {
    writeln!(out, "{SEPARATOR}")?;
    writeln!(out, "FILE: {}", record.path.display())?;
    writeln!(out, "{SEPARATOR}")?;
    match &record.content {
        Ok(text) => writeln!(out, "{text}")?,
        Err(e) => writeln!(out, "Error reading file: {e}")?,
    }
    writeln!(out, "\n")
}
