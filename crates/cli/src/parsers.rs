// crates/cli/src/parsers.rs

/// Validate a `--suffix` value.
///
/// A suffix is compared against bare file names, so it cannot contain a
/// path separator. The empty suffix matches every file.
pub fn parse_suffix(s: &str) -> Result<String, String> {
    if s.contains('/') || s.contains(std::path::MAIN_SEPARATOR) {
        return Err(format!("suffix '{s}' contains a path separator"));
    }
    Ok(s.to_string())
}
