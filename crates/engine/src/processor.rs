use crate::error::{EngineError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read a whole file and decode it as UTF-8.
///
/// The handle is released before returning, whatever the outcome.
///
/// # Errors
/// `FileRead` when the file cannot be opened or read, `Decode` when its
/// bytes are not valid UTF-8.
pub fn read_text(path: &Path) -> Result<String> {
    let file_read = |source| EngineError::FileRead {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(file_read)?;
    let capacity = file
        .metadata()
        .ok()
        .and_then(|m| usize::try_from(m.len()).ok())
        .unwrap_or(0);
    let mut bytes = Vec::with_capacity(capacity);
    file.read_to_end(&mut bytes).map_err(file_read)?;

    String::from_utf8(bytes).map_err(|source| EngineError::Decode {
        path: path.to_path_buf(),
        source,
    })
}
