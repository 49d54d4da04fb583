// crates/engine/src/lib.rs
use std::io::Write;

pub mod config;
pub mod error;
pub mod filesystem;
pub mod processor;
pub mod record;
pub mod report;

use crate::config::ScanConfig;
use crate::error::{EngineError, Result};
use crate::record::ScanSummary;

pub use crate::filesystem::{Scan, scan};

/// Walk `config.root`, writing a report block for every matching file to `out`.
///
/// Files that cannot be read are reported inline and counted in
/// `ScanSummary::errors`; they never stop the run.
///
/// # Errors
///
/// Returns `EngineError::Output` only when `out` cannot be written to.
pub fn run<W: Write>(config: &ScanConfig, out: &mut W) -> Result<ScanSummary> {
    let mut summary = ScanSummary::default();

    for record in scan(config) {
        if let Err(e) = &record.content {
            log::debug!("reporting unreadable file inline: {e}");
        }
        report::write_record(out, &record).map_err(EngineError::Output)?;
        summary.record(&record);
    }
    out.flush().map_err(EngineError::Output)?;

    log::info!(
        "Completed: {} files dumped ({} unreadable)",
        summary.files,
        summary.errors
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScanConfigBuilder;
    use crate::report::SEPARATOR;
    use std::fs;
    use std::io;
    use std::path::Path;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, contents: &[u8]) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    fn run_to_string(root: &Path) -> (ScanSummary, String) {
        let config = ScanConfigBuilder::default().root(root).build().unwrap();
        let mut out = Vec::new();
        let summary = run(&config, &mut out).unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn one_block_per_matching_file() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a/x.jsx", b"const x = 1;");
        write(dir.path(), "b/c/y.jsx", b"const y = 2;\n");
        write(dir.path(), "d.txt", b"not me");

        let (summary, out) = run_to_string(dir.path());

        assert_eq!(summary, ScanSummary { files: 2, errors: 0 });
        assert_eq!(out.matches("FILE: ").count(), 2);
        assert_eq!(out.matches(SEPARATOR).count(), 4);
        assert!(!out.contains("d.txt"));

        let x = out.find("x.jsx").unwrap();
        let y = out.find("y.jsx").unwrap();
        assert!(x < y);

        let x_path = dir.path().join("a").join("x.jsx");
        let expected = format!("{SEPARATOR}\nFILE: {}\n{SEPARATOR}\nconst x = 1;\n\n\n", x_path.display());
        assert!(out.starts_with(&expected));
    }

    #[test]
    fn unreadable_file_is_reported_inline_and_walk_continues() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "1.jsx", &[0xff, 0xfe, 0x00]);
        write(dir.path(), "2.jsx", b"after");

        let (summary, out) = run_to_string(dir.path());

        assert_eq!(summary, ScanSummary { files: 2, errors: 1 });
        assert!(out.contains("Error reading file: "));
        assert!(out.contains("not valid UTF-8"));
        assert!(out.contains("\nafter\n"));
    }

    #[test]
    fn missing_root_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let (summary, out) = run_to_string(&dir.path().join("nope"));

        assert_eq!(summary, ScanSummary::default());
        assert!(out.is_empty());
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn output_failure_is_returned() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a.jsx", b"a");
        let config = ScanConfigBuilder::default().root(dir.path()).build().unwrap();

        let err = run(&config, &mut ClosedPipe).unwrap_err();
        assert!(err.is_broken_pipe());
    }
}
