use crate::config::ScanConfig;
use crate::error::EngineError;
use crate::processor;
use crate::record::FileRecord;
use ignore::{DirEntry, Walk, WalkBuilder};

/// Lazy, sequential walk yielding a [`FileRecord`] for every matching file.
///
/// Entries are visited depth-first with each directory's children sorted
/// by file name, so the order is stable for a fixed tree. Nothing is
/// filtered except by suffix: hidden entries and ignore files are not
/// honored. Walk errors (missing root, unreadable directory) are logged
/// and skipped.
pub struct Scan {
    walk: Walk,
    config: ScanConfig,
}

/// Start scanning the tree under `config.root`.
#[must_use]
pub fn scan(config: &ScanConfig) -> Scan {
    let mut builder = WalkBuilder::new(&config.root);
    builder
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b));

    Scan {
        walk: builder.build(),
        config: config.clone(),
    }
}

impl Scan {
    fn is_candidate(&self, entry: &DirEntry) -> bool {
        // The root itself is never reported, even when it is a file.
        if entry.depth() == 0 {
            return false;
        }

        let Some(file_type) = entry.file_type() else {
            return false;
        };
        if file_type.is_dir() {
            return false;
        }
        // A link to a directory counts as a directory and is not descended.
        if file_type.is_symlink() && entry.path().metadata().is_ok_and(|m| m.is_dir()) {
            return false;
        }

        self.config.matches(&entry.file_name().to_string_lossy())
    }
}

impl Iterator for Scan {
    type Item = FileRecord;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.walk.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    log::warn!("{}", EngineError::from(err));
                    continue;
                }
            };

            if !self.is_candidate(&entry) {
                continue;
            }

            let path = entry.into_path();
            log::debug!("reading {}", path.display());
            let content = processor::read_text(&path);
            return Some(FileRecord { path, content });
        }
    }
}
