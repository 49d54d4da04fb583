use derive_builder::Builder;
use std::path::PathBuf;

/// Suffix selected when none is configured.
pub const DEFAULT_SUFFIX: &str = ".jsx";

#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct ScanConfig {
    /// Directory whose tree is walked. Not checked for existence up front.
    #[builder(default = "PathBuf::from(\".\")")]
    pub root: PathBuf,
    /// File-name suffixes to select. Matching is case-sensitive and a file
    /// is selected when its name ends with any of them.
    #[builder(default = "vec![DEFAULT_SUFFIX.to_string()]")]
    pub suffixes: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            suffixes: vec![DEFAULT_SUFFIX.to_string()],
        }
    }
}

impl ScanConfig {
    /// Whether `file_name` ends with one of the configured suffixes.
    #[must_use]
    pub fn matches(&self, file_name: &str) -> bool {
        self.suffixes.iter().any(|s| file_name.ends_with(s.as_str()))
    }
}
