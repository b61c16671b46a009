use crate::walk::CandidateFile;
use log;
use std::fmt;

/// Ordering applied to the selected files before bundling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// By base file name, including the extension.
    #[default]
    Name,
    /// By extension, keeping input order among files sharing one.
    Type,
    /// Input order, unchanged.
    Unsorted,
}

impl SortKey {
    /// Parses a user-supplied key. Unrecognized values map to
    /// [`SortKey::Unsorted`] instead of failing.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "name" => SortKey::Name,
            "type" => SortKey::Type,
            other => {
                log::warn!("Unknown sort key '{}', keeping discovery order.", other);
                SortKey::Unsorted
            }
        }
    }

    /// Strict variant used where only "name" and "type" are acceptable.
    pub fn parse_strict(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "name" => Some(SortKey::Name),
            "type" => Some(SortKey::Type),
            _ => None,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Name => write!(f, "name"),
            SortKey::Type => write!(f, "type"),
            SortKey::Unsorted => write!(f, "unsorted"),
        }
    }
}

/// Sorts `files` by `key`. Both sorts are stable and compare bytes ordinally.
pub fn order(mut files: Vec<CandidateFile>, key: SortKey) -> Vec<CandidateFile> {
    match key {
        SortKey::Name => files.sort_by(|a, b| {
            a.file_name()
                .as_encoded_bytes()
                .cmp(b.file_name().as_encoded_bytes())
        }),
        SortKey::Type => files.sort_by(|a, b| a.extension.as_bytes().cmp(b.extension.as_bytes())),
        SortKey::Unsorted => {}
    }
    log::debug!("Ordered {} files by {}.", files.len(), key);
    files
}
