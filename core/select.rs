use crate::walk::CandidateFile;
use indexmap::IndexSet;
use log;

/// Keeps the files whose extension is in `extensions`, compared
/// case-insensitively. Input order is preserved; an empty extension set
/// selects nothing.
pub fn select(files: Vec<CandidateFile>, extensions: &IndexSet<&str>) -> Vec<CandidateFile> {
    if extensions.is_empty() {
        log::debug!("No extensions requested, selecting no files.");
        return Vec::new();
    }
    let wanted: IndexSet<String> = extensions.iter().map(|e| e.to_lowercase()).collect();
    let total = files.len();
    let selected: Vec<CandidateFile> = files
        .into_iter()
        .filter(|file| {
            let keep = wanted.contains(&file.extension.to_lowercase());
            if !keep {
                log::trace!("Excluding by extension: {}", file.display_path());
            }
            keep
        })
        .collect();
    log::debug!("Selected {} of {} files by extension.", selected.len(), total);
    selected
}
