use crate::error::{AppError, Result};
use log;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Directory names pruned from every walk. Matched case-sensitively against
/// whole path segments only.
pub const EXCLUDED_DIRS: [&str; 6] = ["bin", "debug", "obj", "venv", ".vs", ".idea"];

/// A file discovered under the walk root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    /// Path usable for reading (root joined with the relative path).
    pub path: PathBuf,
    /// Path relative to the walk root, used for display and `// Source:` notes.
    pub relative_path: PathBuf,
    /// Extension including the leading ".", empty when the file has none.
    pub extension: String,
    /// Number of directories between the root and the file.
    pub depth: usize,
}

impl CandidateFile {
    pub fn from_relative(root: &Path, relative_path: impl Into<PathBuf>) -> Self {
        let relative_path = relative_path.into();
        let extension = relative_path
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default();
        let depth = relative_path.components().count().saturating_sub(1);
        Self {
            path: root.join(&relative_path),
            relative_path,
            extension,
            depth,
        }
    }

    /// Final path segment, including the extension.
    pub fn file_name(&self) -> &OsStr {
        self.relative_path.file_name().unwrap_or_default()
    }

    pub fn display_path(&self) -> String {
        self.relative_path.display().to_string()
    }
}

fn is_excluded_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| EXCLUDED_DIRS.contains(&name))
}

/// Recursively collects every file under `root`, skipping excluded directories.
///
/// The walk either completes or fails: the first traversal error aborts it and
/// no partial list is returned. No ordering is guaranteed.
pub fn walk(root: &Path) -> Result<Vec<CandidateFile>> {
    if !root.is_dir() {
        return Err(AppError::RootNotFound(root.to_path_buf()));
    }
    log::info!("Walking directory: {}", root.display());

    let walker = WalkDir::new(root).follow_links(false).into_iter();
    let mut files = Vec::new();
    for entry_result in walker.filter_entry(|entry| {
        if is_excluded_dir(entry) {
            log::trace!("Pruning excluded directory: {}", entry.path().display());
            return false;
        }
        true
    }) {
        let entry = entry_result.map_err(|e| {
            log::error!("Error walking directory {}: {}", root.display(), e);
            AppError::from(e)
        })?;
        if entry.path_is_symlink() {
            // Links to files are kept; links to directories are not descended.
            if !entry.path().is_file() {
                log::debug!("Skipping symlink: {}", entry.path().display());
                continue;
            }
        } else if !entry.file_type().is_file() {
            continue;
        }
        let relative_path = match pathdiff::diff_paths(entry.path(), root) {
            Some(rel) => rel,
            None => {
                return Err(AppError::WalkDir(format!(
                    "Could not get relative path for: {}",
                    entry.path().display()
                )));
            }
        };
        log::trace!("Walked file: {}", relative_path.display());
        files.push(CandidateFile::from_relative(root, relative_path));
    }

    log::info!("Directory walk complete. Found {} files.", files.len());
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn candidate_metadata() {
        let file = CandidateFile::from_relative(Path::new("/root"), "src/util/Main.CS");
        assert_eq!(file.extension, ".CS");
        assert_eq!(file.depth, 2);
        assert_eq!(file.file_name(), "Main.CS");
        assert_eq!(file.path, PathBuf::from("/root/src/util/Main.CS"));

        let bare = CandidateFile::from_relative(Path::new("/root"), "Makefile");
        assert_eq!(bare.extension, "");
        assert_eq!(bare.depth, 0);
    }

    #[test]
    fn walk_prunes_excluded_directories() {
        let tmp = assert_fs::TempDir::new().unwrap();
        tmp.child("project/bin/Debug/app.cs").write_str("x").unwrap();
        tmp.child("project/binary/app.cs").write_str("x").unwrap();
        tmp.child("project/obj/gen.cs").write_str("x").unwrap();
        tmp.child("venv/lib/site.py").write_str("x").unwrap();
        tmp.child("main.py").write_str("x").unwrap();

        let mut found: Vec<PathBuf> = walk(tmp.path())
            .unwrap()
            .into_iter()
            .map(|f| f.relative_path)
            .collect();
        found.sort();
        assert_eq!(
            found,
            vec![
                PathBuf::from("main.py"),
                PathBuf::from("project/binary/app.cs"),
            ]
        );
    }

    fn walked(root: &Path) -> Vec<PathBuf> {
        let mut found: Vec<PathBuf> = walk(root)
            .unwrap()
            .into_iter()
            .map(|f| f.relative_path)
            .collect();
        found.sort();
        found
    }

    #[test]
    fn walk_excludes_whole_segments_only() {
        let tmp = assert_fs::TempDir::new().unwrap();
        tmp.child("project/my.venv/app.py").write_str("x").unwrap();
        tmp.child(".idea/workspace.js").write_str("x").unwrap();
        // Case-sensitive: only "debug" is excluded.
        tmp.child("Debug/app.cs").write_str("x").unwrap();
        // A file named like an excluded directory is kept.
        tmp.child("src/bin").write_str("x").unwrap();

        assert_eq!(
            walked(tmp.path()),
            vec![
                PathBuf::from("Debug/app.cs"),
                PathBuf::from("project/my.venv/app.py"),
                PathBuf::from("src/bin"),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn walk_keeps_links_to_files_but_not_to_directories() {
        use std::os::unix::fs::symlink;

        let tmp = assert_fs::TempDir::new().unwrap();
        tmp.child("a.py").write_str("x").unwrap();
        tmp.child("real/c.py").write_str("x").unwrap();
        symlink(tmp.path().join("real/c.py"), tmp.path().join("link.py")).unwrap();
        symlink(tmp.path().join("real"), tmp.path().join("linkdir")).unwrap();

        assert_eq!(
            walked(tmp.path()),
            vec![
                PathBuf::from("a.py"),
                PathBuf::from("link.py"),
                PathBuf::from("real/c.py"),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn walk_fails_whole_when_a_directory_is_unreadable() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        let tmp = assert_fs::TempDir::new().unwrap();
        tmp.child("a.py").write_str("x").unwrap();
        tmp.child("locked/b.py").write_str("x").unwrap();
        let locked = tmp.path().join("locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users can read the directory anyway; nothing to check then.
        let readable = fs::read_dir(&locked).is_ok();
        let result = walk(tmp.path());
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        if readable {
            return;
        }
        assert!(matches!(result, Err(AppError::WalkDir(_))));
    }

    #[test]
    fn walk_missing_root_fails() {
        let tmp = assert_fs::TempDir::new().unwrap();
        let err = walk(&tmp.path().join("nope")).unwrap_err();
        assert!(matches!(err, AppError::RootNotFound(_)));
    }
}
