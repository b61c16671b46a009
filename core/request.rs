use crate::bundle::{self, BundleOptions, BundleSummary, ReadFailurePolicy};
use crate::error::{AppError, Result};
use crate::languages;
use crate::order::{self, SortKey};
use crate::select;
use crate::walk;
use log;
use std::path::{Path, PathBuf};

/// Everything one bundling run needs.
#[derive(Debug, Clone, Default)]
pub struct BundleRequest {
    pub output: Option<PathBuf>,
    pub languages: Vec<String>,
    pub note: bool,
    pub sort: SortKey,
    pub remove_empty_lines: bool,
    pub author: Option<String>,
    pub on_read_failure: ReadFailurePolicy,
}

impl BundleRequest {
    /// Checks required arguments and the overwrite guard. Nothing is written.
    pub fn validate(&self) -> Result<&Path> {
        let output = self
            .output
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| AppError::MissingArgument("an output file is required".to_string()))?;

        if self.languages.iter().all(|l| l.trim().is_empty()) {
            return Err(AppError::MissingArgument(
                "at least one language is required".to_string(),
            ));
        }

        bundle::ensure_output_absent(output)?;
        Ok(output)
    }

    fn options(&self) -> BundleOptions {
        BundleOptions {
            note: self.note,
            remove_empty_lines: self.remove_empty_lines,
            author: self.author.clone(),
            on_read_failure: self.on_read_failure,
        }
    }
}

/// Validates `request`, then walks `root`, selects, orders and writes.
pub fn run_bundle(root: &Path, request: &BundleRequest) -> Result<BundleSummary> {
    let output = request.validate()?;
    log::debug!("Bundle request validated: {:?}", request);

    let extensions = languages::resolve(&request.languages);
    if extensions.is_empty() {
        log::warn!(
            "None of the requested languages {:?} is supported; the bundle will be empty.",
            request.languages
        );
    }

    let candidates = walk::walk(root)?;
    let selected = select::select(candidates, &extensions);
    let ordered = order::order(selected, request.sort);

    bundle::write_bundle(output, &ordered, request.options())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn missing_output_and_languages_are_rejected() {
        let request = BundleRequest {
            languages: vec!["python".to_string()],
            ..Default::default()
        };
        assert!(matches!(
            request.validate(),
            Err(AppError::MissingArgument(_))
        ));

        let request = BundleRequest {
            output: Some(PathBuf::from("out.txt")),
            languages: vec!["  ".to_string()],
            ..Default::default()
        };
        assert!(matches!(
            request.validate(),
            Err(AppError::MissingArgument(_))
        ));
    }

    #[test]
    fn unsupported_languages_produce_an_empty_bundle() {
        let tmp = assert_fs::TempDir::new().unwrap();
        tmp.child("src/a.py").write_str("print(1)\n").unwrap();
        let out = assert_fs::TempDir::new().unwrap();
        let output = out.path().join("bundle.txt");
        let request = BundleRequest {
            output: Some(output.clone()),
            languages: vec!["cobol".to_string()],
            ..Default::default()
        };

        let summary = run_bundle(tmp.path(), &request).unwrap();
        assert_eq!(summary.files_written, 0);
        assert_eq!(std::fs::read_to_string(output).unwrap(), "");
    }
}
