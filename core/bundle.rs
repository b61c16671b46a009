use crate::error::{AppError, Result};
use crate::walk::CandidateFile;
use log;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// What to do when a selected file cannot be read mid-bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadFailurePolicy {
    /// Stop at the first unreadable file and remove the partial output.
    #[default]
    Abort,
    /// Log a warning, leave the file out and keep going.
    Skip,
}

#[derive(Debug, Clone, Default)]
pub struct BundleOptions {
    pub note: bool,
    pub remove_empty_lines: bool,
    pub author: Option<String>,
    pub on_read_failure: ReadFailurePolicy,
}

impl BundleOptions {
    fn author_header(&self) -> Option<&str> {
        self.author
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BundleSummary {
    pub output: PathBuf,
    pub files_written: usize,
    pub skipped: Vec<PathBuf>,
    pub bytes_written: u64,
}

/// Drops every line that is empty once its terminator is removed. Other
/// lines, whitespace-only ones included, keep their exact bytes.
pub fn remove_empty_lines(content: &str) -> String {
    content
        .split_inclusive('\n')
        .filter(|line| !line.trim_end_matches(['\r', '\n']).is_empty())
        .collect()
}

/// Streams the bundle for `files` into any writer.
pub struct BundleWriter<W: Write> {
    out: W,
    options: BundleOptions,
    bytes_written: u64,
}

impl<W: Write> BundleWriter<W> {
    pub fn new(out: W, options: BundleOptions) -> Self {
        Self {
            out,
            options,
            bytes_written: 0,
        }
    }

    fn emit(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.bytes_written += text.len() as u64;
        Ok(())
    }

    /// Writes the header and every readable file, then flushes.
    /// Failures of the underlying writer surface as [`AppError::Io`].
    pub fn write_files(mut self, files: &[CandidateFile]) -> Result<(W, BundleSummary)> {
        let mut summary = BundleSummary::default();

        let author = self.options.author_header().map(str::to_owned);
        if let Some(author) = author {
            self.emit(&format!("// Author: {}\n", author))?;
        }

        for file in files {
            let content = match fs::read_to_string(&file.path) {
                Ok(content) => content,
                Err(e) => match self.options.on_read_failure {
                    ReadFailurePolicy::Abort => {
                        log::error!("Failed to read {}: {}", file.path.display(), e);
                        return Err(AppError::FileRead {
                            path: file.path.clone(),
                            source: e,
                        });
                    }
                    ReadFailurePolicy::Skip => {
                        log::warn!("Skipping unreadable file {}: {}", file.path.display(), e);
                        summary.skipped.push(file.relative_path.clone());
                        continue;
                    }
                },
            };

            log::trace!("Bundling {}", file.display_path());
            if self.options.note {
                self.emit(&format!("// Source: {}\n", file.display_path()))?;
            }
            let content = if self.options.remove_empty_lines {
                remove_empty_lines(&content)
            } else {
                content
            };
            self.emit(&content)?;
            if !content.is_empty() && !content.ends_with('\n') {
                self.emit("\n")?;
            }
            self.emit("\n")?;
            summary.files_written += 1;
        }

        self.out.flush()?;
        summary.bytes_written = self.bytes_written;
        Ok((self.out, summary))
    }
}

/// Fails with [`AppError::OutputExists`] when `output` is already present.
pub fn ensure_output_absent(output: &Path) -> Result<()> {
    // symlink_metadata so a dangling link still counts as occupied.
    match fs::symlink_metadata(output) {
        Ok(_) => Err(AppError::OutputExists(output.to_path_buf())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(AppError::FileWrite {
            path: output.to_path_buf(),
            source: e,
        }),
    }
}

fn create_output(output: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(output)
        .map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => AppError::OutputExists(output.to_path_buf()),
            _ => AppError::FileWrite {
                path: output.to_path_buf(),
                source: e,
            },
        })
}

/// Creates `output` exclusively and writes the bundle into it.
///
/// If anything fails after creation the partial file is removed, so a
/// failed run never blocks the next one through the overwrite guard.
pub fn write_bundle(
    output: &Path,
    files: &[CandidateFile],
    options: BundleOptions,
) -> Result<BundleSummary> {
    let file = create_output(output)?;
    log::info!(
        "Writing bundle of {} files to {}",
        files.len(),
        output.display()
    );

    let writer = BundleWriter::new(BufWriter::new(file), options);
    let result = writer.write_files(files);
    match result {
        Ok((_, mut summary)) => {
            summary.output = output.to_path_buf();
            log::info!(
                "Bundle complete: {} files, {} skipped, {} bytes.",
                summary.files_written,
                summary.skipped.len(),
                summary.bytes_written
            );
            Ok(summary)
        }
        Err(err) => {
            if let Err(e) = fs::remove_file(output) {
                log::warn!(
                    "Could not remove partial output {}: {}",
                    output.display(),
                    e
                );
            } else {
                log::debug!("Removed partial output {}", output.display());
            }
            Err(match err {
                AppError::Io(source) => AppError::FileWrite {
                    path: output.to_path_buf(),
                    source,
                },
                other => other,
            })
        }
    }
}
