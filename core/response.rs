use crate::bundle;
use crate::error::{AppError, Result};
use crate::languages;
use crate::order::SortKey;
use log;
use std::fs;
use std::path::{Path, PathBuf};

pub const RESPONSE_FILE_NAME: &str = "bundle.rsp";

/// Raw answers collected by the interactive `create-rsp` flow.
#[derive(Debug, Clone, Default)]
pub struct ResponseAnswers {
    pub output: String,
    /// Comma-separated language ids.
    pub languages: String,
    pub note: String,
    pub sort: String,
    pub remove_empty_lines: String,
    pub author: String,
}

/// A validated, replayable `bundle` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseFile {
    pub output: String,
    pub languages: Vec<String>,
    pub note: bool,
    pub sort: SortKey,
    pub remove_empty_lines: bool,
    pub author: Option<String>,
}

fn is_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

impl ResponseFile {
    /// Validates the answers. A relative output path is checked against `base`.
    ///
    /// Stricter than `bundle` itself: the sort key must be "name" or "type".
    pub fn from_answers(answers: &ResponseAnswers, base: &Path) -> Result<Self> {
        let output = answers.output.trim();
        if output.is_empty() {
            return Err(AppError::MissingArgument(
                "Output file path cannot be empty.".to_string(),
            ));
        }
        if output.contains(char::is_whitespace) {
            return Err(AppError::InvalidArgument(
                "Output file path cannot contain spaces.".to_string(),
            ));
        }
        bundle::ensure_output_absent(&base.join(output))?;

        let languages: Vec<String> = answers
            .languages
            .split(',')
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect();
        if languages.is_empty() {
            return Err(AppError::MissingArgument(
                "At least one programming language must be specified.".to_string(),
            ));
        }
        for language in languages.iter().filter(|l| !languages::is_known(l.as_str())) {
            log::warn!(
                "Language '{}' is not supported and will be ignored when bundling.",
                language
            );
        }

        let sort = SortKey::parse_strict(&answers.sort).ok_or_else(|| {
            AppError::InvalidArgument(format!(
                "Invalid sort option '{}'. Please specify 'name' or 'type'.",
                answers.sort.trim()
            ))
        })?;

        let author = Some(answers.author.trim())
            .filter(|a| !a.is_empty())
            .map(String::from);

        Ok(Self {
            output: output.to_string(),
            languages,
            note: is_yes(&answers.note),
            sort,
            remove_empty_lines: is_yes(&answers.remove_empty_lines),
            author,
        })
    }

    /// Equivalent `bundle` arguments, starting with the subcommand name.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![
            "bundle".to_string(),
            "--output".to_string(),
            self.output.clone(),
        ];
        for language in &self.languages {
            args.push("--language".to_string());
            args.push(language.clone());
        }
        if self.note {
            args.push("--note".to_string());
        }
        args.push("--sort".to_string());
        args.push(self.sort.to_string());
        if self.remove_empty_lines {
            args.push("--remove-empty-lines".to_string());
        }
        if let Some(author) = &self.author {
            args.push("--author".to_string());
            args.push(author.clone());
        }
        args
    }

    pub fn to_command_line(&self) -> String {
        self.to_args()
            .iter()
            .map(|arg| quote(arg))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Writes `bundle.rsp` into `dir`, replacing any previous one.
    pub fn save(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(RESPONSE_FILE_NAME);
        fs::write(&path, format!("{}\n", self.to_command_line())).map_err(|e| {
            AppError::FileWrite {
                path: path.clone(),
                source: e,
            }
        })?;
        log::info!("Response file written to {}", path.display());
        Ok(path)
    }
}

/// Quotes a token when it would not survive [`tokenize`] unchanged.
pub fn quote(token: &str) -> String {
    if !token.is_empty() && !token.contains(|c: char| c.is_whitespace() || c == '"') {
        return token.to_string();
    }
    let mut quoted = String::with_capacity(token.len() + 2);
    quoted.push('"');
    for c in token.chars() {
        if c == '"' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

/// Splits response-file text into arguments.
///
/// Whitespace (newlines included) separates tokens. Double quotes group a
/// token; inside them `\"` and `\\` are escapes. Backslashes outside quotes
/// are literal.
pub fn tokenize(content: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut in_quotes = false;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                in_token = true;
            }
            '\\' if in_quotes && matches!(chars.peek().copied(), Some('"') | Some('\\')) => {
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                }
            }
            c if c.is_whitespace() && !in_quotes => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if in_quotes {
        return Err(AppError::InvalidArgument(
            "Unterminated quote in response file".to_string(),
        ));
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}

/// Reads and tokenizes a response file.
pub fn read_args(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| AppError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    tokenize(&content)
}
