use anyhow::{Context, Result};
use codebundle_core::response;
use log;
use std::path::Path;

/// Legacy two-letter spelling of `--remove-empty-lines`.
const LEGACY_REMOVE_EMPTY_LINES: &str = "-re";

fn normalize(arg: String) -> String {
    if arg == LEGACY_REMOVE_EMPTY_LINES {
        "--remove-empty-lines".to_string()
    } else {
        arg
    }
}

/// Replaces every `@FILE` argument with the tokens stored in that response
/// file and rewrites `-re`. The first argument (the binary name) is kept as is.
pub fn expand_args(raw_args: Vec<String>) -> Result<Vec<String>> {
    let mut args = raw_args.into_iter();
    let mut expanded: Vec<String> = args.next().into_iter().collect();

    for arg in args {
        match arg.strip_prefix('@').filter(|p| !p.is_empty()) {
            Some(rsp_path) => {
                let tokens = response::read_args(Path::new(rsp_path))
                    .with_context(|| format!("Failed to read response file '{}'", rsp_path))?;
                log::debug!("Expanded @{} into {} arguments", rsp_path, tokens.len());
                expanded.extend(tokens.into_iter().map(normalize));
            }
            None => expanded.push(normalize(arg)),
        }
    }
    Ok(expanded)
}
