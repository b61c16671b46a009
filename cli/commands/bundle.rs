use crate::cli_args::BundleArgs;
use crate::output;
use anyhow::{Context, Result};
use codebundle_core::{self as core, BundleDefaults, BundleRequest, Config, ReadFailurePolicy, SortKey};
use log;

pub fn handle_bundle_command(args: &BundleArgs, quiet: bool) -> Result<()> {
    let root = Config::determine_root(args.project_config.root.as_ref())
        .context("Failed to determine the directory to bundle")?;
    log::info!("Bundle root determined: {}", root.display());

    let config = Config::load(
        &root,
        args.project_config.config.as_ref(),
        args.project_config.no_config,
    )
    .context("Failed to load configuration")?;

    let request = build_request(args, &config.bundle);
    let summary = core::run_bundle(&root, &request).context("Failed to create bundle")?;

    output::print_bundle_summary(&summary, quiet);
    Ok(())
}

/// Merges command-line flags over configured defaults. A flag given on the
/// command line always wins; boolean flags can only switch an option on.
fn build_request(args: &BundleArgs, defaults: &BundleDefaults) -> BundleRequest {
    let sort = args.sort.as_deref().unwrap_or(&defaults.sort);
    let on_read_failure = if args.skip_unreadable || defaults.skip_unreadable {
        ReadFailurePolicy::Skip
    } else {
        ReadFailurePolicy::Abort
    };

    BundleRequest {
        output: args.output.clone(),
        languages: args.languages.clone(),
        note: args.note || defaults.note,
        sort: SortKey::parse(sort),
        remove_empty_lines: args.remove_empty_lines || defaults.remove_empty_lines,
        author: args.author.clone().or_else(|| defaults.author.clone()),
        on_read_failure,
    }
}
