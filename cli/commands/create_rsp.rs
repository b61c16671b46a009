use crate::cli_args::CreateRspArgs;
use crate::output;
use anyhow::{Context, Result};
use codebundle_core::{ResponseAnswers, ResponseFile};
use log;
use std::env;
use std::io::{self, BufRead, Write};

pub fn handle_create_rsp_command(args: &CreateRspArgs, quiet: bool) -> Result<()> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    let target_dir = args.dir.clone().unwrap_or_else(|| cwd.clone());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let answers = collect_answers(&mut stdin.lock(), &mut stdout.lock())?;
    log::debug!("Collected response file answers: {:?}", answers);

    let rsp = ResponseFile::from_answers(&answers, &cwd)?;
    let path = rsp
        .save(&target_dir)
        .context("Failed to save response file")?;

    output::print_rsp_saved(&path, &rsp, quiet);
    Ok(())
}

fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<String> {
    write!(out, "{}", prompt).context("Failed to write prompt")?;
    out.flush().context("Failed to flush stdout")?;
    let mut response = String::new();
    input
        .read_line(&mut response)
        .context("Failed to read user input")?;
    Ok(response.trim_end_matches(['\r', '\n']).to_string())
}

/// Runs the prompt sequence. End of input yields empty answers, which the
/// validation step then reports.
pub fn collect_answers<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<ResponseAnswers> {
    writeln!(
        out,
        "Please provide the following information for the create-rsp command:"
    )
    .context("Failed to write prompt")?;

    Ok(ResponseAnswers {
        output: ask(input, out, "Output file path and name: ")?,
        languages: ask(input, out, "Programming languages (comma-separated): ")?,
        note: ask(input, out, "Include source code comments? (Y/N): ")?,
        sort: ask(input, out, "Sort the bundled files (name/type): ")?,
        remove_empty_lines: ask(input, out, "Remove empty lines from the bundled file? (Y/N): ")?,
        author: ask(
            input,
            out,
            "Author name to be noted at the top of the bundle file (optional): ",
        )?,
    })
}
