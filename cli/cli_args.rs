use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Args, Debug, Clone, Default)]
pub struct ProjectConfigOpts {
    #[arg(
        long,
        help = "Directory to bundle (default: $CODEBUNDLE_ROOT or the current dir).",
        help_heading = "Project Setup",
        value_name = "PATH"
    )]
    pub root: Option<PathBuf>,

    #[arg(
        long,
        help = "Path of the TOML config file (default: <root>/.codebundle.toml).",
        value_name = "CONFIG_FILE",
        conflicts_with = "no_config",
        help_heading = "Project Setup"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        help = "Disable loading any TOML config file.",
        conflicts_with = "config",
        help_heading = "Project Setup"
    )]
    pub no_config: bool,
}

#[derive(Parser, Debug)]
#[command(
    name = "codebundle",
    author,
    version,
    about = "Bundle source files from a directory tree into a single file.",
    long_about = "codebundle collects the source files of the selected languages under a directory \n(skipping bin, debug, obj, venv, .vs and .idea), orders them and concatenates them \ninto one output file. Arguments can be replayed from a response file with @FILE.",
    help_template = "{about-section}\nUsage: {usage}\n\n{all-args}{after-help}",
    after_help = "EXAMPLES:\n  codebundle bundle -o bundle.txt -l python -l c# --note\n  codebundle bundle -o all.txt -l all -s type --remove-empty-lines -a \"Ada\"\n  codebundle create-rsp\n  codebundle @bundle.rsp",
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(short, long, action = clap::ArgAction::Count, global = true, help = "Increase message verbosity (-v, -vv).")]
    pub verbose: u8,

    #[arg(
        short,
        long,
        global = true,
        help = "Silence informational messages and warnings."
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    #[command(
        visible_alias = "b",
        about = "Bundle code files into a single file."
    )]
    Bundle(BundleArgs),

    #[command(
        name = "create-rsp",
        about = "Interactively create a response file (bundle.rsp) for the bundle command."
    )]
    CreateRsp(CreateRspArgs),

    #[command(about = "Print a shell completion script.")]
    Completion(CompletionArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct BundleArgs {
    #[clap(flatten)]
    pub project_config: ProjectConfigOpts,

    #[arg(
        short = 'o',
        long,
        required = true,
        value_name = "FILE",
        help = "File path and name for the bundled output. Must not exist yet.",
        help_heading = "Bundle"
    )]
    pub output: Option<PathBuf>,

    #[arg(
        short = 'l',
        long = "language",
        required = true,
        value_name = "LANGUAGE",
        value_delimiter = ',',
        action = clap::ArgAction::Append,
        help = "Language to include: c#, javascript, python or all. Repeatable.",
        help_heading = "Bundle"
    )]
    pub languages: Vec<String>,

    #[arg(
        short = 'n',
        long,
        help = "Write a '// Source: <path>' line before each file.",
        help_heading = "Bundle"
    )]
    pub note: bool,

    #[arg(
        short = 's',
        long,
        value_name = "KEY",
        help = "Sort files by 'name' or 'type' (extension) [default: name].",
        help_heading = "Bundle"
    )]
    pub sort: Option<String>,

    #[arg(
        long,
        help = "Remove empty lines from the bundled content (also accepted as -re).",
        help_heading = "Bundle"
    )]
    pub remove_empty_lines: bool,

    #[arg(
        short = 'a',
        long,
        value_name = "NAME",
        help = "Author noted at the top of the bundle.",
        help_heading = "Bundle"
    )]
    pub author: Option<String>,

    #[arg(
        long,
        help = "Skip files that cannot be read instead of aborting the bundle.",
        help_heading = "Bundle"
    )]
    pub skip_unreadable: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct CreateRspArgs {
    #[arg(
        long,
        value_name = "DIR",
        help = "Directory to write bundle.rsp into (default: current dir)."
    )]
    pub dir: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct CompletionArgs {
    #[arg(
        long,
        value_name = "SHELL",
        help = "Shell to generate completions for (bash, zsh, fish) [default: bash]"
    )]
    pub shell: Option<String>,
}
