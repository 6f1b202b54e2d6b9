use clap::{Args, Parser, Subcommand};

pub(crate) const DEFAULT_OUTPUT_PATH: &str = "output.txt";

#[derive(Debug, Parser)]
#[command(name = "numburst")]
#[command(about = "Expand $numX$ template markers over every combination of numeric ranges")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Mode,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Mode {
    Expand(ExpandArgs),
    Preview(PreviewArgs),
    Interactive(InteractiveArgs),
}

#[derive(Debug, Args)]
pub(crate) struct ExpandArgs {
    #[arg(long = "template")]
    pub(crate) template: String,
    #[arg(long = "output", default_value = DEFAULT_OUTPUT_PATH)]
    pub(crate) output: String,
    /// `ID=START:END`, repeatable. Overrides entries from --ranges-file.
    #[arg(long = "range")]
    pub(crate) ranges: Vec<String>,
    #[arg(long = "ranges-file")]
    pub(crate) ranges_file: Option<String>,
    /// Use 1..=10 for identities without a supplied range instead of asking.
    #[arg(long = "no-prompt")]
    pub(crate) no_prompt: bool,
}

#[derive(Debug, Args)]
pub(crate) struct PreviewArgs {
    #[arg(long = "template")]
    pub(crate) template: String,
    #[arg(long = "no-color")]
    pub(crate) no_color: bool,
}

#[derive(Debug, Args)]
pub(crate) struct InteractiveArgs {
    /// Also implied when stdout is not a terminal.
    #[arg(long = "no-color")]
    pub(crate) no_color: bool,
}
