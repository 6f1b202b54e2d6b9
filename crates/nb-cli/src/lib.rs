use std::ffi::OsString;
use std::io::{self, IsTerminal};

use clap::Parser;
use nb_core::NumBurstError;

mod cli_args;
mod commands;
mod error_map;
mod preview;
mod prompt;
mod range_config;
mod report;

pub(crate) use cli_args::{Cli, ExpandArgs, InteractiveArgs, Mode, PreviewArgs, DEFAULT_OUTPUT_PATH};
pub(crate) use commands::{run_expand_with, run_interactive_with, run_preview_with};
pub(crate) use error_map::{
    emit_error, map_cli_io, map_cli_ranges_invalid, map_cli_ranges_read, map_cli_template_read,
};
pub(crate) use preview::format_preview;
pub(crate) use prompt::{prompt_input_from, PromptRangeProvider};
pub(crate) use range_config::resolve_supplied_ranges;
pub(crate) use report::emit_report;

pub fn run_cli_from_args<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(error) => {
            let _ = error.print();
            return error.exit_code();
        }
    };
    match run(cli) {
        Ok(code) => code,
        Err(error) => emit_error(error),
    }
}

fn run(cli: Cli) -> Result<i32, NumBurstError> {
    match cli.command {
        Mode::Expand(args) => run_expand(args),
        Mode::Preview(args) => run_preview(args),
        Mode::Interactive(args) => run_interactive(args),
    }
}

/// Range prompts go to stderr so stdout carries only the result protocol.
fn run_expand(args: ExpandArgs) -> Result<i32, NumBurstError> {
    let report = {
        let stdin = io::stdin();
        let mut reader = stdin.lock();
        let mut writer = io::stderr();
        run_expand_with(args, &mut reader, &mut writer)?
    };
    Ok(emit_report(&report))
}

fn run_preview(args: PreviewArgs) -> Result<i32, NumBurstError> {
    run_preview_with(args, &mut io::stdout())?;
    Ok(0)
}

fn run_interactive(args: InteractiveArgs) -> Result<i32, NumBurstError> {
    let report = {
        let stdin = io::stdin();
        let mut reader = stdin.lock();
        let mut writer = io::stdout();
        let color = !args.no_color && writer.is_terminal();
        run_interactive_with(color, &mut reader, &mut writer)?
    };
    println!();
    Ok(emit_report(&report))
}

#[cfg(test)]
mod cli_test_support;
