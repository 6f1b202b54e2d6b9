use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use nb_core::{NumBurstError, RangeMap};
use nb_engine::{
    expand_file, expand_into_file, require_identities, DefaultRangeProvider, ExpandFileOptions,
    ExpansionReport,
};

use crate::{
    format_preview, map_cli_io, map_cli_template_read, prompt_input_from,
    resolve_supplied_ranges, ExpandArgs, PreviewArgs, PromptRangeProvider, DEFAULT_OUTPUT_PATH,
};

pub(crate) fn run_expand_with(
    args: ExpandArgs,
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
) -> Result<ExpansionReport, NumBurstError> {
    let ranges = resolve_supplied_ranges(args.ranges_file.as_deref(), &args.ranges)?;
    let options = ExpandFileOptions {
        template_path: PathBuf::from(&args.template),
        output_path: PathBuf::from(&args.output),
        ranges,
    };

    if args.no_prompt {
        expand_file(options, &mut DefaultRangeProvider)
    } else {
        expand_file(options, &mut PromptRangeProvider::new(reader, writer))
    }
}

pub(crate) fn run_preview_with(
    args: PreviewArgs,
    writer: &mut dyn Write,
) -> Result<(), NumBurstError> {
    let template = fs::read_to_string(&args.template).map_err(map_cli_template_read)?;
    let identities = require_identities(&template)?;
    write!(writer, "{}", format_preview(&template, &identities, !args.no_color))
        .map_err(map_cli_io)
}

/// Line-mode session: asks for paths, shows the preview, then prompts for
/// every range before expanding.
pub(crate) fn run_interactive_with(
    color: bool,
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
) -> Result<ExpansionReport, NumBurstError> {
    writeln!(writer, "numburst template expander").map_err(map_cli_io)?;
    let template_path = prompt_input_from("Template path: ", reader, writer)?;
    let template_path = template_path.trim();
    if !Path::new(template_path).is_file() {
        return Err(NumBurstError::new(
            "CLI_TEMPLATE_NOT_FOUND",
            format!("Template file does not exist: {}", template_path),
        ));
    }

    let output_path = prompt_input_from(
        &format!("Output path [{}]: ", DEFAULT_OUTPUT_PATH),
        reader,
        writer,
    )?;
    let output_path = match output_path.trim() {
        "" => DEFAULT_OUTPUT_PATH,
        trimmed => trimmed,
    };

    let template = fs::read_to_string(template_path).map_err(map_cli_template_read)?;
    let identities = require_identities(&template)?;
    writeln!(writer, "{}", format_preview(&template, &identities, color)).map_err(map_cli_io)?;

    expand_into_file(
        &template,
        PathBuf::from(output_path),
        &RangeMap::new(),
        &mut PromptRangeProvider::new(reader, writer),
    )
}
