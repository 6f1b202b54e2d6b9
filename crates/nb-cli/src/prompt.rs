use std::io::{BufRead, Write};

use nb_core::{Identity, NumBurstError, DEFAULT_RANGE_END, DEFAULT_RANGE_START};
use nb_engine::{RangeAnswer, RangeProvider};

use crate::map_cli_io;

pub(crate) fn prompt_input_from(
    prefix: &str,
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
) -> Result<String, NumBurstError> {
    write!(writer, "{}", prefix).map_err(map_cli_io)?;
    writer.flush().map_err(map_cli_io)?;
    let mut input = String::new();
    reader.read_line(&mut input).map_err(map_cli_io)?;
    Ok(input.trim_end_matches(&['\r', '\n'][..]).to_string())
}

fn parse_bound(raw: &str, identity: &Identity) -> Result<Option<i64>, NumBurstError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse::<i64>().map(Some).map_err(|_| {
        NumBurstError::new(
            "CLI_RANGE_PARSE",
            format!("Invalid number for {}: {}", identity, trimmed),
        )
    })
}

/// Asks for the start and end of each missing range on a line-based terminal.
/// Blank answers keep the defaults.
pub(crate) struct PromptRangeProvider<'a> {
    reader: &'a mut dyn BufRead,
    writer: &'a mut dyn Write,
}

impl<'a> PromptRangeProvider<'a> {
    pub(crate) fn new(reader: &'a mut dyn BufRead, writer: &'a mut dyn Write) -> Self {
        Self { reader, writer }
    }
}

impl RangeProvider for PromptRangeProvider<'_> {
    fn provide(&mut self, identity: &Identity) -> Result<RangeAnswer, NumBurstError> {
        let start = prompt_input_from(
            &format!("Start for {} [{}]: ", identity, DEFAULT_RANGE_START),
            self.reader,
            self.writer,
        )?;
        let start = parse_bound(&start, identity)?;
        let end = prompt_input_from(
            &format!("End for {} [{}]: ", identity, DEFAULT_RANGE_END),
            self.reader,
            self.writer,
        )?;
        let end = parse_bound(&end, identity)?;
        Ok(RangeAnswer { start, end })
    }
}
