use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use nb_core::{Identity, NumBurstError, RangeMap};

use crate::{
    collect_ranges, ordered_ranges, require_identities, CombinationSpace, RangeProvider,
    TemplateRenderer,
};

#[derive(Debug, Clone)]
pub struct ExpandFileOptions {
    pub template_path: PathBuf,
    pub output_path: PathBuf,
    pub ranges: RangeMap,
}

/// Identities and ranges fixed for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpansionPlan {
    pub identities: Vec<Identity>,
    pub ranges: RangeMap,
    space: CombinationSpace,
}

impl ExpansionPlan {
    pub fn space(&self) -> &CombinationSpace {
        &self.space
    }

    pub fn total(&self) -> Option<u128> {
        self.space.total()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpansionSummary {
    pub identities: Vec<Identity>,
    pub ranges: RangeMap,
    pub combinations: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpansionReport {
    pub summary: ExpansionSummary,
    pub output_path: PathBuf,
}

fn map_source_read(path: &Path, error: std::io::Error) -> NumBurstError {
    NumBurstError::new(
        "EXPAND_SOURCE_READ",
        format!("Failed to read template {}: {}", path.display(), error),
    )
}

fn map_sink_create(path: &Path, error: std::io::Error) -> NumBurstError {
    NumBurstError::new(
        "EXPAND_SINK_CREATE",
        format!("Failed to create output {}: {}", path.display(), error),
    )
}

fn map_sink_write(error: std::io::Error) -> NumBurstError {
    NumBurstError::new(
        "EXPAND_SINK_WRITE",
        format!("Failed to write output: {}", error),
    )
}

/// Scans `template` and collects a range for each identity. Fails with
/// `EXPAND_EMPTY_TEMPLATE` before the provider is consulted when no marker
/// exists.
pub fn plan_expansion(
    template: &str,
    supplied: &RangeMap,
    provider: &mut dyn RangeProvider,
) -> Result<ExpansionPlan, NumBurstError> {
    let identities = require_identities(template)?;
    let ranges = collect_ranges(&identities, supplied, provider)?;
    let space = CombinationSpace::new(ordered_ranges(&identities, &ranges)?);
    Ok(ExpansionPlan {
        identities,
        ranges,
        space,
    })
}

/// Writes one rendered document plus `\n` per combination, in generator
/// order, and returns the number written.
pub fn write_documents(
    template: &str,
    plan: &ExpansionPlan,
    sink: &mut dyn Write,
) -> Result<u64, NumBurstError> {
    let renderer = TemplateRenderer::new(template, &plan.identities);
    let mut document = String::new();
    let mut written = 0u64;
    for combination in plan.space() {
        document.clear();
        renderer.render_into(&combination, &mut document)?;
        document.push('\n');
        sink.write_all(document.as_bytes()).map_err(map_sink_write)?;
        written += 1;
    }
    Ok(written)
}

pub fn expand_to_writer(
    template: &str,
    supplied: &RangeMap,
    provider: &mut dyn RangeProvider,
    sink: &mut dyn Write,
) -> Result<ExpansionSummary, NumBurstError> {
    let plan = plan_expansion(template, supplied, provider)?;
    let combinations = write_documents(template, &plan, sink)?;
    sink.flush().map_err(map_sink_write)?;
    Ok(ExpansionSummary {
        identities: plan.identities,
        ranges: plan.ranges,
        combinations,
    })
}

/// Full run against the filesystem: reads the template once, then hands it to
/// [`expand_into_file`].
pub fn expand_file(
    options: ExpandFileOptions,
    provider: &mut dyn RangeProvider,
) -> Result<ExpansionReport, NumBurstError> {
    let template = fs::read_to_string(&options.template_path)
        .map_err(|error| map_source_read(&options.template_path, error))?;
    expand_into_file(&template, options.output_path, &options.ranges, provider)
}

/// Expands already loaded template text into `output_path`. The output file is
/// only created once the template is known to contain markers and every range
/// is collected.
pub fn expand_into_file(
    template: &str,
    output_path: PathBuf,
    supplied: &RangeMap,
    provider: &mut dyn RangeProvider,
) -> Result<ExpansionReport, NumBurstError> {
    let plan = plan_expansion(template, supplied, provider)?;

    let mut sink = create_output(&output_path)?;
    let combinations = write_documents(template, &plan, &mut sink)?;
    sink.flush().map_err(map_sink_write)?;

    Ok(ExpansionReport {
        summary: ExpansionSummary {
            identities: plan.identities,
            ranges: plan.ranges,
            combinations,
        },
        output_path,
    })
}

fn create_output(path: &Path) -> Result<BufWriter<File>, NumBurstError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|error| map_sink_create(path, error))?;
        }
    }
    let file = File::create(path).map_err(|error| map_sink_create(path, error))?;
    Ok(BufWriter::new(file))
}
