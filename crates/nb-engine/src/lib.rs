mod combinations;
mod driver;
mod ranges;
mod render;
mod scanner;

pub use combinations::{CombinationSpace, Combinations};
pub use driver::{
    expand_file, expand_into_file, expand_to_writer, plan_expansion, write_documents,
    ExpandFileOptions, ExpansionPlan, ExpansionReport, ExpansionSummary,
};
pub use ranges::{
    collect_ranges, ordered_ranges, DefaultRangeProvider, RangeAnswer, RangeProvider,
};
pub use render::TemplateRenderer;
pub use scanner::{require_identities, scan_identities, scan_markers, MarkerMatch};
