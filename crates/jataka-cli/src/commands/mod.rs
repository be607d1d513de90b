//! Command implementations for jataka-cli

pub mod datasets;
pub mod load;
pub mod mode;
pub mod page;
pub mod resolve;
pub mod scores;
pub mod stats;
pub mod status;

pub use datasets::run_datasets;
pub use load::run_load;
pub use mode::run_mode;
pub use page::run_page;
pub use resolve::run_resolve;
pub use scores::run_scores;
pub use stats::run_stats;
pub use status::run_status;

use colored::{ColoredString, Colorize};
use jataka_data::SourceKind;

/// Source label, highlighted when mockup data stands in for real data.
pub(crate) fn source_label(source: SourceKind) -> ColoredString {
    match source {
        SourceKind::Real => "real".green(),
        SourceKind::Mockup => "mockup".yellow(),
    }
}
