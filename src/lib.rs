//! Library interface for brewdigest
//!
//! Turns a `brew info --json=v2 --installed` snapshot and a `brew leaves`
//! list into a categorized Markdown report. The binary is a thin CLI over
//! [`generate`] and [`report::write_report`].

pub mod analysis;
pub mod category;
pub mod colors;
pub mod error;
pub mod report;
pub mod snapshot;

use std::path::Path;

// Re-export commonly used items
pub use analysis::{Analysis, CaskSummary, Package};
pub use category::{Category, categorize};
pub use error::{DigestError, Result};
pub use snapshot::{LeafSet, Snapshot};

/// Default input and output file names
pub const DEFAULT_DATA_FILE: &str = "brew_data.json";
pub const DEFAULT_LEAVES_FILE: &str = "brew_leaves.txt";
pub const DEFAULT_REPORT_FILE: &str = "BREW_REPORT.md";

/// Load both inputs, classify everything and render the report
pub fn generate(data_path: &Path, leaves_path: &Path) -> Result<(Analysis, String)> {
    let (snapshot, leaves) = snapshot::load(data_path, leaves_path)?;
    let analysis = Analysis::new(&snapshot, &leaves);
    let report = report::render(&analysis);
    Ok((analysis, report))
}
