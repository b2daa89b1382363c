//! mhtrack-export
//!
//! Printable session summary: label catalog, Tera rendering, DOCX output.

pub mod docx;
pub mod error;
pub mod labels;
pub mod render;
pub mod styles;

use mhtrack_core::SessionSummary;
use tracing::debug;

pub use error::ExportError;
pub use labels::Labels;
pub use styles::DocumentStyles;

/// Render `summary` and pack it as a DOCX document.
pub fn summary_docx(
    summary: &SessionSummary,
    labels: &Labels,
    styles: &DocumentStyles,
) -> Result<Vec<u8>, ExportError> {
    let rendered = render::render_summary(summary, labels)?;
    let bytes = docx::generate_docx(&rendered, styles)?;
    debug!(entries = summary.entries.len(), bytes = bytes.len(), "summary docx generated");
    Ok(bytes)
}
