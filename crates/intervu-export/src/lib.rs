//! Export collaborators: the CSV writer for session history and the seam
//! for the external PDF renderer, including the A4 pagination arithmetic
//! the renderer is driven with.

mod csv_export;
mod pdf;

pub use csv_export::{write_history_csv, HistoryRecord, HISTORY_COLUMNS};
pub use pdf::{
    plan_pages, PageSlice, PdfExporter, RenderedRegion, A4_HEIGHT_MM, A4_WIDTH_MM,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv export failed: {0}")]
    Csv(String),
    #[error("pdf export failed: {0}")]
    Pdf(String),
}
