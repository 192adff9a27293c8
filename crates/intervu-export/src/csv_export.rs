use std::io::Write;

use csv::{QuoteStyle, WriterBuilder};

use crate::ExportError;

/// One row of the session-history table, already ordered for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRecord {
    pub role: String,
    pub date: String,
    pub status: String,
    pub score: Option<u32>,
}

pub const HISTORY_COLUMNS: [&str; 4] = ["Role", "Date", "Status", "Score"];

/// Writes the history table as CSV with text fields quoted and numeric
/// scores bare; a session without a score gets an empty cell.
pub fn write_history_csv<W: Write>(
    writer: W,
    records: &[HistoryRecord],
) -> Result<(), ExportError> {
    let mut out = WriterBuilder::new()
        .quote_style(QuoteStyle::NonNumeric)
        .from_writer(writer);

    out.write_record(HISTORY_COLUMNS)
        .map_err(|err| ExportError::Csv(err.to_string()))?;
    for record in records {
        let score = record
            .score
            .map(|value| value.to_string())
            .unwrap_or_default();
        out.write_record([
            record.role.as_str(),
            record.date.as_str(),
            record.status.as_str(),
            score.as_str(),
        ])
        .map_err(|err| ExportError::Csv(err.to_string()))?;
    }

    out.flush().map_err(|err| ExportError::Csv(err.to_string()))
}
