use chrono::NaiveDate;
use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::domain::columns::{COLUMNS, PERSONAL_LABELS};
use crate::domain::offer::Offer;
use crate::errors::ServerError;

pub const FULL_EXPORT_PREFIX: &str = "oferti";
pub const BUYER_EXPORT_PREFIX: &str = "oferti_za_kuvuvach";

/// One exported line: (label, value) pairs in column order.
pub type CsvRow = Vec<(String, String)>;

/// Every column, visible or not, with numbers in display form.
pub fn offer_export_row(offer: &Offer) -> CsvRow {
    COLUMNS
        .iter()
        .map(|c| (c.label.to_string(), offer.display(c.field)))
        .collect()
}

pub fn export_filename(prefix: &str, date: NaiveDate) -> String {
    format!("{prefix}_{}.csv", date.format("%Y-%m-%d"))
}

/// CSV text for `rows`, or `None` when there is nothing to export.
///
/// The header comes from the first row's labels; later rows are read by
/// label, a missing label giving an empty cell. Every field is quoted, quotes
/// inside values are doubled, lines end in `\n` with none after the last row.
pub fn to_csv(rows: &[CsvRow]) -> Result<Option<String>, ServerError> {
    let Some(first) = rows.first() else {
        return Ok(None);
    };
    let headers: Vec<&str> = first.iter().map(|(label, _)| label.as_str()).collect();

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer
        .write_record(&headers)
        .map_err(|e| ServerError::Export(format!("Failed to write header: {e}")))?;

    for row in rows {
        let cells = headers.iter().map(|h| {
            row.iter()
                .find(|(label, _)| label == h)
                .map(|(_, value)| value.as_str())
                .unwrap_or("")
        });
        writer
            .write_record(cells)
            .map_err(|e| ServerError::Export(format!("Failed to write row: {e}")))?;
    }

    let buffer = writer
        .into_inner()
        .map_err(|e| ServerError::Export(format!("Failed to flush csv: {e}")))?;
    let mut text = String::from_utf8(buffer)
        .map_err(|e| ServerError::Export(format!("csv is not utf-8: {e}")))?;
    if text.ends_with('\n') {
        text.pop();
    }

    Ok(Some(text))
}

/// Same as [`to_csv`] without the name, phone and email columns.
pub fn to_csv_redacted(rows: &[CsvRow]) -> Result<Option<String>, ServerError> {
    let redacted: Vec<CsvRow> = rows
        .iter()
        .map(|row| {
            row.iter()
                .filter(|(label, _)| !PERSONAL_LABELS.contains(&label.as_str()))
                .cloned()
                .collect()
        })
        .collect();

    to_csv(&redacted)
}
