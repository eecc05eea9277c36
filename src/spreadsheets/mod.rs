pub mod export_csv;

pub use export_csv::{
    export_filename, offer_export_row, to_csv, to_csv_redacted, CsvRow, BUYER_EXPORT_PREFIX,
    FULL_EXPORT_PREFIX,
};
