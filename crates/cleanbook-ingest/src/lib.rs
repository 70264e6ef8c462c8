pub mod cleaner;
pub mod columns;
pub mod error;
pub mod record;

pub use cleaner::{
    clean_csv, cleaned_path, decode_upload, read_csv_file, write_csv, CleanReport, CleanedCsv,
    TablePreview,
};
pub use columns::{header_key, ColumnMap, Field, ResolvedColumn};
pub use error::{IngestError, Result};
pub use record::{CleanedRow, ContactRecord};
