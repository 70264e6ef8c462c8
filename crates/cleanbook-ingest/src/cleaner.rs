use crate::columns::ColumnMap;
use crate::error::Result;
use crate::record::{output_headers, CleanedRow, ContactRecord};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanReport {
    pub rows: usize,
    pub valid_emails: usize,
    pub valid_phones: usize,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TablePreview {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub total_rows: usize,
}

#[derive(Debug, Clone)]
pub struct CleanedCsv {
    pub input_headers: Vec<String>,
    pub input_rows: Vec<Vec<String>>,
    pub columns: ColumnMap,
    pub rows: Vec<CleanedRow>,
}

impl CleanedCsv {
    pub fn output_headers(&self) -> Vec<String> {
        output_headers(&self.columns)
    }

    pub fn report(&self) -> CleanReport {
        let warnings = self
            .columns
            .missing()
            .into_iter()
            .map(|field| format!("no {} column found", field.logical_name()))
            .collect();
        CleanReport {
            rows: self.rows.len(),
            valid_emails: self.rows.iter().filter(|row| row.email.is_valid).count(),
            valid_phones: self.rows.iter().filter(|row| row.phone.is_valid).count(),
            warnings,
        }
    }

    pub fn input_preview(&self, limit: usize) -> TablePreview {
        TablePreview {
            headers: self.input_headers.clone(),
            rows: self.input_rows.iter().take(limit).cloned().collect(),
            total_rows: self.input_rows.len(),
        }
    }

    pub fn output_preview(&self, limit: usize) -> TablePreview {
        TablePreview {
            headers: self.output_headers(),
            rows: self
                .rows
                .iter()
                .take(limit)
                .map(CleanedRow::output_fields)
                .collect(),
            total_rows: self.rows.len(),
        }
    }
}

/// Decodes uploaded bytes as UTF-8, dropping a leading BOM and replacing
/// invalid sequences.
pub fn decode_upload(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    String::from_utf8_lossy(bytes).into_owned()
}

pub fn read_csv_file(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    Ok(decode_upload(&bytes))
}

pub fn clean_csv(text: &str, default_region: &str) -> Result<CleanedCsv> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());
    let input_headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let columns = ColumnMap::resolve(&input_headers);

    let mut input_rows = Vec::new();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(ContactRecord::from_row(&columns, &record).clean(default_region));
        input_rows.push(record.iter().map(str::to_string).collect());
    }

    debug!(rows = rows.len(), region = default_region, "csv cleaned");
    Ok(CleanedCsv {
        input_headers,
        input_rows,
        columns,
        rows,
    })
}

pub fn write_csv<W: Write>(cleaned: &CleanedCsv, writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(cleaned.output_headers())?;
    for row in &cleaned.rows {
        writer.write_record(row.output_fields())?;
    }
    writer.flush()?;
    Ok(())
}

/// `contacts.csv` becomes `contacts.cleaned.csv` next to the input.
pub fn cleaned_path(input: &Path) -> PathBuf {
    input.with_extension("cleaned.csv")
}
