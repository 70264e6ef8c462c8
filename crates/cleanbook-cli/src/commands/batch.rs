use crate::commands::{print_json, Context};
use crate::error::not_found;
use anyhow::{Context as _, Result};
use clap::Args;
use cleanbook_ingest::{
    clean_csv, cleaned_path, read_csv_file, write_csv, CleanReport, TablePreview,
};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Args)]
pub struct CsvArgs {
    pub file: PathBuf,
    /// Output path (defaults to `<name>.cleaned.csv` next to the input)
    #[arg(long)]
    pub out: Option<PathBuf>,
    #[arg(long)]
    pub region: Option<String>,
    /// Print the first rows of the input and output instead of writing a file
    #[arg(long)]
    pub preview: bool,
}

#[derive(Debug, Serialize)]
struct CsvSummary {
    output: String,
    #[serde(flatten)]
    report: CleanReport,
}

#[derive(Debug, Serialize)]
struct CsvPreview {
    input: TablePreview,
    output: TablePreview,
    report: CleanReport,
}

pub fn clean_file(ctx: &Context<'_>, args: CsvArgs) -> Result<()> {
    if !args.file.exists() {
        return Err(not_found(format!("csv file {}", args.file.display())));
    }
    let text = read_csv_file(&args.file)
        .with_context(|| format!("read csv file {}", args.file.display()))?;
    let region = ctx.region(args.region.as_deref());
    let cleaned = clean_csv(&text, region)
        .with_context(|| format!("parse csv file {}", args.file.display()))?;
    let report = cleaned.report();

    if args.preview {
        let limit = ctx.config.csv.preview_rows;
        let preview = CsvPreview {
            input: cleaned.input_preview(limit),
            output: cleaned.output_preview(limit),
            report,
        };
        if ctx.json {
            return print_json(&preview);
        }
        print_table(&preview.output);
        print_report(&preview.report);
        return Ok(());
    }

    let out_path = args.out.unwrap_or_else(|| cleaned_path(&args.file));
    let file = File::create(&out_path)
        .with_context(|| format!("create output file {}", out_path.display()))?;
    write_csv(&cleaned, BufWriter::new(file))
        .with_context(|| format!("write output file {}", out_path.display()))?;
    debug!(path = %out_path.display(), rows = report.rows, "cleaned csv written");

    if ctx.json {
        return print_json(&CsvSummary {
            output: out_path.display().to_string(),
            report,
        });
    }

    println!("Wrote normalized CSV: {}", out_path.display());
    print_report(&report);
    Ok(())
}

fn print_table(table: &TablePreview) {
    println!("{}", table.headers.join(" | "));
    for row in &table.rows {
        println!("{}", row.join(" | "));
    }
    if table.total_rows > table.rows.len() {
        println!("... {} more rows", table.total_rows - table.rows.len());
    }
}

fn print_report(report: &CleanReport) {
    println!(
        "Rows {}, valid emails {}, valid phones {}",
        report.rows, report.valid_emails, report.valid_phones
    );
    if !report.warnings.is_empty() {
        println!("Warnings:");
        for warning in &report.warnings {
            println!("- {}", warning);
        }
    }
}
