//! Console and CSV rendering of extracted records

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::{debug, instrument};

use crate::error::Result;
use crate::pubmed::models::{COLUMNS, ExtractedRecord};

/// Width of the line printed after each record in console mode
pub const SEPARATOR_WIDTH: usize = 50;

/// Write a header row plus one CSV row per record
///
/// The header is written even when `records` is empty.
pub fn write_csv<W: Write>(writer: W, records: &[ExtractedRecord]) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(COLUMNS)?;
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;

    Ok(())
}

/// Create or truncate `path` and write the records to it as CSV
#[instrument(skip(records), fields(path = %path.display(), records = records.len()))]
pub fn write_csv_file(path: &Path, records: &[ExtractedRecord]) -> Result<()> {
    let file = File::create(path)?;
    write_csv(file, records)?;

    debug!("CSV report written");
    Ok(())
}

/// Print each record as `Key: Value` lines followed by a dashed separator
pub fn print_records<W: Write>(out: &mut W, records: &[ExtractedRecord]) -> Result<()> {
    let separator = "-".repeat(SEPARATOR_WIDTH);

    for record in records {
        for (key, value) in record.fields() {
            writeln!(out, "{}: {}", key, value)?;
        }
        writeln!(out, "{}", separator)?;
    }

    Ok(())
}
