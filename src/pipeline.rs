//! search → fetch → extract → report, as one call

use std::io::Write;
use std::path::Path;

use tracing::{info, instrument};

use crate::error::Result;
use crate::pubmed::PubMedClient;
use crate::report;

/// Where the report goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output<'a> {
    /// `Key: Value` blocks on the writer passed to [`run`]
    Console,
    /// CSV file, overwritten; a confirmation line goes to the writer
    File(&'a Path),
}

/// An empty path selects the console, like no path at all
impl<'a> From<Option<&'a Path>> for Output<'a> {
    fn from(path: Option<&'a Path>) -> Self {
        path.filter(|p| !p.as_os_str().is_empty())
            .map_or(Output::Console, Output::File)
    }
}

/// Run the whole pipeline for `query` and return the number of records
///
/// Nothing is written unless search, fetch and extraction all succeed.
#[instrument(skip(client, out), fields(query = %query))]
pub async fn run<W: Write>(
    client: &PubMedClient,
    query: &str,
    output: Output<'_>,
    out: &mut W,
) -> Result<usize> {
    let records = client.search_and_extract(query).await?;
    info!(records = records.len(), "Extracted records");

    match output {
        Output::File(path) => {
            report::write_csv_file(path, &records)?;
            writeln!(out, "✅ Results saved to {}", path.display())?;
        }
        Output::Console => report::print_records(out, &records)?,
    }

    Ok(records.len())
}
