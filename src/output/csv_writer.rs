//! CSV persistence of the ranked report

use crate::error::Result;
use crate::output::report::RankedReport;
use csv::Writer;
use log::info;
use std::io;
use std::path::Path;

pub const CSV_HEADER: [&str; 5] = ["Rank", "Name", "Email", "Similarity", "Resume File"];

pub fn write_csv<W: io::Write>(report: &RankedReport, writer: W, not_available: &str) -> Result<()> {
    let mut wtr = Writer::from_writer(writer);

    wtr.write_record(CSV_HEADER)?;
    for entry in &report.entries {
        wtr.write_record([
            entry.rank.to_string().as_str(),
            entry.name_or(not_available),
            entry.email_or(not_available),
            entry.similarity_display().as_str(),
            entry.file_path.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Create or overwrite `path` with the report
pub fn save_csv(report: &RankedReport, path: &Path, not_available: &str) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv(report, file, not_available)?;
    info!("Wrote {} rows to {}", report.len(), path.display());
    Ok(())
}
