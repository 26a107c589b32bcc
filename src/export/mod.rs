//! Mapped table output
//!
//! `<output dir>/<YYYY-MM-DD HHMM>.csv`

use crate::error::Result;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use task_mapper_common::MappedRecord;

/// File name timestamp format
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H%M";

const EXTENSION: &str = "csv";

/// Column order of the output table
pub const HEADERS: [&str; 8] = [
    "FolderName",
    "Task",
    "ProcessName",
    "Developers",
    "Inactive",
    "MappedBy",
    "Confidence",
    "FullPath",
];

fn output_path_for_time(output_dir: &Path, time: &DateTime<Local>) -> PathBuf {
    output_dir.join(format!("{}.{}", time.format(TIMESTAMP_FORMAT), EXTENSION))
}

/// Write the mapped table named after the current local time
pub fn write_csv(records: &[MappedRecord], output_dir: &Path) -> Result<PathBuf> {
    write_csv_at(records, output_dir, Local::now())
}

/// Write the mapped table named after `time`
///
/// An existing file with the same name is overwritten.
pub fn write_csv_at(
    records: &[MappedRecord],
    output_dir: &Path,
    time: DateTime<Local>,
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;
    let output_path = output_path_for_time(output_dir, &time);

    let mut writer = csv::Writer::from_path(&output_path)?;
    if records.is_empty() {
        // serialize() only writes the header together with the first row
        writer.write_record(HEADERS)?;
    }
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(output_path)
}
