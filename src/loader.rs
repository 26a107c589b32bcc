//! CSV table loading
//!
//! - Scan result table → `ScanRecord` (rows without an RPA folder are dropped)
//! - Task table → `TaskTable` (user column names renamed to canonical roles)
//!
//! Index columns left behind by spreadsheet exports (blank header or
//! `Unnamed...`) are ignored in both tables. Empty cells and the usual
//! spreadsheet NA markers (`NA`, `N/A`, `null`, `NaN`, ...) load as `None`.

use crate::error::{Result, TaskMapperError};
use crate::extractor::extract_task_name;
use csv::ReaderBuilder;
use std::io::Read;
use std::path::Path;
use task_mapper_common::{ColumnMapping, ScanRecord, TaskRecord, TaskTable};

/// Default scan result column holding the matched file path
pub const DEFAULT_PATH_COLUMN: &str = "MatchedFile";

/// Cell values read as missing, compared case-sensitively
const NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

const SCAN_TABLE: &str = "scan result table";
const TASK_TABLE: &str = "task table";

/// Parsed CSV with index columns removed and empty cells as `None`
#[derive(Debug, Clone, Default)]
struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl RawTable {
    fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    fn require_column(&self, table: &str, role: &str, name: &str) -> Result<usize> {
        self.column(name).ok_or_else(|| TaskMapperError::MissingColumn {
            table: table.to_string(),
            role: role.to_string(),
            column: name.to_string(),
        })
    }
}

fn is_missing(cell: &str) -> bool {
    NA_VALUES.contains(&cell)
}

/// Spurious index column check
fn is_index_artifact(header: &str) -> bool {
    let header = header.trim();
    header.is_empty() || header.starts_with("Unnamed")
}

fn read_table<R: Read>(reader: R) -> Result<RawTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let all_headers = reader.headers()?.clone();
    let kept: Vec<usize> = all_headers
        .iter()
        .enumerate()
        .filter(|(_, h)| !is_index_artifact(h))
        .map(|(i, _)| i)
        .collect();

    let headers: Vec<String> = kept
        .iter()
        .map(|&i| all_headers[i].to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        // cells missing from short rows count as empty
        let row: Vec<Option<String>> = kept
            .iter()
            .map(|&i| record.get(i).filter(|v| !is_missing(v)).map(str::to_string))
            .collect();
        rows.push(row);
    }

    Ok(RawTable { headers, rows })
}

fn open_table(path: &Path) -> Result<RawTable> {
    if !path.exists() {
        return Err(TaskMapperError::PathNotFound(path.display().to_string()));
    }

    let file = std::fs::File::open(path)
        .map_err(|e| TaskMapperError::TableParse(format!("{}: {}", path.display(), e)))?;
    read_table(file)
}

/// Load the scan result table and extract task folder names
pub fn load_scan_results(path: &Path, path_column: &str) -> Result<Vec<ScanRecord>> {
    let table = open_table(path)?;
    scan_records(&table, path_column)
}

/// Same as [`load_scan_results`] but from any reader
pub fn scan_results_from_reader<R: Read>(reader: R, path_column: &str) -> Result<Vec<ScanRecord>> {
    let table = read_table(reader)?;
    scan_records(&table, path_column)
}

fn scan_records(table: &RawTable, path_column: &str) -> Result<Vec<ScanRecord>> {
    let index = table.require_column(SCAN_TABLE, "path", path_column)?;

    let records: Vec<ScanRecord> = table
        .rows
        .iter()
        .filter_map(|row| {
            let matched_file = row[index].as_deref()?;
            let extracted_task_name = extract_task_name(matched_file)?;
            Some(ScanRecord {
                matched_file: matched_file.to_string(),
                extracted_task_name,
            })
        })
        .collect();

    log::debug!(
        "scan results: {} rows, {} with an RPA folder",
        table.rows.len(),
        records.len()
    );

    Ok(records)
}

/// Load the task table, renaming the mapped columns to their roles
pub fn load_task_table(path: &Path, columns: &ColumnMapping) -> Result<TaskTable> {
    let table = open_table(path)?;
    task_records(&table, columns)
}

/// Same as [`load_task_table`] but from any reader
pub fn task_table_from_reader<R: Read>(reader: R, columns: &ColumnMapping) -> Result<TaskTable> {
    let table = read_table(reader)?;
    task_records(&table, columns)
}

fn task_records(table: &RawTable, columns: &ColumnMapping) -> Result<TaskTable> {
    let mut indices = [0usize; 4];
    for (slot, (role, name)) in indices.iter_mut().zip(columns.roles()) {
        *slot = table.require_column(TASK_TABLE, role, name)?;
    }
    let [task, process, developer, inactive] = indices;

    let rows = table
        .rows
        .iter()
        .map(|row| TaskRecord {
            task: row[task].clone(),
            process: row[process].clone(),
            developer: row[developer].clone(),
            inactive: TaskRecord::parse_inactive(row[inactive].as_deref()),
        })
        .collect::<Vec<_>>();

    log::debug!("task table: {} rows", rows.len());

    Ok(TaskTable::new(rows))
}
