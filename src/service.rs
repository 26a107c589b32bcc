//! Map scan results to tasks in one batch
//!
//! load both tables → extract folder names → match → write CSV

use crate::error::{Result, TaskMapperError};
use crate::export;
use crate::loader;
use crate::matcher::{MapSummary, MatchEngine};
use std::path::{Path, PathBuf};
use task_mapper_common::ColumnMapping;

/// Everything needed for one mapping run
#[derive(Debug, Clone, PartialEq)]
pub struct MapRequest {
    pub scan_result: PathBuf,
    pub task_table: PathBuf,
    pub columns: ColumnMapping,
    /// Scan result column holding the file path
    pub path_column: String,
}

/// Input table a load failure refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    ScanResult,
    TaskTable,
}

impl std::fmt::Display for TableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableKind::ScanResult => write!(f, "scan result table"),
            TableKind::TaskTable => write!(f, "task table"),
        }
    }
}

/// How a run ended (fatal errors are returned as `Err` instead)
#[derive(Debug)]
pub enum MapOutcome {
    /// Mapped table saved
    Written { path: PathBuf, summary: MapSummary },
    /// Mapping finished but the file could not be saved
    WriteFailed { reason: String, summary: MapSummary },
    /// A table was readable but unusable (missing column, bad CSV)
    LoadFailed { table: TableKind, reason: String },
}

impl MapOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, MapOutcome::Written { .. })
    }
}

/// Run the whole mapping
///
/// `PathNotFound` (and other non-structural load errors) abort with `Err`;
/// structural load errors and write errors are reported through [`MapOutcome`].
pub fn map_folder_to_task(
    request: &MapRequest,
    output_dir: &Path,
    engine: &MatchEngine,
) -> Result<MapOutcome> {
    let scans = match loader::load_scan_results(&request.scan_result, &request.path_column) {
        Ok(scans) => scans,
        Err(e) => return load_failure(TableKind::ScanResult, e),
    };

    let table = match loader::load_task_table(&request.task_table, &request.columns) {
        Ok(table) => table,
        Err(e) => return load_failure(TableKind::TaskTable, e),
    };

    log::info!(
        "mapping {} folder names against {} tasks",
        scans.len(),
        table.len()
    );

    let (records, summary) = engine.run(&scans, &table);

    match export::write_csv(&records, output_dir) {
        Ok(path) => Ok(MapOutcome::Written { path, summary }),
        Err(e) => {
            log::error!("Something went wrong while saving the mapped table: {}", e);
            Ok(MapOutcome::WriteFailed {
                reason: e.to_string(),
                summary,
            })
        }
    }
}

fn load_failure(table: TableKind, error: TaskMapperError) -> Result<MapOutcome> {
    if !error.is_structural() {
        return Err(error);
    }

    log::error!("Failed to load {}: {}", table, error);
    Ok(MapOutcome::LoadFailed {
        table,
        reason: error.to_string(),
    })
}
