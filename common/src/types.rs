//! Record types
//!
//! Shared between the loader, the match engine and the writer:
//! - ScanRecord: one scan result row that yielded a task folder name
//! - TaskRecord / TaskTable: the reference task list
//! - MappedRecord: final output row (scan row + matched task + provenance)

use serde::{Deserialize, Serialize, Serializer};

/// Default column names of the task table
pub const DEFAULT_TASK_COLUMN: &str = "Task";
pub const DEFAULT_PROCESS_COLUMN: &str = "ProcessName";
pub const DEFAULT_DEVELOPER_COLUMN: &str = "Developers";
pub const DEFAULT_INACTIVE_COLUMN: &str = "Inactive";

/// Cell value that marks a task as inactive
pub const INACTIVE_SENTINEL: &str = "Y";

/// Scan result row with the folder name taken from its path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRecord {
    /// Full path of the matched file as recorded by the scanner
    pub matched_file: String,
    /// Folder name following the `RPA` segment
    pub extracted_task_name: String,
}

/// One row of the task table
///
/// Empty cells are `None`, so two blank cells never compare equal
/// against a folder name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskRecord {
    pub task: Option<String>,
    pub process: Option<String>,
    pub developer: Option<String>,
    pub inactive: bool,
}

impl TaskRecord {
    /// Interpret a raw inactive cell: only the sentinel means inactive
    pub fn parse_inactive(raw: Option<&str>) -> bool {
        matches!(raw, Some(v) if v == INACTIVE_SENTINEL)
    }
}

/// Reference task list in file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskTable {
    rows: Vec<TaskRecord>,
}

impl TaskTable {
    pub fn new(rows: Vec<TaskRecord>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[TaskRecord] {
        &self.rows
    }

    pub fn get(&self, index: usize) -> Option<&TaskRecord> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Task names in table order (`None` for blank cells)
    pub fn task_names(&self) -> Vec<Option<&str>> {
        self.rows.iter().map(|r| r.task.as_deref()).collect()
    }

    /// Process names in table order (`None` for blank cells)
    pub fn process_names(&self) -> Vec<Option<&str>> {
        self.rows.iter().map(|r| r.process.as_deref()).collect()
    }
}

/// Which column produced the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MappedBy {
    TaskName,
    ProcessName,
}

impl std::fmt::Display for MappedBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MappedBy::TaskName => write!(f, "taskName"),
            MappedBy::ProcessName => write!(f, "processName"),
        }
    }
}

/// Output row
///
/// Built only through [`MappedRecord::matched`] and [`MappedRecord::unmatched`]:
/// either every task field comes from one task row together with
/// `mapped_by` and `confidence`, or all of them are empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MappedRecord {
    #[serde(rename = "FolderName")]
    pub folder_name: String,
    #[serde(rename = "Task")]
    pub task: Option<String>,
    #[serde(rename = "ProcessName")]
    pub process: Option<String>,
    #[serde(rename = "Developers")]
    pub developer: Option<String>,
    #[serde(rename = "Inactive", serialize_with = "serialize_inactive")]
    pub inactive: Option<bool>,
    #[serde(rename = "MappedBy")]
    pub mapped_by: Option<MappedBy>,
    #[serde(rename = "Confidence")]
    pub confidence: Option<f64>,
    #[serde(rename = "FullPath")]
    pub full_path: String,
}

/// `True` / `False`, empty when unmatched
fn serialize_inactive<S: Serializer>(value: &Option<bool>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(true) => serializer.serialize_str("True"),
        Some(false) => serializer.serialize_str("False"),
        None => serializer.serialize_none(),
    }
}

impl MappedRecord {
    pub fn matched(
        scan: &ScanRecord,
        record: &TaskRecord,
        mapped_by: MappedBy,
        confidence: f64,
    ) -> Self {
        Self {
            folder_name: scan.extracted_task_name.clone(),
            task: record.task.clone(),
            process: record.process.clone(),
            developer: record.developer.clone(),
            inactive: Some(record.inactive),
            mapped_by: Some(mapped_by),
            confidence: Some(confidence),
            full_path: scan.matched_file.clone(),
        }
    }

    pub fn unmatched(scan: &ScanRecord) -> Self {
        Self {
            folder_name: scan.extracted_task_name.clone(),
            task: None,
            process: None,
            developer: None,
            inactive: None,
            mapped_by: None,
            confidence: None,
            full_path: scan.matched_file.clone(),
        }
    }

    pub fn is_matched(&self) -> bool {
        self.mapped_by.is_some()
    }
}

/// Task table column names supplied by the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColumnMapping {
    pub task: String,
    pub process: String,
    pub developer: String,
    pub inactive: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            task: DEFAULT_TASK_COLUMN.into(),
            process: DEFAULT_PROCESS_COLUMN.into(),
            developer: DEFAULT_DEVELOPER_COLUMN.into(),
            inactive: DEFAULT_INACTIVE_COLUMN.into(),
        }
    }
}

impl ColumnMapping {
    /// (role, column name) pairs in canonical order
    pub fn roles(&self) -> [(&'static str, &str); 4] {
        [
            ("task", self.task.as_str()),
            ("process", self.process.as_str()),
            ("developer", self.developer.as_str()),
            ("inactive", self.inactive.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(name: &str) -> ScanRecord {
        ScanRecord {
            matched_file: format!(r"\\srv\share\RPA\{}\out.txt", name),
            extracted_task_name: name.to_string(),
        }
    }

    #[test]
    fn test_parse_inactive() {
        assert!(TaskRecord::parse_inactive(Some("Y")));
        assert!(!TaskRecord::parse_inactive(Some("N")));
        assert!(!TaskRecord::parse_inactive(Some("y")));
        assert!(!TaskRecord::parse_inactive(None));
    }

    #[test]
    fn test_matched_record_takes_all_fields_from_row() {
        let row = TaskRecord {
            task: Some("Invoice Processing".into()),
            process: Some("InvoiceBot".into()),
            developer: None,
            inactive: true,
        };
        let record = MappedRecord::matched(&scan("Invoice"), &row, MappedBy::ProcessName, 88.0);

        assert_eq!(record.folder_name, "Invoice");
        assert_eq!(record.task.as_deref(), Some("Invoice Processing"));
        assert_eq!(record.process.as_deref(), Some("InvoiceBot"));
        assert_eq!(record.developer, None);
        assert_eq!(record.inactive, Some(true));
        assert_eq!(record.mapped_by, Some(MappedBy::ProcessName));
        assert_eq!(record.confidence, Some(88.0));
        assert!(record.is_matched());
    }

    #[test]
    fn test_unmatched_record_is_empty() {
        let record = MappedRecord::unmatched(&scan("Other"));
        assert_eq!(record.folder_name, "Other");
        assert_eq!(record.full_path, r"\\srv\share\RPA\Other\out.txt");
        assert!(record.task.is_none());
        assert!(record.process.is_none());
        assert!(record.developer.is_none());
        assert!(record.inactive.is_none());
        assert!(record.confidence.is_none());
        assert!(!record.is_matched());
    }

    #[test]
    fn test_mapped_by_display() {
        assert_eq!(MappedBy::TaskName.to_string(), "taskName");
        assert_eq!(MappedBy::ProcessName.to_string(), "processName");
    }

    #[test]
    fn test_column_mapping_default() {
        let mapping = ColumnMapping::default();
        let roles = mapping.roles();
        assert_eq!(roles[0], ("task", "Task"));
        assert_eq!(roles[1], ("process", "ProcessName"));
        assert_eq!(roles[2], ("developer", "Developers"));
        assert_eq!(roles[3], ("inactive", "Inactive"));
    }

    #[test]
    fn test_task_table_names_keep_blanks() {
        let table = TaskTable::new(vec![
            TaskRecord { task: Some("A".into()), process: None, ..Default::default() },
            TaskRecord { task: None, process: Some("B".into()), ..Default::default() },
        ]);
        assert_eq!(table.task_names(), vec![Some("A"), None]);
        assert_eq!(table.process_names(), vec![None, Some("B")]);
        assert_eq!(table.len(), 2);
    }
}
