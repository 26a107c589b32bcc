//! Task Mapper Common Library
//!
//! Record types and fuzzy scoring shared by the loader, engine and writer

pub mod types;
pub mod error;
pub mod fuzzy;

pub use types::{
    ColumnMapping, MappedBy, MappedRecord, ScanRecord, TaskRecord, TaskTable,
    DEFAULT_DEVELOPER_COLUMN, DEFAULT_INACTIVE_COLUMN, DEFAULT_PROCESS_COLUMN,
    DEFAULT_TASK_COLUMN, INACTIVE_SENTINEL,
};
pub use error::{Error, Result};
pub use fuzzy::{extract_best, partial_token_sort_ratio};
