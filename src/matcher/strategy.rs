//! Match strategies
//!
//! Each strategy looks at one folder name and the task table and either
//! reports a hit or passes. The engine tries them in order.

use super::types::{MatchHit, EXACT_CONFIDENCE};
use crate::error::Result;
use task_mapper_common::{extract_best, MappedBy, TaskTable};

pub trait MatchStrategy {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// `Ok(None)` means "no decision, try the next strategy"
    fn try_match(&self, folder_name: &str, table: &TaskTable) -> Result<Option<MatchHit>>;
}

/// Case-sensitive full-string match on the task column
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactTaskMatch;

impl MatchStrategy for ExactTaskMatch {
    fn name(&self) -> &'static str {
        "exact task"
    }

    fn try_match(&self, folder_name: &str, table: &TaskTable) -> Result<Option<MatchHit>> {
        Ok(find_exact(&table.task_names(), folder_name).map(|row| MatchHit {
            row,
            mapped_by: MappedBy::TaskName,
            confidence: EXACT_CONFIDENCE,
            exact: true,
        }))
    }
}

/// Case-sensitive full-string match on the process column
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactProcessMatch;

impl MatchStrategy for ExactProcessMatch {
    fn name(&self) -> &'static str {
        "exact process"
    }

    fn try_match(&self, folder_name: &str, table: &TaskTable) -> Result<Option<MatchHit>> {
        Ok(find_exact(&table.process_names(), folder_name).map(|row| MatchHit {
            row,
            mapped_by: MappedBy::ProcessName,
            confidence: EXACT_CONFIDENCE,
            exact: true,
        }))
    }
}

/// First row whose value equals `needle`; blank cells never match
fn find_exact(values: &[Option<&str>], needle: &str) -> Option<usize> {
    values.iter().position(|v| *v == Some(needle))
}

/// Best partial token-sort score over task and process names
///
/// A column wins only if its score is above the threshold AND strictly
/// above the other column's score. Equal scores match nothing.
#[derive(Debug, Clone, Copy)]
pub struct FuzzyMatch {
    pub threshold: f64,
}

impl FuzzyMatch {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl MatchStrategy for FuzzyMatch {
    fn name(&self) -> &'static str {
        "fuzzy"
    }

    fn try_match(&self, folder_name: &str, table: &TaskTable) -> Result<Option<MatchHit>> {
        let (task_row, task_score) = extract_best(folder_name, &table.task_names())?;
        let (process_row, process_score) = extract_best(folder_name, &table.process_names())?;

        log::debug!(
            "fuzzy '{}': task {} (row {}), process {} (row {})",
            folder_name,
            task_score,
            task_row,
            process_score,
            process_row
        );

        if task_score > self.threshold && task_score > process_score {
            return Ok(Some(MatchHit {
                row: task_row,
                mapped_by: MappedBy::TaskName,
                confidence: task_score,
                exact: false,
            }));
        }

        if process_score > self.threshold && process_score > task_score {
            return Ok(Some(MatchHit {
                row: process_row,
                mapped_by: MappedBy::ProcessName,
                confidence: process_score,
                exact: false,
            }));
        }

        Ok(None)
    }
}
