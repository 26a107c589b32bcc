use task_mapper_common::MappedBy;

/// Confidence given to exact matches
pub const EXACT_CONFIDENCE: f64 = 100.0;

/// Default fuzzy threshold (scores must be strictly above it)
pub const DEFAULT_THRESHOLD: f64 = 75.0;

/// Which task row matched, through which column, and how well
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchHit {
    /// Row index in the task table
    pub row: usize,
    pub mapped_by: MappedBy,
    pub confidence: f64,
    /// Exact string match (as opposed to fuzzy)
    pub exact: bool,
}

/// Per-run match statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapSummary {
    /// Rows sent through the engine
    pub total: usize,
    pub task_exact: usize,
    pub process_exact: usize,
    pub task_fuzzy: usize,
    pub process_fuzzy: usize,
    pub unmatched: usize,
}

impl MapSummary {
    pub(crate) fn record(&mut self, hit: &MatchHit) {
        match (hit.mapped_by, hit.exact) {
            (MappedBy::TaskName, true) => self.task_exact += 1,
            (MappedBy::ProcessName, true) => self.process_exact += 1,
            (MappedBy::TaskName, false) => self.task_fuzzy += 1,
            (MappedBy::ProcessName, false) => self.process_fuzzy += 1,
        }
    }

    pub fn matched(&self) -> usize {
        self.total - self.unmatched
    }
}
