//! Folder name → task matching
//!
//! ## Cascade (first hit wins)
//! 1. Exact task name
//! 2. Exact process name
//! 3. Fuzzy (partial token-sort ratio, task vs process)
//! 4. Unmatched

pub mod strategy;
pub mod types;

pub use strategy::{ExactProcessMatch, ExactTaskMatch, FuzzyMatch, MatchStrategy};
pub use types::{MapSummary, MatchHit, DEFAULT_THRESHOLD, EXACT_CONFIDENCE};

use task_mapper_common::{MappedRecord, ScanRecord, TaskTable};

/// Ordered list of strategies
pub struct MatchEngine {
    strategies: Vec<Box<dyn MatchStrategy>>,
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::with_threshold(DEFAULT_THRESHOLD)
    }
}

impl MatchEngine {
    /// Standard cascade with a custom fuzzy threshold
    pub fn with_threshold(threshold: f64) -> Self {
        Self::new(vec![
            Box::new(ExactTaskMatch),
            Box::new(ExactProcessMatch),
            Box::new(FuzzyMatch::new(threshold)),
        ])
    }

    pub fn new(strategies: Vec<Box<dyn MatchStrategy>>) -> Self {
        Self { strategies }
    }

    /// Run the cascade for one folder name
    ///
    /// A strategy error is logged and treated as "no match" for that strategy.
    pub fn resolve(&self, folder_name: &str, table: &TaskTable) -> Option<MatchHit> {
        for strategy in &self.strategies {
            match strategy.try_match(folder_name, table) {
                Ok(Some(hit)) => {
                    log::debug!(
                        "'{}' -> row {} by {} ({})",
                        folder_name,
                        hit.row,
                        strategy.name(),
                        hit.confidence
                    );
                    return Some(hit);
                }
                Ok(None) => {}
                Err(e) => {
                    log::warn!(
                        "There was a problem while performing {} match for '{}': {}",
                        strategy.name(),
                        folder_name,
                        e
                    );
                }
            }
        }

        None
    }

    /// One output record per scan record, same order
    pub fn map_records(&self, scans: &[ScanRecord], table: &TaskTable) -> Vec<MappedRecord> {
        self.run(scans, table).0
    }

    /// Map every scan record and count the outcomes
    pub fn run(&self, scans: &[ScanRecord], table: &TaskTable) -> (Vec<MappedRecord>, MapSummary) {
        let mut summary = MapSummary {
            total: scans.len(),
            ..Default::default()
        };

        let records = scans
            .iter()
            .map(|scan| {
                let resolved = self
                    .resolve(&scan.extracted_task_name, table)
                    .and_then(|hit| table.get(hit.row).map(|record| (hit, record)));

                match resolved {
                    Some((hit, record)) => {
                        summary.record(&hit);
                        MappedRecord::matched(scan, record, hit.mapped_by, hit.confidence)
                    }
                    None => {
                        summary.unmatched += 1;
                        MappedRecord::unmatched(scan)
                    }
                }
            })
            .collect();

        (records, summary)
    }
}

/// Map with the standard cascade
pub fn map_records(scans: &[ScanRecord], table: &TaskTable) -> Vec<MappedRecord> {
    MatchEngine::default().map_records(scans, table)
}
