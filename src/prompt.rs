//! Interactive input collection
//!
//! Operation mode → scan result file → task list file → four column names

use crate::config::Config;
use crate::error::{Result, TaskMapperError};
use crate::service::MapRequest;
use crate::validator::{not_empty, validate_file_path};
use dialoguer::{Input, Select};
use std::path::PathBuf;
use task_mapper_common::ColumnMapping;

/// Selectable operation modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    MapResultToTaskName,
}

impl OperationMode {
    pub const ALL: [OperationMode; 1] = [OperationMode::MapResultToTaskName];

    pub fn label(&self) -> &'static str {
        match self {
            OperationMode::MapResultToTaskName => "Map Scan Result to Task Name",
        }
    }
}

/// Ask for the operation mode; Esc/q cancels
pub fn select_operation_mode() -> Result<OperationMode> {
    let labels: Vec<&str> = OperationMode::ALL.iter().map(|m| m.label()).collect();

    let selected = Select::new()
        .with_prompt("Operation Mode")
        .items(&labels)
        .default(0)
        .interact_opt()
        .map_err(|e| TaskMapperError::Prompt(e.to_string()))?;

    selected
        .map(|i| OperationMode::ALL[i])
        .ok_or(TaskMapperError::PromptCancelled)
}

/// Ask for the two input files and the task table column names
pub fn collect_map_request(config: &Config) -> Result<MapRequest> {
    let scan_result = prompt_file("Scan Result File")?;
    let task_table = prompt_file("Task List File")?;

    let defaults = &config.columns;
    let columns = ColumnMapping {
        task: prompt_column("Task Column Name", &defaults.task)?,
        process: prompt_column("Process Column Name", &defaults.process)?,
        developer: prompt_column("Developer Column Name", &defaults.developer)?,
        inactive: prompt_column("Inactive Column Name", &defaults.inactive)?,
    };

    Ok(MapRequest {
        scan_result,
        task_table,
        columns,
        path_column: config.path_column.clone(),
    })
}

fn prompt_file(prompt: &str) -> Result<PathBuf> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .validate_with(|input: &String| validate_file_path(input.trim()))
        .interact_text()
        .map_err(|e| TaskMapperError::Prompt(e.to_string()))?;

    Ok(PathBuf::from(input.trim()))
}

fn prompt_column(prompt: &str, default: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .validate_with(|input: &String| not_empty(input))
        .interact_text()
        .map_err(|e| TaskMapperError::Prompt(e.to_string()))?;

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_mode_labels() {
        assert_eq!(OperationMode::ALL.len(), 1);
        assert_eq!(
            OperationMode::MapResultToTaskName.label(),
            "Map Scan Result to Task Name"
        );
    }
}
