use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskMapperError {
    #[error("Path not found: {0}")]
    PathNotFound(String),

    #[error("Missing {role} column '{column}' in {table}")]
    MissingColumn {
        table: String,
        role: String,
        column: String,
    },

    #[error("Failed to parse table: {0}")]
    TableParse(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error("Prompt cancelled")]
    PromptCancelled,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Common(#[from] task_mapper_common::Error),
}

impl TaskMapperError {
    /// Errors that leave no usable table but do not abort the run
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            TaskMapperError::MissingColumn { .. }
                | TaskMapperError::TableParse(_)
                | TaskMapperError::Csv(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, TaskMapperError>;
