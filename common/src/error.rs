//! Error types

use thiserror::Error;

/// Shared error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("No candidates to score against: {0}")]
    NoCandidates(String),
}

/// Result alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_no_candidates() {
        let error = Error::NoCandidates("task names".to_string());
        let display = format!("{}", error);
        assert_eq!(display, "No candidates to score against: task names");
    }

    #[test]
    fn test_error_debug() {
        let error = Error::NoCandidates("process names".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("NoCandidates"));
        assert!(debug.contains("process names"));
    }
}
