//! Input validation shared by the prompts and the `map` command

use std::path::Path;

/// Accept only paths to existing regular files
pub fn validate_file_path(input: &str) -> Result<(), String> {
    let path = Path::new(input);
    if !path.exists() {
        return Err("The path does not exist".into());
    }
    if !path.is_file() {
        return Err("The path is not a file".into());
    }
    Ok(())
}

/// Reject blank input
pub fn not_empty(input: &str) -> Result<(), String> {
    if input.trim().is_empty() {
        Err("The value cannot be empty".into())
    } else {
        Ok(())
    }
}
