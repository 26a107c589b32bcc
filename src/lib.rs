//! Scan result → RPA task mapping
//!
//! Reads a scan result CSV and a task list CSV, matches the folder name found
//! under `\RPA\` in every scanned path against the task and process names,
//! and writes the annotated table to a timestamped CSV.

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod extractor;
pub mod loader;
pub mod matcher;
pub mod prompt;
pub mod service;
pub mod validator;
