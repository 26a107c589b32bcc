//! Task folder name extraction
//!
//! `\\server\...\RPA\<task folder>\...` → `<task folder>`

use regex::Regex;

lazy_static::lazy_static! {
    // UNC prefix, any segments, literal RPA segment, captured next segment, rest.
    // A single trailing newline is allowed before the end.
    static ref RPA_FOLDER_RE: Regex = Regex::new(r"^\\\\.*?\\RPA\\(.*?)\\.*\n?$").unwrap();
}

/// Folder name right after the first `RPA` segment, or `None` if the path does not fit
pub fn extract_task_name(path: &str) -> Option<String> {
    RPA_FOLDER_RE
        .captures(path)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_task_name() {
        assert_eq!(
            extract_task_name(r"\\srv\share\RPA\Invoice Processing\out.txt"),
            Some("Invoice Processing".to_string())
        );
    }

    #[test]
    fn test_extract_takes_first_rpa_segment() {
        assert_eq!(
            extract_task_name(r"\\srv\RPA\First\RPA\Second\file.log"),
            Some("First".to_string())
        );
    }

    #[test]
    fn test_extract_deep_path() {
        assert_eq!(
            extract_task_name(r"\\srv\a\b\c\RPA\Payroll\2024\01\report.xlsx"),
            Some("Payroll".to_string())
        );
    }

    #[test]
    fn test_extract_requires_unc_prefix() {
        assert_eq!(extract_task_name(r"C:\share\RPA\Invoice\out.txt"), None);
        assert_eq!(extract_task_name(r"/mnt/share/RPA/Invoice/out.txt"), None);
    }

    #[test]
    fn test_extract_requires_literal_segment() {
        assert_eq!(extract_task_name(r"\\srv\share\NotRPA\Invoice\out.txt"), None);
        assert_eq!(extract_task_name(r"\\srv\share\rpa\Invoice\out.txt"), None);
        assert_eq!(extract_task_name(r"\\srv\share\RPAX\Invoice\out.txt"), None);
    }

    #[test]
    fn test_extract_requires_segment_after_folder() {
        // folder must be followed by another separator
        assert_eq!(extract_task_name(r"\\srv\share\RPA\Invoice"), None);
    }

    #[test]
    fn test_extract_allows_one_trailing_newline() {
        assert_eq!(
            extract_task_name("\\\\srv\\RPA\\Task\\f.txt\n"),
            Some("Task".to_string())
        );
        // lines never span a newline
        assert_eq!(extract_task_name("\\\\srv\\RPA\\Task\\f.txt\n\n"), None);
        assert_eq!(extract_task_name("\\\\srv\\RPA\\Ta\nsk\\f.txt"), None);
    }

    #[test]
    fn test_extract_without_rpa() {
        assert_eq!(extract_task_name(r"\\srv\share\Finance\out.txt"), None);
        assert_eq!(extract_task_name(""), None);
    }
}
