//! Fuzzy string scoring
//!
//! Partial token-sort ratio on a 0-100 scale:
//! 1. Preprocess (ASCII only, punctuation to spaces, lowercase, trim)
//! 2. Sort whitespace tokens
//! 3. Score the shorter string against the best aligned window of the longer one

use crate::error::{Error, Result};

/// Strip non-ASCII, turn non-alphanumerics into spaces, lowercase and trim
pub fn preprocess(s: &str) -> String {
    let cleaned: String = s
        .chars()
        .filter(|c| c.is_ascii())
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                ' '
            }
        })
        .collect();

    cleaned.trim().to_string()
}

/// Sort whitespace separated tokens and join them with single spaces
pub fn sort_tokens(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// Partial token-sort ratio, rounded to a whole number
pub fn partial_token_sort_ratio(a: &str, b: &str) -> f64 {
    let a = sort_tokens(&preprocess(a));
    let b = sort_tokens(&preprocess(b));

    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    partial_ratio(&a, &b).round_ties_even()
}

/// Best indel similarity of the shorter string against substrings of the longer one
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    if a.len() < b.len() {
        best_window_ratio(&a, &b)
    } else if a.len() > b.len() {
        best_window_ratio(&b, &a)
    } else {
        let forward = best_window_ratio(&a, &b);
        if forward >= 100.0 {
            return forward;
        }
        forward.max(best_window_ratio(&b, &a))
    }
}

/// Index and score of the best candidate
///
/// Blank (`None`) candidates are skipped. Ties keep the earliest candidate.
pub fn extract_best(query: &str, candidates: &[Option<&str>]) -> Result<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;

    for (index, candidate) in candidates.iter().enumerate() {
        let Some(candidate) = candidate else {
            continue;
        };

        let score = partial_token_sort_ratio(query, candidate);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((index, score)),
        }
    }

    best.ok_or_else(|| Error::NoCandidates(query.to_string()))
}

/// `needle` is never longer than `haystack`
fn best_window_ratio(needle: &[char], haystack: &[char]) -> f64 {
    let m = needle.len();
    let n = haystack.len();
    let mut best: f64 = 0.0;

    // windows cut off at the left edge
    for end in 1..m {
        best = best.max(indel_ratio(needle, &haystack[..end]));
    }

    for start in 0..=(n - m) {
        best = best.max(indel_ratio(needle, &haystack[start..start + m]));
        if best >= 100.0 {
            return 100.0;
        }
    }

    // windows cut off at the right edge
    for start in (n - m + 1)..n {
        best = best.max(indel_ratio(needle, &haystack[start..]));
    }

    best
}

/// Normalized indel similarity: 100 * 2 * LCS / (|a| + |b|)
fn indel_ratio(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 100.0;
    }

    100.0 * (2 * lcs_len(a, b)) as f64 / total as f64
}

/// Longest common subsequence length
fn lcs_len(a: &[char], b: &[char]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preprocess() {
        assert_eq!(preprocess("  Invoice-Processing_v2 "), "invoice processing v2");
        assert_eq!(preprocess("Café"), "caf");
        assert_eq!(preprocess("!!!"), "");
    }

    #[test]
    fn test_sort_tokens() {
        assert_eq!(sort_tokens("processing invoice"), "invoice processing");
        assert_eq!(sort_tokens("  b   a  "), "a b");
    }

    #[test]
    fn test_lcs_len() {
        let a: Vec<char> = "abcde".chars().collect();
        let b: Vec<char> = "ace".chars().collect();
        assert_eq!(lcs_len(&a, &b), 3);
        assert_eq!(lcs_len(&a, &[]), 0);
    }

    #[test]
    fn test_identical_strings_score_100() {
        assert_eq!(partial_token_sort_ratio("Invoice Processing", "Invoice Processing"), 100.0);
    }

    #[test]
    fn test_token_order_is_ignored() {
        assert_eq!(partial_token_sort_ratio("Processing Invoice", "invoice processing"), 100.0);
    }

    #[test]
    fn test_substring_scores_100() {
        assert_eq!(partial_token_sort_ratio("invoice", "Invoice Processing"), 100.0);
        assert_eq!(partial_token_sort_ratio("Invoice Processing", "invoice"), 100.0);
    }

    #[test]
    fn test_typo_scores_high() {
        let score = partial_token_sort_ratio("Invoice Procesing", "Invoice Processing");
        assert!(score > 75.0 && score < 100.0, "score = {}", score);
    }

    #[test]
    fn test_unrelated_scores_low() {
        let score = partial_token_sort_ratio("Totally Unrelated", "Invoice Processing");
        assert!(score <= 75.0, "score = {}", score);
        let score = partial_token_sort_ratio("Totally Unrelated", "InvoiceBot");
        assert!(score <= 75.0, "score = {}", score);
    }

    #[test]
    fn test_empty_after_preprocess_scores_0() {
        assert_eq!(partial_token_sort_ratio("", "Invoice"), 0.0);
        assert_eq!(partial_token_sort_ratio("---", "Invoice"), 0.0);
    }

    #[test]
    fn test_partial_ratio_equal_length_is_symmetric() {
        assert_eq!(partial_ratio("abcd", "bcda"), partial_ratio("bcda", "abcd"));
    }

    #[test]
    fn test_score_is_whole_number() {
        let score = partial_token_sort_ratio("Payroll Export", "Payrol Exports Daily");
        assert_eq!(score, score.trunc());
    }

    #[test]
    fn test_extract_best_picks_highest() {
        let candidates = vec![Some("Payroll"), Some("Invoice Processing"), Some("Reports")];
        let (index, score) = extract_best("Invoice Procesing", &candidates).unwrap();
        assert_eq!(index, 1);
        assert!(score > 75.0);
    }

    #[test]
    fn test_extract_best_ties_keep_first() {
        let candidates = vec![None, Some("Invoice"), Some("Invoice")];
        let (index, score) = extract_best("Invoice", &candidates).unwrap();
        assert_eq!(index, 1);
        assert_eq!(score, 100.0);
    }

    #[test]
    fn test_extract_best_without_candidates() {
        let candidates: Vec<Option<&str>> = vec![None, None];
        let result = extract_best("Invoice", &candidates);
        assert!(matches!(result, Err(Error::NoCandidates(_))));
        assert!(extract_best("Invoice", &[]).is_err());
    }
}
