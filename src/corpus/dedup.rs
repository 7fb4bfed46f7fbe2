//! Near-duplicate title detection.
//!
//! Word-set Jaccard similarity over lowercased, whitespace-tokenized
//! titles. Deliberately naive: no stemming or synonym handling, so
//! rephrased titles slip through. That is accepted behavior, not a bug.

use std::collections::HashSet;

/// Default similarity threshold for duplicate detection.
pub const DEFAULT_THRESHOLD: f64 = 0.8;

/// Jaccard similarity between the word sets of two titles.
///
/// Returns a value in `[0.0, 1.0]`; two empty titles compare as `0.0`
/// rather than dividing by zero.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    let words_a: HashSet<&str> = a.split_whitespace().collect();
    let words_b: HashSet<&str> = b.split_whitespace().collect();

    let union = words_a.union(&words_b).count();
    if union == 0 {
        return 0.0;
    }

    let intersection = words_a.intersection(&words_b).count();
    intersection as f64 / union as f64
}

/// True iff any existing title is at least `threshold` similar to the
/// candidate.
pub fn is_duplicate<S: AsRef<str>>(candidate: &str, existing: &[S], threshold: f64) -> bool {
    existing
        .iter()
        .any(|title| similarity(candidate, title.as_ref()) >= threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_titles() {
        assert_eq!(similarity("React教程", "React教程"), 1.0);
        assert_eq!(similarity("hello world", "Hello  World"), 1.0);
    }

    #[test]
    fn test_disjoint_titles() {
        assert_eq!(similarity("A", "B"), 0.0);
        assert_eq!(similarity("one two", "three four"), 0.0);
    }

    #[test]
    fn test_both_empty_is_zero() {
        assert_eq!(similarity("", ""), 0.0);
        assert_eq!(similarity("   ", ""), 0.0);
    }

    #[test]
    fn test_partial_overlap() {
        // {rust, guide} vs {rust, handbook}: 1 shared of 3 total
        let sim = similarity("rust guide", "rust handbook");
        assert!((sim - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_is_duplicate_threshold() {
        let existing = ["rust tutorial for beginners"];

        assert!(is_duplicate("Rust Tutorial for Beginners", &existing, 0.8));
        assert!(!is_duplicate("advanced rust patterns", &existing, 0.8));

        // 3 of 4 words shared = 0.6 union-of-5... below 0.8, above 0.5
        assert!(!is_duplicate("rust tutorial for experts", &existing, 0.8));
        assert!(is_duplicate("rust tutorial for experts", &existing, 0.5));
    }

    #[test]
    fn test_is_duplicate_empty_existing() {
        let existing: [&str; 0] = [];
        assert!(!is_duplicate("anything", &existing, 0.8));
    }
}
