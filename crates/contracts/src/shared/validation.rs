//! Per-field validation primitives.
//!
//! Every payload type exposes `validate() -> Vec<FieldError>`; these are the
//! building blocks. All checks are pure so they can run identically in a
//! submit handler and in a unit test.

use serde::{Deserialize, Serialize};

/// One failed constraint, addressed by the wire-level field name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub path: String,
    pub message: String,
}

impl FieldError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Look up the first error for a field, for inline display under an input.
pub fn error_for<'a>(errors: &'a [FieldError], path: &str) -> Option<&'a FieldError> {
    errors.iter().find(|e| e.path == path)
}

/// Slug shape: lowercase alphanumeric runs joined by single hyphens
/// (`my-slug-2`). Implemented as a scanner; the shape is too small to pull in
/// a regex engine for.
pub fn is_valid_slug(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    let mut prev_hyphen = true; // forbids a leading hyphen
    for ch in value.chars() {
        match ch {
            'a'..='z' | '0'..='9' => prev_hyphen = false,
            '-' if !prev_hyphen => prev_hyphen = true,
            _ => return false,
        }
    }
    !prev_hyphen // forbids a trailing hyphen
}

/// Validate an optional slug field: blank means "let the backend derive one".
pub fn check_slug(errors: &mut Vec<FieldError>, path: &str, value: &str) {
    let value = value.trim();
    if !value.is_empty() && !is_valid_slug(value) {
        errors.push(FieldError::new(
            path,
            "Slug must be lowercase with hyphens",
        ));
    }
}

pub fn check_required(errors: &mut Vec<FieldError>, path: &str, value: &str, label: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(path, format!("{} is required", label)));
    }
}

/// Required with character-count bounds. Reports a single error per field:
/// missing wins over too-short/too-long.
pub fn check_bounded(
    errors: &mut Vec<FieldError>,
    path: &str,
    value: &str,
    label: &str,
    min: usize,
    max: usize,
) {
    let len = value.trim().chars().count();
    if len == 0 {
        errors.push(FieldError::new(path, format!("{} is required", label)));
    } else if len < min {
        errors.push(FieldError::new(
            path,
            format!("{} must be at least {} characters", label, min),
        ));
    } else if len > max {
        errors.push(FieldError::new(
            path,
            format!("{} must be at most {} characters", label, max),
        ));
    }
}

/// Homepage curation guard: a record already on the homepage may stay there;
/// a new one only fits while slots remain. Advisory only -- `in_use` comes
/// from the last fetched meta, not from the server at toggle time.
pub fn can_set_homepage(already_on: bool, in_use: u64, cap: u64) -> bool {
    already_on || in_use < cap
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_accepts_hyphenated_lowercase() {
        assert!(is_valid_slug("my-slug-2"));
        assert!(is_valid_slug("a"));
        assert!(is_valid_slug("2024-filings"));
    }

    #[test]
    fn slug_rejects_bad_shapes() {
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("My Slug!"));
        assert!(!is_valid_slug("-leading"));
        assert!(!is_valid_slug("trailing-"));
        assert!(!is_valid_slug("double--hyphen"));
        assert!(!is_valid_slug("UPPER"));
        assert!(!is_valid_slug("under_score"));
    }

    #[test]
    fn blank_slug_is_left_to_the_backend() {
        let mut errors = Vec::new();
        check_slug(&mut errors, "slug", "  ");
        assert!(errors.is_empty());

        check_slug(&mut errors, "slug", "My Slug!");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Slug must be lowercase with hyphens");
    }

    #[test]
    fn bounded_reports_one_error_per_field() {
        let mut errors = Vec::new();
        check_bounded(&mut errors, "title", "", "Title", 5, 160);
        check_bounded(&mut errors, "excerpt", "short", "Excerpt", 10, 160);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].message, "Title is required");
        assert_eq!(errors[1].message, "Excerpt must be at least 10 characters");
    }

    #[test]
    fn homepage_guard_respects_cap_and_current_state() {
        assert!(can_set_homepage(false, 2, 3));
        assert!(!can_set_homepage(false, 3, 3));
        // already-curated records are never evicted by the guard
        assert!(can_set_homepage(true, 3, 3));
    }
}
