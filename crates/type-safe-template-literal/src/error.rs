/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Error types for template shape validation.
//!
//! Joining never fails. These errors are only produced by
//! [`TemplateParts::validate`](crate::TemplateParts::validate), for callers
//! that want the segment/value invariant checked explicitly.

use thiserror::Error;

/// Errors describing a malformed template shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// A template always has at least one literal segment.
    #[error("Template has no literal segments")]
    NoSegments,

    /// The number of values does not fill the gaps between segments.
    #[error(
        "Template arity mismatch: {segments} segments expect {} values, found {values}",
        segments.saturating_sub(1)
    )]
    ArityMismatch { segments: usize, values: usize },
}

/// Result type for template validation.
pub type TemplateResult<T> = Result<T, TemplateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity_mismatch_message() {
        let err = TemplateError::ArityMismatch {
            segments: 3,
            values: 1,
        };
        assert_eq!(
            err.to_string(),
            "Template arity mismatch: 3 segments expect 2 values, found 1"
        );
    }

    #[test]
    fn test_no_segments_message() {
        assert_eq!(
            TemplateError::NoSegments.to_string(),
            "Template has no literal segments"
        );
    }
}
