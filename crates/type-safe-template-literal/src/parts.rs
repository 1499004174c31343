/*
 * parts.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! An owned template: literal segments plus the values between them.
//!
//! `TemplateParts` plays the role of the template-strings object a host
//! language would hand to a tag function. It can be built incrementally
//! with [`TemplateParts::literal`] and [`TemplateParts::value`], which keep
//! the `segments.len() == values.len() + 1` shape, or taken as-is from
//! external sequences with [`TemplateParts::from_raw`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{TemplateError, TemplateResult};
use crate::interpolation::Interpolation;
use crate::join::type_safe_template_literal;

/// Literal segments and interpolated values of a single template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateParts {
    segments: Vec<String>,
    values: Vec<String>,
}

impl TemplateParts {
    /// Create a template with one empty segment and no values.
    pub fn new() -> Self {
        Self {
            segments: vec![String::new()],
            values: Vec::new(),
        }
    }

    /// Wrap externally produced sequences without validating their shape.
    pub fn from_raw(segments: Vec<String>, values: Vec<String>) -> Self {
        Self { segments, values }
    }

    /// Append literal text to the trailing segment.
    pub fn literal(mut self, text: &str) -> Self {
        self.push_literal(text);
        self
    }

    /// Fill the next gap with a value and open a new trailing segment.
    pub fn value<V: Interpolation>(mut self, value: V) -> Self {
        self.push_value(value);
        self
    }

    pub fn push_literal(&mut self, text: &str) {
        match self.segments.last_mut() {
            Some(last) => last.push_str(text),
            None => self.segments.push(text.to_string()),
        }
    }

    /// Absent values are stored as empty strings; both render as nothing.
    pub fn push_value<V: Interpolation>(&mut self, value: V) {
        if self.segments.is_empty() {
            self.segments.push(String::new());
        }
        self.values
            .push(value.interpolated().unwrap_or_default().to_string());
        self.segments.push(String::new());
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Number of interpolation gaps between the literal segments.
    pub fn arity(&self) -> usize {
        self.segments.len().saturating_sub(1)
    }

    pub fn is_well_formed(&self) -> bool {
        self.validate().is_ok()
    }

    /// Check that there is at least one segment and exactly one value per gap.
    ///
    /// Rendering never calls this; malformed parts still render.
    pub fn validate(&self) -> TemplateResult<()> {
        if self.segments.is_empty() {
            return Err(TemplateError::NoSegments);
        }
        if self.values.len() != self.arity() {
            return Err(TemplateError::ArityMismatch {
                segments: self.segments.len(),
                values: self.values.len(),
            });
        }
        Ok(())
    }

    /// Join the segments and values into the final string.
    pub fn render(&self) -> String {
        type_safe_template_literal(&self.segments, &self.values)
    }
}

impl Default for TemplateParts {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TemplateParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builder_keeps_shape() {
        let parts = TemplateParts::new()
            .literal("a")
            .value("X")
            .literal("b")
            .value("Y")
            .literal("c");

        assert_eq!(parts.segments(), ["a", "b", "c"]);
        assert_eq!(parts.values(), ["X", "Y"]);
        assert_eq!(parts.arity(), 2);
        assert!(parts.is_well_formed());
        assert_eq!(parts.render(), "aXbYc");
    }

    #[test]
    fn test_adjacent_values_and_literals() {
        let parts = TemplateParts::new()
            .value("X")
            .value("Y")
            .literal("a")
            .literal("b");

        assert_eq!(parts.segments(), ["", "", "ab"]);
        assert_eq!(parts.render(), "XYab");
    }

    #[test]
    fn test_absent_value_renders_empty() {
        let parts = TemplateParts::new()
            .literal("a")
            .value(None::<&str>)
            .literal("b");

        assert_eq!(parts.values(), [""]);
        assert_eq!(parts.render(), "ab");
        assert!(parts.validate().is_ok());
    }

    #[test]
    fn test_new_is_empty_template() {
        let parts = TemplateParts::default();
        assert_eq!(parts.render(), "");
        assert_eq!(parts.arity(), 0);
        assert!(parts.is_well_formed());
    }

    #[test]
    fn test_validate_no_segments() {
        let parts = TemplateParts::from_raw(vec![], vec![]);
        assert_eq!(parts.validate(), Err(TemplateError::NoSegments));
        assert_eq!(parts.render(), "");
    }

    #[test]
    fn test_validate_arity_mismatch_still_renders() {
        let parts = TemplateParts::from_raw(
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
            vec!["X".to_string()],
        );

        assert_eq!(
            parts.validate(),
            Err(TemplateError::ArityMismatch {
                segments: 3,
                values: 1
            })
        );
        assert_eq!(parts.render(), "aXbc");
    }

    #[test]
    fn test_push_on_raw_empty_parts() {
        let mut parts = TemplateParts::from_raw(vec![], vec![]);
        parts.push_value("X");
        parts.push_literal("b");

        assert_eq!(parts.segments(), ["", "b"]);
        assert!(parts.is_well_formed());
        assert_eq!(parts.render(), "Xb");
    }

    #[test]
    fn test_display_matches_render() {
        let parts = TemplateParts::new().literal("id=").value("42");
        assert_eq!(parts.to_string(), "id=42");
        assert_eq!(format!("[{parts}]"), "[id=42]");
    }
}
