/*
 * join.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Folding literal segments and interpolated values into one string.
//!
//! The output is
//! `segments[0] + f(values[0]) + segments[1] + ... + segments[n]`
//! where `f(v)` is `v` when the value is present and non-empty, and the
//! empty string otherwise. Joining is total: malformed shapes degrade to
//! "ignore extra values, treat missing values as empty".

use crate::interpolation::Interpolation;

/// Join the literal segments of a tagged template with its values.
///
/// `values[i]` is emitted between `segments[i]` and `segments[i + 1]`.
/// A missing or empty value contributes nothing, so an empty interpolation
/// cannot be told apart from an absent one in the output. Values past the
/// last gap are ignored, and an empty `segments` slice yields `""`.
///
/// # Example
///
/// ```
/// use type_safe_template_literal::type_safe_template_literal;
///
/// assert_eq!(type_safe_template_literal(&["a", "b", "c"], &["X", "Y"]), "aXbYc");
/// assert_eq!(type_safe_template_literal(&["a", "b", "c"], &["X", ""]), "aXbc");
/// assert_eq!(type_safe_template_literal(&["a", "b", "c"], &["X"]), "aXbc");
/// ```
pub fn type_safe_template_literal<S, V>(segments: &[S], values: &[V]) -> String
where
    S: AsRef<str>,
    V: Interpolation,
{
    let gaps = segments.len().saturating_sub(1);
    if values.len() != gaps {
        tracing::trace!(
            segments = segments.len(),
            values = values.len(),
            "Template values do not match segment gaps"
        );
    }

    let substitutions = || {
        values
            .iter()
            .take(gaps)
            .filter_map(|v| v.interpolated())
            .filter(|v| !v.is_empty())
    };

    let capacity = segments.iter().map(|s| s.as_ref().len()).sum::<usize>()
        + substitutions().map(str::len).sum::<usize>();
    let mut output = String::with_capacity(capacity);

    for (index, segment) in segments.iter().enumerate() {
        output.push_str(segment.as_ref());
        if index >= gaps {
            continue;
        }
        if let Some(value) = values.get(index).and_then(|v| v.interpolated()) {
            output.push_str(value);
        }
    }

    output
}

/// Short alias for [`type_safe_template_literal`].
pub fn join<S, V>(segments: &[S], values: &[V]) -> String
where
    S: AsRef<str>,
    V: Interpolation,
{
    type_safe_template_literal(segments, values)
}
