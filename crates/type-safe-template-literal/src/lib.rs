/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Tagged-template string joining.
//!
//! A tagged template splits a template into a fixed sequence of literal
//! segments and a sequence of interpolated values, where `values[i]` sits
//! between `segments[i]` and `segments[i + 1]`. This crate folds the two back
//! into one string:
//!
//! - Segments are emitted verbatim, in order
//! - A value is emitted when it is present and non-empty
//! - Missing values and empty values both render as nothing
//! - Values past the last gap are ignored
//!
//! Rust has no tagged-template syntax, so callers pass the two sequences
//! explicitly, use the [`template_literal!`] macro, or assemble a
//! [`TemplateParts`] piece by piece.
//!
//! # Example
//!
//! ```
//! use type_safe_template_literal::{TemplateParts, type_safe_template_literal};
//!
//! let greeting = type_safe_template_literal(&["Hello, ", "!"], &["World"]);
//! assert_eq!(greeting, "Hello, World!");
//!
//! let parts = TemplateParts::new()
//!     .literal("Hello, ")
//!     .value("World")
//!     .literal("!");
//! assert_eq!(parts.render(), greeting);
//! ```

pub mod error;
pub mod interpolation;
pub mod join;
pub mod macros;
pub mod parts;

// Re-export main types at crate root
pub use error::{TemplateError, TemplateResult};
pub use interpolation::{Interpolation, is_substituted};
pub use join::{join, type_safe_template_literal};
pub use parts::TemplateParts;
