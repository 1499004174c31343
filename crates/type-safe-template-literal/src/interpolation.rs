/*
 * interpolation.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Values that can fill a gap between literal segments.

use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

/// A value that can be interpolated into a template.
///
/// `interpolated` returns `None` for an absent value. Present values return
/// their text, which may be empty; the joiner treats an empty value exactly
/// like an absent one.
pub trait Interpolation {
    fn interpolated(&self) -> Option<&str>;
}

impl Interpolation for str {
    fn interpolated(&self) -> Option<&str> {
        Some(self)
    }
}

impl Interpolation for String {
    fn interpolated(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl Interpolation for Cow<'_, str> {
    fn interpolated(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

impl Interpolation for Box<str> {
    fn interpolated(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

impl Interpolation for Rc<str> {
    fn interpolated(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

impl Interpolation for Arc<str> {
    fn interpolated(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

impl<T: Interpolation> Interpolation for Option<T> {
    fn interpolated(&self) -> Option<&str> {
        self.as_ref().and_then(|v| v.interpolated())
    }
}

impl<T: Interpolation + ?Sized> Interpolation for &T {
    fn interpolated(&self) -> Option<&str> {
        (**self).interpolated()
    }
}

/// Check whether a value contributes output when joined.
///
/// Only present, non-empty values are substituted. Strings such as `"0"` or
/// `"false"` are ordinary text and are substituted as-is.
pub fn is_substituted<V: Interpolation + ?Sized>(value: &V) -> bool {
    value.interpolated().is_some_and(|s| !s.is_empty())
}
