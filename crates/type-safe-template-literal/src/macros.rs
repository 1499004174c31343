//! Macros for calling the joiner at call sites.


/// Join literal segments and values written inline at the call site.
///
/// The first argument is a bracketed list of literal segments, followed by
/// the values that fill the gaps between them. All values must share one
/// type implementing [`Interpolation`](crate::Interpolation).
///
/// # Example
///
/// ```
/// use type_safe_template_literal::template_literal;
///
/// let user = "ada";
/// let greeting = template_literal!(["Hi ", ", welcome back"], user);
/// assert_eq!(greeting, "Hi ada, welcome back");
///
/// assert_eq!(template_literal!(["a", "b", "c"], "X", ""), "aXbc");
/// ```
#[macro_export]
macro_rules! template_literal {
    ([$($segment:expr),* $(,)?] $(,)?) => {
        $crate::type_safe_template_literal(&[$($segment),*], &[] as &[&str])
    };
    ([$($segment:expr),* $(,)?], $($value:expr),+ $(,)?) => {
        $crate::type_safe_template_literal(&[$($segment),*], &[$($value),+])
    };
}
