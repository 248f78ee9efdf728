//! Utility macros for the type checker.
//!
//! - `MK_ERROR!` - Creates an Error positioned at the start of a span

/// Creates an Error positioned at the start of a span.
///
/// # Arguments
///
/// * `$kind` - The ErrorImpl describing the violation
/// * `$span` - The span of the offending expression
///
/// # Example
///
/// ```ignore
/// let error = MK_ERROR!(ErrorImpl::NestingTooDeep { depth: 5, limit: 4 }, expr.get_span());
/// ```
#[macro_export]
macro_rules! MK_ERROR {
    ($kind:expr, $span:expr) => {
        $crate::errors::errors::Error::new($kind, $span.start.clone())
    };
}
