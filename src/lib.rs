#![allow(clippy::module_inception)]

use std::sync::Arc;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod macros;
pub mod type_checker;

pub use ast::{
    ast::{Expr, ExprKind},
    operators::{
        ArithmeticClass, ArithmeticOp, BinaryOperator, ComparisonOp, LogicalOp, UnknownOperator,
    },
    types::TypeTag,
};
pub use type_checker::type_checker::{
    type_check, type_check_all, type_check_expr, CheckOptions, TypeChecker,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Arc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Arc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn null() -> Self {
        Span {
            start: Position::null(),
            end: Position::null(),
        }
    }

    /// Builds a span covering `start..end` within `file`.
    pub fn new(start: u32, end: u32, file: impl Into<Arc<String>>) -> Self {
        let file = file.into();
        Span {
            start: Position(start, Arc::clone(&file)),
            end: Position(end, file),
        }
    }
}

/// Renders a type error the way the front end reports it:
///
/// ```text
/// Error: UnsupportedOperandTypes (Unsupported operand types for + or -: String and Integer)
/// -> main.sl:4
/// ```
pub fn format_error(error: &Error) -> String {
    let position = error.get_position();

    let header = if let ErrorTip::None = error.get_tip() {
        format!("Error: {}", error.get_error_name())
    } else {
        format!("Error: {} ({})", error.get_error_name(), error.get_tip())
    };

    format!("{}\n-> {}:{}", header, position.1, position.0)
}

pub fn display_error(error: &Error) {
    println!("{}", format_error(error));
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::{
        errors::errors::{Error, ErrorImpl},
        ArithmeticClass, Position, Span, TypeTag,
    };

    #[test]
    fn test_format_error() {
        let error = Error::new(
            ErrorImpl::UnsupportedOperandTypes {
                class: ArithmeticClass::Additive,
                left: TypeTag::String,
                right: TypeTag::Integer,
            },
            Position(4, Arc::new("main.sl".to_string())),
        );

        assert_eq!(
            super::format_error(&error),
            "Error: UnsupportedOperandTypes (Unsupported operand types for + or -: String and Integer)\n-> main.sl:4"
        );
    }

    #[test]
    fn test_span_new_shares_file() {
        let span = Span::new(3, 9, "main.sl".to_string());
        assert_eq!(span.start, Position(3, Arc::new("main.sl".to_string())));
        assert_eq!(span.end.0, 9);
        assert!(Arc::ptr_eq(&span.start.1, &span.end.1));

        let file = Arc::new("lib.sl".to_string());
        let span = Span::new(0, 1, Arc::clone(&file));
        assert!(Arc::ptr_eq(&span.start.1, &file));
    }

    #[test]
    fn test_null_position() {
        let position = Position::null();
        assert_eq!(position.0, 0);
        assert_eq!(position.1.as_str(), "<null>");
    }
}
