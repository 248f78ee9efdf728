use std::fmt::Display;

use thiserror::Error;

use crate::{
    ast::{
        operators::{ArithmeticClass, ComparisonOp, LogicalOp},
        types::TypeTag,
    },
    Position,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnsupportedOperandTypes { .. } => "UnsupportedOperandTypes",
            ErrorImpl::StringComparisonMismatch { .. } => "StringComparisonMismatch",
            ErrorImpl::OrderingNotSupportedForBoolean { .. } => "OrderingNotSupportedForBoolean",
            ErrorImpl::BooleanOperandsRequired { .. } => "BooleanOperandsRequired",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnsupportedOperandTypes { class, left, right } => ErrorTip::Suggestion(
                format!("Unsupported operand types for {}: {} and {}", class, left, right),
            ),
            ErrorImpl::StringComparisonMismatch {
                other,
                operator,
                left,
                right,
            } => ErrorTip::Suggestion(format!(
                "Cannot compare string with {}: {} {} {}",
                other, left, operator, right
            )),
            ErrorImpl::OrderingNotSupportedForBoolean {
                operator,
                left,
                right,
            } => ErrorTip::Suggestion(format!(
                "Cannot use {} operator between {} and {}",
                operator, left, right
            )),
            ErrorImpl::BooleanOperandsRequired {
                operator,
                left,
                right,
            } => ErrorTip::Suggestion(format!(
                "Logical operators {} require boolean operands, got {} and {}",
                operator, left, right
            )),
            ErrorImpl::NestingTooDeep { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unsupported operand types for {class}: {left} and {right}")]
    UnsupportedOperandTypes {
        class: ArithmeticClass,
        left: TypeTag,
        right: TypeTag,
    },
    /// `other` is whichever operand is not a string.
    #[error("cannot compare string with {other}: {left} {operator} {right}")]
    StringComparisonMismatch {
        other: TypeTag,
        operator: ComparisonOp,
        left: TypeTag,
        right: TypeTag,
    },
    #[error("ordering operator {operator} is not supported between {left} and {right}")]
    OrderingNotSupportedForBoolean {
        operator: ComparisonOp,
        left: TypeTag,
        right: TypeTag,
    },
    #[error("logical operator {operator} requires boolean operands, got {left} and {right}")]
    BooleanOperandsRequired {
        operator: LogicalOp,
        left: TypeTag,
        right: TypeTag,
    },
    #[error("expression nesting depth {depth} exceeds the limit of {limit}")]
    NestingTooDeep { depth: usize, limit: usize },
}
