//! Unit tests for error handling.
//!
//! This module contains tests for error names, tips and messages.

use crate::ast::operators::{ArithmeticClass, ComparisonOp, LogicalOp};
use crate::ast::types::TypeTag;
use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::sync::Arc;

fn position() -> Position {
    Position(0, Arc::new("test.sl".to_string()))
}

#[test]
fn test_error_position() {
    let pos = Position(42, Arc::new("test.sl".to_string()));
    let error = Error::new(
        ErrorImpl::NestingTooDeep {
            depth: 11,
            limit: 10,
        },
        pos.clone(),
    );

    assert_eq!(error.get_position(), &pos);
}

#[test]
fn test_unsupported_operand_types_error() {
    let error = Error::new(
        ErrorImpl::UnsupportedOperandTypes {
            class: ArithmeticClass::Multiplicative,
            left: TypeTag::Integer,
            right: TypeTag::Boolean,
        },
        position(),
    );

    assert_eq!(error.get_error_name(), "UnsupportedOperandTypes");
    assert_eq!(
        error.get_tip().to_string(),
        "Unsupported operand types for * or /: Integer and Boolean"
    );
    assert_eq!(
        error.to_string(),
        "unsupported operand types for * or /: Integer and Boolean"
    );
}

#[test]
fn test_string_comparison_mismatch_error() {
    let error = Error::new(
        ErrorImpl::StringComparisonMismatch {
            other: TypeTag::Float,
            operator: ComparisonOp::GreaterEquals,
            left: TypeTag::Float,
            right: TypeTag::String,
        },
        position(),
    );

    assert_eq!(error.get_error_name(), "StringComparisonMismatch");
    assert_eq!(
        error.get_tip().to_string(),
        "Cannot compare string with Float: Float >= String"
    );
}

#[test]
fn test_ordering_not_supported_for_boolean_error() {
    let error = Error::new(
        ErrorImpl::OrderingNotSupportedForBoolean {
            operator: ComparisonOp::Less,
            left: TypeTag::Boolean,
            right: TypeTag::Integer,
        },
        position(),
    );

    assert_eq!(error.get_error_name(), "OrderingNotSupportedForBoolean");
    assert_eq!(
        error.get_tip().to_string(),
        "Cannot use < operator between Boolean and Integer"
    );
}

#[test]
fn test_boolean_operands_required_error() {
    let error = Error::new(
        ErrorImpl::BooleanOperandsRequired {
            operator: LogicalOp::Or,
            left: TypeTag::String,
            right: TypeTag::Boolean,
        },
        position(),
    );

    assert_eq!(error.get_error_name(), "BooleanOperandsRequired");
    assert_eq!(
        error.get_tip().to_string(),
        "Logical operators or require boolean operands, got String and Boolean"
    );
}

#[test]
fn test_nesting_too_deep_error() {
    let error = Error::new(
        ErrorImpl::NestingTooDeep {
            depth: 65,
            limit: 64,
        },
        position(),
    );

    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert!(matches!(error.get_tip(), ErrorTip::None));
    assert_eq!(
        error.to_string(),
        "expression nesting depth 65 exceeds the limit of 64"
    );
}

#[test]
fn test_error_source_is_kind() {
    use std::error::Error as _;

    let error = Error::new(
        ErrorImpl::NestingTooDeep { depth: 3, limit: 2 },
        position(),
    );

    let source = error.source().unwrap();
    assert_eq!(source.to_string(), error.get_kind().to_string());
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
