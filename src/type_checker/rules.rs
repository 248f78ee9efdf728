//! Typing rules for each node kind.
//!
//! Rules see only the already synthesized operand types, never the tree,
//! and report violations as an `ErrorImpl` for the caller to position.

use crate::{
    ast::{
        expressions::LiteralExpr,
        operators::{ArithmeticOp, ComparisonOp, LogicalOp},
        types::TypeTag,
    },
    errors::errors::ErrorImpl,
};

pub fn literal_rule(literal: &LiteralExpr) -> TypeTag {
    literal.value.kind()
}

/// `+ - * /` share one rule: numeric operands only, `Float` wins.
pub fn arithmetic_rule(
    operator: ArithmeticOp,
    left: TypeTag,
    right: TypeTag,
) -> Result<TypeTag, ErrorImpl> {
    TypeTag::promote(left, right).ok_or(ErrorImpl::UnsupportedOperandTypes {
        class: operator.class(),
        left,
        right,
    })
}

/// Comparisons always produce `Boolean`.
///
/// A string only compares with a string, and booleans mix with numbers
/// under `==` and `!=` only.
pub fn comparison_rule(
    operator: ComparisonOp,
    left: TypeTag,
    right: TypeTag,
) -> Result<TypeTag, ErrorImpl> {
    use TypeTag::*;

    match (left, right) {
        (String, String) | (Boolean, Boolean) | (Integer | Float, Integer | Float) => Ok(Boolean),
        (String, other) | (other, String) => Err(ErrorImpl::StringComparisonMismatch {
            other,
            operator,
            left,
            right,
        }),
        (Boolean, Integer | Float) | (Integer | Float, Boolean) => {
            if operator.is_equality() {
                Ok(Boolean)
            } else {
                Err(ErrorImpl::OrderingNotSupportedForBoolean {
                    operator,
                    left,
                    right,
                })
            }
        }
    }
}

pub fn logical_rule(
    operator: LogicalOp,
    left: TypeTag,
    right: TypeTag,
) -> Result<TypeTag, ErrorImpl> {
    match (left, right) {
        (TypeTag::Boolean, TypeTag::Boolean) => Ok(TypeTag::Boolean),
        _ => Err(ErrorImpl::BooleanOperandsRequired {
            operator,
            left,
            right,
        }),
    }
}
