use crate::ast::types::TypeTag;

use super::ast::Expr;

// LITERALS

/// Literal Value
/// The payload of a literal. Only its kind matters for type checking.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Integer(i64),
    Float(f64),
    String(String),
    Boolean(bool),
}

impl LiteralValue {
    pub fn kind(&self) -> TypeTag {
        match self {
            LiteralValue::Integer(_) => TypeTag::Integer,
            LiteralValue::Float(_) => TypeTag::Float,
            LiteralValue::String(_) => TypeTag::String,
            LiteralValue::Boolean(_) => TypeTag::Boolean,
        }
    }
}

/// Literal Expression
/// Represents an integer, float, string or boolean literal in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub value: LiteralValue,
}

// COMPLEX

/// Binary Expression
/// Represents a binary operation between two expressions in the AST.
///
/// `Op` is the operator family, so arithmetic, comparison and logical
/// nodes cannot be confused with each other.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr<Op> {
    pub left: Box<Expr>,
    pub operator: Op,
    pub right: Box<Expr>,
}

/// Grouped Expression
/// Represents a parenthesized expression in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedExpr {
    pub inner: Box<Expr>,
}
