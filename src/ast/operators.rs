use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display, str::FromStr};
use thiserror::Error;

lazy_static! {
    /// Maps operator source text to its operator.
    ///
    /// `&&` and `||` are accepted as spellings of `and` and `or`.
    pub static ref OPERATOR_LOOKUP: HashMap<&'static str, BinaryOperator> = {
        let mut map = HashMap::new();
        map.insert("+", BinaryOperator::Arithmetic(ArithmeticOp::Add));
        map.insert("-", BinaryOperator::Arithmetic(ArithmeticOp::Subtract));
        map.insert("*", BinaryOperator::Arithmetic(ArithmeticOp::Multiply));
        map.insert("/", BinaryOperator::Arithmetic(ArithmeticOp::Divide));
        map.insert("==", BinaryOperator::Comparison(ComparisonOp::Equals));
        map.insert("!=", BinaryOperator::Comparison(ComparisonOp::NotEquals));
        map.insert("<", BinaryOperator::Comparison(ComparisonOp::Less));
        map.insert("<=", BinaryOperator::Comparison(ComparisonOp::LessEquals));
        map.insert(">", BinaryOperator::Comparison(ComparisonOp::Greater));
        map.insert(">=", BinaryOperator::Comparison(ComparisonOp::GreaterEquals));
        map.insert("and", BinaryOperator::Logical(LogicalOp::And));
        map.insert("or", BinaryOperator::Logical(LogicalOp::Or));
        map.insert("&&", BinaryOperator::Logical(LogicalOp::And));
        map.insert("||", BinaryOperator::Logical(LogicalOp::Or));
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ArithmeticOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl ArithmeticOp {
    pub fn class(&self) -> ArithmeticClass {
        match self {
            ArithmeticOp::Add | ArithmeticOp::Subtract => ArithmeticClass::Additive,
            ArithmeticOp::Multiply | ArithmeticOp::Divide => ArithmeticClass::Multiplicative,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            ArithmeticOp::Add => "+",
            ArithmeticOp::Subtract => "-",
            ArithmeticOp::Multiply => "*",
            ArithmeticOp::Divide => "/",
        }
    }
}

/// Groups arithmetic operators for error reporting only. Both classes
/// share the same typing rule.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ArithmeticClass {
    /// `+` and `-`
    Additive,
    /// `*` and `/`
    Multiplicative,
}

impl Display for ArithmeticClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArithmeticClass::Additive => write!(f, "+ or -"),
            ArithmeticClass::Multiplicative => write!(f, "* or /"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ComparisonOp {
    Equals,
    NotEquals,
    Less,
    LessEquals,
    Greater,
    GreaterEquals,
}

impl ComparisonOp {
    /// `==` and `!=`, the only comparisons allowed between booleans and numbers.
    pub fn is_equality(&self) -> bool {
        matches!(self, ComparisonOp::Equals | ComparisonOp::NotEquals)
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            ComparisonOp::Equals => "==",
            ComparisonOp::NotEquals => "!=",
            ComparisonOp::Less => "<",
            ComparisonOp::LessEquals => "<=",
            ComparisonOp::Greater => ">",
            ComparisonOp::GreaterEquals => ">=",
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum LogicalOp {
    And,
    Or,
}

impl LogicalOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            LogicalOp::And => "and",
            LogicalOp::Or => "or",
        }
    }
}

/// Any binary operator, tagged by family.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum BinaryOperator {
    Arithmetic(ArithmeticOp),
    Comparison(ComparisonOp),
    Logical(LogicalOp),
}

impl BinaryOperator {
    pub fn from_symbol(symbol: &str) -> Option<BinaryOperator> {
        OPERATOR_LOOKUP.get(symbol).copied()
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Arithmetic(op) => op.symbol(),
            BinaryOperator::Comparison(op) => op.symbol(),
            BinaryOperator::Logical(op) => op.symbol(),
        }
    }
}

/// Returned when operator text is not in `OPERATOR_LOOKUP`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown operator {0:?}")]
pub struct UnknownOperator(pub String);

impl FromStr for BinaryOperator {
    type Err = UnknownOperator;

    fn from_str(symbol: &str) -> Result<Self, Self::Err> {
        BinaryOperator::from_symbol(symbol).ok_or_else(|| UnknownOperator(symbol.to_string()))
    }
}

impl Display for ArithmeticOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Display for ComparisonOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Display for LogicalOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
