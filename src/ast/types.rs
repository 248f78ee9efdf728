//! Type system definitions for the AST.
//!
//! The language has exactly four primitive types and no user-defined
//! types. The only relation between them is numeric promotion:
//!
//! - `Integer` widens to `Float` when mixed with a `Float`
//! - `String` and `Boolean` are unrelated to every other type

use std::fmt::Display;

/// Represents the primitive types of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Integer,
    Float,
    String,
    Boolean,
}

impl TypeTag {
    pub const ALL: [TypeTag; 4] = [
        TypeTag::Integer,
        TypeTag::Float,
        TypeTag::String,
        TypeTag::Boolean,
    ];

    pub fn is_numeric(&self) -> bool {
        match self {
            TypeTag::Integer | TypeTag::Float => true,
            TypeTag::String | TypeTag::Boolean => false,
        }
    }

    /// Returns the result type of mixing two numeric operands.
    ///
    /// `None` if either side is not numeric. Promotion never narrows: any
    /// `Float` operand makes the result `Float`.
    pub fn promote(left: TypeTag, right: TypeTag) -> Option<TypeTag> {
        match (left, right) {
            (TypeTag::Integer, TypeTag::Integer) => Some(TypeTag::Integer),
            (TypeTag::Float, TypeTag::Integer)
            | (TypeTag::Integer, TypeTag::Float)
            | (TypeTag::Float, TypeTag::Float) => Some(TypeTag::Float),
            (TypeTag::String | TypeTag::Boolean, _) | (_, TypeTag::String | TypeTag::Boolean) => {
                None
            }
        }
    }
}

impl Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::TypeTag;

    #[test]
    fn test_promote_numeric() {
        assert_eq!(
            TypeTag::promote(TypeTag::Integer, TypeTag::Integer),
            Some(TypeTag::Integer)
        );
        assert_eq!(
            TypeTag::promote(TypeTag::Integer, TypeTag::Float),
            Some(TypeTag::Float)
        );
        assert_eq!(
            TypeTag::promote(TypeTag::Float, TypeTag::Integer),
            Some(TypeTag::Float)
        );
        assert_eq!(
            TypeTag::promote(TypeTag::Float, TypeTag::Float),
            Some(TypeTag::Float)
        );
    }

    #[test]
    fn test_promote_rejects_non_numeric() {
        for ty in TypeTag::ALL {
            assert_eq!(TypeTag::promote(TypeTag::String, ty), None);
            assert_eq!(TypeTag::promote(ty, TypeTag::Boolean), None);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(TypeTag::Integer.to_string(), "Integer");
        assert_eq!(TypeTag::Boolean.to_string(), "Boolean");
    }
}
