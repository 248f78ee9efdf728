//! Type checking module.
//!
//! This module computes the type of an expression tree bottom-up. It
//! transforms the untyped tree into a typed tree while:
//!
//! - Synthesizing one primitive type per node
//! - Promoting mixed `Integer`/`Float` arithmetic to `Float`
//! - Rejecting operand types that an operator does not accept
//!
//! The checker walks the tree with an explicit stack instead of recursion,
//! so nesting depth is bounded by heap memory rather than the call stack.

pub mod rules;
pub mod type_checker;
pub mod typed_ast;
