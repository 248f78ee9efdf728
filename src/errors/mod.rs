//! Error types and error handling for the type checker.
//!
//! This module defines the errors produced while checking an expression
//! tree. It includes:
//!
//! - Error structures with source position information
//! - One error variant per violated typing rule
//! - Error names and suggestions for diagnostics

pub mod errors;

#[cfg(test)]
mod tests;
