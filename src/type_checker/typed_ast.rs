//! Typed Abstract Syntax Tree definitions.
//!
//! This module contains the typed variants of AST nodes produced by
//! the type checker. The typed tree mirrors the untyped tree node for
//! node, and every node records the type synthesized for it.

use std::mem;

use crate::{
    ast::{
        expressions::{LiteralExpr, LiteralValue},
        operators::{ArithmeticOp, ComparisonOp, LogicalOp},
        types::TypeTag,
    },
    Span,
};

#[derive(Debug, Clone, PartialEq)]
pub enum TypedExprKind {
    Literal(LiteralExpr),
    Arithmetic(TypedBinaryExpr<ArithmeticOp>),
    Comparison(TypedBinaryExpr<ComparisonOp>),
    Logical(TypedBinaryExpr<LogicalOp>),
    Grouped(TypedGroupedExpr),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypedBinaryExpr<Op> {
    pub left: Box<TypedExpr>,
    pub operator: Op,
    pub right: Box<TypedExpr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypedGroupedExpr {
    pub inner: Box<TypedExpr>,
}

/// A checked expression and the type synthesized for it.
///
/// Like `Expr`, `Clone`, `PartialEq` and `Drop` handle any depth while the
/// derived `Debug` recurses.
#[derive(Debug)]
pub struct TypedExpr {
    pub kind: TypedExprKind,
    pub ty: TypeTag,
    pub span: Span,
}

impl TypedExpr {
    pub fn new(kind: TypedExprKind, ty: TypeTag, span: Span) -> Self {
        TypedExpr { kind, ty, span }
    }

    pub fn get_type(&self) -> TypeTag {
        self.ty
    }

    pub fn get_span(&self) -> &Span {
        &self.span
    }

    /// Returns the direct children, left to right.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = &TypedExpr> {
        let (first, second) = match &self.kind {
            TypedExprKind::Literal(_) => (None, None),
            TypedExprKind::Arithmetic(binary) => (Some(binary.left.as_ref()), Some(binary.right.as_ref())),
            TypedExprKind::Comparison(binary) => (Some(binary.left.as_ref()), Some(binary.right.as_ref())),
            TypedExprKind::Logical(binary) => (Some(binary.left.as_ref()), Some(binary.right.as_ref())),
            TypedExprKind::Grouped(grouped) => (Some(grouped.inner.as_ref()), None),
        };

        [first, second].into_iter().flatten()
    }

    /// Collects the type of every node in pre-order.
    pub fn types(&self) -> Vec<TypeTag> {
        let mut types = vec![];
        let mut pending = vec![self];

        while let Some(expr) = pending.pop() {
            types.push(expr.ty);
            pending.extend(expr.children().rev());
        }

        types
    }
}

enum CloneTask<'a> {
    Visit(&'a TypedExpr),
    Build(&'a TypedExpr),
}

impl Clone for TypedExpr {
    fn clone(&self) -> Self {
        let mut tasks = vec![CloneTask::Visit(self)];
        let mut built: Vec<TypedExpr> = vec![];

        while let Some(task) = tasks.pop() {
            match task {
                CloneTask::Visit(expr) => {
                    tasks.push(CloneTask::Build(expr));
                    tasks.extend(expr.children().rev().map(CloneTask::Visit));
                }
                CloneTask::Build(expr) => {
                    let kind = match &expr.kind {
                        TypedExprKind::Literal(literal) => TypedExprKind::Literal(literal.clone()),
                        TypedExprKind::Arithmetic(binary) => {
                            let (left, right) = pop_pair(&mut built);
                            TypedExprKind::Arithmetic(TypedBinaryExpr {
                                left,
                                operator: binary.operator,
                                right,
                            })
                        }
                        TypedExprKind::Comparison(binary) => {
                            let (left, right) = pop_pair(&mut built);
                            TypedExprKind::Comparison(TypedBinaryExpr {
                                left,
                                operator: binary.operator,
                                right,
                            })
                        }
                        TypedExprKind::Logical(binary) => {
                            let (left, right) = pop_pair(&mut built);
                            TypedExprKind::Logical(TypedBinaryExpr {
                                left,
                                operator: binary.operator,
                                right,
                            })
                        }
                        TypedExprKind::Grouped(_) => TypedExprKind::Grouped(TypedGroupedExpr {
                            inner: Box::new(pop_built(&mut built)),
                        }),
                    };
                    built.push(TypedExpr::new(kind, expr.ty, expr.span.clone()));
                }
            }
        }

        pop_built(&mut built)
    }
}

fn pop_built(built: &mut Vec<TypedExpr>) -> TypedExpr {
    built.pop().expect("children are copied before their parent")
}

fn pop_pair(built: &mut Vec<TypedExpr>) -> (Box<TypedExpr>, Box<TypedExpr>) {
    let right = pop_built(built);
    let left = pop_built(built);
    (Box::new(left), Box::new(right))
}

impl PartialEq for TypedExpr {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];

        while let Some((left, right)) = pending.pop() {
            if left.ty != right.ty
                || left.span != right.span
                || !same_node(&left.kind, &right.kind)
            {
                return false;
            }
            pending.extend(left.children().zip(right.children()));
        }

        true
    }
}

fn same_node(left: &TypedExprKind, right: &TypedExprKind) -> bool {
    match (left, right) {
        (TypedExprKind::Literal(left), TypedExprKind::Literal(right)) => left == right,
        (TypedExprKind::Arithmetic(left), TypedExprKind::Arithmetic(right)) => {
            left.operator == right.operator
        }
        (TypedExprKind::Comparison(left), TypedExprKind::Comparison(right)) => {
            left.operator == right.operator
        }
        (TypedExprKind::Logical(left), TypedExprKind::Logical(right)) => {
            left.operator == right.operator
        }
        (TypedExprKind::Grouped(_), TypedExprKind::Grouped(_)) => true,
        _ => false,
    }
}

// Same as `Expr`: avoid a recursive drop on deeply nested trees.
impl Drop for TypedExpr {
    fn drop(&mut self) {
        let mut pending = vec![];
        detach_children(&mut self.kind, &mut pending);

        while let Some(mut expr) = pending.pop() {
            detach_children(&mut expr.kind, &mut pending);
        }
    }
}

fn detach_children(kind: &mut TypedExprKind, pending: &mut Vec<Box<TypedExpr>>) {
    let leaf = TypedExprKind::Literal(LiteralExpr {
        value: LiteralValue::Boolean(false),
    });

    match mem::replace(kind, leaf) {
        TypedExprKind::Literal(_) => {}
        TypedExprKind::Arithmetic(binary) => {
            pending.push(binary.left);
            pending.push(binary.right);
        }
        TypedExprKind::Comparison(binary) => {
            pending.push(binary.left);
            pending.push(binary.right);
        }
        TypedExprKind::Logical(binary) => {
            pending.push(binary.left);
            pending.push(binary.right);
        }
        TypedExprKind::Grouped(grouped) => pending.push(grouped.inner),
    }
}
