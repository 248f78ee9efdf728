use std::mem;

use crate::Span;

use super::{
    expressions::{BinaryExpr, GroupedExpr, LiteralExpr, LiteralValue},
    operators::{ArithmeticOp, ComparisonOp, LogicalOp},
};

/// Expression Kinds
///
/// The closed set of node kinds the language has. Every pass over the
/// tree matches on this exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    Literal(LiteralExpr),
    Arithmetic(BinaryExpr<ArithmeticOp>),
    Comparison(BinaryExpr<ComparisonOp>),
    Logical(BinaryExpr<LogicalOp>),
    Grouped(GroupedExpr),
}

/// Expression
///
/// A node of the expression tree together with its source span. Trees are
/// built by the parser and only ever borrowed by later passes.
///
/// `Clone`, `PartialEq` and `Drop` work on a heap stack and handle any
/// nesting depth. `Debug` is derived and recurses, so formatting a very
/// deep tree with `{:?}` can exhaust the call stack.
#[derive(Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }

    pub fn literal(value: LiteralValue) -> Self {
        Expr::new(ExprKind::Literal(LiteralExpr { value }), Span::null())
    }

    pub fn integer(value: i64) -> Self {
        Expr::literal(LiteralValue::Integer(value))
    }

    pub fn float(value: f64) -> Self {
        Expr::literal(LiteralValue::Float(value))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expr::literal(LiteralValue::String(value.into()))
    }

    pub fn boolean(value: bool) -> Self {
        Expr::literal(LiteralValue::Boolean(value))
    }

    pub fn arithmetic(left: Expr, operator: ArithmeticOp, right: Expr) -> Self {
        Expr::new(
            ExprKind::Arithmetic(BinaryExpr {
                left: Box::new(left),
                operator,
                right: Box::new(right),
            }),
            Span::null(),
        )
    }

    pub fn comparison(left: Expr, operator: ComparisonOp, right: Expr) -> Self {
        Expr::new(
            ExprKind::Comparison(BinaryExpr {
                left: Box::new(left),
                operator,
                right: Box::new(right),
            }),
            Span::null(),
        )
    }

    pub fn logical(left: Expr, operator: LogicalOp, right: Expr) -> Self {
        Expr::new(
            ExprKind::Logical(BinaryExpr {
                left: Box::new(left),
                operator,
                right: Box::new(right),
            }),
            Span::null(),
        )
    }

    pub fn grouped(inner: Expr) -> Self {
        Expr::new(
            ExprKind::Grouped(GroupedExpr {
                inner: Box::new(inner),
            }),
            Span::null(),
        )
    }

    /// Replaces the span, for producers that track source positions.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn get_span(&self) -> &Span {
        &self.span
    }

    /// Returns the direct children, left to right.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = &Expr> {
        let (first, second) = match &self.kind {
            ExprKind::Literal(_) => (None, None),
            ExprKind::Arithmetic(binary) => (Some(binary.left.as_ref()), Some(binary.right.as_ref())),
            ExprKind::Comparison(binary) => (Some(binary.left.as_ref()), Some(binary.right.as_ref())),
            ExprKind::Logical(binary) => (Some(binary.left.as_ref()), Some(binary.right.as_ref())),
            ExprKind::Grouped(grouped) => (Some(grouped.inner.as_ref()), None),
        };

        [first, second].into_iter().flatten()
    }
}

enum CloneTask<'a> {
    Visit(&'a Expr),
    Build(&'a Expr),
}

// Post-order rebuild: by the time a node is built its copied children are
// on top of `built`, right child last.
impl Clone for Expr {
    fn clone(&self) -> Self {
        let mut tasks = vec![CloneTask::Visit(self)];
        let mut built: Vec<Expr> = vec![];

        while let Some(task) = tasks.pop() {
            match task {
                CloneTask::Visit(expr) => {
                    tasks.push(CloneTask::Build(expr));
                    tasks.extend(expr.children().rev().map(CloneTask::Visit));
                }
                CloneTask::Build(expr) => {
                    let kind = match &expr.kind {
                        ExprKind::Literal(literal) => ExprKind::Literal(literal.clone()),
                        ExprKind::Arithmetic(binary) => {
                            let (left, right) = pop_pair(&mut built);
                            ExprKind::Arithmetic(BinaryExpr {
                                left,
                                operator: binary.operator,
                                right,
                            })
                        }
                        ExprKind::Comparison(binary) => {
                            let (left, right) = pop_pair(&mut built);
                            ExprKind::Comparison(BinaryExpr {
                                left,
                                operator: binary.operator,
                                right,
                            })
                        }
                        ExprKind::Logical(binary) => {
                            let (left, right) = pop_pair(&mut built);
                            ExprKind::Logical(BinaryExpr {
                                left,
                                operator: binary.operator,
                                right,
                            })
                        }
                        ExprKind::Grouped(_) => ExprKind::Grouped(GroupedExpr {
                            inner: Box::new(pop_built(&mut built)),
                        }),
                    };
                    built.push(Expr::new(kind, expr.span.clone()));
                }
            }
        }

        pop_built(&mut built)
    }
}

fn pop_built(built: &mut Vec<Expr>) -> Expr {
    built.pop().expect("children are copied before their parent")
}

fn pop_pair(built: &mut Vec<Expr>) -> (Box<Expr>, Box<Expr>) {
    let right = pop_built(built);
    let left = pop_built(built);
    (Box::new(left), Box::new(right))
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];

        while let Some((left, right)) = pending.pop() {
            if left.span != right.span || !same_node(&left.kind, &right.kind) {
                return false;
            }
            pending.extend(left.children().zip(right.children()));
        }

        true
    }
}

/// Compares two nodes without looking at their children.
fn same_node(left: &ExprKind, right: &ExprKind) -> bool {
    match (left, right) {
        (ExprKind::Literal(left), ExprKind::Literal(right)) => left == right,
        (ExprKind::Arithmetic(left), ExprKind::Arithmetic(right)) => left.operator == right.operator,
        (ExprKind::Comparison(left), ExprKind::Comparison(right)) => left.operator == right.operator,
        (ExprKind::Logical(left), ExprKind::Logical(right)) => left.operator == right.operator,
        (ExprKind::Grouped(_), ExprKind::Grouped(_)) => true,
        _ => false,
    }
}

// Deeply nested trees would overflow the stack with the derived
// recursive drop, so children are detached onto a heap stack first.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = vec![];
        detach_children(&mut self.kind, &mut pending);

        while let Some(mut expr) = pending.pop() {
            detach_children(&mut expr.kind, &mut pending);
        }
    }
}

fn detach_children(kind: &mut ExprKind, pending: &mut Vec<Box<Expr>>) {
    let leaf = ExprKind::Literal(LiteralExpr {
        value: LiteralValue::Boolean(false),
    });

    match mem::replace(kind, leaf) {
        ExprKind::Literal(_) => {}
        ExprKind::Arithmetic(binary) => {
            pending.push(binary.left);
            pending.push(binary.right);
        }
        ExprKind::Comparison(binary) => {
            pending.push(binary.left);
            pending.push(binary.right);
        }
        ExprKind::Logical(binary) => {
            pending.push(binary.left);
            pending.push(binary.right);
        }
        ExprKind::Grouped(grouped) => pending.push(grouped.inner),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deep_chain(depth: usize) -> Expr {
        let mut expr = Expr::integer(1);
        for _ in 0..depth {
            expr = Expr::grouped(expr);
        }
        expr
    }

    #[test]
    fn test_children_order() {
        let expr = Expr::comparison(Expr::integer(1), ComparisonOp::Less, Expr::float(2.0));
        let children: Vec<&Expr> = expr.children().collect();
        assert_eq!(children, vec![&Expr::integer(1), &Expr::float(2.0)]);

        let reversed: Vec<&Expr> = expr.children().rev().collect();
        assert_eq!(reversed, vec![&Expr::float(2.0), &Expr::integer(1)]);

        assert_eq!(Expr::grouped(Expr::boolean(true)).children().count(), 1);
        assert_eq!(Expr::string("s").children().count(), 0);
    }

    #[test]
    fn test_clone_preserves_shape() {
        let expr = Expr::logical(
            Expr::grouped(Expr::arithmetic(
                Expr::integer(1),
                ArithmeticOp::Divide,
                Expr::float(0.5),
            )),
            LogicalOp::And,
            Expr::string("x").with_span(Span::new(4, 7, "main.sl".to_string())),
        );

        let copy = expr.clone();
        assert_eq!(copy, expr);

        match &copy.kind {
            ExprKind::Logical(binary) => {
                assert_eq!(binary.operator, LogicalOp::And);
                assert_eq!(binary.right.get_span().start.0, 4);
                assert!(matches!(binary.left.kind, ExprKind::Grouped(_)));
            }
            other => panic!("expected a logical node, got {:?}", other),
        }
    }

    #[test]
    fn test_equality_checks_operators_literals_and_spans() {
        let base = || Expr::arithmetic(Expr::integer(1), ArithmeticOp::Add, Expr::integer(2));

        assert_eq!(base(), base());
        assert_ne!(
            base(),
            Expr::arithmetic(Expr::integer(1), ArithmeticOp::Subtract, Expr::integer(2))
        );
        assert_ne!(
            base(),
            Expr::arithmetic(Expr::integer(1), ArithmeticOp::Add, Expr::integer(3))
        );
        assert_ne!(base(), base().with_span(Span::new(0, 5, "main.sl".to_string())));
        assert_ne!(base(), Expr::grouped(base()));
    }

    #[test]
    fn test_deep_clone_and_compare() {
        let expr = deep_chain(100_000);
        let copy = expr.clone();
        assert_eq!(copy, expr);

        let other = Expr::grouped(deep_chain(99_999));
        assert_eq!(other, expr);

        let mut different = Expr::integer(2);
        for _ in 0..100_000 {
            different = Expr::grouped(different);
        }
        assert_ne!(different, expr);
    }
}
