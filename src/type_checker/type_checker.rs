use crate::{
    ast::{
        ast::{Expr, ExprKind},
        expressions::BinaryExpr,
        types::TypeTag,
    },
    errors::errors::{Error, ErrorImpl},
    Span, MK_ERROR,
};

use super::{
    rules::{arithmetic_rule, comparison_rule, literal_rule, logical_rule},
    typed_ast::{TypedBinaryExpr, TypedExpr, TypedExprKind, TypedGroupedExpr},
};

/// Settings for a type checking run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckOptions {
    /// Maximum nesting depth, counting the root as 1. `None` means unlimited.
    pub max_depth: Option<usize>,
}

impl CheckOptions {
    pub fn with_max_depth(mut self, limit: usize) -> Self {
        self.max_depth = Some(limit);
        self
    }
}

/// Decides what happens to an error once a rule reports it.
trait Reporter {
    fn report(&mut self, error: Error) -> Result<(), Error>;
}

/// Aborts the walk on the first error.
struct FailFast;

impl Reporter for FailFast {
    fn report(&mut self, error: Error) -> Result<(), Error> {
        Err(error)
    }
}

/// Keeps walking and remembers every error.
#[derive(Default)]
struct Collector {
    errors: Vec<Error>,
}

impl Reporter for Collector {
    fn report(&mut self, error: Error) -> Result<(), Error> {
        self.errors.push(error);
        Ok(())
    }
}

/// The result of checking one node.
///
/// A poisoned node has no typed tree because it or one of its descendants
/// failed. Its type is still known when the rule fixes it regardless of
/// the operands (comparisons and logical operators are always `Boolean`).
/// Rules accept an unknown operand type silently, so one error is not
/// reported again by every ancestor.
enum Synthesized {
    Typed(TypedExpr),
    Poisoned(Option<TypeTag>),
}

impl Synthesized {
    fn get_type(&self) -> Option<TypeTag> {
        match self {
            Synthesized::Typed(typed) => Some(typed.ty),
            Synthesized::Poisoned(ty) => *ty,
        }
    }
}

enum Task<'a> {
    Visit(&'a Expr, usize),
    Reduce(&'a Expr),
}

#[derive(Debug, Clone, Default)]
pub struct TypeChecker {
    pub options: CheckOptions,
}

impl TypeChecker {
    pub fn new(options: CheckOptions) -> Self {
        TypeChecker { options }
    }

    /// Returns the type of `expr`, or the first error found bottom-up.
    pub fn check(&self, expr: &Expr) -> Result<TypeTag, Error> {
        self.annotate(expr).map(|typed| typed.get_type())
    }

    /// Returns `expr` with every sub-expression annotated with its type.
    pub fn annotate(&self, expr: &Expr) -> Result<TypedExpr, Error> {
        match self.walk(expr, &mut FailFast)? {
            Synthesized::Typed(typed) => Ok(typed),
            Synthesized::Poisoned(_) => {
                unreachable!("nodes are only poisoned after an error has been reported")
            }
        }
    }

    /// Like `annotate`, but reports every error instead of the first.
    pub fn check_all(&self, expr: &Expr) -> Result<TypedExpr, Vec<Error>> {
        let mut collector = Collector::default();
        let root = self.walk(expr, &mut collector);

        match root {
            Ok(Synthesized::Typed(typed)) if collector.errors.is_empty() => Ok(typed),
            Ok(_) => Err(collector.errors),
            Err(error) => Err(vec![error]),
        }
    }

    // Post-order walk on an explicit stack. Children are pushed in reverse
    // so the left operand is always checked, and reported, first.
    fn walk<R: Reporter>(&self, root: &Expr, reporter: &mut R) -> Result<Synthesized, Error> {
        let mut tasks = vec![Task::Visit(root, 1)];
        let mut values: Vec<Synthesized> = vec![];

        while let Some(task) = tasks.pop() {
            match task {
                Task::Visit(expr, depth) => {
                    if let Some(limit) = self.options.max_depth {
                        if depth > limit {
                            reporter.report(MK_ERROR!(
                                ErrorImpl::NestingTooDeep { depth, limit },
                                expr.get_span()
                            ))?;
                            values.push(Synthesized::Poisoned(None));
                            continue;
                        }
                    }

                    tasks.push(Task::Reduce(expr));
                    for child in expr.children().rev() {
                        tasks.push(Task::Visit(child, depth + 1));
                    }
                }
                Task::Reduce(expr) => {
                    let value = reduce(expr, &mut values, reporter)?;
                    values.push(value);
                }
            }
        }

        Ok(values
            .pop()
            .expect("the root is synthesized once the walk is done"))
    }
}

fn reduce<R: Reporter>(
    expr: &Expr,
    values: &mut Vec<Synthesized>,
    reporter: &mut R,
) -> Result<Synthesized, Error> {
    let span = expr.get_span();

    match &expr.kind {
        ExprKind::Literal(literal) => Ok(Synthesized::Typed(TypedExpr::new(
            TypedExprKind::Literal(literal.clone()),
            literal_rule(literal),
            span.clone(),
        ))),
        ExprKind::Arithmetic(binary) => reduce_binary(
            binary,
            span,
            values,
            reporter,
            arithmetic_rule,
            None,
            TypedExprKind::Arithmetic,
        ),
        ExprKind::Comparison(binary) => reduce_binary(
            binary,
            span,
            values,
            reporter,
            comparison_rule,
            Some(TypeTag::Boolean),
            TypedExprKind::Comparison,
        ),
        ExprKind::Logical(binary) => reduce_binary(
            binary,
            span,
            values,
            reporter,
            logical_rule,
            Some(TypeTag::Boolean),
            TypedExprKind::Logical,
        ),
        ExprKind::Grouped(_) => Ok(match pop_operand(values) {
            Synthesized::Typed(inner) => {
                let ty = inner.get_type();
                Synthesized::Typed(TypedExpr::new(
                    TypedExprKind::Grouped(TypedGroupedExpr {
                        inner: Box::new(inner),
                    }),
                    ty,
                    span.clone(),
                ))
            }
            poisoned => poisoned,
        }),
    }
}

#[allow(clippy::too_many_arguments)]
fn reduce_binary<Op: Copy, R: Reporter>(
    binary: &BinaryExpr<Op>,
    span: &Span,
    values: &mut Vec<Synthesized>,
    reporter: &mut R,
    rule: fn(Op, TypeTag, TypeTag) -> Result<TypeTag, ErrorImpl>,
    fixed_type: Option<TypeTag>,
    build: fn(TypedBinaryExpr<Op>) -> TypedExprKind,
) -> Result<Synthesized, Error> {
    let right = pop_operand(values);
    let left = pop_operand(values);

    let (left_type, right_type) = match (left.get_type(), right.get_type()) {
        (Some(left_type), Some(right_type)) => (left_type, right_type),
        _ => return Ok(Synthesized::Poisoned(fixed_type)),
    };

    let ty = match rule(binary.operator, left_type, right_type) {
        Ok(ty) => ty,
        Err(kind) => {
            reporter.report(MK_ERROR!(kind, span))?;
            return Ok(Synthesized::Poisoned(fixed_type));
        }
    };

    Ok(match (left, right) {
        (Synthesized::Typed(left), Synthesized::Typed(right)) => Synthesized::Typed(TypedExpr::new(
            build(TypedBinaryExpr {
                left: Box::new(left),
                operator: binary.operator,
                right: Box::new(right),
            }),
            ty,
            span.clone(),
        )),
        _ => Synthesized::Poisoned(Some(ty)),
    })
}

fn pop_operand(values: &mut Vec<Synthesized>) -> Synthesized {
    values
        .pop()
        .expect("operands are synthesized before their parent")
}

/// Returns the type of `expr`, or the first type error found.
pub fn type_check_expr(expr: &Expr) -> Result<TypeTag, Error> {
    TypeChecker::default().check(expr)
}

/// Returns `expr` annotated with the type of every sub-expression, or the
/// first type error found.
pub fn type_check(expr: &Expr) -> Result<TypedExpr, Error> {
    TypeChecker::default().annotate(expr)
}

/// Returns the annotated tree, or every type error in the tree.
pub fn type_check_all(expr: &Expr) -> Result<TypedExpr, Vec<Error>> {
    TypeChecker::default().check_all(expr)
}
