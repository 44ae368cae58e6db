//! Tree-walking evaluation.
//!
//! The interpreter evaluates a tree directly. For each comparison it
//! re-derives the resolution from the node's stored fields and asks the
//! shared rule table for the answer, so nothing is precomputed.

use xtree_ir::{ComparisonExpr, Expr, Value};
use xtree_stack::ensure_sufficient_stack;
use xtree_types::resolution_of;

use crate::environment::{parameter_value, property_value, Environment};
use crate::errors::{EvalError, EvalResult};
use crate::semantics;

/// Evaluates expression trees against a set of parameter bindings.
pub struct Interpreter<'env> {
    env: &'env Environment,
}

impl<'env> Interpreter<'env> {
    pub fn new(env: &'env Environment) -> Self {
        Interpreter { env }
    }

    /// Evaluate any node, growing the stack for deeply nested trees.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn eval(&self, expr: &Expr) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(expr))
    }

    fn eval_inner(&self, expr: &Expr) -> EvalResult {
        match expr {
            Expr::Constant(c) => Ok(c.value().clone()),
            Expr::Default(ty) => Ok(Value::default_for(ty)),
            Expr::Parameter(p) => parameter_value(self.env, p.name(), p.ty()),
            Expr::Property(p) => property_value(p),
            Expr::Comparison(node) => self.eval_comparison(node).map(Value::Bool),
        }
    }

    /// Evaluate a comparison node to its boolean answer.
    ///
    /// The left operand is evaluated before the right one; an error in
    /// either stops evaluation.
    pub fn eval_comparison(&self, node: &ComparisonExpr) -> Result<bool, EvalError> {
        let left = self.eval(node.left())?;
        let right = self.eval(node.right())?;
        let resolution = resolution_of(node);
        semantics::compare(&resolution, node, &left, &right)
    }
}
