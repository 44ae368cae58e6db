//! Mode-selecting entry points.

use std::sync::Arc;

use xtree_ir::{ComparisonExpr, ExprRef};

use crate::compiler::{compile, compile_comparison};
use crate::environment::Environment;
use crate::errors::{EvalError, EvalResult};
use crate::eval_mode::EvalMode;
use crate::interpreter::Interpreter;

/// Evaluate any expression in the given mode.
pub fn evaluate(expr: &ExprRef, mode: EvalMode, env: &Environment) -> EvalResult {
    match mode {
        EvalMode::Compiled => compile(expr).invoke(env),
        EvalMode::Interpreted => Interpreter::new(env).eval(expr),
    }
}

/// Evaluate a comparison node in the given mode.
pub fn evaluate_comparison(
    node: &Arc<ComparisonExpr>,
    mode: EvalMode,
    env: &Environment,
) -> Result<bool, EvalError> {
    tracing::debug!(?mode, op = %node.op(), "evaluating comparison");
    match mode {
        EvalMode::Compiled => compile_comparison(node).invoke(env),
        EvalMode::Interpreted => Interpreter::new(env).eval_comparison(node),
    }
}

/// Method-call form of [`evaluate_comparison`].
pub trait Evaluate {
    /// Evaluate without parameter bindings.
    fn evaluate(&self, mode: EvalMode) -> Result<bool, EvalError> {
        self.evaluate_in(mode, &Environment::empty())
    }

    fn evaluate_in(&self, mode: EvalMode, env: &Environment) -> Result<bool, EvalError>;
}

impl Evaluate for Arc<ComparisonExpr> {
    fn evaluate_in(&self, mode: EvalMode, env: &Environment) -> Result<bool, EvalError> {
        evaluate_comparison(self, mode, env)
    }
}
