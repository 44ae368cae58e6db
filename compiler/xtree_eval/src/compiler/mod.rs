//! Closure compilation.
//!
//! A tree is translated once into nested closures. For every comparison the
//! resolution is derived at translation time and the matching rule from
//! [`semantics`](crate::semantics) is captured, so running the result never
//! re-examines operand types.
//!
//! Compiled code owns clones of everything it needs (constant values,
//! parameter names, method and conversion handles) and does not borrow the
//! source tree.

mod cache;

use std::fmt;
use std::sync::Arc;

use xtree_ir::{ComparisonExpr, ComparisonOp, Expr, ExprRef, Ty, Value};
use xtree_stack::ensure_sufficient_stack;
use xtree_types::{resolution_of, Resolution};

use crate::environment::{parameter_value, property_value, Environment};
use crate::errors::{EvalError, EvalResult};
use crate::semantics::{lifted_equal, method_compare, reference_equal, rule_fn};

pub use cache::{CacheStats, CompileCache};

/// Compiled code for an arbitrary node.
pub type CompiledFn = dyn Fn(&Environment) -> EvalResult + Send + Sync;

/// Compiled code for a comparison node.
pub type PredicateFn = dyn Fn(&Environment) -> Result<bool, EvalError> + Send + Sync;

/// A compiled expression together with its static type.
#[derive(Clone)]
pub struct CompiledExpr {
    code: Arc<CompiledFn>,
    ty: Ty,
}

impl CompiledExpr {
    pub fn invoke(&self, env: &Environment) -> EvalResult {
        (self.code)(env)
    }

    pub fn ty(&self) -> &Ty {
        &self.ty
    }
}

impl fmt::Debug for CompiledExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledExpr")
            .field("ty", &self.ty)
            .finish_non_exhaustive()
    }
}

/// A compiled comparison, callable any number of times.
#[derive(Clone)]
pub struct CompiledComparison {
    code: Arc<PredicateFn>,
    op: ComparisonOp,
}

impl CompiledComparison {
    pub fn invoke(&self, env: &Environment) -> Result<bool, EvalError> {
        (self.code)(env)
    }

    pub fn op(&self) -> ComparisonOp {
        self.op
    }
}

impl fmt::Debug for CompiledComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledComparison")
            .field("op", &self.op)
            .finish_non_exhaustive()
    }
}

/// Compile any expression.
#[tracing::instrument(level = "debug", skip_all)]
pub fn compile(expr: &ExprRef) -> CompiledExpr {
    CompiledExpr {
        code: compile_expr(expr),
        ty: expr.ty(),
    }
}

/// Compile a comparison node into a predicate.
#[tracing::instrument(level = "debug", skip_all, fields(op = %node.op()))]
pub fn compile_comparison(node: &Arc<ComparisonExpr>) -> CompiledComparison {
    CompiledComparison {
        code: compile_predicate(node),
        op: node.op(),
    }
}

fn compile_expr(expr: &Expr) -> Arc<CompiledFn> {
    ensure_sufficient_stack(|| compile_expr_inner(expr))
}

fn compile_expr_inner(expr: &Expr) -> Arc<CompiledFn> {
    match expr {
        Expr::Constant(c) => {
            let value = c.value().clone();
            Arc::new(move |_: &Environment| -> EvalResult { Ok(value.clone()) })
        }
        Expr::Default(ty) => {
            let value = Value::default_for(ty);
            Arc::new(move |_: &Environment| -> EvalResult { Ok(value.clone()) })
        }
        Expr::Parameter(p) => {
            let name = p.name().clone();
            let ty = p.ty().clone();
            Arc::new(move |env: &Environment| parameter_value(env, &name, &ty))
        }
        Expr::Property(p) => {
            let property = p.clone();
            Arc::new(move |_: &Environment| property_value(&property))
        }
        Expr::Comparison(node) => {
            let predicate = compile_predicate(node);
            Arc::new(move |env: &Environment| -> EvalResult { predicate(env).map(Value::Bool) })
        }
    }
}

fn compile_predicate(node: &ComparisonExpr) -> Arc<PredicateFn> {
    let left = compile_expr(node.left());
    let right = compile_expr(node.right());
    let op = node.op();
    let resolution = resolution_of(node);

    tracing::trace!(path = resolution.path_name(), %op, "compiling comparison");

    match resolution {
        Resolution::Builtin {
            rule,
            lifted: false,
        } => {
            let equal = rule_fn(rule);
            binary(left, right, move |l, r| Ok(op.apply(equal(l, r))))
        }
        Resolution::Builtin { rule, lifted: true } => {
            let equal = rule_fn(rule);
            binary(left, right, move |l, r| {
                Ok(op.apply(lifted_equal(l, r, equal)))
            })
        }
        Resolution::Reference => {
            binary(left, right, move |l, r| Ok(op.apply(reference_equal(l, r))))
        }
        Resolution::Method { method, lifted } => {
            let conversion = node.conversion().cloned();
            let lift_to_null = node.lift_to_null();
            binary(left, right, move |l, r| {
                method_compare(op, &method, conversion.as_deref(), lifted, lift_to_null, l, r)
            })
        }
    }
}

/// Evaluate both operands left to right, then apply `compare`.
fn binary(
    left: Arc<CompiledFn>,
    right: Arc<CompiledFn>,
    compare: impl Fn(&Value, &Value) -> Result<bool, EvalError> + Send + Sync + 'static,
) -> Arc<PredicateFn> {
    Arc::new(move |env: &Environment| {
        ensure_sufficient_stack(|| {
            let l = left(env)?;
            let r = right(env)?;
            compare(&l, &r)
        })
    })
}
