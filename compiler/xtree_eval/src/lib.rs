//! xtree Eval - evaluation backends for comparison trees.
//!
//! Two backends share one rule table and must agree on every node:
//! - `Interpreter`: walks the tree, re-deriving each comparison's rule
//! - `compile` / `compile_comparison`: translate the tree into closures once,
//!   choosing each rule at translation time
//! - `CompileCache`: thread-safe per-node cache of compiled comparisons
//!
//! `evaluate` and `evaluate_comparison` pick a backend by `EvalMode`.

mod api;
mod compiler;
mod environment;
mod errors;
mod eval_mode;
mod interpreter;
pub mod semantics;

pub use api::{evaluate, evaluate_comparison, Evaluate};
pub use compiler::{
    compile, compile_comparison, CacheStats, CompileCache, CompiledComparison, CompiledExpr,
    CompiledFn, PredicateFn,
};
pub use environment::Environment;
pub use errors::{EvalError, EvalResult};
pub use eval_mode::EvalMode;
pub use interpreter::Interpreter;

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests use unwrap to panic on unexpected state")]
mod tests;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times.
/// Enable with `RUST_LOG=xtree_eval=debug` or `RUST_LOG=xtree_types=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
