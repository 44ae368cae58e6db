//! xtree Types - comparison resolution and node factories.
//!
//! - [`resolve`]: decide the equality semantics for an operand type pair
//! - [`resolution_of`]: re-derive that decision from a finished node
//! - [`make_equal`] / [`make_not_equal`] / [`make_comparison`]: validating
//!   factories that produce immutable `ComparisonExpr` nodes

mod factory;
mod resolve;

pub use factory::{
    make_comparison, make_equal, make_equal_with, make_not_equal, make_not_equal_with,
    ComparisonOptions,
};
pub use resolve::{
    resolution_of, resolve, resolve_builtin, resolve_method, BuiltinRule, Resolution,
};
