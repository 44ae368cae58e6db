//! xtree IR - expression node model.
//!
//! This crate holds the data the rest of the workspace operates on:
//! - `Ty`: static types (primitives, enums, classes, nullable forms)
//! - `Value`: runtime values
//! - `Expr` / `ExprRef`: immutable, shareable expression nodes
//! - `ComparisonExpr`: the `==` / `!=` node with structural `update`
//! - `UserMethod` / `Conversion`: user-supplied equality and lifted-result mapping
//! - `ExprError`: construction-time failures
//!
//! Resolution and the validating factories live in `xtree_types`;
//! evaluation lives in `xtree_eval`.

mod comparison;
mod error;
mod expr;
mod method;
mod render;
mod ty;
mod value;

pub use comparison::{ComparisonExpr, ComparisonOp, ComparisonParts};
pub use error::{ExprError, Mismatch, OperandSide};
pub use expr::{Constant, Expr, ExprRef, Getter, Parameter, Property};
pub use method::{Conversion, ConversionRef, MethodRef, UserMethod};
pub use ty::{ClassTy, EnumTy, Name, Ty};
pub use value::{ObjectRef, Value};

/// Re-exported so downstream crates build decimal values without naming
/// the dependency themselves.
pub use rust_decimal::Decimal;
