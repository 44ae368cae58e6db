//! The comparison rule table.
//!
//! Every value-level equality decision lives here, and both backends call
//! into it: the interpreter on each evaluation, the compiler once per node to
//! pick the function its closure will call. Keeping one table is what makes
//! the two backends agree.
//!
//! The value rules answer in the Equal sense and `ComparisonOp::apply` turns
//! that into the node's operator. The method path applies the operator
//! itself, before the conversion, so a null short-circuit under
//! `lift_to_null` yields the conversion's answer for `==` and `!=` alike.

use std::cmp::Ordering;
use std::sync::Arc;

use xtree_ir::{ComparisonExpr, ComparisonOp, Conversion, UserMethod, Value};
use xtree_types::{BuiltinRule, Resolution};

use crate::errors::EvalError;

/// Equality on two non-null operand values of the same type.
pub type EqualityFn = fn(&Value, &Value) -> bool;

/// The equality function for a built-in rule.
pub fn rule_fn(rule: BuiltinRule) -> EqualityFn {
    match rule {
        BuiltinRule::Bool => bool_equal,
        BuiltinRule::Char => char_equal,
        BuiltinRule::Integer => integer_equal,
        BuiltinRule::Float => float_equal,
        BuiltinRule::Decimal => decimal_equal,
        BuiltinRule::Enum => enum_equal,
    }
}

fn bool_equal(left: &Value, right: &Value) -> bool {
    matches!((left, right), (Value::Bool(a), Value::Bool(b)) if a == b)
}

fn char_equal(left: &Value, right: &Value) -> bool {
    matches!((left, right), (Value::Char(a), Value::Char(b)) if a == b)
}

fn integer_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::I8(a), Value::I8(b)) => a == b,
        (Value::I16(a), Value::I16(b)) => a == b,
        (Value::I32(a), Value::I32(b)) => a == b,
        (Value::I64(a), Value::I64(b)) => a == b,
        (Value::U8(a), Value::U8(b)) => a == b,
        (Value::U16(a), Value::U16(b)) => a == b,
        (Value::U32(a), Value::U32(b)) => a == b,
        (Value::U64(a), Value::U64(b)) => a == b,
        _ => false,
    }
}

/// IEEE-754 equality (`NaN != NaN`, `-0.0 == 0.0`).
fn float_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::F32(a), Value::F32(b)) => a.partial_cmp(b) == Some(Ordering::Equal),
        (Value::F64(a), Value::F64(b)) => a.partial_cmp(b) == Some(Ordering::Equal),
        _ => false,
    }
}

/// Numeric equality, so `1.0 == 1.00`.
fn decimal_equal(left: &Value, right: &Value) -> bool {
    matches!((left, right), (Value::Decimal(a), Value::Decimal(b)) if a == b)
}

fn enum_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (
            Value::Enum { ty: ta, ordinal: a },
            Value::Enum { ty: tb, ordinal: b },
        ) => ta == tb && a == b,
        _ => false,
    }
}

/// Reference identity: `null` equals `null`, an instance equals only itself.
pub fn reference_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Str(a), Value::Str(b)) => Arc::ptr_eq(a, b),
        (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
        _ => false,
    }
}

/// Null guard for lifted built-in comparisons.
///
/// If either operand is null the operands are equal exactly when both are;
/// the underlying rule only sees non-null values.
#[inline]
pub fn lifted_equal(left: &Value, right: &Value, equal: EqualityFn) -> bool {
    match (left.is_null(), right.is_null()) {
        (false, false) => equal(left, right),
        (left_null, right_null) => left_null && right_null,
    }
}

/// Compare through a user method, answering for `op`.
///
/// For a lifted call a null operand never reaches the method. Under
/// `lift_to_null` the conversion decides from a null result and the operator
/// is not applied. Otherwise the operands are equal exactly when both are
/// null. When the method runs on a lifted call, its answer for `op` passes
/// through the conversion.
pub fn method_compare(
    op: ComparisonOp,
    method: &UserMethod,
    conversion: Option<&Conversion>,
    lifted: bool,
    lift_to_null: bool,
    left: &Value,
    right: &Value,
) -> Result<bool, EvalError> {
    if lifted && (left.is_null() || right.is_null()) {
        if lift_to_null {
            return Ok(convert(conversion, None));
        }
        return Ok(op.apply(left.is_null() && right.is_null()));
    }

    let result = method.invoke(left, right);
    let equal = result
        .as_bool()
        .ok_or_else(|| EvalError::MethodReturnedNonBool {
            method: method.name().clone(),
            found: result.natural_ty(),
        })?;

    let answer = op.apply(equal);
    Ok(if lifted {
        convert(conversion, Some(answer))
    } else {
        answer
    })
}

fn convert(conversion: Option<&Conversion>, result: Option<bool>) -> bool {
    match conversion {
        Some(conversion) => conversion.apply(result),
        None => result.unwrap_or(false),
    }
}

/// Compare two evaluated operands of `node` with the node's operator.
pub fn compare(
    resolution: &Resolution,
    node: &ComparisonExpr,
    left: &Value,
    right: &Value,
) -> Result<bool, EvalError> {
    let op = node.op();
    match resolution {
        Resolution::Builtin {
            rule,
            lifted: false,
        } => Ok(op.apply(rule_fn(*rule)(left, right))),
        Resolution::Builtin { rule, lifted: true } => {
            Ok(op.apply(lifted_equal(left, right, rule_fn(*rule))))
        }
        Resolution::Reference => Ok(op.apply(reference_equal(left, right))),
        Resolution::Method { method, lifted } => method_compare(
            op,
            method,
            node.conversion().map(Arc::as_ref),
            *lifted,
            node.lift_to_null(),
            left,
            right,
        ),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests use unwrap to panic on unexpected state")]
mod tests;
