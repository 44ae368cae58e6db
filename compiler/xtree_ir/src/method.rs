//! User-supplied equality functions and lifted-result conversions.
//!
//! Both are held by `Arc` so nodes can share them, and so
//! [`ComparisonExpr::update`](crate::ComparisonExpr::update) can tell "the
//! same conversion" from "an equal-looking conversion" by identity.

use std::fmt;
use std::sync::Arc;

use crate::ty::{Name, Ty};
use crate::value::Value;

type MethodBody = dyn Fn(&Value, &Value) -> Value + Send + Sync;
type ConversionBody = dyn Fn(Option<bool>) -> bool + Send + Sync;

/// Shared handle to a [`UserMethod`].
pub type MethodRef = Arc<UserMethod>;

/// Shared handle to a [`Conversion`].
pub type ConversionRef = Arc<Conversion>;

/// A user-defined equality operator.
///
/// The declared signature is what the factory validates; the body receives
/// the operand values exactly as evaluated (unwrapped when the call is
/// lifted over nullable operands).
pub struct UserMethod {
    name: Name,
    params: Vec<Ty>,
    returns: Ty,
    body: Arc<MethodBody>,
}

impl UserMethod {
    pub fn new(
        name: &str,
        params: Vec<Ty>,
        returns: Ty,
        body: impl Fn(&Value, &Value) -> Value + Send + Sync + 'static,
    ) -> MethodRef {
        Arc::new(UserMethod {
            name: name.into(),
            params,
            returns,
            body: Arc::new(body),
        })
    }

    /// A well-formed `(param, param) -> bool` equality method.
    pub fn predicate(
        name: &str,
        param: Ty,
        body: impl Fn(&Value, &Value) -> bool + Send + Sync + 'static,
    ) -> MethodRef {
        Self::new(name, vec![param.clone(), param], Ty::Bool, move |l, r| {
            Value::Bool(body(l, r))
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn params(&self) -> &[Ty] {
        &self.params
    }

    pub fn returns(&self) -> &Ty {
        &self.returns
    }

    /// Whether a call on operands of these types is lifted: each nullable
    /// operand is unwrapped into its non-nullable parameter.
    pub fn lifts_over(&self, left: &Ty, right: &Ty) -> bool {
        let [left_param, right_param] = self.params() else {
            return false;
        };
        left.lifts_into(left_param) && right.lifts_into(right_param)
    }

    pub fn invoke(&self, left: &Value, right: &Value) -> Value {
        (self.body)(left, right)
    }
}

impl fmt::Debug for UserMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserMethod")
            .field("name", &self.name)
            .field("params", &self.params)
            .field("returns", &self.returns)
            .finish_non_exhaustive()
    }
}

/// Maps the outcome of a lifted method comparison to the final boolean.
///
/// The input is `Some(answer)` when the method ran, already in the sense of
/// the node's operator, and `None` when a null operand short-circuited the
/// call under `lift_to_null`. The `None` answer is the same for `==` and
/// `!=`.
pub struct Conversion {
    name: Name,
    body: Arc<ConversionBody>,
}

impl Conversion {
    pub fn new(
        name: &str,
        body: impl Fn(Option<bool>) -> bool + Send + Sync + 'static,
    ) -> ConversionRef {
        Arc::new(Conversion {
            name: name.into(),
            body: Arc::new(body),
        })
    }

    /// The conversion attached to lifted method comparisons by default:
    /// the method's answer passes through, a null result reads as `false`.
    pub fn null_as_false() -> ConversionRef {
        Self::new("null_as_false", |result| result.unwrap_or(false))
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn apply(&self, result: Option<bool>) -> bool {
        (self.body)(result)
    }
}

impl fmt::Debug for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Conversion")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
