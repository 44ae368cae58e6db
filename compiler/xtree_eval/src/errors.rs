//! Evaluation errors.
//!
//! Comparison rules themselves are total; these errors come from the
//! operands the surrounding expression system hands them (unbound or
//! mistyped parameters, unreadable properties) or from a user method that
//! does not honor its declared signature.

use xtree_ir::{Name, Ty, Value};

/// Result of evaluating an expression.
pub type EvalResult = Result<Value, EvalError>;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("parameter '{name}' is not bound")]
    UnboundParameter { name: Name },

    #[error("parameter '{name}' expects a value of type '{expected}', got '{found}'")]
    ArgumentTypeMismatch { name: Name, expected: Ty, found: Ty },

    #[error("property '{owner}.{name}' cannot be read")]
    UnreadableProperty { owner: Name, name: Name },

    #[error("property '{owner}.{name}' is declared '{expected}' but produced '{found}'")]
    PropertyTypeMismatch {
        owner: Name,
        name: Name,
        expected: Ty,
        found: Ty,
    },

    #[error("equality method '{method}' returned '{found}' instead of 'bool'")]
    MethodReturnedNonBool { method: Name, found: Ty },
}
