//! Construction-time errors.
//!
//! Every way a comparison node can be rejected surfaces here, at the moment
//! the node is built. A node that exists has already passed these checks.

use std::fmt;

use crate::comparison::ComparisonOp;
use crate::ty::{Name, Ty};

/// Which operand of a binary node an error refers to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum OperandSide {
    Left,
    Right,
}

impl OperandSide {
    /// Argument name of this operand in the factory signature.
    pub const fn param_name(self) -> &'static str {
        match self {
            OperandSide::Left => "left",
            OperandSide::Right => "right",
        }
    }
}

impl fmt::Display for OperandSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.param_name())
    }
}

/// Error raised while building or rewriting an expression node.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExprError {
    #[error("{side} operand is missing")]
    NullOperand { side: OperandSide },

    #[error("{side} operand must be readable")]
    UnreadableOperand { side: OperandSide },

    #[error(transparent)]
    TypeMismatch(#[from] Mismatch),

    #[error("expression must be reducible")]
    MustBeReducible,
}

impl ExprError {
    /// The operand an error is attributed to, if any.
    pub fn side(&self) -> Option<OperandSide> {
        match self {
            ExprError::NullOperand { side } | ExprError::UnreadableOperand { side } => Some(*side),
            ExprError::TypeMismatch(
                Mismatch::MethodOperand { side, .. } | Mismatch::UpdateOperand { side, .. },
            ) => Some(*side),
            ExprError::TypeMismatch(_) | ExprError::MustBeReducible => None,
        }
    }

    /// Argument name of the offending operand (`"left"` / `"right"`).
    pub fn param_name(&self) -> Option<&'static str> {
        self.side().map(OperandSide::param_name)
    }
}

/// Why two operand types (or a method and its operands) do not fit.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Mismatch {
    #[error("the binary operator {op} is not defined for the types '{left}' and '{right}'")]
    NoBuiltinEquality {
        op: ComparisonOp,
        left: Ty,
        right: Ty,
    },

    #[error("equality method '{method}' must take exactly 2 parameters, found {count}")]
    MethodArity { method: Name, count: usize },

    #[error("equality method '{method}' must return 'bool', found '{returns}'")]
    MethodReturn { method: Name, returns: Ty },

    #[error(
        "{side} operand of type '{operand}' does not match parameter type '{param}' of '{method}'"
    )]
    MethodOperand {
        method: Name,
        side: OperandSide,
        param: Ty,
        operand: Ty,
    },

    #[error("a conversion is only allowed on a lifted comparison with an equality method")]
    ConversionNotAllowed,

    #[error("value of type '{value}' cannot be stored as '{ty}'")]
    ConstantType { value: Ty, ty: Ty },

    #[error("replacement {side} operand has type '{found}', expected '{expected}'")]
    UpdateOperand {
        side: OperandSide,
        expected: Ty,
        found: Ty,
    },
}
