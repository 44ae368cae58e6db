//! The binary comparison node (`==` / `!=`).
//!
//! A `ComparisonExpr` stores exactly what resolution decided: the operator,
//! both operands, the optional user method and conversion, and the
//! `lift_to_null` flag. Evaluators re-derive the comparison rule from these
//! fields; nothing else is cached on the node.
//!
//! Build nodes through the factories in `xtree_types`, which validate
//! operands before calling `ComparisonExpr::assemble`.

use std::fmt;
use std::sync::Arc;

use crate::error::{ExprError, Mismatch, OperandSide};
use crate::expr::ExprRef;
use crate::method::{ConversionRef, MethodRef};
use crate::ty::Ty;

/// Equality operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ComparisonOp {
    Equal,
    NotEqual,
}

impl ComparisonOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            ComparisonOp::Equal => "==",
            ComparisonOp::NotEqual => "!=",
        }
    }

    /// Turn an Equal-sense answer into this operator's answer.
    ///
    /// `NotEqual` has no semantics of its own: it is always the negation of
    /// the Equal resolution.
    #[inline]
    pub const fn apply(self, equal: bool) -> bool {
        match self {
            ComparisonOp::Equal => equal,
            ComparisonOp::NotEqual => !equal,
        }
    }
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// Resolved fields of a comparison node, as produced by the factory.
///
/// Only the validating factories in `xtree_types` may build these.
#[doc(hidden)]
#[derive(Clone, Debug)]
pub struct ComparisonParts {
    pub op: ComparisonOp,
    pub left: ExprRef,
    pub right: ExprRef,
    pub lift_to_null: bool,
    pub method: Option<MethodRef>,
    pub conversion: Option<ConversionRef>,
}

/// An immutable `left == right` or `left != right` node.
#[derive(Debug)]
pub struct ComparisonExpr {
    op: ComparisonOp,
    left: ExprRef,
    right: ExprRef,
    lift_to_null: bool,
    method: Option<MethodRef>,
    conversion: Option<ConversionRef>,
}

impl ComparisonExpr {
    /// Assemble a node from already-resolved parts.
    ///
    /// Factory use only: nothing here re-checks the parts, so callers
    /// outside the validating factories can build nodes no evaluator
    /// accepts.
    #[doc(hidden)]
    pub fn assemble(parts: ComparisonParts) -> Arc<Self> {
        let ComparisonParts {
            op,
            left,
            right,
            lift_to_null,
            method,
            conversion,
        } = parts;
        Arc::new(ComparisonExpr {
            op,
            left,
            right,
            lift_to_null,
            method,
            conversion,
        })
    }

    pub fn op(&self) -> ComparisonOp {
        self.op
    }

    pub fn left(&self) -> &ExprRef {
        &self.left
    }

    pub fn right(&self) -> &ExprRef {
        &self.right
    }

    pub fn method(&self) -> Option<&MethodRef> {
        self.method.as_ref()
    }

    pub fn conversion(&self) -> Option<&ConversionRef> {
        self.conversion.as_ref()
    }

    pub fn lift_to_null(&self) -> bool {
        self.lift_to_null
    }

    /// Result type. Equality is never lifted to `bool?`.
    pub fn ty(&self) -> Ty {
        Ty::Bool
    }

    /// The user method is called through nullable operands unwrapped into
    /// its non-nullable parameters.
    pub fn is_lifted(&self) -> bool {
        self.method
            .as_ref()
            .is_some_and(|method| method.lifts_over(&self.left.ty(), &self.right.ty()))
    }

    /// Comparison nodes are leaves of reduction.
    pub fn can_reduce(&self) -> bool {
        false
    }

    /// Replace the operands and conversion.
    ///
    /// Returns this very node when all three arguments are identical to the
    /// current ones. Otherwise builds a new node with the same operator,
    /// method and `lift_to_null`. The method is not re-resolved; replacement
    /// operands only have to keep the current operand types (a reference
    /// operand may be replaced by any assignable reference). A conversion
    /// is accepted only when the method is called lifted.
    pub fn update(
        self: &Arc<Self>,
        left: ExprRef,
        conversion: Option<ConversionRef>,
        right: ExprRef,
    ) -> Result<Arc<Self>, ExprError> {
        if Arc::ptr_eq(&left, &self.left)
            && Arc::ptr_eq(&right, &self.right)
            && same_conversion(conversion.as_ref(), self.conversion.as_ref())
        {
            return Ok(Arc::clone(self));
        }

        check_replacement(OperandSide::Left, &self.left, &left)?;
        check_replacement(OperandSide::Right, &self.right, &right)?;

        let updated = ComparisonExpr {
            op: self.op,
            left,
            right,
            lift_to_null: self.lift_to_null,
            method: self.method.clone(),
            conversion,
        };
        if updated.conversion.is_some() && !updated.is_lifted() {
            return Err(Mismatch::ConversionNotAllowed.into());
        }

        tracing::trace!(op = %self.op, "rebuilt comparison node");

        Ok(Arc::new(updated))
    }
}

fn same_conversion(a: Option<&ConversionRef>, b: Option<&ConversionRef>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        _ => false,
    }
}

fn check_replacement(
    side: OperandSide,
    current: &ExprRef,
    replacement: &ExprRef,
) -> Result<(), ExprError> {
    if Arc::ptr_eq(current, replacement) {
        return Ok(());
    }
    if !replacement.can_read() {
        return Err(ExprError::UnreadableOperand { side });
    }
    let expected = current.ty();
    let found = replacement.ty();
    if expected == found || (expected.is_reference_type() && expected.is_assignable_from(&found))
    {
        return Ok(());
    }
    Err(Mismatch::UpdateOperand {
        side,
        expected,
        found,
    }
    .into())
}
