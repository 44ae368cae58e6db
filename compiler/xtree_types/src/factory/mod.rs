//! Validating factories for comparison nodes.
//!
//! Checks run in a fixed order and stop at the first failure: the left
//! operand must be present and readable, then the right operand, then the
//! operand types must resolve (through the explicit method if one is given).

use std::sync::Arc;

use xtree_ir::{
    ComparisonExpr, ComparisonOp, ComparisonParts, Conversion, ExprError, ExprRef, MethodRef,
    OperandSide,
};

use crate::resolve::{resolve, Resolution};

/// Optional inputs of a comparison factory.
///
/// The default is `lift_to_null = true` with no user method.
#[derive(Clone, Debug)]
pub struct ComparisonOptions {
    pub lift_to_null: bool,
    pub method: Option<MethodRef>,
}

impl Default for ComparisonOptions {
    fn default() -> Self {
        ComparisonOptions {
            lift_to_null: true,
            method: None,
        }
    }
}

impl ComparisonOptions {
    /// Compare through a user-supplied equality method.
    pub fn with_method(method: MethodRef) -> Self {
        ComparisonOptions {
            method: Some(method),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn lift_to_null(mut self, lift_to_null: bool) -> Self {
        self.lift_to_null = lift_to_null;
        self
    }
}

/// Build a validated comparison node.
///
/// `left` and `right` accept either an `ExprRef` or an `Option<ExprRef>`;
/// `None` is reported as [`ExprError::NullOperand`].
#[tracing::instrument(level = "trace", skip_all, fields(%op))]
pub fn make_comparison(
    op: ComparisonOp,
    left: impl Into<Option<ExprRef>>,
    right: impl Into<Option<ExprRef>>,
    options: ComparisonOptions,
) -> Result<Arc<ComparisonExpr>, ExprError> {
    let left = readable_operand(OperandSide::Left, left.into())?;
    let right = readable_operand(OperandSide::Right, right.into())?;

    let left_ty = left.ty();
    let right_ty = right.ty();
    let resolution = resolve(op, &left_ty, &right_ty, options.method.as_ref())?;

    // Nullable operands reaching a non-nullable method go through the
    // default conversion
    let conversion = match resolution {
        Resolution::Method { lifted: true, .. } => Some(Conversion::null_as_false()),
        _ => None,
    };

    tracing::debug!(
        left = %left_ty,
        right = %right_ty,
        path = resolution.path_name(),
        "resolved comparison"
    );

    Ok(ComparisonExpr::assemble(ComparisonParts {
        op,
        left,
        right,
        lift_to_null: options.lift_to_null,
        method: options.method,
        conversion,
    }))
}

/// `left == right` with default options.
pub fn make_equal(
    left: impl Into<Option<ExprRef>>,
    right: impl Into<Option<ExprRef>>,
) -> Result<Arc<ComparisonExpr>, ExprError> {
    make_comparison(ComparisonOp::Equal, left, right, ComparisonOptions::default())
}

/// `left != right` with default options.
pub fn make_not_equal(
    left: impl Into<Option<ExprRef>>,
    right: impl Into<Option<ExprRef>>,
) -> Result<Arc<ComparisonExpr>, ExprError> {
    make_comparison(ComparisonOp::NotEqual, left, right, ComparisonOptions::default())
}

pub fn make_equal_with(
    left: impl Into<Option<ExprRef>>,
    right: impl Into<Option<ExprRef>>,
    options: ComparisonOptions,
) -> Result<Arc<ComparisonExpr>, ExprError> {
    make_comparison(ComparisonOp::Equal, left, right, options)
}

pub fn make_not_equal_with(
    left: impl Into<Option<ExprRef>>,
    right: impl Into<Option<ExprRef>>,
    options: ComparisonOptions,
) -> Result<Arc<ComparisonExpr>, ExprError> {
    make_comparison(ComparisonOp::NotEqual, left, right, options)
}

fn readable_operand(side: OperandSide, operand: Option<ExprRef>) -> Result<ExprRef, ExprError> {
    let operand = operand.ok_or(ExprError::NullOperand { side })?;
    if !operand.can_read() {
        return Err(ExprError::UnreadableOperand { side });
    }
    Ok(operand)
}
