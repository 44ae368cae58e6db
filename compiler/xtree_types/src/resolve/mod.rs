//! Comparison resolution.
//!
//! Resolution decides, once, which equality semantics apply to a pair of
//! operand types: a built-in value rule (possibly lifted over nullable
//! operands), reference identity, or a user method (possibly lifted).
//!
//! The same decision is re-derived from a finished node's fields by
//! [`resolution_of`], so evaluators never keep a second copy of these rules.

use xtree_ir::{ComparisonExpr, ComparisonOp, Mismatch, MethodRef, OperandSide, Ty};

/// Built-in value equality rules, one per primitive family.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BuiltinRule {
    Bool,
    Char,
    /// Signed and unsigned integers of every width.
    Integer,
    /// IEEE-754 equality: `NaN` is unequal to everything, `+0.0 == -0.0`.
    Float,
    Decimal,
    /// Enums compare by ordinal.
    Enum,
}

impl BuiltinRule {
    /// Rule for a non-nullable value type; `None` for reference types.
    pub fn for_value_type(ty: &Ty) -> Option<BuiltinRule> {
        match ty {
            Ty::Bool => Some(BuiltinRule::Bool),
            Ty::Char => Some(BuiltinRule::Char),
            Ty::I8 | Ty::I16 | Ty::I32 | Ty::I64 | Ty::U8 | Ty::U16 | Ty::U32 | Ty::U64 => {
                Some(BuiltinRule::Integer)
            }
            Ty::F32 | Ty::F64 => Some(BuiltinRule::Float),
            Ty::Decimal => Some(BuiltinRule::Decimal),
            Ty::Enum(_) => Some(BuiltinRule::Enum),
            Ty::Str | Ty::Class(_) | Ty::Object | Ty::Nullable(_) => None,
        }
    }
}

/// The equality semantics selected for a comparison.
#[derive(Clone, Debug)]
pub enum Resolution {
    /// Built-in value rule. `lifted` when both operands are nullable: a null
    /// operand decides the result without consulting the rule.
    Builtin { rule: BuiltinRule, lifted: bool },
    /// Reference identity; `null` equals only `null`.
    Reference,
    /// User method. `lifted` when nullable operands are unwrapped into the
    /// method's non-nullable parameters.
    Method { method: MethodRef, lifted: bool },
}

impl Resolution {
    /// Short label for logs.
    pub fn path_name(&self) -> &'static str {
        match self {
            Resolution::Builtin { lifted: false, .. } => "builtin",
            Resolution::Builtin { lifted: true, .. } => "lifted builtin",
            Resolution::Reference => "reference",
            Resolution::Method { lifted: false, .. } => "method",
            Resolution::Method { lifted: true, .. } => "lifted method",
        }
    }
}

/// Built-in resolution for two operand types.
///
/// Operands must have identical types, or both be reference types with one
/// assignable to the other.
pub fn resolve_builtin(op: ComparisonOp, left: &Ty, right: &Ty) -> Result<Resolution, Mismatch> {
    if left == right {
        return Ok(builtin_for(left));
    }
    if left.is_reference_type()
        && right.is_reference_type()
        && (left.is_assignable_from(right) || right.is_assignable_from(left))
    {
        return Ok(Resolution::Reference);
    }
    Err(Mismatch::NoBuiltinEquality {
        op,
        left: left.clone(),
        right: right.clone(),
    })
}

/// Validate `method` against the operand types.
///
/// The method must take two parameters and return `bool`. Each parameter
/// must accept its operand directly, or, when both operands are nullable
/// value types, accept the operand's underlying type (a lifted call).
pub fn resolve_method(method: &MethodRef, left: &Ty, right: &Ty) -> Result<Resolution, Mismatch> {
    let [left_param, right_param] = method.params() else {
        return Err(Mismatch::MethodArity {
            method: method.name().clone(),
            count: method.params().len(),
        });
    };
    if *method.returns() != Ty::Bool {
        return Err(Mismatch::MethodReturn {
            method: method.name().clone(),
            returns: method.returns().clone(),
        });
    }

    if left_param.is_assignable_from(left) && right_param.is_assignable_from(right) {
        return Ok(Resolution::Method {
            method: method.clone(),
            lifted: false,
        });
    }

    if method.lifts_over(left, right) {
        return Ok(Resolution::Method {
            method: method.clone(),
            lifted: true,
        });
    }

    let fits =
        |param: &Ty, operand: &Ty| param.is_assignable_from(operand) || operand.lifts_into(param);
    let (side, param, operand) = if !fits(left_param, left) {
        (OperandSide::Left, left_param, left)
    } else if !fits(right_param, right) {
        (OperandSide::Right, right_param, right)
    } else if !left.is_nullable() {
        // One side direct, the other lifted: lifting needs both nullable.
        (OperandSide::Left, left_param, left)
    } else {
        (OperandSide::Right, right_param, right)
    };
    Err(Mismatch::MethodOperand {
        method: method.name().clone(),
        side,
        param: param.clone(),
        operand: operand.clone(),
    })
}

/// Full resolution: the explicit method if one is given, built-in otherwise.
pub fn resolve(
    op: ComparisonOp,
    left: &Ty,
    right: &Ty,
    method: Option<&MethodRef>,
) -> Result<Resolution, Mismatch> {
    match method {
        Some(method) => resolve_method(method, left, right),
        None => resolve_builtin(op, left, right),
    }
}

/// Re-derive the resolution of a constructed node from its stored fields.
///
/// Infallible: the node was validated when it was built, and `update` keeps
/// operand types within the resolution path the node was built with.
pub fn resolution_of(node: &ComparisonExpr) -> Resolution {
    match node.method() {
        Some(method) => Resolution::Method {
            method: method.clone(),
            lifted: node.is_lifted(),
        },
        None => {
            let left = node.left().ty();
            let right = node.right().ty();
            if left.is_reference_type() || right.is_reference_type() {
                Resolution::Reference
            } else {
                builtin_for(&left)
            }
        }
    }
}

fn builtin_for(ty: &Ty) -> Resolution {
    match BuiltinRule::for_value_type(ty.non_nullable()) {
        Some(rule) => Resolution::Builtin {
            rule,
            lifted: ty.is_nullable(),
        },
        None => Resolution::Reference,
    }
}
