//! Runtime values produced by evaluating expressions.
//!
//! One variant per primitive width keeps the comparison rules exact: an
//! `I32` never meets an `I64` because the factory only admits operands of
//! identical type. Strings and objects are references; their equality is
//! pointer identity, never content.

use std::fmt;
use std::sync::Arc;

use rust_decimal::Decimal;

use crate::ty::{ClassTy, EnumTy, Ty};

/// A runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    Bool(bool),
    Char(char),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Decimal(Decimal),
    /// Enum value, identified by its ordinal.
    Enum { ty: EnumTy, ordinal: i64 },
    /// Shared string. Two `Str` values are the same string only if they
    /// point at the same allocation.
    Str(Arc<str>),
    Object(ObjectRef),
    /// Absence of a value, for nullable and reference types.
    Null,
}

impl Value {
    /// Allocate a new string instance.
    pub fn string(s: &str) -> Value {
        Value::Str(Arc::from(s))
    }

    /// Allocate a new instance of `class`.
    pub fn object(class: &ClassTy) -> Value {
        Value::Object(ObjectRef::new(class))
    }

    pub fn enum_value(ty: &EnumTy, ordinal: i64) -> Value {
        Value::Enum {
            ty: ty.clone(),
            ordinal,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The most specific type of this value.
    ///
    /// `Null` has no type of its own and reports `Object`, the type of an
    /// untyped null literal.
    pub fn natural_ty(&self) -> Ty {
        match self {
            Value::Bool(_) => Ty::Bool,
            Value::Char(_) => Ty::Char,
            Value::I8(_) => Ty::I8,
            Value::I16(_) => Ty::I16,
            Value::I32(_) => Ty::I32,
            Value::I64(_) => Ty::I64,
            Value::U8(_) => Ty::U8,
            Value::U16(_) => Ty::U16,
            Value::U32(_) => Ty::U32,
            Value::U64(_) => Ty::U64,
            Value::F32(_) => Ty::F32,
            Value::F64(_) => Ty::F64,
            Value::Decimal(_) => Ty::Decimal,
            Value::Enum { ty, .. } => Ty::Enum(ty.clone()),
            Value::Str(_) => Ty::Str,
            Value::Object(obj) => Ty::Class(obj.class().clone()),
            Value::Null => Ty::Object,
        }
    }

    /// Whether this value may be stored in a slot of type `ty`.
    pub fn inhabits(&self, ty: &Ty) -> bool {
        match self {
            Value::Null => ty.admits_null(),
            value => ty.non_nullable().is_assignable_from(&value.natural_ty()),
        }
    }

    /// The default value of `ty`: `null` for types that admit it, zero
    /// otherwise.
    pub fn default_for(ty: &Ty) -> Value {
        match ty {
            Ty::Bool => Value::Bool(false),
            Ty::Char => Value::Char('\0'),
            Ty::I8 => Value::I8(0),
            Ty::I16 => Value::I16(0),
            Ty::I32 => Value::I32(0),
            Ty::I64 => Value::I64(0),
            Ty::U8 => Value::U8(0),
            Ty::U16 => Value::U16(0),
            Ty::U32 => Value::U32(0),
            Ty::U64 => Value::U64(0),
            Ty::F32 => Value::F32(0.0),
            Ty::F64 => Value::F64(0.0),
            Ty::Decimal => Value::Decimal(Decimal::ZERO),
            Ty::Enum(e) => Value::enum_value(e, 0),
            Ty::Str | Ty::Class(_) | Ty::Object | Ty::Nullable(_) => Value::Null,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{v}"),
            Value::Char(c) => write!(f, "'{}'", c.escape_debug()),
            Value::I8(v) => write!(f, "{v}"),
            Value::I16(v) => write!(f, "{v}"),
            Value::I32(v) => write!(f, "{v}"),
            Value::I64(v) => write!(f, "{v}"),
            Value::U8(v) => write!(f, "{v}"),
            Value::U16(v) => write!(f, "{v}"),
            Value::U32(v) => write!(f, "{v}"),
            Value::U64(v) => write!(f, "{v}"),
            Value::F32(v) => write!(f, "{v}"),
            Value::F64(v) => write!(f, "{v}"),
            Value::Decimal(v) => write!(f, "{v}"),
            Value::Enum { ty, ordinal } => write!(f, "{}({ordinal})", ty.name()),
            Value::Str(s) => write!(f, "\"{}\"", s.escape_debug()),
            Value::Object(obj) => write!(f, "value({})", obj.class().name()),
            Value::Null => f.write_str("null"),
        }
    }
}

#[derive(Debug)]
struct Instance {
    class: ClassTy,
}

/// Handle to a class instance. Cloning shares the instance.
#[derive(Clone, Debug)]
pub struct ObjectRef(Arc<Instance>);

impl ObjectRef {
    pub fn new(class: &ClassTy) -> Self {
        ObjectRef(Arc::new(Instance {
            class: class.clone(),
        }))
    }

    pub fn class(&self) -> &ClassTy {
        &self.0.class
    }

    /// Same instance.
    pub fn ptr_eq(&self, other: &ObjectRef) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests;
