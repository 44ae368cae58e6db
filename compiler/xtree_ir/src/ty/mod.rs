//! Static types of expression nodes.
//!
//! Primitive types are plain variants. Enum and class types are nominal:
//! two `EnumTy::new("Color")` calls produce two distinct types, and equality
//! is pointer identity of the shared definition.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Shared, immutable identifier text.
pub type Name = Arc<str>;

/// The static type of an expression.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Ty {
    // Value types
    Bool,
    Char,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    Decimal,
    Enum(EnumTy),

    // Reference types
    Str,
    Class(ClassTy),
    /// Root reference type; every reference type is assignable to it.
    Object,

    /// Nullable form of a value type. Never wraps a reference type or
    /// another nullable; use [`Ty::nullable`] to build one.
    Nullable(Arc<Ty>),
}

impl Ty {
    /// Nullable form of this type.
    ///
    /// Reference types and nullable types are already nullable and are
    /// returned unchanged.
    #[must_use]
    pub fn nullable(self) -> Ty {
        if self.is_value_type() {
            Ty::Nullable(Arc::new(self))
        } else {
            self
        }
    }

    /// Strip one level of nullability.
    pub fn non_nullable(&self) -> &Ty {
        match self {
            Ty::Nullable(inner) => inner,
            other => other,
        }
    }

    pub fn is_nullable(&self) -> bool {
        matches!(self, Ty::Nullable(_))
    }

    /// Non-nullable value type (primitive or enum).
    pub fn is_value_type(&self) -> bool {
        !self.is_reference_type() && !self.is_nullable()
    }

    pub fn is_reference_type(&self) -> bool {
        matches!(self, Ty::Str | Ty::Class(_) | Ty::Object)
    }

    /// Nullable value type or reference type: may hold `null`.
    pub fn admits_null(&self) -> bool {
        self.is_nullable() || self.is_reference_type()
    }

    /// Whether a value of type `source` can be used where `self` is expected
    /// without conversion.
    ///
    /// Identical types are always assignable. Beyond that only reference
    /// assignability applies: `Object` accepts every reference type and a
    /// class accepts its subclasses. Value types never convert implicitly,
    /// not even into their nullable form.
    pub fn is_assignable_from(&self, source: &Ty) -> bool {
        if self == source {
            return true;
        }
        match (self, source) {
            (Ty::Object, src) => src.is_reference_type(),
            (Ty::Class(target), Ty::Class(src)) => src.derives_from(target),
            _ => false,
        }
    }

    /// Whether an operand of this nullable type reaches `param` only after
    /// unwrapping, i.e. a call through `param` is lifted.
    pub fn lifts_into(&self, param: &Ty) -> bool {
        self.is_nullable()
            && param.is_value_type()
            && !param.is_assignable_from(self)
            && param.is_assignable_from(self.non_nullable())
    }
}

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ty::Bool => f.write_str("bool"),
            Ty::Char => f.write_str("char"),
            Ty::I8 => f.write_str("i8"),
            Ty::I16 => f.write_str("i16"),
            Ty::I32 => f.write_str("i32"),
            Ty::I64 => f.write_str("i64"),
            Ty::U8 => f.write_str("u8"),
            Ty::U16 => f.write_str("u16"),
            Ty::U32 => f.write_str("u32"),
            Ty::U64 => f.write_str("u64"),
            Ty::F32 => f.write_str("f32"),
            Ty::F64 => f.write_str("f64"),
            Ty::Decimal => f.write_str("decimal"),
            Ty::Enum(e) => f.write_str(e.name()),
            Ty::Str => f.write_str("str"),
            Ty::Class(c) => f.write_str(c.name()),
            Ty::Object => f.write_str("object"),
            Ty::Nullable(inner) => write!(f, "{inner}?"),
        }
    }
}

#[derive(Debug)]
struct EnumDef {
    name: Name,
}

/// A nominal enum type. Values carry their ordinal.
#[derive(Clone, Debug)]
pub struct EnumTy(Arc<EnumDef>);

impl EnumTy {
    pub fn new(name: &str) -> Self {
        EnumTy(Arc::new(EnumDef { name: name.into() }))
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }
}

impl PartialEq for EnumTy {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for EnumTy {}

impl Hash for EnumTy {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.0).hash(state);
    }
}

#[derive(Debug)]
struct ClassDef {
    name: Name,
    base: Option<ClassTy>,
}

/// A nominal user class, optionally deriving from a base class.
#[derive(Clone, Debug)]
pub struct ClassTy(Arc<ClassDef>);

impl ClassTy {
    pub fn new(name: &str) -> Self {
        ClassTy(Arc::new(ClassDef {
            name: name.into(),
            base: None,
        }))
    }

    pub fn derived(name: &str, base: &ClassTy) -> Self {
        ClassTy(Arc::new(ClassDef {
            name: name.into(),
            base: Some(base.clone()),
        }))
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn base(&self) -> Option<&ClassTy> {
        self.0.base.as_ref()
    }

    /// `self` is `ancestor` or inherits from it.
    pub fn derives_from(&self, ancestor: &ClassTy) -> bool {
        let mut current = Some(self);
        while let Some(class) = current {
            if class == ancestor {
                return true;
            }
            current = class.base();
        }
        false
    }
}

impl PartialEq for ClassTy {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for ClassTy {}

impl Hash for ClassTy {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.0).hash(state);
    }
}
