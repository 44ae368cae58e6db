//! Expression nodes.
//!
//! Nodes are immutable and shared through [`ExprRef`]. A node may appear as
//! an operand of any number of parents; trees never contain cycles because a
//! parent can only be built from already-existing children.

use std::fmt;
use std::sync::Arc;

use crate::comparison::ComparisonExpr;
use crate::error::{ExprError, Mismatch};
use crate::ty::{Name, Ty};
use crate::value::Value;

/// Shared handle to an expression node.
pub type ExprRef = Arc<Expr>;

/// Reads the current value of a property.
pub type Getter = Arc<dyn Fn() -> Value + Send + Sync>;

/// An expression node.
#[derive(Clone, Debug)]
pub enum Expr {
    Constant(Constant),
    /// The default value of a type.
    Default(Ty),
    Parameter(Parameter),
    Property(Property),
    Comparison(Arc<ComparisonExpr>),
}

/// A typed constant.
#[derive(Clone, Debug)]
pub struct Constant {
    value: Value,
    ty: Ty,
}

impl Constant {
    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn ty(&self) -> &Ty {
        &self.ty
    }
}

/// A named parameter, bound when the tree is evaluated.
#[derive(Clone, Debug)]
pub struct Parameter {
    name: Name,
    ty: Ty,
}

impl Parameter {
    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn ty(&self) -> &Ty {
        &self.ty
    }
}

/// A static property read, `Owner.Name`.
///
/// A property without a getter is write-only: it designates a location but
/// cannot produce a value.
#[derive(Clone)]
pub struct Property {
    owner: Name,
    name: Name,
    ty: Ty,
    getter: Option<Getter>,
}

impl Property {
    pub fn owner(&self) -> &Name {
        &self.owner
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn ty(&self) -> &Ty {
        &self.ty
    }

    pub fn getter(&self) -> Option<&Getter> {
        self.getter.as_ref()
    }
}

impl fmt::Debug for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("owner", &self.owner)
            .field("name", &self.name)
            .field("ty", &self.ty)
            .field("readable", &self.getter.is_some())
            .finish()
    }
}

impl Expr {
    /// Constant typed by its value. An untyped `null` is an `object`.
    pub fn constant(value: Value) -> ExprRef {
        let ty = value.natural_ty();
        Arc::new(Expr::Constant(Constant { value, ty }))
    }

    /// Constant with an explicit type, e.g. `Constant(null, i32?)` or
    /// `Constant(42, i32?)`.
    pub fn typed_constant(value: Value, ty: Ty) -> Result<ExprRef, ExprError> {
        if !value.inhabits(&ty) {
            return Err(Mismatch::ConstantType {
                value: value.natural_ty(),
                ty,
            }
            .into());
        }
        Ok(Arc::new(Expr::Constant(Constant { value, ty })))
    }

    pub fn default_of(ty: Ty) -> ExprRef {
        Arc::new(Expr::Default(ty))
    }

    pub fn parameter(ty: Ty, name: &str) -> ExprRef {
        Arc::new(Expr::Parameter(Parameter {
            name: name.into(),
            ty,
        }))
    }

    pub fn property(
        owner: &str,
        name: &str,
        ty: Ty,
        getter: impl Fn() -> Value + Send + Sync + 'static,
    ) -> ExprRef {
        Arc::new(Expr::Property(Property {
            owner: owner.into(),
            name: name.into(),
            ty,
            getter: Some(Arc::new(getter)),
        }))
    }

    /// A property with only a setter.
    pub fn write_only_property(owner: &str, name: &str, ty: Ty) -> ExprRef {
        Arc::new(Expr::Property(Property {
            owner: owner.into(),
            name: name.into(),
            ty,
            getter: None,
        }))
    }

    pub fn comparison(node: Arc<ComparisonExpr>) -> ExprRef {
        Arc::new(Expr::Comparison(node))
    }

    /// Static result type.
    pub fn ty(&self) -> Ty {
        match self {
            Expr::Constant(c) => c.ty.clone(),
            Expr::Default(ty) => ty.clone(),
            Expr::Parameter(p) => p.ty.clone(),
            Expr::Property(p) => p.ty.clone(),
            Expr::Comparison(node) => node.ty(),
        }
    }

    /// Whether evaluating this node produces a value.
    pub fn can_read(&self) -> bool {
        match self {
            Expr::Property(p) => p.getter.is_some(),
            Expr::Constant(_) | Expr::Default(_) | Expr::Parameter(_) | Expr::Comparison(_) => {
                true
            }
        }
    }

    /// None of these node kinds expand into simpler nodes.
    pub fn can_reduce(&self) -> bool {
        false
    }

    /// A node that cannot reduce reduces to itself.
    pub fn reduce(self: &Arc<Self>) -> ExprRef {
        Arc::clone(self)
    }

    /// Reduce, insisting that reduction is possible.
    pub fn reduce_and_check(self: &Arc<Self>) -> Result<ExprRef, ExprError> {
        if !self.can_reduce() {
            return Err(ExprError::MustBeReducible);
        }
        Ok(self.reduce())
    }
}

impl From<Arc<ComparisonExpr>> for Expr {
    fn from(node: Arc<ComparisonExpr>) -> Self {
        Expr::Comparison(node)
    }
}
