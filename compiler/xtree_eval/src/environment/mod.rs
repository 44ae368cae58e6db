//! Parameter bindings for evaluation.
//!
//! Parameters are looked up by name. Reading a parameter also checks the
//! bound value against the parameter's declared type, so both backends see
//! the same operand values.

use rustc_hash::FxHashMap;

use xtree_ir::{Name, Property, Ty, Value};

use crate::errors::{EvalError, EvalResult};

/// Values bound to parameter names.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    bindings: FxHashMap<Name, Value>,
}

impl Environment {
    /// No bindings; enough for trees without parameters.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Bind `name`, returning the previous value if any.
    pub fn bind(&mut self, name: &str, value: Value) -> Option<Value> {
        self.bindings.insert(Name::from(name), value)
    }

    /// Builder form of [`bind`](Self::bind).
    #[must_use]
    pub fn with(mut self, name: &str, value: Value) -> Self {
        self.bind(name, value);
        self
    }

    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Read a parameter, checking the bound value against its declared type.
pub(crate) fn parameter_value(env: &Environment, name: &Name, ty: &Ty) -> EvalResult {
    let value = env
        .lookup(name)
        .ok_or_else(|| EvalError::UnboundParameter { name: name.clone() })?;
    if !value.inhabits(ty) {
        return Err(EvalError::ArgumentTypeMismatch {
            name: name.clone(),
            expected: ty.clone(),
            found: value.natural_ty(),
        });
    }
    Ok(value.clone())
}

/// Read a property through its getter.
pub(crate) fn property_value(property: &Property) -> EvalResult {
    let getter = property
        .getter()
        .ok_or_else(|| EvalError::UnreadableProperty {
            owner: property.owner().clone(),
            name: property.name().clone(),
        })?;
    let value = getter();
    if !value.inhabits(property.ty()) {
        return Err(EvalError::PropertyTypeMismatch {
            owner: property.owner().clone(),
            name: property.name().clone(),
            expected: property.ty().clone(),
            found: value.natural_ty(),
        });
    }
    Ok(value)
}
