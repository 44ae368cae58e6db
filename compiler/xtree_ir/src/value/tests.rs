use pretty_assertions::assert_eq;

use super::*;

#[test]
fn natural_types() {
    assert_eq!(Value::U16(3).natural_ty(), Ty::U16);
    assert_eq!(Value::string("x").natural_ty(), Ty::Str);
    assert_eq!(Value::Null.natural_ty(), Ty::Object);

    let class = ClassTy::new("Widget");
    assert_eq!(Value::object(&class).natural_ty(), Ty::Class(class));
}

#[test]
fn null_inhabits_only_nullable_slots() {
    assert!(Value::Null.inhabits(&Ty::I32.nullable()));
    assert!(Value::Null.inhabits(&Ty::Str));
    assert!(!Value::Null.inhabits(&Ty::I32));
}

#[test]
fn values_inhabit_their_nullable_form() {
    assert!(Value::I32(4).inhabits(&Ty::I32));
    assert!(Value::I32(4).inhabits(&Ty::I32.nullable()));
    assert!(!Value::I32(4).inhabits(&Ty::I64));
    assert!(Value::string("s").inhabits(&Ty::Object));

    let base = ClassTy::new("Shape");
    let derived = ClassTy::derived("Circle", &base);
    assert!(Value::object(&derived).inhabits(&Ty::Class(base.clone())));
    assert!(!Value::object(&base).inhabits(&Ty::Class(derived)));
}

#[test]
fn defaults() {
    assert_eq!(Value::default_for(&Ty::I64).to_string(), "0");
    assert_eq!(Value::default_for(&Ty::Bool).to_string(), "false");
    assert!(Value::default_for(&Ty::Str).is_null());
    assert!(Value::default_for(&Ty::F32.nullable()).is_null());
    assert_eq!(Value::default_for(&Ty::Char).to_string(), "'\\0'");
}

#[test]
fn object_identity() {
    let class = ClassTy::new("Widget");
    let a = ObjectRef::new(&class);
    let b = ObjectRef::new(&class);
    assert!(a.ptr_eq(&a.clone()));
    assert!(!a.ptr_eq(&b));
}

#[test]
fn display() {
    assert_eq!(Value::string("bar").to_string(), "\"bar\"");
    assert_eq!(Value::Null.to_string(), "null");
    assert_eq!(Value::enum_value(&EnumTy::new("Color"), 2).to_string(), "Color(2)");
    assert_eq!(Value::object(&ClassTy::new("Widget")).to_string(), "value(Widget)");
}
