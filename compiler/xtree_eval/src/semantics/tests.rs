use xtree_ir::{ClassTy, Decimal, EnumTy, Ty};

use super::*;

fn float(a: f64, b: f64) -> bool {
    rule_fn(BuiltinRule::Float)(&Value::F64(a), &Value::F64(b))
}

#[test]
fn nan_is_unequal_to_itself() {
    assert!(!float(f64::NAN, f64::NAN));
    assert!(!float(f64::NAN, 0.0));
    let f32_equal = rule_fn(BuiltinRule::Float);
    assert!(!f32_equal(&Value::F32(f32::NAN), &Value::F32(f32::NAN)));
}

#[test]
fn signed_zeros_are_equal() {
    assert!(float(0.0, -0.0));
}

#[test]
fn infinities_equal_only_themselves() {
    assert!(float(f64::INFINITY, f64::INFINITY));
    assert!(!float(f64::INFINITY, f64::NEG_INFINITY));
    assert!(!float(f64::INFINITY, f64::MAX));
}

#[test]
fn integers_compare_within_width() {
    let equal = rule_fn(BuiltinRule::Integer);
    assert!(equal(&Value::U64(u64::MAX), &Value::U64(u64::MAX)));
    assert!(!equal(&Value::I8(-1), &Value::I8(1)));
    // Mixed widths never reach the rule; if they did they are unequal
    assert!(!equal(&Value::I32(1), &Value::I64(1)));
}

#[test]
fn decimals_compare_numerically() {
    let equal = rule_fn(BuiltinRule::Decimal);
    let one = Decimal::new(10, 1);
    let one_again = Decimal::new(100, 2);
    assert!(equal(&Value::Decimal(one), &Value::Decimal(one_again)));
    assert!(!equal(&Value::Decimal(Decimal::MIN), &Value::Decimal(Decimal::MAX)));
}

#[test]
fn enums_compare_by_ordinal() {
    let color = EnumTy::new("Color");
    let equal = rule_fn(BuiltinRule::Enum);
    assert!(equal(&Value::enum_value(&color, 0), &Value::enum_value(&color, 0)));
    assert!(!equal(&Value::enum_value(&color, 0), &Value::enum_value(&color, 1)));
}

#[test]
fn chars_and_bools() {
    assert!(rule_fn(BuiltinRule::Char)(&Value::Char('\u{ffff}'), &Value::Char('\u{ffff}')));
    assert!(!rule_fn(BuiltinRule::Bool)(&Value::Bool(true), &Value::Bool(false)));
}

#[test]
fn references_compare_by_identity() {
    let bar = Value::string("bar");
    assert!(reference_equal(&bar, &bar.clone()));
    assert!(!reference_equal(&bar, &Value::string("bar")));
    assert!(reference_equal(&Value::Null, &Value::Null));
    assert!(!reference_equal(&bar, &Value::Null));

    let class = ClassTy::new("Widget");
    let x = Value::object(&class);
    assert!(reference_equal(&x, &x.clone()));
    assert!(!reference_equal(&x, &Value::object(&class)));
}

#[test]
fn lifted_null_guard() {
    let equal = rule_fn(BuiltinRule::Integer);
    assert!(lifted_equal(&Value::Null, &Value::Null, equal));
    assert!(!lifted_equal(&Value::Null, &Value::I32(0), equal));
    assert!(!lifted_equal(&Value::I32(0), &Value::Null, equal));
    assert!(lifted_equal(&Value::I32(5), &Value::I32(5), equal));

    let float = rule_fn(BuiltinRule::Float);
    assert!(!lifted_equal(&Value::F64(f64::NAN), &Value::F64(f64::NAN), float));
}

#[test]
fn method_result_is_authoritative() {
    // Everything is equal to everything
    let always = UserMethod::predicate("always", Ty::I32, |_, _| true);
    let (one, two) = (Value::I32(1), Value::I32(2));
    let compare = |op| method_compare(op, &always, None, false, true, &one, &two);
    assert_eq!(compare(ComparisonOp::Equal), Ok(true));
    assert_eq!(compare(ComparisonOp::NotEqual), Ok(false));
}

#[test]
fn lifted_method_skips_null_operands() {
    let unreachable = UserMethod::predicate("never_called", Ty::I32, |_, _| {
        panic!("method must not see null operands")
    });
    let conversion = Conversion::null_as_false();
    let compare = |op, lift_to_null, left: &Value, right: &Value| {
        method_compare(op, &unreachable, Some(&*conversion), true, lift_to_null, left, right)
    };

    // lift_to_null: the null result goes through the conversion, for either operator
    for op in [ComparisonOp::Equal, ComparisonOp::NotEqual] {
        assert_eq!(compare(op, true, &Value::Null, &Value::Null), Ok(false));
        assert_eq!(compare(op, true, &Value::Null, &Value::I32(1)), Ok(false));
    }

    // Without lift_to_null, null operands compare like lifted built-ins
    assert_eq!(compare(ComparisonOp::Equal, false, &Value::Null, &Value::Null), Ok(true));
    assert_eq!(compare(ComparisonOp::Equal, false, &Value::Null, &Value::I32(1)), Ok(false));
    assert_eq!(compare(ComparisonOp::NotEqual, false, &Value::Null, &Value::I32(1)), Ok(true));
}

#[test]
fn custom_conversion_maps_null_result() {
    let mod_ten = UserMethod::predicate("mod_ten", Ty::I32, |l, r| match (l, r) {
        (Value::I32(a), Value::I32(b)) => a % 10 == b % 10,
        _ => false,
    });
    let null_as_true = Conversion::new("null_as_true", |r| r.unwrap_or(true));
    let compare = |op, left: &Value, right: &Value| {
        method_compare(op, &mod_ten, Some(&*null_as_true), true, true, left, right)
    };

    assert_eq!(compare(ComparisonOp::Equal, &Value::Null, &Value::I32(3)), Ok(true));
    assert_eq!(compare(ComparisonOp::NotEqual, &Value::Null, &Value::I32(3)), Ok(true));

    // The method ran; its answer for the operator passes through
    assert_eq!(compare(ComparisonOp::Equal, &Value::I32(13), &Value::I32(3)), Ok(true));
    assert_eq!(compare(ComparisonOp::NotEqual, &Value::I32(13), &Value::I32(3)), Ok(false));
}

#[test]
fn non_bool_method_result_is_an_error() {
    let liar = UserMethod::new("liar", vec![Ty::I32, Ty::I32], Ty::Bool, |_, _| Value::I32(1));
    let one = Value::I32(1);
    let err = method_compare(ComparisonOp::Equal, &liar, None, false, true, &one, &one)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "equality method 'liar' returned 'i32' instead of 'bool'"
    );
}
